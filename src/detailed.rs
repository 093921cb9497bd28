//! Detailed tank design: metal barrel with a trim ring, side pipe, feet,
//! rising bubbles, a material-specific surface pattern and a glass band.

use crate::canvas::Canvas;
use crate::color::{darken, lighten, rgb, rgba};
use crate::render::TankIcon;
use image::Rgba;
use log::debug;

/// Surface pattern painted on the barrel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Material {
    Iron,
    Gold,
    Emerald,
    Diamond,
}

/// Palette of one capacity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailedTier {
    pub name: &'static str,
    pub color: Rgba<u8>,
    pub accent_color: Rgba<u8>,
    pub liquid_color: Rgba<u8>,
    pub liquid_highlight: Rgba<u8>,
    pub gold_color: Rgba<u8>,
    pub gold_highlight: Rgba<u8>,
    pub pipe_color: Rgba<u8>,
    pub pipe_highlight: Rgba<u8>,
    /// Translucent band painted last over the liquid window
    pub glass_color: Rgba<u8>,
    pub material: Material,
}

pub const TIERS: [DetailedTier; 4] = [
    DetailedTier {
        name: "100",
        color: rgb(160, 160, 160),
        accent_color: rgb(100, 100, 100),
        liquid_color: rgb(140, 140, 140),
        liquid_highlight: rgb(180, 180, 180),
        gold_color: rgb(200, 180, 100),
        gold_highlight: rgb(230, 210, 130),
        pipe_color: rgb(180, 180, 180),
        pipe_highlight: rgb(200, 200, 200),
        glass_color: rgba(220, 220, 220, 150),
        material: Material::Iron,
    },
    DetailedTier {
        name: "500",
        color: rgb(220, 200, 80),
        accent_color: rgb(180, 160, 50),
        liquid_color: rgb(200, 180, 60),
        liquid_highlight: rgb(230, 210, 90),
        gold_color: rgb(230, 210, 100),
        gold_highlight: rgb(255, 230, 130),
        pipe_color: rgb(210, 190, 70),
        pipe_highlight: rgb(230, 210, 100),
        glass_color: rgba(240, 220, 100, 150),
        material: Material::Gold,
    },
    DetailedTier {
        name: "1000",
        color: rgb(80, 200, 120),
        accent_color: rgb(50, 160, 80),
        liquid_color: rgb(60, 180, 100),
        liquid_highlight: rgb(100, 220, 140),
        gold_color: rgb(200, 180, 100),
        gold_highlight: rgb(230, 210, 130),
        pipe_color: rgb(70, 190, 110),
        pipe_highlight: rgb(90, 210, 130),
        glass_color: rgba(100, 220, 140, 150),
        material: Material::Emerald,
    },
    DetailedTier {
        name: "2000",
        color: rgb(80, 120, 200),
        accent_color: rgb(50, 80, 160),
        liquid_color: rgb(60, 100, 180),
        liquid_highlight: rgb(100, 140, 220),
        gold_color: rgb(200, 180, 100),
        gold_highlight: rgb(230, 210, 130),
        pipe_color: rgb(70, 110, 190),
        pipe_highlight: rgb(90, 130, 210),
        glass_color: rgba(100, 140, 220, 150),
        material: Material::Diamond,
    },
];

impl TankIcon for DetailedTier {
    fn name(&self) -> &str {
        self.name
    }

    fn draw(&self, canvas: &mut Canvas) {
        debug!("Painting detailed tank {} ({:?})", self.name, self.material);

        let accent_edge = lighten(self.accent_color, 20);
        let body_edge = lighten(self.color, 30);
        let body_shadow = darken(self.color, 20);

        // Base
        canvas.fill_rect(6, 20, 25, 25, self.accent_color);
        canvas.line(6, 20, 25, 20, accent_edge);
        canvas.line(6, 20, 6, 25, accent_edge);

        // Barrel
        canvas.fill_rect(5, 10, 26, 20, self.color);
        canvas.line(5, 10, 26, 10, body_edge);
        canvas.line(5, 10, 5, 20, body_edge);
        canvas.line(26, 10, 26, 20, body_shadow);
        canvas.line(5, 20, 26, 20, body_shadow);

        // Rim and lid
        canvas.fill_rect(6, 8, 25, 10, self.accent_color);
        canvas.line(6, 8, 25, 8, accent_edge);
        canvas.fill_rect(8, 6, 23, 8, self.gold_color);
        canvas.line(8, 6, 23, 6, self.gold_highlight);
        canvas.line(8, 6, 8, 8, self.gold_highlight);

        // Liquid surface
        canvas.fill_ellipse(9, 9, 22, 12, self.liquid_color);
        canvas.fill_ellipse(10, 9, 13, 11, self.liquid_highlight);

        // Trim ring
        canvas.fill_rect(6, 14, 25, 16, self.gold_color);
        canvas.line(6, 14, 25, 14, self.gold_highlight);

        self.draw_pipe(canvas);
        self.draw_feet(canvas, accent_edge);

        // Bubbles rising out of the lid
        for i in 0..3 {
            let x = 12 + i * 3;
            let y = 7 - i;
            canvas.fill_ellipse(x, y, x + 1, y + 1, self.liquid_highlight);
        }

        self.draw_material(canvas);

        canvas.fill_rect(7, 9, 24, 13, self.glass_color);
    }
}

impl DetailedTier {
    fn draw_pipe(&self, canvas: &mut Canvas) {
        canvas.fill_rect(26, 12, 29, 20, self.pipe_color);
        canvas.fill_rect(25, 18, 29, 22, self.pipe_color);
        canvas.fill_rect(23, 20, 25, 22, self.pipe_color);
        canvas.line(26, 12, 26, 20, self.pipe_highlight);
        canvas.line(29, 12, 29, 20, darken(self.pipe_color, 20));
        canvas.line(25, 18, 29, 18, self.pipe_highlight);
    }

    fn draw_feet(&self, canvas: &mut Canvas, edge: Rgba<u8>) {
        for left in [8, 21] {
            canvas.fill_rect(left, 25, left + 2, 28, self.accent_color);
            canvas.line(left, 25, left + 2, 25, edge);
            canvas.line(left, 25, left, 28, edge);
        }
    }

    fn draw_material(&self, canvas: &mut Canvas) {
        match self.material {
            Material::Iron => {
                let grain = darken(self.color, 10);
                for i in 0..3 {
                    canvas.line(8, 12 + i, 23, 12 + i, grain);
                }
            }
            Material::Gold => {
                let grain = darken(self.color, 15);
                for i in 0..2 {
                    canvas.line(9, 12 + i * 2, 22, 12 + i * 2, grain);
                }
            }
            Material::Emerald => {
                let gem = darken(self.color, 20);
                for i in 0..4 {
                    canvas.fill_ellipse(10 + i * 3, 12, 11 + i * 3, 13, gem);
                }
            }
            Material::Diamond => {
                let facet = darken(self.color, 20);
                for i in 0..3 {
                    canvas.line(10 + i * 4, 11, 14 + i * 2, 15, facet);
                    canvas.line(14 + i * 2, 11, 10 + i * 4, 15, facet);
                }
            }
        }
    }
}
