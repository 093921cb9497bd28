//! Simplified tank design: a glass jar on a base with a visible liquid column.

use crate::canvas::Canvas;
use crate::color::{rgb, rgba};
use crate::render::TankIcon;
use image::Rgba;
use log::debug;

/// White glint reflected by the glass and the liquid
pub const GLINT: Rgba<u8> = rgba(255, 255, 255, 150);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpleTier {
    pub name: &'static str,
    /// Cap colour
    pub color: Rgba<u8>,
    pub accent_color: Rgba<u8>,
    pub liquid_color: Rgba<u8>,
    pub glass_color: Rgba<u8>,
    pub base_color: Rgba<u8>,
}

pub const TIERS: [SimpleTier; 4] = [
    SimpleTier {
        name: "100",
        color: rgb(160, 160, 160),
        accent_color: rgb(120, 120, 120),
        liquid_color: rgb(100, 100, 100),
        glass_color: rgba(200, 200, 200, 200),
        base_color: rgb(80, 80, 80),
    },
    SimpleTier {
        name: "500",
        color: rgb(220, 200, 80),
        accent_color: rgb(180, 160, 60),
        liquid_color: rgb(160, 140, 40),
        glass_color: rgba(230, 210, 100, 200),
        base_color: rgb(140, 120, 40),
    },
    SimpleTier {
        name: "1000",
        color: rgb(80, 200, 120),
        accent_color: rgb(60, 180, 100),
        liquid_color: rgb(40, 160, 80),
        glass_color: rgba(100, 210, 140, 200),
        base_color: rgb(40, 140, 80),
    },
    SimpleTier {
        name: "2000",
        color: rgb(80, 120, 200),
        accent_color: rgb(60, 100, 180),
        liquid_color: rgb(40, 80, 160),
        glass_color: rgba(100, 140, 210, 200),
        base_color: rgb(40, 80, 140),
    },
];

impl TankIcon for SimpleTier {
    fn name(&self) -> &str {
        self.name
    }

    fn draw(&self, canvas: &mut Canvas) {
        debug!("Painting simple tank {}", self.name);

        canvas.fill_rect(8, 24, 23, 28, self.base_color);

        // Jar
        canvas.fill_rect(7, 22, 24, 24, self.accent_color);
        canvas.fill_rect(7, 10, 24, 22, self.glass_color);
        canvas.fill_rect(8, 8, 23, 10, self.accent_color);

        canvas.fill_rect(9, 14, 22, 21, self.liquid_color);

        // Neck and cap
        canvas.fill_rect(10, 6, 21, 8, self.accent_color);
        canvas.fill_rect(11, 4, 20, 6, self.color);

        canvas.fill_ellipse(10, 13, 21, 15, self.liquid_color);

        canvas.line(12, 10, 18, 16, GLINT);
        canvas.line(14, 16, 19, 19, GLINT);
    }
}
