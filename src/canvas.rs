//! Fixed-size RGBA raster that the tank designs are painted onto.
//!
//! Every primitive writes its colour straight into the covered pixels, so a
//! later shape fully replaces whatever an earlier shape left behind, alpha
//! included. Coordinates are signed and shapes are clipped to the canvas.

use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType, PngEncoder},
    ColorType, ImageEncoder, Rgba, RgbaImage,
};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Width and height of every generated texture.
pub const TEXTURE_SIZE: u32 = 32;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Creates a fully transparent 32×32 canvas
    pub fn new() -> Self {
        Self {
            image: RgbaImage::from_pixel(TEXTURE_SIZE, TEXTURE_SIZE, TRANSPARENT),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.image.get_pixel(x, y)
    }

    /// Writes a single pixel, ignoring coordinates outside the canvas
    pub fn put(&mut self, x: i32, y: i32, color: Rgba<u8>) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x < self.width() && y < self.height() {
            self.image.put_pixel(x, y, color);
        }
    }

    /// Fills the rectangle spanned by two corners, both inclusive
    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba<u8>) {
        let (left, right) = (x0.min(x1), x0.max(x1));
        let (top, bottom) = (y0.min(y1), y0.max(y1));
        for y in top..=bottom {
            for x in left..=right {
                self.put(x, y, color);
            }
        }
    }

    /// Draws a one pixel wide line with both endpoints included
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba<u8>) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let step_x = if x0 < x1 { 1 } else { -1 };
        let step_y = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.put(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let doubled = 2 * err;
            if doubled >= dy {
                err += dy;
                x += step_x;
            }
            if doubled <= dx {
                err += dx;
                y += step_y;
            }
        }
    }

    /// Fills the ellipse inscribed in the inclusive bounding box.
    ///
    /// A pixel is covered when its centre lies on or inside the ellipse.
    pub fn fill_ellipse(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba<u8>) {
        let (left, right) = (x0.min(x1), x0.max(x1));
        let (top, bottom) = (y0.min(y1), y0.max(y1));

        let radius_x = (right - left + 1) as f32 / 2.0;
        let radius_y = (bottom - top + 1) as f32 / 2.0;
        let center_x = left as f32 + radius_x;
        let center_y = top as f32 + radius_y;

        for y in top..=bottom {
            for x in left..=right {
                let dx = (x as f32 + 0.5 - center_x) / radius_x;
                let dy = (y as f32 + 0.5 - center_y) / radius_y;
                if dx * dx + dy * dy <= 1.0 {
                    self.put(x, y, color);
                }
            }
        }
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    /// Encodes the canvas as an RGBA PNG at `path`, replacing any existing file
    pub fn save_png(self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        write_png(&self.image, &mut writer)
            .with_context(|| format!("Failed to write PNG {}", path.display()))?;
        writer
            .flush()
            .with_context(|| format!("Failed to flush PNG {}", path.display()))?;
        Ok(())
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

// Encode image data as PNG with compression
fn write_png<W: Write>(image: &RgbaImage, w: W) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, FilterType::Adaptive);
    encoder.write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgba8)?;
    Ok(())
}
