use crate::canvas::Canvas;
use anyhow::Result;
use log::debug;
use std::path::{Path, PathBuf};

/// A tier definition that knows how to paint its own tank
pub trait TankIcon {
    /// Display name, used verbatim in the output filename
    fn name(&self) -> &str;

    /// Paints the tank back to front onto a fresh canvas
    fn draw(&self, canvas: &mut Canvas);
}

/// Filename for the texture of the tier called `name`
pub fn output_file_name(name: &str) -> String {
    format!("experience_tank_{name}.png")
}

/// Paints a tier onto a new canvas without touching the filesystem
pub fn paint<T: TankIcon + ?Sized>(tier: &T) -> Canvas {
    let mut canvas = Canvas::new();
    tier.draw(&mut canvas);
    canvas
}

/// Renders a tier into the current working directory
pub fn render<T: TankIcon + ?Sized>(tier: &T) -> Result<PathBuf> {
    render_tier(tier, Path::new("."))
}

/// Renders a tier into `dir`, overwriting any previous texture of the same name
pub fn render_tier<T: TankIcon + ?Sized>(tier: &T, dir: &Path) -> Result<PathBuf> {
    let filename = output_file_name(tier.name());
    let path = dir.join(&filename);

    debug!("Drawing tank {}", tier.name());
    let canvas = paint(tier);

    debug!("Writing {}", path.display());
    canvas.save_png(&path)?;
    println!("  ✓ Generated {filename}");

    Ok(path)
}

/// Renders every tier in order, stopping at the first failure
pub fn render_all<T: TankIcon>(tiers: &[T], dir: &Path) -> Result<Vec<PathBuf>> {
    tiers.iter().map(|tier| render_tier(tier, dir)).collect()
}
