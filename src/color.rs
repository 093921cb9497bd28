//! Palette colours and the derived shades used for edge highlights and shadows.

use image::Rgba;

/// Opaque colour from 8-bit channels.
pub const fn rgb(r: u8, g: u8, b: u8) -> Rgba<u8> {
    Rgba([r, g, b, 255])
}

/// Colour with an explicit alpha channel.
pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Rgba<u8> {
    Rgba([r, g, b, a])
}

/// Brighten every colour channel by `amount`, saturating at 255.
///
/// Alpha is left untouched.
pub fn lighten(color: Rgba<u8>, amount: u8) -> Rgba<u8> {
    let [r, g, b, a] = color.0;
    Rgba([
        r.saturating_add(amount),
        g.saturating_add(amount),
        b.saturating_add(amount),
        a,
    ])
}

/// Darken every colour channel by `amount`, saturating at 0.
///
/// Alpha is left untouched.
pub fn darken(color: Rgba<u8>, amount: u8) -> Rgba<u8> {
    let [r, g, b, a] = color.0;
    Rgba([
        r.saturating_sub(amount),
        g.saturating_sub(amount),
        b.saturating_sub(amount),
        a,
    ])
}
