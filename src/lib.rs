//! Procedural pixel-art textures for the experience tank tiers.
//!
//! Two independent designs share one renderer: [`detailed`] paints the
//! barrel-and-pipe tank with per-material surface patterns, [`simple`] paints
//! a plain glass jar. Both write `experience_tank_<tier>.png` files.

pub mod canvas;
pub mod color;
pub mod detailed;
pub mod render;
pub mod simple;
