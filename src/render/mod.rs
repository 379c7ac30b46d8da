//! Map rendering.
//!
//! Draws located IPs as triangle markers on an equirectangular world map
//! and saves the result as a PNG with the requested DPI.

mod canvas;
mod font;
mod map;
mod world;

pub use map::{draw_map, render_map, MapOptions, MapSummary};
