//! Raster image re-encoding (PNG, JPG, WebP) and SVG rasterization.
//!
//! The entry points are [`convert_image`] and [`svg_to_png`]. The [`format`] module holds the
//! per-codec encoders and decoders, the [`traits`] module extends [`image::DynamicImage`] with the
//! color-mode normalization each target needs.

mod convert;
pub mod format;
mod svg;
pub mod traits;

pub use convert::*;
pub use svg::*;
