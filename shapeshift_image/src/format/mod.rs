//! Encoders and decoders for the supported raster formats.
//!
//! Each codec module validates the color layout it accepts and leaves normalization to
//! [`crate::traits::DynamicImageTraitOperation::into_encodable`]. The `all` module dispatches on
//! [`shapeshift_core::ImageFormat`].

mod all;

pub mod jpeg;
pub mod png;
pub mod webp;
pub use all::*;
