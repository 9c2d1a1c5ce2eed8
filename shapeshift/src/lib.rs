//! Format conversion for JSON/YAML documents and PNG/JPG/WebP/SVG images.
//!
//! The converters live in `shapeshift_data` and `shapeshift_image`; this crate picks the right
//! one for a request ([`router`]), and exposes them over HTTP ([`server`]) with a YAML
//! [`config`].

pub mod config;
pub mod router;
pub mod server;

pub use shapeshift_core::{Blob, ConversionError, ConversionKind, ConversionResult, ErrorKind, FileFormat};
pub use shapeshift_data::convert_data;
pub use shapeshift_image::{convert_image, svg_to_png};
