//! Shared types for the shapeshift converters: the [`Blob`] byte buffer, the format tags and
//! their allow-lists, and the classified [`ConversionError`].

mod error;
pub mod types;

pub use error::*;
pub use types::*;
