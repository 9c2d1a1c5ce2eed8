//! Extension traits on [`image::DynamicImage`].
//!
//! - [`DynamicImageTraitConvert`]: construction from closures and blobs, encoding to blobs.
//! - [`DynamicImageTraitInfo`]: layout introspection and comparison.
//! - [`DynamicImageTraitOperation`]: bit-depth reduction, alpha flattening and per-format normalization.

mod convert;
mod info;
mod operation;

pub use convert::*;
pub use info::*;
pub use operation::*;
#[cfg(any(test, feature = "test"))]
pub use test::*;
