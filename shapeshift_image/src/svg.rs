//! SVG rasterization.
//!
//! Builds without the `svg` feature still expose [`svg_to_png`], which then fails with
//! [`ConversionError::MissingDependency`].

use shapeshift_core::{ConversionError, ConversionResult};

/// Rasterizes an SVG document at its intrinsic size (rounded up to whole pixels) into a PNG.
#[cfg(feature = "svg")]
pub fn svg_to_png(bytes: &[u8]) -> ConversionResult<Vec<u8>> {
	rasterize(bytes).map_err(ConversionError::from)
}

#[cfg(not(feature = "svg"))]
pub fn svg_to_png(_bytes: &[u8]) -> ConversionResult<Vec<u8>> {
	Err(ConversionError::MissingDependency {
		capability: "SVG rasterization",
		feature: "svg",
	})
}

#[cfg(feature = "svg")]
fn rasterize(bytes: &[u8]) -> anyhow::Result<Vec<u8>> {
	use anyhow::{Context, anyhow};
	use resvg::{tiny_skia, usvg};

	let mut options = usvg::Options::default();
	options.fontdb_mut().load_system_fonts();

	let tree = usvg::Tree::from_data(bytes, &options).context("parsing SVG document")?;
	let size = tree.size();
	let (width, height) = (size.width().ceil() as u32, size.height().ceil() as u32);
	let size = tiny_skia::IntSize::from_wh(width, height)
		.ok_or_else(|| anyhow!("the SVG document has an empty size ({}x{})", size.width(), size.height()))?;
	log::debug!("rasterizing SVG at {}x{}", size.width(), size.height());

	let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
		.ok_or_else(|| anyhow!("cannot allocate a {}x{} canvas", size.width(), size.height()))?;
	resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

	pixmap.encode_png().context("encoding rasterized SVG as PNG")
}
