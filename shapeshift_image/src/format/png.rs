//! Lossless PNG encoding with maximum compression.

use crate::traits::DynamicImageTraitInfo;
use anyhow::{Context, Result, bail};
use image::{
	DynamicImage, ImageEncoder, ImageFormat,
	codecs::png::{CompressionType, FilterType, PngEncoder},
	load_from_memory_with_format,
};
use shapeshift_core::Blob;

/// Encodes 8- or 16-bit Grey, GreyA, RGB or RGBA images.
pub fn encode(image: &DynamicImage) -> Result<Blob> {
	let bits = image.bits_per_value();
	if bits != 8 && bits != 16 {
		bail!("PNG only supports 8-bit or 16-bit images, got {bits}-bit");
	}

	let mut buffer: Vec<u8> = Vec::new();
	PngEncoder::new_with_quality(&mut buffer, CompressionType::Best, FilterType::Adaptive)
		.write_image(
			image.as_bytes(),
			image.width(),
			image.height(),
			image.extended_color_type(),
		)
		.with_context(|| format!("encoding {} as PNG", image.describe()))?;

	Ok(Blob::from(buffer))
}

pub fn decode(blob: &Blob) -> Result<DynamicImage> {
	load_from_memory_with_format(blob.as_slice(), ImageFormat::Png)
		.with_context(|| format!("decoding PNG image ({} bytes)", blob.len()))
}
