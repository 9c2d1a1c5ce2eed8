//! Lossy WebP encoding through libwebp.

use crate::traits::DynamicImageTraitInfo;
use anyhow::{Context, Result, anyhow, bail};
use image::{DynamicImage, ImageFormat, load_from_memory_with_format};
use shapeshift_core::Blob;

pub const QUALITY: f32 = 85.0;
/// libwebp's slowest and strongest compression effort.
pub const METHOD: i32 = 6;

/// Encodes an 8-bit RGB or RGBA image as lossy WebP.
pub fn encode(image: &DynamicImage, quality: f32, method: i32) -> Result<Blob> {
	let (width, height) = (image.width(), image.height());
	let encoder = match image {
		DynamicImage::ImageRgb8(buffer) => webp::Encoder::from_rgb(buffer.as_raw(), width, height),
		DynamicImage::ImageRgba8(buffer) => webp::Encoder::from_rgba(buffer.as_raw(), width, height),
		_ => bail!("WebP only supports 8-bit RGB or RGBA images, got {:?}", image.color()),
	};

	let mut config = webp::WebPConfig::new().map_err(|()| anyhow!("failed to initialize the WebP encoder config"))?;
	config.lossless = 0;
	config.quality = quality;
	config.method = method;

	let memory = encoder
		.encode_advanced(&config)
		.map_err(|e| anyhow!("libwebp error {e:?}"))
		.with_context(|| format!("encoding {} as WebP (q={quality}, m={method})", image.describe()))?;

	Ok(Blob::from(memory.to_vec()))
}

pub fn decode(blob: &Blob) -> Result<DynamicImage> {
	load_from_memory_with_format(blob.as_slice(), ImageFormat::WebP)
		.with_context(|| format!("decoding WebP image ({} bytes)", blob.len()))
}
