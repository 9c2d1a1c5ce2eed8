//! Lossy JPEG encoding.
//!
//! JPEG stores neither transparency nor more than 8 bits per channel, so only `L8` and `Rgb8`
//! images are accepted here. Anything else has to be flattened first.

use crate::traits::DynamicImageTraitInfo;
use anyhow::{Context, Result, bail};
use image::{DynamicImage, ImageEncoder, ImageFormat, codecs::jpeg::JpegEncoder, load_from_memory_with_format};
use shapeshift_core::Blob;

pub const QUALITY: u8 = 85;

pub fn encode(image: &DynamicImage, quality: u8) -> Result<Blob> {
	if image.bits_per_value() != 8 {
		bail!("JPEG only supports 8-bit images");
	}
	if !matches!(image.channel_count(), 1 | 3) {
		bail!("JPEG only supports Grey or RGB images without alpha channel");
	}

	let mut buffer: Vec<u8> = Vec::new();
	JpegEncoder::new_with_quality(&mut buffer, quality)
		.write_image(
			image.as_bytes(),
			image.width(),
			image.height(),
			image.extended_color_type(),
		)
		.with_context(|| format!("encoding {} as JPEG (q={quality})", image.describe()))?;

	Ok(Blob::from(buffer))
}

pub fn decode(blob: &Blob) -> Result<DynamicImage> {
	load_from_memory_with_format(blob.as_slice(), ImageFormat::Jpeg)
		.with_context(|| format!("decoding JPEG image ({} bytes)", blob.len()))
}
