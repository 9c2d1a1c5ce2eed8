use super::{jpeg, png, webp};
use crate::traits::DynamicImageTraitOperation;
use anyhow::Result;
use image::DynamicImage;
use shapeshift_core::{Blob, ImageFormat};

/// Normalizes the color layout for `format` and encodes with the fixed per-format settings.
pub fn encode(image: DynamicImage, format: ImageFormat) -> Result<Blob> {
	let image = image.into_encodable(format)?;
	match format {
		ImageFormat::JPG => jpeg::encode(&image, jpeg::QUALITY),
		ImageFormat::PNG => png::encode(&image),
		ImageFormat::WEBP => webp::encode(&image, webp::QUALITY, webp::METHOD),
	}
}

pub fn decode(blob: &Blob, format: ImageFormat) -> Result<DynamicImage> {
	match format {
		ImageFormat::JPG => jpeg::decode(blob),
		ImageFormat::PNG => png::decode(blob),
		ImageFormat::WEBP => webp::decode(blob),
	}
}

/// Guesses the format from the magic bytes. `None` for anything outside the supported set.
pub fn sniff(blob: &Blob) -> Option<ImageFormat> {
	match image::guess_format(blob.as_slice()).ok()? {
		image::ImageFormat::Png => Some(ImageFormat::PNG),
		image::ImageFormat::Jpeg => Some(ImageFormat::JPG),
		image::ImageFormat::WebP => Some(ImageFormat::WEBP),
		_ => None,
	}
}
