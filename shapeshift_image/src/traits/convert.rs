use crate::format;
use anyhow::Result;
use image::{DynamicImage, ImageBuffer, Luma, LumaA, Rgb, Rgba};
use shapeshift_core::{Blob, ImageFormat};

pub trait DynamicImageTraitConvert: Sized {
	fn from_fn_l8(width: u32, height: u32, f: impl Fn(u32, u32) -> u8) -> DynamicImage;
	fn from_fn_la8(width: u32, height: u32, f: impl Fn(u32, u32) -> [u8; 2]) -> DynamicImage;
	fn from_fn_rgb8(width: u32, height: u32, f: impl Fn(u32, u32) -> [u8; 3]) -> DynamicImage;
	fn from_fn_rgba8(width: u32, height: u32, f: impl Fn(u32, u32) -> [u8; 4]) -> DynamicImage;
	fn from_blob(blob: &Blob, format: ImageFormat) -> Result<DynamicImage>;
	/// Consumes the image, since encoding may first convert its color layout.
	fn into_blob(self, format: ImageFormat) -> Result<Blob>;
}

impl DynamicImageTraitConvert for DynamicImage {
	fn from_fn_l8(width: u32, height: u32, f: impl Fn(u32, u32) -> u8) -> DynamicImage {
		DynamicImage::ImageLuma8(ImageBuffer::from_fn(width, height, |x, y| Luma([f(x, y)])))
	}

	fn from_fn_la8(width: u32, height: u32, f: impl Fn(u32, u32) -> [u8; 2]) -> DynamicImage {
		DynamicImage::ImageLumaA8(ImageBuffer::from_fn(width, height, |x, y| LumaA(f(x, y))))
	}

	fn from_fn_rgb8(width: u32, height: u32, f: impl Fn(u32, u32) -> [u8; 3]) -> DynamicImage {
		DynamicImage::ImageRgb8(ImageBuffer::from_fn(width, height, |x, y| Rgb(f(x, y))))
	}

	fn from_fn_rgba8(width: u32, height: u32, f: impl Fn(u32, u32) -> [u8; 4]) -> DynamicImage {
		DynamicImage::ImageRgba8(ImageBuffer::from_fn(width, height, |x, y| Rgba(f(x, y))))
	}

	fn from_blob(blob: &Blob, format: ImageFormat) -> Result<DynamicImage> {
		format::decode(blob, format)
	}

	fn into_blob(self, format: ImageFormat) -> Result<Blob> {
		format::encode(self, format)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::traits::DynamicImageTraitInfo;
	use image::GenericImageView;

	#[test]
	fn from_fn_layouts() {
		assert_eq!(DynamicImage::from_fn_l8(3, 2, |x, _| x as u8).channel_count(), 1);
		assert_eq!(DynamicImage::from_fn_la8(3, 2, |x, y| [x as u8, y as u8]).channel_count(), 2);
		assert_eq!(DynamicImage::from_fn_rgb8(3, 2, |_, _| [1, 2, 3]).channel_count(), 3);
		let rgba = DynamicImage::from_fn_rgba8(3, 2, |x, y| [x as u8, y as u8, 0, 255]);
		assert_eq!(rgba.dimensions(), (3, 2));
		assert_eq!(rgba.get_pixel(2, 1).0, [2, 1, 0, 255]);
	}

	#[test]
	fn blob_round_trip() -> Result<()> {
		let image = DynamicImage::from_fn_rgb8(5, 4, |x, y| [(x * 50) as u8, (y * 60) as u8, 128]);
		let blob = image.clone().into_blob(ImageFormat::PNG)?;
		assert_eq!(DynamicImage::from_blob(&blob, ImageFormat::PNG)?, image);
		Ok(())
	}
}
