//! Color-layout transformations applied before encoding.

use super::info::DynamicImageTraitInfo;
use anyhow::{Result, bail};
use image::{DynamicImage, Luma, Pixel, Rgb};
use imageproc::map::map_pixels;
use shapeshift_core::ImageFormat;

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

pub trait DynamicImageTraitOperation: Sized {
	/// Reduces 16-bit and float images to 8 bits per channel, keeping the channel layout.
	fn into_8bit(self) -> DynamicImage;

	/// Composites an 8-bit image with alpha onto an opaque `background`.
	///
	/// `Rgba8` becomes `Rgb8`, `La8` becomes `L8` (against the background's luma).
	/// Images without alpha are returned unchanged.
	fn into_flattened(self, background: Rgb<u8>) -> Result<DynamicImage>;

	/// Brings the image into a layout the encoder for `format` accepts:
	/// - JPG: 8-bit Grey or RGB, alpha flattened onto white
	/// - WebP: 8-bit RGB or RGBA
	/// - PNG: anything except float
	fn into_encodable(self, format: ImageFormat) -> Result<DynamicImage>;
}

/// `(c * a + bg * (255 - a)) / 255`, rounded.
fn blend(c: u8, bg: u8, a: u8) -> u8 {
	let a = u16::from(a);
	((u16::from(c) * a + u16::from(bg) * (255 - a) + 127) / 255) as u8
}

impl DynamicImageTraitOperation for DynamicImage {
	fn into_8bit(self) -> DynamicImage {
		match self {
			DynamicImage::ImageLuma8(_)
			| DynamicImage::ImageLumaA8(_)
			| DynamicImage::ImageRgb8(_)
			| DynamicImage::ImageRgba8(_) => self,
			DynamicImage::ImageLuma16(_) => DynamicImage::ImageLuma8(self.into_luma8()),
			DynamicImage::ImageLumaA16(_) => DynamicImage::ImageLumaA8(self.into_luma_alpha8()),
			_ if self.color().has_alpha() => DynamicImage::ImageRgba8(self.into_rgba8()),
			_ => DynamicImage::ImageRgb8(self.into_rgb8()),
		}
	}

	fn into_flattened(self, background: Rgb<u8>) -> Result<DynamicImage> {
		match self {
			DynamicImage::ImageRgba8(img) => Ok(DynamicImage::ImageRgb8(map_pixels(&img, |p| {
				let [r, g, b, a] = p.0;
				Rgb([
					blend(r, background[0], a),
					blend(g, background[1], a),
					blend(b, background[2], a),
				])
			}))),
			DynamicImage::ImageLumaA8(img) => {
				let bg = background.to_luma()[0];
				Ok(DynamicImage::ImageLuma8(map_pixels(&img, |p| {
					let [l, a] = p.0;
					Luma([blend(l, bg, a)])
				})))
			}
			_ if !self.color().has_alpha() => Ok(self),
			_ => bail!("flattening needs an 8-bit image, got {:?}", self.color()),
		}
	}

	fn into_encodable(self, format: ImageFormat) -> Result<DynamicImage> {
		let before = self.color();
		let image = match format {
			ImageFormat::JPG => self.into_8bit().into_flattened(WHITE)?,
			ImageFormat::WEBP => match self.into_8bit() {
				image @ DynamicImage::ImageLuma8(_) => DynamicImage::ImageRgb8(image.into_rgb8()),
				image @ DynamicImage::ImageLumaA8(_) => DynamicImage::ImageRgba8(image.into_rgba8()),
				image => image,
			},
			ImageFormat::PNG => {
				if self.bits_per_value() == 32 {
					self.into_8bit()
				} else {
					self
				}
			}
		};
		if image.color() != before {
			log::trace!("converted {before:?} to {:?} for {format}", image.color());
		}
		Ok(image)
	}
}
