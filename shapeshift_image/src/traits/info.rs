//! Layout introspection and comparison helpers for `DynamicImage`.

use anyhow::{Result, bail, ensure};
use image::{DynamicImage, ExtendedColorType};

pub trait DynamicImageTraitInfo {
	/// Bits of a single channel value: 8, 16 or 32 (float).
	fn bits_per_value(&self) -> u8;

	fn channel_count(&self) -> u8;

	fn extended_color_type(&self) -> ExtendedColorType;

	/// Short description for log lines, e.g. `"100x100 Rgba8"`.
	fn describe(&self) -> String;

	/// `true` when there is no alpha channel or every alpha value is at its maximum.
	fn is_opaque(&self) -> bool;

	/// Iterates over the pixels of an 8-bit image as byte slices.
	fn iter_pixels(&self) -> Result<std::slice::ChunksExact<'_, u8>>;

	/// Per-channel mean squared error against `other`, rounded up to one decimal.
	///
	/// Both images must be 8-bit and share size and color type.
	fn diff(&self, other: &DynamicImage) -> Result<Vec<f64>>;

	fn ensure_same_size(&self, other: &DynamicImage) -> Result<()>;

	fn ensure_same_meta(&self, other: &DynamicImage) -> Result<()>;
}

impl DynamicImageTraitInfo for DynamicImage {
	fn bits_per_value(&self) -> u8 {
		(self.color().bits_per_pixel() / u16::from(self.color().channel_count())) as u8
	}

	fn channel_count(&self) -> u8 {
		self.color().channel_count()
	}

	fn extended_color_type(&self) -> ExtendedColorType {
		self.color().into()
	}

	fn describe(&self) -> String {
		format!("{}x{} {:?}", self.width(), self.height(), self.color())
	}

	fn is_opaque(&self) -> bool {
		match self {
			DynamicImage::ImageLumaA8(img) => img.pixels().all(|p| p.0[1] == u8::MAX),
			DynamicImage::ImageRgba8(img) => img.pixels().all(|p| p.0[3] == u8::MAX),
			DynamicImage::ImageLumaA16(img) => img.pixels().all(|p| p.0[1] == u16::MAX),
			DynamicImage::ImageRgba16(img) => img.pixels().all(|p| p.0[3] == u16::MAX),
			DynamicImage::ImageRgba32F(img) => img.pixels().all(|p| p.0[3] >= 1.0),
			_ => !self.color().has_alpha(),
		}
	}

	fn iter_pixels(&self) -> Result<std::slice::ChunksExact<'_, u8>> {
		if self.bits_per_value() != 8 {
			bail!("pixel iteration needs an 8-bit image, got {:?}", self.color());
		}
		Ok(self.as_bytes().chunks_exact(self.channel_count() as usize))
	}

	fn diff(&self, other: &DynamicImage) -> Result<Vec<f64>> {
		self.ensure_same_meta(other)?;

		let channels = self.channel_count() as usize;
		let mut sqr_sum = vec![0u64; channels];
		for (p1, p2) in self.iter_pixels()?.zip(other.iter_pixels()?) {
			for i in 0..channels {
				let d = i64::from(p1[i]) - i64::from(p2[i]);
				sqr_sum[i] += (d * d) as u64;
			}
		}

		let n = f64::from(self.width() * self.height());
		Ok(sqr_sum.iter().map(|v| (10.0 * (*v as f64) / n).ceil() / 10.0).collect())
	}

	fn ensure_same_size(&self, other: &DynamicImage) -> Result<()> {
		ensure!(
			(self.width(), self.height()) == (other.width(), other.height()),
			"image size mismatch: {}x{} vs {}x{}",
			self.width(),
			self.height(),
			other.width(),
			other.height()
		);
		Ok(())
	}

	fn ensure_same_meta(&self, other: &DynamicImage) -> Result<()> {
		self.ensure_same_size(other)?;
		ensure!(
			self.color() == other.color(),
			"color type mismatch: {:?} vs {:?}",
			self.color(),
			other.color()
		);
		Ok(())
	}
}
