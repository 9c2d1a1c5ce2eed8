//! Raster re-encoding between PNG, JPG and WebP.

use crate::{format, traits::DynamicImageTraitInfo};
use image::DynamicImage;
use shapeshift_core::{Blob, ConversionError, ConversionResult, ImageFormat};

/// Re-encodes `bytes` from `source_format` to `target_format`.
///
/// Both tags are validated (trimmed, case-insensitive, `jpeg` meaning `jpg`) before anything is
/// decoded.
///
/// ```rust
/// use shapeshift_image::convert_image;
///
/// let err = convert_image(b"ignored", "png", "bmp").unwrap_err();
/// assert_eq!(err.to_string(), "unsupported image format 'bmp', use one of: png, jpg, webp");
/// ```
pub fn convert_image(bytes: &[u8], source_format: &str, target_format: &str) -> ConversionResult<Vec<u8>> {
	let source = ImageFormat::try_from_str(source_format)?;
	let target = ImageFormat::try_from_str(target_format)?;
	Ok(convert_image_as(&Blob::from(bytes), source, target)?.into_vec())
}

/// Same as [`convert_image`] with already validated formats.
pub fn convert_image_as(blob: &Blob, source: ImageFormat, target: ImageFormat) -> ConversionResult<Blob> {
	let image = decode_image(blob, source)?;
	log::debug!("decoded {} image: {}", source, image.describe());

	let output = format::encode(image, target).map_err(|source| ConversionError::Encode { format: target, source })?;
	log::debug!("encoded {target} image: {} bytes", output.len());
	Ok(output)
}

/// Decodes as `declared`; if that fails, retries with the format the magic bytes point to.
pub fn decode_image(blob: &Blob, declared: ImageFormat) -> ConversionResult<DynamicImage> {
	let err = match format::decode(blob, declared) {
		Ok(image) => return Ok(image),
		Err(err) => err,
	};

	match format::sniff(blob) {
		Some(actual) if actual != declared => {
			log::warn!("input was declared as {declared} but looks like {actual}, decoding it as {actual}");
			format::decode(blob, actual).map_err(|source| ConversionError::Decode { format: actual, source })
		}
		_ => Err(ConversionError::Decode {
			format: declared,
			source: err,
		}),
	}
}
