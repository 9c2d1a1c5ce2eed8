//! Format tags understood by the converters.
//!
//! [`FileFormat`] is the full value space of tags a caller may hand in, either explicitly or
//! derived from a file extension. The two pipelines each narrow it down to their own allow-list:
//! [`DataFormat`] for the structured-data converter and [`ImageFormat`] for the raster converter.
//! Narrowing is where validation happens, so an unknown tag is rejected before any bytes are read.
//!
//! # Examples
//!
//! ```rust
//! use shapeshift_core::{DataFormat, FileFormat, ImageFormat};
//!
//! assert_eq!(FileFormat::from_filename("photo.JPEG"), Some(FileFormat::JPG));
//! assert_eq!(ImageFormat::try_from_str("jpeg").unwrap(), ImageFormat::JPG);
//! assert_eq!(DataFormat::try_from_str(" YAML ").unwrap().as_mime_str(), "application/x-yaml");
//! assert!(ImageFormat::try_from_str("bmp").is_err());
//! ```

use crate::ConversionError;
#[cfg(feature = "cli")]
use clap::ValueEnum;
use std::fmt::{Display, Formatter};

/// Every format tag known to the system.
#[allow(clippy::upper_case_acronyms)]
#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FileFormat {
	JSON,
	YAML,
	PNG,
	JPG,
	WEBP,
	SVG,
}

impl FileFormat {
	/// Returns the canonical lowercase tag, e.g. `"jpg"` for both `jpg` and `jpeg`.
	pub fn as_str(&self) -> &'static str {
		match self {
			FileFormat::JSON => "json",
			FileFormat::YAML => "yaml",
			FileFormat::PNG => "png",
			FileFormat::JPG => "jpg",
			FileFormat::WEBP => "webp",
			FileFormat::SVG => "svg",
		}
	}

	/// Returns the canonical file extension, with a leading dot.
	pub fn as_extension(&self) -> &'static str {
		match self {
			FileFormat::JSON => ".json",
			FileFormat::YAML => ".yaml",
			FileFormat::PNG => ".png",
			FileFormat::JPG => ".jpg",
			FileFormat::WEBP => ".webp",
			FileFormat::SVG => ".svg",
		}
	}

	pub fn as_mime_str(&self) -> &'static str {
		match self {
			FileFormat::JSON => "application/json",
			FileFormat::YAML => "application/x-yaml",
			FileFormat::PNG => "image/png",
			FileFormat::JPG => "image/jpeg",
			FileFormat::WEBP => "image/webp",
			FileFormat::SVG => "image/svg+xml",
		}
	}

	/// The pipeline that reads files of this format.
	pub fn kind(&self) -> ConversionKind {
		match self {
			FileFormat::JSON | FileFormat::YAML => ConversionKind::Data,
			FileFormat::PNG | FileFormat::JPG | FileFormat::WEBP => ConversionKind::Image,
			FileFormat::SVG => ConversionKind::Svg,
		}
	}

	/// Parses a tag, ignoring case, surrounding whitespace and a leading dot.
	///
	/// Accepts the aliases `jpeg` and `yml`. Returns `None` for anything else.
	pub fn parse_str(value: &str) -> Option<Self> {
		Some(match value.trim().trim_start_matches('.').to_ascii_lowercase().as_str() {
			"json" => FileFormat::JSON,
			"yaml" | "yml" => FileFormat::YAML,
			"png" => FileFormat::PNG,
			"jpg" | "jpeg" => FileFormat::JPG,
			"webp" => FileFormat::WEBP,
			"svg" => FileFormat::SVG,
			_ => return None,
		})
	}

	/// Derives the format from the extension of `filename`, if it has a known one.
	pub fn from_filename(filename: &str) -> Option<Self> {
		let index = filename.rfind('.')?;
		if filename[index..].contains(['/', '\\']) {
			return None;
		}
		Self::parse_str(&filename[index + 1..])
	}
}

impl Display for FileFormat {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Targets of the structured-data converter.
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DataFormat {
	JSON,
	YAML,
}

impl DataFormat {
	pub const ALLOWED: &'static str = "json, yaml";

	/// Validates `value` against the data allow-list (`json`, `yaml`).
	///
	/// The comparison is case-insensitive and ignores surrounding whitespace; no aliases are accepted.
	pub fn try_from_str(value: &str) -> Result<Self, ConversionError> {
		match value.trim().to_ascii_lowercase().as_str() {
			"json" => Ok(DataFormat::JSON),
			"yaml" => Ok(DataFormat::YAML),
			_ => Err(ConversionError::UnsupportedTarget {
				requested: value.trim().to_string(),
				allowed: Self::ALLOWED,
			}),
		}
	}

	pub fn as_str(&self) -> &'static str {
		FileFormat::from(*self).as_str()
	}

	pub fn as_mime_str(&self) -> &'static str {
		FileFormat::from(*self).as_mime_str()
	}
}

impl From<DataFormat> for FileFormat {
	fn from(format: DataFormat) -> Self {
		match format {
			DataFormat::JSON => FileFormat::JSON,
			DataFormat::YAML => FileFormat::YAML,
		}
	}
}

impl Display for DataFormat {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Formats the raster converter can both decode and encode.
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ImageFormat {
	PNG,
	JPG,
	WEBP,
}

impl ImageFormat {
	pub const ALLOWED: &'static str = "png, jpg, webp";

	/// Validates `value` against the image allow-list, normalizing `jpeg` to `jpg`.
	pub fn try_from_str(value: &str) -> Result<Self, ConversionError> {
		match value.trim().to_ascii_lowercase().as_str() {
			"png" => Ok(ImageFormat::PNG),
			"jpg" | "jpeg" => Ok(ImageFormat::JPG),
			"webp" => Ok(ImageFormat::WEBP),
			_ => Err(ConversionError::UnsupportedFormat {
				requested: value.trim().to_string(),
				allowed: Self::ALLOWED,
			}),
		}
	}

	/// Whether the container can store an alpha channel.
	pub fn supports_alpha(&self) -> bool {
		match self {
			ImageFormat::PNG | ImageFormat::WEBP => true,
			ImageFormat::JPG => false,
		}
	}

	pub fn as_str(&self) -> &'static str {
		FileFormat::from(*self).as_str()
	}

	pub fn as_mime_str(&self) -> &'static str {
		FileFormat::from(*self).as_mime_str()
	}
}

impl From<ImageFormat> for FileFormat {
	fn from(format: ImageFormat) -> Self {
		match format {
			ImageFormat::PNG => FileFormat::PNG,
			ImageFormat::JPG => FileFormat::JPG,
			ImageFormat::WEBP => FileFormat::WEBP,
		}
	}
}

impl Display for ImageFormat {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// The three conversion pipelines.
#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConversionKind {
	/// JSON ↔ YAML
	Data,
	/// PNG/JPG/WebP re-encoding
	Image,
	/// SVG rasterization to PNG
	Svg,
}

impl ConversionKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			ConversionKind::Data => "data",
			ConversionKind::Image => "image",
			ConversionKind::Svg => "svg",
		}
	}

	pub fn parse_str(value: &str) -> Option<Self> {
		Some(match value.trim().to_ascii_lowercase().as_str() {
			"data" => ConversionKind::Data,
			"image" => ConversionKind::Image,
			"svg" => ConversionKind::Svg,
			_ => return None,
		})
	}
}

impl Display for ConversionKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("document.json", Some(FileFormat::JSON))]
	#[case("config.yml", Some(FileFormat::YAML))]
	#[case("config.YAML", Some(FileFormat::YAML))]
	#[case("picture.jpeg", Some(FileFormat::JPG))]
	#[case("picture.tar.png", Some(FileFormat::PNG))]
	#[case("icon.svg", Some(FileFormat::SVG))]
	#[case("noextension", None)]
	#[case("archive.zip", None)]
	#[case("dir.d/noextension", None)]
	fn from_filename(#[case] filename: &str, #[case] expected: Option<FileFormat>) {
		assert_eq!(FileFormat::from_filename(filename), expected);
	}

	#[rstest]
	#[case(FileFormat::JSON, "json", ".json", "application/json")]
	#[case(FileFormat::YAML, "yaml", ".yaml", "application/x-yaml")]
	#[case(FileFormat::PNG, "png", ".png", "image/png")]
	#[case(FileFormat::JPG, "jpg", ".jpg", "image/jpeg")]
	#[case(FileFormat::WEBP, "webp", ".webp", "image/webp")]
	#[case(FileFormat::SVG, "svg", ".svg", "image/svg+xml")]
	fn names_and_mimes(#[case] format: FileFormat, #[case] tag: &str, #[case] ext: &str, #[case] mime: &str) {
		assert_eq!(format.as_str(), tag);
		assert_eq!(format.to_string(), tag);
		assert_eq!(format.as_extension(), ext);
		assert_eq!(format.as_mime_str(), mime);
		assert_eq!(FileFormat::parse_str(tag), Some(format));
	}

	#[rstest]
	#[case("json", DataFormat::JSON)]
	#[case("JSON", DataFormat::JSON)]
	#[case(" yaml\n", DataFormat::YAML)]
	fn data_allow_list(#[case] input: &str, #[case] expected: DataFormat) {
		assert_eq!(DataFormat::try_from_str(input).unwrap(), expected);
	}

	#[rstest]
	#[case("yml")]
	#[case("toml")]
	#[case("")]
	fn data_allow_list_rejects(#[case] input: &str) {
		let err = DataFormat::try_from_str(input).unwrap_err();
		assert!(matches!(err, ConversionError::UnsupportedTarget { .. }), "{err:?}");
	}

	#[rstest]
	#[case("png", ImageFormat::PNG)]
	#[case("jpg", ImageFormat::JPG)]
	#[case("jpeg", ImageFormat::JPG)]
	#[case("JPEG", ImageFormat::JPG)]
	#[case("webp", ImageFormat::WEBP)]
	fn image_allow_list(#[case] input: &str, #[case] expected: ImageFormat) {
		assert_eq!(ImageFormat::try_from_str(input).unwrap(), expected);
	}

	#[rstest]
	#[case("bmp")]
	#[case("gif")]
	#[case("svg")]
	#[case("avif")]
	fn image_allow_list_rejects(#[case] input: &str) {
		let err = ImageFormat::try_from_str(input).unwrap_err();
		assert!(matches!(err, ConversionError::UnsupportedFormat { .. }), "{err:?}");
		assert!(err.to_string().contains(input));
	}

	#[test]
	fn alpha_support() {
		assert!(ImageFormat::PNG.supports_alpha());
		assert!(ImageFormat::WEBP.supports_alpha());
		assert!(!ImageFormat::JPG.supports_alpha());
	}

	#[test]
	fn kinds() {
		assert_eq!(FileFormat::YAML.kind(), ConversionKind::Data);
		assert_eq!(FileFormat::WEBP.kind(), ConversionKind::Image);
		assert_eq!(FileFormat::SVG.kind(), ConversionKind::Svg);
		assert_eq!(ConversionKind::parse_str(" Image "), Some(ConversionKind::Image));
		assert_eq!(ConversionKind::parse_str("video"), None);
	}
}
