//! The classified error returned by every conversion.
//!
//! Converters never surface raw library errors. Each failure is mapped to one [`ConversionError`]
//! variant whose `Display` is a short, user-facing message; the underlying cause (if any) is kept
//! as an [`anyhow::Error`] chain and can be rendered with [`ConversionError::detailed_message`].

use crate::{DataFormat, ImageFormat};
use thiserror::Error;

pub type ConversionResult<T> = Result<T, ConversionError>;

#[derive(Debug, Error)]
pub enum ConversionError {
	/// The text is neither valid JSON nor valid YAML.
	#[error("could not parse the input as JSON or YAML")]
	Parse(#[source] anyhow::Error),

	/// The requested data target is outside the allow-list.
	#[error("unsupported target format '{requested}', use one of: {allowed}")]
	UnsupportedTarget { requested: String, allowed: &'static str },

	/// An image tag (source or target) is outside the allow-list.
	#[error("unsupported image format '{requested}', use one of: {allowed}")]
	UnsupportedFormat { requested: String, allowed: &'static str },

	/// The parsed document holds a value the target format cannot express.
	#[error("the data contains values that cannot be written as {format}")]
	Serialization {
		format: DataFormat,
		#[source]
		source: anyhow::Error,
	},

	#[error("the file is not a valid {format} image")]
	Decode {
		format: ImageFormat,
		#[source]
		source: anyhow::Error,
	},

	#[error("failed to encode the image as {format}")]
	Encode {
		format: ImageFormat,
		#[source]
		source: anyhow::Error,
	},

	/// The build lacks an optional capability (e.g. SVG rasterization).
	#[error("{capability} is not available in this build (enable the '{feature}' feature)")]
	MissingDependency {
		capability: &'static str,
		feature: &'static str,
	},

	/// Anything else, wrapped with context.
	#[error("conversion failed: {0}")]
	Conversion(#[source] anyhow::Error),
}

/// Field-less mirror of [`ConversionError`], for matching and for status-code mapping.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	Parse,
	UnsupportedTarget,
	UnsupportedFormat,
	Serialization,
	Decode,
	Encode,
	MissingDependency,
	Conversion,
}

impl ErrorKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			ErrorKind::Parse => "parse",
			ErrorKind::UnsupportedTarget => "unsupported_target",
			ErrorKind::UnsupportedFormat => "unsupported_format",
			ErrorKind::Serialization => "serialization",
			ErrorKind::Decode => "decode",
			ErrorKind::Encode => "encode",
			ErrorKind::MissingDependency => "missing_dependency",
			ErrorKind::Conversion => "conversion",
		}
	}

	/// Whether the failure is caused by the input (as opposed to the build or the encoder).
	pub fn is_caller_error(&self) -> bool {
		matches!(
			self,
			ErrorKind::Parse
				| ErrorKind::UnsupportedTarget
				| ErrorKind::UnsupportedFormat
				| ErrorKind::Serialization
				| ErrorKind::Decode
		)
	}
}

impl ConversionError {
	pub fn kind(&self) -> ErrorKind {
		match self {
			ConversionError::Parse(_) => ErrorKind::Parse,
			ConversionError::UnsupportedTarget { .. } => ErrorKind::UnsupportedTarget,
			ConversionError::UnsupportedFormat { .. } => ErrorKind::UnsupportedFormat,
			ConversionError::Serialization { .. } => ErrorKind::Serialization,
			ConversionError::Decode { .. } => ErrorKind::Decode,
			ConversionError::Encode { .. } => ErrorKind::Encode,
			ConversionError::MissingDependency { .. } => ErrorKind::MissingDependency,
			ConversionError::Conversion(_) => ErrorKind::Conversion,
		}
	}

	/// The message followed by every cause in the chain, one per line.
	pub fn detailed_message(&self) -> String {
		let mut result = self.to_string();
		let mut source = std::error::Error::source(self);
		let mut first = true;
		while let Some(cause) = source {
			if first {
				result.push_str("\n  Caused by:");
				first = false;
			}
			result.push_str(&format!("\n    {cause}"));
			source = cause.source();
		}
		result
	}
}

impl From<anyhow::Error> for ConversionError {
	/// Keeps an already classified error intact; wraps anything else as [`ConversionError::Conversion`].
	fn from(err: anyhow::Error) -> Self {
		match err.downcast::<ConversionError>() {
			Ok(classified) => classified,
			Err(other) => ConversionError::Conversion(other),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use anyhow::{Context, anyhow};

	#[test]
	fn unknown_failures_are_wrapped() {
		let err = ConversionError::from(anyhow!("pixmap allocation failed"));
		assert_eq!(err.kind(), ErrorKind::Conversion);
		assert_eq!(err.to_string(), "conversion failed: pixmap allocation failed");
	}

	#[test]
	fn classified_errors_survive_anyhow() {
		let inner = ConversionError::UnsupportedFormat {
			requested: "bmp".into(),
			allowed: ImageFormat::ALLOWED,
		};
		let err = ConversionError::from(anyhow::Error::from(inner));
		assert_eq!(err.kind(), ErrorKind::UnsupportedFormat);
		assert_eq!(
			err.to_string(),
			"unsupported image format 'bmp', use one of: png, jpg, webp"
		);
	}

	#[test]
	fn detailed_message_lists_causes() {
		let source = Err::<(), _>(anyhow!("invalid PNG signature"))
			.context("decoding PNG image (13 bytes)")
			.unwrap_err();
		let err = ConversionError::Decode {
			format: ImageFormat::PNG,
			source,
		};
		assert_eq!(err.to_string(), "the file is not a valid png image");
		assert_eq!(
			err.detailed_message(),
			"the file is not a valid png image\n  Caused by:\n    decoding PNG image (13 bytes)\n    invalid PNG signature"
		);
	}

	#[test]
	fn caller_errors() {
		assert!(ErrorKind::Parse.is_caller_error());
		assert!(ErrorKind::Decode.is_caller_error());
		assert!(!ErrorKind::Encode.is_caller_error());
		assert!(!ErrorKind::MissingDependency.is_caller_error());
		assert_eq!(ErrorKind::MissingDependency.as_str(), "missing_dependency");
	}
}
