//! Picks the converter for a request and runs it.
//!
//! ```rust
//! use shapeshift::router::{ConversionRequest, route};
//!
//! let request = ConversionRequest::new("config.yml", "name: Alice\n", "json");
//! let output = route(&request).unwrap();
//! assert_eq!(output.mime_type(), "application/json");
//! assert_eq!(output.blob.as_str().unwrap(), "{\n  \"name\": \"Alice\"\n}\n");
//! ```

use shapeshift_core::{Blob, ConversionError, ConversionKind, ConversionResult, DataFormat, FileFormat, ImageFormat};

/// A single conversion job.
#[derive(Clone, Debug)]
pub struct ConversionRequest {
	/// Name of the uploaded or input file. Its extension is the fallback for `kind` and `source_format`.
	pub filename: String,
	pub input: Blob,
	pub target_format: String,
	/// Forces the pipeline instead of guessing it from the extension.
	pub kind: Option<ConversionKind>,
	/// Overrides the extension as source format of an image.
	pub source_format: Option<String>,
}

impl ConversionRequest {
	pub fn new(filename: &str, input: impl Into<Blob>, target_format: &str) -> Self {
		Self {
			filename: filename.to_string(),
			input: input.into(),
			target_format: target_format.to_string(),
			kind: None,
			source_format: None,
		}
	}

	#[must_use]
	pub fn with_kind(mut self, kind: Option<ConversionKind>) -> Self {
		self.kind = kind;
		self
	}

	#[must_use]
	pub fn with_source_format(mut self, source_format: Option<String>) -> Self {
		self.source_format = source_format;
		self
	}

	/// The explicit source tag if given, otherwise the file extension (without the dot).
	fn source_tag(&self) -> Option<&str> {
		if let Some(tag) = &self.source_format {
			return Some(tag.as_str());
		}
		let index = self.filename.rfind('.')?;
		Some(&self.filename[index + 1..])
	}

	/// Chooses the pipeline: explicit kind, then the source format, then the target format.
	pub fn detect_kind(&self) -> ConversionResult<ConversionKind> {
		if let Some(kind) = self.kind {
			return Ok(kind);
		}
		if let Some(format) = self.source_tag().and_then(FileFormat::parse_str) {
			return Ok(format.kind());
		}
		if DataFormat::try_from_str(&self.target_format).is_ok() {
			return Ok(ConversionKind::Data);
		}
		let requested = match self.source_tag() {
			Some(tag) if !tag.is_empty() => tag,
			_ if !self.filename.is_empty() => self.filename.as_str(),
			_ => self.target_format.as_str(),
		};
		Err(ConversionError::UnsupportedFormat {
			requested: requested.to_string(),
			allowed: "json, yaml, yml, png, jpg, jpeg, webp, svg",
		})
	}
}

/// Converted bytes plus the canonical target format.
#[derive(Clone, Debug, PartialEq)]
pub struct ConversionOutput {
	pub blob: Blob,
	pub format: FileFormat,
}

impl ConversionOutput {
	pub fn mime_type(&self) -> &'static str {
		self.format.as_mime_str()
	}

	/// With leading dot, e.g. `".jpg"`.
	pub fn extension(&self) -> &'static str {
		self.format.as_extension()
	}
}

pub fn route(request: &ConversionRequest) -> ConversionResult<ConversionOutput> {
	let kind = request.detect_kind()?;
	log::debug!(
		"routing '{}' ({} bytes) to the {kind} converter, target '{}'",
		request.filename,
		request.input.len(),
		request.target_format
	);

	match kind {
		ConversionKind::Data => convert_data(request),
		ConversionKind::Image => convert_image(request),
		ConversionKind::Svg => convert_svg(request),
	}
}

fn convert_data(request: &ConversionRequest) -> ConversionResult<ConversionOutput> {
	let target = DataFormat::try_from_str(&request.target_format)?;
	let text = request.input.as_str().map_err(ConversionError::Parse)?;
	let output = shapeshift_data::convert_data_to(text, target)?;
	Ok(ConversionOutput {
		blob: Blob::from(output),
		format: target.into(),
	})
}

fn convert_image(request: &ConversionRequest) -> ConversionResult<ConversionOutput> {
	let source = ImageFormat::try_from_str(request.source_tag().unwrap_or_default())?;
	let target = ImageFormat::try_from_str(&request.target_format)?;
	let blob = shapeshift_image::convert_image_as(&request.input, source, target)?;
	Ok(ConversionOutput {
		blob,
		format: target.into(),
	})
}

fn convert_svg(request: &ConversionRequest) -> ConversionResult<ConversionOutput> {
	if FileFormat::parse_str(&request.target_format) != Some(FileFormat::PNG) {
		return Err(ConversionError::UnsupportedTarget {
			requested: request.target_format.trim().to_string(),
			allowed: "png",
		});
	}
	let png = shapeshift_image::svg_to_png(request.input.as_slice())?;
	Ok(ConversionOutput {
		blob: Blob::from(png),
		format: FileFormat::PNG,
	})
}
