use super::filename::output_filename;
use crate::router::{ConversionOutput, ConversionRequest, route};
use axum::{
	body::Bytes,
	extract::{Multipart, multipart::MultipartError},
	http::{StatusCode, header},
	response::{IntoResponse, Response},
};
use shapeshift_core::{ConversionError, ConversionKind, ErrorKind};

const INDEX_HTML: &str = include_str!("index.html");

/// Plain-text response with the given status.
pub fn error_with(status: StatusCode, message: &str) -> Response {
	(
		status,
		[(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
		message.to_string(),
	)
		.into_response()
}

pub async fn index() -> Response {
	([(header::CONTENT_TYPE, "text/html; charset=utf-8")], INDEX_HTML).into_response()
}

pub async fn status() -> &'static str {
	"ready!"
}

/// The fields of a `POST /convert` form.
#[derive(Debug)]
struct UploadForm {
	filename: String,
	content: Bytes,
	target_format: String,
	kind: Option<ConversionKind>,
}

#[derive(Debug)]
enum FormError {
	Multipart(MultipartError),
	MissingFile,
	MissingTarget,
	UnknownKind(String),
}

impl IntoResponse for FormError {
	fn into_response(self) -> Response {
		match self {
			FormError::Multipart(err) => error_with(err.status(), &err.body_text()),
			FormError::MissingFile => error_with(StatusCode::BAD_REQUEST, "no file selected"),
			FormError::MissingTarget => error_with(StatusCode::BAD_REQUEST, "no target format selected"),
			FormError::UnknownKind(kind) => error_with(
				StatusCode::BAD_REQUEST,
				&format!("unknown conversion type '{kind}', use one of: data, image, svg"),
			),
		}
	}
}

impl From<MultipartError> for FormError {
	fn from(err: MultipartError) -> Self {
		FormError::Multipart(err)
	}
}

impl UploadForm {
	async fn read(mut multipart: Multipart) -> Result<Self, FormError> {
		let mut file: Option<(String, Bytes)> = None;
		let mut target_format = String::new();
		let mut kind = String::new();

		while let Some(field) = multipart.next_field().await? {
			let name = field.name().unwrap_or_default().to_string();
			match name.as_str() {
				"file" => {
					let filename = field.file_name().unwrap_or_default().to_string();
					file = Some((filename, field.bytes().await?));
				}
				"target_format" => target_format = field.text().await?,
				"conversion_type" => kind = field.text().await?,
				other => log::debug!("ignoring form field '{other}'"),
			}
		}

		let (filename, content) = match file {
			Some((filename, content)) if !filename.is_empty() || !content.is_empty() => (filename, content),
			_ => return Err(FormError::MissingFile),
		};

		let target_format = target_format.trim().to_lowercase();
		if target_format.is_empty() {
			return Err(FormError::MissingTarget);
		}

		let kind = kind.trim();
		let kind = if kind.is_empty() {
			None
		} else {
			Some(ConversionKind::parse_str(kind).ok_or_else(|| FormError::UnknownKind(kind.to_string()))?)
		};

		Ok(UploadForm {
			filename,
			content,
			target_format,
			kind,
		})
	}
}

/// `POST /convert`: converts the uploaded file and returns it as attachment.
pub async fn convert(multipart: Multipart) -> Response {
	let form = match UploadForm::read(multipart).await {
		Ok(form) => form,
		Err(err) => {
			log::debug!("rejecting upload: {err:?}");
			return err.into_response();
		}
	};
	log::debug!(
		"converting upload '{}' ({} bytes) to '{}'",
		form.filename,
		form.content.len(),
		form.target_format
	);

	let request = ConversionRequest::new(&form.filename, Vec::from(form.content), &form.target_format)
		.with_kind(form.kind);

	match tokio::task::spawn_blocking(move || route(&request)).await {
		Ok(Ok(output)) => ok_attachment(&form.filename, output),
		Ok(Err(err)) => conversion_failed(&form.filename, &err),
		Err(err) => {
			log::error!("conversion task of '{}' did not finish: {err}", form.filename);
			error_with(StatusCode::INTERNAL_SERVER_ERROR, "conversion failed")
		}
	}
}

fn ok_attachment(input_filename: &str, output: ConversionOutput) -> Response {
	let filename = output_filename(input_filename, output.extension());
	(
		[
			(header::CONTENT_TYPE, output.mime_type().to_string()),
			(header::CONTENT_DISPOSITION, format!("attachment; filename=\"{filename}\"")),
		],
		output.blob.into_vec(),
	)
		.into_response()
}

fn conversion_failed(input_filename: &str, err: &ConversionError) -> Response {
	log::warn!("converting '{input_filename}' failed: {}", err.detailed_message());

	let kind = err.kind();
	let status = if kind.is_caller_error() {
		StatusCode::BAD_REQUEST
	} else {
		StatusCode::INTERNAL_SERVER_ERROR
	};
	if kind == ErrorKind::Conversion {
		error_with(status, "conversion failed")
	} else {
		error_with(status, &err.to_string())
	}
}
