//! Download names for converted files.

use uuid::Uuid;

/// Reduces an uploaded file name to a safe stem.
///
/// Drops directories and the extension, joins whitespace runs with `_`, keeps only ASCII letters,
/// digits, `.`, `_` and `-`, and trims leading and trailing dots and underscores. An empty result
/// becomes `converted`.
pub fn sanitize_stem(filename: &str) -> String {
	let name = filename.rsplit(['/', '\\']).next().unwrap_or_default();
	let stem = match name.rfind('.') {
		Some(index) if index > 0 => &name[..index],
		_ => name,
	};

	let joined = stem.split_whitespace().collect::<Vec<_>>().join("_");
	let filtered: String = joined
		.chars()
		.filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
		.collect();
	let trimmed = filtered.trim_matches(['.', '_']);

	if trimmed.is_empty() {
		String::from("converted")
	} else {
		trimmed.to_string()
	}
}

/// `<stem>_<32 hex chars><extension>`, unique per call.
pub fn output_filename(input_filename: &str, extension: &str) -> String {
	format!("{}_{}{}", sanitize_stem(input_filename), Uuid::new_v4().simple(), extension)
}
