//! JSON ⇄ YAML conversion.
//!
//! ```rust
//! use shapeshift_data::convert_data;
//!
//! let yaml = convert_data(r#"{"name": "Alice", "age": 30}"#, "yaml").unwrap();
//! assert_eq!(yaml, "name: Alice\nage: 30\n");
//! ```

mod document;
pub mod types;

pub use document::*;
pub use types::*;

use shapeshift_core::{ConversionResult, DataFormat};

/// Converts `text` (JSON or YAML) into `target_format` (`"json"` or `"yaml"`, case-insensitive).
///
/// The target is validated before the text is parsed.
pub fn convert_data(text: &str, target_format: &str) -> ConversionResult<String> {
	let target = DataFormat::try_from_str(target_format)?;
	convert_data_to(text, target)
}

/// Same as [`convert_data`] with an already validated target.
pub fn convert_data_to(text: &str, target: DataFormat) -> ConversionResult<String> {
	let document = parse_document(text)?;
	log::debug!("converting {} document to {target}", document.source_format());
	document.serialize(target)
}
