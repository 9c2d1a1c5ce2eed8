//! Parsing text into a [`Document`] and writing it back out as JSON or YAML.

use crate::types::{Mapping, Number, Tagged, Value};
use anyhow::{Result, anyhow, bail};
use shapeshift_core::{ConversionError, ConversionResult, DataFormat};

/// A parsed document plus the syntax it was recognized as.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
	source_format: DataFormat,
	root: Value,
}

/// Parses `text` as strict JSON, and if that fails, as YAML.
///
/// The two attempts are independent: YAML is a superset of JSON, but JSON that is valid in its own
/// grammar is classified `json` even though the YAML parser would accept it too.
pub fn parse_document(text: &str) -> ConversionResult<Document> {
	match serde_json::from_str::<serde_json::Value>(text) {
		Ok(value) => {
			log::debug!("input parsed as JSON ({} bytes)", text.len());
			return Ok(Document::new(DataFormat::JSON, value.into()));
		}
		Err(json_err) => log::trace!("input is not strict JSON ({json_err}), trying YAML"),
	}

	let mut value = serde_yaml_ng::from_str::<serde_yaml_ng::Value>(text).map_err(|yaml_err| {
		ConversionError::Parse(anyhow::Error::new(yaml_err).context("input is neither strict JSON nor YAML"))
	})?;
	value
		.apply_merge()
		.map_err(|merge_err| ConversionError::Parse(anyhow::Error::new(merge_err).context("resolving YAML merge keys")))?;

	log::debug!("input parsed as YAML ({} bytes)", text.len());
	Ok(Document::new(DataFormat::YAML, value.into()))
}

impl Document {
	#[must_use]
	pub fn new(source_format: DataFormat, root: Value) -> Self {
		Self { source_format, root }
	}

	/// The syntax the text was recognized as. Informational; serialization ignores it.
	#[must_use]
	pub fn source_format(&self) -> DataFormat {
		self.source_format
	}

	#[must_use]
	pub fn root(&self) -> &Value {
		&self.root
	}

	pub fn serialize(&self, target: DataFormat) -> ConversionResult<String> {
		match target {
			DataFormat::JSON => self.to_json(),
			DataFormat::YAML => self.to_yaml(),
		}
	}

	/// Pretty JSON: 2-space indent, non-ASCII written literally, trailing newline.
	pub fn to_json(&self) -> ConversionResult<String> {
		let serialization_error = |source: anyhow::Error| ConversionError::Serialization {
			format: DataFormat::JSON,
			source,
		};
		let value = to_json_value(&self.root).map_err(serialization_error)?;
		let mut text = serde_json::to_string_pretty(&value).map_err(|e| serialization_error(e.into()))?;
		text.push('\n');
		Ok(text)
	}

	/// Block-style YAML with keys in document order.
	pub fn to_yaml(&self) -> ConversionResult<String> {
		serde_yaml_ng::to_string(&to_yaml_value(&self.root)).map_err(|e| ConversionError::Serialization {
			format: DataFormat::YAML,
			source: e.into(),
		})
	}
}

fn to_json_value(value: &Value) -> Result<serde_json::Value> {
	use serde_json::Value as J;
	Ok(match value {
		Value::Null => J::Null,
		Value::Boolean(b) => J::Bool(*b),
		Value::Number(n) => J::Number(to_json_number(*n)?),
		Value::String(s) => J::String(s.clone()),
		Value::Sequence(items) => J::Array(items.iter().map(to_json_value).collect::<Result<_>>()?),
		Value::Mapping(mapping) => {
			let mut object = serde_json::Map::with_capacity(mapping.len());
			for (key, value) in mapping.iter() {
				object.insert(to_json_key(key)?, to_json_value(value)?);
			}
			J::Object(object)
		}
		Value::Tagged(tagged) => bail!("the tagged value '{}' has no JSON equivalent", tagged.tag),
	})
}

fn to_json_number(number: Number) -> Result<serde_json::Number> {
	Ok(match number {
		Number::Integer(v) => v.into(),
		Number::Unsigned(v) => v.into(),
		Number::Float(v) => serde_json::Number::from_f64(v).ok_or_else(|| anyhow!("the number {v} has no JSON equivalent"))?,
	})
}

/// JSON keys are strings; other scalars are written the way JSON would write them as values.
fn to_json_key(key: &Value) -> Result<String> {
	Ok(match key {
		Value::String(s) => s.clone(),
		Value::Null => "null".to_string(),
		Value::Boolean(b) => b.to_string(),
		Value::Number(n) => to_json_number(*n)?.to_string(),
		Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => {
			bail!("a {} cannot be used as a JSON object key", key.type_as_str())
		}
	})
}

fn to_yaml_value(value: &Value) -> serde_yaml_ng::Value {
	use serde_yaml_ng::Value as Y;
	match value {
		Value::Null => Y::Null,
		Value::Boolean(b) => Y::Bool(*b),
		Value::Number(Number::Integer(v)) => Y::Number((*v).into()),
		Value::Number(Number::Unsigned(v)) => Y::Number((*v).into()),
		Value::Number(Number::Float(v)) => Y::Number((*v).into()),
		Value::String(s) => Y::String(s.clone()),
		Value::Sequence(items) => Y::Sequence(items.iter().map(to_yaml_value).collect()),
		Value::Mapping(mapping) => Y::Mapping(to_yaml_mapping(mapping)),
		Value::Tagged(tagged) => Y::Tagged(Box::new(to_yaml_tagged(tagged))),
	}
}

fn to_yaml_mapping(mapping: &Mapping) -> serde_yaml_ng::Mapping {
	let mut result = serde_yaml_ng::Mapping::with_capacity(mapping.len());
	for (key, value) in mapping.iter() {
		result.insert(to_yaml_value(key), to_yaml_value(value));
	}
	result
}

fn to_yaml_tagged(tagged: &Tagged) -> serde_yaml_ng::value::TaggedValue {
	serde_yaml_ng::value::TaggedValue {
		tag: serde_yaml_ng::value::Tag::new(tagged.tag.clone()),
		value: to_yaml_value(&tagged.value),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use shapeshift_core::ErrorKind;

	#[test]
	fn detects_source_format() {
		assert_eq!(parse_document(r#"{"a": 1}"#).unwrap().source_format(), DataFormat::JSON);
		assert_eq!(parse_document("a: 1\n").unwrap().source_format(), DataFormat::YAML);
		// trailing comma: not JSON, but a valid YAML flow mapping
		let document = parse_document(r#"{"a": 1,}"#).unwrap();
		assert_eq!(document.source_format(), DataFormat::YAML);
		assert_eq!(document.root().get("a"), Some(&Value::from(1)));
	}

	#[test]
	fn parse_error_keeps_cause() {
		let err = parse_document("not: [valid").unwrap_err();
		assert_eq!(err.kind(), ErrorKind::Parse);
		assert!(err.detailed_message().contains("input is neither strict JSON nor YAML"));
	}

	#[test]
	fn merge_keys_are_resolved() {
		let document = parse_document("base: &b {x: 1, y: 1}\nchild:\n  <<: *b\n  y: 2\n").unwrap();
		assert_eq!(
			document.to_json().unwrap(),
			"{\n  \"base\": {\n    \"x\": 1,\n    \"y\": 1\n  },\n  \"child\": {\n    \"y\": 2,\n    \"x\": 1\n  }\n}\n"
		);
	}

	#[test]
	fn invalid_merge_is_a_parse_error() {
		let err = parse_document("child:\n  <<: 5\n").unwrap_err();
		assert_eq!(err.kind(), ErrorKind::Parse);
		assert!(err.detailed_message().contains("resolving YAML merge keys"));
	}

	#[test]
	fn pretty_json() {
		let document = parse_document("b: 1\na:\n  - x\n  - 2.5\n").unwrap();
		assert_eq!(
			document.to_json().unwrap(),
			"{\n  \"b\": 1,\n  \"a\": [\n    \"x\",\n    2.5\n  ]\n}\n"
		);
	}

	#[test]
	fn block_yaml() {
		let document = parse_document(r#"{"zebra": {"stripes": true}, "apple": [1, 2]}"#).unwrap();
		assert_eq!(
			document.to_yaml().unwrap(),
			"zebra:\n  stripes: true\napple:\n- 1\n- 2\n"
		);
	}

	#[test]
	fn scalar_keys_are_stringified() {
		let document = parse_document("1: one\ntrue: yes\n~: nothing\n2.5: half\n").unwrap();
		let json: serde_json::Value = serde_json::from_str(&document.to_json().unwrap()).unwrap();
		assert_eq!(
			json,
			serde_json::json!({"1": "one", "true": "yes", "null": "nothing", "2.5": "half"})
		);
	}

	#[test]
	fn yaml_only_values_fail_as_json() {
		for text in ["? [a, b]\n: pair\n", "item: !custom 5\n", "value: .nan\n", "value: -.inf\n", "? {a: 1}\n: x\n"] {
			let err = parse_document(text).unwrap().to_json().unwrap_err();
			assert_eq!(err.kind(), ErrorKind::Serialization, "{text}");
		}
	}

	#[test]
	fn tags_survive_yaml() {
		let document = parse_document("item: !custom 5\n").unwrap();
		assert_eq!(document.to_yaml().unwrap(), "item: !custom 5\n");
	}

	#[test]
	fn serialize_dispatches_on_target() {
		let document = parse_document("[1, 2]").unwrap();
		assert_eq!(document.serialize(DataFormat::JSON).unwrap(), "[\n  1,\n  2\n]\n");
		assert_eq!(document.serialize(DataFormat::YAML).unwrap(), "- 1\n- 2\n");
		assert_eq!(document.root(), &Value::from(vec![1, 2]));
	}
}
