//! Generic value tree shared by the JSON and YAML front ends.

use super::{Mapping, Number};

/// Any value a JSON or YAML document can hold.
///
/// `Tagged` only comes out of YAML (`!custom value`) and has no JSON counterpart.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
	Null,
	Boolean(bool),
	Number(Number),
	String(String),
	Sequence(Vec<Value>),
	Mapping(Mapping),
	Tagged(Box<Tagged>),
}

/// A YAML value carrying an explicit tag. `tag` includes the leading `!`.
#[derive(Clone, Debug, PartialEq)]
pub struct Tagged {
	pub tag: String,
	pub value: Value,
}

impl Value {
	#[must_use]
	pub fn type_as_str(&self) -> &'static str {
		match self {
			Value::Null => "null",
			Value::Boolean(_) => "boolean",
			Value::Number(_) => "number",
			Value::String(_) => "string",
			Value::Sequence(_) => "sequence",
			Value::Mapping(_) => "mapping",
			Value::Tagged(_) => "tagged value",
		}
	}

	#[must_use]
	pub fn as_mapping(&self) -> Option<&Mapping> {
		match self {
			Value::Mapping(mapping) => Some(mapping),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::String(s) => Some(s),
			_ => None,
		}
	}

	/// Looks up a string key if this is a mapping.
	#[must_use]
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.as_mapping()?.get_str(key)
	}
}

impl From<serde_json::Value> for Value {
	fn from(value: serde_json::Value) -> Self {
		use serde_json::Value as J;
		match value {
			J::Null => Value::Null,
			J::Bool(b) => Value::Boolean(b),
			J::Number(n) => Value::Number(n.into()),
			J::String(s) => Value::String(s),
			J::Array(items) => Value::Sequence(items.into_iter().map(Value::from).collect()),
			J::Object(object) => {
				let mut mapping = Mapping::new();
				for (key, value) in object {
					mapping.push_unique(Value::String(key), value.into());
				}
				Value::Mapping(mapping)
			}
		}
	}
}

impl From<serde_yaml_ng::Value> for Value {
	fn from(value: serde_yaml_ng::Value) -> Self {
		use serde_yaml_ng::Value as Y;
		match value {
			Y::Null => Value::Null,
			Y::Bool(b) => Value::Boolean(b),
			Y::Number(n) => Value::Number(n.into()),
			Y::String(s) => Value::String(s),
			Y::Sequence(items) => Value::Sequence(items.into_iter().map(Value::from).collect()),
			Y::Mapping(object) => {
				let mut mapping = Mapping::new();
				for (key, value) in object {
					mapping.push_unique(key.into(), value.into());
				}
				Value::Mapping(mapping)
			}
			Y::Tagged(tagged) => Value::Tagged(Box::new(Tagged {
				tag: tagged.tag.to_string(),
				value: tagged.value.into(),
			})),
		}
	}
}

impl From<&str> for Value {
	fn from(s: &str) -> Self {
		Value::String(s.to_string())
	}
}

impl From<String> for Value {
	fn from(s: String) -> Self {
		Value::String(s)
	}
}

impl From<bool> for Value {
	fn from(b: bool) -> Self {
		Value::Boolean(b)
	}
}

impl From<i32> for Value {
	fn from(v: i32) -> Self {
		Value::Number(Number::Integer(i64::from(v)))
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Value::Number(Number::Integer(v))
	}
}

impl From<u64> for Value {
	fn from(v: u64) -> Self {
		Value::Number(Number::Unsigned(v))
	}
}

impl From<f64> for Value {
	fn from(v: f64) -> Self {
		Value::Number(Number::Float(v))
	}
}

impl<T: Into<Value>> From<Vec<T>> for Value {
	fn from(items: Vec<T>) -> Self {
		Value::Sequence(items.into_iter().map(Into::into).collect())
	}
}

impl From<Mapping> for Value {
	fn from(mapping: Mapping) -> Self {
		Value::Mapping(mapping)
	}
}
