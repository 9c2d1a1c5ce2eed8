//! Numeric scalar of a parsed document.

use std::fmt::Display;

/// A number as the source text spelled it: integral values keep their exact width,
/// everything else is a double.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
	Integer(i64),
	Unsigned(u64),
	Float(f64),
}

impl From<serde_json::Number> for Number {
	fn from(number: serde_json::Number) -> Self {
		if let Some(v) = number.as_i64() {
			Number::Integer(v)
		} else if let Some(v) = number.as_u64() {
			Number::Unsigned(v)
		} else {
			Number::Float(number.as_f64().unwrap_or(f64::NAN))
		}
	}
}

impl From<serde_yaml_ng::Number> for Number {
	fn from(number: serde_yaml_ng::Number) -> Self {
		if let Some(v) = number.as_i64() {
			Number::Integer(v)
		} else if let Some(v) = number.as_u64() {
			Number::Unsigned(v)
		} else {
			Number::Float(number.as_f64().unwrap_or(f64::NAN))
		}
	}
}

impl From<i64> for Number {
	fn from(v: i64) -> Self {
		Number::Integer(v)
	}
}

impl From<u64> for Number {
	fn from(v: u64) -> Self {
		Number::Unsigned(v)
	}
}

impl From<f64> for Number {
	fn from(v: f64) -> Self {
		Number::Float(v)
	}
}

impl Display for Number {
	/// Formats like the JSON serializer does, so stringified keys match emitted values.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Number::Integer(v) => write!(f, "{v}"),
			Number::Unsigned(v) => write!(f, "{v}"),
			Number::Float(v) => match serde_json::Number::from_f64(*v) {
				Some(n) => write!(f, "{n}"),
				None => write!(f, "{v}"),
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("42", Number::Integer(42))]
	#[case("-7", Number::Integer(-7))]
	#[case("18446744073709551615", Number::Unsigned(u64::MAX))]
	#[case("1.5", Number::Float(1.5))]
	fn from_json(#[case] text: &str, #[case] expected: Number) {
		let number: serde_json::Number = serde_json::from_str(text).unwrap();
		assert_eq!(Number::from(number), expected);
	}

	#[rstest]
	#[case(Number::Integer(-3), "-3")]
	#[case(Number::Unsigned(u64::MAX), "18446744073709551615")]
	#[case(Number::Float(1.0), "1.0")]
	#[case(Number::Float(0.25), "0.25")]
	fn display(#[case] number: Number, #[case] expected: &str) {
		assert_eq!(number.to_string(), expected);
	}
}
