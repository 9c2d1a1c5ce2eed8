//! Insertion-ordered mapping with arbitrary keys.
//!
//! YAML allows any value as a key, so the mapping cannot be a `HashMap<String, _>`. Entries keep
//! the order in which the source document listed them.

use super::Value;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mapping {
	entries: Vec<(Value, Value)>,
}

impl Mapping {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Inserts or replaces. A replaced entry keeps its original position.
	pub fn insert(&mut self, key: Value, value: Value) -> Option<Value> {
		if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
			return Some(std::mem::replace(&mut entry.1, value));
		}
		self.entries.push((key, value));
		None
	}

	/// Appends without looking for an existing key. Only for sources whose keys are already unique.
	pub(crate) fn push_unique(&mut self, key: Value, value: Value) {
		self.entries.push((key, value));
	}

	#[must_use]
	pub fn get(&self, key: &Value) -> Option<&Value> {
		self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
	}

	/// Looks up a string key.
	#[must_use]
	pub fn get_str(&self, key: &str) -> Option<&Value> {
		self
			.entries
			.iter()
			.find(|(k, _)| matches!(k, Value::String(s) if s == key))
			.map(|(_, v)| v)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
		self.entries.iter().map(|(k, v)| (k, v))
	}

	pub fn keys(&self) -> impl Iterator<Item = &Value> {
		self.entries.iter().map(|(k, _)| k)
	}
}

impl IntoIterator for Mapping {
	type Item = (Value, Value);
	type IntoIter = std::vec::IntoIter<(Value, Value)>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}

impl<K: Into<Value>, V: Into<Value>> FromIterator<(K, V)> for Mapping {
	fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
		let mut mapping = Mapping::new();
		for (key, value) in iter {
			mapping.insert(key.into(), value.into());
		}
		mapping
	}
}
