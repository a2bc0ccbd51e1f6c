use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field used to identify rows when the host does not configure one.
pub const DEFAULT_ROW_KEY: &str = "id";

/// Identity of a row across the full, unpaginated dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowKey(String);

impl RowKey {
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Derive a key from a JSON field value.
	#[must_use]
	pub fn from_value(value: &Value) -> Self {
		match value {
			Value::String(text) => Self(text.clone()),
			Value::Number(number) => Self(number.to_string()),
			other => Self(other.to_string()),
		}
	}

	/// Key used for rows that do not carry the key field.
	#[must_use]
	pub fn positional(index: usize) -> Self {
		Self(format!("#{index}"))
	}

	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for RowKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for RowKey {
	fn from(value: &str) -> Self {
		Self(value.to_owned())
	}
}

impl From<u64> for RowKey {
	fn from(value: u64) -> Self {
		Self(value.to_string())
	}
}

/// A single record in the table: an ordered mapping of field names to values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataRow {
	fields: Map<String, Value>,
}

impl DataRow {
	#[must_use]
	pub fn new(fields: Map<String, Value>) -> Self {
		Self { fields }
	}

	/// Build a row from `(field, value)` pairs.
	pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: Into<String>,
		V: Into<Value>,
	{
		let fields = pairs
			.into_iter()
			.map(|(key, value)| (key.into(), value.into()))
			.collect();
		Self { fields }
	}

	#[must_use]
	pub fn get(&self, field: &str) -> Option<&Value> {
		self.fields.get(field)
	}

	pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
		self.fields.insert(field.into(), value.into());
	}

	/// Return the field as text when it holds a non-empty string or a number.
	#[must_use]
	pub fn text(&self, field: &str) -> Option<String> {
		match self.fields.get(field)? {
			Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
			Value::Number(number) => Some(number.to_string()),
			_ => None,
		}
	}

	/// Resolve the identity of this row. `index` is the row's position in the
	/// full dataset and is only used when the key field is absent.
	#[must_use]
	pub fn key(&self, row_key: &str, index: usize) -> RowKey {
		match self.fields.get(row_key) {
			Some(Value::Null) | None => RowKey::positional(index),
			Some(value) => RowKey::from_value(value),
		}
	}
}
