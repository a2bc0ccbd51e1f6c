//! Host-side data loading: column descriptors, rows and an optional chip
//! field, read from a JSON document.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::table::column::Column;
use crate::table::row::{DataRow, RowKey};

const SAMPLE: &str = include_str!("../assets/sample_dataset.json");

#[derive(Debug, Error)]
pub enum DatasetError {
	#[error("failed to read dataset {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("failed to parse dataset: {0}")]
	Parse(#[from] serde_json::Error),

	#[error("column {index} has an empty key")]
	EmptyColumnKey { index: usize },

	#[error("column key '{key}' is used more than once")]
	DuplicateColumn { key: String },

	/// Row keys identify rows across every page, so they must be unique.
	#[error("row key '{key}' is shared by rows {first} and {second}")]
	DuplicateRowKey {
		key: RowKey,
		first: usize,
		second: usize,
	},
}

/// Multi-select field shown beneath the table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChipField {
	pub label: String,
	pub options: Vec<String>,
	pub selected: Vec<String>,
	pub helper_text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Dataset {
	pub columns: Vec<Column>,
	#[serde(default)]
	pub rows: Vec<DataRow>,
	#[serde(default)]
	pub chips: Option<ChipField>,
}

impl Dataset {
	pub fn from_json(text: &str) -> Result<Self, DatasetError> {
		Ok(serde_json::from_str(text)?)
	}

	pub fn load(path: &Path) -> Result<Self, DatasetError> {
		let text = fs::read_to_string(path).map_err(|source| DatasetError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_json(&text)
	}

	/// Leaderboard bundled with the binary for trying the widgets out.
	pub fn sample() -> Result<Self, DatasetError> {
		Self::from_json(SAMPLE)
	}

	/// Check column keys and row-key uniqueness for `row_key`.
	pub fn validate(&self, row_key: &str) -> Result<(), DatasetError> {
		let mut columns = HashMap::new();
		for (index, column) in self.columns.iter().enumerate() {
			if column.key.trim().is_empty() {
				return Err(DatasetError::EmptyColumnKey { index });
			}
			if columns.insert(column.key.as_str(), index).is_some() {
				return Err(DatasetError::DuplicateColumn {
					key: column.key.clone(),
				});
			}
		}

		let mut seen = HashMap::new();
		for (index, row) in self.rows.iter().enumerate() {
			let key = row.key(row_key, index);
			if let Some(first) = seen.insert(key.clone(), index) {
				return Err(DatasetError::DuplicateRowKey {
					key,
					first,
					second: index,
				});
			}
		}
		Ok(())
	}

	/// Store a positional key on every row that lacks a `row_key` value, so
	/// keys stay attached to their rows when earlier rows are removed.
	pub fn assign_row_keys(&mut self, row_key: &str) {
		for (index, row) in self.rows.iter_mut().enumerate() {
			if matches!(row.get(row_key), None | Some(Value::Null)) {
				row.insert(row_key, RowKey::positional(index).as_str());
			}
		}
	}

	/// Key of the row equal to `row`, if it is still present.
	#[must_use]
	pub fn key_of(&self, row: &DataRow, row_key: &str) -> Option<RowKey> {
		self.rows
			.iter()
			.position(|candidate| candidate == row)
			.map(|index| row.key(row_key, index))
	}

	/// Remove the row identified by `key`.
	pub fn remove(&mut self, key: &RowKey, row_key: &str) -> Option<DataRow> {
		let index = self
			.rows
			.iter()
			.enumerate()
			.position(|(index, row)| &row.key(row_key, index) == key)?;
		Some(self.rows.remove(index))
	}
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use super::*;
	use crate::table::column::RenderKind;

	#[test]
	fn sample_dataset_is_valid() {
		let dataset = Dataset::sample().expect("sample parses");
		dataset.validate("id").expect("sample validates");
		assert_eq!(dataset.columns[1].kind, RenderKind::Number);
		let chips = dataset.chips.expect("sample has chips");
		assert_eq!(chips.selected, vec!["Engineering".to_string()]);
	}

	#[test]
	fn duplicate_row_keys_are_rejected() {
		let dataset = Dataset::from_json(
			r#"{"columns":[{"key":"name","label":"Name"}],"rows":[{"id":1},{"id":2},{"id":"1"}]}"#,
		)
		.expect("parses");
		let err = dataset.validate("id").unwrap_err();
		assert!(matches!(
			err,
			DatasetError::DuplicateRowKey { first: 0, second: 2, .. }
		));
		assert_eq!(err.to_string(), "row key '1' is shared by rows 0 and 2");
	}

	#[test]
	fn duplicate_and_empty_column_keys_are_rejected() {
		let duplicate = Dataset::from_json(
			r#"{"columns":[{"key":"a","label":"A"},{"key":"a","label":"Again"}]}"#,
		)
		.expect("parses");
		assert!(matches!(
			duplicate.validate("id"),
			Err(DatasetError::DuplicateColumn { .. })
		));

		let empty = Dataset::from_json(r#"{"columns":[{"key":" ","label":"Blank"}]}"#).expect("parses");
		assert!(matches!(
			empty.validate("id"),
			Err(DatasetError::EmptyColumnKey { index: 0 })
		));
	}

	#[test]
	fn load_reports_the_missing_path() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("missing.json");
		let err = Dataset::load(&path).unwrap_err();
		assert!(err.to_string().contains("missing.json"));
	}

	#[test]
	fn load_reads_rows_from_disk() {
		let mut file = tempfile::NamedTempFile::new().expect("temp file");
		write!(
			file,
			r#"{{"columns":[{{"key":"name","label":"Name","kind":"bold"}}],"rows":[{{"id":"a","name":"Ann"}}]}}"#
		)
		.expect("write dataset");
		let dataset = Dataset::load(file.path()).expect("loads");
		assert_eq!(dataset.rows.len(), 1);
		assert_eq!(dataset.columns[0].kind, RenderKind::Bold);
		assert!(dataset.chips.is_none());
	}

	#[test]
	fn assigned_keys_survive_earlier_removals() {
		let mut dataset = Dataset::from_json(
			r#"{"columns":[{"key":"name","label":"Name"}],"rows":[{"name":"Ann"},{"name":"Bo","id":null},{"name":"Cy","id":"c"}]}"#,
		)
		.expect("parses");
		dataset.assign_row_keys("id");

		assert!(dataset.remove(&RowKey::from("#0"), "id").is_some());
		let keys: Vec<RowKey> = dataset
			.rows
			.iter()
			.enumerate()
			.map(|(index, row)| row.key("id", index))
			.collect();
		assert_eq!(keys, vec![RowKey::from("#1"), RowKey::from("c")]);
	}

	#[test]
	fn remove_drops_the_matching_row() {
		let mut dataset = Dataset::sample().expect("sample parses");
		let removed = dataset.remove(&RowKey::from("3"), "id").expect("row 3 exists");
		assert_eq!(removed.text("name").as_deref(), Some("Cy Young"));
		assert_eq!(dataset.rows.len(), 10);
		assert!(dataset.remove(&RowKey::from("3"), "id").is_none());
	}
}
