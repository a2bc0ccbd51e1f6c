use indexmap::IndexSet;

use super::row::RowKey;

/// Visual state of the header checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
	Unchecked,
	Checked,
	Indeterminate,
}

impl CheckState {
	#[must_use]
	pub fn glyph(self) -> &'static str {
		match self {
			CheckState::Unchecked => "[ ]",
			CheckState::Checked => "[x]",
			CheckState::Indeterminate => "[-]",
		}
	}
}

/// Checked rows, tracked by key across every page. Keys keep the order in
/// which they were selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
	keys: IndexSet<RowKey>,
}

impl Selection {
	pub fn from_keys(keys: impl IntoIterator<Item = RowKey>) -> Self {
		Self {
			keys: keys.into_iter().collect(),
		}
	}

	#[must_use]
	pub fn contains(&self, key: &RowKey) -> bool {
		self.keys.contains(key)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.keys.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.keys.is_empty()
	}

	/// Flip a single key. Returns whether the key is now selected.
	pub fn toggle(&mut self, key: RowKey) -> bool {
		if self.keys.shift_remove(&key) {
			false
		} else {
			self.keys.insert(key);
			true
		}
	}

	/// Header checkbox state for the keys visible on the current page.
	#[must_use]
	pub fn page_state(&self, page_keys: &[RowKey]) -> CheckState {
		let selected = page_keys.iter().filter(|key| self.contains(key)).count();
		if selected == 0 {
			CheckState::Unchecked
		} else if selected == page_keys.len() {
			CheckState::Checked
		} else {
			CheckState::Indeterminate
		}
	}

	/// Select-all for one page: clears the page when it is fully selected,
	/// otherwise adds every page key. Other pages are left alone.
	pub fn toggle_page(&mut self, page_keys: &[RowKey]) {
		let all_selected = !page_keys.is_empty() && page_keys.iter().all(|key| self.contains(key));
		if all_selected {
			for key in page_keys {
				self.keys.shift_remove(key);
			}
		} else {
			self.keys.extend(page_keys.iter().cloned());
		}
	}

	#[must_use]
	pub fn to_vec(&self) -> Vec<RowKey> {
		self.keys.iter().cloned().collect()
	}
}
