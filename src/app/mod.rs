//! Host application driving a [`DataTable`] and a [`ChipSelector`] over a
//! loaded [`Dataset`].
//!
//! The app owns the rows and both selections. Widgets receive them each frame
//! and report changes as events, which the app applies in [`actions`].

mod actions;
mod render;
mod runtime;

use serde::Serialize;

pub use runtime::run;

use crate::chips::{ChipSelector, ChipSelectorState};
use crate::dataset::Dataset;
use crate::table::cells::StatusFallback;
use crate::table::pagination::DEFAULT_PAGE_SIZE;
use crate::table::row::{DEFAULT_ROW_KEY, RowKey};
use crate::table::{DEFAULT_EMPTY_TEXT, DataTable, DataTableState, RowActions};
use crate::theme::Theme;

/// Table props the host passes every frame.
#[derive(Debug, Clone)]
pub struct TableOptions {
	/// Rows per page; zero disables paging.
	pub page_size: usize,
	pub row_key: String,
	pub empty_text: String,
	pub selectable: bool,
	pub actions: RowActions,
	pub status_fallback: StatusFallback,
}

impl Default for TableOptions {
	fn default() -> Self {
		Self {
			page_size: DEFAULT_PAGE_SIZE,
			row_key: DEFAULT_ROW_KEY.to_owned(),
			empty_text: DEFAULT_EMPTY_TEXT.to_owned(),
			selectable: true,
			actions: RowActions {
				edit: true,
				delete: true,
			},
			status_fallback: StatusFallback::default(),
		}
	}
}

#[derive(Debug, Clone)]
pub struct ChipOptions {
	pub allow_create: bool,
	/// Overrides the label stored in the dataset.
	pub label: Option<String>,
	/// Overrides the helper text stored in the dataset.
	pub helper_text: Option<String>,
}

impl Default for ChipOptions {
	fn default() -> Self {
		Self {
			allow_create: true,
			label: None,
			helper_text: None,
		}
	}
}

#[derive(Debug, Clone, Default)]
pub struct AppOptions {
	pub table: TableOptions,
	pub chips: ChipOptions,
	pub theme: Theme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
	Table,
	Chips,
}

/// What the session ended with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
	pub accepted: bool,
	pub selected: Vec<RowKey>,
	pub chips: Vec<String>,
	pub deleted: Vec<RowKey>,
	pub edited: Vec<RowKey>,
}

pub struct App {
	pub(crate) options: AppOptions,
	pub(crate) dataset: Dataset,
	pub(crate) selected: Vec<RowKey>,
	pub(crate) chip_selected: Vec<String>,
	pub(crate) table_state: DataTableState,
	pub(crate) chip_state: ChipSelectorState,
	pub(crate) focus: Focus,
	pub(crate) status: Option<String>,
	pub(crate) deleted: Vec<RowKey>,
	pub(crate) edited: Vec<RowKey>,
}

impl App {
	#[must_use]
	pub fn new(mut dataset: Dataset, options: AppOptions) -> Self {
		dataset.assign_row_keys(&options.table.row_key);
		let chip_selected = dataset
			.chips
			.as_ref()
			.map(|chips| chips.selected.clone())
			.unwrap_or_default();
		let table_state = DataTableState::new(options.table.page_size);
		Self {
			options,
			dataset,
			selected: Vec::new(),
			chip_selected,
			table_state,
			chip_state: ChipSelectorState::default(),
			focus: Focus::Table,
			status: None,
			deleted: Vec::new(),
			edited: Vec::new(),
		}
	}

	#[must_use]
	pub fn focus(&self) -> Focus {
		self.focus
	}

	#[must_use]
	pub fn selected(&self) -> &[RowKey] {
		&self.selected
	}

	#[must_use]
	pub fn chip_selection(&self) -> &[String] {
		&self.chip_selected
	}

	#[must_use]
	pub fn dataset(&self) -> &Dataset {
		&self.dataset
	}

	fn outcome(&self, accepted: bool) -> Outcome {
		Outcome {
			accepted,
			selected: self.selected.clone(),
			chips: self.chip_selected.clone(),
			deleted: self.deleted.clone(),
			edited: self.edited.clone(),
		}
	}
}

/// Table props borrowed from host data.
pub(crate) fn table_widget<'a>(dataset: &'a Dataset, options: &'a AppOptions) -> DataTable<'a> {
	DataTable::new(&dataset.columns, &dataset.rows)
		.row_key(&options.table.row_key)
		.selectable(options.table.selectable)
		.actions(options.table.actions)
		.empty_text(&options.table.empty_text)
		.status_fallback(options.table.status_fallback)
		.theme(options.theme)
}

/// Chip props borrowed from host data, or `None` when the dataset has no
/// chip field.
pub(crate) fn chip_widget<'a>(
	dataset: &'a Dataset,
	selected: &'a [String],
	options: &'a AppOptions,
	focused: bool,
) -> Option<ChipSelector<'a>> {
	let field = dataset.chips.as_ref()?;
	let label = options.chips.label.as_deref().unwrap_or(&field.label);
	let helper = options
		.chips
		.helper_text
		.as_deref()
		.or(field.helper_text.as_deref());
	Some(
		ChipSelector::new(&field.options, selected)
			.label(label)
			.helper_text(helper)
			.allow_create(options.chips.allow_create)
			.focused(focused)
			.theme(options.theme),
	)
}

#[cfg(test)]
mod tests;
