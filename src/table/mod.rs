//! Paginated data table with checkbox selection and row actions.
//!
//! [`DataTable`] is rebuilt from host data every frame and drawn against a
//! long-lived [`DataTableState`]. Key handling returns [`TableEvent`]s instead
//! of mutating host data, so the host stays the owner of rows and selection.

pub mod cells;
pub mod column;
pub mod pagination;
pub mod row;
pub mod selection;

use log::{debug, trace};
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
	Block, Cell, HighlightSpacing, Paragraph, Row, StatefulWidget, Table,
	TableState as ViewState, Widget,
};

use self::cells::{CellContext, StatusFallback};
use self::column::Column;
use self::pagination::{PageItem, Pagination};
use self::row::{DEFAULT_ROW_KEY, DataRow, RowKey};
use self::selection::{CheckState, Selection};
use crate::theme::Theme;

/// Message drawn when the dataset is empty and the host supplies none.
pub const DEFAULT_EMPTY_TEXT: &str = "No data to display";

const CHECKBOX_WIDTH: u16 = 3;
const ACTIONS_LABEL: &str = "Actions";
const COLUMN_SPACING: u16 = 1;

/// Something the host should act on after a key press.
#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent {
	SelectionChanged(Vec<RowKey>),
	Edit(DataRow),
	Delete(DataRow),
}

/// Which row actions the host handles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowActions {
	pub edit: bool,
	pub delete: bool,
}

impl RowActions {
	fn any(self) -> bool {
		self.edit || self.delete
	}

	fn hint(self) -> String {
		let mut parts = Vec::new();
		if self.edit {
			parts.push("e edit");
		}
		if self.delete {
			parts.push("d delete");
		}
		parts.join(" · ")
	}
}

/// Transient table state: the selection mirror, the page and the cursor row.
#[derive(Debug, Clone)]
pub struct DataTableState {
	selection: Selection,
	synced: Option<Vec<RowKey>>,
	pagination: Pagination,
	cursor: usize,
	view: ViewState,
}

impl DataTableState {
	#[must_use]
	pub fn new(page_size: usize) -> Self {
		Self {
			selection: Selection::default(),
			synced: None,
			pagination: Pagination::new(page_size),
			cursor: 0,
			view: ViewState::default(),
		}
	}

	#[must_use]
	pub fn selection(&self) -> &Selection {
		&self.selection
	}

	#[must_use]
	pub fn pagination(&self) -> &Pagination {
		&self.pagination
	}

	/// Cursor position relative to the current page.
	#[must_use]
	pub fn cursor(&self) -> usize {
		self.cursor
	}

	/// Mirror the host's selection. The mirror is only replaced when `ids`
	/// differ in value from the last synced ids, so hosts may rebuild the
	/// vector every frame. Returns whether a resync happened.
	pub fn sync_selected(&mut self, ids: &[RowKey]) -> bool {
		if self.synced.as_deref() == Some(ids) {
			return false;
		}
		trace!("table: resyncing selection ({} ids)", ids.len());
		self.selection = Selection::from_keys(ids.iter().cloned());
		self.synced = Some(ids.to_vec());
		true
	}

	/// Change the page size, keeping the page in range.
	pub fn set_page_size(&mut self, page_size: usize) {
		self.pagination.set_page_size(page_size);
		self.cursor = 0;
	}

	pub fn toggle_row(&mut self, key: RowKey) -> Vec<RowKey> {
		self.selection.toggle(key);
		self.selection.to_vec()
	}

	pub fn toggle_page(&mut self, page_keys: &[RowKey]) -> Vec<RowKey> {
		self.selection.toggle_page(page_keys);
		self.selection.to_vec()
	}

	#[must_use]
	pub fn header_state(&self, page_keys: &[RowKey]) -> CheckState {
		self.selection.page_state(page_keys)
	}

	pub fn next_page(&mut self) -> bool {
		self.page_moved(|pagination| pagination.next())
	}

	pub fn previous_page(&mut self) -> bool {
		self.page_moved(|pagination| pagination.previous())
	}

	pub fn go_to_page(&mut self, page: usize) -> bool {
		self.page_moved(|pagination| pagination.go_to(page))
	}

	pub fn first_page(&mut self) -> bool {
		self.go_to_page(1)
	}

	pub fn last_page(&mut self) -> bool {
		let last = self.pagination.total_pages().max(1);
		self.go_to_page(last)
	}

	fn page_moved(&mut self, step: impl FnOnce(&mut Pagination) -> bool) -> bool {
		let moved = step(&mut self.pagination);
		if moved {
			self.cursor = 0;
			debug!("table: moved to page {}", self.pagination.page());
		}
		moved
	}

	/// Bring page and cursor back into range for a dataset of `total_rows`.
	fn clamp(&mut self, total_rows: usize) {
		self.pagination.set_total_rows(total_rows);
		let visible = self.pagination.page_range().len();
		self.cursor = self.cursor.min(visible.saturating_sub(1));
	}
}

impl Default for DataTableState {
	fn default() -> Self {
		Self::new(pagination::DEFAULT_PAGE_SIZE)
	}
}

/// Table widget. Borrowed from host data for the duration of a frame.
#[derive(Debug, Clone)]
pub struct DataTable<'a> {
	columns: &'a [Column],
	rows: &'a [DataRow],
	row_key: &'a str,
	selectable: bool,
	actions: RowActions,
	empty_text: &'a str,
	status_fallback: StatusFallback,
	theme: Theme,
	block: Option<Block<'a>>,
}

impl<'a> DataTable<'a> {
	#[must_use]
	pub fn new(columns: &'a [Column], rows: &'a [DataRow]) -> Self {
		Self {
			columns,
			rows,
			row_key: DEFAULT_ROW_KEY,
			selectable: false,
			actions: RowActions::default(),
			empty_text: DEFAULT_EMPTY_TEXT,
			status_fallback: StatusFallback::default(),
			theme: Theme::default(),
			block: None,
		}
	}

	#[must_use]
	pub fn row_key(mut self, row_key: &'a str) -> Self {
		self.row_key = row_key;
		self
	}

	#[must_use]
	pub fn selectable(mut self, selectable: bool) -> Self {
		self.selectable = selectable;
		self
	}

	#[must_use]
	pub fn actions(mut self, actions: RowActions) -> Self {
		self.actions = actions;
		self
	}

	#[must_use]
	pub fn empty_text(mut self, empty_text: &'a str) -> Self {
		self.empty_text = empty_text;
		self
	}

	#[must_use]
	pub fn status_fallback(mut self, fallback: StatusFallback) -> Self {
		self.status_fallback = fallback;
		self
	}

	#[must_use]
	pub fn theme(mut self, theme: Theme) -> Self {
		self.theme = theme;
		self
	}

	#[must_use]
	pub fn block(mut self, block: Block<'a>) -> Self {
		self.block = Some(block);
		self
	}

	/// Keys of every row on the current page, in display order.
	#[must_use]
	pub fn page_keys(&self, state: &DataTableState) -> Vec<RowKey> {
		state
			.pagination
			.page_range()
			.filter_map(|index| Some(self.rows.get(index)?.key(self.row_key, index)))
			.collect()
	}

	fn cursor_row(&self, state: &DataTableState) -> Option<(usize, &'a DataRow)> {
		let index = state.pagination.page_range().nth(state.cursor)?;
		Some((index, self.rows.get(index)?))
	}

	/// Apply a key press to `state`, returning the event the host should act on.
	pub fn handle_key(&self, state: &mut DataTableState, key: KeyEvent) -> Option<TableEvent> {
		state.clamp(self.rows.len());
		let visible = state.pagination.page_range().len();

		match key.code {
			KeyCode::Up | KeyCode::Char('k') => {
				state.cursor = state.cursor.saturating_sub(1);
				None
			}
			KeyCode::Down | KeyCode::Char('j') => {
				if state.cursor + 1 < visible {
					state.cursor += 1;
				}
				None
			}
			KeyCode::Right | KeyCode::PageDown | KeyCode::Char(']') => {
				state.next_page();
				None
			}
			KeyCode::Left | KeyCode::PageUp | KeyCode::Char('[') => {
				state.previous_page();
				None
			}
			KeyCode::Home => {
				state.first_page();
				None
			}
			KeyCode::End => {
				state.last_page();
				None
			}
			KeyCode::Char(' ') if self.selectable => {
				let (index, row) = self.cursor_row(state)?;
				let ids = state.toggle_row(row.key(self.row_key, index));
				Some(TableEvent::SelectionChanged(ids))
			}
			KeyCode::Char('a') if self.selectable && !key.modifiers.contains(KeyModifiers::CONTROL) => {
				let page_keys = self.page_keys(state);
				if page_keys.is_empty() {
					return None;
				}
				let ids = state.toggle_page(&page_keys);
				Some(TableEvent::SelectionChanged(ids))
			}
			KeyCode::Char('e') if self.actions.edit => {
				let (_, row) = self.cursor_row(state)?;
				Some(TableEvent::Edit(row.clone()))
			}
			KeyCode::Char('d') | KeyCode::Delete if self.actions.delete => {
				let (_, row) = self.cursor_row(state)?;
				Some(TableEvent::Delete(row.clone()))
			}
			_ => None,
		}
	}

	fn constraints(&self) -> Vec<Constraint> {
		let mut constraints = Vec::with_capacity(self.columns.len() + 2);
		if self.selectable {
			constraints.push(Constraint::Length(CHECKBOX_WIDTH));
		}
		constraints.extend(self.columns.iter().map(Column::constraint));
		if self.actions.any() {
			let width = self.actions.hint().chars().count().max(ACTIONS_LABEL.len());
			constraints.push(Constraint::Length(width as u16));
		}
		constraints
	}

	fn header(&self, check: CheckState) -> Row<'static> {
		let mut cells = Vec::with_capacity(self.columns.len() + 2);
		if self.selectable {
			cells.push(Cell::from(check.glyph()));
		}
		cells.extend(self.columns.iter().map(|column| {
			Cell::from(Line::from(column.label.clone()).alignment(column.align.into()))
		}));
		if self.actions.any() {
			cells.push(Cell::from(ACTIONS_LABEL));
		}
		Row::new(cells).style(self.theme.header_style()).height(1)
	}

	fn body(&self, state: &DataTableState) -> Vec<Row<'static>> {
		let context = CellContext {
			theme: &self.theme,
			status_fallback: self.status_fallback,
		};
		state
			.pagination
			.page_range()
			.enumerate()
			.filter_map(|(position, index)| Some((position, index, self.rows.get(index)?)))
			.map(|(position, index, row)| {
				let mut cells = Vec::with_capacity(self.columns.len() + 2);
				if self.selectable {
					let checked = state.selection.contains(&row.key(self.row_key, index));
					let check = if checked {
						CheckState::Checked
					} else {
						CheckState::Unchecked
					};
					let style = if checked {
						self.theme.selected
					} else {
						Style::new()
					};
					cells.push(Cell::from(Span::styled(check.glyph(), style)));
				}
				cells.extend(
					self.columns
						.iter()
						.map(|column| Cell::from(context.render(column, row))),
				);
				if self.actions.any() {
					let hint = if position == state.cursor {
						self.actions.hint()
					} else {
						String::new()
					};
					cells.push(Cell::from(Span::styled(hint, self.theme.placeholder_style())));
				}
				Row::new(cells)
			})
			.collect()
	}

	fn pager(&self, pagination: &Pagination) -> Line<'static> {
		let enabled = Style::new();
		let disabled = self.theme.placeholder_style();
		let mut spans = vec![Span::styled(
			"‹ Prev ",
			if pagination.has_previous() { enabled } else { disabled },
		)];
		for item in pagination.items() {
			let span = match item {
				PageItem::Page(page) if page == pagination.page() => {
					Span::styled(format!("[{page}]"), self.theme.highlight)
				}
				PageItem::Page(page) => Span::raw(format!(" {page} ")),
				PageItem::Ellipsis => Span::styled(" … ", disabled),
			};
			spans.push(span);
		}
		spans.push(Span::styled(
			" Next ›",
			if pagination.has_next() { enabled } else { disabled },
		));
		Line::from(spans).alignment(Alignment::Center)
	}
}

impl StatefulWidget for DataTable<'_> {
	type State = DataTableState;

	fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
		state.clamp(self.rows.len());

		let inner = match &self.block {
			Some(block) => {
				let inner = block.inner(area);
				block.clone().render(area, buf);
				inner
			}
			None => area,
		};
		if inner.width == 0 || inner.height == 0 {
			return;
		}

		let show_pager = state.pagination.shows_controls() && inner.height > 2;
		let [table_area, pager_area] = Layout::vertical([
			Constraint::Fill(1),
			Constraint::Length(u16::from(show_pager)),
		])
		.areas(inner);

		let page_keys = self.page_keys(state);
		let header = self.header(state.selection.page_state(&page_keys));
		let rows = self.body(state);
		let empty = rows.is_empty();

		state
			.view
			.select(if empty { None } else { Some(state.cursor) });
		let table = Table::new(rows, self.constraints())
			.header(header)
			.column_spacing(COLUMN_SPACING)
			.highlight_spacing(HighlightSpacing::Never)
			.row_highlight_style(self.theme.row_highlight_style());
		StatefulWidget::render(table, table_area, buf, &mut state.view);

		if empty && table_area.height > 1 {
			let message_area = Rect {
				y: table_area.y + 1,
				height: table_area.height - 1,
				..table_area
			};
			Paragraph::new(self.empty_text)
				.style(self.theme.placeholder_style())
				.alignment(Alignment::Center)
				.render(message_area, buf);
		}

		if show_pager {
			self.pager(&state.pagination).render(pager_area, buf);
		}
	}
}
