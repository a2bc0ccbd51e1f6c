use log::{debug, info};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, Focus, Outcome, chip_widget, table_widget};
use crate::chips::ChipEvent;
use crate::table::TableEvent;

impl App {
	/// Route a key press to the focused widget and apply what it reports.
	/// Returns an outcome once the session should end.
	pub fn handle_key(&mut self, key: KeyEvent) -> Option<Outcome> {
		if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
			return Some(self.outcome(false));
		}

		if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
			self.switch_focus();
			return None;
		}

		match self.focus {
			Focus::Table => self.handle_table_key(key),
			Focus::Chips => self.handle_chip_key(key),
		}
	}

	fn handle_table_key(&mut self, key: KeyEvent) -> Option<Outcome> {
		if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
			return Some(self.outcome(true));
		}
		self.table_state.sync_selected(&self.selected);
		let table = table_widget(&self.dataset, &self.options);
		let event = table.handle_key(&mut self.table_state, key)?;
		self.apply_table_event(event);
		None
	}

	fn handle_chip_key(&mut self, key: KeyEvent) -> Option<Outcome> {
		let creating = self.chip_state.is_creating();
		if !creating && matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
			return Some(self.outcome(true));
		}
		let event = chip_widget(&self.dataset, &self.chip_selected, &self.options, true)
			.and_then(|chips| chips.handle_key(&mut self.chip_state, key));
		if let Some(event) = event {
			self.apply_chip_event(event);
		}
		None
	}

	/// Move focus between the table and the chips. Leaving the chips while
	/// typing commits the input as a blur.
	pub fn switch_focus(&mut self) {
		match self.focus {
			Focus::Table => {
				if self.dataset.chips.is_some() {
					self.focus = Focus::Chips;
				}
			}
			Focus::Chips => {
				let event = chip_widget(&self.dataset, &self.chip_selected, &self.options, true)
					.and_then(|chips| chips.blur(&mut self.chip_state));
				if let Some(event) = event {
					self.apply_chip_event(event);
				}
				self.focus = Focus::Table;
			}
		}
		debug!("app: focus moved to {:?}", self.focus);
	}

	pub(crate) fn apply_table_event(&mut self, event: TableEvent) {
		let row_key = self.options.table.row_key.clone();
		match event {
			TableEvent::SelectionChanged(ids) => {
				debug!("app: {} rows selected", ids.len());
				self.selected = ids;
			}
			TableEvent::Edit(row) => {
				if let Some(key) = self.dataset.key_of(&row, &row_key) {
					info!("app: edit requested for row {key}");
					self.status = Some(format!("Edit requested for row {key}"));
					if !self.edited.contains(&key) {
						self.edited.push(key);
					}
				}
			}
			TableEvent::Delete(row) => {
				let Some(key) = self.dataset.key_of(&row, &row_key) else {
					return;
				};
				if self.dataset.remove(&key, &row_key).is_some() {
					info!("app: deleted row {key}");
					self.selected.retain(|selected| selected != &key);
					self.status = Some(format!("Deleted row {key}"));
					self.deleted.push(key);
				}
			}
		}
	}

	pub(crate) fn apply_chip_event(&mut self, event: ChipEvent) {
		match event {
			ChipEvent::Changed(values) => {
				debug!("app: chip selection is now {values:?}");
				self.chip_selected = values;
			}
		}
	}
}
