use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::{App, Focus, chip_widget, table_widget};

const TABLE_KEYS: &str = "↑↓ move  ←→ page  space select  a select page  e edit  d delete  tab chips  q done";
const CHIP_KEYS: &str = "←→ move  space toggle  + add  tab table  q done";
const CREATE_KEYS: &str = "enter add  esc cancel  tab leave";

impl App {
	pub fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		if area.width == 0 || area.height == 0 {
			return;
		}

		let chip_focus = self.focus == Focus::Chips;
		let chip_height = chip_widget(&self.dataset, &self.chip_selected, &self.options, chip_focus)
			.map(|chips| chips.required_height(&self.chip_state, area.width.saturating_sub(2)) + 2)
			.unwrap_or(0);

		let [status_area, table_area, chip_area, keys_area] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Min(3),
			Constraint::Length(chip_height),
			Constraint::Length(1),
		])
		.areas(area);

		frame.render_widget(Paragraph::new(self.status_line()), status_area);

		self.table_state.sync_selected(&self.selected);
		let table = table_widget(&self.dataset, &self.options).block(self.pane_block(" Members ", !chip_focus));
		frame.render_stateful_widget(table, table_area, &mut self.table_state);

		if let Some(chips) = chip_widget(&self.dataset, &self.chip_selected, &self.options, chip_focus) {
			let block = self.pane_block("", chip_focus);
			let inner = block.inner(chip_area);
			frame.render_widget(block, chip_area);
			frame.render_stateful_widget(chips, inner, &mut self.chip_state);
		}

		let keys = match self.focus {
			Focus::Table => TABLE_KEYS,
			Focus::Chips if self.chip_state.is_creating() => CREATE_KEYS,
			Focus::Chips => CHIP_KEYS,
		};
		frame.render_widget(
			Paragraph::new(keys).style(self.options.theme.placeholder_style()),
			keys_area,
		);
	}

	fn status_line(&self) -> Line<'static> {
		let theme = &self.options.theme;
		let pagination = self.table_state.pagination();
		let mut spans = vec![
			Span::styled(
				format!("{} rows", self.dataset.rows.len()),
				theme.header_style(),
			),
			Span::raw(format!(
				"  page {}/{}  {} selected",
				pagination.page(),
				pagination.total_pages().max(1),
				self.selected.len()
			)),
		];
		if let Some(status) = &self.status {
			spans.push(Span::styled(format!("  {status}"), theme.highlight));
		}
		Line::from(spans)
	}

	fn pane_block(&self, title: &'static str, focused: bool) -> Block<'static> {
		let border = if focused {
			self.options.theme.label
		} else {
			Style::new().fg(self.options.theme.header_bg())
		};
		Block::default()
			.borders(Borders::ALL)
			.border_style(border)
			.title(title)
	}
}
