//! Multi-select rendered as a row of toggleable chips, with an optional inline
//! field for adding values that are not among the known options.
//!
//! Like the table, [`ChipSelector`] only borrows the host's options and
//! selection; changes come back as [`ChipEvent`]s.

pub mod options;

use log::debug;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, StatefulWidget, Widget};
use tui_textarea::TextArea;
use unicode_width::UnicodeWidthStr;

use self::options::{DisplayChip, Submission, display_chips, resolve_submission, toggle};
use crate::theme::Theme;

/// Message shown when Enter submits a value that is already selected.
pub const DUPLICATE_MESSAGE: &str = "This value already exists";

const ADD_LABEL: &str = "+ Add";
const INPUT_PROMPT: &str = "› ";
const CHIP_GAP: u16 = 1;

/// Change the host should apply to its selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChipEvent {
	Changed(Vec<String>),
}

/// How create mode is being left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitTrigger {
	/// Explicit submit; duplicates are reported.
	Enter,
	/// Focus moved away; duplicates are dropped quietly.
	Blur,
}

/// Transient selector state: focused chip, create-mode input and the local
/// validation message.
#[derive(Debug, Default)]
pub struct ChipSelectorState {
	cursor: usize,
	input: Option<TextArea<'static>>,
	local_error: Option<String>,
}

impl ChipSelectorState {
	#[must_use]
	pub fn cursor(&self) -> usize {
		self.cursor
	}

	#[must_use]
	pub fn is_creating(&self) -> bool {
		self.input.is_some()
	}

	#[must_use]
	pub fn local_error(&self) -> Option<&str> {
		self.local_error.as_deref()
	}

	/// Text currently typed in create mode.
	#[must_use]
	pub fn input_text(&self) -> String {
		self.input
			.as_ref()
			.map(|input| input.lines().join(""))
			.unwrap_or_default()
	}

	/// Enter create mode with an empty, focused input.
	pub fn open_create(&mut self) {
		let mut input = TextArea::default();
		input.set_cursor_line_style(Style::default());
		input.set_placeholder_text("New value");
		self.input = Some(input);
		self.local_error = None;
	}

	/// Leave create mode without touching the selection.
	pub fn cancel_create(&mut self) {
		self.input = None;
		self.local_error = None;
	}

	/// Replace the typed text, as if the user had edited the field.
	pub fn set_input(&mut self, text: &str) {
		if self.input.is_none() {
			self.open_create();
		}
		if let Some(input) = self.input.as_mut() {
			input.select_all();
			input.cut();
			input.insert_str(text);
		}
		self.local_error = None;
	}
}

/// Chip multi-select widget.
#[derive(Debug, Clone)]
pub struct ChipSelector<'a> {
	label: &'a str,
	options: &'a [String],
	selected: &'a [String],
	allow_create: bool,
	helper_text: Option<&'a str>,
	error: bool,
	focused: bool,
	theme: Theme,
}

impl<'a> ChipSelector<'a> {
	#[must_use]
	pub fn new(options: &'a [String], selected: &'a [String]) -> Self {
		Self {
			label: "",
			options,
			selected,
			allow_create: true,
			helper_text: None,
			error: false,
			focused: true,
			theme: Theme::default(),
		}
	}

	#[must_use]
	pub fn label(mut self, label: &'a str) -> Self {
		self.label = label;
		self
	}

	#[must_use]
	pub fn allow_create(mut self, allow_create: bool) -> Self {
		self.allow_create = allow_create;
		self
	}

	#[must_use]
	pub fn helper_text(mut self, helper_text: Option<&'a str>) -> Self {
		self.helper_text = helper_text;
		self
	}

	#[must_use]
	pub fn error(mut self, error: bool) -> Self {
		self.error = error;
		self
	}

	#[must_use]
	pub fn focused(mut self, focused: bool) -> Self {
		self.focused = focused;
		self
	}

	#[must_use]
	pub fn theme(mut self, theme: Theme) -> Self {
		self.theme = theme;
		self
	}

	/// Chips in display order.
	#[must_use]
	pub fn chips(&self) -> Vec<DisplayChip> {
		display_chips(self.options, self.selected)
	}

	fn slot_count(&self, chips: &[DisplayChip]) -> usize {
		chips.len() + usize::from(self.allow_create)
	}

	/// Commit the create-mode input. Enter reports duplicates and stays in
	/// create mode; blur drops them silently.
	pub fn commit(&self, state: &mut ChipSelectorState, trigger: CommitTrigger) -> Option<ChipEvent> {
		if !state.is_creating() {
			return None;
		}
		let typed = state.input_text();
		match resolve_submission(&typed, self.options, self.selected) {
			Submission::Discard => {
				state.cancel_create();
				None
			}
			Submission::Duplicate => match trigger {
				CommitTrigger::Enter => {
					debug!("chips: rejected duplicate value {typed:?}");
					state.local_error = Some(DUPLICATE_MESSAGE.to_owned());
					None
				}
				CommitTrigger::Blur => {
					state.cancel_create();
					None
				}
			},
			Submission::SelectKnown(value) | Submission::CreateNew(value) => {
				debug!("chips: adding {value:?}");
				state.cancel_create();
				let mut next = self.selected.to_vec();
				next.push(value);
				Some(ChipEvent::Changed(next))
			}
		}
	}

	/// Focus left the selector. Commits any pending input.
	pub fn blur(&self, state: &mut ChipSelectorState) -> Option<ChipEvent> {
		self.commit(state, CommitTrigger::Blur)
	}

	/// Apply a key press to `state`, returning the change the host should apply.
	pub fn handle_key(&self, state: &mut ChipSelectorState, key: KeyEvent) -> Option<ChipEvent> {
		if state.is_creating() {
			return self.handle_create_key(state, key);
		}

		let chips = self.chips();
		let slots = self.slot_count(&chips);
		state.cursor = state.cursor.min(slots.saturating_sub(1));

		match key.code {
			KeyCode::Left | KeyCode::Char('h') => {
				state.cursor = state.cursor.saturating_sub(1);
				None
			}
			KeyCode::Right | KeyCode::Char('l') => {
				if state.cursor + 1 < slots {
					state.cursor += 1;
				}
				None
			}
			KeyCode::Home => {
				state.cursor = 0;
				None
			}
			KeyCode::End => {
				state.cursor = slots.saturating_sub(1);
				None
			}
			KeyCode::Char('+') if self.allow_create => {
				state.open_create();
				None
			}
			KeyCode::Char(' ') | KeyCode::Enter => match chips.get(state.cursor) {
				Some(chip) => Some(ChipEvent::Changed(toggle(self.selected, &chip.value))),
				None if self.allow_create => {
					state.open_create();
					None
				}
				None => None,
			},
			_ => None,
		}
	}

	fn handle_create_key(&self, state: &mut ChipSelectorState, key: KeyEvent) -> Option<ChipEvent> {
		match key.code {
			KeyCode::Enter => self.commit(state, CommitTrigger::Enter),
			KeyCode::Esc => {
				state.cancel_create();
				None
			}
			KeyCode::Tab | KeyCode::BackTab => self.blur(state),
			KeyCode::Char('m' | 'j') if key.modifiers.contains(KeyModifiers::CONTROL) => None,
			_ => {
				let edited = state
					.input
					.as_mut()
					.is_some_and(|input| input.input(key));
				if edited {
					state.local_error = None;
				}
				None
			}
		}
	}

	fn chip_spans(&self, chips: &[DisplayChip], cursor: usize) -> Vec<Span<'static>> {
		let mut spans: Vec<Span<'static>> = chips
			.iter()
			.enumerate()
			.map(|(idx, chip)| {
				let text = if chip.selected {
					format!(" ✓ {} ", chip.value)
				} else {
					format!(" {} ", chip.value)
				};
				let focused = self.focused && idx == cursor;
				Span::styled(text, self.theme.choice_style(chip.selected, focused))
			})
			.collect();
		if self.allow_create {
			let focused = self.focused && cursor == chips.len();
			spans.push(Span::styled(
				format!(" {ADD_LABEL} "),
				self.theme.choice_style(false, focused),
			));
		}
		spans
	}

	fn helper_line(&self, state: &ChipSelectorState) -> Option<Line<'static>> {
		if let Some(message) = state.local_error() {
			return Some(Line::from(Span::styled(message.to_owned(), self.theme.error)));
		}
		let text = self.helper_text?;
		let style = if self.error {
			self.theme.error
		} else {
			self.theme.placeholder_style()
		};
		Some(Line::from(Span::styled(text.to_owned(), style)))
	}

	/// Rows needed to draw the selector at `width` columns.
	#[must_use]
	pub fn required_height(&self, state: &ChipSelectorState, width: u16) -> u16 {
		let chips = self.chips();
		let rows = wrap_spans(self.chip_spans(&chips, state.cursor), width).len();
		let label = u16::from(!self.label.is_empty());
		let input = u16::from(state.is_creating());
		let helper = u16::from(self.helper_line(state).is_some());
		label + rows as u16 + input + helper
	}
}

/// Pack chips into lines no wider than `width`.
fn wrap_spans(spans: Vec<Span<'static>>, width: u16) -> Vec<Line<'static>> {
	let width = usize::from(width.max(1));
	let mut lines = Vec::new();
	let mut current: Vec<Span<'static>> = Vec::new();
	let mut used = 0usize;
	for span in spans {
		let span_width = UnicodeWidthStr::width(span.content.as_ref());
		let gap = if current.is_empty() { 0 } else { usize::from(CHIP_GAP) };
		if !current.is_empty() && used + gap + span_width > width {
			lines.push(Line::from(std::mem::take(&mut current)));
			used = 0;
		} else if gap > 0 {
			current.push(Span::raw(" "));
			used += gap;
		}
		used += span_width;
		current.push(span);
	}
	if !current.is_empty() {
		lines.push(Line::from(current));
	}
	lines
}

impl StatefulWidget for ChipSelector<'_> {
	type State = ChipSelectorState;

	fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
		if area.width == 0 || area.height == 0 {
			return;
		}

		let chips = self.chips();
		state.cursor = state.cursor.min(self.slot_count(&chips).saturating_sub(1));

		let mut lines = Vec::new();
		if !self.label.is_empty() {
			lines.push(Line::from(Span::styled(self.label.to_owned(), self.theme.label)));
		}
		lines.extend(wrap_spans(self.chip_spans(&chips, state.cursor), area.width));

		let used = (lines.len() as u16).min(area.height);
		Paragraph::new(lines).render(Rect { height: used, ..area }, buf);
		let mut y = area.y + used;

		if let Some(input) = state.input.as_ref()
			&& y < area.bottom()
		{
			let prompt_width = UnicodeWidthStr::width(INPUT_PROMPT) as u16;
			buf.set_string(area.x, y, INPUT_PROMPT, self.theme.label);
			let input_area = Rect {
				x: area.x + prompt_width.min(area.width),
				y,
				width: area.width.saturating_sub(prompt_width),
				height: 1,
			};
			input.render(input_area, buf);
			y += 1;
		}

		if let Some(helper) = self.helper_line(state)
			&& y < area.bottom()
		{
			buf.set_line(area.x, y, &helper, area.width);
		}
	}
}

#[cfg(test)]
mod tests;
