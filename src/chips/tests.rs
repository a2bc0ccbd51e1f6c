use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::*;

fn strings(values: &[&str]) -> Vec<String> {
	values.iter().map(|value| value.to_string()).collect()
}

fn press(code: KeyCode) -> KeyEvent {
	KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(selector: &ChipSelector<'_>, state: &mut ChipSelectorState, text: &str) {
	for ch in text.chars() {
		assert_eq!(selector.handle_key(state, press(KeyCode::Char(ch))), None);
	}
}

fn draw(selector: ChipSelector<'_>, state: &mut ChipSelectorState, width: u16, height: u16) -> Vec<String> {
	let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
	terminal
		.draw(|frame| frame.render_stateful_widget(selector, frame.area(), state))
		.expect("draw frame");
	let buf = terminal.backend().buffer();
	(0..buf.area.height)
		.map(|y| {
			(0..buf.area.width)
				.map(|x| buf[(x, y)].symbol())
				.collect::<String>()
				.trim_end()
				.to_string()
		})
		.collect()
}

#[test]
fn enter_on_an_already_selected_value_reports_a_duplicate() {
	let options = strings(&["Engineering", "Sales"]);
	let selected = strings(&["Engineering"]);
	let selector = ChipSelector::new(&options, &selected);
	let mut state = ChipSelectorState::default();

	selector.handle_key(&mut state, press(KeyCode::Char('+')));
	type_text(&selector, &mut state, "engineering");
	assert_eq!(selector.handle_key(&mut state, press(KeyCode::Enter)), None);

	assert!(state.is_creating());
	assert_eq!(state.local_error(), Some(DUPLICATE_MESSAGE));
}

#[test]
fn blur_on_an_already_selected_value_discards_quietly() {
	let options = strings(&["Engineering", "Sales"]);
	let selected = strings(&["Engineering"]);
	let selector = ChipSelector::new(&options, &selected);
	let mut state = ChipSelectorState::default();

	state.set_input("ENGINEERING");
	assert_eq!(selector.blur(&mut state), None);
	assert!(!state.is_creating());
	assert_eq!(state.local_error(), None);
}

#[test]
fn new_value_is_appended_with_typed_casing() {
	let options = strings(&["Engineering", "Sales"]);
	let selected = strings(&["Engineering"]);
	let selector = ChipSelector::new(&options, &selected);
	let mut state = ChipSelectorState::default();

	selector.handle_key(&mut state, press(KeyCode::Char('+')));
	type_text(&selector, &mut state, "Design");
	let event = selector.handle_key(&mut state, press(KeyCode::Enter));
	assert_eq!(event, Some(ChipEvent::Changed(strings(&["Engineering", "Design"]))));
	assert!(!state.is_creating());

	let Some(ChipEvent::Changed(next)) = event else {
		unreachable!();
	};
	let shown: Vec<String> = ChipSelector::new(&options, &next)
		.chips()
		.into_iter()
		.map(|chip| chip.value)
		.collect();
	assert_eq!(shown, strings(&["Engineering", "Sales", "Design"]));
}

#[test]
fn known_option_is_selected_with_canonical_casing() {
	let options = strings(&["Engineering", "Sales"]);
	let selected = strings(&["Engineering"]);
	let selector = ChipSelector::new(&options, &selected);
	let mut state = ChipSelectorState::default();

	state.set_input("  sales ");
	let event = selector.commit(&mut state, CommitTrigger::Enter);
	assert_eq!(event, Some(ChipEvent::Changed(strings(&["Engineering", "Sales"]))));
}

#[test]
fn escape_closes_create_mode_without_changes() {
	let options = strings(&["Engineering"]);
	let selected = strings(&["Engineering"]);
	let selector = ChipSelector::new(&options, &selected);
	let mut state = ChipSelectorState::default();

	selector.handle_key(&mut state, press(KeyCode::Char('+')));
	type_text(&selector, &mut state, "Ops");
	assert_eq!(selector.handle_key(&mut state, press(KeyCode::Esc)), None);
	assert!(!state.is_creating());
	assert_eq!(state.input_text(), "");
}

#[test]
fn blank_input_is_discarded_on_enter() {
	let options = strings(&["Sales"]);
	let selected: Vec<String> = Vec::new();
	let selector = ChipSelector::new(&options, &selected);
	let mut state = ChipSelectorState::default();

	state.set_input("   ");
	assert_eq!(selector.commit(&mut state, CommitTrigger::Enter), None);
	assert!(!state.is_creating());
	assert_eq!(state.local_error(), None);
}

#[test]
fn editing_after_a_duplicate_clears_the_error() {
	let options = strings(&["Sales"]);
	let selected = strings(&["Sales"]);
	let selector = ChipSelector::new(&options, &selected);
	let mut state = ChipSelectorState::default();

	state.set_input("sales");
	selector.commit(&mut state, CommitTrigger::Enter);
	assert!(state.local_error().is_some());

	selector.handle_key(&mut state, press(KeyCode::Backspace));
	assert_eq!(state.local_error(), None);
	assert_eq!(state.input_text(), "sale");
}

#[test]
fn space_toggles_the_focused_chip() {
	let options = strings(&["Engineering", "Sales", "Ops"]);
	let selected = strings(&["Ops", "Engineering"]);
	let selector = ChipSelector::new(&options, &selected);
	let mut state = ChipSelectorState::default();

	assert_eq!(
		selector.handle_key(&mut state, press(KeyCode::Char(' '))),
		Some(ChipEvent::Changed(strings(&["Ops"])))
	);
	selector.handle_key(&mut state, press(KeyCode::Right));
	assert_eq!(
		selector.handle_key(&mut state, press(KeyCode::Char(' '))),
		Some(ChipEvent::Changed(strings(&["Ops", "Engineering", "Sales"])))
	);
}

#[test]
fn enter_on_the_add_slot_opens_create_mode() {
	let options = strings(&["Sales"]);
	let selected: Vec<String> = Vec::new();
	let selector = ChipSelector::new(&options, &selected);
	let mut state = ChipSelectorState::default();

	selector.handle_key(&mut state, press(KeyCode::End));
	assert_eq!(state.cursor(), 1);
	selector.handle_key(&mut state, press(KeyCode::Enter));
	assert!(state.is_creating());
}

#[test]
fn create_mode_is_unavailable_when_disabled() {
	let options = strings(&["Sales"]);
	let selected: Vec<String> = Vec::new();
	let selector = ChipSelector::new(&options, &selected).allow_create(false);
	let mut state = ChipSelectorState::default();

	selector.handle_key(&mut state, press(KeyCode::Char('+')));
	selector.handle_key(&mut state, press(KeyCode::End));
	assert_eq!(state.cursor(), 0);
	assert!(!state.is_creating());
}

#[test]
fn render_lists_known_then_custom_chips() {
	let options = strings(&["Engineering", "Sales"]);
	let selected = strings(&["Design", "Engineering"]);
	let selector = ChipSelector::new(&options, &selected)
		.label("Teams")
		.helper_text(Some("Pick any number"));
	let mut state = ChipSelectorState::default();
	let lines = draw(selector, &mut state, 60, 4);

	assert_eq!(lines[0], "Teams");
	assert_eq!(lines[1], " ✓ Engineering   Sales   ✓ Design   + Add");
	assert_eq!(lines[2], "Pick any number");
}

#[test]
fn render_shows_input_and_local_error_in_create_mode() {
	let options = strings(&["Sales"]);
	let selected = strings(&["Sales"]);
	let selector = ChipSelector::new(&options, &selected).helper_text(Some("Pick any number"));
	let mut state = ChipSelectorState::default();
	state.set_input("SALES");
	selector.commit(&mut state, CommitTrigger::Enter);

	let lines = draw(selector, &mut state, 40, 4);
	assert_eq!(lines[0], " ✓ Sales   + Add");
	assert_eq!(lines[1], "› SALES");
	assert_eq!(lines[2], DUPLICATE_MESSAGE);
}

#[test]
fn chips_wrap_to_the_available_width() {
	let options = strings(&["Engineering", "Sales", "Marketing"]);
	let selected: Vec<String> = Vec::new();
	let selector = ChipSelector::new(&options, &selected).allow_create(false);
	let state = ChipSelectorState::default();
	assert_eq!(selector.required_height(&state, 15), 3);
	assert_eq!(selector.required_height(&state, 80), 1);
}
