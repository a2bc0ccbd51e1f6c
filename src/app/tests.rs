use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::*;

fn press(code: KeyCode) -> KeyEvent {
	KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(app: &mut App, text: &str) {
	for ch in text.chars() {
		assert!(app.handle_key(press(KeyCode::Char(ch))).is_none());
	}
}

fn sample_app() -> App {
	App::new(
		Dataset::sample().expect("sample dataset"),
		AppOptions::default(),
	)
}

fn keys(values: &[&str]) -> Vec<RowKey> {
	values.iter().copied().map(RowKey::from).collect()
}

#[test]
fn selecting_rows_updates_the_host_selection() {
	let mut app = sample_app();
	app.handle_key(press(KeyCode::Char(' ')));
	app.handle_key(press(KeyCode::Down));
	app.handle_key(press(KeyCode::Char(' ')));
	assert_eq!(app.selected(), keys(&["1", "2"]).as_slice());

	app.handle_key(press(KeyCode::Char('a')));
	assert_eq!(app.selected().len(), 8);
}

#[test]
fn deleting_a_row_drops_it_from_data_and_selection() {
	let mut app = sample_app();
	app.handle_key(press(KeyCode::Char(' ')));
	app.handle_key(press(KeyCode::Char('d')));

	assert_eq!(app.dataset().rows.len(), 10);
	assert!(app.selected().is_empty());
	let outcome = app.handle_key(press(KeyCode::Char('q'))).expect("quit");
	assert_eq!(outcome.deleted, keys(&["1"]));
}

#[test]
fn select_all_after_delete_skips_the_deleted_row() {
	let mut app = sample_app();
	app.handle_key(press(KeyCode::Char(' ')));
	app.handle_key(press(KeyCode::Char('d')));
	app.handle_key(press(KeyCode::Char('a')));

	assert_eq!(
		app.selected(),
		keys(&["2", "3", "4", "5", "6", "7", "8", "9"]).as_slice()
	);
}

#[test]
fn rows_without_keys_keep_their_selection_across_deletes() {
	let dataset = Dataset::from_json(
		r#"{"columns":[{"key":"name","label":"Name"}],"rows":[{"name":"Ann"},{"name":"Bo"},{"name":"Cy"}]}"#,
	)
	.expect("dataset");
	let mut app = App::new(dataset, AppOptions::default());
	app.handle_key(press(KeyCode::Down));
	app.handle_key(press(KeyCode::Down));
	app.handle_key(press(KeyCode::Char(' ')));
	app.handle_key(press(KeyCode::Up));
	app.handle_key(press(KeyCode::Up));
	app.handle_key(press(KeyCode::Char('d')));

	let names: Vec<Option<String>> = app
		.selected()
		.iter()
		.map(|key| {
			app.dataset()
				.rows
				.iter()
				.enumerate()
				.find(|(index, row)| &row.key("id", *index) == key)
				.and_then(|(_, row)| row.text("name"))
		})
		.collect();
	assert_eq!(names, vec![Some("Cy".to_string())]);
}

#[test]
fn edit_is_recorded_once_per_row() {
	let mut app = sample_app();
	app.handle_key(press(KeyCode::Down));
	app.handle_key(press(KeyCode::Char('e')));
	app.handle_key(press(KeyCode::Char('e')));
	assert_eq!(app.status.as_deref(), Some("Edit requested for row 2"));

	let outcome = app.handle_key(press(KeyCode::Esc)).expect("quit");
	assert!(outcome.accepted);
	assert_eq!(outcome.edited, keys(&["2"]));
}

#[test]
fn ctrl_c_ends_without_accepting() {
	let mut app = sample_app();
	let outcome = app
		.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
		.expect("quit");
	assert!(!outcome.accepted);
	assert_eq!(outcome.chips, vec!["Engineering".to_string()]);
}

#[test]
fn leaving_the_chips_commits_typed_input() {
	let mut app = sample_app();
	app.handle_key(press(KeyCode::Tab));
	assert_eq!(app.focus(), Focus::Chips);

	app.handle_key(press(KeyCode::Char('+')));
	type_text(&mut app, "qa");
	app.handle_key(press(KeyCode::Tab));

	assert_eq!(app.focus(), Focus::Table);
	assert_eq!(app.chip_selection(), ["Engineering", "qa"]);
}

#[test]
fn escape_in_create_mode_does_not_end_the_session() {
	let mut app = sample_app();
	app.handle_key(press(KeyCode::Tab));
	app.handle_key(press(KeyCode::Char('+')));
	type_text(&mut app, "q");

	assert!(app.handle_key(press(KeyCode::Esc)).is_none());
	assert!(!app.chip_state.is_creating());
	assert_eq!(app.chip_selection(), ["Engineering"]);
	assert!(app.handle_key(press(KeyCode::Esc)).is_some());
}

#[test]
fn focus_stays_on_the_table_without_a_chip_field() {
	let mut dataset = Dataset::sample().expect("sample dataset");
	dataset.chips = None;
	let mut app = App::new(dataset, AppOptions::default());
	app.handle_key(press(KeyCode::Tab));
	assert_eq!(app.focus(), Focus::Table);
}

#[test]
fn draw_shows_status_table_and_chips() {
	let mut app = sample_app();
	app.handle_key(press(KeyCode::Char(' ')));

	let mut terminal = Terminal::new(TestBackend::new(100, 24)).expect("terminal");
	terminal.draw(|frame| app.draw(frame)).expect("draw");

	let buffer = terminal.backend().buffer();
	let text: String = buffer
		.content
		.chunks(buffer.area.width as usize)
		.map(|line| line.iter().map(|cell| cell.symbol()).collect::<String>() + "\n")
		.collect();

	assert!(text.contains("11 rows  page 1/2  1 selected"));
	assert!(text.contains("Members"));
	assert!(text.contains("Departments"));
	assert!(text.contains("✓ Engineering"));
	assert!(text.contains("‹ Prev"));
}
