use super::Theme;
use ratatui::style::{Color, Modifier, Style};

pub const SLATE: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(15, 23, 42)),
	row_highlight: Style::new()
		.bg(Color::Rgb(30, 41, 59))
		.fg(Color::Rgb(250, 204, 21)),
	selected: Style::new().fg(Color::Rgb(56, 189, 248)),
	placeholder: Style::new().fg(Color::DarkGray),
	highlight: Style::new()
		.fg(Color::Yellow)
		.add_modifier(Modifier::BOLD),
	label: Style::new().fg(Color::LightCyan),
	avatar: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(148, 163, 184)),
	chip: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(51, 65, 85)),
	chip_selected: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(56, 189, 248)),
	status_active: Style::new().fg(Color::Rgb(74, 222, 128)),
	status_inactive: Style::new().fg(Color::Rgb(248, 113, 113)),
	status_pending: Style::new().fg(Color::Rgb(251, 191, 36)),
	status_unknown: Style::new().fg(Color::Gray),
	error: Style::new().fg(Color::Rgb(248, 113, 113)),
};
