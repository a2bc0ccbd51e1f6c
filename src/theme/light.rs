use super::Theme;
use ratatui::style::{Color, Modifier, Style};

pub const LIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(226, 232, 240)),
	row_highlight: Style::new()
		.bg(Color::Rgb(200, 200, 200))
		.fg(Color::Rgb(120, 120, 0)),
	selected: Style::new().fg(Color::Rgb(2, 132, 199)),
	placeholder: Style::new().fg(Color::Rgb(100, 100, 100)),
	highlight: Style::new()
		.fg(Color::Rgb(120, 120, 0))
		.add_modifier(Modifier::BOLD),
	label: Style::new().fg(Color::Rgb(0, 102, 153)),
	avatar: Style::new()
		.fg(Color::White)
		.bg(Color::Rgb(71, 85, 105)),
	chip: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(203, 213, 225)),
	chip_selected: Style::new()
		.fg(Color::White)
		.bg(Color::Rgb(2, 132, 199)),
	status_active: Style::new().fg(Color::Rgb(21, 128, 61)),
	status_inactive: Style::new().fg(Color::Rgb(185, 28, 28)),
	status_pending: Style::new().fg(Color::Rgb(180, 83, 9)),
	status_unknown: Style::new().fg(Color::Rgb(100, 100, 100)),
	error: Style::new().fg(Color::Rgb(185, 28, 28)),
};
