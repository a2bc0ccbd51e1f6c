use std::fmt::Write;
use std::path::PathBuf;

use clap::{
	ArgAction, ColorChoice, Parser, ValueEnum,
	builder::{
		BoolishValueParser, Styles,
		styling::{AnsiColor, Effects},
	},
};
use ffui::app_dirs;
use ffui::table::cells::StatusFallback;
use log::LevelFilter;

/// Produce the full version banner including config and data directories.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let data_dir = match app_dirs::get_data_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("ffui {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "data directory: {data_dir}");

	Box::leak(details.into_boxed_str())
}

fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into [`CliArgs`].
pub(crate) fn parse_cli() -> CliArgs {
	CliArgs::parse()
}

#[derive(Parser, Debug)]
#[command(
	name = "ffui",
	version,
	long_version = long_version(),
	about = "Browse a dataset in a paginated, selectable table with a chip multi-select",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		value_name = "DATASET",
		help = "JSON dataset to display (default: bundled sample)"
	)]
	pub(crate) dataset: Option<PathBuf>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "FFUI_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'p',
		long = "page-size",
		value_name = "NUM",
		allow_negative_numbers = true,
		help = "Rows per page, zero or less shows every row (default: 8)"
	)]
	pub(crate) page_size: Option<i64>,
	#[arg(
		short = 'k',
		long = "row-key",
		value_name = "FIELD",
		help = "Row field that identifies a row (default: id)"
	)]
	pub(crate) row_key: Option<String>,
	#[arg(
		long = "empty-text",
		value_name = "TEXT",
		help = "Message shown when there are no rows (default: No data to display)"
	)]
	pub(crate) empty_text: Option<String>,
	#[arg(
		long,
		value_parser = BoolishValueParser::new(),
		help = "Show checkboxes for row selection (default: enabled)"
	)]
	pub(crate) selectable: Option<bool>,
	#[arg(
		long,
		value_parser = BoolishValueParser::new(),
		help = "Offer the edit row action (default: enabled)"
	)]
	pub(crate) edit: Option<bool>,
	#[arg(
		long,
		value_parser = BoolishValueParser::new(),
		help = "Offer the delete row action (default: enabled)"
	)]
	pub(crate) delete: Option<bool>,
	#[arg(
		long = "unknown-status",
		value_enum,
		help = "How to draw status values that are not recognised (default: active)"
	)]
	pub(crate) unknown_status: Option<StatusArg>,
	#[arg(
		long = "allow-create",
		value_parser = BoolishValueParser::new(),
		help = "Let users add chips that are not in the option list (default: enabled)"
	)]
	pub(crate) allow_create: Option<bool>,
	#[arg(
		long = "chips-label",
		value_name = "TEXT",
		help = "Label above the chips (default: dataset value)"
	)]
	pub(crate) chips_label: Option<String>,
	#[arg(
		long = "helper-text",
		value_name = "TEXT",
		help = "Helper text below the chips (default: dataset value)"
	)]
	pub(crate) helper_text: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "log-level",
		value_enum,
		env = "FFUI_LOG_LEVEL",
		default_value_t = LogLevelArg::Warn,
		help = "Level written to the log file in the data directory"
	)]
	pub(crate) log_level: LogLevelArg,
	#[arg(
		short = 'P',
		long = "print-config",
		help = "Print the resolved configuration and exit (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Plain, help = "Choose how to print the result")]
	pub(crate) output: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum StatusArg {
	Active,
	Neutral,
}

impl From<StatusArg> for StatusFallback {
	fn from(value: StatusArg) -> Self {
		match value {
			StatusArg::Active => StatusFallback::Active,
			StatusArg::Neutral => StatusFallback::Neutral,
		}
	}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogLevelArg {
	Off,
	Error,
	Warn,
	Info,
	Debug,
	Trace,
}

impl From<LogLevelArg> for LevelFilter {
	fn from(value: LogLevelArg) -> Self {
		match value {
			LogLevelArg::Off => LevelFilter::Off,
			LogLevelArg::Error => LevelFilter::Error,
			LogLevelArg::Warn => LevelFilter::Warn,
			LogLevelArg::Info => LevelFilter::Info,
			LogLevelArg::Debug => LevelFilter::Debug,
			LogLevelArg::Trace => LevelFilter::Trace,
		}
	}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats supported by the CLI utility.
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
