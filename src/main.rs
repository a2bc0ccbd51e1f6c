mod cli;
mod settings;

use anyhow::{Context, Result};
use cli::{CliArgs, OutputFormat, parse_cli, print_json, print_plain};
use ffui::{Dataset, Outcome};
use log::info;
use settings::ResolvedConfig;

fn main() -> Result<()> {
	let cli = parse_cli();

	let Some(outcome) = execute(&cli)? else {
		return Ok(());
	};

	match cli.output {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}

/// Handle the informational flags, or run a session. Returns `None` when
/// no session was started.
fn execute(cli: &CliArgs) -> Result<Option<Outcome>> {
	if cli.list_themes {
		for name in ffui::theme::names() {
			println!("{name}");
		}
		return Ok(None);
	}

	let resolved = settings::load(cli)?;

	if cli.print_config {
		resolved.print_summary();
		return Ok(None);
	}

	ffui::logging::initialize(cli.log_level.into())?;

	run_app(cli, resolved).map(Some)
}

/// Load the dataset and run the interactive session.
fn run_app(cli: &CliArgs, settings: ResolvedConfig) -> Result<Outcome> {
	let dataset = match &cli.dataset {
		Some(path) => Dataset::load(path)?,
		None => Dataset::sample().context("bundled sample dataset is invalid")?,
	};
	dataset.validate(&settings.options.table.row_key)?;
	info!(
		"loaded {} columns and {} rows",
		dataset.columns.len(),
		dataset.rows.len()
	);

	ffui::run(dataset, settings.options)
}

#[cfg(test)]
mod tests {
	use clap::Parser;

	use super::*;

	#[test]
	fn print_config_returns_without_starting_a_session() {
		let cli = CliArgs::parse_from(["ffui", "--no-config", "--print-config"]);
		assert!(execute(&cli).expect("summary prints").is_none());
	}

	#[test]
	fn list_themes_returns_without_loading_settings() {
		let cli = CliArgs::parse_from(["ffui", "--list-themes", "--theme", "neon"]);
		assert!(execute(&cli).expect("themes print").is_none());
	}
}
