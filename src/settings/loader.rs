use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use clap::Parser;
	use ffui::table::cells::StatusFallback;

	use super::*;

	fn config_file(contents: &str) -> tempfile::NamedTempFile {
		let mut file = tempfile::Builder::new()
			.suffix(".toml")
			.tempfile()
			.expect("temp file");
		file.write_all(contents.as_bytes()).expect("write config");
		file
	}

	#[test]
	fn config_file_values_reach_the_app_options() {
		let file = config_file(
			"[table]\npage_size = 5\nrow_key = \"uid\"\nunknown_status = \"neutral\"\n\n[chips]\nallow_create = false\n\n[ui]\ntheme = \"light\"\n",
		);
		let path = file.path().to_string_lossy().into_owned();
		let cli = CliArgs::parse_from(["ffui", "--no-config", "--config", &path]);

		let resolved = load(&cli).expect("loads");
		assert_eq!(resolved.options.table.page_size, 5);
		assert_eq!(resolved.options.table.row_key, "uid");
		assert_eq!(
			resolved.options.table.status_fallback,
			StatusFallback::Neutral
		);
		assert!(!resolved.options.chips.allow_create);
		assert_eq!(resolved.theme_name, "light");
	}

	#[test]
	fn cli_flags_win_over_config_files() {
		let file = config_file("[table]\npage_size = 5\nselectable = true\n");
		let path = file.path().to_string_lossy().into_owned();
		let cli = CliArgs::parse_from([
			"ffui",
			"--no-config",
			"--config",
			&path,
			"--page-size",
			"3",
			"--selectable",
			"false",
		]);

		let resolved = load(&cli).expect("loads");
		assert_eq!(resolved.options.table.page_size, 3);
		assert!(!resolved.options.table.selectable);
	}

	#[test]
	fn missing_explicit_config_is_an_error() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("absent.toml");
		let path = path.to_string_lossy().into_owned();
		let cli = CliArgs::parse_from(["ffui", "--no-config", "--config", &path]);
		assert!(load(&cli).is_err());
	}
}
