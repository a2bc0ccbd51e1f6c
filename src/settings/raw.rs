use std::env;

use anyhow::{Error, Result};
use ffui::AppOptions;
use ffui::app::{ChipOptions, TableOptions};
use ffui::table::RowActions;
use ffui::table::cells::StatusFallback;
use ffui::theme;
use serde::Deserialize;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};
use crate::cli::CliArgs;

/// Mirror of the configuration file before CLI overrides and validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	table: TableSection,
	chips: ChipsSection,
	ui: UiSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct TableSection {
	page_size: Option<i64>,
	row_key: Option<String>,
	empty_text: Option<String>,
	selectable: Option<bool>,
	edit: Option<bool>,
	delete: Option<bool>,
	unknown_status: Option<StatusFallback>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ChipsSection {
	allow_create: Option<bool>,
	label: Option<String>,
	helper_text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	theme: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(value) = cli.page_size {
			self.table.page_size = Some(value);
		}
		if let Some(value) = cli.row_key.clone() {
			self.table.row_key = Some(value);
		}
		if let Some(value) = cli.empty_text.clone() {
			self.table.empty_text = Some(value);
		}
		if let Some(value) = cli.selectable {
			self.table.selectable = Some(value);
		}
		if let Some(value) = cli.edit {
			self.table.edit = Some(value);
		}
		if let Some(value) = cli.delete {
			self.table.delete = Some(value);
		}
		if let Some(value) = cli.unknown_status {
			self.table.unknown_status = Some(value.into());
		}

		if let Some(value) = cli.allow_create {
			self.chips.allow_create = Some(value);
		}
		if let Some(value) = cli.chips_label.clone() {
			self.chips.label = Some(value);
		}
		if let Some(value) = cli.helper_text.clone() {
			self.chips.helper_text = Some(value);
		}

		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
	}

	/// Convert into a [`ResolvedConfig`], validating and filling defaults.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			table_row_key: detect_source(
				cli.row_key.is_some(),
				self.table.row_key.is_some(),
				"FFUI__TABLE__ROW_KEY",
				"--row-key",
				"table.row_key",
			),
			ui_theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"FFUI__UI__THEME",
				"--theme",
				"ui.theme",
			),
		};

		let defaults = TableOptions::default();
		let table = TableOptions {
			// Zero or negative sizes disable paging.
			page_size: match self.table.page_size {
				Some(size) => usize::try_from(size).unwrap_or(0),
				None => defaults.page_size,
			},
			row_key: self.table.row_key.unwrap_or(defaults.row_key),
			empty_text: self.table.empty_text.unwrap_or(defaults.empty_text),
			selectable: self.table.selectable.unwrap_or(defaults.selectable),
			actions: RowActions {
				edit: self.table.edit.unwrap_or(defaults.actions.edit),
				delete: self.table.delete.unwrap_or(defaults.actions.delete),
			},
			status_fallback: self.table.unknown_status.unwrap_or_default(),
		};

		let chips = ChipOptions {
			allow_create: self.chips.allow_create.unwrap_or(true),
			label: self.chips.label,
			helper_text: self.chips.helper_text,
		};

		let theme_name = self
			.ui
			.theme
			.unwrap_or_else(|| theme::DEFAULT_THEME.to_string());

		let mut config = ResolvedConfig {
			options: AppOptions {
				table,
				chips,
				theme: theme::Theme::default(),
			},
			theme_name,
		};

		config.validate(&sources).map_err(Error::new)?;
		config.options.theme = theme::resolve(Some(&config.theme_name))?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
