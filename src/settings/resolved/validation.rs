use ffui::theme;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	let row_key = &config.options.table.row_key;
	if row_key.trim().is_empty() {
		return Err(ConfigError::invalid(
			"table.row_key",
			row_key.as_str(),
			sources.source_for_row_key(),
			"must name a row field",
		));
	}

	if theme::by_name(&config.theme_name).is_none() {
		return Err(ConfigError::invalid(
			"ui.theme",
			config.theme_name.as_str(),
			sources.source_for_theme(),
			format!("expected one of {}", theme::names().join(", ")),
		));
	}

	Ok(())
}
