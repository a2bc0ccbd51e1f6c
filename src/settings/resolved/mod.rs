use ffui::AppOptions;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Options the app runs with after merging every configuration layer.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub options: AppOptions,
	/// Name the theme was selected by, kept for the summary.
	pub theme_name: String,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
