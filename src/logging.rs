//! File logging. The terminal belongs to the UI while it runs, so log records
//! go to `<data dir>/ffui.log` instead of stderr.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

use crate::app_dirs;

const LOG_FILE: &str = "ffui.log";

/// Start logging into the data directory. Returns the log file path, or
/// `None` when logging is switched off.
pub fn initialize(level: LevelFilter) -> Result<Option<PathBuf>> {
	if level == LevelFilter::Off {
		return Ok(None);
	}
	let dir = app_dirs::get_data_dir()?;
	initialize_in(&dir, level).map(Some)
}

fn initialize_in(dir: &Path, level: LevelFilter) -> Result<PathBuf> {
	fs::create_dir_all(dir)
		.with_context(|| format!("failed to create log directory {}", dir.display()))?;
	let path = dir.join(LOG_FILE);
	let file = File::create(&path)
		.with_context(|| format!("failed to create log file {}", path.display()))?;
	let config = ConfigBuilder::new()
		.set_target_level(LevelFilter::Error)
		.set_time_format_rfc3339()
		.build();
	WriteLogger::init(level, config, file).context("logger already initialised")?;
	log::info!("logging to {}", path.display());
	Ok(path)
}
