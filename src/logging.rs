//! Global `tracing` subscriber setup.
//!
//! The interactive UI owns the terminal, so it logs to a file; one-shot
//! searches log to stderr. `RUST_LOG` overrides the configured level.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
	Stderr,
	File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
	/// Filter directives, e.g. `info` or `tabsearch=debug`.
	pub level: String,
	pub target: LogTarget,
}

#[derive(Debug, Error)]
pub enum LogInitError {
	#[error("invalid log filter '{directives}'")]
	Filter {
		directives: String,
		#[source]
		source: ParseError,
	},
	#[error("failed to open log file {path}")]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("a global logger is already installed")]
	AlreadyInstalled(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Install the global subscriber described by `config`.
pub fn initialize(config: &LogConfig) -> Result<(), LogInitError> {
	let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
	let filter = build_filter(rust_log.as_deref(), &config.level)?;

	match &config.target {
		LogTarget::Stderr => {
			let subscriber = tracing_subscriber::fmt()
				.with_env_filter(filter)
				.with_writer(io::stderr)
				.with_target(false)
				.finish();
			tracing::subscriber::set_global_default(subscriber)?;
		}
		LogTarget::File(path) => {
			let file = open_log_file(path)?;
			let subscriber = tracing_subscriber::fmt()
				.with_env_filter(filter)
				.with_writer(Mutex::new(file))
				.with_ansi(false)
				.finish();
			tracing::subscriber::set_global_default(subscriber)?;
		}
	}
	tracing::debug!(sink = ?config.target, level = %config.level, "logging initialized");
	Ok(())
}

fn build_filter(rust_log: Option<&str>, level: &str) -> Result<EnvFilter, LogInitError> {
	let directives = rust_log
		.filter(|directives| !directives.trim().is_empty())
		.unwrap_or(level);
	EnvFilter::try_new(directives).map_err(|source| LogInitError::Filter {
		directives: directives.to_string(),
		source,
	})
}

fn open_log_file(path: &Path) -> Result<File, LogInitError> {
	let io_error = |source| LogInitError::Io {
		path: path.to_path_buf(),
		source,
	};
	if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
		fs::create_dir_all(parent).map_err(io_error)?;
	}
	OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.map_err(io_error)
}
