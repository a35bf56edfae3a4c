use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail, ensure};
use config::{Config, ConfigError, File};
use serde::Deserialize;

use tabsearch::app_dirs;
use tabsearch::ui::theme::{self, Theme};
use tabsearch::{EndpointPaths, SearchMode, TabUiConfig, UiConfig};

use crate::cli::CliArgs;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_THEME: &str = "slate";
const LOG_FILE_NAME: &str = "tabsearch.log";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
	backend: BackendSection,
	modes: ModesSection,
	ui: UiSection,
	logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct BackendSection {
	base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ModesSection {
	dense: Option<ModeSection>,
	sparse: Option<ModeSection>,
	hybrid: Option<ModeSection>,
}

impl ModesSection {
	fn take(&mut self, mode: SearchMode) -> Option<ModeSection> {
		match mode {
			SearchMode::Dense => self.dense.take(),
			SearchMode::Sparse => self.sparse.take(),
			SearchMode::Hybrid => self.hybrid.take(),
		}
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ModeSection {
	label: Option<String>,
	path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	theme: Option<String>,
	start_mode: Option<String>,
	title: Option<String>,
	placeholder: Option<String>,
	initial_query: Option<String>,
	suggestions: Option<Vec<String>>,
	suggestion_hide_delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoggingSection {
	level: Option<String>,
	file: Option<PathBuf>,
}

/// Fully validated settings the binary runs with.
pub struct ResolvedConfig {
	pub base_url: String,
	pub endpoints: EndpointPaths,
	pub theme_name: String,
	pub theme: Theme,
	pub start_mode: SearchMode,
	pub initial_query: String,
	pub ui: UiConfig,
	pub log_level: String,
	/// Explicit log file; `None` means the data directory default.
	pub log_file: Option<PathBuf>,
}

impl ResolvedConfig {
	pub fn print_summary(&self) {
		println!("Effective configuration:");
		println!("  Backend: {}", self.base_url);
		match self.endpoints.resolve(&self.base_url) {
			Ok(urls) => {
				for tab in self.ui.tabs() {
					println!("  {} tab: {}", tab.tab_label, urls[&tab.mode]);
				}
			}
			Err(err) => println!("  Endpoints: unavailable ({err})"),
		}
		println!("  Start mode: {}", self.start_mode);
		println!("  UI theme: {}", self.theme_name);
		println!("  Title: {}", self.ui.title);
		if !self.initial_query.is_empty() {
			println!("  Initial query: {}", self.initial_query);
		}
		println!("  Suggestions: {}", self.ui.suggestions().len());
		println!("  Suggestion hide delay: {}ms", self.ui.hide_delay.as_millis());
		println!("  Log level: {}", self.log_level);
		match self.log_file_path() {
			Ok(path) => println!("  Log file: {}", path.display()),
			Err(err) => println!("  Log file: unavailable ({err})"),
		}
	}

	/// Log file used by the interactive UI.
	pub fn log_file_path(&self) -> Result<PathBuf> {
		match &self.log_file {
			Some(path) => Ok(path.clone()),
			None => Ok(app_dirs::get_data_dir()?.join(LOG_FILE_NAME)),
		}
	}
}

pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve()
}

fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix("TABSEARCH")
			.separator("__")
			.try_parsing(true)
			.list_separator(",")
			.with_list_parse_key("ui.suggestions"),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".tabsearch.toml"));
		files.push(current_dir.join("tabsearch.toml"));
	}

	files
}

impl RawConfig {
	fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(url) = cli.base_url.clone() {
			self.backend.base_url = Some(url);
		}
		if let Some(mode) = cli.start_mode {
			self.ui.start_mode = Some(SearchMode::from(mode).id().to_string());
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(title) = cli.title.clone() {
			self.ui.title = Some(title);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.ui.initial_query = Some(query);
		}
		if let Some(level) = cli.log_level.clone() {
			self.logging.level = Some(level);
		}
		if let Some(file) = cli.log_file.clone() {
			self.logging.file = Some(file);
		}
	}

	fn resolve(mut self) -> Result<ResolvedConfig> {
		let base_url = self
			.backend
			.base_url
			.map(|url| url.trim().to_string())
			.filter(|url| !url.is_empty())
			.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

		let mut endpoints = EndpointPaths::default();
		let mut ui = UiConfig::default();
		for mode in SearchMode::all() {
			let Some(section) = self.modes.take(mode) else {
				continue;
			};
			if let Some(path) = section.path {
				endpoints.set(mode, path);
			}
			if let Some(label) = section.label.map(|label| label.trim().to_string()) {
				ensure!(!label.is_empty(), "tab label for mode {mode} must not be empty");
				ui.register_tab(TabUiConfig::new(mode, label));
			}
		}
		endpoints
			.resolve(&base_url)
			.context("invalid backend configuration")?;

		if let Some(title) = self.ui.title {
			ui.title = title;
		}
		if let Some(placeholder) = self.ui.placeholder {
			ui.placeholder = placeholder;
		}
		if let Some(suggestions) = self.ui.suggestions {
			ui.set_suggestions(sanitize_suggestions(suggestions));
		}
		if let Some(delay) = self.ui.suggestion_hide_delay_ms {
			ui.hide_delay = Duration::from_millis(delay);
		}

		let start_mode = match self.ui.start_mode {
			Some(mode) => mode.parse::<SearchMode>()?,
			None => SearchMode::default(),
		};
		let theme_name = self
			.ui
			.theme
			.unwrap_or_else(|| DEFAULT_THEME.to_string());
		let Some(theme) = theme::by_name(&theme_name) else {
			bail!(
				"unknown theme '{theme_name}' (expected one of: {})",
				theme::names().join(", ")
			);
		};

		let log_level = self
			.logging
			.level
			.map(|level| level.trim().to_string())
			.filter(|level| !level.is_empty())
			.unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

		Ok(ResolvedConfig {
			base_url,
			endpoints,
			theme_name,
			theme,
			start_mode,
			initial_query: self.ui.initial_query.unwrap_or_default(),
			ui,
			log_level,
			log_file: self.logging.file,
		})
	}
}

fn sanitize_suggestions(values: Vec<String>) -> Vec<String> {
	values
		.into_iter()
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty())
		.collect()
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;
	use tempfile::TempDir;

	use super::*;

	fn write_config(contents: &str) -> (TempDir, PathBuf) {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("tabsearch.toml");
		fs::write(&path, contents).expect("write config");
		(dir, path)
	}

	fn cli(args: &[&str]) -> CliArgs {
		let mut argv = vec!["tabsearch", "--no-config"];
		argv.extend_from_slice(args);
		CliArgs::try_parse_from(argv).expect("parse cli")
	}

	#[test]
	fn defaults_without_any_sources() {
		let resolved = load(&cli(&[])).expect("resolve");
		assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
		assert_eq!(resolved.start_mode, SearchMode::Dense);
		assert_eq!(resolved.theme_name, DEFAULT_THEME);
		assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
		assert_eq!(resolved.endpoints, EndpointPaths::default());
		assert_eq!(resolved.ui.suggestions().len(), tabsearch::ui::DEFAULT_SUGGESTIONS.len());
	}

	#[test]
	fn file_values_are_applied() {
		let (_dir, path) = write_config(
			r#"
[backend]
base_url = "http://search.internal:9000/v1"

[modes.hybrid]
label = "Cascading"
path = "cascading-retrieval"

[ui]
theme = "solarized"
start_mode = "sparse"
suggestions = ["  first  ", "", "second"]
suggestion_hide_delay_ms = 350

[logging]
level = "tabsearch=debug"
file = "/tmp/tabsearch-test.log"
"#,
		);
		let resolved = load(&cli(&["--config", path.to_str().expect("utf-8 path")])).expect("resolve");

		assert_eq!(resolved.base_url, "http://search.internal:9000/v1");
		assert_eq!(resolved.endpoints.path(SearchMode::Hybrid), "cascading-retrieval");
		assert_eq!(resolved.ui.tab_label(SearchMode::Hybrid), "Cascading");
		assert_eq!(resolved.ui.tab_label(SearchMode::Dense), "Dense");
		assert_eq!(resolved.theme_name, "solarized");
		assert_eq!(resolved.start_mode, SearchMode::Sparse);
		assert_eq!(resolved.ui.suggestions(), ["first".to_string(), "second".to_string()]);
		assert_eq!(resolved.ui.hide_delay, Duration::from_millis(350));
		assert_eq!(resolved.log_level, "tabsearch=debug");
		assert_eq!(resolved.log_file, Some(PathBuf::from("/tmp/tabsearch-test.log")));
	}

	#[test]
	fn cli_overrides_win_over_files() {
		let (_dir, path) = write_config(
			r#"
[backend]
base_url = "http://from-file:8000"

[ui]
start_mode = "sparse"
"#,
		);
		let resolved = load(&cli(&[
			"--config",
			path.to_str().expect("utf-8 path"),
			"--base-url",
			"http://from-cli:8000",
			"--start-mode",
			"hybrid",
			"--title",
			"NBA",
		]))
		.expect("resolve");

		assert_eq!(resolved.base_url, "http://from-cli:8000");
		assert_eq!(resolved.start_mode, SearchMode::Hybrid);
		assert_eq!(resolved.ui.title, "NBA");
	}

	#[test]
	fn invalid_values_are_rejected() {
		let (_dir, path) = write_config("[ui]\ntheme = \"neon\"\n");
		let err = load(&cli(&["--config", path.to_str().expect("utf-8 path")]))
			.err()
			.expect("unknown theme");
		assert!(err.to_string().contains("unknown theme 'neon'"));

		let (_dir, path) = write_config("[modes.dense]\npath = \"/\"\n");
		assert!(load(&cli(&["--config", path.to_str().expect("utf-8 path")])).is_err());

		assert!(load(&cli(&["--base-url", "not a url"])).is_err());

		let (_dir, path) = write_config("[ui]\nstart_mode = \"lexical\"\n");
		assert!(load(&cli(&["--config", path.to_str().expect("utf-8 path")])).is_err());
	}

	#[test]
	fn missing_explicit_config_file_is_an_error() {
		let dir = tempfile::tempdir().expect("tempdir");
		let missing = dir.path().join("absent.toml");
		assert!(load(&cli(&["--config", missing.to_str().expect("utf-8 path")])).is_err());
	}
}
