use std::fmt::Write;
use std::path::PathBuf;

use clap::{
	ArgAction, ColorChoice, Parser, ValueEnum,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};
use tabsearch::SearchMode;
use tabsearch::app_dirs;

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

	let mut details = format!("tabsearch {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "data directory: {data_dir}");

	Box::leak(details.into_boxed_str())
}

/// Create the clap styles used for custom colour output.
fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
	CliArgs::parse()
}

#[derive(Parser, Debug)]
#[command(
	name = "tabsearch",
	version,
	long_version = long_version(),
	about = "Query dense, sparse and hybrid retrieval backends from one tabbed terminal UI",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `tabsearch` binary.
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "TABSEARCH_CONFIG",
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
		short = 'b',
		long = "base-url",
		value_name = "URL",
		help = "Backend base URL; requests go to <URL>/api/<mode> (default: http://127.0.0.1:8000)"
	)]
	pub(crate) base_url: Option<String>,
	#[arg(
		short = 'm',
		long = "start-mode",
		value_enum,
		help = "Choose the tab shown first (default: dense)"
	)]
	pub(crate) start_mode: Option<ModeArg>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the title shown left of the tabs (default: Search)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		short = 'i',
		long = "initial-query",
		value_name = "QUERY",
		help = "Pre-fill the query of the first tab (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Run one search in the start mode, print the results and exit"
	)]
	pub(crate) query: Option<String>,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Write interactive-mode logs here (default: <data dir>/tabsearch.log)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		long = "log-level",
		value_name = "FILTER",
		help = "Log filter directives; RUST_LOG takes precedence (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(long = "list-modes", help = "List search modes and exit (default: disabled)")]
	pub(crate) list_modes: bool,
	#[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Plain, help = "Choose how to print the result")]
	pub(crate) output: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Search modes accepted via the command line.
pub(crate) enum ModeArg {
	Dense,
	Sparse,
	Hybrid,
}

impl From<ModeArg> for SearchMode {
	fn from(value: ModeArg) -> Self {
		match value {
			ModeArg::Dense => SearchMode::Dense,
			ModeArg::Sparse => SearchMode::Sparse,
			ModeArg::Hybrid => SearchMode::Hybrid,
		}
	}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats supported by the CLI utility.
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
