mod cli;
mod settings;
mod workflow;

use std::process::ExitCode;

use anyhow::Result;
use cli::{
	CliArgs, OutputFormat, format_search_json, format_search_plain, parse_cli, print_json,
	print_plain,
};
use settings::ResolvedConfig;
use tabsearch::SearchMode;
use tabsearch::logging::{self, LogConfig, LogTarget};
use tabsearch::ui::theme;
use workflow::{OneShotSearch, SearchWorkflow};

fn main() -> Result<ExitCode> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in theme::names() {
			println!("{name}");
		}
		return Ok(ExitCode::SUCCESS);
	}

	if cli.list_modes {
		for mode in SearchMode::all() {
			println!("{}\t{}", mode.id(), mode.default_label());
		}
		return Ok(ExitCode::SUCCESS);
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	match cli.query.as_deref() {
		Some(query) => run_query(&cli, query, &resolved),
		None => run_search(cli.output, resolved),
	}
}

/// Execute the interactive workflow and print output in the chosen format.
fn run_search(format: OutputFormat, settings: ResolvedConfig) -> Result<ExitCode> {
	logging::initialize(&LogConfig {
		level: settings.log_level.clone(),
		target: LogTarget::File(settings.log_file_path()?),
	})?;

	let workflow = SearchWorkflow::from_config(settings)?;
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(ExitCode::SUCCESS)
}

/// Run a single search in the start mode and print its outcome.
fn run_query(cli: &CliArgs, query: &str, settings: &ResolvedConfig) -> Result<ExitCode> {
	logging::initialize(&LogConfig {
		level: settings.log_level.clone(),
		target: LogTarget::Stderr,
	})?;

	let session = OneShotSearch::from_config(settings)?.run(query)?;

	match cli.output {
		OutputFormat::Plain => println!("{}", format_search_plain(&session)),
		OutputFormat::Json => println!("{}", format_search_json(&session)?),
	}

	Ok(if session.state().error.is_some() {
		ExitCode::FAILURE
	} else {
		ExitCode::SUCCESS
	})
}
