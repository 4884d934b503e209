use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gridfix::GridfixError;
use gridfix::config::{CONFIG_FILE_NAME, generate_init_template, resolve_targets};
use gridfix::fixer::Fixer;
use gridfix::rules::Pipeline;

#[derive(Parser)]
#[command(name = "gridfix")]
#[command(
	author,
	version,
	about = "One-shot codemod that rewrites MUI Grid layouts into flex Box layouts"
)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Read the target list from this TOML file instead of ./.gridfix.toml
	#[arg(long, global = true, value_name = "FILE")]
	config: Option<PathBuf>,

	/// Create a template .gridfix.toml in the current directory
	#[arg(long)]
	init: bool,

	/// Overwrite existing .gridfix.toml when using --init
	#[arg(long, requires = "init")]
	force: bool,

	/// Files to rewrite (overrides the configured target list).
	/// A file literally named `config` must be given as `./config`.
	paths: Vec<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
	/// Target-list configuration commands
	Config {
		#[command(subcommand)]
		action: ConfigAction,
	},
}

#[derive(Subcommand)]
enum ConfigAction {
	/// Display the effective target list and where it came from
	Show,
	/// Check the config file for errors without rewriting anything
	Validate,
}

/// Initialize tracing on stderr so stdout carries only the rewrite report.
fn init_tracing() {
	let filter = tracing_subscriber::EnvFilter::new(
		std::env::var("RUST_LOG").unwrap_or_else(|_| "gridfix=warn".into()),
	);

	tracing_subscriber::registry()
		.with(filter)
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.init();
}

fn main() -> ExitCode {
	init_tracing();

	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	// Handle --init
	if cli.init {
		return handle_init(cli.force);
	}

	// Handle subcommands
	if let Some(command) = cli.command {
		return match command {
			Commands::Config { action } => match action {
				ConfigAction::Show => handle_config_show(cli.config),
				ConfigAction::Validate => handle_config_validate(cli.config),
			},
		};
	}

	handle_fix(&cli.paths, cli.config)
}

fn handle_init(force: bool) -> Result<ExitCode> {
	let config_path = PathBuf::from(CONFIG_FILE_NAME);

	if config_path.exists() && !force {
		return Err(GridfixError::ConfigExists { path: config_path })
			.context("Use --force to overwrite");
	}

	std::fs::write(&config_path, generate_init_template())
		.with_context(|| format!("Failed to write {}", config_path.display()))?;

	println!("Created {}", CONFIG_FILE_NAME);
	Ok(ExitCode::SUCCESS)
}

fn handle_config_show(config: Option<PathBuf>) -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let targets =
		resolve_targets(&cwd, &[], config.as_deref()).context("Failed to load configuration")?;

	println!("# Source: {}", targets.source);
	println!("# targets: {}", targets.paths.len());
	for path in &targets.paths {
		println!("  {}", path.display());
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_config_validate(config: Option<PathBuf>) -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;

	match resolve_targets(&cwd, &[], config.as_deref()) {
		Ok(targets) => {
			println!(
				"Configuration is valid: {} ({} targets)",
				targets.source,
				targets.paths.len()
			);
			Ok(ExitCode::SUCCESS)
		}
		Err(e) => {
			eprintln!("Configuration error: {}", e);
			Ok(ExitCode::FAILURE)
		}
	}
}

fn handle_fix(cli_paths: &[PathBuf], config: Option<PathBuf>) -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;

	let targets = resolve_targets(&cwd, cli_paths, config.as_deref())
		.context("Failed to load configuration")?;
	tracing::debug!(source = %targets.source, count = targets.paths.len(), "resolved targets");

	let pipeline = Pipeline::grid_to_box().context("Failed to compile rewrite rules")?;
	let fixer = Fixer::new(pipeline);

	let summary = fixer.run(&targets.paths, |outcome| println!("{}", outcome))?;
	tracing::info!(
		fixed = summary.fixed,
		unchanged = summary.unchanged,
		missing = summary.missing,
		"run complete"
	);

	// Missing files are reported above but never change the exit code.
	println!("Grid component fixes completed!");
	Ok(ExitCode::SUCCESS)
}
