//! Cardset CLI entry point.
//!
//! Provides command-line tools for working with formatting model declarations:
//! - `cardset compile` - Populate and compile a model to host descriptors
//! - `cardset revert` - List revert-to-default descriptors per card
//! - `cardset check` - Check a host snapshot against a model
//! - `cardset strings` - Validate translation files

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_check, run_compile, run_revert, run_strings, CheckArgs, CompileArgs, RevertArgs,
    StringsArgs,
};
use tracing::subscriber::set_global_default;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Formatting model tools.
#[derive(Debug, Parser)]
#[command(name = "cardset")]
#[command(about = "Formatting model tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log level for diagnostics written to stderr
    #[arg(long, value_enum, env = "CARDSET_LOG", global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Log verbosity.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Populate a model from a snapshot and compile it to host descriptors
    Compile(CompileArgs),
    /// List the properties each card resets to defaults
    Revert(RevertArgs),
    /// Report snapshot entries the model does not declare
    Check(CheckArgs),
    /// Validate translation files
    Strings(StringsArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Install the stderr log subscriber. An explicit level wins over `--verbose`.
fn setup_logging(verbose: bool, log_level: Option<LogLevel>) -> miette::Result<()> {
    let level = match (log_level, verbose) {
        (Some(level), _) => level.into(),
        (None, true) => Level::DEBUG,
        (None, false) => Level::WARN,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(stderr)
        .finish();

    set_global_default(subscriber)
        .map_err(|e| miette::miette!("Failed to install logger: {}", e))
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose, cli.log_level)?;

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Compile(args) => run_compile(args),
        Commands::Revert(args) => run_revert(args),
        Commands::Check(args) => run_check(args),
        Commands::Strings(args) => run_strings(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
