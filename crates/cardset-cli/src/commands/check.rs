//! Implementation of the `cardset check` command.

use std::path::PathBuf;

use cardset::{lint_snapshot, load_model, load_snapshot, SnapshotWarning};
use clap::Args;
use miette::{IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::output::load_error;

/// Arguments for the check command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Model declaration (.json)
    #[arg(long)]
    pub model: PathBuf,

    /// Host snapshot to check (.json)
    #[arg(long)]
    pub snapshot: PathBuf,

    /// Exit with non-zero code if any warning is reported
    #[arg(long)]
    pub strict: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one warning.
#[derive(Debug, Serialize)]
struct WarningJson<'a> {
    object: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    property: Option<&'a str>,
    message: String,
    suggestions: &'a [String],
}

impl<'a> WarningJson<'a> {
    fn new(warning: &'a SnapshotWarning) -> Self {
        let (object, property) = match warning {
            SnapshotWarning::UnknownObject { object, .. } => (object.as_str(), None),
            SnapshotWarning::UnknownProperty {
                object, property, ..
            } => (object.as_str(), Some(property.as_str())),
        };
        WarningJson {
            object,
            property,
            message: warning.to_string(),
            suggestions: warning.suggestions(),
        }
    }
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<i32> {
    let model = load_model(&args.model).map_err(load_error)?;
    let snapshot = load_snapshot(&args.snapshot).map_err(load_error)?;
    let warnings = lint_snapshot(&model, &snapshot);

    if args.json {
        let json_data: Vec<WarningJson> = warnings.iter().map(WarningJson::new).collect();
        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{}", json_output);
    } else if warnings.is_empty() {
        println!("{} {}", "ok:".green().bold(), args.snapshot.display());
    } else {
        for warning in &warnings {
            eprintln!("{} {}", "warning:".yellow().bold(), warning);
        }
        eprintln!(
            "{} warning(s) in {}",
            warnings.len(),
            args.snapshot.display()
        );
    }

    if args.strict && !warnings.is_empty() {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
