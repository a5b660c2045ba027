//! Implementation of the `cardset strings` command.

use std::fs::read_to_string;
use std::path::PathBuf;

use cardset::localize::parse_translations;
use clap::Args;
use miette::{miette, IntoDiagnostic, Report, Result};
use serde::Serialize;

use crate::output::table::{format_strings_table, StringsSummary};
use crate::output::StringsDiagnostic;

/// Arguments for the strings command.
#[derive(Debug, Args)]
pub struct StringsArgs {
    /// Translation files to validate
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one file.
#[derive(Debug, Serialize)]
struct StringsJson {
    file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    entries: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Run the strings command.
pub fn run_strings(args: StringsArgs) -> Result<i32> {
    let mut summaries = Vec::new();
    let mut json_data = Vec::new();
    let mut failed = false;

    for path in &args.files {
        let content = read_to_string(path)
            .into_diagnostic()
            .map_err(|e| miette!("Failed to read translation file {:?}: {}", path, e))?;
        let file = path.display().to_string();

        match parse_translations(&content) {
            Ok(entries) => {
                json_data.push(StringsJson {
                    file: file.clone(),
                    entries: Some(entries.len()),
                    error: None,
                });
                summaries.push(StringsSummary {
                    file,
                    entries: entries.len(),
                });
            }
            Err(e) => {
                failed = true;
                if args.json {
                    json_data.push(StringsJson {
                        file,
                        entries: None,
                        error: Some(e.to_string()),
                    });
                } else {
                    let diagnostic = StringsDiagnostic::from_parse_error(path, &content, &e);
                    eprintln!("{:?}", Report::new(diagnostic));
                }
            }
        }
    }

    if args.json {
        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{}", json_output);
    } else if !summaries.is_empty() {
        println!("{}", format_strings_table(&summaries));
    }

    if failed {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
