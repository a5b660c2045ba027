//! Implementation of the `cardset compile` command.

use std::path::PathBuf;

use cardset::compiler::{populate, SettingsService};
use cardset::{load_model, load_snapshot, TranslationTable};
use clap::Args;
use miette::{IntoDiagnostic, Result};
use tracing::info;

use crate::output::load_error;
use crate::output::table::format_descriptor_table;

/// Arguments for the compile command.
#[derive(Debug, Args)]
pub struct CompileArgs {
    /// Model declaration (.json)
    #[arg(long)]
    pub model: PathBuf,

    /// Host snapshot with persisted values (.json)
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// Translation file used to localize display texts
    #[arg(long, env = "CARDSET_LOCALE_FILE")]
    pub strings: Option<PathBuf>,

    /// Output the descriptor tree as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the compile command.
pub fn run_compile(args: CompileArgs) -> Result<i32> {
    let mut model = load_model(&args.model).map_err(load_error)?;
    let snapshot = args
        .snapshot
        .as_ref()
        .map(load_snapshot)
        .transpose()
        .map_err(load_error)?;
    let table = args
        .strings
        .as_ref()
        .map(TranslationTable::from_path)
        .transpose()
        .map_err(load_error)?;

    let service = match &table {
        Some(table) => {
            info!(entries = table.len(), "localizing with translation table");
            SettingsService::with_localizer(table)
        }
        None => SettingsService::new(),
    };

    populate(&mut model, snapshot.as_ref());
    let formatting_model = service.build_formatting_model(&mut model);

    if args.json {
        let json_output = serde_json::to_string_pretty(&formatting_model).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        println!("{}", format_descriptor_table(&formatting_model));
    }

    Ok(exitcode::OK)
}
