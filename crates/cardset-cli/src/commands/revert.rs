//! Implementation of the `cardset revert` command.

use std::path::PathBuf;

use cardset::compiler::{compute_suggestions, revert_descriptors};
use cardset::{load_model, Card, RevertDescriptor};
use clap::Args;
use miette::{miette, IntoDiagnostic, Result};
use serde::Serialize;

use crate::output::load_error;
use crate::output::table::format_revert_table;

/// Arguments for the revert command.
#[derive(Debug, Args)]
pub struct RevertArgs {
    /// Model declaration (.json)
    #[arg(long)]
    pub model: PathBuf,

    /// Only list the card with this object name
    #[arg(long)]
    pub card: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one card.
#[derive(Debug, Serialize)]
struct RevertJson<'a> {
    card: &'a str,
    descriptors: Vec<RevertDescriptor>,
}

/// Run the revert command.
pub fn run_revert(args: RevertArgs) -> Result<i32> {
    let model = load_model(&args.model).map_err(load_error)?;

    let cards: Vec<&Card> = match &args.card {
        Some(name) => {
            let card = model.card(name).ok_or_else(|| {
                let names: Vec<&str> = model.cards.iter().map(Card::name).collect();
                let suggestions = compute_suggestions(name, &names);
                if suggestions.is_empty() {
                    miette!("No card named '{}'", name)
                } else {
                    miette!(
                        "No card named '{}'; did you mean: {}?",
                        name,
                        suggestions.join(", ")
                    )
                }
            })?;
            vec![card]
        }
        None => model.cards.iter().collect(),
    };

    let output: Vec<RevertJson> = cards
        .into_iter()
        .map(|card| RevertJson {
            card: card.name(),
            descriptors: revert_descriptors(card),
        })
        .collect();

    if args.json {
        let json_output = serde_json::to_string_pretty(&output).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        let descriptors: Vec<RevertDescriptor> = output
            .into_iter()
            .flat_map(|card| card.descriptors)
            .collect();
        println!("{}", format_revert_table(&descriptors));
    }

    Ok(exitcode::OK)
}
