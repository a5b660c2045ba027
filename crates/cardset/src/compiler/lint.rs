//! Consistency checks between a settings tree and a host snapshot.

use std::collections::BTreeSet;

use strsim::levenshtein;
use thiserror::Error;

use crate::model::{Card, Group, Model};
use crate::snapshot::HostSnapshot;

/// A persisted entry no slice of the model reads.
///
/// Population ignores such entries silently; they usually mean a property was
/// renamed in the declaration but not in the host's capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotWarning {
    #[error("persisted object '{object}' has no card{}", format_suggestions(.suggestions))]
    UnknownObject {
        object: String,
        suggestions: Vec<String>,
    },

    #[error(
        "persisted property '{object}.{property}' has no slice{}",
        format_suggestions(.suggestions)
    )]
    UnknownProperty {
        object: String,
        property: String,
        suggestions: Vec<String>,
    },
}

impl SnapshotWarning {
    pub fn suggestions(&self) -> &[String] {
        match self {
            SnapshotWarning::UnknownObject { suggestions, .. }
            | SnapshotWarning::UnknownProperty { suggestions, .. } => suggestions,
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!("; did you mean: {}?", suggestions.join(", "))
    }
}

/// Compute typo suggestions for `name` from `available`.
///
/// Keys of up to three characters allow one edit, longer keys two. At most
/// three suggestions are returned, closest first.
pub fn compute_suggestions<S: AsRef<str>>(name: &str, available: &[S]) -> Vec<String> {
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = available
        .iter()
        .filter_map(|candidate| {
            let candidate = candidate.as_ref();
            let dist = levenshtein(name, candidate);
            (dist > 0 && dist <= max_distance).then(|| (dist, candidate.to_string()))
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}

/// Reports every persisted object and property in `snapshot` that `model`
/// does not declare, in object then property order.
pub fn lint_snapshot(model: &Model, snapshot: &HostSnapshot) -> Vec<SnapshotWarning> {
    let Some(objects) = snapshot.objects() else {
        return Vec::new();
    };
    let card_names: Vec<&str> = model.cards.iter().map(Card::name).collect();

    let mut warnings = Vec::new();
    for (object, properties) in objects {
        let Some(card) = model.card(object) else {
            warnings.push(SnapshotWarning::UnknownObject {
                object: object.clone(),
                suggestions: compute_suggestions(object, &card_names),
            });
            continue;
        };

        let declared: Vec<&str> = declared_properties(card).into_iter().collect();
        for property in properties.keys() {
            if !declared.contains(&property.as_str()) {
                warnings.push(SnapshotWarning::UnknownProperty {
                    object: object.clone(),
                    property: property.clone(),
                    suggestions: compute_suggestions(property, &declared),
                });
            }
        }
    }
    warnings
}

/// Every property name a card reads, hidden slices included.
fn declared_properties(card: &Card) -> BTreeSet<&str> {
    let mut names = BTreeSet::new();
    if let Some(toggle) = card.top_level_slice() {
        names.insert(toggle.name.as_str());
    }
    for group in card.groups() {
        collect_group(group, &mut names);
    }
    names
}

fn collect_group<'a>(group: &'a Group, names: &mut BTreeSet<&'a str>) {
    if let Some(toggle) = &group.top_level_slice {
        names.insert(toggle.name.as_str());
    }
    let items = group.container.iter().flat_map(|c| &c.container_items);
    let slices = group
        .slices
        .iter()
        .chain(items.clone().flat_map(|item| &item.slices));
    for slice in slices {
        names.extend(slice.properties().into_iter().map(|part| part.name.as_str()));
    }
    for nested in items.flat_map(|item| &item.groups) {
        collect_group(nested, names);
    }
}
