//! Tests for checking host snapshots against a settings tree.

use cardset::compiler::{SnapshotWarning, compute_suggestions, lint_snapshot};
use cardset::{
    Card, CompositeCard, Container, ContainerItem, Group, HostSnapshot, Model, SimpleCard,
    SimpleSlice, SliceKind,
};
use serde_json::json;

fn slice(name: &str) -> SimpleSlice {
    SimpleSlice::builder()
        .name(name)
        .kind(SliceKind::ToggleSwitch)
        .build()
}

fn model() -> Model {
    let labels = Group::builder()
        .name("labels")
        .top_level_slice(slice("show"))
        .slices(vec![slice("fontSize").into()])
        .build();
    let item = ContainerItem::builder()
        .display_name("Sales")
        .slices(vec![slice("fill").into()])
        .build();
    let series = Group::builder()
        .name("series")
        .slices(vec![
            SimpleSlice::builder()
                .name("hidden")
                .kind(SliceKind::ToggleSwitch)
                .visible(false)
                .build()
                .into(),
        ])
        .container(Container::builder().container_items(vec![item]).build())
        .build();
    let colors = CompositeCard::builder()
        .name("dataColors")
        .groups(vec![series])
        .build();
    Model::new(vec![
        Card::from(SimpleCard::new(labels)),
        Card::from(colors),
    ])
}

// =========================================================================
// Suggestions
// =========================================================================

#[test]
fn compute_suggestions_finds_similar_names() {
    let available = ["fill", "fontSize", "show"];
    assert_eq!(compute_suggestions("fil", &available), ["fill"]);
    assert_eq!(compute_suggestions("fontsize", &available), ["fontSize"]);
    assert!(compute_suggestions("legend", &available).is_empty());
}

#[test]
fn compute_suggestions_skips_exact_match_and_limits_to_three() {
    let available: Vec<String> = (0..10).map(|i| format!("item{i}")).collect();
    let suggestions = compute_suggestions("item", &available);
    assert_eq!(suggestions.len(), 3);
    assert!(compute_suggestions("item1", &["item1"]).is_empty());
}

// =========================================================================
// Snapshot Linting
// =========================================================================

#[test]
fn declared_properties_produce_no_warnings() {
    let snapshot = HostSnapshot::from_json(&json!({
        "labels": { "show": true, "fontSize": 10 },
        "dataColors": { "fill": "#FF0000", "hidden": false }
    }));
    assert!(lint_snapshot(&model(), &snapshot).is_empty());
}

#[test]
fn empty_snapshot_produces_no_warnings() {
    assert!(lint_snapshot(&model(), &HostSnapshot::default()).is_empty());
}

#[test]
fn unknown_object_is_reported_with_suggestions() {
    let snapshot = HostSnapshot::from_json(&json!({ "label": { "show": true } }));
    let warnings = lint_snapshot(&model(), &snapshot);
    assert_eq!(
        warnings,
        [SnapshotWarning::UnknownObject {
            object: "label".to_string(),
            suggestions: vec!["labels".to_string()],
        }]
    );
    assert_eq!(
        warnings[0].to_string(),
        "persisted object 'label' has no card; did you mean: labels?"
    );
}

#[test]
fn unknown_property_is_reported() {
    let snapshot = HostSnapshot::from_json(&json!({
        "labels": { "fontSzie": 10, "color": "#000000" }
    }));
    let warnings = lint_snapshot(&model(), &snapshot);
    assert_eq!(warnings.len(), 2);
    assert_eq!(
        warnings[0].to_string(),
        "persisted property 'labels.color' has no slice"
    );
    assert_eq!(warnings[1].suggestions(), ["fontSize"]);
}
