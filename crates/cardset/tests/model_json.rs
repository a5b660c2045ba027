//! Tests for reading settings trees from JSON declarations.

use cardset::{Card, CompositeKind, ControlType, InstanceKind, Model, SliceKind, load_model};
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;

fn declaration() -> serde_json::Value {
    json!({
        "cards": [
            {
                "kind": "simple",
                "name": "labels",
                "displayName": "Data labels",
                "topLevelSlice": { "name": "show", "type": "ToggleSwitch", "value": true },
                "slices": [
                    { "kind": "simple", "name": "size", "type": "NumUpDown", "value": 9,
                      "options": { "minValue": { "type": 0, "value": 6 } } },
                    null,
                    { "kind": "simple", "name": "trend", "type": "Sparkline" },
                    { "kind": "composite", "name": "font", "type": "FontControl",
                      "fontFamily": { "name": "fontFamily", "type": "FontPicker", "value": "Arial" },
                      "fontSize": { "name": "fontSize", "type": "NumUpDown", "value": 9 } }
                ]
            },
            null,
            {
                "kind": "composite",
                "name": "dataColors",
                "groups": [
                    {
                        "name": "series",
                        "container": {
                            "containerItems": [
                                { "displayName": "Sales",
                                  "slices": [ { "kind": "simple", "name": "fill", "type": "ColorPicker",
                                                "selector": { "metadata": "Sales" }, "instanceKind": 3 } ] }
                            ]
                        }
                    }
                ]
            }
        ]
    })
}

#[test]
fn declaration_deserializes_skipping_nulls() {
    let model: Model = serde_json::from_value(declaration()).unwrap();
    assert_eq!(model.cards.len(), 2);
    assert!(matches!(model.cards[0], Card::Simple(_)));
    assert!(matches!(model.cards[1], Card::Composite(_)));

    let labels = model.card("labels").unwrap();
    assert_eq!(labels.groups()[0].slices.len(), 3);
}

#[test]
fn unknown_widget_kind_deserializes_as_unsupported() {
    let model: Model = serde_json::from_value(declaration()).unwrap();
    let trend = model.card("labels").unwrap().groups()[0].slices[1]
        .as_simple()
        .unwrap();
    assert_eq!(trend.kind, SliceKind::Unsupported);
    assert_eq!(trend.kind.control_type(), None);
}

#[test]
fn numeric_options_and_composites_deserialize() {
    let model: Model = serde_json::from_value(declaration()).unwrap();
    let slices = &model.card("labels").unwrap().groups()[0].slices;

    let SliceKind::NumUpDown { options } = &slices[0].as_simple().unwrap().kind else {
        panic!("expected a number input");
    };
    let options = options.as_ref().unwrap();
    assert!(!options.contains(5.0));
    assert!(options.contains(6.0));

    let font = slices[2].as_composite().unwrap();
    assert_eq!(font.kind.control_type(), ControlType::FontControl);
    let CompositeKind::FontControl { font_family, bold, .. } = &font.kind else {
        panic!("expected a font control");
    };
    assert_eq!(font_family.value, json!("Arial"));
    assert!(bold.is_none());
}

#[test]
fn container_slices_keep_selectors() {
    let model: Model = serde_json::from_value(declaration()).unwrap();
    let group = &model.card("dataColors").unwrap().groups()[0];
    let item = &group.container.as_ref().unwrap().container_items[0];
    let fill = item.slices[0].as_simple().unwrap();

    assert_eq!(fill.selector.as_ref().unwrap().as_value(), &json!({ "metadata": "Sales" }));
    assert_eq!(fill.instance_kind, Some(InstanceKind::ConstantOrRule));
}

#[test]
fn load_model_reads_a_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", declaration()).unwrap();

    let model = load_model(file.path()).unwrap();
    assert_eq!(model.cards.len(), 2);
}

#[test]
fn load_model_reports_invalid_json_with_path() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{ \"cards\": [ }}").unwrap();

    let err = load_model(file.path()).unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("invalid JSON in"));
    assert!(message.contains(&file.path().display().to_string()));
}
