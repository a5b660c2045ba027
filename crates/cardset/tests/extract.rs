//! Tests for normalizing persisted values.

use cardset::compiler::extract;
use cardset::{EnumMember, NumUpDownOptions, SimpleSlice, SliceKind};
use serde_json::{Value, json};

fn slice(kind: SliceKind, value: Value) -> SimpleSlice {
    SimpleSlice::builder().name("prop").kind(kind).value(value).build()
}

fn dropdown() -> SimpleSlice {
    let items = vec![EnumMember::new("Left", "left"), EnumMember::new("Three", "3")];
    slice(SliceKind::ItemDropdown { items }, json!({ "displayName": "Left", "value": "left" }))
}

// =========================================================================
// Missing and Malformed Values
// =========================================================================

#[test]
fn absent_value_yields_default() {
    let toggle = slice(SliceKind::ToggleSwitch, json!(true));
    assert_eq!(extract(None, &toggle, &json!(true)), json!(true));
}

#[test]
fn null_value_yields_default() {
    let text = slice(SliceKind::text_input(), json!("hello"));
    assert_eq!(extract(Some(&Value::Null), &text, &json!("hello")), json!("hello"));
}

#[test]
fn unrecognized_object_yields_default() {
    let text = slice(SliceKind::text_input(), json!("hello"));
    let raw = json!({ "displayName": "Left", "value": "left" });
    assert_eq!(extract(Some(&raw), &text, &json!("hello")), json!("hello"));
}

#[test]
fn scalars_and_arrays_pass_through() {
    let toggle = slice(SliceKind::ToggleSwitch, json!(true));
    assert_eq!(extract(Some(&json!(false)), &toggle, &json!(true)), json!(false));

    let list = slice(SliceKind::ListEditor, json!([]));
    assert_eq!(extract(Some(&json!([1, 2])), &list, &json!([])), json!([1, 2]));
}

// =========================================================================
// Colors
// =========================================================================

#[test]
fn solid_color_is_unwrapped() {
    let fill = slice(SliceKind::color_picker(), json!("#FF0000"));
    let raw = json!({ "solid": { "color": "#00FF00" } });
    assert_eq!(extract(Some(&raw), &fill, &json!("#FF0000")), json!("#00FF00"));
}

#[test]
fn solid_color_keeps_wrapped_default_shape() {
    let default = json!({ "value": "#FF0000" });
    let fill = slice(SliceKind::color_picker(), default.clone());
    let raw = json!({ "solid": { "color": "#00FF00" } });
    assert_eq!(extract(Some(&raw), &fill, &default), json!({ "value": "#00FF00" }));
}

#[test]
fn solid_wrapper_without_color_yields_default() {
    let fill = slice(SliceKind::color_picker(), json!("#FF0000"));
    let raw = json!({ "solid": {} });
    assert_eq!(extract(Some(&raw), &fill, &json!("#FF0000")), json!("#FF0000"));
}

// =========================================================================
// Numbers
// =========================================================================

#[test]
fn numeric_string_is_parsed() {
    let size = slice(SliceKind::num_up_down(), json!(12));
    assert_eq!(extract(Some(&json!("14")), &size, &json!(12)), json!(14));
    assert_eq!(extract(Some(&json!("2.5")), &size, &json!(12)), json!(2.5));
}

#[test]
fn non_numeric_value_yields_default() {
    let size = slice(SliceKind::num_up_down(), json!(12));
    assert_eq!(extract(Some(&json!("large")), &size, &json!(12)), json!(12));
    assert_eq!(extract(Some(&json!(true)), &size, &json!(12)), json!(12));
}

#[test]
fn out_of_bounds_number_is_clamped() {
    let options = Some(NumUpDownOptions::bounded(0.0, 100.0));
    let opacity = slice(SliceKind::Slider { options }, json!(50));
    assert_eq!(extract(Some(&json!(150)), &opacity, &json!(50)), json!(100));
    assert_eq!(extract(Some(&json!(-5)), &opacity, &json!(50)), json!(0));
    assert_eq!(extract(Some(&json!(42)), &opacity, &json!(50)), json!(42));
}

// =========================================================================
// Dropdown Catalogs
// =========================================================================

#[test]
fn dropdown_scalar_resolves_to_catalog_entry() {
    let position = dropdown();
    let default = position.value.clone();
    assert_eq!(
        extract(Some(&json!("left")), &position, &default),
        json!({ "displayName": "Left", "value": "left" })
    );
}

#[test]
fn dropdown_number_matches_string_entry() {
    let position = dropdown();
    let default = position.value.clone();
    assert_eq!(
        extract(Some(&json!(3)), &position, &default),
        json!({ "displayName": "Three", "value": "3" })
    );
}

#[test]
fn dropdown_unknown_scalar_yields_default() {
    let position = dropdown();
    let default = position.value.clone();
    assert_eq!(extract(Some(&json!("right")), &position, &default), default);
}
