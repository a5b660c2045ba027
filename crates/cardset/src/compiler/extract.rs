//! Normalization of persisted host values.

use serde_json::{Number, Value, json};
use tracing::trace;

use crate::model::{SimpleSlice, SliceKind};
use crate::types::{EnumMember, NumUpDownOptions};

/// Largest integer an `f64` represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Returns the effective value of `slice` given a persisted `raw` value.
///
/// - An absent or `null` raw value yields `default`.
/// - A solid-color wrapper `{"solid": {"color": c}}` yields `c`, wrapped as
///   `{"value": c}` when `default` has that shape.
/// - Any other JSON object yields `default`; hosts occasionally persist
///   enumeration leftovers that must not reach a slice.
/// - Number inputs and sliders parse numeric strings, reject other scalars
///   and clamp into their declared bounds.
/// - Dropdowns with an item catalog resolve the scalar to its catalog entry.
/// - Every other value is returned unchanged.
pub fn extract(raw: Option<&Value>, slice: &SimpleSlice, default: &Value) -> Value {
    let Some(raw) = raw.filter(|raw| !raw.is_null()) else {
        return default.clone();
    };

    if let Some(color) = solid_color(raw) {
        return shape_color(color, default);
    }

    if raw.is_object() {
        trace!(property = %slice.name, "ignoring unrecognized persisted record");
        return default.clone();
    }

    match &slice.kind {
        SliceKind::NumUpDown { options } | SliceKind::Slider { options } => {
            numeric(raw, options.as_ref()).unwrap_or_else(|| default.clone())
        }
        SliceKind::ItemDropdown { items } if !items.is_empty() => {
            resolve_item(items, raw).unwrap_or_else(|| default.clone())
        }
        _ => raw.clone(),
    }
}

/// Looks up the catalog entry a persisted scalar selects.
pub(crate) fn resolve_item(items: &[EnumMember], raw: &Value) -> Option<Value> {
    items
        .iter()
        .find(|item| item.matches(raw))
        .map(EnumMember::to_value)
}

fn solid_color(raw: &Value) -> Option<&Value> {
    raw.get("solid")?.get("color").filter(|color| !color.is_null())
}

fn shape_color(color: &Value, default: &Value) -> Value {
    if default.get("value").is_some() {
        json!({ "value": color })
    } else {
        color.clone()
    }
}

fn numeric(raw: &Value, options: Option<&NumUpDownOptions>) -> Option<Value> {
    let number = match raw {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => text.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if !number.is_finite() {
        return None;
    }

    match options {
        Some(options) if !options.contains(number) => number_value(options.clamp(number)),
        _ if raw.is_number() => Some(raw.clone()),
        _ => number_value(number),
    }
}

/// Whole numbers stay integers so `14` does not come back as `14.0`.
fn number_value(number: f64) -> Option<Value> {
    if number.fract() == 0.0 && number.abs() <= MAX_SAFE_INTEGER {
        return Some(Value::from(number as i64));
    }
    Number::from_f64(number).map(Value::Number)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{number_value, solid_color};

    #[test]
    fn whole_numbers_become_integers() {
        assert_eq!(number_value(14.0), Some(json!(14)));
        assert_eq!(number_value(2.5), Some(json!(2.5)));
    }

    #[test]
    fn solid_color_requires_a_color() {
        assert_eq!(
            solid_color(&json!({ "solid": { "color": "#123456" } })),
            Some(&json!("#123456"))
        );
        assert_eq!(solid_color(&json!({ "solid": {} })), None);
        assert_eq!(solid_color(&json!("#123456")), None);
    }
}
