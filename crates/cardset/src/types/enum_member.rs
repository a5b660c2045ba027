use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of a dropdown or flags catalog: the text shown and the value
/// persisted by the host.
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
#[serde(rename_all = "camelCase")]
pub struct EnumMember {
    pub display_name: String,
    #[builder(into)]
    pub value: Value,
}

impl EnumMember {
    /// Creates a catalog entry.
    pub fn new(display_name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            display_name: display_name.into(),
            value: value.into(),
        }
    }

    /// Returns the `{displayName, value}` record an editor expects.
    pub fn to_value(&self) -> Value {
        let mut record = Map::new();
        record.insert(
            "displayName".to_string(),
            Value::String(self.display_name.clone()),
        );
        record.insert("value".to_string(), self.value.clone());
        Value::Object(record)
    }

    /// Checks whether a persisted scalar selects this entry.
    ///
    /// Hosts sometimes persist a numeric value for an entry declared with a
    /// string value, so `3` also matches an entry whose value is `"3"`.
    pub fn matches(&self, raw: &Value) -> bool {
        if self.value == *raw {
            return true;
        }
        match (&self.value, raw) {
            (Value::String(declared), Value::Number(number)) => *declared == number.to_string(),
            _ => false,
        }
    }
}
