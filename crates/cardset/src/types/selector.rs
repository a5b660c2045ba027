use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An opaque host selector narrowing a property to a data category or point.
///
/// The compiler never interprets a selector; it only copies it into emitted
/// descriptors and compares selectors for equality.
///
/// # Example
///
/// ```
/// use cardset::Selector;
/// use serde_json::json;
///
/// let series = Selector::new(json!({ "metadata": "Sales.Region" }));
/// assert_eq!(series.key(), r#"{"metadata":"Sales.Region"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selector(Value);

impl Selector {
    /// Wraps a raw host selector value.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Returns the wrapped host value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// A canonical string form, stable for equal selectors.
    pub fn key(&self) -> String {
        self.0.to_string()
    }
}

impl From<Value> for Selector {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// How the host applies a persisted value: as a constant, a rule, or either.
///
/// Serialized as the host's numeric enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum InstanceKind {
    Constant,
    Rule,
    ConstantOrRule,
}

impl From<InstanceKind> for u8 {
    fn from(kind: InstanceKind) -> Self {
        match kind {
            InstanceKind::Constant => 1,
            InstanceKind::Rule => 2,
            InstanceKind::ConstantOrRule => 3,
        }
    }
}

impl TryFrom<u8> for InstanceKind {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(InstanceKind::Constant),
            2 => Ok(InstanceKind::Rule),
            3 => Ok(InstanceKind::ConstantOrRule),
            other => Err(format!("unknown instance kind {other}")),
        }
    }
}
