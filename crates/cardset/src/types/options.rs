use serde::{Deserialize, Serialize};

/// Kind tag of a numeric bound, serialized as the host's numeric enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ValidatorType {
    Min,
    Max,
}

impl From<ValidatorType> for u8 {
    fn from(kind: ValidatorType) -> Self {
        match kind {
            ValidatorType::Min => 0,
            ValidatorType::Max => 1,
        }
    }
}

impl TryFrom<u8> for ValidatorType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ValidatorType::Min),
            1 => Ok(ValidatorType::Max),
            other => Err(format!("unknown validator type {other}")),
        }
    }
}

/// A lower or upper bound on a numeric slice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericBound {
    #[serde(rename = "type")]
    pub kind: ValidatorType,
    pub value: f64,
}

impl NumericBound {
    pub fn min(value: f64) -> Self {
        Self {
            kind: ValidatorType::Min,
            value,
        }
    }

    pub fn max(value: f64) -> Self {
        Self {
            kind: ValidatorType::Max,
            value,
        }
    }
}

/// Display and bounds metadata for number inputs and sliders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumUpDownOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<NumericBound>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<NumericBound>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_symbol_after_input: Option<bool>,
}

impl NumUpDownOptions {
    /// Options bounded on both sides.
    pub fn bounded(min: f64, max: f64) -> Self {
        Self {
            min_value: Some(NumericBound::min(min)),
            max_value: Some(NumericBound::max(max)),
            ..Self::default()
        }
    }

    /// Returns true if `value` lies within every declared bound.
    pub fn contains(&self, value: f64) -> bool {
        self.min_value.is_none_or(|min| value >= min.value)
            && self.max_value.is_none_or(|max| value <= max.value)
    }

    /// Moves `value` into the declared bounds.
    pub fn clamp(&self, value: f64) -> f64 {
        let lower = self.min_value.map_or(value, |min| value.max(min.value));
        self.max_value.map_or(lower, |max| lower.min(max.value))
    }
}

/// Axis of an alignment button group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AlignmentMode {
    HorizontalAlignment,
    VerticalAlignment,
}
