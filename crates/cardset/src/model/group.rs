use bon::Builder;
use serde::{Deserialize, Serialize};

use super::named::impl_named;
use super::skip_nulls;
use super::slice::{SimpleSlice, Slice};

/// A named bag of slices inside a card.
///
/// A group may also hold a [`Container`] repeating a slice set per category,
/// and one promoted top-level slice (conventionally a toggle) drawn inline
/// with the group header.
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub name: String,

    #[builder(default)]
    #[serde(
        default,
        deserialize_with = "skip_nulls",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub slices: Vec<Slice>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<Container>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_level_slice: Option<SimpleSlice>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled_reason_key: Option<String>,

    /// Slice edits in this group are held back until the user confirms them.
    /// The flag is passed through to the host untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_save_slices: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_key: Option<String>,
}

impl Group {
    /// Missing visibility means visible.
    pub fn is_visible(&self) -> bool {
        self.visible.unwrap_or(true)
    }
}

/// Repeats a slice set once per dynamic category, such as per data series.
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
#[serde(rename_all = "camelCase")]
pub struct Container {
    #[builder(default)]
    #[serde(default, deserialize_with = "skip_nulls")]
    pub container_items: Vec<ContainerItem>,

    /// Whether the host lets the user add, remove and edit items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_editable: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_key: Option<String>,
}

/// One category of a [`Container`], with its own slices and optional
/// nested groups.
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
#[serde(rename_all = "camelCase")]
pub struct ContainerItem {
    #[builder(default)]
    #[serde(
        default,
        deserialize_with = "skip_nulls",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub slices: Vec<Slice>,

    #[builder(default)]
    #[serde(
        default,
        deserialize_with = "skip_nulls",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub groups: Vec<Group>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_key: Option<String>,
}

impl ContainerItem {
    /// Missing visibility means visible.
    pub fn is_visible(&self) -> bool {
        self.visible.unwrap_or(true)
    }
}

impl_named!(Group, Container, ContainerItem);
