//! The descriptor tree handed to the host to draw a property pane.
//!
//! These types are output only. They serialize to the host's camelCase shape
//! and omit absent optional fields.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::types::{
    AlignmentMode, ControlType, EnumMember, InstanceKind, NumUpDownOptions, Selector,
};

/// A compiled pane: visible cards in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormattingModel {
    pub cards: Vec<FormattingCard>,
}

impl FormattingModel {
    pub fn card(&self, uid: &str) -> Option<&FormattingCard> {
        self.cards.iter().find(|card| card.uid == uid)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattingCard {
    pub uid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub groups: Vec<FormattingGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_level_toggle: Option<FormattingSlice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics_pane: Option<bool>,
    pub revert_to_default_descriptors: Vec<RevertDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattingGroup {
    pub uid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub slices: Vec<FormattingSlice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<FormattingContainer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_level_toggle: Option<FormattingSlice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_save_slices: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled_reason: Option<String>,
}

impl FormattingGroup {
    /// Every slice uid in this group, container items included.
    pub fn slice_uids(&self) -> Vec<&str> {
        let mut uids: Vec<&str> = self.slices.iter().map(|slice| slice.uid.as_str()).collect();
        if let Some(container) = &self.container {
            for item in &container.container_items {
                uids.extend(item.slices.iter().map(|slice| slice.uid.as_str()));
                for group in &item.groups {
                    uids.extend(group.slice_uids());
                }
            }
        }
        uids
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattingContainer {
    pub uid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub container_items: Vec<FormattingContainerItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_editable: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattingContainerItem {
    pub uid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub slices: Vec<FormattingSlice>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<FormattingGroup>,
}

/// One editor row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattingSlice {
    pub uid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppress_display_name: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled_reason: Option<String>,
    pub control: Control,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Control {
    #[serde(rename = "type")]
    pub control_type: ControlType,
    pub properties: ControlProperties,
}

/// A simple row carries one component; a composite row carries one
/// component per part, keyed by the part's role.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ControlProperties {
    Simple(SimpleComponent),
    Composite(BTreeMap<String, SimpleComponent>),
}

impl ControlProperties {
    pub fn as_simple(&self) -> Option<&SimpleComponent> {
        match self {
            ControlProperties::Simple(component) => Some(component),
            ControlProperties::Composite(_) => None,
        }
    }

    /// The component of a composite part.
    pub fn part(&self, role: &str) -> Option<&SimpleComponent> {
        match self {
            ControlProperties::Simple(_) => None,
            ControlProperties::Composite(parts) => parts.get(role),
        }
    }
}

/// Addressing plus current value of one host property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimpleComponent {
    pub descriptor: Descriptor,
    pub value: Value,
    #[serde(flatten)]
    pub options: Option<ComponentOptions>,
}

/// Kind-specific metadata merged into a component's payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged, rename_all_fields = "camelCase")]
pub enum ComponentOptions {
    Color {
        #[serde(skip_serializing_if = "Option::is_none")]
        default_color: Option<Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        is_no_fill_item_supported: Option<bool>,
    },
    Numeric {
        #[serde(skip_serializing_if = "Option::is_none")]
        options: Option<NumUpDownOptions>,
    },
    Text {
        #[serde(skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
    },
    Date {
        #[serde(skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        validators: Option<Value>,
    },
    Items {
        items: Vec<EnumMember>,
    },
    AutoDropdown {
        #[serde(skip_serializing_if = "Option::is_none")]
        merge_values: Option<Vec<EnumMember>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        filter_values: Option<Vec<Value>>,
    },
    Validators {
        #[serde(skip_serializing_if = "Option::is_none")]
        validators: Option<Value>,
    },
    FieldPicker {
        #[serde(skip_serializing_if = "Option::is_none")]
        validators: Option<Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        allow_multiple_values: Option<bool>,
    },
    Alignment {
        #[serde(skip_serializing_if = "Option::is_none")]
        mode: Option<AlignmentMode>,
        #[serde(skip_serializing_if = "Option::is_none")]
        supports_no_selection: Option<bool>,
    },
    ShapeMap {
        #[serde(skip_serializing_if = "Option::is_none")]
        is_az_map_reference_selector: Option<bool>,
    },
}

/// Where the host reads and writes a property value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Descriptor {
    pub object_name: String,
    pub property_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<Selector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_constant_value_selector: Option<Selector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_kind: Option<InstanceKind>,
}

/// A property the host resets when the user reverts a card to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevertDescriptor {
    pub object_name: String,
    pub property_name: String,
}

impl RevertDescriptor {
    pub fn new(object_name: impl Into<String>, property_name: impl Into<String>) -> Self {
        Self {
            object_name: object_name.into(),
            property_name: property_name.into(),
        }
    }
}
