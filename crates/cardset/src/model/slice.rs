use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::named::impl_named;
use crate::types::{AlignmentMode, ControlType, EnumMember, InstanceKind, NumUpDownOptions, Selector};

/// A single configurable property bound to one host property name.
///
/// `name` must equal the property name the host declares under the owning
/// card's object; it is the key used both to read persisted values and to
/// address the property in emitted descriptors.
///
/// # Example
///
/// ```
/// use cardset::{SimpleSlice, SliceKind};
///
/// let show = SimpleSlice::builder()
///     .name("show")
///     .display_name("Show labels")
///     .kind(SliceKind::ToggleSwitch)
///     .value(true)
///     .build();
///
/// assert_eq!(show.value, true);
/// assert!(show.is_visible());
/// ```
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
#[serde(rename_all = "camelCase")]
pub struct SimpleSlice {
    pub name: String,

    /// Current value; the declared default until population overlays the
    /// persisted one.
    #[builder(into, default)]
    #[serde(default)]
    pub value: Value,

    /// Widget kind and the metadata that kind carries.
    #[serde(flatten)]
    pub kind: SliceKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<Selector>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_constant_selector: Option<Selector>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_kind: Option<InstanceKind>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled_reason_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_key: Option<String>,
}

impl SimpleSlice {
    /// Missing visibility means visible.
    pub fn is_visible(&self) -> bool {
        self.visible.unwrap_or(true)
    }

    /// True if both slices address the same property and selector.
    pub fn same_address(&self, other: &SimpleSlice) -> bool {
        self.name == other.name && self.selector == other.selector
    }
}

/// The closed set of widget kinds a simple slice can be drawn with.
///
/// Declaration files name the kind with a `"type"` tag; a tag outside this set
/// deserializes to [`SliceKind::Unsupported`], which compiles to nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum SliceKind {
    ToggleSwitch,
    ColorPicker {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default_color: Option<Value>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        is_no_fill_item_supported: Option<bool>,
    },
    NumUpDown {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        options: Option<NumUpDownOptions>,
    },
    Slider {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        options: Option<NumUpDownOptions>,
    },
    TextInput {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder_key: Option<String>,
    },
    TextArea {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder_key: Option<String>,
    },
    DatePicker {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder_key: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        validators: Option<Value>,
    },
    ItemDropdown {
        #[serde(default)]
        items: Vec<EnumMember>,
    },
    AutoDropdown {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        merge_values: Option<Vec<EnumMember>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        filter_values: Option<Vec<Value>>,
    },
    DurationPicker {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        validators: Option<Value>,
    },
    ErrorRangeControl {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        validators: Option<Value>,
    },
    FieldPicker {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        validators: Option<Value>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        allow_multiple_values: Option<bool>,
    },
    ItemFlagsSelection {
        #[serde(default)]
        items: Vec<EnumMember>,
    },
    AutoFlagsSelection,
    FontPicker,
    GradientBar,
    ImageUpload,
    ListEditor,
    ReadOnlyText,
    ShapeMapSelector {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        is_az_map_reference_selector: Option<bool>,
    },
    AlignmentGroup {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mode: Option<AlignmentMode>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        supports_no_selection: Option<bool>,
    },
    #[serde(other)]
    Unsupported,
}

impl SliceKind {
    /// A color picker with no extra metadata.
    pub fn color_picker() -> Self {
        SliceKind::ColorPicker {
            default_color: None,
            is_no_fill_item_supported: None,
        }
    }

    /// A number input with no bounds.
    pub fn num_up_down() -> Self {
        SliceKind::NumUpDown { options: None }
    }

    /// A single-line text input without a placeholder.
    pub fn text_input() -> Self {
        SliceKind::TextInput {
            placeholder: None,
            placeholder_key: None,
        }
    }

    /// The host control this kind compiles to, or `None` for
    /// [`SliceKind::Unsupported`].
    pub fn control_type(&self) -> Option<ControlType> {
        let control = match self {
            SliceKind::ToggleSwitch => ControlType::ToggleSwitch,
            SliceKind::ColorPicker { .. } => ControlType::ColorPicker,
            SliceKind::NumUpDown { .. } => ControlType::NumUpDown,
            SliceKind::Slider { .. } => ControlType::Slider,
            SliceKind::TextInput { .. } => ControlType::TextInput,
            SliceKind::TextArea { .. } => ControlType::TextArea,
            SliceKind::DatePicker { .. } => ControlType::DatePicker,
            SliceKind::ItemDropdown { .. } | SliceKind::AutoDropdown { .. } => {
                ControlType::Dropdown
            }
            SliceKind::DurationPicker { .. } => ControlType::DurationPicker,
            SliceKind::ErrorRangeControl { .. } => ControlType::ErrorRangeControl,
            SliceKind::FieldPicker { .. } => ControlType::FieldPicker,
            SliceKind::ItemFlagsSelection { .. } | SliceKind::AutoFlagsSelection => {
                ControlType::FlagsSelection
            }
            SliceKind::FontPicker => ControlType::FontPicker,
            SliceKind::GradientBar => ControlType::GradientBar,
            SliceKind::ImageUpload => ControlType::ImageUpload,
            SliceKind::ListEditor => ControlType::ListEditor,
            SliceKind::ReadOnlyText => ControlType::ReadOnlyText,
            SliceKind::ShapeMapSelector { .. } => ControlType::ShapeMapSelector,
            SliceKind::AlignmentGroup { .. } => ControlType::AlignmentGroup,
            SliceKind::Unsupported => return None,
        };
        Some(control)
    }
}

/// Several simple slices edited together in one row, such as a font control.
///
/// The composite's own `name` only feeds its compiled identifier; every part
/// is persisted under its own property name.
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
#[serde(rename_all = "camelCase")]
pub struct CompositeSlice {
    pub name: String,

    #[serde(flatten)]
    pub kind: CompositeKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled_reason_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_key: Option<String>,
}

impl CompositeSlice {
    /// Missing visibility means visible.
    pub fn is_visible(&self) -> bool {
        self.visible.unwrap_or(true)
    }
}

/// The composite controls and the parts each one bundles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum CompositeKind {
    FontControl {
        font_family: SimpleSlice,
        font_size: SimpleSlice,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bold: Option<SimpleSlice>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        italic: Option<SimpleSlice>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        underline: Option<SimpleSlice>,
    },
    MarginPadding {
        left: SimpleSlice,
        right: SimpleSlice,
        top: SimpleSlice,
        bottom: SimpleSlice,
    },
}

impl CompositeKind {
    pub fn control_type(&self) -> ControlType {
        match self {
            CompositeKind::FontControl { .. } => ControlType::FontControl,
            CompositeKind::MarginPadding { .. } => ControlType::MarginPadding,
        }
    }

    /// Present parts in declaration order, keyed by the role name the host
    /// expects in the composite payload.
    pub fn parts(&self) -> Vec<(&'static str, &SimpleSlice)> {
        match self {
            CompositeKind::FontControl {
                font_family,
                font_size,
                bold,
                italic,
                underline,
            } => {
                let mut parts = vec![("fontFamily", font_family), ("fontSize", font_size)];
                parts.extend(bold.as_ref().map(|part| ("bold", part)));
                parts.extend(italic.as_ref().map(|part| ("italic", part)));
                parts.extend(underline.as_ref().map(|part| ("underline", part)));
                parts
            }
            CompositeKind::MarginPadding {
                left,
                right,
                top,
                bottom,
            } => vec![
                ("left", left),
                ("right", right),
                ("top", top),
                ("bottom", bottom),
            ],
        }
    }

    /// Mutable access to the present parts, in the same order as [`Self::parts`].
    pub fn parts_mut(&mut self) -> Vec<(&'static str, &mut SimpleSlice)> {
        match self {
            CompositeKind::FontControl {
                font_family,
                font_size,
                bold,
                italic,
                underline,
            } => {
                let mut parts = vec![("fontFamily", font_family), ("fontSize", font_size)];
                parts.extend(bold.as_mut().map(|part| ("bold", part)));
                parts.extend(italic.as_mut().map(|part| ("italic", part)));
                parts.extend(underline.as_mut().map(|part| ("underline", part)));
                parts
            }
            CompositeKind::MarginPadding {
                left,
                right,
                top,
                bottom,
            } => vec![
                ("left", left),
                ("right", right),
                ("top", top),
                ("bottom", bottom),
            ],
        }
    }
}

/// A slice is either one property or a composite of several.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Slice {
    Simple(SimpleSlice),
    Composite(CompositeSlice),
}

impl Slice {
    pub fn name(&self) -> &str {
        match self {
            Slice::Simple(slice) => &slice.name,
            Slice::Composite(slice) => &slice.name,
        }
    }

    pub fn is_visible(&self) -> bool {
        match self {
            Slice::Simple(slice) => slice.is_visible(),
            Slice::Composite(slice) => slice.is_visible(),
        }
    }

    pub fn as_simple(&self) -> Option<&SimpleSlice> {
        match self {
            Slice::Simple(slice) => Some(slice),
            Slice::Composite(_) => None,
        }
    }

    pub fn as_composite(&self) -> Option<&CompositeSlice> {
        match self {
            Slice::Simple(_) => None,
            Slice::Composite(slice) => Some(slice),
        }
    }

    /// The simple slices holding persisted values: the slice itself, or every
    /// part of a composite.
    pub fn properties(&self) -> Vec<&SimpleSlice> {
        match self {
            Slice::Simple(slice) => vec![slice],
            Slice::Composite(slice) => slice.kind.parts().into_iter().map(|(_, part)| part).collect(),
        }
    }
}

impl From<SimpleSlice> for Slice {
    fn from(slice: SimpleSlice) -> Self {
        Slice::Simple(slice)
    }
}

impl From<CompositeSlice> for Slice {
    fn from(slice: CompositeSlice) -> Self {
        Slice::Composite(slice)
    }
}

impl_named!(SimpleSlice, CompositeSlice);
