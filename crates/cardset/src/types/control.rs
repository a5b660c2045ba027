use serde::{Deserialize, Serialize};

/// The host editor control a compiled slice is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlType {
    AlignmentGroup,
    ColorPicker,
    DatePicker,
    Dropdown,
    DurationPicker,
    ErrorRangeControl,
    FieldPicker,
    FlagsSelection,
    FontControl,
    FontPicker,
    GradientBar,
    ImageUpload,
    ListEditor,
    MarginPadding,
    NumUpDown,
    ReadOnlyText,
    ShapeMapSelector,
    Slider,
    TextArea,
    TextInput,
    ToggleSwitch,
}
