mod control;
mod enum_member;
mod options;
mod selector;

pub use control::ControlType;
pub use enum_member::EnumMember;
pub use options::{AlignmentMode, NumUpDownOptions, NumericBound, ValidatorType};
pub use selector::{InstanceKind, Selector};
