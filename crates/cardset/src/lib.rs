pub mod compiler;
pub mod descriptor;
pub mod load;
pub mod localize;
pub mod model;
pub mod snapshot;
pub mod types;

pub use compiler::{SettingsService, SnapshotWarning, compile, lint_snapshot, populate, revert_descriptors};
pub use descriptor::{
    ComponentOptions, Control, ControlProperties, Descriptor, FormattingCard, FormattingContainer,
    FormattingContainerItem, FormattingGroup, FormattingModel, FormattingSlice, RevertDescriptor,
    SimpleComponent,
};
pub use load::{LoadError, load_model, load_snapshot};
pub use localize::{Localizer, TranslationTable};
pub use model::{
    Card, CompositeCard, CompositeKind, CompositeSlice, Container, ContainerItem, Group, Model,
    Named, PreProcessHook, SimpleCard, SimpleSlice, Slice, SliceKind,
};
pub use snapshot::{HostSnapshot, ObjectMap, PropertyMap};
pub use types::{
    AlignmentMode, ControlType, EnumMember, InstanceKind, NumUpDownOptions, NumericBound,
    Selector, ValidatorType,
};

pub use serde_json::Value;
