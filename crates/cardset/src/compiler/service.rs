use tracing::debug;

use crate::compiler::{compile, populate};
use crate::descriptor::FormattingModel;
use crate::localize::Localizer;
use crate::model::Model;
use crate::snapshot::HostSnapshot;

/// Entry point bundling population and compilation with an optional
/// localizer.
///
/// # Example
///
/// ```
/// use cardset::{Card, Group, HostSnapshot, Model, SimpleCard, SimpleSlice, SliceKind};
/// use cardset::compiler::SettingsService;
/// use serde_json::json;
///
/// #[derive(Default)]
/// struct LabelSettings {
///     model: Model,
/// }
///
/// impl AsMut<Model> for LabelSettings {
///     fn as_mut(&mut self) -> &mut Model {
///         if self.model.cards.is_empty() {
///             let size = SimpleSlice::builder().name("size").kind(SliceKind::num_up_down()).value(12).build();
///             let group = Group::builder().name("labels").slices(vec![size.into()]).build();
///             self.model = Model::new(vec![Card::from(SimpleCard::new(group))]);
///         }
///         &mut self.model
///     }
/// }
///
/// let service = SettingsService::new();
/// let snapshot = HostSnapshot::from_json(&json!({ "labels": { "size": 14 } }));
/// let mut settings: LabelSettings = service.populate_model(Some(&snapshot));
/// let pane = service.build_formatting_model(settings.as_mut());
///
/// let size = pane.cards[0].groups[0].slices[0].control.properties.as_simple().unwrap();
/// assert_eq!(size.value, json!(14));
/// ```
#[derive(Clone, Copy, Default)]
pub struct SettingsService<'a> {
    localizer: Option<&'a dyn Localizer>,
}

impl<'a> SettingsService<'a> {
    /// A service that leaves display texts as declared.
    pub fn new() -> Self {
        Self::default()
    }

    /// A service that localizes display texts through `localizer`.
    pub fn with_localizer(localizer: &'a dyn Localizer) -> Self {
        Self {
            localizer: Some(localizer),
        }
    }

    /// Builds a fresh settings value and overlays `snapshot` onto it.
    ///
    /// A new value is constructed on every call so values persisted for a
    /// previous snapshot never leak into this one.
    pub fn populate_model<T: Default + AsMut<Model>>(&self, snapshot: Option<&HostSnapshot>) -> T {
        let mut settings = T::default();
        populate(settings.as_mut(), snapshot);
        settings
    }

    /// Compiles `model` into the descriptor tree the host draws.
    pub fn build_formatting_model(&self, model: &mut Model) -> FormattingModel {
        let formatting_model = compile(model, self.localizer);
        debug!(cards = formatting_model.cards.len(), "built formatting model");
        formatting_model
    }
}
