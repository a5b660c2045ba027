//! Compilation of a settings tree into the host descriptor tree.

use std::collections::BTreeMap;

use serde_json::{Value, json};
use tracing::debug;

use crate::compiler::UidTracker;
use crate::compiler::extract::resolve_item;
use crate::compiler::revert_descriptors;
use crate::descriptor::{
    ComponentOptions, Control, ControlProperties, Descriptor, FormattingCard, FormattingContainer,
    FormattingContainerItem, FormattingGroup, FormattingModel, FormattingSlice, SimpleComponent,
};
use crate::localize::{Localizer, resolve};
use crate::model::{
    Card, CompositeSlice, Container, ContainerItem, Group, Model, Named, SimpleSlice, Slice,
    SliceKind,
};

/// State threaded through the compilation of one card.
struct CompileContext<'a> {
    /// Host object name every slice of the card is addressed under.
    object_name: &'a str,
    localizer: Option<&'a dyn Localizer>,
}

impl CompileContext<'_> {
    fn text(&self, literal: Option<&str>, key: Option<&str>) -> Option<String> {
        resolve(literal, key, self.localizer)
    }

    fn display_name(&self, entity: &impl Named) -> Option<String> {
        self.text(entity.display_name(), entity.display_name_key())
    }

    fn description(&self, entity: &impl Named) -> Option<String> {
        self.text(entity.description(), entity.description_key())
    }
}

/// Compiles `model` into the descriptor tree the host draws.
///
/// Cards keep their declaration order; hidden cards, groups, container items
/// and slices are left out. Each card's pre-process hook runs right before its
/// groups are compiled, so the hook may mutate the tree, which is why the
/// model is borrowed mutably. Display texts go through `localizer` when one is
/// given.
///
/// # Example
///
/// ```
/// use cardset::{Card, Group, Model, SimpleCard, SimpleSlice, SliceKind};
/// use cardset::compiler::compile;
///
/// let show = SimpleSlice::builder().name("show").kind(SliceKind::ToggleSwitch).value(true).build();
/// let size = SimpleSlice::builder().name("size").kind(SliceKind::num_up_down()).value(12).build();
/// let group = Group::builder()
///     .name("labels")
///     .display_name("Labels")
///     .top_level_slice(show)
///     .slices(vec![size.into()])
///     .build();
/// let mut model = Model::new(vec![Card::from(SimpleCard::new(group))]);
///
/// let pane = compile(&mut model, None);
/// let card = &pane.cards[0];
/// assert_eq!(card.uid, "labels-card");
/// assert_eq!(card.top_level_toggle.as_ref().unwrap().uid, "labels-show");
/// assert_eq!(card.groups[0].slices[0].uid, "labels-size");
/// ```
pub fn compile(model: &mut Model, localizer: Option<&dyn Localizer>) -> FormattingModel {
    let cards = model
        .cards
        .iter_mut()
        .filter(|card| card.is_visible())
        .map(|card| compile_card(card, localizer))
        .collect();
    FormattingModel { cards }
}

fn compile_card(card: &mut Card, localizer: Option<&dyn Localizer>) -> FormattingCard {
    let object_name = card.name().to_string();
    let ctx = CompileContext {
        object_name: &object_name,
        localizer,
    };
    debug!(object = %object_name, "compiling card");

    let mut formatting_card = FormattingCard {
        uid: format!("{object_name}-card"),
        display_name: ctx.display_name(&*card),
        description: ctx.description(&*card),
        groups: Vec::new(),
        top_level_toggle: card
            .top_level_slice()
            .and_then(|toggle| compile_toggle(toggle, &ctx)),
        analytics_pane: card.analytics_pane(),
        revert_to_default_descriptors: Vec::new(),
    };

    if let Some(hook) = card.pre_process() {
        hook(card);
    }

    let groups: Vec<(&Group, bool)> = match &*card {
        Card::Simple(simple) => vec![(&simple.group, false)],
        Card::Composite(composite) => composite.groups.iter().map(|group| (group, true)).collect(),
    };
    for (group, with_header) in groups.into_iter().filter(|(group, _)| group.is_visible()) {
        let mut compiled = compile_group(group, &ctx, "", with_header, &mut UidTracker::new());
        // A group without a header shows its toggle on the card.
        if compiled.display_name.is_none() && compiled.top_level_toggle.is_some() {
            formatting_card.top_level_toggle = compiled.top_level_toggle.take();
        }
        formatting_card.groups.push(compiled);
    }

    formatting_card.revert_to_default_descriptors = revert_descriptors(card);
    formatting_card
}

/// Compiles one group. `scope` prefixes the group and slice uids when the
/// group is nested inside a container item, and `tracker` is then the item's
/// tracker; `with_header` is false for the implicit group of a simple card.
fn compile_group(
    group: &Group,
    ctx: &CompileContext<'_>,
    scope: &str,
    with_header: bool,
    tracker: &mut UidTracker,
) -> FormattingGroup {
    let uid = format!("{scope}{}-group", group.name);

    let container = group
        .container
        .as_ref()
        .map(|container| compile_container(container, &uid, ctx));

    let top_level_toggle = group
        .top_level_slice
        .as_ref()
        .filter(|toggle| toggle.is_visible())
        .and_then(|toggle| {
            let mut compiled = compile_toggle(toggle, ctx)?;
            compiled.uid = tracker.assign(&toggle.name, &format!("{scope}{}", compiled.uid));
            Some(compiled)
        });
    let slices = compile_slices(
        &group.slices,
        ctx,
        scope,
        group.top_level_slice.as_ref(),
        tracker,
    );

    FormattingGroup {
        display_name: with_header.then(|| ctx.display_name(group)).flatten(),
        description: with_header.then(|| ctx.description(group)).flatten(),
        slices,
        container,
        top_level_toggle,
        collapsible: group.collapsible,
        delay_save_slices: group.delay_save_slices,
        disabled: group.disabled,
        disabled_reason: ctx.text(
            group.disabled_reason.as_deref(),
            group.disabled_reason_key.as_deref(),
        ),
        uid,
    }
}

fn compile_container(
    container: &Container,
    group_uid: &str,
    ctx: &CompileContext<'_>,
) -> FormattingContainer {
    let uid = format!("{group_uid}-container");
    let mut keys = UidTracker::new();
    let container_items = container
        .container_items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.is_visible())
        .map(|(index, item)| {
            let key = item_key(item, index);
            let item_uid = keys.assign(&key, &format!("{uid}-{key}"));
            compile_container_item(item, item_uid, ctx)
        })
        .collect();

    FormattingContainer {
        display_name: ctx.display_name(container),
        description: ctx.description(container),
        container_items,
        is_editable: container.is_editable,
        uid,
    }
}

/// Lookup key, then display name, then position.
fn item_key(item: &ContainerItem, index: usize) -> String {
    item.display_name_key
        .as_deref()
        .or(item.display_name.as_deref())
        .map_or_else(|| index.to_string(), str::to_string)
}

/// Compiles one container item with its own uid scope, so the same property
/// can appear once per item without colliding. The item's slices and the
/// slices of its nested groups share one tracker.
fn compile_container_item(
    item: &ContainerItem,
    uid: String,
    ctx: &CompileContext<'_>,
) -> FormattingContainerItem {
    let scope = format!("{uid}-");

    let mut tracker = UidTracker::new();
    let slices = compile_slices(&item.slices, ctx, &scope, None, &mut tracker);
    let groups = item
        .groups
        .iter()
        .filter(|group| group.is_visible())
        .map(|group| compile_group(group, ctx, &scope, true, &mut tracker))
        .collect();

    FormattingContainerItem {
        display_name: ctx.display_name(item),
        slices,
        groups,
        uid,
    }
}

/// Compiles the visible slices of one scope, making their uids unique
/// through `tracker`. Slices addressing the same property as the scope's
/// top-level toggle are left to the toggle slot.
fn compile_slices(
    slices: &[Slice],
    ctx: &CompileContext<'_>,
    scope: &str,
    toggle: Option<&SimpleSlice>,
    tracker: &mut UidTracker,
) -> Vec<FormattingSlice> {
    slices
        .iter()
        .filter(|slice| slice.is_visible())
        .filter(|slice| match (slice.as_simple(), toggle) {
            (Some(slice), Some(toggle)) => !slice.same_address(toggle),
            _ => true,
        })
        .filter_map(|slice| {
            let mut formatting_slice = compile_slice(slice, ctx)?;
            let base = format!("{scope}{}", formatting_slice.uid);
            formatting_slice.uid = tracker.assign(slice.name(), &base);
            Some(formatting_slice)
        })
        .collect()
}

fn compile_slice(slice: &Slice, ctx: &CompileContext<'_>) -> Option<FormattingSlice> {
    match slice {
        Slice::Simple(slice) => compile_simple_slice(slice, ctx),
        Slice::Composite(slice) => Some(compile_composite_slice(slice, ctx)),
    }
}

/// A promoted toggle renders inline with its header, so its own label is
/// suppressed.
fn compile_toggle(toggle: &SimpleSlice, ctx: &CompileContext<'_>) -> Option<FormattingSlice> {
    let mut formatting_slice = compile_simple_slice(toggle, ctx)?;
    formatting_slice.suppress_display_name = Some(true);
    Some(formatting_slice)
}

fn compile_simple_slice(slice: &SimpleSlice, ctx: &CompileContext<'_>) -> Option<FormattingSlice> {
    let Some(control_type) = slice.kind.control_type() else {
        debug!(object = %ctx.object_name, property = %slice.name, "skipping slice of unsupported kind");
        return None;
    };
    let component = compile_component(slice, ctx)?;

    Some(FormattingSlice {
        uid: format!("{}-{}", ctx.object_name, slice.name),
        display_name: ctx.display_name(slice),
        description: ctx.description(slice),
        suppress_display_name: None,
        disabled: slice.disabled,
        disabled_reason: ctx.text(
            slice.disabled_reason.as_deref(),
            slice.disabled_reason_key.as_deref(),
        ),
        control: Control {
            control_type,
            properties: ControlProperties::Simple(component),
        },
    })
}

/// A composite is one row whose payload holds one component per part.
fn compile_composite_slice(slice: &CompositeSlice, ctx: &CompileContext<'_>) -> FormattingSlice {
    let parts: BTreeMap<String, SimpleComponent> = slice
        .kind
        .parts()
        .into_iter()
        .filter_map(|(role, part)| {
            compile_component(part, ctx).map(|component| (role.to_string(), component))
        })
        .collect();

    FormattingSlice {
        uid: format!("{}-{}", ctx.object_name, slice.name),
        display_name: ctx.display_name(slice),
        description: ctx.description(slice),
        suppress_display_name: None,
        disabled: slice.disabled,
        disabled_reason: ctx.text(
            slice.disabled_reason.as_deref(),
            slice.disabled_reason_key.as_deref(),
        ),
        control: Control {
            control_type: slice.kind.control_type(),
            properties: ControlProperties::Composite(parts),
        },
    }
}

/// Builds the addressing, value and kind metadata of one simple slice.
fn compile_component(slice: &SimpleSlice, ctx: &CompileContext<'_>) -> Option<SimpleComponent> {
    let descriptor = Descriptor {
        object_name: ctx.object_name.to_string(),
        property_name: slice.name.clone(),
        selector: slice.selector.clone(),
        alt_constant_value_selector: slice.alt_constant_selector.clone(),
        instance_kind: slice.instance_kind,
    };

    let (value, options) = match &slice.kind {
        SliceKind::ToggleSwitch
        | SliceKind::AutoFlagsSelection
        | SliceKind::FontPicker
        | SliceKind::GradientBar
        | SliceKind::ImageUpload
        | SliceKind::ListEditor
        | SliceKind::ReadOnlyText => (slice.value.clone(), None),
        SliceKind::ColorPicker {
            default_color,
            is_no_fill_item_supported,
        } => (
            wrap_color(&slice.value),
            Some(ComponentOptions::Color {
                default_color: default_color.as_ref().map(wrap_color),
                is_no_fill_item_supported: *is_no_fill_item_supported,
            }),
        ),
        SliceKind::NumUpDown { options } | SliceKind::Slider { options } => (
            slice.value.clone(),
            Some(ComponentOptions::Numeric {
                options: options.clone(),
            }),
        ),
        SliceKind::TextInput {
            placeholder,
            placeholder_key,
        }
        | SliceKind::TextArea {
            placeholder,
            placeholder_key,
        } => (
            slice.value.clone(),
            Some(ComponentOptions::Text {
                placeholder: ctx.text(placeholder.as_deref(), placeholder_key.as_deref()),
            }),
        ),
        SliceKind::DatePicker {
            placeholder,
            placeholder_key,
            validators,
        } => (
            slice.value.clone(),
            Some(ComponentOptions::Date {
                placeholder: ctx.text(placeholder.as_deref(), placeholder_key.as_deref()),
                validators: validators.clone(),
            }),
        ),
        SliceKind::ItemDropdown { items } => {
            let value = if slice.value.is_object() || slice.value.is_null() {
                slice.value.clone()
            } else {
                resolve_item(items, &slice.value).unwrap_or_else(|| slice.value.clone())
            };
            (
                value,
                Some(ComponentOptions::Items {
                    items: items.clone(),
                }),
            )
        }
        SliceKind::ItemFlagsSelection { items } => (
            slice.value.clone(),
            Some(ComponentOptions::Items {
                items: items.clone(),
            }),
        ),
        SliceKind::AutoDropdown {
            merge_values,
            filter_values,
        } => (
            slice.value.clone(),
            Some(ComponentOptions::AutoDropdown {
                merge_values: merge_values.clone(),
                filter_values: filter_values.clone(),
            }),
        ),
        SliceKind::DurationPicker { validators } | SliceKind::ErrorRangeControl { validators } => (
            slice.value.clone(),
            Some(ComponentOptions::Validators {
                validators: validators.clone(),
            }),
        ),
        SliceKind::FieldPicker {
            validators,
            allow_multiple_values,
        } => (
            slice.value.clone(),
            Some(ComponentOptions::FieldPicker {
                validators: validators.clone(),
                allow_multiple_values: *allow_multiple_values,
            }),
        ),
        SliceKind::ShapeMapSelector {
            is_az_map_reference_selector,
        } => (
            slice.value.clone(),
            Some(ComponentOptions::ShapeMap {
                is_az_map_reference_selector: *is_az_map_reference_selector,
            }),
        ),
        SliceKind::AlignmentGroup {
            mode,
            supports_no_selection,
        } => (
            slice.value.clone(),
            Some(ComponentOptions::Alignment {
                mode: *mode,
                supports_no_selection: *supports_no_selection,
            }),
        ),
        SliceKind::Unsupported => return None,
    };

    Some(SimpleComponent {
        descriptor,
        value,
        options,
    })
}

/// Color pickers take `{"value": color}`; bare colors are wrapped.
fn wrap_color(color: &Value) -> Value {
    if color.get("value").is_some() {
        color.clone()
    } else {
        json!({ "value": color })
    }
}
