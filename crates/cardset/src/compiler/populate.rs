//! Overlaying persisted host values onto a settings tree.

use tracing::{debug, trace};

use crate::compiler::extract;
use crate::model::{Card, Group, Model, SimpleSlice, Slice};
use crate::snapshot::{HostSnapshot, PropertyMap};

/// Overwrites every slice value in `model` with its persisted counterpart.
///
/// Hidden cards, groups and slices are populated too, since visibility may
/// change after population. Each slice is looked up under its card's object
/// name by its own property name; composite slices are populated part by
/// part. Values missing from the snapshot leave the current value in place,
/// so populating twice with one snapshot equals populating once.
///
/// Does nothing when `snapshot` is absent or carries no object map.
///
/// # Example
///
/// ```
/// use cardset::{Card, HostSnapshot, Model, SimpleCard, SimpleSlice, SliceKind, Group};
/// use cardset::compiler::populate;
/// use serde_json::json;
///
/// let fill = SimpleSlice::builder()
///     .name("fill")
///     .kind(SliceKind::color_picker())
///     .value("#FF0000")
///     .build();
/// let card = SimpleCard::new(Group::builder().name("dataColors").slices(vec![fill.into()]).build());
/// let mut model = Model::new(vec![Card::from(card)]);
///
/// let snapshot = HostSnapshot::from_json(&json!({
///     "dataColors": { "fill": { "solid": { "color": "#00FF00" } } }
/// }));
/// populate(&mut model, Some(&snapshot));
///
/// let slice = model.cards[0].groups()[0].slices[0].as_simple().unwrap();
/// assert_eq!(slice.value, json!("#00FF00"));
/// ```
pub fn populate(model: &mut Model, snapshot: Option<&HostSnapshot>) {
    let Some(objects) = snapshot.and_then(HostSnapshot::objects) else {
        debug!("no persisted objects, keeping defaults");
        return;
    };

    for card in &mut model.cards {
        let Some(properties) = objects.get(card.name()) else {
            trace!(object = %card.name(), "nothing persisted for card");
            continue;
        };
        debug!(object = %card.name(), properties = properties.len(), "populating card");
        populate_card(card, properties);
    }
}

fn populate_card(card: &mut Card, properties: &PropertyMap) {
    if let Some(toggle) = card.top_level_slice_mut() {
        populate_simple(toggle, properties);
    }
    for group in card.groups_mut() {
        populate_group(group, properties);
    }
}

fn populate_group(group: &mut Group, properties: &PropertyMap) {
    if let Some(toggle) = &mut group.top_level_slice {
        populate_simple(toggle, properties);
    }
    populate_slices(&mut group.slices, properties);

    let Some(container) = &mut group.container else {
        return;
    };
    for item in &mut container.container_items {
        populate_slices(&mut item.slices, properties);
        for nested in &mut item.groups {
            populate_group(nested, properties);
        }
    }
}

fn populate_slices(slices: &mut [Slice], properties: &PropertyMap) {
    for slice in slices {
        match slice {
            Slice::Simple(slice) => populate_simple(slice, properties),
            Slice::Composite(composite) => {
                for (_, part) in composite.kind.parts_mut() {
                    populate_simple(part, properties);
                }
            }
        }
    }
}

fn populate_simple(slice: &mut SimpleSlice, properties: &PropertyMap) {
    let value = extract(properties.get(&slice.name), slice, &slice.value);
    slice.value = value;
}
