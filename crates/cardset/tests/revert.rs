//! Tests for revert-to-default descriptors.

use cardset::compiler::revert_descriptors;
use cardset::{
    Card, CompositeCard, CompositeKind, CompositeSlice, Container, ContainerItem, Group,
    RevertDescriptor, SimpleCard, SimpleSlice, SliceKind,
};

fn number(name: &str) -> SimpleSlice {
    SimpleSlice::builder()
        .name(name)
        .kind(SliceKind::num_up_down())
        .value(0)
        .build()
}

fn names(descriptors: &[RevertDescriptor]) -> Vec<&str> {
    descriptors
        .iter()
        .map(|descriptor| descriptor.property_name.as_str())
        .collect()
}

#[test]
fn simple_card_lists_toggle_then_slices() {
    let group = Group::builder()
        .name("labels")
        .top_level_slice(
            SimpleSlice::builder()
                .name("show")
                .kind(SliceKind::ToggleSwitch)
                .value(true)
                .build(),
        )
        .slices(vec![number("size").into(), number("precision").into()])
        .build();
    let card = Card::from(SimpleCard::new(group));

    let descriptors = revert_descriptors(&card);
    assert_eq!(names(&descriptors), ["show", "size", "precision"]);
    assert_eq!(descriptors[0], RevertDescriptor::new("labels", "show"));
}

#[test]
fn repeated_names_are_listed_once() {
    let first = Group::builder()
        .name("first")
        .slices(vec![number("fill").into(), number("fill").into()])
        .build();
    let second = Group::builder()
        .name("second")
        .slices(vec![number("fill").into(), number("width").into()])
        .build();
    let card = Card::from(
        CompositeCard::builder()
            .name("dataColors")
            .groups(vec![first, second])
            .build(),
    );

    assert_eq!(names(&revert_descriptors(&card)), ["fill", "width"]);
}

#[test]
fn composite_slices_contribute_every_part() {
    let margins = CompositeSlice::builder()
        .name("margins")
        .kind(CompositeKind::MarginPadding {
            left: number("left"),
            right: number("right"),
            top: number("top"),
            bottom: number("bottom"),
        })
        .build();
    let group = Group::builder()
        .name("layout")
        .slices(vec![margins.into()])
        .build();
    let card = Card::from(SimpleCard::new(group));

    assert_eq!(
        names(&revert_descriptors(&card)),
        ["left", "right", "top", "bottom"]
    );
}

#[test]
fn hidden_entries_are_skipped_and_containers_included() {
    let hidden_slice = SimpleSlice::builder()
        .name("secret")
        .kind(SliceKind::ToggleSwitch)
        .visible(false)
        .build();
    let shown_item = ContainerItem::builder()
        .display_name("Sales")
        .slices(vec![number("width").into()])
        .groups(vec![
            Group::builder()
                .name("detail")
                .slices(vec![number("depth").into()])
                .build(),
        ])
        .build();
    let hidden_item = ContainerItem::builder()
        .display_name("Profit")
        .visible(false)
        .slices(vec![number("height").into()])
        .build();
    let group = Group::builder()
        .name("series")
        .slices(vec![hidden_slice.into(), number("size").into()])
        .container(
            Container::builder()
                .container_items(vec![shown_item, hidden_item])
                .build(),
        )
        .build();
    let hidden_group = Group::builder()
        .name("extra")
        .visible(false)
        .slices(vec![number("extra").into()])
        .build();
    let card = Card::from(
        CompositeCard::builder()
            .name("lines")
            .top_level_slice(
                SimpleSlice::builder()
                    .name("show")
                    .kind(SliceKind::ToggleSwitch)
                    .build(),
            )
            .groups(vec![group, hidden_group])
            .build(),
    );

    assert_eq!(
        names(&revert_descriptors(&card)),
        ["show", "size", "width", "depth"]
    );
}

#[test]
fn hidden_composite_card_reverts_nothing() {
    let card = Card::from(
        CompositeCard::builder()
            .name("lines")
            .visible(false)
            .groups(vec![
                Group::builder()
                    .name("general")
                    .slices(vec![number("width").into()])
                    .build(),
            ])
            .build(),
    );
    assert!(revert_descriptors(&card).is_empty());
}
