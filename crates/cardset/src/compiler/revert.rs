use std::collections::HashSet;

use crate::descriptor::RevertDescriptor;
use crate::model::{Card, Group, SimpleSlice, Slice};

/// Lists the properties the host resets when `card` is reverted to defaults.
///
/// Covers the card's visible promoted toggle and every visible slice of every
/// visible group, container items and nested groups included. A composite
/// slice contributes one entry per part. Each property name appears once;
/// the first occurrence wins. A hidden card reverts nothing.
pub fn revert_descriptors(card: &Card) -> Vec<RevertDescriptor> {
    if !card.is_visible() {
        return Vec::new();
    }

    let mut collector = RevertCollector {
        object_name: card.name(),
        seen: HashSet::new(),
        descriptors: Vec::new(),
    };
    if let Some(toggle) = card.top_level_slice().filter(|toggle| toggle.is_visible()) {
        collector.push(toggle);
    }
    for group in card.groups().iter().filter(|group| group.is_visible()) {
        collector.group(group);
    }
    collector.descriptors
}

struct RevertCollector<'a> {
    object_name: &'a str,
    seen: HashSet<&'a str>,
    descriptors: Vec<RevertDescriptor>,
}

impl<'a> RevertCollector<'a> {
    fn group(&mut self, group: &'a Group) {
        if let Some(toggle) = group.top_level_slice.as_ref().filter(|t| t.is_visible()) {
            self.push(toggle);
        }
        self.slices(&group.slices);

        let Some(container) = &group.container else {
            return;
        };
        for item in container.container_items.iter().filter(|item| item.is_visible()) {
            self.slices(&item.slices);
            for nested in item.groups.iter().filter(|nested| nested.is_visible()) {
                self.group(nested);
            }
        }
    }

    fn slices(&mut self, slices: &'a [Slice]) {
        for slice in slices.iter().filter(|slice| slice.is_visible()) {
            for property in slice.properties() {
                self.push(property);
            }
        }
    }

    fn push(&mut self, slice: &'a SimpleSlice) {
        if self.seen.insert(&slice.name) {
            self.descriptors
                .push(RevertDescriptor::new(self.object_name, slice.name.as_str()));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{Card, Group, SimpleCard, SimpleSlice, SliceKind};

    use super::revert_descriptors;

    fn toggle(name: &str) -> SimpleSlice {
        SimpleSlice::builder()
            .name(name)
            .kind(SliceKind::ToggleSwitch)
            .value(true)
            .build()
    }

    #[test]
    fn hidden_card_reverts_nothing() {
        let group = Group::builder()
            .name("legend")
            .visible(false)
            .slices(vec![toggle("show").into()])
            .build();
        let card = Card::from(SimpleCard::new(group));
        assert!(revert_descriptors(&card).is_empty());
    }

    #[test]
    fn toggle_shared_with_a_slice_appears_once() {
        let group = Group::builder()
            .name("legend")
            .top_level_slice(toggle("show"))
            .slices(vec![toggle("show").into(), toggle("title").into()])
            .build();
        let card = Card::from(SimpleCard::new(group));

        let names: Vec<_> = revert_descriptors(&card)
            .into_iter()
            .map(|descriptor| descriptor.property_name)
            .collect();
        assert_eq!(names, ["show", "title"]);
    }
}
