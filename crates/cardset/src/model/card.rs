use std::slice::{from_mut, from_ref};

use bon::Builder;
use serde::{Deserialize, Serialize};

use super::named::{Named, impl_named};
use super::skip_nulls;
use super::group::Group;
use super::slice::SimpleSlice;

/// Called on a card right before it is compiled, so a plugin can adjust
/// visibility or disabled state from other settings.
pub type PreProcessHook = fn(&mut Card);

/// A card drawn as exactly one implicit group.
///
/// The wrapped group's name is the card's object name.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleCard {
    #[serde(flatten)]
    pub group: Group,

    /// Show the card in the analytics pane instead of the formatting pane.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics_pane: Option<bool>,

    #[serde(skip)]
    pub pre_process: Option<PreProcessHook>,
}

impl SimpleCard {
    pub fn new(group: Group) -> Self {
        Self {
            group,
            analytics_pane: None,
            pre_process: None,
        }
    }
}

/// A card made of several explicit groups.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
#[serde(rename_all = "camelCase")]
pub struct CompositeCard {
    /// Host object name under which every slice of this card is persisted.
    pub name: String,

    #[builder(default)]
    #[serde(default, deserialize_with = "skip_nulls")]
    pub groups: Vec<Group>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_level_slice: Option<SimpleSlice>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics_pane: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_key: Option<String>,

    #[serde(skip)]
    pub pre_process: Option<PreProcessHook>,
}

impl_named!(CompositeCard);

/// Top of the visible hierarchy; one card per host object.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Card {
    Simple(SimpleCard),
    Composite(CompositeCard),
}

impl Card {
    /// The host object name.
    pub fn name(&self) -> &str {
        match self {
            Card::Simple(card) => &card.group.name,
            Card::Composite(card) => &card.name,
        }
    }

    /// Missing visibility means visible.
    pub fn is_visible(&self) -> bool {
        match self {
            Card::Simple(card) => card.group.is_visible(),
            Card::Composite(card) => card.visible.unwrap_or(true),
        }
    }

    pub fn analytics_pane(&self) -> Option<bool> {
        match self {
            Card::Simple(card) => card.analytics_pane,
            Card::Composite(card) => card.analytics_pane,
        }
    }

    pub fn pre_process(&self) -> Option<PreProcessHook> {
        match self {
            Card::Simple(card) => card.pre_process,
            Card::Composite(card) => card.pre_process,
        }
    }

    /// The card-level promoted slice. A simple card's promoted slice belongs
    /// to its implicit group and is reached through [`Self::groups`].
    pub fn top_level_slice(&self) -> Option<&SimpleSlice> {
        match self {
            Card::Simple(_) => None,
            Card::Composite(card) => card.top_level_slice.as_ref(),
        }
    }

    pub fn top_level_slice_mut(&mut self) -> Option<&mut SimpleSlice> {
        match self {
            Card::Simple(_) => None,
            Card::Composite(card) => card.top_level_slice.as_mut(),
        }
    }

    /// Group-equivalents of this card: the card itself when simple.
    pub fn groups(&self) -> &[Group] {
        match self {
            Card::Simple(card) => from_ref(&card.group),
            Card::Composite(card) => &card.groups,
        }
    }

    pub fn groups_mut(&mut self) -> &mut [Group] {
        match self {
            Card::Simple(card) => from_mut(&mut card.group),
            Card::Composite(card) => &mut card.groups,
        }
    }

    /// Finds a group by name.
    pub fn group_mut(&mut self, name: &str) -> Option<&mut Group> {
        self.groups_mut().iter_mut().find(|group| group.name == name)
    }
}

impl Named for Card {
    fn display_name(&self) -> Option<&str> {
        match self {
            Card::Simple(card) => card.group.display_name(),
            Card::Composite(card) => card.display_name(),
        }
    }

    fn display_name_key(&self) -> Option<&str> {
        match self {
            Card::Simple(card) => card.group.display_name_key(),
            Card::Composite(card) => card.display_name_key(),
        }
    }

    fn description(&self) -> Option<&str> {
        match self {
            Card::Simple(card) => card.group.description(),
            Card::Composite(card) => card.description(),
        }
    }

    fn description_key(&self) -> Option<&str> {
        match self {
            Card::Simple(card) => card.group.description_key(),
            Card::Composite(card) => card.description_key(),
        }
    }
}

impl From<SimpleCard> for Card {
    fn from(card: SimpleCard) -> Self {
        Card::Simple(card)
    }
}

impl From<CompositeCard> for Card {
    fn from(card: CompositeCard) -> Self {
        Card::Composite(card)
    }
}

/// The root of a settings tree: an ordered list of cards.
///
/// A model is rebuilt from defaults on every settings refresh; nothing in
/// this crate keeps one across calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Model {
    #[serde(default, deserialize_with = "skip_nulls")]
    pub cards: Vec<Card>,
}

impl Model {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn card(&self, name: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.name() == name)
    }

    pub fn card_mut(&mut self, name: &str) -> Option<&mut Card> {
        self.cards.iter_mut().find(|card| card.name() == name)
    }
}

impl AsMut<Model> for Model {
    fn as_mut(&mut self) -> &mut Model {
        self
    }
}
