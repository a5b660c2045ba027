//! Typed settings tree a plugin declares: cards, groups, containers and slices.
//!
//! The tree is plain data. Plugins build it fresh for every settings refresh,
//! either through the `bon` builders or by deserializing a JSON declaration.

mod card;
mod group;
mod named;
mod slice;

pub use card::{Card, CompositeCard, Model, PreProcessHook, SimpleCard};
pub use group::{Container, ContainerItem, Group};
pub use named::Named;
pub use slice::{CompositeKind, CompositeSlice, SimpleSlice, Slice, SliceKind};

use serde::{Deserialize, Deserializer};

/// Deserializes a list, dropping `null` entries instead of failing.
fn skip_nulls<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let entries: Vec<Option<T>> = Vec::deserialize(deserializer)?;
    Ok(entries.into_iter().flatten().collect())
}
