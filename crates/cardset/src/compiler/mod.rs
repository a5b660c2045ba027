//! The passes mapping between the settings tree and the host.
//!
//! - [`populate`] overlays persisted host values onto a freshly built tree.
//! - [`compile`] turns the tree into the descriptor tree the host draws.
//! - [`revert_descriptors`] lists the properties a card resets to defaults.
//!
//! All passes are synchronous walks over caller-owned data; none of them
//! fails. Malformed input degrades to defaults or is skipped.

mod compile;
mod extract;
mod lint;
mod populate;
mod revert;
mod service;
mod uid;

pub use compile::compile;
pub use extract::extract;
pub use lint::{SnapshotWarning, compute_suggestions, lint_snapshot};
pub use populate::populate;
pub use revert::revert_descriptors;
pub use service::SettingsService;
pub use uid::UidTracker;
