//! Localization of display texts.
//!
//! Localization is an injected capability: the compiler receives an optional
//! [`Localizer`] and falls back to literal texts whenever it is absent or a
//! lookup misses.

mod error;
mod parser;
mod table;

pub use error::ParseError;
pub use parser::parse_translations;
pub use table::TranslationTable;

/// Resolves lookup keys to display strings.
pub trait Localizer {
    /// Returns the display string for `key`, or `None` if unknown.
    fn localize(&self, key: &str) -> Option<String>;
}

impl<F> Localizer for F
where
    F: Fn(&str) -> Option<String>,
{
    fn localize(&self, key: &str) -> Option<String> {
        self(key)
    }
}

/// Resolves one display text.
///
/// The localized string wins when a localizer is configured, a key is given
/// and the lookup succeeds. Otherwise the literal text is returned unchanged.
///
/// # Example
///
/// ```
/// use cardset::localize::{Localizer, resolve};
///
/// let lookup = |key: &str| (key == "Fill_Key").then(|| "Remplissage".to_string());
/// let localizer: &dyn Localizer = &lookup;
///
/// assert_eq!(
///     resolve(Some("Fill"), Some("Fill_Key"), Some(localizer)),
///     Some("Remplissage".to_string())
/// );
/// assert_eq!(resolve(Some("Fill"), Some("Other_Key"), Some(localizer)), Some("Fill".to_string()));
/// assert_eq!(resolve(Some("Fill"), Some("Fill_Key"), None), Some("Fill".to_string()));
/// ```
pub fn resolve(
    literal: Option<&str>,
    key: Option<&str>,
    localizer: Option<&dyn Localizer>,
) -> Option<String> {
    localizer
        .zip(key)
        .and_then(|(localizer, key)| localizer.localize(key))
        .or_else(|| literal.map(str::to_string))
}
