use std::collections::{HashMap, HashSet};

/// Hands out unique identifiers within one compilation scope.
///
/// A scope may hold several slices sharing one property name, for example the
/// same color property repeated per data category under different selectors.
/// The first occurrence of a name keeps its base identifier; later ones get
/// `-1`, `-2`, ... appended. A candidate that is already taken in the scope,
/// even by a different name, is skipped, so identifiers never repeat.
///
/// # Example
///
/// ```
/// use cardset::compiler::UidTracker;
///
/// let mut tracker = UidTracker::new();
/// assert_eq!(tracker.assign("fill", "colors-fill"), "colors-fill");
/// assert_eq!(tracker.assign("fill", "colors-fill"), "colors-fill-1");
/// assert_eq!(tracker.assign("fill", "colors-fill"), "colors-fill-2");
/// ```
#[derive(Debug, Default)]
pub struct UidTracker {
    /// Occurrences seen so far, per property name.
    occurrences: HashMap<String, usize>,
    /// Every identifier handed out in this scope.
    emitted: HashSet<String>,
}

impl UidTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a unique identifier for the next slice named `name`.
    pub fn assign(&mut self, name: &str, base: &str) -> String {
        let count = self.occurrences.entry(name.to_string()).or_insert(0);
        let mut candidate = if *count == 0 {
            base.to_string()
        } else {
            format!("{base}-{count}")
        };
        while self.emitted.contains(&candidate) {
            *count += 1;
            candidate = format!("{base}-{count}");
        }
        *count += 1;
        self.emitted.insert(candidate.clone());
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::UidTracker;

    #[test]
    fn distinct_names_keep_their_base() {
        let mut tracker = UidTracker::new();
        assert_eq!(tracker.assign("fill", "c-fill"), "c-fill");
        assert_eq!(tracker.assign("stroke", "c-stroke"), "c-stroke");
    }

    #[test]
    fn suffix_skips_identifiers_taken_by_other_names() {
        let mut tracker = UidTracker::new();
        assert_eq!(tracker.assign("fill", "c-fill"), "c-fill");
        assert_eq!(tracker.assign("fill-1", "c-fill-1"), "c-fill-1");
        assert_eq!(tracker.assign("fill", "c-fill"), "c-fill-2");
    }

    #[test]
    fn base_taken_by_another_name_gets_suffixed() {
        let mut tracker = UidTracker::new();
        assert_eq!(tracker.assign("a", "x"), "x");
        assert_eq!(tracker.assign("b", "x"), "x-1");
    }
}
