use std::fmt;

/// A trimmed, non-empty search query.
///
/// Construction is the only validation point: holding a `SearchQuery` is
/// proof the text is submittable, so downstream layers never re-check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Trims `raw` and returns `None` when nothing is left.
    ///
    /// Empty and whitespace-only input is a local no-op by contract (no
    /// network call, no user-facing error), which is why this is an `Option`
    /// rather than a `Result`.
    #[must_use]
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_owned()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SearchQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_empty_input() {
        assert!(SearchQuery::new("").is_none());
    }

    #[test]
    fn new_rejects_whitespace_only_input() {
        assert!(SearchQuery::new("   \t\n").is_none());
    }

    #[test]
    fn new_trims_surrounding_whitespace() {
        let query = SearchQuery::new("  milk  ").expect("expected a valid query");
        assert_eq!(query.as_str(), "milk");
    }

    #[test]
    fn new_preserves_interior_whitespace() {
        let query = SearchQuery::new("whole milk 2%").expect("expected a valid query");
        assert_eq!(query.as_str(), "whole milk 2%");
    }

    #[test]
    fn display_matches_as_str() {
        let query = SearchQuery::new("bread").expect("expected a valid query");
        assert_eq!(query.to_string(), "bread");
    }
}
