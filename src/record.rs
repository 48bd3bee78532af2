//! Result types for review extraction.
//!
//! One [`Record`] is assembled per successfully retrieved review page.
//! Strategy tags accumulate in a [`TagSet`], an insertion-ordered
//! duplicate-free container, so serialized output is deterministic.

/// Insertion-ordered set of strategy labels.
///
/// Preserves the order tags were first inserted in and silently drops
/// repeats, so the joined output column is stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    items: Vec<String>,
}

impl TagSet {
    /// Create an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Insert a tag, keeping first-insertion order.
    ///
    /// Returns `false` if the tag was already present.
    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if self.items.contains(&tag) {
            return false;
        }
        self.items.push(tag);
        true
    }

    /// Whether the tag is present.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.items.iter().any(|t| t == tag)
    }

    /// Number of distinct tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the set holds no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate tags in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Join tags with a separator, in insertion order.
    #[must_use]
    pub fn join(&self, sep: &str) -> String {
        self.items.join(sep)
    }
}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}

/// One extracted book review.
///
/// Every field except `source_url` may be empty when no known markup
/// pattern matched; none is ever missing. A record is assembled once
/// and not mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    /// Cleaned display title (series prefix markers stripped,
    /// whitespace collapsed).
    pub title: String,

    /// First creator matched in role-priority order.
    pub author: String,

    /// Short categorical code, usually a letter grade.
    pub rating: String,

    /// Strategy tags drawn from the closed vocabulary.
    pub strategies: TagSet,

    /// Free-form year/month text as it appears on the page.
    pub publication_date: String,

    /// Absolute URL the record was extracted from. Never empty.
    pub source_url: String,
}
