//! Query value object: the combination of search text, active filters, and
//! sort directive used to derive a view of the catalog.
//!
//! Queries are transient. The presentation layer rebuilds one on every
//! interaction and evaluates it against the read-only catalog; nothing here
//! carries identity or state between calls.

use crate::product::Status;

/// Sort key for the product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    Name,
    #[default]
    Date,
    Priority,
}

impl SortKey {
    /// Direction applied when this key is first selected.
    ///
    /// Every key starts descending (most recent / highest first), matching
    /// the registry's list behavior.
    pub fn default_direction(self) -> SortDirection {
        SortDirection::Desc
    }
}

/// Sort direction; flips the comparison sign, nothing more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Apply this direction to an ascending comparison result.
    pub fn apply(self, ordering: core::cmp::Ordering) -> core::cmp::Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// A catalog query: search text, filter sets, and sort directive.
///
/// Empty search and empty filter sets mean "no filter" — the default query
/// selects the whole catalog ordered by date, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    pub search: String,
    pub categories: Vec<String>,
    pub statuses: Vec<Status>,
    pub sort_key: SortKey,
    pub sort_dir: SortDirection,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_statuses(mut self, statuses: impl IntoIterator<Item = Status>) -> Self {
        self.statuses = statuses.into_iter().collect();
        self
    }

    pub fn with_sort(mut self, key: SortKey, dir: SortDirection) -> Self {
        self.sort_key = key;
        self.sort_dir = dir;
        self
    }

    /// Whether the search predicate is active (non-blank after trimming).
    pub fn search_active(&self) -> bool {
        !self.search.trim().is_empty()
    }

    /// Number of active filter chips: each selected category and status,
    /// plus one for an active search. Drives the "Filters (n)" badge.
    pub fn active_filter_count(&self) -> usize {
        self.categories.len() + self.statuses.len() + usize::from(self.search_active())
    }

    /// Select a sort key the way the list header does: re-selecting the
    /// active key flips direction, a new key starts at its default direction.
    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.sort_dir = self.sort_dir.toggled();
        } else {
            self.sort_key = key;
            self.sort_dir = key.default_direction();
        }
    }

    /// Reset search and both filter sets, leaving the sort directive alone.
    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.categories.clear();
        self.statuses.clear();
    }
}
