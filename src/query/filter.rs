//! Filtered, sorted views over a note collection.

use crate::domain::{CategoryFilter, Note, Tag};
use std::cmp::Ordering;

/// The filters a view of the notes is derived from.
///
/// All three filters must pass for a note to be included:
/// - `category`: `All`, or exactly this category
/// - `active_tags`: if non-empty, the note shares at least one tag (OR)
/// - `search`: if non-empty, case-insensitive substring of title or content
///
/// # Examples
///
/// ```
/// use jotter::domain::{Category, Tag};
/// use jotter::query::Query;
///
/// let query = Query::new()
///     .category(Category::Work)
///     .tag(Tag::new("urgent").unwrap())
///     .search("budget");
/// assert_eq!(query.title(), "Work Notes");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub category: CategoryFilter,
    pub active_tags: Vec<Tag>,
    pub search: String,
}

impl Query {
    /// Creates a query that matches every note.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to a category (or `CategoryFilter::All`).
    pub fn category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    /// Adds an active tag.
    pub fn tag(mut self, tag: Tag) -> Self {
        if !self.active_tags.contains(&tag) {
            self.active_tags.push(tag);
        }
        self
    }

    /// Replaces the active tags.
    pub fn tags(mut self, tags: Vec<Tag>) -> Self {
        self.active_tags = Vec::new();
        for tag in tags {
            self = self.tag(tag);
        }
        self
    }

    /// Sets the search term.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    /// Returns true if the note passes every filter.
    pub fn matches(&self, note: &Note) -> bool {
        self.matches_category(note) && self.matches_tags(note) && self.matches_search(note)
    }

    fn matches_category(&self, note: &Note) -> bool {
        self.category.matches(note.category())
    }

    fn matches_tags(&self, note: &Note) -> bool {
        self.active_tags.is_empty() || self.active_tags.iter().any(|t| note.has_tag(t))
    }

    fn matches_search(&self, note: &Note) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        note.title().to_lowercase().contains(&needle)
            || note.content().to_lowercase().contains(&needle)
    }

    /// Runs the query: filters, then sorts pinned first and newest first.
    pub fn apply(&self, notes: &[Note]) -> Vec<Note> {
        let mut result: Vec<Note> = notes.iter().filter(|n| self.matches(n)).cloned().collect();
        result.sort_by(display_order);
        result
    }

    /// Heading describing what the query shows.
    ///
    /// A category takes precedence over tags, and tags over search.
    pub fn title(&self) -> String {
        match self.category {
            CategoryFilter::Only(category) => format!("{} Notes", category.label()),
            CategoryFilter::All if !self.active_tags.is_empty() => "Tagged Notes".to_string(),
            CategoryFilter::All if !self.search.is_empty() => "Search Results".to_string(),
            CategoryFilter::All => "All Notes".to_string(),
        }
    }
}

/// Derives the view of `notes` for the given filters.
pub fn query(
    notes: &[Note],
    category: CategoryFilter,
    active_tags: &[Tag],
    search_term: &str,
) -> Vec<Note> {
    Query::new()
        .category(category)
        .tags(active_tags.to_vec())
        .search(search_term)
        .apply(notes)
}

/// Pinned notes first, then most recently modified first.
///
/// Used with a stable sort so equal notes keep their store order.
pub fn display_order(a: &Note, b: &Note) -> Ordering {
    b.pinned()
        .cmp(&a.pinned())
        .then_with(|| b.modified().cmp(&a.modified()))
}
