//! Counts and tag listings for sidebars and summaries.

use crate::domain::{Category, CategoryFilter, Note, Tag};
use serde::Serialize;

/// Number of notes under each category filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub all: usize,
    pub personal: usize,
    pub work: usize,
    pub ideas: usize,
    pub important: usize,
}

impl CategoryCounts {
    /// Returns the count for a filter.
    pub fn get(&self, filter: CategoryFilter) -> usize {
        match filter {
            CategoryFilter::All => self.all,
            CategoryFilter::Only(Category::Personal) => self.personal,
            CategoryFilter::Only(Category::Work) => self.work,
            CategoryFilter::Only(Category::Ideas) => self.ideas,
            CategoryFilter::Only(Category::Important) => self.important,
        }
    }

    fn slot(&mut self, category: Category) -> &mut usize {
        match category {
            Category::Personal => &mut self.personal,
            Category::Work => &mut self.work,
            Category::Ideas => &mut self.ideas,
            Category::Important => &mut self.important,
        }
    }
}

/// Counts notes per category.
///
/// `all` counts every note. Uncategorized notes count toward `all` only,
/// so the specific counts may sum to less than `all`.
pub fn category_counts(notes: &[Note]) -> CategoryCounts {
    let mut counts = CategoryCounts {
        all: notes.len(),
        ..Default::default()
    };
    for category in notes.iter().filter_map(Note::category) {
        *counts.slot(category) += 1;
    }
    counts
}

/// Returns every distinct tag in use, in first-seen order.
pub fn all_tags(notes: &[Note]) -> Vec<Tag> {
    let mut tags: Vec<Tag> = Vec::new();
    for tag in notes.iter().flat_map(Note::tags) {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    tags
}

/// Collection-wide totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Number of notes.
    pub notes: usize,
    /// Characters across all titles and contents.
    pub characters: usize,
}

/// Computes totals across the collection.
pub fn stats(notes: &[Note]) -> Stats {
    Stats {
        notes: notes.len(),
        characters: notes
            .iter()
            .map(|n| n.title().chars().count() + n.content().chars().count())
            .sum(),
    }
}
