//! Builder for test notes with sensible defaults.

use chrono::{DateTime, Duration, TimeZone, Utc};
use jotter::domain::{Category, Note, NoteId, Tag};

/// Builder for creating test notes with sensible defaults.
///
/// Generates an id and fixed timestamps; `age_minutes` shifts `modified`
/// so tests can control display order.
#[derive(Debug, Clone)]
pub struct TestNote {
    id: NoteId,
    title: String,
    content: String,
    category: Option<Category>,
    tags: Vec<Tag>,
    pinned: bool,
    modified: DateTime<Utc>,
}

impl TestNote {
    /// Creates a personal note with the given title and no body.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: NoteId::generate(),
            title: title.into(),
            content: String::new(),
            category: Some(Category::Personal),
            tags: Vec::new(),
            pinned: false,
            modified: Self::epoch(),
        }
    }

    fn epoch() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    /// Sets an explicit id.
    pub fn id(mut self, id: &str) -> Self {
        self.id = id.parse().expect("Invalid NoteId");
        self
    }

    /// Sets the body.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the category.
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Leaves the note without a category.
    pub fn uncategorized(mut self) -> Self {
        self.category = None;
        self
    }

    /// Adds a tag.
    pub fn tag(mut self, tag: &str) -> Self {
        self.tags.push(Tag::new(tag).expect("Invalid tag"));
        self
    }

    /// Marks the note as pinned.
    pub fn pinned(mut self) -> Self {
        self.pinned = true;
        self
    }

    /// Moves `modified` forward by the given number of minutes.
    pub fn minutes_later(mut self, minutes: i64) -> Self {
        self.modified = Self::epoch() + Duration::minutes(minutes);
        self
    }

    /// Converts this TestNote to a domain Note.
    pub fn to_note(&self) -> Note {
        Note::builder(self.id.clone(), Self::epoch(), self.modified)
            .title(&self.title)
            .content(&self.content)
            .category(self.category)
            .tags(self.tags.clone())
            .pinned(self.pinned)
            .build()
            .expect("TestNote should always produce a valid Note")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_defaults() {
        let note = TestNote::new("Groceries").to_note();
        assert_eq!(note.title(), "Groceries");
        assert_eq!(note.category(), Some(Category::Personal));
        assert!(!note.pinned());
        assert_eq!(note.id().as_str().len(), 26, "should generate a ULID");
    }

    #[test]
    fn test_note_builder_fluent() {
        let note = TestNote::new("Standup")
            .id("n1")
            .content("notes for the team")
            .category(Category::Work)
            .tag("daily")
            .pinned()
            .minutes_later(5)
            .to_note();

        assert_eq!(note.id().as_str(), "n1");
        assert_eq!(note.content(), "notes for the team");
        assert_eq!(note.category(), Some(Category::Work));
        assert_eq!(note.tags()[0].as_str(), "daily");
        assert!(note.pinned());
        assert!(note.modified() > note.created());
    }

    #[test]
    fn test_note_uncategorized() {
        let note = TestNote::new("Loose").uncategorized().to_note();
        assert_eq!(note.category(), None);
    }
}
