//! Note record: text, classification, display metadata and timestamps.

use crate::domain::{Category, NoteId, Tag};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Color given to notes that do not specify one.
pub const DEFAULT_COLOR: &str = "#ffffff";

/// The kind of error that occurred when constructing a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseNoteErrorKind {
    /// Title and content are both empty after trimming.
    Blank,
    /// The `modified` timestamp precedes `created`.
    ModifiedBeforeCreated,
}

/// Error returned when constructing an invalid note.
#[derive(Debug, Clone)]
pub struct ParseNoteError {
    kind: ParseNoteErrorKind,
}

impl ParseNoteError {
    /// Returns what made the note invalid.
    pub fn kind(&self) -> ParseNoteErrorKind {
        self.kind
    }
}

impl fmt::Display for ParseNoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseNoteErrorKind::Blank => {
                write!(f, "note cannot be empty: add a title or content")
            }
            ParseNoteErrorKind::ModifiedBeforeCreated => {
                write!(f, "invalid note: modified timestamp precedes created")
            }
        }
    }
}

impl std::error::Error for ParseNoteError {}

/// Returns true when a note with this title and content must not be stored.
///
/// This is the single emptiness rule shared by creation, update and import.
pub fn is_blank(title: &str, content: &str) -> bool {
    title.trim().is_empty() && content.trim().is_empty()
}

/// Returns the timestamp to record for a mutation happening at `now`.
///
/// Guarantees the result is strictly later than `previous`, even when the
/// clock has not advanced (or went backwards) since the last mutation.
pub fn next_modified(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    if now > previous {
        now
    } else {
        previous + Duration::nanoseconds(1)
    }
}

/// A short text note.
///
/// # Required Fields
/// - `id`: Unique identifier
/// - `created`: When the note was inserted
/// - `modified`: When the note last changed (never earlier than `created`)
/// - `title` or `content`: at least one must be non-blank
///
/// # Optional Fields
/// - `category`: absent only for imported notes that had none
/// - `tags`: ordered, duplicate-free labels
/// - `color`: display color, [`DEFAULT_COLOR`] when unset
/// - `pinned`: sorts before unpinned notes
///
/// # Examples
///
/// ```
/// use jotter::domain::{Category, Note, NoteId};
/// use chrono::Utc;
///
/// let now = Utc::now();
/// let note = Note::builder(NoteId::generate(), now, now)
///     .title("Grocery List")
///     .content("milk, eggs")
///     .category(Some(Category::Personal))
///     .build()
///     .unwrap();
/// assert_eq!(note.title(), "Grocery List");
/// assert!(!note.pinned());
/// ```
#[derive(Clone, PartialEq)]
pub struct Note {
    id: NoteId,
    title: String,
    content: String,
    category: Option<Category>,
    /// Stored category value that is not one of the known categories.
    raw_category: Option<Value>,
    tags: Vec<Tag>,
    color: String,
    pinned: bool,
    created: DateTime<Utc>,
    modified: DateTime<Utc>,
}

impl Note {
    /// Creates a builder for constructing a Note.
    pub fn builder(id: NoteId, created: DateTime<Utc>, modified: DateTime<Utc>) -> NoteBuilder {
        NoteBuilder::new(id, created, modified)
    }

    /// Returns the note's unique identifier.
    pub fn id(&self) -> &NoteId {
        &self.id
    }

    /// Returns the note's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the note's body text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the note's category, if it has a recognized one.
    pub fn category(&self) -> Option<Category> {
        self.category
    }

    /// Returns the stored category value when it is not a known category.
    ///
    /// Such notes are uncategorized for filtering and counting, but the
    /// value is written back unchanged on export.
    pub fn unrecognized_category(&self) -> Option<&Value> {
        self.raw_category.as_ref()
    }

    /// Returns the note's tags in insertion order.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Returns true if the note carries the given tag.
    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    /// Returns the note's display color.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns whether the note is pinned.
    pub fn pinned(&self) -> bool {
        self.pinned
    }

    /// Returns when the note was created.
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Returns when the note was last modified.
    pub fn modified(&self) -> DateTime<Utc> {
        self.modified
    }

    /// Applies a patch, validating the merged result before changing anything.
    pub(crate) fn apply(
        &mut self,
        patch: NotePatch,
        now: DateTime<Utc>,
    ) -> Result<(), ParseNoteError> {
        let title = patch.title.unwrap_or_else(|| self.title.clone());
        let content = patch.content.unwrap_or_else(|| self.content.clone());
        if is_blank(&title, &content) {
            return Err(ParseNoteError {
                kind: ParseNoteErrorKind::Blank,
            });
        }

        self.title = title;
        self.content = content;
        if let Some(category) = patch.category {
            self.category = Some(category);
            self.raw_category = None;
        }
        if let Some(tags) = patch.tags {
            self.tags = deduplicate_tags(tags);
        }
        if let Some(color) = patch.color {
            self.color = normalize_color(color);
        }
        self.touch(now);
        Ok(())
    }

    /// Flips the pinned flag and returns the new value.
    pub(crate) fn toggle_pin(&mut self, now: DateTime<Utc>) -> bool {
        self.pinned = !self.pinned;
        self.touch(now);
        self.pinned
    }

    /// Appends a tag. Returns false if the note already had it.
    pub(crate) fn add_tag(&mut self, tag: Tag, now: DateTime<Utc>) -> bool {
        if self.tags.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        self.touch(now);
        true
    }

    /// Removes a tag. Returns false if the note did not have it.
    pub(crate) fn remove_tag(&mut self, tag: &Tag, now: DateTime<Utc>) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        if self.tags.len() == before {
            return false;
        }
        self.touch(now);
        true
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.modified = next_modified(self.modified, now);
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = if self.title.is_empty() {
            "(untitled)"
        } else {
            &self.title
        };
        write!(f, "{} [{}]", title, self.id.prefix())
    }
}

impl fmt::Debug for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Note")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("content", &self.content)
            .field("category", &self.category)
            .field("raw_category", &self.raw_category)
            .field("tags", &self.tags)
            .field("color", &self.color)
            .field("pinned", &self.pinned)
            .field("created", &self.created)
            .field("modified", &self.modified)
            .finish()
    }
}

/// Fields to merge over an existing note. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<Category>,
    pub tags: Option<Vec<Tag>>,
    pub color: Option<String>,
}

impl NotePatch {
    /// Returns true if the patch would not change any field.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.category.is_none()
            && self.tags.is_none()
            && self.color.is_none()
    }
}

/// Builder for constructing a Note with optional fields.
pub struct NoteBuilder {
    id: NoteId,
    title: String,
    content: String,
    category: Option<Category>,
    tags: Vec<Tag>,
    color: String,
    pinned: bool,
    created: DateTime<Utc>,
    modified: DateTime<Utc>,
}

impl NoteBuilder {
    fn new(id: NoteId, created: DateTime<Utc>, modified: DateTime<Utc>) -> Self {
        Self {
            id,
            title: String::new(),
            content: String::new(),
            category: None,
            tags: Vec::new(),
            color: DEFAULT_COLOR.to_string(),
            pinned: false,
            created,
            modified,
        }
    }

    /// Sets the note's title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the note's body text.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the note's category.
    pub fn category(mut self, category: Option<Category>) -> Self {
        self.category = category;
        self
    }

    /// Sets the note's tags.
    ///
    /// Duplicates are removed (first occurrence kept).
    pub fn tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = deduplicate_tags(tags);
        self
    }

    /// Sets the display color. Blank values fall back to [`DEFAULT_COLOR`].
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = normalize_color(color.into());
        self
    }

    /// Sets the pinned flag.
    pub fn pinned(mut self, pinned: bool) -> Self {
        self.pinned = pinned;
        self
    }

    /// Builds the Note.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteError` if:
    /// - Both title and content are empty or whitespace-only
    /// - `modified` is earlier than `created`
    pub fn build(self) -> Result<Note, ParseNoteError> {
        if is_blank(&self.title, &self.content) {
            return Err(ParseNoteError {
                kind: ParseNoteErrorKind::Blank,
            });
        }
        if self.modified < self.created {
            return Err(ParseNoteError {
                kind: ParseNoteErrorKind::ModifiedBeforeCreated,
            });
        }

        Ok(Note {
            id: self.id,
            title: self.title,
            content: self.content,
            category: self.category,
            raw_category: None,
            tags: self.tags,
            color: self.color,
            pinned: self.pinned,
            created: self.created,
            modified: self.modified,
        })
    }
}

/// Removes duplicate tags (first occurrence kept).
fn deduplicate_tags(tags: Vec<Tag>) -> Vec<Tag> {
    let mut seen = Vec::new();
    for tag in tags {
        if !seen.contains(&tag) {
            seen.push(tag);
        }
    }
    seen
}

fn normalize_color(color: String) -> String {
    let trimmed = color.trim();
    if trimmed.is_empty() {
        DEFAULT_COLOR.to_string()
    } else {
        trimmed.to_string()
    }
}

impl Serialize for Note {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("title", &self.title)?;
        map.serialize_entry("content", &self.content)?;
        if let Some(category) = self.category {
            map.serialize_entry("category", &category)?;
        } else if let Some(raw) = &self.raw_category {
            map.serialize_entry("category", raw)?;
        }
        map.serialize_entry("tags", &self.tags)?;
        map.serialize_entry("color", &self.color)?;
        map.serialize_entry("pinned", &self.pinned)?;
        map.serialize_entry("created", &self.created)?;
        map.serialize_entry("modified", &self.modified)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for Note {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct NoteHelper {
            id: NoteId,
            #[serde(default)]
            title: String,
            #[serde(default)]
            content: String,
            #[serde(default)]
            category: Option<Value>,
            #[serde(default)]
            tags: Vec<Tag>,
            #[serde(default)]
            color: Option<String>,
            #[serde(default)]
            pinned: bool,
            created: DateTime<Utc>,
            modified: DateTime<Utc>,
        }

        let helper = NoteHelper::deserialize(deserializer)?;

        let category: Option<Category> = helper
            .category
            .as_ref()
            .and_then(|value| value.as_str())
            .and_then(|s| s.parse().ok());
        let raw_category = match category {
            Some(_) => None,
            None => helper.category,
        };

        let mut note = Note::builder(helper.id, helper.created, helper.modified)
            .title(helper.title)
            .content(helper.content)
            .category(category)
            .pinned(helper.pinned)
            .build()
            .map_err(serde::de::Error::custom)?;

        // Stored records are kept exactly as written.
        note.raw_category = raw_category;
        note.tags = helper.tags;
        if let Some(color) = helper.color {
            note.color = color;
        }
        Ok(note)
    }
}
