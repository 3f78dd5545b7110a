//! NoteStore: the owned, persisted note collection.

use super::transfer::{parse_import, serialize_export};
use super::{StoreError, StoreResult};
use crate::domain::{Category, Note, NoteId, NotePatch, Tag, is_blank};
use crate::infra::KeyValueStore;
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Key holding the serialized note collection.
pub const NOTES_KEY: &str = "notes";

/// Source of the current time for timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<F> Clock for F
where
    F: Fn() -> DateTime<Utc>,
{
    fn now(&self) -> DateTime<Utc> {
        self()
    }
}

/// Input for [`NoteStore::create`].
///
/// # Examples
///
/// ```
/// use jotter::domain::Category;
/// use jotter::store::NoteDraft;
///
/// let draft = NoteDraft::new("Standup", "talk about the release")
///     .category(Category::Work)
///     .color("#e3f2fd");
/// assert_eq!(draft.title, "Standup");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub category: Option<Category>,
    pub tags: Vec<Tag>,
    pub color: Option<String>,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = tags;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// The in-memory note collection and the key-value store it is saved to.
///
/// Notes are kept most-recent-first: new notes are prepended, imported
/// notes are appended. Every mutating operation writes the whole
/// collection before returning; if that write fails the in-memory
/// collection is restored so memory and storage never disagree.
pub struct NoteStore<S: KeyValueStore> {
    kv: S,
    notes: Vec<Note>,
    clock: Box<dyn Clock>,
}

impl<S: KeyValueStore> NoteStore<S> {
    /// Loads the collection from `kv` using the system clock.
    ///
    /// A missing collection is treated as empty.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Corrupt` if the stored value cannot be parsed.
    pub fn open(kv: S) -> StoreResult<Self> {
        Self::with_clock(kv, SystemClock)
    }

    /// Loads the collection from `kv`, taking timestamps from `clock`.
    pub fn with_clock(kv: S, clock: impl Clock + 'static) -> StoreResult<Self> {
        let notes: Vec<Note> = match kv.get(NOTES_KEY)? {
            Some(raw) => {
                serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt { source })?
            }
            None => Vec::new(),
        };
        log::debug!("loaded {} notes", notes.len());
        Ok(Self {
            kv,
            notes,
            clock: Box::new(clock),
        })
    }

    // ===========================================
    // Accessors
    // ===========================================

    /// Returns all notes in store order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Returns the note with the given id.
    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id() == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Returns the underlying key-value store.
    pub fn kv(&self) -> &S {
        &self.kv
    }

    // ===========================================
    // Mutations
    // ===========================================

    /// Creates a note and places it first in the collection.
    ///
    /// Title and content are trimmed. Category defaults to `personal`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` if title and content are both blank.
    pub fn create(&mut self, draft: NoteDraft) -> StoreResult<Note> {
        let now = self.clock.now();
        let id = self.fresh_id();

        let mut builder = Note::builder(id, now, now)
            .title(draft.title.trim())
            .content(draft.content.trim())
            .category(Some(draft.category.unwrap_or_default()))
            .tags(draft.tags);
        if let Some(color) = draft.color {
            builder = builder.color(color);
        }
        let note = builder.build()?;

        let snapshot = self.notes.clone();
        self.notes.insert(0, note.clone());
        self.commit(snapshot)?;

        log::debug!("created note {}", note.id());
        Ok(note)
    }

    /// Merges `patch` over the note with the given id.
    ///
    /// Supplied title and content are trimmed before merging.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no note has this id, or
    /// `StoreError::Validation` if the merged note would be blank.
    pub fn update(&mut self, id: &NoteId, mut patch: NotePatch) -> StoreResult<Note> {
        let now = self.clock.now();
        let index = self.position(id).ok_or_else(|| StoreError::NotFound {
            id: id.to_string(),
        })?;

        patch.title = patch.title.map(|t| t.trim().to_string());
        patch.content = patch.content.map(|c| c.trim().to_string());

        let snapshot = self.notes.clone();
        self.notes[index].apply(patch, now)?;
        self.commit(snapshot)?;

        log::debug!("updated note {id}");
        Ok(self.notes[index].clone())
    }

    /// Flips the pinned flag of a note.
    ///
    /// Returns the new pinned state, or `None` (and changes nothing) if
    /// no note has this id.
    pub fn toggle_pin(&mut self, id: &NoteId) -> StoreResult<Option<bool>> {
        let now = self.clock.now();
        let Some(index) = self.position(id) else {
            return Ok(None);
        };

        let snapshot = self.notes.clone();
        let pinned = self.notes[index].toggle_pin(now);
        self.commit(snapshot)?;

        log::debug!("note {id} pinned={pinned}");
        Ok(Some(pinned))
    }

    /// Adds a tag to a note. Returns false if the note already had it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no note has this id.
    pub fn add_tag(&mut self, id: &NoteId, tag: Tag) -> StoreResult<bool> {
        let now = self.clock.now();
        let index = self.position(id).ok_or_else(|| StoreError::NotFound {
            id: id.to_string(),
        })?;

        let snapshot = self.notes.clone();
        if !self.notes[index].add_tag(tag, now) {
            return Ok(false);
        }
        self.commit(snapshot)?;
        Ok(true)
    }

    /// Removes a tag from a note. Returns false if the note did not have it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no note has this id.
    pub fn remove_tag(&mut self, id: &NoteId, tag: &Tag) -> StoreResult<bool> {
        let now = self.clock.now();
        let index = self.position(id).ok_or_else(|| StoreError::NotFound {
            id: id.to_string(),
        })?;

        let snapshot = self.notes.clone();
        if !self.notes[index].remove_tag(tag, now) {
            return Ok(false);
        }
        self.commit(snapshot)?;
        Ok(true)
    }

    /// Removes the note with the given id. Deleting an unknown id is a no-op.
    ///
    /// Returns whether a note was removed.
    pub fn delete(&mut self, id: &NoteId) -> StoreResult<bool> {
        let Some(index) = self.position(id) else {
            return Ok(false);
        };

        let snapshot = self.notes.clone();
        self.notes.remove(index);
        self.commit(snapshot)?;

        log::debug!("deleted note {id}");
        Ok(true)
    }

    /// Removes every note. Returns how many were removed.
    pub fn clear_all(&mut self) -> StoreResult<usize> {
        if self.notes.is_empty() {
            return Ok(0);
        }

        let snapshot = std::mem::take(&mut self.notes);
        let removed = snapshot.len();
        self.commit(snapshot)?;

        log::info!("cleared {removed} notes");
        Ok(removed)
    }

    /// Merges notes from an exported JSON payload.
    ///
    /// Notes whose id is already present (in the store, or earlier in the
    /// payload) are skipped; the rest are appended unchanged. Returns the
    /// number of notes added.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Format` if the payload is not a JSON array of
    /// note records. Nothing is merged in that case.
    pub fn import_merge(&mut self, payload: &str) -> StoreResult<usize> {
        let candidates = parse_import(payload)?;
        self.merge(candidates)
    }

    /// Merges already-parsed notes. See [`NoteStore::import_merge`].
    pub fn merge(&mut self, candidates: Vec<Note>) -> StoreResult<usize> {
        let mut known: HashSet<NoteId> = self.notes.iter().map(|n| n.id().clone()).collect();
        let offered = candidates.len();
        let fresh: Vec<Note> = candidates
            .into_iter()
            .filter(|n| known.insert(n.id().clone()))
            .collect();

        let merged = fresh.len();
        if merged > 0 {
            let snapshot = self.notes.clone();
            self.notes.extend(fresh);
            self.commit(snapshot)?;
        }

        log::info!("imported {merged} of {offered} notes");
        Ok(merged)
    }

    /// Serializes the whole collection, in store order, for export.
    pub fn export_all(&self) -> StoreResult<String> {
        serialize_export(&self.notes)
    }

    // ===========================================
    // Internals
    // ===========================================

    fn position(&self, id: &NoteId) -> Option<usize> {
        self.notes.iter().position(|n| n.id() == id)
    }

    fn fresh_id(&self) -> NoteId {
        loop {
            let id = NoteId::generate();
            if self.position(&id).is_none() {
                return id;
            }
        }
    }

    /// Writes the collection, restoring `snapshot` if the write fails.
    fn commit(&mut self, snapshot: Vec<Note>) -> StoreResult<()> {
        let result = serde_json::to_string(&self.notes)
            .map_err(|source| StoreError::Encode { source })
            .and_then(|encoded| self.kv.set(NOTES_KEY, &encoded).map_err(StoreError::from));

        if let Err(e) = result {
            log::warn!("persisting notes failed, reverting: {e}");
            self.notes = snapshot;
            return Err(e);
        }
        debug_assert!(self.notes.iter().all(|n| !is_blank(n.title(), n.content())));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{KvError, KvResult, MemoryStore};
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use std::rc::Rc;

    fn tag(s: &str) -> Tag {
        Tag::new(s).unwrap()
    }

    fn store() -> NoteStore<MemoryStore> {
        NoteStore::open(MemoryStore::new()).unwrap()
    }

    /// Clock that advances one second per reading.
    fn ticking_clock() -> impl Clock {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let ticks = Rc::new(Cell::new(0));
        move || {
            let n = ticks.get();
            ticks.set(n + 1);
            start + Duration::seconds(n)
        }
    }

    /// Backend that can be switched to reject writes.
    #[derive(Default)]
    struct FlakyStore {
        inner: MemoryStore,
        failing: Rc<Cell<bool>>,
    }

    impl KeyValueStore for FlakyStore {
        fn get(&self, key: &str) -> KvResult<Option<String>> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> KvResult<()> {
            if self.failing.get() {
                return Err(KvError::WriteRejected {
                    key: key.to_string(),
                    reason: "disk full".to_string(),
                });
            }
            self.inner.set(key, value)
        }
    }

    fn stored_notes<S: KeyValueStore>(store: &NoteStore<S>) -> Vec<Note> {
        let raw = store.kv().get(NOTES_KEY).unwrap().unwrap_or_else(|| "[]".into());
        serde_json::from_str(&raw).unwrap()
    }

    // ===========================================
    // open
    // ===========================================

    #[test]
    fn open_empty_store_has_no_notes() {
        let store = store();
        assert!(store.is_empty());
    }

    #[test]
    fn open_reads_persisted_notes() {
        let mut kv = MemoryStore::new();
        {
            let mut store = NoteStore::open(&mut kv).unwrap();
            store.create(NoteDraft::new("Saved", "")).unwrap();
        }
        let store = NoteStore::open(kv).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.notes()[0].title(), "Saved");
    }

    #[test]
    fn open_rejects_corrupt_collection() {
        let mut kv = MemoryStore::new();
        kv.set(NOTES_KEY, "{broken").unwrap();
        let result = NoteStore::open(kv);
        assert!(matches!(result, Err(StoreError::Corrupt { .. })));
    }

    // ===========================================
    // create
    // ===========================================

    #[test]
    fn create_returns_retrievable_note() {
        let mut store = store();
        let note = store.create(NoteDraft::new("Grocery List", "milk, eggs")).unwrap();

        let fetched = store.get(note.id()).unwrap();
        assert_eq!(fetched, &note);
        assert_eq!(note.created(), note.modified());
        assert!(!note.pinned());
    }

    #[test]
    fn create_applies_defaults() {
        let mut store = store();
        let note = store.create(NoteDraft::new("t", "")).unwrap();
        assert_eq!(note.category(), Some(Category::Personal));
        assert_eq!(note.color(), crate::domain::DEFAULT_COLOR);
    }

    #[test]
    fn create_trims_text() {
        let mut store = store();
        let note = store.create(NoteDraft::new("  Title  ", "\n body \n")).unwrap();
        assert_eq!(note.title(), "Title");
        assert_eq!(note.content(), "body");
    }

    #[test]
    fn create_rejects_blank_note_and_changes_nothing() {
        let mut store = store();
        store.create(NoteDraft::new("existing", "")).unwrap();
        let before = stored_notes(&store);

        let result = store.create(NoteDraft::new("   ", "  "));

        assert!(matches!(result, Err(StoreError::Validation(_))));
        assert_eq!(store.len(), 1);
        assert_eq!(stored_notes(&store), before);
    }

    #[test]
    fn create_prepends() {
        let mut store = NoteStore::with_clock(MemoryStore::new(), ticking_clock()).unwrap();
        let first = store.create(NoteDraft::new("first", "")).unwrap();
        let second = store.create(NoteDraft::new("second", "")).unwrap();
        let ids: Vec<_> = store.notes().iter().map(|n| n.id().clone()).collect();
        assert_eq!(ids, vec![second.id().clone(), first.id().clone()]);
    }

    #[test]
    fn create_persists_before_returning() {
        let mut store = store();
        let note = store.create(NoteDraft::new("t", "c").tags(vec![tag("a")])).unwrap();
        assert_eq!(stored_notes(&store), vec![note]);
    }

    #[test]
    fn create_assigns_unique_ids() {
        let mut store = store();
        for i in 0..50 {
            store.create(NoteDraft::new(format!("note {i}"), "")).unwrap();
        }
        let ids: HashSet<_> = store.notes().iter().map(|n| n.id().clone()).collect();
        assert_eq!(ids.len(), 50);
    }

    // ===========================================
    // update
    // ===========================================

    #[test]
    fn update_merges_fields_and_refreshes_modified() {
        let mut store = NoteStore::with_clock(MemoryStore::new(), ticking_clock()).unwrap();
        let note = store
            .create(NoteDraft::new("Plan", "draft").category(Category::Ideas))
            .unwrap();

        let patch = NotePatch {
            content: Some("  final  ".to_string()),
            tags: Some(vec![tag("q3")]),
            ..Default::default()
        };
        let updated = store.update(note.id(), patch).unwrap();

        assert_eq!(updated.title(), "Plan");
        assert_eq!(updated.content(), "final");
        assert_eq!(updated.category(), Some(Category::Ideas));
        assert_eq!(updated.tags(), &[tag("q3")]);
        assert_eq!(updated.created(), note.created());
        assert!(updated.modified() > note.modified());
        assert_eq!(stored_notes(&store), vec![updated]);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let mut store = store();
        let id: NoteId = "missing".parse().unwrap();
        let result = store.update(&id, NotePatch::default());
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }

    #[test]
    fn update_to_blank_is_rejected_without_change() {
        let mut store = store();
        let note = store.create(NoteDraft::new("t", "c")).unwrap();
        let patch = NotePatch {
            title: Some(" ".to_string()),
            content: Some(String::new()),
            ..Default::default()
        };

        let result = store.update(note.id(), patch);

        assert!(matches!(result, Err(StoreError::Validation(_))));
        assert_eq!(store.get(note.id()), Some(&note));
    }

    #[test]
    fn update_roundtrips_through_export_and_import() {
        let mut source = store();
        let note = source.create(NoteDraft::new("Old", "text")).unwrap();
        let patch = NotePatch {
            title: Some("New".to_string()),
            category: Some(Category::Important),
            color: Some("#ffcdd2".to_string()),
            ..Default::default()
        };
        let updated = source.update(note.id(), patch).unwrap();

        let mut target = store();
        let merged = target.import_merge(&source.export_all().unwrap()).unwrap();

        assert_eq!(merged, 1);
        assert_eq!(target.get(note.id()), Some(&updated));
    }

    // ===========================================
    // toggle_pin
    // ===========================================

    #[test]
    fn toggle_pin_twice_restores_and_advances_modified() {
        let mut store = store();
        let note = store.create(NoteDraft::new("pin me", "")).unwrap();

        assert_eq!(store.toggle_pin(note.id()).unwrap(), Some(true));
        let after_first = store.get(note.id()).unwrap().modified();
        assert_eq!(store.toggle_pin(note.id()).unwrap(), Some(false));
        let after_second = store.get(note.id()).unwrap().modified();

        assert!(!store.get(note.id()).unwrap().pinned());
        assert!(after_first > note.modified());
        assert!(after_second > after_first);
    }

    #[test]
    fn toggle_pin_unknown_id_is_noop() {
        let mut store = store();
        store.create(NoteDraft::new("t", "")).unwrap();
        let before = stored_notes(&store);

        let id: NoteId = "nope".parse().unwrap();
        assert_eq!(store.toggle_pin(&id).unwrap(), None);
        assert_eq!(stored_notes(&store), before);
    }

    // ===========================================
    // tags
    // ===========================================

    #[test]
    fn add_and_remove_tag() {
        let mut store = store();
        let note = store.create(NoteDraft::new("t", "")).unwrap();

        assert!(store.add_tag(note.id(), tag("home")).unwrap());
        assert!(!store.add_tag(note.id(), tag("home")).unwrap());
        assert_eq!(stored_notes(&store)[0].tags(), &[tag("home")]);

        assert!(store.remove_tag(note.id(), &tag("home")).unwrap());
        assert!(!store.remove_tag(note.id(), &tag("home")).unwrap());
        assert!(stored_notes(&store)[0].tags().is_empty());
    }

    #[test]
    fn add_tag_unknown_id_is_not_found() {
        let mut store = store();
        let id: NoteId = "nope".parse().unwrap();
        assert!(matches!(
            store.add_tag(&id, tag("x")),
            Err(StoreError::NotFound { .. })
        ));
    }

    // ===========================================
    // delete / clear_all
    // ===========================================

    #[test]
    fn delete_removes_note() {
        let mut store = store();
        let note = store.create(NoteDraft::new("t", "")).unwrap();
        assert!(store.delete(note.id()).unwrap());
        assert!(store.is_empty());
        assert!(stored_notes(&store).is_empty());
    }

    #[test]
    fn delete_is_idempotent() {
        let mut store = store();
        let keep = store.create(NoteDraft::new("keep", "")).unwrap();
        let id: NoteId = "ghost".parse().unwrap();

        assert!(!store.delete(&id).unwrap());
        assert!(!store.delete(&id).unwrap());
        assert_eq!(store.notes(), &[keep]);
    }

    #[test]
    fn clear_all_empties_collection() {
        let mut store = store();
        store.create(NoteDraft::new("a", "")).unwrap();
        store.create(NoteDraft::new("b", "")).unwrap();

        assert_eq!(store.clear_all().unwrap(), 2);
        assert!(store.is_empty());
        assert!(stored_notes(&store).is_empty());
        assert_eq!(store.clear_all().unwrap(), 0);
    }

    // ===========================================
    // import_merge / export_all
    // ===========================================

    fn record(id: &str, title: &str) -> String {
        format!(
            r##"{{"id": "{id}", "title": "{title}", "content": "", "category": "work", "tags": [], "color": "#ffffff", "pinned": false, "created": "2024-01-01T00:00:00.000Z", "modified": "2024-01-01T00:00:00.000Z"}}"##
        )
    }

    #[test]
    fn import_appends_new_notes_in_order() {
        let mut store = store();
        let existing = store.create(NoteDraft::new("mine", "")).unwrap();
        let payload = format!("[{}, {}]", record("a", "A"), record("b", "B"));

        assert_eq!(store.import_merge(&payload).unwrap(), 2);

        let ids: Vec<_> = store.notes().iter().map(|n| n.id().as_str()).collect();
        assert_eq!(ids, vec![existing.id().as_str(), "a", "b"]);
    }

    #[test]
    fn import_never_overwrites_existing_id() {
        let mut store = store();
        store.import_merge(&format!("[{}]", record("a", "original"))).unwrap();

        let merged = store
            .import_merge(&format!("[{}]", record("a", "imposter")))
            .unwrap();

        assert_eq!(merged, 0);
        let id: NoteId = "a".parse().unwrap();
        assert_eq!(store.get(&id).unwrap().title(), "original");
    }

    #[test]
    fn import_skips_duplicate_ids_within_payload() {
        let mut store = store();
        let payload = format!("[{}, {}]", record("a", "first"), record("a", "second"));

        assert_eq!(store.import_merge(&payload).unwrap(), 1);
        assert_eq!(store.notes()[0].title(), "first");
    }

    #[test]
    fn import_malformed_payload_changes_nothing() {
        let mut store = store();
        store.create(NoteDraft::new("keep", "")).unwrap();
        let before = stored_notes(&store);

        let mixed = format!("[{}, 7]", record("a", "A"));
        for payload in ["not json", r#"{"id": "a"}"#, mixed.as_str()] {
            let result = store.import_merge(payload);
            assert!(matches!(result, Err(StoreError::Format { .. })), "{payload}");
        }
        assert_eq!(store.len(), 1);
        assert_eq!(stored_notes(&store), before);
    }

    #[test]
    fn import_then_export_keeps_records_unchanged() {
        let mut store = store();
        let payload = r#"[{"id": "a", "title": "t", "content": "", "category": "groceries", "tags": [" urgent ", "urgent"], "color": "", "pinned": false, "created": "2024-01-01T00:00:00Z", "modified": "2024-01-01T00:00:00Z"}]"#;
        store.import_merge(payload).unwrap();

        let out: serde_json::Value = serde_json::from_str(&store.export_all().unwrap()).unwrap();
        assert_eq!(out[0]["category"], "groceries");
        assert_eq!(out[0]["tags"], serde_json::json!([" urgent ", "urgent"]));
        assert_eq!(out[0]["color"], "");

        let counts = crate::query::category_counts(store.notes());
        assert_eq!(counts.all, 1);
        assert_eq!(counts.personal + counts.work + counts.ideas + counts.important, 0);
    }

    #[test]
    fn export_preserves_order() {
        let mut store = NoteStore::with_clock(MemoryStore::new(), ticking_clock()).unwrap();
        store.create(NoteDraft::new("one", "")).unwrap();
        store.create(NoteDraft::new("two", "")).unwrap();

        let exported: Vec<Note> = serde_json::from_str(&store.export_all().unwrap()).unwrap();
        assert_eq!(exported, store.notes());
    }

    // ===========================================
    // Persistence failure
    // ===========================================

    #[test]
    fn failed_write_reverts_memory() {
        let failing = Rc::new(Cell::new(false));
        let kv = FlakyStore {
            inner: MemoryStore::new(),
            failing: Rc::clone(&failing),
        };
        let mut store = NoteStore::open(kv).unwrap();
        let note = store.create(NoteDraft::new("stable", "")).unwrap();

        failing.set(true);
        assert!(matches!(
            store.create(NoteDraft::new("lost", "")),
            Err(StoreError::Persistence(_))
        ));
        assert!(store.toggle_pin(note.id()).is_err());
        assert!(store.delete(note.id()).is_err());
        assert!(store.clear_all().is_err());

        assert_eq!(store.notes(), &[note]);
    }

    #[test]
    fn failed_edit_writes_revert_memory() {
        let failing = Rc::new(Cell::new(false));
        let kv = FlakyStore {
            inner: MemoryStore::new(),
            failing: Rc::clone(&failing),
        };
        let mut store = NoteStore::open(kv).unwrap();
        let note = store
            .create(NoteDraft::new("stable", "body").tags(vec![tag("keep")]))
            .unwrap();

        failing.set(true);
        let patch = NotePatch {
            title: Some("changed".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            store.update(note.id(), patch),
            Err(StoreError::Persistence(_))
        ));
        assert!(store.add_tag(note.id(), tag("new")).is_err());
        assert!(store.remove_tag(note.id(), &tag("keep")).is_err());
        assert!(matches!(
            store.import_merge(&format!("[{}]", record("a", "A"))),
            Err(StoreError::Persistence(_))
        ));

        assert_eq!(store.notes(), &[note]);
        failing.set(false);
        assert_eq!(stored_notes(&store), store.notes());
    }
}
