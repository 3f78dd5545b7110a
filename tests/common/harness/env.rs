//! Isolated test environment with temp directory.

use super::{JotCommand, TestNote};
use anyhow::Result;
use jotter::cli::config::Config;
use jotter::domain::Note;
use jotter::infra::SqliteStore;
use jotter::store::NoteStore;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary data directory.
///
/// Everything under the temp directory is removed when the env is dropped.
pub struct TestEnv {
    /// The temporary directory, removed on drop
    temp_dir: TempDir,
    /// Directory passed to `--dir`
    data_dir: PathBuf,
    /// Stand-in for the user config directory
    config_home: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let data_dir = temp_dir.path().join("data");
        let config_home = temp_dir.path().join("config");
        std::fs::create_dir_all(&config_home).expect("Failed to create config home");
        Self {
            temp_dir,
            data_dir,
            config_home,
        }
    }

    /// Returns the data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the path of the SQLite store file.
    pub fn store_path(&self) -> PathBuf {
        Config::store_path(&self.data_dir)
    }

    /// Opens the note store directly, bypassing the CLI.
    pub fn open_store(&self) -> Result<NoteStore<SqliteStore>> {
        let kv = SqliteStore::open(&self.store_path())?;
        Ok(NoteStore::open(kv)?)
    }

    /// Seeds notes into the store, appended after any existing notes.
    pub fn add_notes(&self, notes: &[TestNote]) {
        let mut store = self.open_store().expect("Failed to open store");
        let seeded: Vec<Note> = notes.iter().map(TestNote::to_note).collect();
        store.merge(seeded).expect("Failed to seed notes");
    }

    /// Seeds a single note.
    pub fn add_note(&self, note: &TestNote) {
        self.add_notes(std::slice::from_ref(note));
    }

    /// Returns the notes currently persisted.
    pub fn stored_notes(&self) -> Vec<Note> {
        self.open_store()
            .expect("Failed to open store")
            .notes()
            .to_vec()
    }

    /// Creates a JotCommand configured for this test environment.
    pub fn cmd(&self) -> JotCommand {
        JotCommand::new()
            .config_home(&self.config_home)
            .dir(&self.data_dir)
    }

    /// Writes a file into the temp directory and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Returns a path inside the temp directory without creating it.
    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===========================================
    // TestEnv Foundation
    // ===========================================

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.data_dir().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_store_path() {
        let env = TestEnv::new();
        assert!(env.store_path().ends_with("jotter.db"));
        assert!(env.store_path().starts_with(env.data_dir()));
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--dir");
        assert_eq!(args[1], env.data_dir().to_string_lossy());
    }

    // ===========================================
    // Seeding
    // ===========================================

    #[test]
    fn test_env_add_note_persists() {
        let env = TestEnv::new();
        env.add_note(&TestNote::new("Seeded").tag("fixture"));

        let notes = env.stored_notes();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title(), "Seeded");
        assert_eq!(notes[0].tags()[0].as_str(), "fixture");
    }

    #[test]
    fn test_env_add_notes_keeps_order() {
        let env = TestEnv::new();
        env.add_notes(&[TestNote::new("First"), TestNote::new("Second")]);

        let titles: Vec<String> = env
            .stored_notes()
            .iter()
            .map(|n| n.title().to_string())
            .collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }
}
