//! Persistence adapter, file I/O, logging setup

mod fs;
mod kv;
mod logging;

pub use fs::{FsError, read_text, write_atomic};
pub use kv::{KeyValueStore, KvError, KvResult, MemoryStore, SqliteStore};
pub use logging::{init_logging, level_for_verbosity};
