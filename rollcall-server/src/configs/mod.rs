pub mod schema;
pub mod settings;
pub mod storage;

pub use schema::SchemaManager;
pub use settings::{Database, Logger, Server, Settings};
pub use storage::Storage;

use std::io;
use std::path::{Path, PathBuf};

/// Resolve a configured path against the working directory.
pub fn normalize_path(path: impl AsRef<Path>) -> io::Result<PathBuf> {
    std::fs::canonicalize(path)
}
