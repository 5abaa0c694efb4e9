//! Storage layer for spendwatch
//!
//! Provides atomic file writes, string key-value stores and the snapshot
//! repository that persists the budget state through them.

pub mod file_io;
pub mod kv;
pub mod snapshot;

pub use file_io::{read_string, write_atomic, write_json_atomic};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use snapshot::{Snapshot, SnapshotRepository, SNAPSHOT_KEY};

use crate::config::paths::SpendPaths;
use crate::error::SpendError;

/// Open the on-disk snapshot repository under the configured data directory
pub fn open_file_repository(
    paths: &SpendPaths,
) -> Result<SnapshotRepository<FileStore>, SpendError> {
    paths.ensure_directories()?;
    Ok(SnapshotRepository::new(FileStore::new(paths.data_dir())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_file_repository_creates_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendPaths::with_base_dir(temp_dir.path().to_path_buf());

        let repo = open_file_repository(&paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert_eq!(repo.load(), Snapshot::default());
    }
}
