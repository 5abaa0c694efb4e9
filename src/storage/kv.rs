//! Durable key-value stores
//!
//! The snapshot repository only needs string values under string keys.
//! `FileStore` keeps one file per key; `MemoryStore` keeps everything in
//! process and can be told to fail writes.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

use crate::error::{SpendError, SpendResult};

use super::file_io::{read_string, remove_if_exists, write_atomic};

/// String-valued key-value storage
pub trait KeyValueStore {
    /// Read the value under `key`, `None` if absent
    fn get(&self, key: &str) -> SpendResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> SpendResult<()>;

    /// Delete `key`; absent keys are not an error
    fn remove(&self, key: &str) -> SpendResult<()>;
}

/// Stores each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// File backing `key`
    pub fn path_for(&self, key: &str) -> SpendResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(SpendError::Storage(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> SpendResult<Option<String>> {
        read_string(self.path_for(key)?)
    }

    fn set(&self, key: &str, value: &str) -> SpendResult<()> {
        write_atomic(self.path_for(key)?, value.as_bytes())
    }

    fn remove(&self, key: &str) -> SpendResult<()> {
        remove_if_exists(self.path_for(key)?)
    }
}

/// In-process store; clones share the same entries
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following `set`/`remove` fail until switched back
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Store a raw value directly, bypassing failure injection
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    fn check_writable(&self) -> SpendResult<()> {
        if self.fail_writes.get() {
            return Err(SpendError::Storage("storage is unavailable".into()));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> SpendResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> SpendResult<()> {
        self.check_writable()?;
        self.insert_raw(key, value);
        Ok(())
    }

    fn remove(&self, key: &str) -> SpendResult<()> {
        self.check_writable()?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
