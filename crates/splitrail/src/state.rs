#![forbid(unsafe_code)]

//! Persisted panel-size state.
//!
//! Persistence goes through an injected key-value seam instead of a runtime
//! branch on an environment global: hosts hand the splitter a
//! [`StorageProvider`] that maps a [`StateScope`] to a concrete
//! [`StateStore`], or fails when the environment has none. The splitter
//! reads the store once at attach and writes once per resize-end,
//! overwrite semantics, last-writer-wins.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::config::StateScope;

/// String key-value store for persisted layouts.
pub trait StateStore {
    /// Value stored under `key`, if any.
    fn load(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn store(&mut self, key: &str, value: &str);
}

/// Maps a scope to a concrete store, when the environment has one.
pub trait StorageProvider {
    fn storage(&mut self, scope: StateScope) -> Result<&mut dyn StateStore, StorageError>;
}

/// Persistence-layer errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The environment has no store for the requested scope.
    Unavailable { scope: StateScope },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { scope } => {
                write!(f, "no {scope} storage is available in this environment")
            }
        }
    }
}

impl std::error::Error for StorageError {}

/// Provider for environments without any persistence capability.
///
/// Every access fails; a stateful splitter surfaces this immediately at
/// attach rather than silently dropping layouts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStorage;

impl StorageProvider for NoStorage {
    fn storage(&mut self, scope: StateScope) -> Result<&mut dyn StateStore, StorageError> {
        Err(StorageError::Unavailable { scope })
    }
}

/// Map-backed store with shared-handle semantics.
///
/// Clones share the underlying map, the way two components in one page share
/// the same session store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl StateStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn store(&mut self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// In-memory provider backing both scopes.
///
/// Intended for tests and embedded hosts; clones share both stores.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    session: MemoryStore,
    local: MemoryStore,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageProvider for MemoryStorage {
    fn storage(&mut self, scope: StateScope) -> Result<&mut dyn StateStore, StorageError> {
        match scope {
            StateScope::Session => Ok(&mut self.session),
            StateScope::Local => Ok(&mut self.local),
        }
    }
}
