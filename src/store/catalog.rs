//! Saved-pattern catalog over a minimal key/value contract.
//!
//! The backing store is an external collaborator (browser local storage,
//! a file, an in-memory map); the catalog owns key namespacing and the
//! JSON encoding of pattern matrices. A reserved key prefix keeps the
//! catalog's entries from colliding with unrelated stored data.

use log::warn;

use crate::schema::Pattern;

/// Reserved key prefix for catalog entries.
const KEY_PREFIX: &str = "pattern-";

/// Minimal key/value persistence contract.
///
/// Mirrors the storage surface the engine actually needs; transient
/// failures belong to the backend and are not modeled here.
pub trait KeyValueStore {
    fn put(&mut self, key: &str, value: &str);
    fn get(&self, key: &str) -> Option<String>;
    /// All stored keys, in no particular order.
    fn keys(&self) -> Vec<String>;
    fn remove(&mut self, key: &str);
}

/// Catalog lookup errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Stored pattern {name:?} is malformed: {source}")]
    Malformed {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Named saved patterns persisted through a [`KeyValueStore`].
pub struct PatternCatalog<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> PatternCatalog<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn key(name: &str) -> String {
        format!("{KEY_PREFIX}{name}")
    }

    /// Persist `pattern` under `name`, overwriting any previous entry.
    pub fn put(&mut self, name: &str, pattern: &Pattern) {
        let json = serde_json::to_string(pattern)
            .unwrap_or_else(|_| unreachable!("pattern matrices always serialize"));
        self.store.put(&Self::key(name), &json);
    }

    /// Look up a saved pattern by name.
    ///
    /// A present but unparseable entry is surfaced as an error here; only
    /// enumeration degrades by skipping.
    pub fn get(&self, name: &str) -> Result<Option<Pattern>, CatalogError> {
        match self.store.get(&Self::key(name)) {
            None => Ok(None),
            Some(json) => serde_json::from_str(&json)
                .map(Some)
                .map_err(|source| CatalogError::Malformed {
                    name: name.to_string(),
                    source,
                }),
        }
    }

    /// Enumerate all saved patterns, sorted by name.
    ///
    /// Malformed entries are logged and skipped individually; one corrupt
    /// record never aborts the listing. Keys outside the reserved prefix
    /// are not ours and are ignored.
    pub fn list(&self) -> Vec<(String, Pattern)> {
        let mut entries: Vec<(String, Pattern)> = Vec::new();

        for key in self.store.keys() {
            let Some(name) = key.strip_prefix(KEY_PREFIX) else {
                continue;
            };
            let Some(json) = self.store.get(&key) else {
                continue;
            };
            match serde_json::from_str::<Pattern>(&json) {
                Ok(pattern) => entries.push((name.to_string(), pattern)),
                Err(err) => {
                    warn!("skipping malformed stored pattern {name:?}: {err}");
                }
            }
        }

        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        entries
    }

    /// Remove a saved pattern. Removing a missing name is a no-op.
    pub fn delete(&mut self, name: &str) {
        self.store.remove(&Self::key(name));
    }

    /// Backing store access for host glue.
    pub fn store(&self) -> &S {
        &self.store
    }
}
