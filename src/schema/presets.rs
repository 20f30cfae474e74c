//! Read-only catalog of named preset patterns.
//!
//! Presets are supplied as a JSON object mapping pattern names to 0/1
//! matrices. Entries that are empty or fail to parse are skipped
//! individually so one bad entry cannot empty the whole catalog.

use std::collections::BTreeMap;

use log::warn;
use serde_json::Value;

use super::pattern::Pattern;

/// Preset catalog parse errors.
#[derive(Debug, thiserror::Error)]
pub enum PresetError {
    #[error("Preset catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Preset catalog must be a JSON object of name -> matrix")]
    NotAnObject,
}

/// Named preset patterns in deterministic (sorted) order.
#[derive(Debug, Clone, Default)]
pub struct PresetCatalog {
    patterns: Vec<(String, Pattern)>,
}

/// JSON source of the presets shipped with the crate.
const BUILTIN_PRESETS: &str = include_str!("../../assets/presets.json");

impl PresetCatalog {
    /// The preset patterns bundled with the crate (glider, blinker,
    /// pulsar, glider gun and friends).
    pub fn builtin() -> Self {
        Self::from_json(BUILTIN_PRESETS)
            .unwrap_or_else(|_| unreachable!("bundled preset catalog is well-formed"))
    }

    /// Parse a catalog from its JSON representation.
    ///
    /// The top level must be an object; malformed or empty entries inside
    /// it are logged and dropped, not propagated.
    pub fn from_json(json: &str) -> Result<Self, PresetError> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Object(entries) = value else {
            return Err(PresetError::NotAnObject);
        };

        let mut sorted: BTreeMap<String, Pattern> = BTreeMap::new();
        for (name, raw) in entries {
            match serde_json::from_value::<Pattern>(raw) {
                Ok(pattern) => {
                    sorted.insert(name, pattern);
                }
                Err(err) => {
                    warn!("skipping malformed preset {name:?}: {err}");
                }
            }
        }

        Ok(Self {
            patterns: sorted.into_iter().collect(),
        })
    }

    /// Look up a preset by name.
    pub fn get(&self, name: &str) -> Option<&Pattern> {
        self.patterns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, p)| p)
    }

    /// All presets, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Pattern)> {
        self.patterns.iter().map(|(n, p)| (n.as_str(), p))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
