//! On-disk persistence of named, previously generated pattern sets.
//!
//! Saved sets live in one pretty-printed JSON file. Writes go through a
//! temporary file plus rename so a crash mid-write never corrupts the
//! existing store. Loads are forgiving: a missing file is an empty store,
//! and a corrupt one yields an empty list plus a warning rather than an
//! error — a damaged store should never lock the user out.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR_NAME: &str = "stash-regex";
const DEFAULT_STORAGE_FILENAME: &str = "saved_patterns.json";

/// Failure writing the store file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to write saved pattern data: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode saved pattern data: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A named pattern set with its creation time and free-form metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPatternSet {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub entries: Vec<String>,
    /// RFC 3339 UTC creation timestamp.
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl SavedPatternSet {
    /// Create a set stamped with the current time.
    pub fn new(label: impl Into<String>, entries: Vec<String>) -> Self {
        Self {
            label: label.into(),
            entries,
            created_at: Utc::now().to_rfc3339(),
            metadata: HashMap::new(),
        }
    }

    /// Attach a metadata value.
    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}

/// Default store location under `base_dir` (or the platform app-data
/// directory when `None`).
pub fn default_storage_path(base_dir: Option<&Path>) -> PathBuf {
    let root = base_dir.map(Path::to_path_buf).unwrap_or_else(|| {
        std::env::var_os("APPDATA")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
            .unwrap_or_else(|| PathBuf::from("."))
    });
    root.join(APP_DIR_NAME).join(DEFAULT_STORAGE_FILENAME)
}

/// Write all sets to `path` atomically, creating parent directories.
pub fn save_sets(path: &Path, sets: &[SavedPatternSet]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let payload = serde_json::to_string_pretty(sets)?;

    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, payload)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

/// Read all sets from `path`.
///
/// A missing file is an empty store. Unreadable or malformed content yields
/// an empty list plus a warning; list items that are not objects are
/// silently skipped.
pub fn load_sets(path: &Path) -> (Vec<SavedPatternSet>, Vec<String>) {
    if !path.exists() {
        return (Vec::new(), Vec::new());
    }

    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            return (
                Vec::new(),
                vec![format!("Failed to load saved pattern data: {err}")],
            )
        }
    };

    let payload: serde_json::Value = match serde_json::from_str(&raw) {
        Ok(payload) => payload,
        Err(err) => {
            return (
                Vec::new(),
                vec![format!("Failed to load saved pattern data: {err}")],
            )
        }
    };

    let Some(items) = payload.as_array() else {
        return (
            Vec::new(),
            vec!["Saved pattern data is not a list.".to_string()],
        );
    };

    let sets = items
        .iter()
        .filter(|item| item.is_object())
        .filter_map(|item| serde_json::from_value(item.clone()).ok())
        .collect();
    (sets, Vec::new())
}
