//! Summary-statistics records (`task1_stats.json`, `task2_stats.json`).

use serde::Serialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// A parsed JSON object plus the file it was read from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRecord {
    pub path: PathBuf,
    pub fields: Map<String, Value>,
}

impl SummaryRecord {
    pub fn new(path: impl Into<PathBuf>, fields: Map<String, Value>) -> Self {
        Self {
            path: path.into(),
            fields,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|k| k.as_str())
    }

    /// The nested object stored under `key`, if it is one.
    pub fn sub_record(&self, key: &str) -> Option<&Map<String, Value>> {
        self.fields.get(key).and_then(Value::as_object)
    }
}
