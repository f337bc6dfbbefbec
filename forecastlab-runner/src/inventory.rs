//! Artifact inventory: presence, size and BLAKE3 digest of every artifact the
//! catalog references. Ties a check report to the exact files it judged.

use crate::catalog::Catalog;
use serde::Serialize;
use std::fmt::Write as _;
use std::fs::File;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("failed to hash {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryEntry {
    /// Path relative to the project root.
    pub path: PathBuf,
    pub present: bool,
    pub bytes: Option<u64>,
    pub blake3: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Inventory {
    pub root: PathBuf,
    pub entries: Vec<InventoryEntry>,
}

impl Inventory {
    /// Stat and hash every catalog artifact under `root`.
    pub fn take(root: &Path, catalog: &Catalog) -> Result<Self, InventoryError> {
        let entries = catalog
            .artifacts()
            .into_iter()
            .map(|rel| entry(root, rel))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            root: root.to_path_buf(),
            entries,
        })
    }

    pub fn present_count(&self) -> usize {
        self.entries.iter().filter(|e| e.present).count()
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for e in &self.entries {
            match (&e.bytes, &e.blake3) {
                (Some(bytes), Some(hash)) => {
                    let _ = writeln!(out, "{}  {:>10}  {}", &hash[..16], bytes, e.path.display());
                }
                _ => {
                    let _ = writeln!(out, "{:<16}  {:>10}  {}", "missing", "-", e.path.display());
                }
            }
        }
        let _ = writeln!(
            out,
            "{} of {} artifacts present",
            self.present_count(),
            self.entries.len()
        );
        out
    }
}

fn entry(root: &Path, rel: &Path) -> Result<InventoryEntry, InventoryError> {
    let path = root.join(rel);
    if !path.is_file() {
        return Ok(InventoryEntry {
            path: rel.to_path_buf(),
            present: false,
            bytes: None,
            blake3: None,
        });
    }

    let io_err = |source| InventoryError::Io {
        path: rel.to_path_buf(),
        source,
    };
    let mut file = File::open(&path).map_err(io_err)?;
    let mut hasher = blake3::Hasher::new();
    let bytes = std::io::copy(&mut file, &mut hasher).map_err(io_err)?;

    Ok(InventoryEntry {
        path: rel.to_path_buf(),
        present: true,
        bytes: Some(bytes),
        blake3: Some(hasher.finalize().to_hex().to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;

    #[test]
    fn test_inventory_hashes_present_files() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("data/processed");
        std::fs::create_dir_all(&data).unwrap();
        std::fs::write(data.join("task1_stats.json"), b"{}").unwrap();

        let catalog = Catalog::from_config(&LayoutConfig::default());
        let inv = Inventory::take(dir.path(), &catalog).unwrap();

        assert_eq!(inv.entries.len(), 19);
        assert_eq!(inv.present_count(), 1);

        let stats = inv
            .entries
            .iter()
            .find(|e| e.path == Path::new("data/processed/task1_stats.json"))
            .unwrap();
        assert_eq!(stats.bytes, Some(2));
        assert_eq!(
            stats.blake3.as_deref(),
            Some(blake3::hash(b"{}").to_hex().as_str())
        );

        let text = inv.render_text();
        assert!(text.ends_with("1 of 19 artifacts present\n"));
        assert!(text.contains("missing"));
    }
}
