// ============================================================================
// mediatab-core/src/cache.rs
// ============================================================================
//
// PROBE CACHE: Persisted probe results keyed by file path
//
// Probing a large library is slow, so records are stored in a JSON file and
// reused while the file on disk is unchanged. An entry is valid only when its
// signature (`<size>-<mtime seconds>`) matches the file's current signature
// and it was produced by the backend asking for it.
//
// The cache is loaded once per run and written back once, through a temporary
// file in the same directory that is renamed over the old one.

use crate::error::{CoreError, CoreResult};
use crate::media::MediaRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;
use tempfile::NamedTempFile;

/// File name of the cache inside the cache directory.
pub const CACHE_FILE_NAME: &str = "cache.json";

/// A cached probe result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub signature: String,
    /// Name of the prober that produced the record
    #[serde(default)]
    pub backend: String,
    pub probed_at: DateTime<Utc>,
    pub record: MediaRecord,
}

/// Computes the `<size bytes>-<mtime seconds>` signature of a file.
pub fn file_signature(path: &Path) -> CoreResult<String> {
    let metadata = fs::metadata(path)?;
    let mtime = metadata
        .modified()?
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    Ok(format!("{}-{}", metadata.len(), mtime))
}

/// Key used for `path`: its canonical form, falling back to the path as given.
pub fn cache_key(path: &Path) -> String {
    fs::canonicalize(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .to_string_lossy()
        .into_owned()
}

/// The JSON-backed probe cache.
#[derive(Debug)]
pub struct ProbeCache {
    path: PathBuf,
    entries: BTreeMap<String, CacheEntry>,
    dirty: bool,
}

impl ProbeCache {
    /// Location of the cache file: `dir/cache.json` when a directory is
    /// configured, else `<platform cache dir>/mediatab/cache.json`, else
    /// `~/.mediatab/cache/cache.json`.
    pub fn default_location(dir: Option<&Path>) -> CoreResult<PathBuf> {
        if let Some(dir) = dir {
            return Ok(dir.join(CACHE_FILE_NAME));
        }
        dirs::cache_dir()
            .map(|d| d.join("mediatab"))
            .or_else(|| dirs::home_dir().map(|h| h.join(".mediatab").join("cache")))
            .map(|d| d.join(CACHE_FILE_NAME))
            .ok_or_else(|| CoreError::PathError("could not determine a cache directory".to_string()))
    }

    /// Loads the cache at `path`. A missing file gives an empty cache; an
    /// unreadable or corrupt one is logged and replaced by an empty cache.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read(&path) {
            Ok(bytes) => match serde_json::from_slice::<BTreeMap<String, CacheEntry>>(&bytes) {
                Ok(entries) => {
                    log::debug!("Loaded {} cache entries from {}", entries.len(), path.display());
                    entries
                }
                Err(e) => {
                    log::warn!("Ignoring corrupt cache file {}: {}", path.display(), e);
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                log::warn!("Could not read cache file {}: {}", path.display(), e);
                BTreeMap::new()
            }
        };

        Self {
            path,
            entries,
            dirty: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the cache has unsaved changes.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns the cached record for `path` when its signature still matches
    /// and `backend` produced it.
    pub fn lookup(&self, path: &Path, backend: &str) -> Option<&MediaRecord> {
        let entry = self.entries.get(&cache_key(path))?;
        if entry.backend != backend {
            log::debug!(
                "Cache entry for {} came from {}, not {}",
                path.display(),
                entry.backend,
                backend
            );
            return None;
        }
        match file_signature(path) {
            Ok(signature) if signature == entry.signature => Some(&entry.record),
            Ok(_) => {
                log::debug!("Stale cache entry for {}", path.display());
                None
            }
            Err(_) => None,
        }
    }

    /// Stores a record probed by `backend` under the file's current signature.
    pub fn insert(&mut self, path: &Path, backend: &str, record: MediaRecord) -> CoreResult<()> {
        let signature = file_signature(path)?;
        self.entries.insert(
            cache_key(path),
            CacheEntry {
                signature,
                backend: backend.to_string(),
                probed_at: Utc::now(),
                record,
            },
        );
        self.dirty = true;
        Ok(())
    }

    /// Drops entries whose file vanished or changed. Returns how many were removed.
    pub fn prune(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, entry| {
            matches!(file_signature(Path::new(key)), Ok(sig) if sig == entry.signature)
        });
        let removed = before - self.entries.len();
        if removed > 0 {
            log::info!("Pruned {} stale cache entries", removed);
            self.dirty = true;
        }
        removed
    }

    /// All cached records, ordered by key.
    pub fn records(&self) -> impl Iterator<Item = &MediaRecord> {
        self.entries.values().map(|e| &e.record)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &CacheEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Writes the cache if it changed since it was opened or last saved.
    pub fn save(&mut self) -> CoreResult<()> {
        if !self.dirty {
            return Ok(());
        }

        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, &self.entries)
            .map_err(|e| CoreError::JsonParse(format!("Failed to serialize cache: {e}")))?;
        tmp.flush()?;
        tmp.persist(&self.path).map_err(|e| CoreError::Io(e.error))?;

        log::debug!("Saved {} cache entries to {}", self.entries.len(), self.path.display());
        self.dirty = false;
        Ok(())
    }
}
