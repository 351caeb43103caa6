//! File discovery module for finding media files to inspect.
//!
//! Explicit file arguments are always kept, whatever their extension.
//! Directory arguments are walked recursively and only files with a known
//! media extension (case-insensitive) are collected. Symlinks to files are
//! collected like regular files.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensions treated as media when scanning directories.
pub const MEDIA_EXTENSIONS: &[&str] = &[
    "mp4", "mkv", "avi", "mov", "wmv", "flv", "webm", "m4v", "mpg", "mpeg", "m2v", "3gp", "3g2",
    "mxf", "ts", "mts", "m2ts", "vob", "ogv", "qt", "rm", "rmvb", "asf", "mp3", "wav", "flac",
    "m4a", "aac", "ogg", "wma", "opus",
];

/// Result of resolving the path arguments.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Discovery {
    /// Files to inspect, in argument order; directory contents sorted by name
    pub files: Vec<PathBuf>,
    /// Arguments that do not exist
    pub missing: Vec<PathBuf>,
    /// Number of directory entries examined while walking
    pub scanned: usize,
}

/// Whether `path` has one of the [`MEDIA_EXTENSIONS`].
pub fn is_media_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            MEDIA_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Resolves file and directory arguments into the list of files to inspect.
///
/// Paths that do not exist are logged and recorded in [`Discovery::missing`].
/// Unreadable directory entries are logged and skipped.
pub fn collect_media_files<P: AsRef<Path>>(paths: &[P]) -> Discovery {
    let mut discovery = Discovery::default();

    for path in paths {
        let path = path.as_ref();
        if path.is_file() {
            discovery.files.push(path.to_path_buf());
        } else if path.is_dir() {
            log::debug!("Scanning directory: {}", path.display());
            for entry in WalkDir::new(path).sort_by_file_name() {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        log::warn!("Skipping unreadable entry: {}", e);
                        continue;
                    }
                };
                // Symlinked files count; symlinked directories are not entered.
                if !entry.path().is_file() {
                    continue;
                }
                discovery.scanned += 1;
                if is_media_file(entry.path()) {
                    discovery.files.push(entry.into_path());
                }
            }
        } else {
            log::warn!("Path does not exist, skipping: {}", path.display());
            discovery.missing.push(path.to_path_buf());
        }
    }

    log::info!(
        "Found {} media files ({} scanned, {} missing)",
        discovery.files.len(),
        discovery.scanned,
        discovery.missing.len()
    );
    discovery
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_media_file() {
        assert!(is_media_file(Path::new("a/b/Movie.MKV")));
        assert!(is_media_file(Path::new("song.flac")));
        assert!(!is_media_file(Path::new("notes.txt")));
        assert!(!is_media_file(Path::new("README")));
    }
}
