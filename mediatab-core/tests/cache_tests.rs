// mediatab-core/tests/cache_tests.rs

use mediatab_core::cache::{CACHE_FILE_NAME, ProbeCache, file_signature};
use mediatab_core::media::{MediaRecord, VideoTrack};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

const BACKEND: &str = "mediainfo";

fn create_dummy_file(dir: &Path, filename: &str, contents: &[u8]) -> PathBuf {
    let file_path = dir.join(filename);
    let mut file = File::create(&file_path).expect("Failed to create dummy file");
    file.write_all(contents).expect("Failed to write dummy content");
    file_path
}

fn sample_record(path: &Path) -> MediaRecord {
    MediaRecord {
        path: path.to_path_buf(),
        size_bytes: Some(13),
        bit_rate: Some(8_000_000),
        video: Some(VideoTrack {
            width: Some(1280),
            height: Some(720),
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[test]
fn test_signature_format() {
    let dir = tempdir().unwrap();
    let file = create_dummy_file(dir.path(), "a.mkv", b"dummy content");
    let signature = file_signature(&file).unwrap();
    let (size, mtime) = signature.split_once('-').unwrap();
    assert_eq!(size, "13");
    assert!(mtime.parse::<u64>().unwrap() > 0);
}

#[test]
fn test_insert_save_and_reload() {
    let dir = tempdir().unwrap();
    let media = create_dummy_file(dir.path(), "a.mkv", b"dummy content");
    let cache_path = dir.path().join("cache").join(CACHE_FILE_NAME);

    let mut cache = ProbeCache::open(&cache_path);
    assert!(cache.is_empty());
    cache.insert(&media, BACKEND, sample_record(&media)).unwrap();
    assert!(cache.is_dirty());
    cache.save().unwrap();
    assert!(!cache.is_dirty());
    assert!(cache_path.exists());

    let reloaded = ProbeCache::open(&cache_path);
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.lookup(&media, BACKEND), Some(&sample_record(&media)));
    assert_eq!(reloaded.records().count(), 1);
}

#[test]
fn test_changed_file_is_a_miss() {
    let dir = tempdir().unwrap();
    let media = create_dummy_file(dir.path(), "a.mkv", b"dummy content");
    let mut cache = ProbeCache::open(dir.path().join(CACHE_FILE_NAME));
    cache.insert(&media, BACKEND, sample_record(&media)).unwrap();
    assert!(cache.lookup(&media, BACKEND).is_some());

    fs::write(&media, b"different and longer content").unwrap();
    assert!(cache.lookup(&media, BACKEND).is_none());
}

#[test]
fn test_other_backend_is_a_miss() {
    let dir = tempdir().unwrap();
    let media = create_dummy_file(dir.path(), "a.mkv", b"dummy content");
    let mut cache = ProbeCache::open(dir.path().join(CACHE_FILE_NAME));
    cache.insert(&media, "ffprobe", sample_record(&media)).unwrap();
    assert!(cache.lookup(&media, "ffprobe").is_some());
    assert!(cache.lookup(&media, BACKEND).is_none());
}

#[test]
fn test_corrupt_cache_starts_empty() {
    let dir = tempdir().unwrap();
    let cache_path = create_dummy_file(dir.path(), CACHE_FILE_NAME, b"{ not json");
    let cache = ProbeCache::open(&cache_path);
    assert!(cache.is_empty());
    assert!(!cache.is_dirty());
}

#[test]
fn test_save_without_changes_writes_nothing() {
    let dir = tempdir().unwrap();
    let cache_path = dir.path().join(CACHE_FILE_NAME);
    let mut cache = ProbeCache::open(&cache_path);
    cache.save().unwrap();
    assert!(!cache_path.exists());
}

#[test]
fn test_prune_drops_vanished_and_changed_files() {
    let dir = tempdir().unwrap();
    let kept = create_dummy_file(dir.path(), "kept.mkv", b"dummy content");
    let removed = create_dummy_file(dir.path(), "removed.mkv", b"dummy content");
    let changed = create_dummy_file(dir.path(), "changed.mkv", b"dummy content");

    let mut cache = ProbeCache::open(dir.path().join(CACHE_FILE_NAME));
    for path in [&kept, &removed, &changed] {
        cache.insert(path, BACKEND, sample_record(path)).unwrap();
    }
    cache.save().unwrap();

    fs::remove_file(&removed).unwrap();
    fs::write(&changed, b"changed size").unwrap();

    assert_eq!(cache.prune(), 2);
    assert!(cache.is_dirty());
    assert_eq!(cache.len(), 1);
    assert!(cache.lookup(&kept, BACKEND).is_some());
}

#[test]
fn test_default_location_uses_configured_dir() {
    let location = ProbeCache::default_location(Some(Path::new("/tmp/mt-cache"))).unwrap();
    assert_eq!(location, PathBuf::from("/tmp/mt-cache/cache.json"));
}
