// ============================================================================
// mediatab-core/src/inspect.rs
// ============================================================================
//
// INSPECTION LOOP: Probes each discovered file, consulting the cache first
//
// Files are handled strictly one after another. A file that disappeared or
// fails to probe is logged, reported to the caller's callback and skipped;
// only the caller decides whether a run with failures is an error.

// ---- Internal crate imports ----
use crate::cache::ProbeCache;
use crate::error::CoreError;
use crate::external::MediaProber;
use crate::media::MediaRecord;

// ---- Standard library imports ----
use std::path::{Path, PathBuf};

/// Progress notifications emitted while inspecting.
#[derive(Debug)]
pub enum InspectEvent<'a> {
    /// About to handle file `index` (0-based) of `total`
    Started {
        path: &'a Path,
        index: usize,
        total: usize,
    },
    /// The record came from the cache
    CacheHit { path: &'a Path },
    /// The file was probed successfully
    Probed { path: &'a Path },
    /// The file was skipped
    Failed { path: &'a Path, error: &'a CoreError },
}

/// A file that could not be inspected.
#[derive(Debug)]
pub struct InspectFailure {
    pub path: PathBuf,
    pub error: CoreError,
}

/// Outcome of [`inspect_files`].
#[derive(Debug, Default)]
pub struct InspectReport {
    /// Records in input order
    pub records: Vec<MediaRecord>,
    pub failures: Vec<InspectFailure>,
    /// How many records were served from the cache
    pub cache_hits: usize,
}

/// Inspects `files` with `prober`, reading and updating `cache` when given.
///
/// # Arguments
///
/// * `prober` - The backend that runs the external tool
/// * `cache` - Probe cache, or `None` when caching is disabled
/// * `files` - Files to inspect, in display order
/// * `on_event` - Called for every [`InspectEvent`]
pub fn inspect_files<F>(
    prober: &dyn MediaProber,
    mut cache: Option<&mut ProbeCache>,
    files: &[PathBuf],
    mut on_event: F,
) -> InspectReport
where
    F: FnMut(InspectEvent<'_>),
{
    let mut report = InspectReport::default();
    let total = files.len();

    for (index, path) in files.iter().enumerate() {
        on_event(InspectEvent::Started { path, index, total });

        if !path.is_file() {
            let error = CoreError::FileNotFound(path.clone());
            log::warn!("{}", error);
            on_event(InspectEvent::Failed { path, error: &error });
            report.failures.push(InspectFailure {
                path: path.clone(),
                error,
            });
            continue;
        }

        if let Some(record) = cache.as_deref().and_then(|c| c.lookup(path, prober.name())) {
            log::debug!("Cache hit: {}", path.display());
            report.records.push(record.clone());
            report.cache_hits += 1;
            on_event(InspectEvent::CacheHit { path });
            continue;
        }

        match prober.probe(path) {
            Ok(record) => {
                if let Some(cache) = cache.as_deref_mut() {
                    if let Err(e) = cache.insert(path, prober.name(), record.clone()) {
                        log::warn!("Could not cache {}: {}", path.display(), e);
                    }
                }
                report.records.push(record);
                on_event(InspectEvent::Probed { path });
            }
            Err(error) => {
                log::warn!(
                    "Skipping {}: {} failed: {}",
                    path.display(),
                    prober.name(),
                    error
                );
                on_event(InspectEvent::Failed { path, error: &error });
                report.failures.push(InspectFailure {
                    path: path.clone(),
                    error,
                });
            }
        }
    }

    log::info!(
        "Inspected {} files: {} ok ({} cached), {} skipped",
        total,
        report.records.len(),
        report.cache_hits,
        report.failures.len()
    );
    report
}
