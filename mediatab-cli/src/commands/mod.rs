//! Command implementations for the CLI.

/// Probes the given paths and prints the table.
pub mod inspect;

/// Prints the table straight from the probe cache.
pub mod cached;

pub use cached::run_cached;
pub use inspect::run_inspect;

use mediatab_core::{CoreConfig, CoreResult, ProbeCache};

/// Opens the cache configured in `config`.
pub(crate) fn open_cache(config: &CoreConfig) -> CoreResult<ProbeCache> {
    let path = ProbeCache::default_location(config.cache_dir.as_deref())?;
    log::debug!("Using cache file: {}", path.display());
    Ok(ProbeCache::open(path))
}

/// Saves the cache, logging instead of failing the run.
pub(crate) fn save_cache(cache: &mut ProbeCache) {
    if let Err(e) = cache.save() {
        log::warn!("Could not save cache {}: {}", cache.path().display(), e);
    }
}
