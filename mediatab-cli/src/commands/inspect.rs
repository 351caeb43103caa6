// ============================================================================
// mediatab-cli/src/commands/inspect.rs
// ============================================================================
//
// PROBE RUN: The default command
//
// Pipeline: filters -> dependency check -> cache prune -> discovery -> per-file probe (cache
// first) -> render -> stdout. Files that cannot be inspected are logged and
// skipped without failing the run.

use super::{open_cache, save_cache};
use crate::cli::Cli;
use crate::error::{CliResult, missing_paths_error};
use crate::progress::{ProbeProgress, scan_spinner};
use crate::terminal::{format_summary, print_notice};
use mediatab_core::{CoreConfig, collect_media_files, create_prober, inspect_files, render_report};

/// Probes every media file under `cli.paths` and prints the table.
pub fn run_inspect(cli: &Cli, config: &CoreConfig, color: bool, stderr_color: bool) -> CliResult<()> {
    if cli.paths.is_empty() {
        return Err(missing_paths_error());
    }

    // Malformed filters and unknown aliases fail before any probing.
    let filters = config.resolve_filters(&cli.filters, &cli.aliases)?;

    let prober = create_prober(config)?;
    log::info!("Using {} backend", prober.name());

    // Pruning also runs when the config turns caching off for lookups.
    let mut cache = if config.use_cache || cli.prune_cache {
        let mut cache = open_cache(config)?;
        if cli.prune_cache {
            cache.prune();
            save_cache(&mut cache);
        }
        config.use_cache.then_some(cache)
    } else {
        None
    };

    let spinner = scan_spinner();
    let discovery = collect_media_files(&cli.paths);
    spinner.finish_and_clear();

    if discovery.files.is_empty() {
        print_notice("No media files found", stderr_color);
        return Ok(());
    }

    let mut progress = ProbeProgress::new(discovery.files.len());
    let report = inspect_files(
        prober.as_ref(),
        cache.as_mut(),
        &discovery.files,
        |event| progress.handle(event),
    );
    progress.finish();

    if let Some(cache) = cache.as_mut() {
        save_cache(cache);
    }

    let skipped = report.failures.len() + discovery.missing.len();
    let cache_hits = report.cache_hits;
    let rendered = render_report(report.records, &filters, config, color);
    print!("{}", rendered.output);
    log::info!(
        "{}",
        format_summary(rendered.shown, rendered.total, cache_hits, skipped)
    );
    Ok(())
}
