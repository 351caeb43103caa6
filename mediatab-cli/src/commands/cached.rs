// mediatab-cli/src/commands/cached.rs
//
// `--cached`: render what the cache holds without running any prober.
// Path arguments, when given, restrict the output to entries under them.

use super::{open_cache, save_cache};
use crate::cli::Cli;
use crate::error::CliResult;
use crate::terminal::{format_summary, print_notice};
use mediatab_core::{CoreConfig, MediaRecord, render_report};
use std::path::{Path, PathBuf};

fn under_any(key: &str, roots: &[PathBuf]) -> bool {
    roots.is_empty() || roots.iter().any(|root| Path::new(key).starts_with(root))
}

fn canonical_roots(paths: &[PathBuf]) -> Vec<PathBuf> {
    paths
        .iter()
        .map(|p| std::fs::canonicalize(p).unwrap_or_else(|_| p.clone()))
        .collect()
}

/// Prints the cached records as a table.
pub fn run_cached(cli: &Cli, config: &CoreConfig, color: bool, stderr_color: bool) -> CliResult<()> {
    let filters = config.resolve_filters(&cli.filters, &cli.aliases)?;

    let mut cache = open_cache(config)?;
    if cli.prune_cache {
        cache.prune();
        save_cache(&mut cache);
    }

    let roots = canonical_roots(&cli.paths);
    let records: Vec<MediaRecord> = cache
        .entries()
        .filter(|(key, _)| under_any(key, &roots))
        .map(|(_, entry)| entry.record.clone())
        .collect();

    if records.is_empty() {
        print_notice("No cached entries found", stderr_color);
        return Ok(());
    }

    let rendered = render_report(records, &filters, config, color);
    print!("{}", rendered.output);
    log::info!("{}", format_summary(rendered.shown, rendered.total, 0, 0));
    Ok(())
}
