// ============================================================================
// mediatab-cli/src/progress.rs
// ============================================================================
//
// PROGRESS REPORTING: indicatif spinner and bar on stderr
//
// A spinner runs while paths are scanned and a bar counts probed files. Both
// are hidden when stderr is not a terminal, so piped output stays clean.

// ---- External crate imports ----
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use mediatab_core::InspectEvent;

// ---- Standard library imports ----
use std::io::IsTerminal;
use std::time::Duration;

fn stderr_target() -> ProgressDrawTarget {
    if std::io::stderr().is_terminal() {
        ProgressDrawTarget::stderr()
    } else {
        ProgressDrawTarget::hidden()
    }
}

/// Starts the spinner shown while directories are scanned.
pub fn scan_spinner() -> ProgressBar {
    let spinner = ProgressBar::with_draw_target(None, stderr_target());
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Scanning for media files...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Progress bar fed by inspection events.
pub struct ProbeProgress {
    bar: ProgressBar,
    cache_hits: usize,
}

impl ProbeProgress {
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::with_draw_target(Some(total as u64), stderr_target());
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{prefix} [{bar:30}] {pos}/{len} ({elapsed}) {wide_msg}")
        {
            bar.set_style(style.progress_chars("##."));
        }
        bar.set_prefix("Probing");
        Self { bar, cache_hits: 0 }
    }

    /// Updates the bar for one inspection event.
    pub fn handle(&mut self, event: InspectEvent<'_>) {
        match event {
            InspectEvent::Started { path, .. } => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                self.bar.set_message(name);
            }
            InspectEvent::CacheHit { .. } => {
                self.cache_hits += 1;
                self.bar.set_prefix(format!("Probing ({} cached)", self.cache_hits));
                self.bar.inc(1);
            }
            InspectEvent::Probed { .. } => self.bar.inc(1),
            InspectEvent::Failed { path, error } => {
                self.bar
                    .suspend(|| log::debug!("Failed: {}: {}", path.display(), error));
                self.bar.inc(1);
            }
        }
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
