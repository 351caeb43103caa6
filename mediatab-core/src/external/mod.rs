// ============================================================================
// mediatab-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with mediainfo and ffprobe
//
// This module encapsulates every call to an external media-inspection binary.
// Callers get a boxed `MediaProber` from `create_prober` and never deal with
// command lines or output formats directly.
//
// KEY COMPONENTS:
// - Backend selection (mediainfo, ffprobe, or automatic)
// - Dependency checking before any file is processed
// - The MediaProber trait and its two implementations

// ---- Internal crate imports ----
use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult};
use crate::media::MediaRecord;

// ---- External crate imports ----
use serde::{Deserialize, Serialize};

// ---- Standard library imports ----
use std::fmt;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};
use std::str::FromStr;

// ============================================================================
// SUBMODULES
// ============================================================================

/// Runs ffprobe with JSON output
pub mod ffprobe_executor;

/// Runs mediainfo with the fixed inform template
pub mod mediainfo_executor;

pub use ffprobe_executor::FfprobeProber;
pub use mediainfo_executor::MediaInfoProber;

/// Argument that makes mediainfo print its version and exit.
pub const MEDIAINFO_VERSION_ARG: &str = "--Version";

/// Argument that makes ffprobe print its version and exit.
pub const FFPROBE_VERSION_ARG: &str = "-version";

// ============================================================================
// BACKEND SELECTION
// ============================================================================

/// Which external tool inspects the files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// mediainfo when available, otherwise ffprobe
    #[default]
    Auto,
    MediaInfo,
    Ffprobe,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Auto => f.write_str("auto"),
            Backend::MediaInfo => f.write_str("mediainfo"),
            Backend::Ffprobe => f.write_str("ffprobe"),
        }
    }
}

impl FromStr for Backend {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Backend::Auto),
            "mediainfo" => Ok(Backend::MediaInfo),
            "ffprobe" => Ok(Backend::Ffprobe),
            other => Err(CoreError::Config(format!(
                "unknown backend '{other}' (expected auto, mediainfo or ffprobe)"
            ))),
        }
    }
}

// ============================================================================
// PROBER TRAIT
// ============================================================================

/// Inspects a single media file.
///
/// Implemented by [`MediaInfoProber`] and [`FfprobeProber`]; tests provide
/// their own implementations to drive the inspection loop without the real
/// tools.
pub trait MediaProber {
    /// Short backend name used in log messages.
    fn name(&self) -> &'static str;

    /// Probes `path` and returns its typed record.
    fn probe(&self, path: &Path) -> CoreResult<MediaRecord>;
}

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks that `binary` can be executed by running it with `version_arg`.
///
/// Output is discarded and the exit status is not inspected: any binary that
/// starts counts as present.
///
/// # Errors
///
/// * `CoreError::DependencyNotFound` - the binary does not exist
/// * `CoreError::CommandStart` - the binary exists but could not be started
pub fn check_dependency(binary: &Path, version_arg: &str) -> CoreResult<()> {
    let result = Command::new(binary)
        .arg(version_arg)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {}", binary.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("Dependency '{}' not found.", binary.display());
            Err(CoreError::DependencyNotFound(binary.display().to_string()))
        }
        Err(e) => {
            log::error!(
                "Failed to start dependency check command '{}': {}",
                binary.display(),
                e
            );
            Err(crate::error::command_start_error(binary.display().to_string(), e))
        }
    }
}

/// Resolves the configured backend, verifies its binary and builds the prober.
///
/// With [`Backend::Auto`], mediainfo is tried first and ffprobe is used only
/// when mediainfo is missing.
pub fn create_prober(config: &CoreConfig) -> CoreResult<Box<dyn MediaProber>> {
    match config.backend {
        Backend::MediaInfo => {
            check_dependency(&config.mediainfo_path, MEDIAINFO_VERSION_ARG)?;
            Ok(Box::new(MediaInfoProber::new(&config.mediainfo_path)?))
        }
        Backend::Ffprobe => {
            check_dependency(&config.ffprobe_path, FFPROBE_VERSION_ARG)?;
            Ok(Box::new(FfprobeProber::new(&config.ffprobe_path)))
        }
        Backend::Auto => match check_dependency(&config.mediainfo_path, MEDIAINFO_VERSION_ARG) {
            Ok(()) => Ok(Box::new(MediaInfoProber::new(&config.mediainfo_path)?)),
            Err(CoreError::DependencyNotFound(_)) => {
                log::info!("mediainfo not found, falling back to ffprobe");
                match check_dependency(&config.ffprobe_path, FFPROBE_VERSION_ARG) {
                    Ok(()) => Ok(Box::new(FfprobeProber::new(&config.ffprobe_path))),
                    Err(CoreError::DependencyNotFound(_)) => Err(CoreError::DependencyNotFound(
                        format!(
                            "{} or {}",
                            config.mediainfo_path.display(),
                            config.ffprobe_path.display()
                        ),
                    )),
                    Err(e) => Err(e),
                }
            }
            Err(e) => Err(e),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CoreConfigBuilder;

    #[test]
    fn test_missing_dependency() {
        let result = check_dependency(
            Path::new("/definitely/not/a/real/mediainfo"),
            MEDIAINFO_VERSION_ARG,
        );
        assert!(matches!(result, Err(CoreError::DependencyNotFound(_))));
    }

    #[test]
    fn test_auto_backend_reports_both_missing() {
        let config = CoreConfigBuilder::new()
            .backend(Backend::Auto)
            .mediainfo_path("/nope/mediainfo")
            .ffprobe_path("/nope/ffprobe")
            .build();
        match create_prober(&config) {
            Err(CoreError::DependencyNotFound(name)) => {
                assert!(name.contains("mediainfo") && name.contains("ffprobe"));
            }
            Err(e) => panic!("unexpected error: {e}"),
            Ok(p) => panic!("unexpected prober: {}", p.name()),
        }
    }

    #[test]
    fn test_backend_parse() {
        assert_eq!("MediaInfo".parse::<Backend>().unwrap(), Backend::MediaInfo);
        assert_eq!("ffprobe".parse::<Backend>().unwrap(), Backend::Ffprobe);
        assert_eq!(Backend::default(), Backend::Auto);
        assert!("vlc".parse::<Backend>().is_err());
    }
}
