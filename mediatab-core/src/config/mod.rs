//! Configuration structures and constants for the mediatab-core library.
//!
//! Values are layered: built-in defaults, then the TOML config file, then
//! `MEDIATAB_*` environment variables. The CLI applies its flags on top of the
//! result.

mod builder;
mod file;
mod utils;

use crate::error::{CoreError, CoreResult};
use crate::external::Backend;
use crate::filter::{Filter, parse_filters};
use crate::media::Column;
use crate::sort::SortDirection;
use crate::table::TableStyle;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub use builder::CoreConfigBuilder;
pub use file::{BinariesConfig, FileConfig, default_config_path};
pub use utils::{EnvLookup, get_env_f64, get_env_parsed, get_env_path, process_env};

// Default constants

/// Default mediainfo binary, resolved through `PATH`.
pub const DEFAULT_MEDIAINFO_BINARY: &str = "mediainfo";

/// Default ffprobe binary, resolved through `PATH`.
pub const DEFAULT_FFPROBE_BINARY: &str = "ffprobe";

/// Default maximum filename width before middle truncation.
pub const DEFAULT_FILENAME_LENGTH: usize = 65;

/// Bitrates strictly above this many Mbps are highlighted.
pub const DEFAULT_BITRATE_THRESHOLD: f64 = 20.0;

/// Default sort column.
pub const DEFAULT_SORT_COLUMN: Column = Column::Bitrate;

// Environment variables

pub const ENV_CONFIG: &str = "MEDIATAB_CONFIG";
pub const ENV_BACKEND: &str = "MEDIATAB_BACKEND";
pub const ENV_MEDIAINFO: &str = "MEDIATAB_MEDIAINFO";
pub const ENV_FFPROBE: &str = "MEDIATAB_FFPROBE";
pub const ENV_CACHE_DIR: &str = "MEDIATAB_CACHE_DIR";
pub const ENV_BITRATE_THRESHOLD: &str = "MEDIATAB_BITRATE_THRESHOLD";

/// Main configuration structure for the mediatab-core library.
///
/// Created by the consumer of the library (normally `mediatab-cli` through
/// [`CoreConfig::load`]) and passed to the prober factory, the cache and the
/// table builder.
///
/// # Examples
///
/// ```rust
/// use mediatab_core::config::CoreConfigBuilder;
/// use mediatab_core::{Column, SortDirection};
///
/// let config = CoreConfigBuilder::new()
///     .sort_column(Column::Duration)
///     .sort_direction(SortDirection::Asc)
///     .filename_length(40)
///     .build();
/// assert_eq!(config.filename_length, 40);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CoreConfig {
    /// Which external tool inspects files
    pub backend: Backend,

    /// mediainfo binary name or path
    pub mediainfo_path: PathBuf,

    /// ffprobe binary name or path
    pub ffprobe_path: PathBuf,

    pub sort_column: Column,
    pub sort_direction: SortDirection,

    /// Filenames longer than this are truncated in the middle
    pub filename_length: usize,

    /// Bitrate highlight threshold in Mbps
    pub bitrate_threshold: f64,

    pub table_style: TableStyle,

    /// Whether probe results are read from and written to the cache
    pub use_cache: bool,

    /// Cache directory override. `None` uses the platform cache directory.
    pub cache_dir: Option<PathBuf>,

    /// Filters applied on every run
    pub filters: Vec<String>,

    /// Named filter lists selectable with `--alias`
    pub aliases: BTreeMap<String, Vec<String>>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        CoreConfigBuilder::new().build()
    }
}

impl CoreConfig {
    /// Loads the layered configuration from the process environment.
    ///
    /// `explicit` is the `--config` path; when absent, `MEDIATAB_CONFIG` and
    /// then the default location are tried.
    pub fn load(explicit: Option<&Path>) -> CoreResult<Self> {
        Self::load_with_env(explicit, &process_env)
    }

    /// Same as [`CoreConfig::load`] with a custom environment source.
    pub fn load_with_env(explicit: Option<&Path>, env: EnvLookup<'_>) -> CoreResult<Self> {
        let mut config = CoreConfig::default();

        let file_path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => get_env_path(env, ENV_CONFIG),
        };

        match file_path {
            Some(path) => {
                if !path.is_file() {
                    return Err(CoreError::Config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                FileConfig::from_file(&path)?.apply_to(&mut config)?;
            }
            None => {
                if let Some(path) = default_config_path().filter(|p| p.is_file()) {
                    FileConfig::from_file(&path)?.apply_to(&mut config)?;
                }
            }
        }

        config.apply_env_overrides(env)?;
        config.validate()?;
        Ok(config)
    }

    /// Applies the `MEDIATAB_*` environment variables.
    pub fn apply_env_overrides(&mut self, env: EnvLookup<'_>) -> CoreResult<()> {
        if let Some(backend) = get_env_parsed::<Backend>(env, ENV_BACKEND)? {
            self.backend = backend;
        }
        if let Some(path) = get_env_path(env, ENV_MEDIAINFO) {
            self.mediainfo_path = path;
        }
        if let Some(path) = get_env_path(env, ENV_FFPROBE) {
            self.ffprobe_path = path;
        }
        if let Some(dir) = get_env_path(env, ENV_CACHE_DIR) {
            self.cache_dir = Some(dir);
        }
        if let Some(threshold) = get_env_f64(env, ENV_BITRATE_THRESHOLD)? {
            self.bitrate_threshold = threshold;
        }
        Ok(())
    }

    /// Rejects values no run can work with.
    pub fn validate(&self) -> CoreResult<()> {
        if self.filename_length == 0 {
            return Err(CoreError::Config(
                "filename_length must be at least 1".to_string(),
            ));
        }
        if !self.bitrate_threshold.is_finite() || self.bitrate_threshold < 0.0 {
            return Err(CoreError::Config(format!(
                "bitrate threshold must be a non-negative number, got {}",
                self.bitrate_threshold
            )));
        }
        Ok(())
    }

    /// Expands alias names into their filter expressions, in order.
    pub fn expand_aliases<S: AsRef<str>>(&self, names: &[S]) -> CoreResult<Vec<String>> {
        let mut expanded = Vec::new();
        for name in names {
            let name = name.as_ref();
            let filters = self.aliases.get(name).ok_or_else(|| {
                let known: Vec<&str> = self.aliases.keys().map(String::as_str).collect();
                CoreError::Config(if known.is_empty() {
                    format!("unknown alias '{name}' (no aliases are configured)")
                } else {
                    format!("unknown alias '{name}' (known: {})", known.join(", "))
                })
            })?;
            expanded.extend(filters.iter().cloned());
        }
        Ok(expanded)
    }

    /// Parses the configured filters, the expanded aliases and `extra` into
    /// one AND-combined list.
    pub fn resolve_filters<S: AsRef<str>>(
        &self,
        extra: &[S],
        alias_names: &[S],
    ) -> CoreResult<Vec<Filter>> {
        let mut expressions = self.filters.clone();
        expressions.extend(self.expand_aliases(alias_names)?);
        expressions.extend(extra.iter().map(|s| s.as_ref().to_string()));
        parse_filters(&expressions)
    }
}
