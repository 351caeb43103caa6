// ============================================================================
// mediatab-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for CoreConfig
//
// Fluent construction of CoreConfig with every field defaulted. Used for the
// built-in defaults layer and by tests that need a specific configuration.

// ---- Standard library imports ----
use std::collections::BTreeMap;
use std::path::PathBuf;

// ---- Internal crate imports ----
use super::CoreConfig;
use crate::external::Backend;
use crate::media::Column;
use crate::sort::SortDirection;
use crate::table::TableStyle;

/// Builder for creating CoreConfig instances.
///
/// # Examples
///
/// ```rust
/// use mediatab_core::config::CoreConfigBuilder;
/// use mediatab_core::external::Backend;
///
/// let config = CoreConfigBuilder::new()
///     .backend(Backend::Ffprobe)
///     .ffprobe_path("/usr/local/bin/ffprobe")
///     .bitrate_threshold(35.0)
///     .use_cache(false)
///     .build();
/// assert!(!config.use_cache);
/// ```
#[derive(Debug, Clone)]
pub struct CoreConfigBuilder {
    backend: Backend,
    mediainfo_path: PathBuf,
    ffprobe_path: PathBuf,
    sort_column: Column,
    sort_direction: SortDirection,
    filename_length: usize,
    bitrate_threshold: f64,
    table_style: TableStyle,
    use_cache: bool,
    cache_dir: Option<PathBuf>,
    filters: Vec<String>,
    aliases: BTreeMap<String, Vec<String>>,
}

impl Default for CoreConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreConfigBuilder {
    /// Creates a new CoreConfigBuilder with default values.
    pub fn new() -> Self {
        Self {
            backend: Backend::default(),
            mediainfo_path: PathBuf::from(super::DEFAULT_MEDIAINFO_BINARY),
            ffprobe_path: PathBuf::from(super::DEFAULT_FFPROBE_BINARY),
            sort_column: super::DEFAULT_SORT_COLUMN,
            sort_direction: SortDirection::default(),
            filename_length: super::DEFAULT_FILENAME_LENGTH,
            bitrate_threshold: super::DEFAULT_BITRATE_THRESHOLD,
            table_style: TableStyle::default(),
            use_cache: true,
            cache_dir: None,
            filters: Vec::new(),
            aliases: BTreeMap::new(),
        }
    }

    /// Sets the inspection backend.
    pub fn backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    /// Sets the mediainfo binary.
    pub fn mediainfo_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.mediainfo_path = path.into();
        self
    }

    /// Sets the ffprobe binary.
    pub fn ffprobe_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.ffprobe_path = path.into();
        self
    }

    pub fn sort_column(mut self, column: Column) -> Self {
        self.sort_column = column;
        self
    }

    pub fn sort_direction(mut self, direction: SortDirection) -> Self {
        self.sort_direction = direction;
        self
    }

    /// Sets the maximum filename width.
    pub fn filename_length(mut self, length: usize) -> Self {
        self.filename_length = length;
        self
    }

    /// Sets the bitrate highlight threshold in Mbps.
    pub fn bitrate_threshold(mut self, mbps: f64) -> Self {
        self.bitrate_threshold = mbps;
        self
    }

    pub fn table_style(mut self, style: TableStyle) -> Self {
        self.table_style = style;
        self
    }

    /// Enables or disables the probe cache.
    pub fn use_cache(mut self, enabled: bool) -> Self {
        self.use_cache = enabled;
        self
    }

    pub fn cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = Some(dir.into());
        self
    }

    /// Adds a filter expression applied on every run.
    pub fn filter(mut self, expression: impl Into<String>) -> Self {
        self.filters.push(expression.into());
        self
    }

    /// Defines a named filter list.
    pub fn alias<I, S>(mut self, name: impl Into<String>, filters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases
            .insert(name.into(), filters.into_iter().map(Into::into).collect());
        self
    }

    /// Builds the CoreConfig instance.
    pub fn build(self) -> CoreConfig {
        CoreConfig {
            backend: self.backend,
            mediainfo_path: self.mediainfo_path,
            ffprobe_path: self.ffprobe_path,
            sort_column: self.sort_column,
            sort_direction: self.sort_direction,
            filename_length: self.filename_length,
            bitrate_threshold: self.bitrate_threshold,
            table_style: self.table_style,
            use_cache: self.use_cache,
            cache_dir: self.cache_dir,
            filters: self.filters,
            aliases: self.aliases,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_fields() {
        let config = CoreConfigBuilder::new()
            .backend(Backend::MediaInfo)
            .mediainfo_path("/opt/mediainfo")
            .sort_column(Column::Size)
            .sort_direction(SortDirection::Asc)
            .table_style(TableStyle::Plain)
            .cache_dir("/tmp/mt")
            .alias("uhd", ["resolution:3840"])
            .build();

        assert_eq!(config.backend, Backend::MediaInfo);
        assert_eq!(config.mediainfo_path, PathBuf::from("/opt/mediainfo"));
        assert_eq!(config.ffprobe_path, PathBuf::from("ffprobe"));
        assert_eq!(config.sort_column, Column::Size);
        assert_eq!(config.table_style, TableStyle::Plain);
        assert_eq!(config.cache_dir, Some(PathBuf::from("/tmp/mt")));
        assert_eq!(config.aliases["uhd"], vec!["resolution:3840".to_string()]);
    }
}
