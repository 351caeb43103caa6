use crate::error::CoreError;
use crate::table::Align;
use std::fmt;
use std::str::FromStr;

/// One of the ten table columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Filename,
    Size,
    Duration,
    Fps,
    Bitrate,
    Resolution,
    Format,
    Profile,
    Depth,
    Audio,
}

impl Column {
    /// All columns in display order.
    pub const ALL: [Column; 10] = [
        Column::Filename,
        Column::Size,
        Column::Duration,
        Column::Fps,
        Column::Bitrate,
        Column::Resolution,
        Column::Format,
        Column::Profile,
        Column::Depth,
        Column::Audio,
    ];

    /// Position of the column in a row.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name used on the command line and in filters.
    pub fn name(self) -> &'static str {
        match self {
            Column::Filename => "filename",
            Column::Size => "size",
            Column::Duration => "duration",
            Column::Fps => "fps",
            Column::Bitrate => "bitrate",
            Column::Resolution => "resolution",
            Column::Format => "format",
            Column::Profile => "profile",
            Column::Depth => "depth",
            Column::Audio => "audio",
        }
    }

    /// Header text shown in the table.
    pub fn header(self) -> &'static str {
        match self {
            Column::Filename => "Filename",
            Column::Size => "Size",
            Column::Duration => "Duration",
            Column::Fps => "FPS",
            Column::Bitrate => "Bitrate",
            Column::Resolution => "Resolution",
            Column::Format => "Format",
            Column::Profile => "Profile",
            Column::Depth => "Depth",
            Column::Audio => "Audio",
        }
    }

    pub fn align(self) -> Align {
        match self {
            Column::Size | Column::Duration | Column::Fps | Column::Bitrate => Align::Right,
            Column::Depth => Align::Center,
            _ => Align::Left,
        }
    }

    /// Columns that take `column:op:value` filters.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Column::Size | Column::Duration | Column::Fps | Column::Bitrate
        )
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Column {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Column::ALL
            .into_iter()
            .find(|column| column.name() == wanted)
            .ok_or_else(|| CoreError::InvalidColumn(s.to_string()))
    }
}
