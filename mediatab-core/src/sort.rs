//! Row ordering.

use crate::error::CoreError;
use crate::media::{Column, MediaRow};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => f.write_str("asc"),
            SortDirection::Desc => f.write_str("desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(CoreError::Config(format!(
                "unknown sort direction '{other}' (expected asc or desc)"
            ))),
        }
    }
}

/// Compares two rows on `column`. Columns with a typed value compare
/// numerically; the rest compare their display text. Missing values order
/// before present ones.
pub fn compare_rows(a: &MediaRow, b: &MediaRow, column: Column) -> Ordering {
    match column {
        Column::Filename | Column::Format | Column::Profile | Column::Audio => {
            a.cell(column).cmp(b.cell(column))
        }
        _ => match (a.numeric_value(column), b.numeric_value(column)) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    }
}

/// Sorts rows in place. The sort is stable, so equal rows keep input order.
pub fn sort_rows(rows: &mut [MediaRow], column: Column, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let ordering = compare_rows(a, b, column);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{MediaRecord, VideoTrack};

    fn row(name: &str, secs: Option<f64>, mbps: Option<u64>, width: u32) -> MediaRow {
        MediaRow::from_record(
            MediaRecord {
                path: name.into(),
                duration_secs: secs,
                bit_rate: mbps.map(|m| m * 1_000_000),
                video: Some(VideoTrack {
                    width: Some(width),
                    height: Some(width * 9 / 16),
                    ..Default::default()
                }),
                ..Default::default()
            },
            65,
        )
    }

    fn names(rows: &[MediaRow]) -> Vec<&str> {
        rows.iter().map(|r| r.cell(Column::Filename)).collect()
    }

    #[test]
    fn test_sort_by_bitrate_desc_default() {
        let mut rows = vec![
            row("a", None, Some(5), 1280),
            row("b", None, Some(40), 1920),
            row("c", None, None, 640),
            row("d", None, Some(12), 3840),
        ];
        sort_rows(&mut rows, Column::Bitrate, SortDirection::default());
        assert_eq!(names(&rows), ["b", "d", "a", "c"]);
    }

    #[test]
    fn test_sort_duration_numerically_not_lexically() {
        let mut rows = vec![
            row("long", Some(7200.0), None, 1920),
            row("short", Some(59.0), None, 1920),
            row("mid", Some(600.0), None, 1920),
        ];
        sort_rows(&mut rows, Column::Duration, SortDirection::Asc);
        assert_eq!(names(&rows), ["short", "mid", "long"]);
    }

    #[test]
    fn test_sort_resolution_by_pixels() {
        let mut rows = vec![
            row("hd", None, None, 1920),
            row("uhd", None, None, 3840),
            row("sd", None, None, 720),
        ];
        sort_rows(&mut rows, Column::Resolution, SortDirection::Asc);
        assert_eq!(names(&rows), ["sd", "hd", "uhd"]);
    }

    #[test]
    fn test_sort_filename_is_stable() {
        let mut rows = vec![row("b", Some(1.0), None, 1), row("a", None, None, 1), row("b", Some(2.0), None, 1)];
        sort_rows(&mut rows, Column::Filename, SortDirection::Asc);
        assert_eq!(names(&rows), ["a", "b", "b"]);
        assert_eq!(rows[1].record.duration_secs, Some(1.0));
    }

    #[test]
    fn test_parse_direction() {
        assert_eq!("ASC".parse::<SortDirection>().unwrap(), SortDirection::Asc);
        assert!("up".parse::<SortDirection>().is_err());
    }
}
