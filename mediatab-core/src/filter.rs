//! Row filters.
//!
//! Text columns take `column:substring` and match case-insensitively against
//! the display cell, except `filename`, which matches the untruncated name. Numeric columns take `column:op:value` and compare
//! against the typed value of the row (bitrate in Mbps, size in bytes,
//! duration in seconds, fps as is). All filters must match for a row to be
//! kept.

use crate::error::{CoreError, CoreResult};
use crate::media::{Column, MediaRow};
use crate::utils::{parse_duration, parse_size};
use std::fmt;
use std::str::FromStr;

/// Comparison operator of a numeric filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Greater,
    Less,
    GreaterOrEqual,
    LessOrEqual,
    Equal,
}

impl Comparison {
    fn parse(op: &str) -> Option<Self> {
        match op {
            ">" => Some(Comparison::Greater),
            "<" => Some(Comparison::Less),
            ">=" => Some(Comparison::GreaterOrEqual),
            "<=" => Some(Comparison::LessOrEqual),
            "=" | "==" => Some(Comparison::Equal),
            _ => None,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Comparison::Greater => ">",
            Comparison::Less => "<",
            Comparison::GreaterOrEqual => ">=",
            Comparison::LessOrEqual => "<=",
            Comparison::Equal => "=",
        }
    }

    fn holds(self, left: f64, right: f64) -> bool {
        match self {
            Comparison::Greater => left > right,
            Comparison::Less => left < right,
            Comparison::GreaterOrEqual => left >= right,
            Comparison::LessOrEqual => left <= right,
            Comparison::Equal => (left - right).abs() < 1e-9,
        }
    }
}

/// A single parsed filter.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Case-insensitive substring match on a text column
    Contains { column: Column, needle: String },
    /// Numeric comparison on a numeric column
    Compare {
        column: Column,
        op: Comparison,
        value: f64,
    },
}

impl Filter {
    pub fn column(&self) -> Column {
        match self {
            Filter::Contains { column, .. } | Filter::Compare { column, .. } => *column,
        }
    }

    /// Returns true when `row` passes this filter.
    pub fn matches(&self, row: &MediaRow) -> bool {
        match self {
            Filter::Contains {
                column: Column::Filename,
                needle,
            } => row.record.file_name().to_lowercase().contains(needle.as_str()),
            Filter::Contains { column, needle } => row
                .cell(*column)
                .to_lowercase()
                .contains(needle.as_str()),
            Filter::Compare { column, op, value } => row
                .numeric_value(*column)
                .is_some_and(|actual| op.holds(actual, *value)),
        }
    }
}

fn parse_threshold(column: Column, raw: &str) -> Option<f64> {
    match column {
        Column::Size => parse_size(raw).map(|b| b as f64),
        Column::Duration => parse_duration(raw),
        _ => raw.trim().parse::<f64>().ok(),
    }
}

impl FromStr for Filter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (column_name, rest) = s
            .split_once(':')
            .ok_or_else(|| CoreError::invalid_filter(s, "expected column:value or column:op:value"))?;
        let column: Column = column_name
            .parse()
            .map_err(|_| CoreError::invalid_filter(s, format!("unknown column '{column_name}'")))?;

        if !column.is_numeric() {
            if rest.is_empty() {
                return Err(CoreError::invalid_filter(s, "empty match value"));
            }
            return Ok(Filter::Contains {
                column,
                needle: rest.to_lowercase(),
            });
        }

        let (op, raw_value) = rest.split_once(':').ok_or_else(|| {
            CoreError::invalid_filter(s, format!("{column} needs column:op:value, e.g. {column}:>:5"))
        })?;
        let op = Comparison::parse(op.trim())
            .ok_or_else(|| CoreError::invalid_filter(s, format!("unknown operator '{op}'")))?;
        let value = parse_threshold(column, raw_value)
            .ok_or_else(|| CoreError::invalid_filter(s, format!("invalid value '{raw_value}'")))?;

        Ok(Filter::Compare { column, op, value })
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Contains { column, needle } => write!(f, "{column}:{needle}"),
            Filter::Compare { column, op, value } => {
                write!(f, "{column}:{}:{value}", op.symbol())
            }
        }
    }
}

/// Parses every filter expression, failing on the first invalid one.
pub fn parse_filters<S: AsRef<str>>(expressions: &[S]) -> CoreResult<Vec<Filter>> {
    expressions.iter().map(|e| e.as_ref().parse()).collect()
}

/// Returns true when `row` passes every filter. An empty filter list keeps all rows.
pub fn matches_all(row: &MediaRow, filters: &[Filter]) -> bool {
    filters.iter().all(|filter| filter.matches(row))
}

/// Keeps only the rows that pass every filter.
pub fn apply_filters(rows: Vec<MediaRow>, filters: &[Filter]) -> Vec<MediaRow> {
    if filters.is_empty() {
        return rows;
    }
    rows.into_iter()
        .filter(|row| matches_all(row, filters))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{MediaRecord, VideoTrack};

    fn row(name: &str, size: u64, secs: f64, mbps: f64, codec: &str) -> MediaRow {
        MediaRow::from_record(
            MediaRecord {
                path: name.into(),
                size_bytes: Some(size),
                duration_secs: Some(secs),
                bit_rate: Some((mbps * 1_000_000.0) as u64),
                video: Some(VideoTrack {
                    fps: Some(25.0),
                    width: Some(1920),
                    height: Some(1080),
                    codec: Some(codec.to_string()),
                    ..Default::default()
                }),
                audio: None,
            },
            65,
        )
    }

    #[test]
    fn test_parse_numeric_filters() {
        assert_eq!(
            "bitrate:>:5".parse::<Filter>().unwrap(),
            Filter::Compare {
                column: Column::Bitrate,
                op: Comparison::Greater,
                value: 5.0
            }
        );
        assert_eq!(
            "size:<=:1GB".parse::<Filter>().unwrap(),
            Filter::Compare {
                column: Column::Size,
                op: Comparison::LessOrEqual,
                value: 1_073_741_824.0
            }
        );
        assert_eq!(
            "duration:>:1h30m".parse::<Filter>().unwrap(),
            Filter::Compare {
                column: Column::Duration,
                op: Comparison::Greater,
                value: 5400.0
            }
        );
    }

    #[test]
    fn test_parse_text_filter_lowercases() {
        assert_eq!(
            "filename:Holiday".parse::<Filter>().unwrap(),
            Filter::Contains {
                column: Column::Filename,
                needle: "holiday".to_string()
            }
        );
        // Colons after the column belong to the needle.
        assert_eq!(
            "profile:a:b".parse::<Filter>().unwrap().to_string(),
            "profile:a:b"
        );
    }

    #[test]
    fn test_invalid_filters() {
        for bad in ["bitrate", "codec:hevc", "bitrate:5", "bitrate:~:5", "size:>:lots", "format:"] {
            assert!(
                matches!(bad.parse::<Filter>(), Err(CoreError::InvalidFilter { .. })),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_apply_filters() {
        let rows = vec![
            row("holiday.mkv", 2_000_000_000, 3600.0, 8.0, "hevc"),
            row("Holiday_Extras.mp4", 100_000_000, 300.0, 25.0, "h264"),
            row("work.mov", 50_000_000, 60.0, 30.0, "prores"),
        ];

        let filters = parse_filters(&["filename:holiday"]).unwrap();
        let kept = apply_filters(rows.clone(), &filters);
        assert_eq!(kept.len(), 2);

        let filters = parse_filters(&["filename:holiday", "bitrate:>:10"]).unwrap();
        let kept = apply_filters(rows.clone(), &filters);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].cell(Column::Filename), "Holiday_Extras.mp4");

        let filters = parse_filters(&["duration:<:5min", "format:PRO"]).unwrap();
        let kept = apply_filters(rows.clone(), &filters);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].cell(Column::Filename), "work.mov");

        assert_eq!(apply_filters(rows, &[]).len(), 3);
    }

    #[test]
    fn test_missing_value_fails_numeric_filter() {
        let record = MediaRecord::new("audio.flac");
        let row = MediaRow::from_record(record, 65);
        let filter: Filter = "bitrate:<:100".parse().unwrap();
        assert!(!filter.matches(&row));
    }

    #[test]
    fn test_filename_filter_sees_truncated_part() {
        let record = MediaRecord::new("2019_family_holiday_in_the_mountains_part_two.mkv");
        let row = MediaRow::from_record(record, 20);
        assert!(!row.cell(Column::Filename).to_lowercase().contains("holiday"));

        let filter: Filter = "filename:HOLIDAY".parse().unwrap();
        assert!(filter.matches(&row));
        let filter: Filter = "filename:vacation".parse().unwrap();
        assert!(!filter.matches(&row));
    }
}
