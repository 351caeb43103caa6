//! Threshold-based highlighting of the bitrate column.

use crate::media::{Column, MediaRow};
use crate::utils::parse_leading_number;
use owo_colors::OwoColorize;

/// Returns true when the numeric prefix of `field` is strictly above `threshold`.
pub fn exceeds_threshold(field: &str, threshold: f64) -> bool {
    parse_leading_number(field).is_some_and(|value| value > threshold)
}

/// Wraps `field` in red when its value exceeds `threshold_mbps` and color is on.
pub fn highlight_bitrate(field: &str, threshold_mbps: f64, color: bool) -> String {
    if color && exceeds_threshold(field, threshold_mbps) {
        field.red().bold().to_string()
    } else {
        field.to_string()
    }
}

/// Highlights the bitrate cell of every row in place.
pub fn highlight_rows(rows: &mut [MediaRow], threshold_mbps: f64, color: bool) {
    if !color {
        return;
    }
    for row in rows {
        let highlighted = highlight_bitrate(row.cell(Column::Bitrate), threshold_mbps, color);
        row.set_cell(Column::Bitrate, highlighted);
    }
}
