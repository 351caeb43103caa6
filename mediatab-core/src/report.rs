//! Builds the rendered table from probed records.
//!
//! records -> rows -> filter -> sort -> highlight -> table

use crate::config::CoreConfig;
use crate::filter::{Filter, apply_filters};
use crate::highlight::highlight_rows;
use crate::media::{Column, MediaRecord, MediaRow};
use crate::sort::sort_rows;
use crate::table::Table;

/// A rendered table plus the counts the CLI reports.
#[derive(Debug, Clone)]
pub struct Report {
    pub output: String,
    /// Rows left after filtering
    pub shown: usize,
    /// Records before filtering
    pub total: usize,
}

/// Turns records into display rows, then filters and sorts them.
pub fn build_rows(records: Vec<MediaRecord>, filters: &[Filter], config: &CoreConfig) -> Vec<MediaRow> {
    let rows: Vec<MediaRow> = records
        .into_iter()
        .map(|record| MediaRow::from_record(record, config.filename_length))
        .collect();
    let mut rows = apply_filters(rows, filters);
    sort_rows(&mut rows, config.sort_column, config.sort_direction);
    rows
}

/// Renders `records` as a table using the style, sort and threshold in `config`.
///
/// `color` controls both the bitrate highlight and bold headers.
pub fn render_report(
    records: Vec<MediaRecord>,
    filters: &[Filter],
    config: &CoreConfig,
    color: bool,
) -> Report {
    let total = records.len();
    let mut rows = build_rows(records, filters, config);
    highlight_rows(&mut rows, config.bitrate_threshold, color);

    let mut table = Table::new(Column::ALL.iter().map(|c| (c.header(), c.align())))
        .with_bold_headers(color);
    for row in rows {
        table.add_row(row.into_cells());
    }

    Report {
        shown: table.len(),
        total,
        output: table.render(config.table_style),
    }
}
