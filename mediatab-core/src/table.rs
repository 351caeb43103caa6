//! Column-aligned table rendering.
//!
//! Cells may already contain ANSI color codes (see [`crate::highlight`]), so
//! widths are measured on the visible text only: escapes are stripped and the
//! remainder is measured with `unicode-width`.

use crate::error::CoreError;
use console::style;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unicode_width::UnicodeWidthStr;

/// Horizontal alignment of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Center,
}

/// Table layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStyle {
    /// Columns separated by two spaces, no borders.
    Plain,
    /// Box-drawing borders with a separator under the header.
    #[default]
    Boxed,
}

impl fmt::Display for TableStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableStyle::Plain => f.write_str("plain"),
            TableStyle::Boxed => f.write_str("boxed"),
        }
    }
}

impl FromStr for TableStyle {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(TableStyle::Plain),
            "boxed" => Ok(TableStyle::Boxed),
            other => Err(CoreError::Config(format!(
                "unknown table style '{other}' (expected plain or boxed)"
            ))),
        }
    }
}

/// Visible width of a cell, ignoring ANSI escape sequences.
pub fn display_width(text: &str) -> usize {
    strip_ansi_escapes::strip_str(text).width()
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let fill = width.saturating_sub(display_width(text));
    match align {
        Align::Left => format!("{text}{}", " ".repeat(fill)),
        Align::Right => format!("{}{text}", " ".repeat(fill)),
        Align::Center => {
            let left = fill / 2;
            format!("{}{text}{}", " ".repeat(left), " ".repeat(fill - left))
        }
    }
}

/// An in-memory table that renders to a string.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    aligns: Vec<Align>,
    rows: Vec<Vec<String>>,
    bold_headers: bool,
}

impl Table {
    /// Creates a table with the given header text and alignment per column.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = (S, Align)>,
        S: Into<String>,
    {
        let (headers, aligns) = columns
            .into_iter()
            .map(|(header, align)| (header.into(), align))
            .unzip();
        Self {
            headers,
            aligns,
            rows: Vec::new(),
            bold_headers: false,
        }
    }

    /// Renders header cells in bold.
    pub fn with_bold_headers(mut self, bold: bool) -> Self {
        self.bold_headers = bold;
        self
    }

    /// Appends a row. Missing cells are filled with empty strings and extra
    /// cells are dropped.
    pub fn add_row(&mut self, mut cells: Vec<String>) {
        cells.resize(self.headers.len(), String::new());
        self.rows.push(cells);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .map(|row| display_width(&row[i]))
                    .chain(std::iter::once(display_width(header)))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn padded_header(&self, widths: &[usize]) -> Vec<String> {
        self.headers
            .iter()
            .zip(self.aligns.iter().zip(widths))
            .map(|(header, (align, width))| {
                let padded = pad(header, *width, *align);
                if self.bold_headers {
                    style(padded).bold().force_styling(true).to_string()
                } else {
                    padded
                }
            })
            .collect()
    }

    fn padded_row(&self, row: &[String], widths: &[usize]) -> Vec<String> {
        row.iter()
            .zip(self.aligns.iter().zip(widths))
            .map(|(cell, (align, width))| pad(cell, *width, *align))
            .collect()
    }

    /// Renders the table. The result ends with a newline.
    pub fn render(&self, table_style: TableStyle) -> String {
        let widths = self.column_widths();
        match table_style {
            TableStyle::Plain => self.render_plain(&widths),
            TableStyle::Boxed => self.render_boxed(&widths),
        }
    }

    fn render_plain(&self, widths: &[usize]) -> String {
        let mut out = String::new();
        let lines = std::iter::once(self.padded_header(widths))
            .chain(self.rows.iter().map(|row| self.padded_row(row, widths)));
        for cells in lines {
            out.push_str(cells.join("  ").trim_end());
            out.push('\n');
        }
        out
    }

    fn render_boxed(&self, widths: &[usize]) -> String {
        let border = |left: char, mid: char, right: char| {
            let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
            format!("{left}{}{right}\n", segments.join(&mid.to_string()))
        };
        let line = |cells: Vec<String>| format!("│ {} │\n", cells.join(" │ "));

        let mut out = border('┌', '┬', '┐');
        out.push_str(&line(self.padded_header(widths)));
        out.push_str(&border('├', '┼', '┤'));
        for row in &self.rows {
            out.push_str(&line(self.padded_row(row, widths)));
        }
        out.push_str(&border('└', '┴', '┘'));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        let mut table = Table::new([("Name", Align::Left), ("Size", Align::Right)]);
        table.add_row(vec!["a.mkv".to_string(), "1.00 GB".to_string()]);
        table.add_row(vec!["long_name.mp4".to_string(), "12 B".to_string()]);
        table
    }

    #[test]
    fn test_plain_alignment() {
        let rendered = sample().render(TableStyle::Plain);
        let expected = "\
Name              Size
a.mkv          1.00 GB
long_name.mp4     12 B
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_boxed_layout() {
        let rendered = sample().render(TableStyle::Boxed);
        let expected = "\
┌───────────────┬─────────┐
│ Name          │    Size │
├───────────────┼─────────┤
│ a.mkv         │ 1.00 GB │
│ long_name.mp4 │    12 B │
└───────────────┴─────────┘
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_colored_cells_keep_alignment() {
        let mut table = Table::new([("Bitrate", Align::Right), ("X", Align::Left)]);
        table.add_row(vec!["\x1b[31m9.00 Mbps\x1b[0m".to_string(), "a".to_string()]);
        table.add_row(vec!["10.00 Mbps".to_string(), "b".to_string()]);

        let rendered = table.render(TableStyle::Plain);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[1], " \x1b[31m9.00 Mbps\x1b[0m  a");
        assert_eq!(lines[2], "10.00 Mbps  b");
        assert_eq!(display_width(lines[1]), display_width(lines[2]));
    }

    #[test]
    fn test_center_and_short_rows() {
        let mut table = Table::new([("Depth", Align::Center), ("Audio", Align::Left)]);
        table.add_row(vec!["8bit".to_string()]);
        let rendered = table.render(TableStyle::Plain);
        assert_eq!(rendered, "Depth  Audio\n8bit\n");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_empty_boxed_table_keeps_header() {
        let table = Table::new([("Name", Align::Left)]);
        assert!(table.is_empty());
        assert_eq!(
            table.render(TableStyle::Boxed),
            "┌──────┐\n│ Name │\n├──────┤\n└──────┘\n"
        );
    }

    #[test]
    fn test_style_parse() {
        assert_eq!("Plain".parse::<TableStyle>().unwrap(), TableStyle::Plain);
        assert_eq!("boxed".parse::<TableStyle>().unwrap(), TableStyle::Boxed);
        assert!("grid".parse::<TableStyle>().is_err());
    }
}
