//! Formatting and parsing helpers shared by the row builder, filters and sorting.
//!
//! Formatting functions turn typed probe values into the display strings of a
//! table row. Parsing functions go the other way for user-supplied filter
//! values.

/// Formats bytes with binary units (B, KB, MB, GB), e.g. 1536 -> "1.50 KB".
#[must_use]
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;

    let bytes_f64 = bytes as f64;
    if bytes_f64 >= GB {
        format!("{:.2} GB", bytes_f64 / GB)
    } else if bytes_f64 >= MB {
        format!("{:.2} MB", bytes_f64 / MB)
    } else if bytes_f64 >= KB {
        format!("{:.2} KB", bytes_f64 / KB)
    } else {
        format!("{bytes} B")
    }
}

/// Formats seconds as MM:SS, or HH:MM:SS once the duration reaches an hour.
/// Returns an empty string for negative or non-finite input.
#[must_use]
pub fn format_duration(seconds: f64) -> String {
    if seconds < 0.0 || !seconds.is_finite() {
        return String::new();
    }

    let total_seconds = seconds as u64;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;
    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}

/// Formats a frame rate with two decimals.
#[must_use]
pub fn format_fps(fps: f64) -> String {
    format!("{fps:.2}")
}

/// Formats a bitrate in bits per second as megabits, e.g. "12.50 Mbps".
#[must_use]
pub fn format_bitrate(bits_per_second: u64) -> String {
    format!("{:.2} Mbps", bits_per_second as f64 / 1_000_000.0)
}

/// Formats an audio summary such as "6CH 640k".
#[must_use]
pub fn format_audio(channels: Option<u32>, bits_per_second: Option<u64>) -> String {
    let mut out = format!("{}CH", channels.unwrap_or(0));
    if let Some(rate) = bits_per_second {
        out.push_str(&format!(" {:.0}k", rate as f64 / 1000.0));
    }
    out
}

/// Formats a bit depth such as "10bit".
#[must_use]
pub fn format_depth(bits: u8) -> String {
    format!("{bits}bit")
}

/// Shortens `s` to at most `max_len` characters by replacing its middle with "...".
#[must_use]
pub fn truncate_middle(s: &str, max_len: usize) -> String {
    const ELLIPSIS: &str = "...";

    let count = s.chars().count();
    if count <= max_len {
        return s.to_string();
    }
    if max_len <= ELLIPSIS.len() {
        return s.chars().take(max_len).collect();
    }

    let keep = max_len - ELLIPSIS.len();
    let left_len = keep.div_ceil(2);
    let right_len = keep / 2;

    let left: String = s.chars().take(left_len).collect();
    let right: String = s.chars().skip(count - right_len).collect();
    format!("{left}{ELLIPSIS}{right}")
}

/// Parses a size such as "700MB", "1.5 GiB", "2k" or "1048576" into bytes.
///
/// All suffixes use binary multiples, matching [`format_size`].
#[must_use]
pub fn parse_size(input: &str) -> Option<u64> {
    let trimmed = input.trim();
    let split_at = trimmed
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(trimmed.len());
    let (number, unit) = trimmed.split_at(split_at);
    let value: f64 = number.parse().ok()?;

    let multiplier = match unit.trim().to_ascii_lowercase().as_str() {
        "" | "b" => 1.0,
        "k" | "kb" | "kib" => 1024.0,
        "m" | "mb" | "mib" => 1024.0 * 1024.0,
        "g" | "gb" | "gib" => 1024.0 * 1024.0 * 1024.0,
        "t" | "tb" | "tib" => 1024.0 * 1024.0 * 1024.0 * 1024.0,
        _ => return None,
    };
    Some((value * multiplier) as u64)
}

/// Parses "HH:MM:SS" or "MM:SS" (seconds may be fractional) into seconds.
#[must_use]
pub fn parse_clock_duration(time: &str) -> Option<f64> {
    let parts: Vec<&str> = time.trim().split(':').collect();
    match parts.as_slice() {
        [minutes, seconds] => {
            let minutes = minutes.parse::<f64>().ok()?;
            let seconds = seconds.parse::<f64>().ok()?;
            Some(minutes * 60.0 + seconds)
        }
        [hours, minutes, seconds] => {
            let hours = hours.parse::<f64>().ok()?;
            let minutes = minutes.parse::<f64>().ok()?;
            let seconds = seconds.parse::<f64>().ok()?;
            Some(hours * 3600.0 + minutes * 60.0 + seconds)
        }
        _ => None,
    }
}

/// Parses a human duration such as "1h30m", "90s", "5min" or "2h" into seconds.
///
/// A trailing number without a unit counts as seconds, so "1m30" is 90.
#[must_use]
pub fn parse_human_duration(input: &str) -> Option<f64> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let mut total = 0.0;
    let mut number = String::new();
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_ascii_digit() || c == '.' {
            number.push(c);
            continue;
        }

        let value: f64 = number.parse().ok()?;
        number.clear();
        match c {
            'h' => total += value * 3600.0,
            'm' => {
                if chars.peek() == Some(&'i') {
                    chars.next();
                    if chars.next() != Some('n') {
                        return None;
                    }
                }
                total += value * 60.0;
            }
            's' => total += value,
            _ => return None,
        }
    }

    if !number.is_empty() {
        total += number.parse::<f64>().ok()?;
    }
    Some(total)
}

/// Parses a duration given as plain seconds, a clock value or a human value.
#[must_use]
pub fn parse_duration(input: &str) -> Option<f64> {
    let input = input.trim();
    input
        .parse::<f64>()
        .ok()
        .or_else(|| parse_clock_duration(input))
        .or_else(|| parse_human_duration(input))
}

/// Returns the numeric prefix of a field such as "12.50 Mbps" or "8500 kb/s".
///
/// Thousands separators (spaces inside digits, as mediainfo prints them) are
/// not supported; only the first run of digits and dots is read.
#[must_use]
pub fn parse_leading_number(field: &str) -> Option<f64> {
    let trimmed = field.trim_start();
    let end = trimmed
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}
