use chrono::{DateTime, Utc};
use serde_json::Number;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate to a display width, ending with `...` when shortened.
pub fn truncate_text(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    const ELLIPSIS: &str = "...";
    let ellipsis_width = ELLIPSIS.width();

    if max_width <= ellipsis_width {
        return ELLIPSIS[..max_width].to_string();
    }

    let target_width = max_width - ellipsis_width;
    let mut result = String::new();
    let mut current_width = 0;

    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if current_width + ch_width > target_width {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }

    result.push_str(ELLIPSIS);
    result
}

/// Format an Eagle timestamp (milliseconds since the epoch) as
/// `YYYY-MM-DD HH:MM` in UTC. Values that are not a representable instant
/// are printed as-is.
pub fn format_timestamp_millis(millis: &Number) -> String {
    let instant = millis
        .as_i64()
        .or_else(|| millis.as_f64().map(|f| f as i64))
        .and_then(DateTime::<Utc>::from_timestamp_millis);
    match instant {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => millis.to_string(),
    }
}

/// Human readable byte size, e.g. `1.5 MB`.
pub fn format_size(bytes: &Number) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    let mut size = match bytes.as_f64() {
        Some(size) if size >= 1024.0 => size,
        _ => return format!("{} B", bytes),
    };
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", size, UNITS[unit])
}
