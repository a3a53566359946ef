use chrono::DateTime;

/// Human-readable file size: bytes below 1 KB, otherwise KB/MB with one
/// decimal place.
pub fn file_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = 1024.0 * 1024.0;
    let b = bytes as f64;
    if b < KB {
        format!("{bytes} B")
    } else if b < MB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{:.1} MB", b / MB)
    }
}

/// Short date for a document's upload instant (epoch seconds), e.g.
/// "Nov 14, 2023".
pub fn upload_date(epoch_secs: f64) -> String {
    match DateTime::from_timestamp(epoch_secs as i64, 0) {
        Some(dt) => dt.format("%b %-d, %Y").to_string(),
        None => String::new(),
    }
}

/// 24-hour clock time for a message timestamp (epoch milliseconds).
pub fn clock_time(epoch_ms: f64) -> String {
    match DateTime::from_timestamp_millis(epoch_ms as i64) {
        Some(dt) => dt.format("%H:%M").to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_size_units() {
        assert_eq!(file_size(0), "0 B");
        assert_eq!(file_size(512), "512 B");
        assert_eq!(file_size(2048), "2.0 KB");
        assert_eq!(file_size(1536), "1.5 KB");
        assert_eq!(file_size(5 * 1024 * 1024), "5.0 MB");
    }

    #[test]
    fn upload_date_is_short() {
        assert_eq!(upload_date(1_700_000_000.0), "Nov 14, 2023");
        assert_eq!(upload_date(0.0), "Jan 1, 1970");
    }

    #[test]
    fn clock_time_is_24_hour() {
        // 1700000000000 ms = 2023-11-14 22:13:20 UTC
        assert_eq!(clock_time(1_700_000_000_000.0), "22:13");
    }

    #[test]
    fn out_of_range_instants_render_empty() {
        assert_eq!(upload_date(f64::MAX), "");
        assert_eq!(clock_time(f64::MAX), "");
    }
}
