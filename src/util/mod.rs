//
//  cloudinary-admin
//  util/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Utility Functions
//!
//! Small formatting helpers used by the CLI output layer.
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`format_timestamp`] | RFC 3339 timestamp to local `YYYY-MM-DD HH:MM` |
//! | [`truncate`] | Shorten a string with an ellipsis |
//! | [`format_size`] | Byte count to human-readable size |

use chrono::{DateTime, Local};

/// Formats an RFC 3339 timestamp, as returned by the Admin API, in local time.
///
/// Unparseable input is returned unchanged.
///
/// ```rust
/// use cloudinary_admin::util::format_timestamp;
///
/// assert_eq!(format_timestamp("yesterday"), "yesterday");
/// ```
pub fn format_timestamp(timestamp: &str) -> String {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}

/// Truncates a string to at most `max_len` characters, ending in `...` when
/// shortened.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len > 3 {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    } else {
        s.chars().take(max_len).collect()
    }
}

/// Formats a byte count using binary units.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("héllo wörld", 7), "héll...");
        assert_eq!(truncate("abc", 2), "ab");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3.0 GB");
    }

    #[test]
    fn test_format_timestamp() {
        let formatted = format_timestamp("2024-03-01T10:15:00Z");
        assert_eq!(formatted.len(), "2024-03-01 10:15".len());
        assert!(formatted.starts_with("2024-0"));
    }
}
