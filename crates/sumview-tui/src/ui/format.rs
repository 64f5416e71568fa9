use chrono::DateTime;

/// Truncate string to a max length, adding an ellipsis when truncated.
pub fn truncate_with_ellipsis(s: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }

    if s.chars().count() <= max_len {
        return s.to_string();
    }

    if max_len <= 3 {
        return ".".repeat(max_len);
    }

    let take = max_len - 3;
    let mut truncated: String = s.chars().take(take).collect();
    truncated.push_str("...");
    truncated
}

/// Format an RFC3339 wire timestamp like "Mar 05 02:14 PM".
/// Falls back to the raw string when the backend sends something unparseable.
pub fn format_message_timestamp(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt.format("%b %d %I:%M %p").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_untouched() {
        assert_eq!(truncate_with_ellipsis("short", 10), "short");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_with_ellipsis("a longer subject line", 10), "a longe...");
    }

    #[test]
    fn test_truncate_tiny_budget() {
        assert_eq!(truncate_with_ellipsis("anything", 2), "..");
        assert_eq!(truncate_with_ellipsis("anything", 0), "");
    }

    #[test]
    fn test_timestamp_formats_wire_value() {
        assert_eq!(
            format_message_timestamp("2024-03-05T14:12:00Z"),
            "Mar 05 02:12 PM"
        );
    }

    #[test]
    fn test_timestamp_with_offset() {
        assert_eq!(
            format_message_timestamp("2024-11-30T09:05:00+02:00"),
            "Nov 30 09:05 AM"
        );
    }

    #[test]
    fn test_garbage_timestamp_passes_through() {
        assert_eq!(format_message_timestamp("yesterday-ish"), "yesterday-ish");
    }
}
