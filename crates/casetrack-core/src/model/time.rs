//! Timestamp display.

use chrono::{DateTime, Local};

/// Renders an API timestamp in local time, or `-` when absent.
///
/// Unparseable input is shown as-is.
pub fn display_timestamp(raw: Option<&str>) -> String {
    match raw {
        None => "-".to_string(),
        Some(value) => DateTime::parse_from_rfc3339(value)
            .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|_| value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_and_garbage() {
        assert_eq!(display_timestamp(None), "-");
        assert_eq!(display_timestamp(Some("yesterday")), "yesterday");
    }

    #[test]
    fn test_rfc3339_is_reformatted() {
        let shown = display_timestamp(Some("2024-05-01T10:00:00Z"));
        assert_eq!(shown.len(), "2024-05-01 10:00".len());
        assert!(shown.starts_with("2024-05-0"));
    }
}
