/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{DateTime, Utc};

/// Format timestamp to DD.MM.YYYY HH:MM:SS, "-" if absent
pub fn format_datetime(dt: Option<DateTime<Utc>>) -> String {
    match dt {
        Some(dt) => dt.format("%d.%m.%Y %H:%M:%S").to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::timestamp::parse_millis;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime(parse_millis("1571234567890")), "16.10.2019 14:02:47");
        assert_eq!(format_datetime(None), "-");
    }
}
