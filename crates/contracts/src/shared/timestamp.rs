use chrono::{DateTime, Utc};

/// Разбор метки времени API (миллисекунды от эпохи в виде строки)
pub fn parse_millis(value: &str) -> Option<DateTime<Utc>> {
    let millis = value.trim().parse::<i64>().ok()?;
    DateTime::<Utc>::from_timestamp_millis(millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_millis() {
        let dt = parse_millis("1571234567890").unwrap();
        assert_eq!(dt.to_rfc3339(), "2019-10-16T14:02:47.890+00:00");
        assert!(parse_millis("").is_none());
        assert!(parse_millis("yesterday").is_none());
    }
}
