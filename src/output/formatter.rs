use anyhow::{Context, Result};
use chrono::{DateTime, Duration, SecondsFormat, Utc};

/// Format a timestamp as RFC 3339 in UTC, e.g. "2024-01-01T09:00:00Z"
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Parse a timestamp written by [`format_timestamp`]
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(s)
        .with_context(|| format!("Invalid timestamp: {}", s))?;
    Ok(parsed.with_timezone(&Utc))
}

/// Format a signed duration in humantime notation
/// "3h", "1day 2h 5m", "-45m" for negative durations, "0s" for zero
pub fn format_duration(duration: Duration) -> String {
    let magnitude = duration.abs().to_std().unwrap_or_default();
    let formatted = humantime::format_duration(magnitude).to_string();
    if duration < Duration::zero() {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

/// Parse a duration written by [`format_duration`]
pub fn parse_duration(s: &str) -> Result<Duration> {
    let (negative, magnitude) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let parsed = humantime::parse_duration(magnitude)
        .with_context(|| format!("Invalid duration: {}", s))?;
    let duration = Duration::from_std(parsed).context("Duration out of range")?;
    Ok(if negative { -duration } else { duration })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp_utc() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        assert_eq!(format_timestamp(at), "2024-01-01T09:00:00Z");
    }

    #[test]
    fn test_parse_timestamp_with_offset() {
        let parsed = parse_timestamp("2024-01-01T10:00:00+01:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert!(parse_timestamp("yesterday").is_err());
    }

    #[test]
    fn test_format_duration_hours() {
        assert_eq!(format_duration(Duration::hours(3)), "3h");
    }

    #[test]
    fn test_format_duration_mixed() {
        let duration = Duration::days(1) + Duration::hours(2) + Duration::minutes(5);
        assert_eq!(format_duration(duration), "1day 2h 5m");
    }

    #[test]
    fn test_format_duration_negative() {
        assert_eq!(format_duration(Duration::minutes(-45)), "-45m");
    }

    #[test]
    fn test_format_duration_zero() {
        assert_eq!(format_duration(Duration::zero()), "0s");
    }

    #[test]
    fn test_parse_duration_reads_formatted_values() {
        for duration in [
            Duration::hours(3),
            Duration::days(9) + Duration::seconds(17),
            Duration::minutes(-45),
            Duration::zero(),
        ] {
            assert_eq!(parse_duration(&format_duration(duration)).unwrap(), duration);
        }
    }

    #[test]
    fn test_parse_duration_rejects_garbage() {
        assert!(parse_duration("soon").is_err());
    }
}
