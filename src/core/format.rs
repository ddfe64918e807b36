//! Duration formatting and parsing.
//!
//! All durations are whole milliseconds. Formatting floors to whole seconds
//! and never rounds.

/// Format milliseconds as `HH:MM:SS`.
#[must_use]
pub fn format_hms(ms: u64) -> String {
    let total_seconds = ms / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Format a session length for the recent-sessions list: `3m 12s` or `45s`.
#[must_use]
pub fn format_session_duration(ms: u64) -> String {
    let total_seconds = ms / 1000;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;

    if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

/// Format an aggregate total as `Hh Mm`.
#[must_use]
pub fn format_total(ms: u64) -> String {
    let total_seconds = ms / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    format!("{hours}h {minutes}m")
}

/// Convert milliseconds to fractional minutes.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn ms_to_minutes(ms: u64) -> f64 {
    ms as f64 / 1000.0 / 60.0
}

/// Parse a duration string like "25m", "1h30m", "90s" into milliseconds.
///
/// A bare number is read as minutes. Returns `None` for empty, malformed, or
/// zero-length input.
#[must_use]
pub fn parse_duration_ms(s: &str) -> Option<u64> {
    let s = s.trim().to_lowercase();

    if let Ok(minutes) = s.parse::<u64>() {
        return minutes.checked_mul(60_000).filter(|&ms| ms > 0);
    }

    let mut total_seconds: u64 = 0;
    let mut current_num = String::new();

    for c in s.chars() {
        if c.is_ascii_digit() {
            current_num.push(c);
            continue;
        }
        if current_num.is_empty() {
            return None;
        }

        let num: u64 = current_num.parse().ok()?;
        current_num.clear();

        let seconds = match c {
            'h' => num.checked_mul(3600)?,
            'm' => num.checked_mul(60)?,
            's' => num,
            _ => return None,
        };
        total_seconds = total_seconds.checked_add(seconds)?;
    }

    // Trailing number without a unit counts as minutes
    if !current_num.is_empty() {
        let num: u64 = current_num.parse().ok()?;
        total_seconds = total_seconds.checked_add(num.checked_mul(60)?)?;
    }

    total_seconds.checked_mul(1000).filter(|&ms| ms > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hms() {
        assert_eq!(format_hms(3_725_000), "01:02:05");
        assert_eq!(format_hms(0), "00:00:00");
        assert_eq!(format_hms(999), "00:00:00");
        assert_eq!(format_hms(59_999), "00:00:59");
    }

    #[test]
    fn test_format_hms_past_a_day() {
        assert_eq!(format_hms(100 * 3_600_000), "100:00:00");
    }

    #[test]
    fn test_format_session_duration() {
        assert_eq!(format_session_duration(45_000), "45s");
        assert_eq!(format_session_duration(192_500), "3m 12s");
        assert_eq!(format_session_duration(60_000), "1m 0s");
        assert_eq!(format_session_duration(400), "0s");
    }

    #[test]
    fn test_format_total() {
        assert_eq!(format_total(0), "0h 0m");
        assert_eq!(format_total(3_725_000), "1h 2m");
        assert_eq!(format_total(59_000), "0h 0m");
    }

    #[test]
    fn test_ms_to_minutes() {
        assert!((ms_to_minutes(90_000) - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_duration_minutes() {
        assert_eq!(parse_duration_ms("25"), Some(25 * 60_000));
        assert_eq!(parse_duration_ms("25m"), Some(25 * 60_000));
    }

    #[test]
    fn test_parse_duration_compound() {
        assert_eq!(parse_duration_ms("1h30m"), Some(90 * 60_000));
        assert_eq!(parse_duration_ms("1m30s"), Some(90_000));
        assert_eq!(parse_duration_ms("90s"), Some(90_000));
    }

    #[test]
    fn test_parse_duration_invalid() {
        assert!(parse_duration_ms("").is_none());
        assert!(parse_duration_ms("abc").is_none());
        assert!(parse_duration_ms("0").is_none());
        assert!(parse_duration_ms("5x").is_none());
    }

    #[test]
    fn test_parse_duration_overflow() {
        assert!(parse_duration_ms("999999999999999999").is_none());
        assert!(parse_duration_ms("999999999999999999h").is_none());
        assert!(parse_duration_ms("18446744073709552s").is_none());
        assert!(parse_duration_ms("99999999999999999999").is_none());
        assert_eq!(parse_duration_ms("1000000h"), Some(3_600_000_000_000));
    }
}
