//! Countdown formatter
//!
//! Pure conversion from a number of seconds to the `"MM:SS"` display
//! string used by the countdown label.

/// Format a non-negative number of seconds as `"MM:SS"`
///
/// Both components are zero-padded to two digits. Minutes are not
/// clamped at 59 and render as-is when larger, so 3725 seconds
/// formats as `"62:05"`.
pub fn format_to_minutes(seconds_total: u64) -> String {
    let minutes = seconds_total / 60;
    let seconds = seconds_total % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_zero() {
        assert_eq!(format_to_minutes(0), "00:00");
    }

    #[test]
    fn test_format_seconds_only() {
        assert_eq!(format_to_minutes(3), "00:03");
        assert_eq!(format_to_minutes(59), "00:59");
    }

    #[test]
    fn test_format_minutes_and_seconds() {
        assert_eq!(format_to_minutes(60), "01:00");
        assert_eq!(format_to_minutes(65), "01:05");
        assert_eq!(format_to_minutes(125), "02:05");
        assert_eq!(format_to_minutes(300), "05:00");
    }

    #[test]
    fn test_format_minutes_beyond_an_hour() {
        assert_eq!(format_to_minutes(3725), "62:05");
    }
}
