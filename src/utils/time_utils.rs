use chrono::{DateTime, Local};
use std::time::Duration;

pub struct TimeUtils;

impl TimeUtils {
    pub const CLOCK_FORMAT: &'static str = "%H:%M:%S";
    pub const STANDARD_TIME_FORMAT: &'static str = "%Y-%m-%d %H:%M:%S";

    /// "14:03:27" style stamp for the session history.
    pub fn clock(at: &DateTime<Local>) -> String {
        at.format(Self::CLOCK_FORMAT).to_string()
    }

    pub fn standard(at: &DateTime<Local>) -> String {
        at.format(Self::STANDARD_TIME_FORMAT).to_string()
    }

    /// Milliseconds below a second, one decimal of seconds above.
    pub fn short_duration(elapsed: Duration) -> String {
        if elapsed.as_secs() == 0 {
            format!("{}ms", elapsed.as_millis())
        } else {
            format!("{:.1}s", elapsed.as_secs_f64())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_clock_format() {
        let at = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        assert_eq!(TimeUtils::clock(&at), "07:05:01");
        assert_eq!(TimeUtils::standard(&at), "2024-03-09 07:05:01");
    }

    #[test]
    fn test_short_duration() {
        assert_eq!(TimeUtils::short_duration(Duration::from_millis(250)), "250ms");
        assert_eq!(TimeUtils::short_duration(Duration::from_millis(2345)), "2.3s");
    }
}
