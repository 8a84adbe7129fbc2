//! Time representation for playback positions and durations.
//! All timestamps are nanoseconds (i64) measured from the stream origin.

/// Time in nanoseconds.
pub type Time = i64;

/// Time constants for conversions
pub mod constants {
    use super::Time;

    pub const NANOS_PER_SECOND: Time = 1_000_000_000;
    pub const NANOS_PER_MILLI: Time = 1_000_000;
}

/// Convert seconds (f64) to nanoseconds (i64)
#[inline]
pub fn from_seconds(seconds: f64) -> Time {
    (seconds * constants::NANOS_PER_SECOND as f64) as Time
}

/// Convert nanoseconds (i64) to seconds (f64)
#[inline]
pub fn to_seconds(nanos: Time) -> f64 {
    nanos as f64 / constants::NANOS_PER_SECOND as f64
}

/// Convert milliseconds to nanoseconds
#[inline]
pub fn from_millis(millis: i64) -> Time {
    millis * constants::NANOS_PER_MILLI
}

/// Convert nanoseconds to milliseconds
#[inline]
pub fn to_millis(nanos: Time) -> i64 {
    nanos / constants::NANOS_PER_MILLI
}

/// Time zero constant
pub const ZERO: Time = 0;

/// Format time as HH:MM:SS.mmm for logging
pub fn format_time(nanos: Time) -> String {
    let total_seconds = to_seconds(nanos);
    let hours = (total_seconds / 3600.0).floor() as i64;
    let minutes = ((total_seconds % 3600.0) / 60.0).floor() as i64;
    let seconds = (total_seconds % 60.0).floor() as i64;
    let millis = to_millis(nanos) % 1000;

    format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, seconds, millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_conversion() {
        let time = from_seconds(1.5);
        assert_eq!(time, 1_500_000_000);
        assert!((to_seconds(time) - 1.5).abs() < 0.000001);
    }

    #[test]
    fn test_millis_conversion() {
        let time = from_millis(250);
        assert_eq!(time, 250_000_000);
        assert_eq!(to_millis(time), 250);
    }

    #[test]
    fn test_zero() {
        assert_eq!(ZERO, 0);
        assert_eq!(to_seconds(ZERO), 0.0);
    }

    #[test]
    fn test_format_time() {
        let time = from_seconds(3661.5); // 1 hour, 1 minute, 1.5 seconds
        assert_eq!(format_time(time), "01:01:01.500");
    }

    #[test]
    fn test_negative_offsets_allowed() {
        // Clock offsets may legitimately go negative.
        let diff = from_seconds(1.0) - from_seconds(2.5);
        assert_eq!(diff, -1_500_000_000);
    }
}
