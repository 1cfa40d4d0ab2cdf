//! Human-readable durations.

use std::time::Duration;

/// Format a duration as `500ms`, `5.3s`, or `1.5m`.
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 1.0 {
        format!("{}ms", d.as_millis())
    } else if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        format!("{:.1}m", secs / 60.0)
    }
}

/// Format a fractional millisecond measurement such as an execution time.
///
/// Sub-second values keep three decimals; longer ones fall back to
/// [`format_duration`].
pub fn format_millis(ms: f64) -> String {
    if ms < 1000.0 {
        format!("{:.3}ms", ms.max(0.0))
    } else {
        format_duration(Duration::from_secs_f64(ms / 1000.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_duration_milliseconds() {
        assert_eq!(format_duration(Duration::from_millis(500)), "500ms");
        assert_eq!(format_duration(Duration::ZERO), "0ms");
    }

    #[test]
    fn format_duration_seconds() {
        assert_eq!(format_duration(Duration::from_secs_f64(5.3)), "5.3s");
    }

    #[test]
    fn format_duration_minutes() {
        assert_eq!(format_duration(Duration::from_secs(90)), "1.5m");
    }

    #[test]
    fn format_millis_keeps_precision() {
        assert_eq!(format_millis(0.0421), "0.042ms");
        assert_eq!(format_millis(12.5), "12.500ms");
    }

    #[test]
    fn format_millis_long_runs() {
        assert_eq!(format_millis(2500.0), "2.5s");
    }
}
