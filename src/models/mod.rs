use chrono::{DateTime, Utc};

/// # Service Health Status
///
/// Liveness payload returned by `GET /health`. See [`HealthStatus`].
///
/// [`HealthStatus`]: crate::models::health::HealthStatus
pub mod health;

/// Greeting payload returned by `GET /hello`
pub mod greeting;

pub mod root;

pub use greeting::Greeting;
pub use health::HealthStatus;
pub use root::RootInfo;

/// Current UTC time in the wire format shared by every timestamped response.
pub fn utc_timestamp() -> String {
    format_timestamp(Utc::now())
}

/// Renders `at` as ISO 8601 with microsecond precision and a literal `Z`,
/// e.g. `2024-01-01T00:00:00.000000Z`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp_on_exact_second() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(format_timestamp(at), "2024-01-01T00:00:00.000000Z");
    }

    #[test]
    fn test_format_timestamp_keeps_microseconds() {
        let at = Utc.with_ymd_and_hms(2025, 6, 30, 23, 59, 58).unwrap()
            + chrono::Duration::microseconds(123_456);
        assert_eq!(format_timestamp(at), "2025-06-30T23:59:58.123456Z");
    }

    #[test]
    fn test_utc_timestamp_is_rfc3339() {
        let timestamp = utc_timestamp();

        assert!(timestamp.ends_with('Z'));
        assert_eq!(timestamp.len(), "2024-01-01T00:00:00.000000Z".len());
        assert!(
            DateTime::parse_from_rfc3339(&timestamp).is_ok(),
            "Timestamp should be valid RFC3339 format"
        );
    }
}
