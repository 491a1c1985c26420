//! Data Transfer Objects
//!
//! Documents written by the refresh use cases and read by the dashboard.
//! Field names are camelCase on the wire.

mod benchmark_document;
mod portfolio_document;

pub use benchmark_document::BenchmarkDocument;
pub use portfolio_document::PortfolioDocument;

use chrono::{NaiveDateTime, Timelike};

/// Format a refresh timestamp as ISO-8601 local time.
///
/// Microseconds are included only when non-zero.
#[must_use]
pub fn format_last_updated(at: NaiveDateTime) -> String {
    if at.nanosecond() / 1_000 == 0 {
        at.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        at.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn last_updated_has_microseconds() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_micro_opt(14, 7, 9, 42)
            .unwrap();
        assert_eq!(format_last_updated(at), "2024-03-05T14:07:09.000042");
    }

    #[test]
    fn last_updated_omits_zero_fraction() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(14, 7, 9)
            .unwrap();
        assert_eq!(format_last_updated(at), "2024-03-05T14:07:09");

        let sub_micro = at + chrono::Duration::nanoseconds(999);
        assert_eq!(format_last_updated(sub_micro), "2024-03-05T14:07:09");
    }
}
