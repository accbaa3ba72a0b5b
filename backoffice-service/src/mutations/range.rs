//! Civil-date windows in the back office's fixed UTC+7 calendar.

use backoffice_core::error::AppError;
use chrono::{DateTime, NaiveDate, Utc};

/// Offset every date filter in the system is interpreted in.
pub const CIVIL_OFFSET: &str = "+07:00";

/// Inclusive calendar-date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub finish: NaiveDate,
}

/// Inclusive instant bounds derived from a [`DateRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickWindow {
    pub lower: DateTime<Utc>,
    pub upper: DateTime<Utc>,
}

impl DateRange {
    pub fn new(start: NaiveDate, finish: NaiveDate) -> Self {
        Self { start, finish }
    }

    /// Instant bounds for the range:
    /// `[start "T00:00:00.000+07:00", finish "T23:59:59.999+07:00"]`.
    ///
    /// The bounds are built from exactly those strings; this is the contract
    /// that defines what "a day" means for every date filter in the system.
    pub fn window(&self) -> Result<ClickWindow, AppError> {
        let lower = parse_bound(&format!("{}T00:00:00.000{}", self.start, CIVIL_OFFSET))?;
        let upper = parse_bound(&format!("{}T23:59:59.999{}", self.finish, CIVIL_OFFSET))?;
        Ok(ClickWindow { lower, upper })
    }
}

fn parse_bound(s: &str) -> Result<DateTime<Utc>, AppError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AppError::BadRequest(anyhow::anyhow!("Invalid date bound '{}': {}", s, e)))
}

impl ClickWindow {
    /// Both bounds are inclusive.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.lower && instant <= self.upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn range(start: &str, finish: &str) -> DateRange {
        DateRange::new(start.parse().unwrap(), finish.parse().unwrap())
    }

    #[test]
    fn window_bounds_are_utc_plus_seven_day_edges() {
        let window = range("2024-03-05", "2024-03-06").window().unwrap();
        // 2024-03-05T00:00:00.000+07:00 == 2024-03-04T17:00:00Z
        assert_eq!(window.lower, Utc.with_ymd_and_hms(2024, 3, 4, 17, 0, 0).unwrap());
        // 2024-03-06T23:59:59.999+07:00 == 2024-03-06T16:59:59.999Z
        assert_eq!(
            window.upper,
            Utc.with_ymd_and_hms(2024, 3, 6, 16, 59, 59).unwrap()
                + chrono::Duration::milliseconds(999)
        );
    }

    #[test]
    fn window_contains_exact_edges() {
        let window = range("2024-03-05", "2024-03-05").window().unwrap();
        assert!(window.contains(window.lower));
        assert!(window.contains(window.upper));
        assert!(!window.contains(window.lower - chrono::Duration::milliseconds(1)));
        assert!(!window.contains(window.upper + chrono::Duration::milliseconds(1)));
    }

    #[test]
    fn single_day_window_spans_the_civil_day() {
        let window = range("2024-01-01", "2024-01-01").window().unwrap();
        let in_day: DateTime<Utc> = "2024-01-01T04:30:00Z".parse().unwrap();
        let before: DateTime<Utc> = "2023-12-31T16:59:59.999Z".parse().unwrap();
        assert!(window.contains(in_day));
        assert!(!window.contains(before));
    }
}
