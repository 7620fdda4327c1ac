//! Calendar parsing for shift legs.
//!
//! Service dates and times-of-day are stored as strings and parsed here at
//! query time. Parse failure is an expected condition: the matcher maps it to
//! "not eligible" rather than an error, so every function in this module
//! returns `Option` instead of `Result`.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Service date wire format.
pub const SERVICE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Accepted time-of-day wire formats, tried in order.
const TIME_OF_DAY_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

/// Days beyond the query date that a service date may still be offered.
pub const ELIGIBILITY_WINDOW_DAYS: i64 = 2;

/// Parse a service date ("2024-01-02").
pub fn parse_service_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), SERVICE_DATE_FORMAT).ok()
}

/// Parse a time-of-day ("08:00" or "08:00:30").
pub fn parse_time_of_day(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    TIME_OF_DAY_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(raw, fmt).ok())
}

/// Whether `service_date` falls within the inclusive rolling window
/// `[query_date, query_date + ELIGIBILITY_WINDOW_DAYS]`.
pub fn within_service_window(service_date: NaiveDate, query_date: NaiveDate) -> bool {
    service_date >= query_date
        && service_date <= query_date + Duration::days(ELIGIBILITY_WINDOW_DAYS)
}

/// Combine a parsed service date and time-of-day into one instant.
pub fn instant(date: NaiveDate, time: NaiveTime) -> NaiveDateTime {
    date.and_time(time)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        parse_service_date(s).unwrap()
    }

    #[test]
    fn test_parse_service_date() {
        assert_eq!(
            parse_service_date("2024-01-02"),
            NaiveDate::from_ymd_opt(2024, 1, 2)
        );
        assert!(parse_service_date("02/01/2024").is_none());
        assert!(parse_service_date("").is_none());
    }

    #[test]
    fn test_parse_time_of_day_both_formats() {
        assert_eq!(
            parse_time_of_day("08:00"),
            NaiveTime::from_hms_opt(8, 0, 0)
        );
        assert_eq!(
            parse_time_of_day("08:00:30"),
            NaiveTime::from_hms_opt(8, 0, 30)
        );
        assert!(parse_time_of_day("8 o'clock").is_none());
    }

    #[test]
    fn test_window_is_inclusive_on_both_ends() {
        let query = date("2024-01-01");
        assert!(within_service_window(date("2024-01-01"), query));
        assert!(within_service_window(date("2024-01-03"), query));
        assert!(!within_service_window(date("2024-01-04"), query));
        assert!(!within_service_window(date("2023-12-31"), query));
    }

    #[test]
    fn test_window_crosses_month_boundary() {
        let query = date("2024-01-31");
        assert!(within_service_window(date("2024-02-02"), query));
        assert!(!within_service_window(date("2024-02-03"), query));
    }
}
