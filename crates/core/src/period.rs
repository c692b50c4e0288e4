//! Calendar-month boundary computation.

use chrono::{DateTime, Datelike, LocalResult, NaiveDateTime, TimeZone};

/// Returns the first instant of the calendar month containing `now`.
///
/// Generic over the timezone so callers can anchor the boundary to server
/// time while tests pin it to fixed UTC instants. Falls back to `now` itself
/// in the pathological case where the timezone has no midnight on the first
/// of the month.
#[must_use]
pub fn month_start<Tz: TimeZone>(now: DateTime<Tz>) -> DateTime<Tz> {
    let tz = now.timezone();
    let first = now
        .date_naive()
        .with_day(1)
        .unwrap_or_else(|| now.date_naive());
    let midnight = first
        .and_hms_opt(0, 0, 0)
        .unwrap_or_else(NaiveDateTime::default);

    match tz.from_local_datetime(&midnight) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt,
        LocalResult::None => now,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rstest::rstest;

    use super::*;

    fn utc(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[rstest]
    #[case("2024-03-15T10:30:00Z", "2024-03-01T00:00:00Z")]
    #[case("2024-03-01T00:00:00Z", "2024-03-01T00:00:00Z")]
    #[case("2024-12-31T23:59:59Z", "2024-12-01T00:00:00Z")]
    #[case("2024-01-01T00:00:01Z", "2024-01-01T00:00:00Z")]
    fn test_month_start(#[case] now: &str, #[case] expected: &str) {
        assert_eq!(month_start(utc(now)), utc(expected));
    }
}
