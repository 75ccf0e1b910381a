//! Weekday rotation of project order.
//!
//! Monday starts with p1, Tuesday with p2, Wednesday with p3, and the cycle
//! repeats from Thursday. Weekends follow the same cycle backwards from
//! Monday, so Sunday starts with p3.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use super::block::ProjectId;

/// Index into `[p1, p2, p3]` of the project that opens the day.
pub fn rotation_start(weekday: Weekday) -> usize {
    // 0=Sunday numbering; Monday (1) maps to 0.
    ((weekday.num_days_from_sunday() + 2) % 3) as usize
}

/// Visiting order of the projects for a weekday.
pub fn rotation_order(weekday: Weekday) -> [ProjectId; 3] {
    let start = rotation_start(weekday);
    [0, 1, 2].map(|offset| ProjectId::from_index(start + offset))
}

/// Shift a weekend date to the following Monday. Weekdays are returned as is.
pub fn next_workday(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ProjectId::{P1, P2, P3};

    #[test]
    fn weekday_rotation() {
        assert_eq!(rotation_order(Weekday::Mon), [P1, P2, P3]);
        assert_eq!(rotation_order(Weekday::Tue), [P2, P3, P1]);
        assert_eq!(rotation_order(Weekday::Wed), [P3, P1, P2]);
        assert_eq!(rotation_order(Weekday::Thu), [P1, P2, P3]);
        assert_eq!(rotation_order(Weekday::Fri), [P2, P3, P1]);
        assert_eq!(rotation_order(Weekday::Sat), [P3, P1, P2]);
        assert_eq!(rotation_order(Weekday::Sun), [P3, P1, P2]);
    }

    #[test]
    fn weekend_shifts_to_monday() {
        let saturday = NaiveDate::from_ymd_opt(2024, 6, 8).unwrap();
        let sunday = NaiveDate::from_ymd_opt(2024, 6, 9).unwrap();
        let monday = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let friday = NaiveDate::from_ymd_opt(2024, 6, 7).unwrap();

        assert_eq!(next_workday(saturday), monday);
        assert_eq!(next_workday(sunday), monday);
        assert_eq!(next_workday(monday), monday);
        assert_eq!(next_workday(friday), friday);
    }
}
