//! Calendar window computation.
//!
//! Dates are day-granularity `NaiveDate` values; schedules are identified by
//! calendar day, never by instant, so no timezone conversion happens anywhere
//! in the core. Weeks start on Monday.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Minutes in one day. Time blocks live on the `[0, 1440)` axis.
pub const MINUTES_PER_DAY: i64 = 1440;

/// Storage identity string for a date, e.g. `2026-08-07`.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// The Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let days_from_monday = date.weekday().num_days_from_monday() as u64;
    date - Days::new(days_from_monday)
}

/// The 7 consecutive days of the week containing `date`, Monday first.
pub fn week_dates(date: NaiveDate) -> Vec<NaiveDate> {
    let start = week_start(date);
    (0..7).map(|offset| start + Days::new(offset)).collect()
}

/// Monday through Friday.
pub fn is_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("day 1 exists in every month")
}

/// Number of days in the given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .expect("valid year/month");
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .expect("valid year/month");
    (next - first).num_days() as u32
}

/// Every day of the month containing `date`, in order.
pub fn month_dates(date: NaiveDate) -> Vec<NaiveDate> {
    let first = first_of_month(date);
    let count = days_in_month(first.year(), first.month());
    (0..count as u64).map(|offset| first + Days::new(offset)).collect()
}

/// Month laid out on a Monday-first grid.
///
/// Leading `None` slots align day 1 to its weekday column; trailing `None`
/// slots pad the final week so the result length is a multiple of 7.
pub fn month_grid(date: NaiveDate) -> Vec<Option<NaiveDate>> {
    let first = first_of_month(date);
    let leading = first.weekday().num_days_from_monday() as usize;

    let mut cells: Vec<Option<NaiveDate>> = vec![None; leading];
    cells.extend(month_dates(date).into_iter().map(Some));
    while cells.len() % 7 != 0 {
        cells.push(None);
    }
    cells
}
