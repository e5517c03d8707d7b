//! Shared argument parsing and lookup helpers.

use chrono::NaiveDate;
use dayplan_core::{CategoryRegistry, CoreError, ScheduleCategory, TrackingItem, TrackingItemRegistry};
use uuid::Uuid;

/// Parse a `YYYY-MM-DD` date argument, defaulting to today.
pub fn parse_date(arg: Option<&str>) -> Result<NaiveDate, CoreError> {
    match arg {
        Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map_err(|e| CoreError::Custom(format!("invalid date '{text}': {e}"))),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Parse an `HH:mm` time argument.
pub fn parse_time(text: &str) -> Result<(u32, u32), CoreError> {
    dayplan_core::storage::config::parse_hhmm(text)
        .ok_or_else(|| CoreError::Custom(format!("invalid time '{text}', expected HH:mm")))
}

/// Resolve a category argument: a UUID or a (first-match) name.
pub fn resolve_category<'a>(
    categories: &'a CategoryRegistry,
    arg: &str,
) -> Result<&'a ScheduleCategory, CoreError> {
    if let Ok(id) = Uuid::parse_str(arg) {
        if let Some(category) = categories.get(id) {
            return Ok(category);
        }
    }
    categories
        .find_by_name(arg)
        .ok_or_else(|| CoreError::Custom(format!("unknown category '{arg}'")))
}

/// Resolve a tracking item argument: a UUID or a (first-match) name.
pub fn resolve_tracking_item<'a>(
    items: &'a TrackingItemRegistry,
    arg: &str,
) -> Result<&'a TrackingItem, CoreError> {
    if let Ok(id) = Uuid::parse_str(arg) {
        if let Some(item) = items.get(id) {
            return Ok(item);
        }
    }
    items
        .find_by_name(arg)
        .ok_or_else(|| CoreError::Custom(format!("unknown tracking item '{arg}'")))
}

/// `7h30m`-style rendering for minute totals.
pub fn format_minutes(minutes: i64) -> String {
    let sign = if minutes < 0 { "-" } else { "" };
    let minutes = minutes.abs();
    if minutes % 60 == 0 {
        format!("{sign}{}h", minutes / 60)
    } else if minutes < 60 {
        format!("{sign}{minutes}m")
    } else {
        format!("{sign}{}h{:02}m", minutes / 60, minutes % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso_and_rejects_noise() {
        assert_eq!(
            parse_date(Some("2026-08-07")).unwrap(),
            NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
        );
        assert!(parse_date(Some("08/07/2026")).is_err());
    }

    #[test]
    fn minutes_formatting() {
        assert_eq!(format_minutes(0), "0h");
        assert_eq!(format_minutes(45), "45m");
        assert_eq!(format_minutes(60), "1h");
        assert_eq!(format_minutes(510), "8h30m");
        assert_eq!(format_minutes(-90), "-1h30m");
    }
}
