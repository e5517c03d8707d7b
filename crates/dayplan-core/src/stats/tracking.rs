//! Planned-vs-actual tracking totals.

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::TrackingItem;
use crate::registry::TrackingItemRegistry;
use crate::repository::ScheduleRepository;

/// Summed planned/actual minutes for one tracking item over a window.
#[derive(Debug, Clone, Serialize)]
pub struct TrackingTotal {
    pub item: TrackingItem,
    pub planned_minutes: i64,
    pub actual_minutes: i64,
}

impl TrackingTotal {
    pub fn planned_hours(&self) -> f64 {
        self.planned_minutes as f64 / 60.0
    }

    pub fn actual_hours(&self) -> f64 {
        self.actual_minutes as f64 / 60.0
    }

    pub fn has_data(&self) -> bool {
        self.planned_minutes > 0 || self.actual_minutes > 0
    }
}

/// Total for a single item over a window of dates.
///
/// Days without a value for the item contribute the zero default, so a
/// window with no entries at all totals `{planned: 0, actual: 0}`. Callers
/// pass every day of the window (a month window covers every day of the
/// month, whether or not data exists).
pub fn tracking_total(
    dates: &[NaiveDate],
    repo: &mut ScheduleRepository,
    item: &TrackingItem,
) -> TrackingTotal {
    let mut planned: i64 = 0;
    let mut actual: i64 = 0;
    for &date in dates {
        let value = repo.schedule(date).tracking_value(item.id);
        planned += i64::from(value.planned);
        actual += i64::from(value.actual);
    }
    TrackingTotal {
        item: item.clone(),
        planned_minutes: planned,
        actual_minutes: actual,
    }
}

/// Totals for every registered item, in registry order.
///
/// Zero rows are included (so "no entries" is visible as 0/0). Values keyed
/// by deleted items are hidden simply because this iterates the registry.
pub fn tracking_totals(
    dates: &[NaiveDate],
    repo: &mut ScheduleRepository,
    items: &TrackingItemRegistry,
) -> Vec<TrackingTotal> {
    items
        .all()
        .iter()
        .map(|item| tracking_total(dates, repo, item))
        .collect()
}
