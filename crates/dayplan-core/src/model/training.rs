//! Per-day training log.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One day's training notes and running distance.
///
/// Same per-date identity convention as `DaySchedule`, but stored under its
/// own key, never nested inside the schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingLog {
    pub id: Uuid,
    pub date: NaiveDate,
    #[serde(default)]
    pub morning_note: String,
    #[serde(default)]
    pub afternoon_note: String,
    #[serde(default)]
    pub running_distance_km: f64,
}

impl TrainingLog {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            morning_note: String::new(),
            afternoon_note: String::new(),
            running_distance_km: 0.0,
        }
    }

    pub fn has_content(&self) -> bool {
        !self.morning_note.is_empty()
            || !self.afternoon_note.is_empty()
            || self.running_distance_km > 0.0
    }
}
