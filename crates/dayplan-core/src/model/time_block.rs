//! Titled, categorized intervals within a day.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A titled interval within a day, tagged with a category.
///
/// Start/end are stored as hour/minute pairs; the UI constrains minutes to
/// quarter hours but the type does not. `end_hour` may be 24 (midnight).
/// Nothing here rejects a non-positive duration -- the repository does that
/// at the mutation boundary, so `duration_minutes` is signed.
///
/// Blocks of one day may overlap. All aggregation is block-additive and
/// double-counts overlapping time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeBlock {
    pub id: Uuid,
    pub category_id: Uuid,
    pub start_hour: u32,
    pub start_minute: u32,
    pub end_hour: u32,
    pub end_minute: u32,
    #[serde(default)]
    pub title: String,
}

impl TimeBlock {
    pub fn new(
        category_id: Uuid,
        start_hour: u32,
        start_minute: u32,
        end_hour: u32,
        end_minute: u32,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            category_id,
            start_hour,
            start_minute,
            end_hour,
            end_minute,
            title: title.into(),
        }
    }

    /// A copy of this block with a fresh identity.
    ///
    /// Used by schedule paste so edits to the pasted block never alias the
    /// source block.
    pub fn duplicated(&self) -> Self {
        Self {
            id: Uuid::new_v4(),
            ..self.clone()
        }
    }

    pub fn start_total_minutes(&self) -> i64 {
        i64::from(self.start_hour) * 60 + i64::from(self.start_minute)
    }

    pub fn end_total_minutes(&self) -> i64 {
        i64::from(self.end_hour) * 60 + i64::from(self.end_minute)
    }

    pub fn duration_minutes(&self) -> i64 {
        self.end_total_minutes() - self.start_total_minutes()
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_minutes() as f64 / 60.0
    }

    pub fn start_time_string(&self) -> String {
        format!("{}:{:02}", self.start_hour, self.start_minute)
    }

    pub fn end_time_string(&self) -> String {
        format!("{}:{:02}", self.end_hour, self.end_minute)
    }

    pub fn time_range_string(&self) -> String {
        format!("{} - {}", self.start_time_string(), self.end_time_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_minutes() {
        let block = TimeBlock::new(Uuid::new_v4(), 9, 0, 17, 30, "Work");
        assert_eq!(block.start_total_minutes(), 540);
        assert_eq!(block.end_total_minutes(), 1050);
        assert_eq!(block.duration_minutes(), 510);
        assert_eq!(block.duration_hours(), 8.5);
    }

    #[test]
    fn negative_duration_is_representable() {
        // The type accepts it; the repository rejects it.
        let block = TimeBlock::new(Uuid::new_v4(), 10, 0, 9, 0, "");
        assert_eq!(block.duration_minutes(), -60);
    }

    #[test]
    fn duplicated_keeps_fields_but_not_identity() {
        let block = TimeBlock::new(Uuid::new_v4(), 8, 15, 9, 45, "Commute");
        let copy = block.duplicated();
        assert_ne!(copy.id, block.id);
        assert_eq!(copy.category_id, block.category_id);
        assert_eq!(copy.start_total_minutes(), block.start_total_minutes());
        assert_eq!(copy.end_total_minutes(), block.end_total_minutes());
        assert_eq!(copy.title, block.title);
    }

    #[test]
    fn display_strings() {
        let block = TimeBlock::new(Uuid::new_v4(), 9, 5, 17, 30, "");
        assert_eq!(block.start_time_string(), "9:05");
        assert_eq!(block.time_range_string(), "9:05 - 17:30");
    }
}
