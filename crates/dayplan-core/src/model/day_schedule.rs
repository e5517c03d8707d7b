//! The aggregate root for one calendar date.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calendar::{self, MINUTES_PER_DAY};
use crate::model::tracking::DEFAULT_OVERTIME_ID;
use crate::model::{TimeBlock, TrackingValue};

/// Number of todo slots a schedule always exposes.
const TODO_SLOTS: usize = 3;

/// Everything recorded against one calendar date: time blocks, todos,
/// tracking values, and a free-text day event.
///
/// One `DaySchedule` exists per distinct calendar day; identity for storage
/// is the date, not the `id`. Fetching an unseen date synthesizes an empty
/// default that is only persisted on first mutation.
///
/// Decoding runs the legacy-overtime migration (see [`DayScheduleRecord`]),
/// so any record read from storage is already on the current schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "DayScheduleRecord")]
pub struct DaySchedule {
    pub id: Uuid,
    pub date: NaiveDate,
    pub time_blocks: Vec<TimeBlock>,
    pub todos: Vec<String>,
    pub todo_completed: Vec<bool>,
    pub tracking_values: HashMap<Uuid, TrackingValue>,
    pub day_event: String,
}

impl DaySchedule {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            time_blocks: Vec::new(),
            todos: vec![String::new(); TODO_SLOTS],
            todo_completed: vec![false; TODO_SLOTS],
            tracking_values: HashMap::new(),
            day_event: String::new(),
        }
    }

    /// Blocks sorted ascending by start time.
    pub fn sorted_blocks(&self) -> Vec<TimeBlock> {
        let mut blocks = self.time_blocks.clone();
        blocks.sort_by_key(|b| b.start_total_minutes());
        blocks
    }

    /// Sum of all block durations.
    ///
    /// Block-additive: overlapping blocks are double-counted, so this can
    /// exceed 1440 on an over-booked day.
    pub fn total_scheduled_minutes(&self) -> i64 {
        self.time_blocks.iter().map(TimeBlock::duration_minutes).sum()
    }

    /// Minutes of the day not claimed by any block, clamped at zero.
    pub fn free_time_minutes(&self) -> i64 {
        (MINUTES_PER_DAY - self.total_scheduled_minutes()).max(0)
    }

    pub fn free_time_hours(&self) -> f64 {
        self.free_time_minutes() as f64 / 60.0
    }

    /// Todo text at `index`, empty string past the end.
    pub fn todo_text(&self, index: usize) -> &str {
        self.todos.get(index).map(String::as_str).unwrap_or("")
    }

    /// Completion flag at `index`, `false` past the end.
    pub fn todo_done(&self, index: usize) -> bool {
        self.todo_completed.get(index).copied().unwrap_or(false)
    }

    /// Set a todo slot, padding the lists out to `index` first.
    pub fn set_todo(&mut self, index: usize, text: impl Into<String>) {
        self.pad_todos(index);
        self.todos[index] = text.into();
    }

    /// Flip a completion flag, padding the lists out to `index` first.
    pub fn toggle_todo(&mut self, index: usize) {
        self.pad_todos(index);
        self.todo_completed[index] = !self.todo_completed[index];
    }

    fn pad_todos(&mut self, index: usize) {
        let len = (index + 1).max(TODO_SLOTS);
        while self.todos.len() < len {
            self.todos.push(String::new());
        }
        while self.todo_completed.len() < len {
            self.todo_completed.push(false);
        }
    }

    /// Tracking value for an item, default (0/0) when absent.
    pub fn tracking_value(&self, item_id: Uuid) -> TrackingValue {
        self.tracking_values.get(&item_id).copied().unwrap_or_default()
    }

    /// Replace the tracking value for an item wholesale.
    pub fn set_tracking_value(&mut self, item_id: Uuid, value: TrackingValue) {
        self.tracking_values.insert(item_id, value);
    }

    pub fn is_weekday(&self) -> bool {
        calendar::is_weekday(self.date)
    }

    /// Whether anything has been recorded against this date.
    pub fn has_data(&self) -> bool {
        !self.time_blocks.is_empty()
            || self.tracking_values.values().any(TrackingValue::has_data)
            || self.todos.iter().any(|t| !t.is_empty())
            || !self.day_event.is_empty()
    }
}

/// Wire form of a [`DaySchedule`].
///
/// Carries the current fields plus the legacy scalar overtime fields older
/// records stored before tracking values existed. Conversion is the pure
/// migration step: when no tracking entry exists under the reserved overtime
/// id and the legacy fields hold data, exactly one entry is synthesized.
/// Encoding always writes the current schema, never the legacy fields, which
/// makes the migration idempotent across decode/encode cycles.
#[derive(Deserialize)]
struct DayScheduleRecord {
    id: Uuid,
    date: NaiveDate,
    #[serde(default)]
    time_blocks: Vec<TimeBlock>,
    #[serde(default)]
    todos: Vec<String>,
    #[serde(default)]
    todo_completed: Vec<bool>,
    #[serde(default)]
    tracking_values: HashMap<Uuid, TrackingValue>,
    #[serde(default)]
    day_event: String,
    #[serde(default)]
    planned_overtime_minutes: u32,
    #[serde(default)]
    actual_overtime_minutes: u32,
}

impl From<DayScheduleRecord> for DaySchedule {
    fn from(record: DayScheduleRecord) -> Self {
        let mut tracking_values = record.tracking_values;
        let legacy = TrackingValue::new(
            record.planned_overtime_minutes,
            record.actual_overtime_minutes,
        );
        if legacy.has_data() && !tracking_values.contains_key(&DEFAULT_OVERTIME_ID) {
            tracking_values.insert(DEFAULT_OVERTIME_ID, legacy);
        }

        let mut schedule = Self {
            id: record.id,
            date: record.date,
            time_blocks: record.time_blocks,
            todos: record.todos,
            todo_completed: record.todo_completed,
            tracking_values,
            day_event: record.day_event,
        };
        schedule.pad_todos(0);
        schedule
    }
}
