//! The schedule repository: calendar date -> `DaySchedule`, cached in memory
//! and written through to the kv store.
//!
//! The repository is the only write path for schedule and training-log
//! state. Aggregation reads through it and never mutates. All operations are
//! synchronous; there is no concurrent mutation, so the cache is a plain
//! map exclusively owned here.

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::warn;
use uuid::Uuid;

use crate::calendar::{self, MINUTES_PER_DAY};
use crate::error::{StorageError, ValidationError};
use crate::model::{DaySchedule, TimeBlock, TrackingValue, TrainingLog};
use crate::registry::CategoryRegistry;
use crate::storage::config::{parse_hhmm, Config};
use crate::storage::Database;

fn schedule_key(date: NaiveDate) -> String {
    format!("schedule:{}", calendar::date_key(date))
}

fn training_key(date: NaiveDate) -> String {
    format!("training:{}", calendar::date_key(date))
}

/// Maps calendar dates to day schedules with a cache-plus-durable-store
/// pattern, and owns the copy/paste buffer.
pub struct ScheduleRepository {
    db: Database,
    cache: HashMap<NaiveDate, DaySchedule>,
    copied: Option<DaySchedule>,
}

impl ScheduleRepository {
    /// Open the repository over the default database location.
    pub fn open() -> Result<Self, StorageError> {
        Ok(Self::with_database(Database::open()?))
    }

    /// Open the repository over an in-memory database (for tests).
    pub fn open_memory() -> Result<Self, StorageError> {
        Ok(Self::with_database(Database::open_memory()?))
    }

    /// Build the repository over an already-open database.
    pub fn with_database(db: Database) -> Self {
        Self {
            db,
            cache: HashMap::new(),
            copied: None,
        }
    }

    /// The underlying database, for collaborators that persist their own
    /// records (registries, config-independent tools).
    pub fn db(&self) -> &Database {
        &self.db
    }

    // === Schedules ===

    /// The schedule for a date.
    ///
    /// Returns the cached entry if present, else reads the store. A date
    /// with no record yields a fresh empty schedule that is neither cached
    /// nor persisted until first mutation. A record that fails to parse is
    /// dropped with a warning and treated as absent.
    pub fn schedule(&mut self, date: NaiveDate) -> DaySchedule {
        if let Some(cached) = self.cache.get(&date) {
            return cached.clone();
        }
        if let Some(stored) = self.read_schedule(date) {
            self.cache.insert(date, stored.clone());
            return stored;
        }
        DaySchedule::new(date)
    }

    fn read_schedule(&self, date: NaiveDate) -> Option<DaySchedule> {
        let key = schedule_key(date);
        let json = match self.db.kv_get(&key) {
            Ok(json) => json?,
            Err(err) => {
                warn!(%key, %err, "schedule read failed");
                return None;
            }
        };
        match serde_json::from_str(&json) {
            Ok(schedule) => Some(schedule),
            Err(err) => {
                warn!(%key, %err, "discarding unreadable schedule record");
                None
            }
        }
    }

    /// Overwrite the cache entry for the schedule's date and write through
    /// to durable storage.
    pub fn update_schedule(&mut self, schedule: DaySchedule) -> Result<(), StorageError> {
        let key = schedule_key(schedule.date);
        let json = serde_json::to_string(&schedule).map_err(|e| StorageError::EncodeFailed {
            key: key.clone(),
            message: e.to_string(),
        })?;
        self.db.kv_set(&key, &json)?;
        self.cache.insert(schedule.date, schedule);
        Ok(())
    }

    /// Populate the cache for each date that has a stored record, skipping
    /// unreadable entries. Used before rendering a month so lookups don't
    /// hit the store once per cell.
    pub fn prefetch_range(&mut self, dates: &[NaiveDate]) {
        for &date in dates {
            if self.cache.contains_key(&date) {
                continue;
            }
            if let Some(schedule) = self.read_schedule(date) {
                self.cache.insert(date, schedule);
            }
        }
    }

    /// Prefetch every day of the month containing `date`.
    pub fn prefetch_month(&mut self, date: NaiveDate) {
        self.prefetch_range(&calendar::month_dates(date));
    }

    // === Time block mutation ===

    fn validate_block(block: &TimeBlock) -> Result<(), ValidationError> {
        if block.duration_minutes() <= 0 {
            return Err(ValidationError::InvalidTimeRange {
                start_minutes: block.start_total_minutes(),
                end_minutes: block.end_total_minutes(),
            });
        }
        if block.end_total_minutes() > MINUTES_PER_DAY {
            return Err(ValidationError::InvalidValue {
                field: "end".to_string(),
                message: format!("{} is past the end of the day", block.end_time_string()),
            });
        }
        Ok(())
    }

    /// Add a block to a date's schedule.
    ///
    /// Rejects non-positive durations and ends past 24:00; overlap with
    /// existing blocks is allowed.
    pub fn add_time_block(
        &mut self,
        date: NaiveDate,
        block: TimeBlock,
    ) -> Result<(), crate::error::CoreError> {
        Self::validate_block(&block)?;
        let mut schedule = self.schedule(date);
        schedule.time_blocks.push(block);
        self.update_schedule(schedule)?;
        Ok(())
    }

    /// Remove a block by id. Returns whether a block was removed.
    pub fn remove_time_block(
        &mut self,
        date: NaiveDate,
        block_id: Uuid,
    ) -> Result<bool, StorageError> {
        let mut schedule = self.schedule(date);
        let before = schedule.time_blocks.len();
        schedule.time_blocks.retain(|b| b.id != block_id);
        if schedule.time_blocks.len() == before {
            return Ok(false);
        }
        self.update_schedule(schedule)?;
        Ok(true)
    }

    /// Replace a block (matched by id). Returns `false` when the id is
    /// unknown.
    pub fn update_time_block(
        &mut self,
        date: NaiveDate,
        block: TimeBlock,
    ) -> Result<bool, crate::error::CoreError> {
        Self::validate_block(&block)?;
        let mut schedule = self.schedule(date);
        match schedule.time_blocks.iter_mut().find(|b| b.id == block.id) {
            Some(slot) => *slot = block,
            None => return Ok(false),
        }
        self.update_schedule(schedule)?;
        Ok(true)
    }

    /// Add the configured default workday block (e.g. 09:00-17:30 "Work").
    ///
    /// No-op returning `false` when no category carries the configured work
    /// label.
    pub fn add_default_work_block(
        &mut self,
        date: NaiveDate,
        categories: &CategoryRegistry,
        config: &Config,
    ) -> Result<bool, crate::error::CoreError> {
        let Some(category) = categories.find_by_name(&config.work_label) else {
            return Ok(false);
        };
        let (start_hour, start_minute) =
            parse_hhmm(&config.default_work_start).ok_or_else(|| ValidationError::InvalidValue {
                field: "default_work_start".to_string(),
                message: config.default_work_start.clone(),
            })?;
        let (end_hour, end_minute) =
            parse_hhmm(&config.default_work_end).ok_or_else(|| ValidationError::InvalidValue {
                field: "default_work_end".to_string(),
                message: config.default_work_end.clone(),
            })?;
        let block = TimeBlock::new(
            category.id,
            start_hour,
            start_minute,
            end_hour,
            end_minute,
            config.work_label.clone(),
        );
        self.add_time_block(date, block)?;
        Ok(true)
    }

    // === Todos, tracking, day event ===

    /// Set a todo slot by index, padding the slot lists as needed.
    pub fn set_todo(
        &mut self,
        date: NaiveDate,
        index: usize,
        text: impl Into<String>,
    ) -> Result<(), StorageError> {
        let mut schedule = self.schedule(date);
        schedule.set_todo(index, text);
        self.update_schedule(schedule)
    }

    /// Toggle a todo completion flag by index.
    pub fn toggle_todo(&mut self, date: NaiveDate, index: usize) -> Result<(), StorageError> {
        let mut schedule = self.schedule(date);
        schedule.toggle_todo(index);
        self.update_schedule(schedule)
    }

    /// Replace the tracking value for an item on a date.
    pub fn set_tracking_value(
        &mut self,
        date: NaiveDate,
        item_id: Uuid,
        value: TrackingValue,
    ) -> Result<(), StorageError> {
        let mut schedule = self.schedule(date);
        schedule.set_tracking_value(item_id, value);
        self.update_schedule(schedule)
    }

    /// Set the free-text day event.
    pub fn set_day_event(
        &mut self,
        date: NaiveDate,
        event: impl Into<String>,
    ) -> Result<(), StorageError> {
        let mut schedule = self.schedule(date);
        schedule.day_event = event.into();
        self.update_schedule(schedule)
    }

    // === Copy & paste ===

    /// Snapshot a date's schedule into the transient copy buffer.
    pub fn copy_schedule(&mut self, date: NaiveDate) {
        self.copied = Some(self.schedule(date));
    }

    /// The current copy buffer, if any.
    pub fn copied_schedule(&self) -> Option<&DaySchedule> {
        self.copied.as_ref()
    }

    /// Paste the copy buffer into a date.
    ///
    /// Synthesizes a new schedule: blocks keep category/time/title but get
    /// fresh identities, todos and completion flags are copied verbatim,
    /// tracking values and the day event start fresh. Returns `false` when
    /// nothing has been copied.
    pub fn paste_schedule(&mut self, date: NaiveDate) -> Result<bool, StorageError> {
        let Some(copied) = self.copied.clone() else {
            return Ok(false);
        };
        let mut schedule = DaySchedule::new(date);
        schedule.time_blocks = copied.time_blocks.iter().map(TimeBlock::duplicated).collect();
        schedule.todos = copied.todos.clone();
        schedule.todo_completed = copied.todo_completed.clone();
        self.update_schedule(schedule)?;
        Ok(true)
    }

    /// Paste the copy buffer independently into each target date.
    ///
    /// The buffer is a snapshot, so earlier pastes never leak into later
    /// targets.
    pub fn paste_schedule_into(&mut self, dates: &[NaiveDate]) -> Result<bool, StorageError> {
        let mut pasted = false;
        for &date in dates {
            pasted |= self.paste_schedule(date)?;
        }
        Ok(pasted)
    }

    // === Training logs ===

    /// The training log for a date; unseen dates yield an empty default,
    /// corrupt records fall back to it with a warning.
    pub fn training_log(&self, date: NaiveDate) -> TrainingLog {
        let key = training_key(date);
        let json = match self.db.kv_get(&key) {
            Ok(Some(json)) => json,
            Ok(None) => return TrainingLog::new(date),
            Err(err) => {
                warn!(%key, %err, "training log read failed");
                return TrainingLog::new(date);
            }
        };
        match serde_json::from_str(&json) {
            Ok(log) => log,
            Err(err) => {
                warn!(%key, %err, "discarding unreadable training log record");
                TrainingLog::new(date)
            }
        }
    }

    /// Write a training log through to durable storage.
    pub fn update_training_log(&self, log: &TrainingLog) -> Result<(), StorageError> {
        let key = training_key(log.date);
        let json = serde_json::to_string(log).map_err(|e| StorageError::EncodeFailed {
            key: key.clone(),
            message: e.to_string(),
        })?;
        self.db.kv_set(&key, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::model::DEFAULT_OVERTIME_ID;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, d).unwrap()
    }

    fn repo() -> ScheduleRepository {
        ScheduleRepository::open_memory().unwrap()
    }

    fn block(category: Uuid, start_h: u32, end_h: u32) -> TimeBlock {
        TimeBlock::new(category, start_h, 0, end_h, 0, "")
    }

    #[test]
    fn unseen_date_yields_default_without_persisting() {
        let mut repo = repo();
        let schedule = repo.schedule(date(7));
        assert!(schedule.time_blocks.is_empty());
        assert!(repo.db().kv_get("schedule:2026-08-07").unwrap().is_none());
        // Two fetches of an unseen date are independent defaults.
        let again = repo.schedule(date(7));
        assert_ne!(again.id, schedule.id);
    }

    #[test]
    fn update_writes_through_and_caches() {
        let mut repo = repo();
        let mut schedule = repo.schedule(date(7));
        schedule.day_event = "release day".to_string();
        repo.update_schedule(schedule.clone()).unwrap();

        assert!(repo.db().kv_get("schedule:2026-08-07").unwrap().is_some());
        assert_eq!(repo.schedule(date(7)).id, schedule.id);
        assert_eq!(repo.schedule(date(7)).day_event, "release day");
    }

    #[test]
    fn corrupt_schedule_record_falls_back_to_default() {
        let mut repo = repo();
        repo.db().kv_set("schedule:2026-08-07", "{broken").unwrap();
        let schedule = repo.schedule(date(7));
        assert!(schedule.time_blocks.is_empty());
        assert!(!schedule.has_data());
    }

    #[test]
    fn add_time_block_rejects_non_positive_duration() {
        let mut repo = repo();
        let bad = block(Uuid::new_v4(), 10, 9);
        let err = repo.add_time_block(date(7), bad).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::InvalidTimeRange { .. })
        ));
        // Nothing was persisted.
        assert!(repo.db().kv_get("schedule:2026-08-07").unwrap().is_none());

        let zero = block(Uuid::new_v4(), 9, 9);
        assert!(repo.add_time_block(date(7), zero).is_err());
    }

    #[test]
    fn add_time_block_rejects_end_past_midnight() {
        let mut repo = repo();
        let bad = TimeBlock::new(Uuid::new_v4(), 23, 0, 24, 30, "");
        assert!(repo.add_time_block(date(7), bad).is_err());
    }

    #[test]
    fn block_mutation_round_trip() {
        let mut repo = repo();
        let category = Uuid::new_v4();
        let b = block(category, 9, 17);
        let id = b.id;
        repo.add_time_block(date(7), b).unwrap();

        let mut updated = repo.schedule(date(7)).time_blocks[0].clone();
        updated.end_hour = 18;
        assert!(repo.update_time_block(date(7), updated).unwrap());
        assert_eq!(repo.schedule(date(7)).time_blocks[0].end_hour, 18);

        // Unknown id: validated but not applied.
        let stranger = block(category, 9, 10);
        assert!(!repo.update_time_block(date(7), stranger).unwrap());

        assert!(repo.remove_time_block(date(7), id).unwrap());
        assert!(!repo.remove_time_block(date(7), id).unwrap());
        assert!(repo.schedule(date(7)).time_blocks.is_empty());
    }

    #[test]
    fn todo_and_tracking_and_event_helpers() {
        let mut repo = repo();
        repo.set_todo(date(7), 1, "write tests").unwrap();
        repo.toggle_todo(date(7), 1).unwrap();
        repo.set_tracking_value(date(7), DEFAULT_OVERTIME_ID, TrackingValue::new(60, 90))
            .unwrap();
        repo.set_day_event(date(7), "demo").unwrap();

        let schedule = repo.schedule(date(7));
        assert_eq!(schedule.todo_text(1), "write tests");
        assert!(schedule.todo_done(1));
        assert_eq!(
            schedule.tracking_value(DEFAULT_OVERTIME_ID),
            TrackingValue::new(60, 90)
        );
        assert_eq!(schedule.day_event, "demo");
    }

    #[test]
    fn paste_gives_fresh_block_identities_and_skips_tracking() {
        let mut repo = repo();
        let category = Uuid::new_v4();
        repo.add_time_block(date(7), TimeBlock::new(category, 9, 0, 17, 30, "Work"))
            .unwrap();
        repo.set_todo(date(7), 0, "standup").unwrap();
        repo.toggle_todo(date(7), 0).unwrap();
        repo.set_tracking_value(date(7), DEFAULT_OVERTIME_ID, TrackingValue::new(30, 0))
            .unwrap();
        repo.set_day_event(date(7), "busy").unwrap();

        repo.copy_schedule(date(7));
        assert!(repo.paste_schedule(date(10)).unwrap());

        let source = repo.schedule(date(7));
        let pasted = repo.schedule(date(10));
        assert_eq!(pasted.time_blocks.len(), 1);
        let (src, dst) = (&source.time_blocks[0], &pasted.time_blocks[0]);
        assert_ne!(dst.id, src.id);
        assert_eq!(dst.category_id, src.category_id);
        assert_eq!(dst.start_total_minutes(), src.start_total_minutes());
        assert_eq!(dst.end_total_minutes(), src.end_total_minutes());
        assert_eq!(dst.title, src.title);
        assert_eq!(pasted.todos, source.todos);
        assert_eq!(pasted.todo_completed, source.todo_completed);
        assert!(pasted.tracking_values.is_empty());
        assert_eq!(pasted.day_event, "");
    }

    #[test]
    fn paste_into_multiple_dates_is_independent() {
        let mut repo = repo();
        repo.add_time_block(date(7), block(Uuid::new_v4(), 8, 9)).unwrap();
        repo.copy_schedule(date(7));
        let targets = [date(10), date(11), date(12)];
        assert!(repo.paste_schedule_into(&targets).unwrap());

        let ids: Vec<Uuid> = targets
            .iter()
            .map(|&d| repo.schedule(d).time_blocks[0].id)
            .collect();
        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn paste_without_copy_is_a_noop() {
        let mut repo = repo();
        assert!(!repo.paste_schedule(date(7)).unwrap());
        assert!(repo.db().kv_get("schedule:2026-08-07").unwrap().is_none());
    }

    #[test]
    fn prefetch_populates_cache_and_skips_unreadable() {
        let mut repo = repo();
        repo.set_day_event(date(1), "a").unwrap();
        repo.db().kv_set("schedule:2026-08-02", "garbage").unwrap();

        let mut fresh = ScheduleRepository::with_database(Database::open_memory().unwrap());
        // Re-point at the same database by copying records over.
        for day in 1..=2 {
            let key = format!("schedule:2026-08-{day:02}");
            if let Some(value) = repo.db().kv_get(&key).unwrap() {
                fresh.db().kv_set(&key, &value).unwrap();
            }
        }
        fresh.prefetch_month(date(15));
        assert_eq!(fresh.schedule(date(1)).day_event, "a");
        assert!(!fresh.schedule(date(2)).has_data());
        // Prefetch never creates records.
        assert!(fresh.db().kv_get("schedule:2026-08-03").unwrap().is_none());
    }

    #[test]
    fn default_work_block_uses_config_and_registry() {
        let mut repo = repo();
        let categories = CategoryRegistry::load(repo.db()).unwrap();
        let config = Config::default();
        assert!(repo
            .add_default_work_block(date(7), &categories, &config)
            .unwrap());

        let schedule = repo.schedule(date(7));
        let work = categories.find_by_name("Work").unwrap();
        assert_eq!(schedule.time_blocks.len(), 1);
        assert_eq!(schedule.time_blocks[0].category_id, work.id);
        assert_eq!(schedule.time_blocks[0].start_total_minutes(), 540);
        assert_eq!(schedule.time_blocks[0].end_total_minutes(), 1050);

        // Unknown label: no-op.
        let mut odd_config = Config::default();
        odd_config.work_label = "Nonexistent".to_string();
        assert!(!repo
            .add_default_work_block(date(8), &categories, &odd_config)
            .unwrap());
    }

    #[test]
    fn training_log_round_trip_and_fallback() {
        let repo = repo();
        assert!(!repo.training_log(date(7)).has_content());

        let mut log = TrainingLog::new(date(7));
        log.morning_note = "easy 5k".to_string();
        log.running_distance_km = 5.0;
        repo.update_training_log(&log).unwrap();
        let loaded = repo.training_log(date(7));
        assert_eq!(loaded, log);

        repo.db().kv_set("training:2026-08-07", "nope").unwrap();
        assert!(!repo.training_log(date(7)).has_content());
    }
}
