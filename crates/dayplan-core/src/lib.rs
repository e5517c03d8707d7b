//! # DayPlan Core Library
//!
//! This library provides the core business logic for the DayPlan personal
//! day planner. It implements a CLI-first philosophy where all operations
//! are available via a standalone CLI binary, with any GUI being a thin
//! layer over the same core library.
//!
//! ## Architecture
//!
//! - **Model**: Value types for schedules, time blocks, categories,
//!   tracking metrics, quotes, and training logs
//! - **Repository**: Date-keyed schedule access with an in-memory cache
//!   over SQLite-backed key-value storage
//! - **Stats**: Read-only aggregation over week and month windows
//! - **Timeline**: Gap detection over the 1440-minute day
//! - **Registries**: Ordered, user-editable category/tracking/quote lists
//!
//! ## Key Components
//!
//! - [`ScheduleRepository`]: The single write path for schedule state
//! - [`Database`]: Key-value record persistence
//! - [`Config`]: Application configuration management
//! - [`ReminderProvider`]: Trait for external reminder integrations

pub mod calendar;
pub mod error;
pub mod model;
pub mod registry;
pub mod reminders;
pub mod repository;
pub mod stats;
pub mod storage;
pub mod timeline;

pub use error::{ConfigError, CoreError, ReminderError, StorageError, ValidationError};
pub use model::{
    quote_of_day, DaySchedule, Quote, ScheduleCategory, TimeBlock, TrackingItem, TrackingValue,
    TrainingLog, DEFAULT_OVERTIME_ID,
};
pub use registry::{CategoryRegistry, QuoteRegistry, TrackingItemRegistry};
pub use reminders::{AuthorizationState, Reminder, ReminderFilter, ReminderProvider};
pub use repository::ScheduleRepository;
pub use stats::{CategoryStat, TrackingTotal};
pub use storage::{Config, Database};
pub use timeline::{gap_slots, GapSlot};
