//! Entity model: the value types a day plan is made of.
//!
//! Every type here is a plain serde-serializable value. Invariants that span
//! entities (duration validation, registry membership) are enforced at the
//! repository boundary, not by the types themselves.

mod category;
mod day_schedule;
mod quote;
mod time_block;
mod tracking;
mod training;

pub use category::ScheduleCategory;
pub use day_schedule::DaySchedule;
pub use quote::{quote_of_day, Quote};
pub use time_block::TimeBlock;
pub use tracking::{TrackingItem, TrackingValue, AVAILABLE_ICONS, DEFAULT_OVERTIME_ID};
pub use training::TrainingLog;
