//! Statistics over week and month windows.
//!
//! Aggregation is read-only: every function takes the repository (for
//! cached schedule reads) and the registries, and produces value-typed
//! results. Two overtime figures exist side by side on purpose: the
//! category-label accounting in [`overtime_minutes`] and the explicit
//! planned/actual tracking totals in [`tracking_totals`] -- they answer
//! different questions and are never merged.

mod category;
mod tracking;

pub use category::{
    category_stats, daily_stats, minutes_for_category, overtime_minutes, overtime_minutes_over,
    CategoryStat,
};
pub use tracking::{tracking_total, tracking_totals, TrackingTotal};
