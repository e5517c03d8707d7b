//! User-defined planned-vs-actual metrics tracked per day.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reserved id of the built-in overtime tracking item.
///
/// Legacy schedule records carried overtime as two scalar fields; decoding
/// migrates them into a tracking value under this id, so it must never
/// change.
pub const DEFAULT_OVERTIME_ID: Uuid = Uuid::from_u128(1);

/// Icons a tracking item can be tagged with.
pub const AVAILABLE_ICONS: &[&str] = &[
    "clock",
    "clock-alert",
    "book",
    "run",
    "briefcase",
    "bed",
    "utensils",
    "chart",
    "star",
    "heart",
    "pencil",
    "dollar",
];

/// A user-defined metric (e.g. "overtime", "study time") tracked as
/// planned/actual minutes per day.
///
/// Items live in an ordered registry. Deleting one hides it from aggregation
/// but never deletes the historical `TrackingValue` data keyed by its id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackingItem {
    pub id: Uuid,
    pub name: String,
    pub color_hex: String,
    pub icon: String,
}

impl TrackingItem {
    pub fn new(
        name: impl Into<String>,
        color_hex: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            color_hex: color_hex.into(),
            icon: icon.into(),
        }
    }

    /// Seed list applied on first run: the built-in overtime item.
    pub fn defaults() -> Vec<Self> {
        vec![Self {
            id: DEFAULT_OVERTIME_ID,
            name: "Overtime".to_string(),
            color_hex: "#D0021B".to_string(),
            icon: "clock-alert".to_string(),
        }]
    }
}

/// Planned/actual minutes for one tracking item on one day.
///
/// Immutable value, replaced wholesale on edit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackingValue {
    #[serde(default)]
    pub planned: u32,
    #[serde(default)]
    pub actual: u32,
}

impl TrackingValue {
    pub fn new(planned: u32, actual: u32) -> Self {
        Self { planned, actual }
    }

    pub fn planned_hours(&self) -> f64 {
        f64::from(self.planned) / 60.0
    }

    pub fn actual_hours(&self) -> f64 {
        f64::from(self.actual) / 60.0
    }

    pub fn has_data(&self) -> bool {
        self.planned > 0 || self.actual > 0
    }
}
