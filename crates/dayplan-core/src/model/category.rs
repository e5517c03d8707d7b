//! User-defined categories for classifying time blocks.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user-defined label/color used to classify time blocks.
///
/// Categories live in an ordered registry; a `TimeBlock` references one by
/// id. Deleting a category never touches the blocks that reference it --
/// lookups for a missing id resolve to an "unknown" display state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduleCategory {
    pub id: Uuid,
    pub name: String,
    pub color_hex: String,
}

impl ScheduleCategory {
    pub fn new(name: impl Into<String>, color_hex: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            color_hex: color_hex.into(),
        }
    }

    /// Seed list applied on first run.
    pub fn defaults() -> Vec<Self> {
        [
            ("Work", "#4A90D9"),
            ("Commute", "#F5A623"),
            ("Overtime", "#D0021B"),
            ("Meals", "#7ED321"),
            ("Sleep", "#9013FE"),
            ("Exercise", "#50E3C2"),
            ("Hobby", "#FF6B9D"),
            ("Housework", "#B8E986"),
            ("Self-study", "#BD10E0"),
        ]
        .into_iter()
        .map(|(name, color)| Self::new(name, color))
        .collect()
    }
}
