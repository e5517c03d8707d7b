//! Gap detection between time blocks.
//!
//! Finds the empty slots of a day not covered by any time block.

use serde::{Deserialize, Serialize};

use crate::calendar::MINUTES_PER_DAY;
use crate::model::TimeBlock;

/// An empty slot of a day, as minutes since midnight: `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapSlot {
    pub start_minute: i64,
    pub end_minute: i64,
}

impl GapSlot {
    pub fn duration_minutes(&self) -> i64 {
        self.end_minute - self.start_minute
    }

    /// Whether a block of the given length would fit in this slot.
    pub fn can_fit(&self, minutes: i64) -> bool {
        self.duration_minutes() >= minutes
    }
}

/// Find the empty slots of a day not covered by any block.
///
/// Walks the blocks ascending by start time with a cursor starting at
/// midnight; whenever a block starts past the cursor a gap is emitted, and
/// the cursor advances to the furthest block end seen so far. A trailing gap
/// runs to the end of the day. Overlapping blocks are tolerated: the cursor
/// never moves backwards, so overlap produces no phantom gaps.
///
/// Pure function of its input; returns gaps sorted by start time.
pub fn gap_slots(blocks: &[TimeBlock]) -> Vec<GapSlot> {
    let mut sorted: Vec<&TimeBlock> = blocks.iter().collect();
    sorted.sort_by_key(|b| b.start_total_minutes());

    let mut gaps = Vec::new();
    let mut cursor: i64 = 0;

    for block in sorted {
        let start = block.start_total_minutes().min(MINUTES_PER_DAY);
        let end = block.end_total_minutes().min(MINUTES_PER_DAY);
        if start > cursor {
            gaps.push(GapSlot {
                start_minute: cursor,
                end_minute: start,
            });
        }
        cursor = cursor.max(end);
    }

    if cursor < MINUTES_PER_DAY {
        gaps.push(GapSlot {
            start_minute: cursor,
            end_minute: MINUTES_PER_DAY,
        });
    }

    gaps
}
