//! Day timeline utilities.
//!
//! This module provides gap detection over the 1440-minute day axis.
//! Gaps are the empty slots between a schedule's time blocks; the UI uses
//! them as tap targets for adding a block into free time.

mod gap;

pub use gap::{gap_slots, GapSlot};
