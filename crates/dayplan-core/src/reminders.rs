//! Reminder/task-list provider interface.
//!
//! The platform reminder integration is an external collaborator: the core
//! defines the interface and the display conventions, never an
//! implementation. Nothing in the repository or the aggregation engine
//! depends on a provider; failures are reported back as `ReminderError`
//! values and leave core state untouched.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ReminderError;

/// Consent state machine for reminder access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthorizationState {
    Unrequested,
    Granted,
    Denied,
}

impl AuthorizationState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unrequested => "unrequested",
            Self::Granted => "granted",
            Self::Denied => "denied",
        }
    }
}

/// A reminder as surfaced by a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: String,
    pub title: String,
    pub done: bool,
    pub due_date: Option<NaiveDate>,
    pub list_id: String,
}

/// Filter for listing reminders.
#[derive(Debug, Clone, Default)]
pub struct ReminderFilter {
    /// Restrict to one reminder list; `None` means all lists.
    pub list_id: Option<String>,
    /// Include completed reminders.
    pub include_done: bool,
}

/// Every reminder provider implements this trait.
pub trait ReminderProvider {
    /// Unique identifier (e.g. "system", "mock").
    fn name(&self) -> &str;

    /// Current consent state.
    fn authorization(&self) -> AuthorizationState;

    /// Ask the user for access. Returns the resulting state.
    fn request_authorization(&mut self) -> Result<AuthorizationState, ReminderError>;

    /// List reminders matching the filter.
    fn list_reminders(&self, filter: &ReminderFilter) -> Result<Vec<Reminder>, ReminderError>;

    /// Flip a reminder's completion state.
    fn toggle_done(&mut self, id: &str) -> Result<(), ReminderError>;

    /// Create a reminder, in the given list or the provider default.
    fn create_reminder(
        &mut self,
        title: &str,
        list_id: Option<&str>,
    ) -> Result<Reminder, ReminderError>;
}

/// Display order: incomplete first, then by due date (undated last), then
/// by title.
pub fn sort_for_display(reminders: &mut [Reminder]) {
    reminders.sort_by(|a, b| {
        a.done
            .cmp(&b.done)
            .then_with(|| match (a.due_date, b.due_date) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            })
            .then_with(|| a.title.cmp(&b.title))
    });
}

/// Count of reminders not yet completed.
pub fn incomplete_count(reminders: &[Reminder]) -> usize {
    reminders.iter().filter(|r| !r.done).count()
}
