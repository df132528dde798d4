//! Storage contract for users and events.
//!
//! Callers only ever receive copies of stored records. "Not found" is a
//! normal result (`Ok(None)` / `Ok(false)`), never an error.

mod memory;

pub use memory::MemStorage;

use chrono::NaiveDate;

use crate::error::EventraResult;
use crate::event::{Event, EventPatch, InsertEvent};
use crate::user::{InsertUser, User};

pub trait Storage: Send + Sync {
    fn get_user(&self, id: &str) -> EventraResult<Option<User>>;

    fn get_user_by_username(&self, username: &str) -> EventraResult<Option<User>>;

    /// Store a new user under a fresh id. Usernames are unique.
    fn create_user(&self, user: InsertUser) -> EventraResult<User>;

    /// All events, ascending by `date_time`.
    fn get_events(&self) -> EventraResult<Vec<Event>>;

    fn get_event(&self, id: &str) -> EventraResult<Option<Event>>;

    /// Store a new event under a fresh id, defaulting `description` and `time`.
    fn create_event(&self, event: InsertEvent) -> EventraResult<Event>;

    /// Merge `patch` onto the stored event and return the result.
    ///
    /// Returns `Ok(None)` when no event has this id.
    fn update_event(&self, id: &str, patch: EventPatch) -> EventraResult<Option<Event>>;

    /// Returns whether an event was actually removed.
    fn delete_event(&self, id: &str) -> EventraResult<bool>;

    /// Events whose `date_time` falls on `day`, ascending by `date_time`.
    fn get_events_on(&self, day: NaiveDate) -> EventraResult<Vec<Event>> {
        Ok(self
            .get_events()?
            .into_iter()
            .filter(|event| event.occurs_on(day))
            .collect())
    }
}

/// Chronological order, falling back to id so equal times sort stably.
pub(crate) fn sort_chronologically(events: &mut [Event]) {
    events.sort_by(|a, b| {
        a.date_time
            .cmp(&b.date_time)
            .then_with(|| a.id.cmp(&b.id))
    });
}
