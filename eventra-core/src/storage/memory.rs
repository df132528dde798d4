//! In-memory storage using DashMap.
//!
//! Records live for the lifetime of the process. There is no eviction and
//! no size bound.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;
use uuid::Uuid;

use super::{Storage, sort_chronologically};
use crate::error::{EventraError, EventraResult};
use crate::event::{Event, EventPatch, InsertEvent};
use crate::user::{InsertUser, User};

#[derive(Default)]
pub struct MemStorage {
    users: DashMap<String, User>,
    /// username -> user id
    usernames: DashMap<String, String>,
    events: DashMap<String, Event>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn fresh_id() -> String {
        Uuid::new_v4().to_string()
    }
}

impl Storage for MemStorage {
    fn get_user(&self, id: &str) -> EventraResult<Option<User>> {
        Ok(self.users.get(id).map(|user| user.clone()))
    }

    fn get_user_by_username(&self, username: &str) -> EventraResult<Option<User>> {
        let Some(id) = self.usernames.get(username).map(|id| id.clone()) else {
            return Ok(None);
        };
        self.get_user(&id)
    }

    fn create_user(&self, insert: InsertUser) -> EventraResult<User> {
        match self.usernames.entry(insert.username.clone()) {
            Entry::Occupied(_) => Err(EventraError::UsernameTaken(insert.username)),
            Entry::Vacant(slot) => {
                let user = User::from_insert(Self::fresh_id(), insert);
                self.users.insert(user.id.clone(), user.clone());
                slot.insert(user.id.clone());
                debug!(id = %user.id, username = %user.username, "created user");
                Ok(user)
            }
        }
    }

    fn get_events(&self) -> EventraResult<Vec<Event>> {
        let mut events: Vec<Event> = self.events.iter().map(|e| e.value().clone()).collect();
        sort_chronologically(&mut events);
        Ok(events)
    }

    fn get_event(&self, id: &str) -> EventraResult<Option<Event>> {
        Ok(self.events.get(id).map(|event| event.clone()))
    }

    fn create_event(&self, insert: InsertEvent) -> EventraResult<Event> {
        let event = Event::from_insert(Self::fresh_id(), insert);
        self.events.insert(event.id.clone(), event.clone());
        debug!(id = %event.id, date_time = %event.date_time, "created event");
        Ok(event)
    }

    fn update_event(&self, id: &str, patch: EventPatch) -> EventraResult<Option<Event>> {
        let Some(mut event) = self.events.get_mut(id) else {
            return Ok(None);
        };
        event.apply(patch);
        debug!(id, "updated event");
        Ok(Some(event.clone()))
    }

    fn delete_event(&self, id: &str) -> EventraResult<bool> {
        let removed = self.events.remove(id).is_some();
        if removed {
            debug!(id, "deleted event");
        }
        Ok(removed)
    }
}
