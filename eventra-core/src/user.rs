//! User records.
//!
//! Users share the storage contract with events but have no relationship
//! to them. They are created once and never updated or deleted.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password: String,
}

/// Fields needed to create a user (everything but the generated id).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertUser {
    pub username: String,
    pub password: String,
}

impl User {
    pub fn from_insert(id: String, insert: InsertUser) -> Self {
        User {
            id,
            username: insert.username,
            password: insert.password,
        }
    }
}

// Keep passwords out of log lines.
impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for InsertUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsertUser")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}
