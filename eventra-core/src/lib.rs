//! Core types for Eventra.
//!
//! This crate holds everything the HTTP server builds on:
//! - `Event`, `User` and their insert/patch shapes
//! - `validate` for the request shape checks
//! - `storage` with the `Storage` trait and its in-memory backing
//! - `config` for loading server settings

pub mod config;
pub mod error;
pub mod event;
pub mod storage;
pub mod user;
pub mod validate;

pub use config::EventraConfig;
pub use error::{EventraError, EventraResult};
pub use event::{Event, EventPatch, InsertEvent};
pub use storage::{MemStorage, Storage};
pub use user::{InsertUser, User};
pub use validate::FieldError;
