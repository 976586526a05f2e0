//! Domain models and document schemas.
//!
//! This module contains the types the service layer works with: resolved broadcast
//! targets, polls and their message references, allow-list entries, and the typed
//! shapes of the JSON documents the bot reads and writes. Documents are converted
//! into domain models at the data-layer boundary.

pub mod access;
pub mod channel;
pub mod command;
pub mod message;
pub mod poll;
pub mod target;
