//! Persistence layer.
//!
//! This module owns everything that touches disk: the read-only configuration
//! documents (allow-list and channel targets) and the poll store with its
//! pluggable persistence backend. Documents are deserialized into the typed
//! schemas in `server::model` at this boundary.

pub mod backend;
pub mod document;
pub mod poll;

#[cfg(test)]
pub(crate) mod test;
