//! Bot backend and business logic.
//!
//! This module contains the complete implementation of the broadcast bot: slash
//! command and button handling, channel target resolution, paced message fanout,
//! the persistent poll store, and the supporting infrastructure. Discord access
//! goes through Serenity; the liveness endpoint uses Axum.
//!
//! # Architecture
//!
//! - **Bot Layer** (`bot/`) - Gateway connection, command registration, interaction routing
//! - **Service Layer** (`service/`) - Access gate, target resolution, rendering, fanout, polls
//! - **Data Layer** (`data/`) - JSON documents and the poll store with its storage backend
//! - **Model Layer** (`model/`) - Domain types and their persisted document shapes
//! - **Error Layer** (`error/`) - Application error types and user-facing messages
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Services shared by the event handler and scheduled jobs
//! - **Startup** (`startup`) - Logging, document loading, and service wiring
//! - **Router** (`router`) - Liveness routes
//! - **Scheduler** (`scheduler/`) - Recurring poll eviction
//!
//! # Interaction Flow
//!
//! 1. **Bot** receives a slash command or button press
//! 2. **Access gate** rejects callers missing from the allow-list
//! 3. **Service** resolves targets and renders one message per channel
//! 4. **Fanout** sends or edits the messages at a fixed pace, continuing past failures
//! 5. **Bot** replies privately with the per-channel outcome

pub mod bot;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
