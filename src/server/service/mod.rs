//! Service layer for business logic and orchestration.
//!
//! This module sits between the Discord event handlers and the data layer.
//! Services are responsible for:
//!
//! - **Target resolution**: Turning the channel document into de-duplicated destinations
//! - **Fanout**: Paced, continue-on-error sending and editing across destinations
//! - **Rendering**: Building message content with role pings or role names
//! - **Polls**: Creating polls, recording clicks, and propagating click counts
//! - **Access**: Checking callers against the operator allow-list

pub mod access;
pub mod broadcast;
pub mod fanout;
pub mod listing;
pub mod poll;
pub mod render;
pub mod role;
pub mod target;
pub mod transport;

#[cfg(test)]
mod test;
