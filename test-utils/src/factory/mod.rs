//! Factory methods for creating test documents.
//!
//! Factories produce `serde_json::Value`s in the same shape the bot reads from disk,
//! so tests exercise the real deserialization path. Pass them to
//! [`TestBuilder`](crate::builder::TestBuilder) or deserialize them directly.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let users = factory::create_allow_list(&[111, 222]);
//! let channels = factory::channel::ChannelDocumentFactory::new()
//!     .channel(1, "announce", 10, &[100, 101])
//!     .channel(2, "announce", 20, &[])
//!     .build();
//! let polls = factory::poll::PollDocumentFactory::new()
//!     .poll(factory::poll::PollRecordFactory::new(1).clicked(&[111]))
//!     .build();
//! ```
//!
//! # Available Factories
//!
//! - `allow_list` - Allow-list entries
//! - `channel` - Channel target documents
//! - `poll` - Poll records and poll store documents
//! - `helpers` - Unique ID generation

pub mod allow_list;
pub mod channel;
pub mod helpers;
pub mod poll;

pub use allow_list::create_allow_list;
