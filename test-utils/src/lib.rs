//! Multisend Test Utils
//!
//! Provides shared testing utilities for the multisend bot. This crate offers a builder
//! for test contexts backed by a temporary directory holding the bot's JSON documents
//! (allow-list, channel targets, poll store), plus factories for those documents and
//! for Serenity objects.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder declaring which documents exist before the test runs
//! - **TestContext**: Temporary directory and the paths of the documents in it
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn loads_channels() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_channels(factory::channel::ChannelDocumentFactory::new()
//!             .channel(1, "announce", 10, &[])
//!             .build())
//!         .build()?;
//!
//!     // Read test.channels_file with the code under test...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
