//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity objects by deserializing JSON, simulating
//! what Discord's API would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::create_test_role;
//!
//! let pilots = create_test_role(111111111, "Pilots", 0xFF0000, 10);
//! let everyone = create_test_role(123456789, "@everyone", 0, 0);
//! ```

pub mod role;

pub use role::create_test_role;
