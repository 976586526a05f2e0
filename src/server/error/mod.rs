//! Error types for the bot.
//!
//! `AppError` is the top-level error type that wraps the domain-specific errors.
//! Domain errors that a Discord user can trigger (`AuthError`, `PollError`) carry a
//! `user_message` used for the private reply; everything else is logged and
//! reported to the user with a generic message.

pub mod auth;
pub mod config;
pub mod internal;
pub mod poll;

use thiserror::Error;

use crate::server::error::{
    auth::AuthError, config::ConfigError, internal::InternalError, poll::PollError,
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most
/// variants use `#[from]` for automatic error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Caller is not on the allow-list.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Poll interaction rejected (unknown poll, repeated click).
    #[error(transparent)]
    PollErr(#[from] PollError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Filesystem error while reading or writing a document.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Document could not be serialized or deserialized.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Unexpected internal state.
    #[error(transparent)]
    InternalErr(#[from] InternalError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Text shown privately to the Discord user whose action failed.
    ///
    /// User-facing domain errors carry their own message; all other errors map
    /// to a generic message so internals never leak into Discord.
    pub fn user_message(&self) -> &str {
        match self {
            Self::AuthErr(err) => err.user_message(),
            Self::PollErr(err) => err.user_message(),
            _ => "❌ Something went wrong, please try again later.",
        }
    }
}
