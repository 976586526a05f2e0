use serenity::all::UserId;
use thiserror::Error;

/// Errors raised by poll interactions.
///
/// Neither variant mutates state: both are reported back to the user who pressed
/// the button.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PollError {
    /// Poll was evicted or never existed. The two cases are indistinguishable
    /// to the caller.
    #[error("Poll {0} is no longer active")]
    NotFound(String),

    /// User already has a recorded click on this poll.
    #[error("User {user_id} already clicked poll {poll_id}")]
    AlreadyClicked {
        /// Poll the click targeted
        poll_id: String,
        /// User who clicked again
        user_id: UserId,
    },
}

impl PollError {
    /// Message shown to the user who pressed the button.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "⌛ This poll is no longer active.",
            Self::AlreadyClicked { .. } => "❗ You already clicked on this poll.",
        }
    }
}
