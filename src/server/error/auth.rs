use serenity::all::UserId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The invoking user is not on the operator allow-list.
    ///
    /// Raised by the access gate before any side effect takes place. Surfaced to
    /// the user as a private rejection message.
    #[error("User {0} is not authorized to use this command")]
    Unauthorized(UserId),
}

impl AuthError {
    /// Message shown to the rejected user.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "⛔ You are not allowed to use this command.",
        }
    }
}
