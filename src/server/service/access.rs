use serenity::all::UserId;
use std::collections::HashSet;

use crate::server::{
    error::auth::AuthError,
    model::{access::AllowedUser, command::CommandKind},
};

/// Allow-list membership check for slash commands.
pub struct AccessGate {
    users: Vec<AllowedUser>,
    allowed: HashSet<UserId>,
    exempt: HashSet<CommandKind>,
}

impl AccessGate {
    /// Builds the gate from the loaded allow-list and the configured exemptions.
    ///
    /// Messaging commands are removed from `exempt`: broadcasting and poll creation
    /// always require an allowed user.
    pub fn new(users: Vec<AllowedUser>, mut exempt: HashSet<CommandKind>) -> Self {
        exempt.retain(|command| {
            if command.is_messaging() {
                tracing::warn!(
                    "Ignoring authorization exemption for messaging command '{}'",
                    command
                );
                return false;
            }
            true
        });

        let allowed = users.iter().map(|user| user.id).collect();

        Self {
            users,
            allowed,
            exempt,
        }
    }

    pub fn is_authorized(&self, user_id: UserId) -> bool {
        self.allowed.contains(&user_id)
    }

    pub fn is_exempt(&self, command: CommandKind) -> bool {
        self.exempt.contains(&command)
    }

    /// Checks whether `user_id` may run `command`.
    ///
    /// # Returns
    /// - `Ok(())` - Command is exempt or the user is on the allow-list
    /// - `Err(AuthError::Unauthorized)` - User is not allowed
    pub fn check(&self, command: CommandKind, user_id: UserId) -> Result<(), AuthError> {
        if self.is_exempt(command) || self.is_authorized(user_id) {
            return Ok(());
        }

        tracing::info!("Rejected /{} from unauthorized user {}", command, user_id);
        Err(AuthError::Unauthorized(user_id))
    }

    pub fn users(&self) -> &[AllowedUser] {
        &self.users
    }
}
