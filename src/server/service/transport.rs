//! Discord-facing seams of the service layer.
//!
//! Services send, edit, and look up roles only through [`MessageTransport`] and
//! [`RoleDirectory`]. [`DiscordHttp`] implements both on top of Serenity's HTTP
//! client; tests substitute in-memory fakes.

use serenity::{
    all::{
        ButtonStyle, ChannelId, CreateActionRow, CreateAllowedMentions, CreateButton,
        CreateMessage, EditMessage, GuildId, MessageId, Role, RoleId,
    },
    async_trait,
    http::Http,
};
use std::{collections::HashMap, sync::Arc};

use crate::server::{
    error::AppError,
    model::message::{ButtonStyleKind, OutgoingMessage},
};

/// Sends and edits messages in channels.
#[async_trait]
pub trait MessageTransport: Send + Sync {
    /// Posts `message` in `channel_id`.
    ///
    /// # Returns
    /// - `Ok(MessageId)` - ID of the created message
    /// - `Err(AppError)` - Channel missing, permission denied, or transport error
    async fn send_message(
        &self,
        channel_id: ChannelId,
        message: &OutgoingMessage,
    ) -> Result<MessageId, AppError>;

    /// Replaces content and buttons of an existing message.
    async fn edit_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        message: &OutgoingMessage,
    ) -> Result<(), AppError>;
}

/// Looks up role display names.
#[async_trait]
pub trait RoleDirectory: Send + Sync {
    /// Fetches the names of every role in `guild_id`.
    async fn guild_role_names(&self, guild_id: GuildId)
        -> Result<HashMap<RoleId, String>, AppError>;
}

/// Serenity HTTP-backed transport and role directory.
#[derive(Clone)]
pub struct DiscordHttp {
    http: Arc<Http>,
}

impl DiscordHttp {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    fn components(message: &OutgoingMessage) -> Vec<CreateActionRow> {
        if message.buttons.is_empty() {
            return Vec::new();
        }

        let buttons = message
            .buttons
            .iter()
            .map(|button| {
                CreateButton::new(button.custom_id.clone())
                    .label(button.label.clone())
                    .style(match button.style {
                        ButtonStyleKind::Primary => ButtonStyle::Primary,
                        ButtonStyleKind::Secondary => ButtonStyle::Secondary,
                    })
            })
            .collect();

        vec![CreateActionRow::Buttons(buttons)]
    }

    fn allowed_mentions(message: &OutgoingMessage) -> CreateAllowedMentions {
        if message.ping_roles {
            CreateAllowedMentions::new().all_roles(true).everyone(true)
        } else {
            CreateAllowedMentions::new()
        }
    }
}

#[async_trait]
impl MessageTransport for DiscordHttp {
    async fn send_message(
        &self,
        channel_id: ChannelId,
        message: &OutgoingMessage,
    ) -> Result<MessageId, AppError> {
        let builder = CreateMessage::new()
            .content(message.content.clone())
            .components(Self::components(message))
            .allowed_mentions(Self::allowed_mentions(message));

        let sent = channel_id.send_message(&self.http, builder).await?;

        Ok(sent.id)
    }

    async fn edit_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        message: &OutgoingMessage,
    ) -> Result<(), AppError> {
        let builder = EditMessage::new()
            .content(message.content.clone())
            .components(Self::components(message))
            .allowed_mentions(Self::allowed_mentions(message));

        channel_id
            .edit_message(&self.http, message_id, builder)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl RoleDirectory for DiscordHttp {
    async fn guild_role_names(
        &self,
        guild_id: GuildId,
    ) -> Result<HashMap<RoleId, String>, AppError> {
        let roles = self.http.get_guild_roles(guild_id).await?;
        Ok(role_names(roles))
    }
}

/// Indexes role names by role ID.
pub fn role_names(roles: impl IntoIterator<Item = Role>) -> HashMap<RoleId, String> {
    roles.into_iter().map(|role| (role.id, role.name)).collect()
}
