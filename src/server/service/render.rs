//! Message rendering for broadcasts and polls.
//!
//! The ping mode of a broadcast or poll is fixed when it is issued. In ping mode
//! every configured role becomes a mention token; in no-ping mode the roles are
//! listed by name in parentheses so nobody is notified. Poll edits re-render with
//! the mode stored on the poll, so every copy and every edit look the same.

use serenity::{
    all::{GuildId, RoleId, UserId},
    async_trait,
};

use crate::server::{
    model::{
        command::ButtonAction,
        message::{ButtonSpec, ButtonStyleKind, OutgoingMessage},
        poll::Poll,
        target::ResolvedTarget,
    },
    service::role::RoleNameResolver,
    util::parse::truncate_chars,
};

/// Discord's maximum button label length.
const MAX_BUTTON_LABEL_CHARS: usize = 80;

/// Cap on the clicker list reply, below Discord's 2000 character message limit.
pub const MAX_CLICKERS_CHARS: usize = 1900;

const SHOW_CLICKERS_LABEL: &str = "Show who clicked";

/// Produces the message sent to (or edited in) one target.
#[async_trait]
pub trait Render: Send + Sync {
    async fn render(&self, target: &ResolvedTarget) -> OutgoingMessage;
}

/// Builds the role line of a message.
///
/// # Arguments
/// - `roles` - Resolver used in no-ping mode
/// - `target` - Target whose ping roles are rendered
/// - `no_ping` - Render names instead of mentions
///
/// # Returns
/// - Empty string when the target has no ping roles
/// - `<@&id> <@&id>` in ping mode (`@everyone` for the guild's everyone role)
/// - `(Name, Name)` in no-ping mode (`everyone` for the guild's everyone role)
pub async fn render_role_line(
    roles: &RoleNameResolver,
    target: &ResolvedTarget,
    no_ping: bool,
) -> String {
    if target.ping_role_ids.is_empty() {
        return String::new();
    }

    if no_ping {
        let names = roles
            .resolve_names(target.guild_id, &target.ping_role_ids)
            .await;
        let names: Vec<String> = target
            .ping_role_ids
            .iter()
            .zip(names)
            .map(|(role_id, name)| {
                if is_everyone(target.guild_id, *role_id) {
                    "everyone".to_string()
                } else {
                    name
                }
            })
            .collect();
        return format!("({})", names.join(", "));
    }

    target
        .ping_role_ids
        .iter()
        .map(|role_id| role_mention(target.guild_id, *role_id))
        .collect::<Vec<_>>()
        .join(" ")
}

// The guild ID doubles as the @everyone role ID.
fn is_everyone(guild_id: GuildId, role_id: RoleId) -> bool {
    role_id.get() == guild_id.get()
}

fn role_mention(guild_id: GuildId, role_id: RoleId) -> String {
    if is_everyone(guild_id, role_id) {
        "@everyone".to_string()
    } else {
        format!("<@&{}>", role_id)
    }
}

fn join_lines(role_line: String, lines: &[String]) -> String {
    let mut content = String::new();
    if !role_line.is_empty() {
        content.push_str(&role_line);
        content.push('\n');
    }
    content.push_str(&lines.join("\n"));
    content
}

/// Renders a plain broadcast: role line, message, and sender attribution.
pub struct BroadcastRenderer<'a> {
    pub roles: &'a RoleNameResolver,
    pub message: &'a str,
    pub sender_id: UserId,
    pub no_ping: bool,
}

#[async_trait]
impl Render for BroadcastRenderer<'_> {
    async fn render(&self, target: &ResolvedTarget) -> OutgoingMessage {
        let role_line = render_role_line(self.roles, target, self.no_ping).await;

        OutgoingMessage {
            content: join_lines(
                role_line,
                &[
                    self.message.to_string(),
                    format!("*Sent by <@{}>*", self.sender_id),
                ],
            ),
            buttons: Vec::new(),
            ping_roles: !self.no_ping,
        }
    }
}

/// Renders a poll copy with its current click count.
pub struct PollRenderer<'a> {
    pub roles: &'a RoleNameResolver,
    pub poll: &'a Poll,
}

impl PollRenderer<'_> {
    /// Vote button carrying the click count, then the passive clicker-list button.
    pub fn buttons(poll: &Poll) -> Vec<ButtonSpec> {
        // The count must survive truncation, so only the user-supplied label is cut.
        let count = format!(" ({} clicked)", poll.clicked_users.len());
        let label_chars = MAX_BUTTON_LABEL_CHARS.saturating_sub(count.chars().count());
        let vote_label = format!("{}{}", truncate_chars(&poll.button_label, label_chars), count);

        vec![
            ButtonSpec {
                custom_id: ButtonAction::Vote(poll.id.to_string()).custom_id(),
                label: vote_label,
                style: ButtonStyleKind::Primary,
            },
            ButtonSpec {
                custom_id: ButtonAction::ShowClickers(poll.id.to_string()).custom_id(),
                label: SHOW_CLICKERS_LABEL.to_string(),
                style: ButtonStyleKind::Secondary,
            },
        ]
    }
}

#[async_trait]
impl Render for PollRenderer<'_> {
    async fn render(&self, target: &ResolvedTarget) -> OutgoingMessage {
        let role_line = render_role_line(self.roles, target, self.poll.no_ping).await;

        OutgoingMessage {
            content: join_lines(
                role_line,
                &[
                    format!("📊 **{}**", self.poll.question),
                    format!("*Asked by <@{}>*", self.poll.sender_id),
                ],
            ),
            buttons: Self::buttons(self.poll),
            ping_roles: !self.poll.no_ping,
        }
    }
}

/// Formats the list of users who clicked a poll.
///
/// The result never exceeds `max_chars`; when the list does not fit, the tail
/// is dropped and replaced by a count of the users left out.
pub fn format_clickers(clicked_users: &[UserId], max_chars: usize) -> String {
    if clicked_users.is_empty() {
        return "Nobody has clicked yet.".to_string();
    }

    let mut content = format!("👥 **{} clicked:**", clicked_users.len());

    for (index, user_id) in clicked_users.iter().enumerate() {
        let line = format!("\n<@{}>", user_id);
        let remaining = clicked_users.len() - index;
        let more = format!("\n…and {} more", remaining);

        let is_last = remaining == 1;
        let reserved = if is_last { 0 } else { more.chars().count() };

        if content.chars().count() + line.chars().count() + reserved > max_chars {
            content.push_str(&more);
            break;
        }
        content.push_str(&line);
    }

    content
}
