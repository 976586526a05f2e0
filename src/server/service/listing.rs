//! Read-only listings for the `channels` and `users` commands.

use std::fmt::Write;

use crate::server::{
    model::{access::AllowedUser, channel::ChannelDocument},
    util::parse::truncate_chars,
};

/// Longest listing reply, below Discord's 2000 character message limit.
const MAX_LISTING_CHARS: usize = 1900;

/// Lists configured channels per guild and category.
pub fn format_channel_list(document: &ChannelDocument) -> String {
    if document.guilds.is_empty() {
        return "No channel is configured.".to_string();
    }

    let mut content = String::from("📋 **Configured channels**");
    for (guild_id, categories) in &document.guilds {
        let _ = write!(content, "\n\n**Server {}**", guild_id);
        for (category, channels) in categories {
            let _ = write!(content, "\n`{}`:", category);
            if channels.is_empty() {
                content.push_str(" none");
            }
            for channel in channels {
                let _ = write!(
                    content,
                    "\n• <#{}> ({} role ping(s))",
                    channel.id,
                    channel.ping_role_ids.len()
                );
            }
        }
    }

    truncate_chars(&content, MAX_LISTING_CHARS)
}

/// Lists the users on the allow-list.
pub fn format_user_list(users: &[AllowedUser]) -> String {
    if users.is_empty() {
        return "No user is allowed to broadcast.".to_string();
    }

    let mut content = format!("👤 **{} allowed user(s)**", users.len());
    for user in users {
        match &user.display_name {
            Some(name) => {
                let _ = write!(content, "\n• <@{}> ({})", user.id, name);
            }
            None => {
                let _ = write!(content, "\n• <@{}>", user.id);
            }
        }
    }

    truncate_chars(&content, MAX_LISTING_CHARS)
}
