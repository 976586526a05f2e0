//! Inbound event kinds.
//!
//! Slash command names and button custom IDs are parsed into these tagged variants
//! at the Discord boundary so handler logic never string-matches raw IDs.

use std::fmt;

/// Category targeted by a broadcast. `ask` always posts to [`ANNOUNCE`].
pub const ANNOUNCE: &str = "announce";
pub const START: &str = "start";
pub const MATCH_ID: &str = "matchid";

/// Categories offered as choices on the `broadcast` command.
pub const KNOWN_CATEGORIES: [&str; 3] = [ANNOUNCE, START, MATCH_ID];

/// Prefix distinguishing the passive "show who clicked" button from the vote button.
const SHOW_CLICKERS_PREFIX: &str = "show_";

/// Prefix every poll ID starts with.
pub const POLL_ID_PREFIX: &str = "poll_";

/// Slash commands understood by the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// Send a message to every channel of a category.
    Broadcast,
    /// Send a poll with a click button to every announce channel.
    Ask,
    /// List configured channels.
    ListChannels,
    /// List allowed users.
    ListUsers,
    /// Report whether the caller is authorized.
    TestAccess,
}

impl CommandKind {
    pub const ALL: [CommandKind; 5] = [
        CommandKind::Broadcast,
        CommandKind::Ask,
        CommandKind::ListChannels,
        CommandKind::ListUsers,
        CommandKind::TestAccess,
    ];

    /// Registered slash command name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Broadcast => "broadcast",
            Self::Ask => "ask",
            Self::ListChannels => "channels",
            Self::ListUsers => "users",
            Self::TestAccess => "test",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }

    /// Messaging commands can never be exempted from the allow-list.
    pub fn is_messaging(self) -> bool {
        matches!(self, Self::Broadcast | Self::Ask)
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Button press parsed from a component custom ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonAction {
    /// Custom ID `<pollId>`: record a click.
    Vote(String),
    /// Custom ID `show_<pollId>`: list who clicked, read-only.
    ShowClickers(String),
}

impl ButtonAction {
    /// Parses a component custom ID.
    ///
    /// # Returns
    /// - `Some(ButtonAction)` - The ID belongs to a poll button
    /// - `None` - The ID is not one of ours
    pub fn parse(custom_id: &str) -> Option<Self> {
        if let Some(poll_id) = custom_id.strip_prefix(SHOW_CLICKERS_PREFIX) {
            return poll_id
                .starts_with(POLL_ID_PREFIX)
                .then(|| Self::ShowClickers(poll_id.to_string()));
        }

        custom_id
            .starts_with(POLL_ID_PREFIX)
            .then(|| Self::Vote(custom_id.to_string()))
    }

    pub fn custom_id(&self) -> String {
        match self {
            Self::Vote(poll_id) => poll_id.clone(),
            Self::ShowClickers(poll_id) => format!("{}{}", SHOW_CLICKERS_PREFIX, poll_id),
        }
    }

    pub fn poll_id(&self) -> &str {
        match self {
            Self::Vote(poll_id) | Self::ShowClickers(poll_id) => poll_id,
        }
    }
}
