//! Slash command definitions.

use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption};

use crate::server::model::command::{CommandKind, KNOWN_CATEGORIES};

pub const OPTION_CATEGORY: &str = "category";
pub const OPTION_MESSAGE: &str = "message";
pub const OPTION_QUESTION: &str = "question";
pub const OPTION_BUTTON_LABEL: &str = "button_label";
pub const OPTION_NO_PING: &str = "no_ping";

/// Cap on free text so a rendered message stays under Discord's 2000 characters.
pub const MAX_TEXT_CHARS: u16 = 1800;

/// Every command the bot registers.
pub fn all() -> Vec<CreateCommand> {
    CommandKind::ALL.into_iter().map(command).collect()
}

fn no_ping_option() -> CreateCommandOption {
    CreateCommandOption::new(
        CommandOptionType::Boolean,
        OPTION_NO_PING,
        "Show role names instead of pinging the roles",
    )
    .required(false)
}

fn command(kind: CommandKind) -> CreateCommand {
    let base = CreateCommand::new(kind.name());

    match kind {
        CommandKind::Broadcast => {
            let category = KNOWN_CATEGORIES.into_iter().fold(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    OPTION_CATEGORY,
                    "Channel category to send to",
                )
                .required(true),
                |option, name| option.add_string_choice(name, name),
            );

            base.description("Send a message to every configured channel of a category")
                .add_option(category)
                .add_option(
                    CreateCommandOption::new(
                        CommandOptionType::String,
                        OPTION_MESSAGE,
                        "The message to send",
                    )
                    .required(true)
                    .max_length(MAX_TEXT_CHARS),
                )
                .add_option(no_ping_option())
        }
        CommandKind::Ask => base
            .description("Send a poll with a click button to every announce channel")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    OPTION_QUESTION,
                    "The question to ask",
                )
                .required(true)
                .max_length(MAX_TEXT_CHARS),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    OPTION_BUTTON_LABEL,
                    "Text of the click button",
                )
                .required(true)
                .max_length(60),
            )
            .add_option(no_ping_option()),
        CommandKind::ListChannels => base.description("List the configured channels"),
        CommandKind::ListUsers => base.description("List the users allowed to broadcast"),
        CommandKind::TestAccess => base.description("Check whether you may use the bot"),
    }
}
