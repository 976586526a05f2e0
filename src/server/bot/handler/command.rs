//! Slash command handling.
//!
//! Every command goes through the access gate first. A rejected caller gets an
//! immediate private reply and nothing else happens. Accepted commands are
//! deferred privately (a fanout can take longer than Discord's 3 second reply
//! window) and the outcome is written into the deferred reply.

use chrono::Utc;
use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
    EditInteractionResponse, ResolvedOption, ResolvedValue,
};

use crate::server::{
    bot::commands::{
        OPTION_BUTTON_LABEL, OPTION_CATEGORY, OPTION_MESSAGE, OPTION_NO_PING, OPTION_QUESTION,
    },
    error::{internal::InternalError, AppError},
    model::{
        command::{CommandKind, ANNOUNCE},
        poll::CreatePollParam,
    },
    service::{
        broadcast::BroadcastParam,
        listing::{format_channel_list, format_user_list},
        target::TargetResolver,
    },
    state::BotState,
};

/// Handles a slash command invocation.
pub async fn handle_command(state: &BotState, ctx: Context, command: CommandInteraction) {
    let Some(kind) = CommandKind::from_name(&command.data.name) else {
        tracing::warn!("Received unknown command '{}'", command.data.name);
        return;
    };

    let user_id = command.user.id;

    if let Err(e) = state.gate.check(kind, user_id) {
        tracing::info!("Rejected /{} from user {}: {}", kind, user_id, e);

        let response = CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .content(e.user_message())
                .ephemeral(true),
        );
        if let Err(e) = command.create_response(&ctx.http, response).await {
            tracing::error!("Failed to send rejection for /{}: {}", kind, e);
        }
        return;
    }

    if let Err(e) = command.defer_ephemeral(&ctx.http).await {
        tracing::error!("Failed to defer /{}: {}", kind, e);
        return;
    }

    let reply = match run_command(state, kind, &command).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::error!("/{} from user {} failed: {}", kind, user_id, e);
            e.user_message().to_string()
        }
    };

    if let Err(e) = command
        .edit_response(&ctx.http, EditInteractionResponse::new().content(reply))
        .await
    {
        tracing::error!("Failed to reply to /{}: {}", kind, e);
    }
}

/// Owned command input, parsed before any await so no interaction borrow is held.
enum Request {
    Broadcast(BroadcastParam),
    Ask(CreatePollParam),
    ListChannels,
    ListUsers,
    TestAccess,
}

fn parse_request(kind: CommandKind, command: &CommandInteraction) -> Result<Request, AppError> {
    let options = command.data.options();
    let sender_id = command.user.id;

    let request = match kind {
        CommandKind::Broadcast => Request::Broadcast(BroadcastParam {
            category: string_option(&options, OPTION_CATEGORY)?,
            message: string_option(&options, OPTION_MESSAGE)?,
            no_ping: bool_option(&options, OPTION_NO_PING),
            sender_id,
        }),
        CommandKind::Ask => Request::Ask(CreatePollParam {
            question: string_option(&options, OPTION_QUESTION)?,
            button_label: string_option(&options, OPTION_BUTTON_LABEL)?,
            no_ping: bool_option(&options, OPTION_NO_PING),
            sender_id,
        }),
        CommandKind::ListChannels => Request::ListChannels,
        CommandKind::ListUsers => Request::ListUsers,
        CommandKind::TestAccess => Request::TestAccess,
    };

    Ok(request)
}

async fn run_command(
    state: &BotState,
    kind: CommandKind,
    command: &CommandInteraction,
) -> Result<String, AppError> {
    let request = parse_request(kind, command)?;

    match request {
        Request::Broadcast(param) => {
            let report = state.broadcasts.broadcast(&param).await;
            if report.attempted() == 0 {
                return Ok(format!(
                    "⚠️ No channel is configured for category `{}`.",
                    param.category
                ));
            }

            Ok(report.summary())
        }
        Request::Ask(param) => {
            let targets = TargetResolver::new(&state.channels).resolve_all(ANNOUNCE);
            if targets.is_empty() {
                return Ok(format!(
                    "⚠️ No channel is configured for category `{}`.",
                    ANNOUNCE
                ));
            }

            let (_, report) = state.polls.create_poll(param, &targets, Utc::now()).await?;

            Ok(report.summary())
        }
        Request::ListChannels => Ok(format_channel_list(&state.channels)),
        Request::ListUsers => Ok(format_user_list(state.gate.users())),
        Request::TestAccess => {
            if state.gate.is_authorized(command.user.id) {
                Ok("✅ You are allowed to use this bot.".to_string())
            } else {
                Ok("⛔ You are not allowed to use this bot.".to_string())
            }
        }
    }
}

fn string_option(options: &[ResolvedOption<'_>], name: &'static str) -> Result<String, AppError> {
    options
        .iter()
        .find_map(|option| match option.value {
            ResolvedValue::String(value) if option.name == name => Some(value.to_string()),
            _ => None,
        })
        .ok_or_else(|| InternalError::MissingInteractionField(name).into())
}

fn bool_option(options: &[ResolvedOption<'_>], name: &str) -> bool {
    options
        .iter()
        .find_map(|option| match option.value {
            ResolvedValue::Boolean(value) if option.name == name => Some(value),
            _ => None,
        })
        .unwrap_or(false)
}
