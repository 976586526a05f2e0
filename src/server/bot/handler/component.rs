//! Button press handling for poll messages.

use serenity::all::{
    ComponentInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
    EditInteractionResponse,
};

use crate::server::{
    model::{command::ButtonAction, poll::PollId},
    state::BotState,
};

/// Handles a button press.
///
/// A vote is deferred privately because recording it rewrites every copy of the
/// poll. Listing clickers is read-only and answered immediately.
pub async fn handle_component(state: &BotState, ctx: Context, component: ComponentInteraction) {
    let Some(action) = ButtonAction::parse(&component.data.custom_id) else {
        tracing::debug!("Ignoring unknown component '{}'", component.data.custom_id);
        return;
    };

    let poll_id = PollId::from(action.poll_id());
    let user_id = component.user.id;

    match action {
        ButtonAction::Vote(_) => {
            if let Err(e) = component.defer_ephemeral(&ctx.http).await {
                tracing::error!("Failed to defer click on poll {}: {}", poll_id, e);
                return;
            }

            let reply = match state.polls.register_click(&poll_id, user_id).await {
                Ok(outcome) => {
                    if outcome.edits.failures > 0 {
                        tracing::warn!(
                            "Poll {} has {} cop(ies) that could not be updated",
                            poll_id,
                            outcome.edits.failures
                        );
                    }
                    format!(
                        "✅ Your click has been recorded ({} clicked so far).",
                        outcome.poll.clicked_users.len()
                    )
                }
                Err(e) => {
                    tracing::info!("Click by {} on poll {} rejected: {}", user_id, poll_id, e);
                    e.user_message().to_string()
                }
            };

            if let Err(e) = component
                .edit_response(&ctx.http, EditInteractionResponse::new().content(reply))
                .await
            {
                tracing::error!("Failed to reply to click on poll {}: {}", poll_id, e);
            }
        }
        ButtonAction::ShowClickers(_) => {
            let reply = match state.polls.show_clickers(&poll_id).await {
                Ok(list) => list,
                Err(e) => e.user_message().to_string(),
            };

            let response = CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content(reply)
                    .ephemeral(true),
            );
            if let Err(e) = component.create_response(&ctx.http, response).await {
                tracing::error!("Failed to list clickers of poll {}: {}", poll_id, e);
            }
        }
    }
}
