use anyhow::Context;
use tracing::Instrument;

use crate::bot::event::BotEvent;
use crate::bot::handlers::comment::handle_comment;
use crate::bot::handlers::labels::handle_label_change;
use crate::bot::{BotContext, LabelClient, PullRequestClient};
use crate::utils::logging::LogError;

mod comment;
mod labels;
pub mod merge;

/// This function executes a single classified event.
/// Only comment events load the OWNERS policy, so a missing policy does not fail label events.
pub async fn handle_bot_event<Client: LabelClient + PullRequestClient>(
    event: BotEvent,
    ctx: &BotContext<'_, Client>,
) -> anyhow::Result<()> {
    match event {
        BotEvent::Comment(comment) => {
            let span = tracing::info_span!(
                "Comment",
                pr = format!("{}#{}", comment.repository, comment.pr_number),
                author = comment.author.username
            );
            let policy = ctx
                .policy_source
                .load()
                .context("Cannot load the OWNERS policy")?;
            let result = handle_comment(ctx.client, &policy, &ctx.config.merge, &comment)
                .instrument(span.clone())
                .await;
            if let Err(error) = result {
                span.log_error(&error);
                return Err(error);
            }
        }
        BotEvent::Label(change) => {
            let span = tracing::info_span!(
                "Label",
                pr = format!("{}#{}", change.repository, change.pr_number),
                label = change.label,
                actor = change.actor.username
            );
            let result = handle_label_change(ctx.client, &ctx.config.actor_identity, &change)
                .instrument(span.clone())
                .await;
            if let Err(error) = result {
                span.log_error(&error);
                return Err(error);
            }
        }
        BotEvent::Unrecognized { reason } => {
            tracing::info!("Ignoring event: {reason}");
        }
    }
    Ok(())
}
