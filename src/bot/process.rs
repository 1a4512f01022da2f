use anyhow::Context;

use crate::bot::{handle_bot_event, BotContext, LabelClient, PullRequestClient};
use crate::github::parse_webhook_event;

/// Handles the single event of this invocation, read from the configured event file.
pub async fn process_event<Client: LabelClient + PullRequestClient>(
    ctx: &BotContext<'_, Client>,
) -> anyhow::Result<()> {
    let path = &ctx.config.event_file_path;
    tracing::debug!("Reading event from {}", path.display());

    let body = std::fs::read(path)
        .with_context(|| format!("Cannot read event file {}", path.display()))?;
    let event = parse_webhook_event(&body)?;
    handle_bot_event(event, ctx).await
}
