use crate::bot::command::CommandParser;
use crate::bot::event::PullRequestComment;
use crate::bot::handlers::labels::apply_label_modification;
use crate::bot::handlers::merge::merge_if_ready;
use crate::bot::{LabelClient, PullRequestClient};
use crate::config::MergeConfig;
use crate::github::{LabelModification, ProtectedLabel};
use crate::permissions::PolicySet;

/// Executes the commands found in a PR comment.
///
/// Every command is authorized separately, an unauthorized command does not stop the others.
/// Once all commands were executed, the merge gate is consulted if `lgtm` or `approved` was
/// added by this comment.
pub(super) async fn handle_comment<Client: LabelClient + PullRequestClient>(
    client: &Client,
    policy: &PolicySet,
    merge_config: &MergeConfig,
    comment: &PullRequestComment,
) -> anyhow::Result<()> {
    let commands = CommandParser::new().parse_commands(&comment.text);

    tracing::debug!("Commands: {commands:?}");
    tracing::trace!("Text: {}", comment.text);

    let author = &comment.author.username;
    let mut ready_for_merge = false;
    let mut failed = Vec::new();
    for command in commands {
        let role = command.kind.label().required_role();
        if !policy.is_authorized(author, role) {
            tracing::info!("User {author} is not in the {role}s list, ignoring `{command}`");
            continue;
        }

        let modification = command.label_modification();
        match apply_label_modification(client, &comment.repository, comment.pr_number, modification)
            .await
        {
            Ok(()) => {
                if matches!(
                    modification,
                    LabelModification::Add(ProtectedLabel::Lgtm | ProtectedLabel::Approved)
                ) {
                    ready_for_merge = true;
                }
            }
            Err(error) => {
                tracing::error!("Cannot execute `{command}`: {error:?}");
                failed.push(command);
            }
        }
    }

    if ready_for_merge && merge_config.auto_merge_enabled {
        merge_if_ready(client, &comment.repository, comment.pr_number, merge_config).await?;
    }

    if !failed.is_empty() {
        let failed = failed
            .iter()
            .map(|command| format!("`{command}`"))
            .collect::<Vec<_>>()
            .join(", ");
        return Err(anyhow::anyhow!("Failed to execute command(s) {failed}"));
    }
    Ok(())
}
