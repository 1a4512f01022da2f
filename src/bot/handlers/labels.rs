use crate::bot::event::{LabelAction, PullRequestLabelChange};
use crate::bot::LabelClient;
use crate::github::{GithubRepoName, LabelModification, ProtectedLabel, PullRequestNumber};
use crate::permissions::is_self_action;

/// Performs a single label modification on the given PR.
pub(super) async fn apply_label_modification<Client: LabelClient>(
    client: &Client,
    repo: &GithubRepoName,
    pr: PullRequestNumber,
    modification: LabelModification,
) -> anyhow::Result<()> {
    match modification {
        LabelModification::Add(label) => {
            tracing::info!("Adding label {label}");
            client.add_label(repo, pr, label.name()).await
        }
        LabelModification::Remove(label) => {
            tracing::info!("Removing label {label}");
            client.remove_label(repo, pr, label.name()).await
        }
    }
}

/// Reverts a direct change of a protected label.
///
/// Protected labels may only be changed by the bot in response to comment commands, so any
/// other change is undone: an added label is removed and a removed label is added back.
/// Changes made by the bot itself are left alone, otherwise every revert would trigger another
/// one.
pub(super) async fn handle_label_change<Client: LabelClient>(
    client: &Client,
    bot_identity: &str,
    change: &PullRequestLabelChange,
) -> anyhow::Result<()> {
    let actor = &change.actor.username;
    if is_self_action(actor, bot_identity) {
        tracing::debug!("Label change by bot {actor} itself, skipping protection check");
        return Ok(());
    }
    let Some(label) = ProtectedLabel::from_name(&change.label) else {
        tracing::debug!("Label '{}' is not protected, ignoring", change.label);
        return Ok(());
    };

    let modification = match change.action {
        LabelAction::Labeled => {
            tracing::info!("Unauthorized addition of '{label}' label by {actor}, removing it");
            LabelModification::Remove(label)
        }
        LabelAction::Unlabeled => {
            tracing::info!("Unauthorized removal of '{label}' label by {actor}, adding it back");
            LabelModification::Add(label)
        }
    };
    apply_label_modification(client, &change.repository, change.pr_number, modification).await
}
