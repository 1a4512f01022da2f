use std::collections::HashSet;

use crate::bot::PullRequestClient;
use crate::config::MergeConfig;
use crate::github::{CommitSha, GithubRepoName, MergeError, ProtectedLabel, PullRequestNumber};

/// Labels that have to be present before a PR is merged.
const REQUIRED_LABELS: [ProtectedLabel; 2] = [ProtectedLabel::Lgtm, ProtectedLabel::Approved];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockReason {
    /// Auto-merge is disabled in the configuration.
    Disabled,
    MissingLabel(ProtectedLabel),
    /// The PR has the `hold` label.
    OnHold,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MergeDecision {
    Merge,
    Blocked(BlockReason),
}

/// Decides whether a PR with the given labels should be merged.
pub fn merge_decision(labels: &HashSet<String>, config: &MergeConfig) -> MergeDecision {
    if !config.auto_merge_enabled {
        return MergeDecision::Blocked(BlockReason::Disabled);
    }
    if let Some(missing) = REQUIRED_LABELS
        .into_iter()
        .find(|label| !labels.contains(label.name()))
    {
        return MergeDecision::Blocked(BlockReason::MissingLabel(missing));
    }
    if labels.contains(ProtectedLabel::Hold.name()) {
        return MergeDecision::Blocked(BlockReason::OnHold);
    }
    MergeDecision::Merge
}

#[derive(Debug)]
pub enum MergeOutcome {
    /// The gate did not allow the merge.
    Skipped(BlockReason),
    Merged(CommitSha),
    /// GitHub refused to merge the PR.
    Rejected(MergeError),
}

/// Merges the PR if its current labels allow it.
///
/// The labels are always fetched fresh from GitHub. A refused merge is only reported, a
/// transport failure is returned as an error.
pub async fn merge_if_ready<Client: PullRequestClient>(
    client: &Client,
    repo: &GithubRepoName,
    pr_number: PullRequestNumber,
    config: &MergeConfig,
) -> anyhow::Result<MergeOutcome> {
    if !config.auto_merge_enabled {
        tracing::debug!("Auto-merge is disabled");
        return Ok(MergeOutcome::Skipped(BlockReason::Disabled));
    }

    let pr = client.get_pull_request(repo, pr_number).await?;
    match merge_decision(&pr.labels, config) {
        MergeDecision::Blocked(reason) => {
            tracing::info!("Not merging PR {pr_number}: {reason:?}");
            Ok(MergeOutcome::Skipped(reason))
        }
        MergeDecision::Merge => {
            tracing::info!(
                "Merging PR {pr_number} using strategy `{}`",
                config.strategy
            );
            match client
                .merge_pull_request(repo, pr_number, &config.strategy)
                .await
            {
                Ok(sha) => {
                    tracing::info!("PR {pr_number} was merged as {sha}");
                    Ok(MergeOutcome::Merged(sha))
                }
                Err(MergeError::NetworkError(error)) => Err(anyhow::anyhow!(
                    "Cannot merge PR {repo}#{pr_number}: {error:?}"
                )),
                Err(error) => {
                    tracing::warn!("PR {pr_number} could not be merged: {error}");
                    Ok(MergeOutcome::Rejected(error))
                }
            }
        }
    }
}
