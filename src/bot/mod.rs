use async_trait::async_trait;

use crate::config::{BotConfig, MergeStrategy};
use crate::github::{CommitSha, GithubRepoName, MergeError, PullRequest, PullRequestNumber};
use crate::permissions::PolicySource;

mod command;
pub mod event;
mod handlers;
mod process;

pub use command::{BotCommand, CommandKind, CommandParser};
pub use handlers::handle_bot_event;
pub use handlers::merge::{merge_decision, BlockReason, MergeDecision, MergeOutcome};
pub use process::process_event;

/// Changes labels of pull requests.
#[async_trait]
pub trait LabelClient {
    /// Add a label to a PR. Adding a label that is already present is not an error.
    async fn add_label(
        &self,
        repo: &GithubRepoName,
        pr: PullRequestNumber,
        label: &str,
    ) -> anyhow::Result<()>;

    /// Remove a label from a PR. Removing a label that is not present is not an error.
    async fn remove_label(
        &self,
        repo: &GithubRepoName,
        pr: PullRequestNumber,
        label: &str,
    ) -> anyhow::Result<()>;
}

/// Reads and merges pull requests.
#[async_trait]
pub trait PullRequestClient {
    /// Fetch the current state of a pull request.
    async fn get_pull_request(
        &self,
        repo: &GithubRepoName,
        pr: PullRequestNumber,
    ) -> anyhow::Result<PullRequest>;

    /// Merge a pull request. Returns the SHA of the merge commit.
    async fn merge_pull_request(
        &self,
        repo: &GithubRepoName,
        pr: PullRequestNumber,
        strategy: &MergeStrategy,
    ) -> Result<CommitSha, MergeError>;
}

/// Everything that a single invocation of the bot needs to handle an event.
pub struct BotContext<'a, Client> {
    pub config: &'a BotConfig,
    pub policy_source: &'a dyn PolicySource,
    pub client: &'a Client,
}

impl<'a, Client> BotContext<'a, Client> {
    pub fn new(
        config: &'a BotConfig,
        policy_source: &'a dyn PolicySource,
        client: &'a Client,
    ) -> Self {
        Self {
            config,
            policy_source,
            client,
        }
    }
}
