use anyhow::Context;
use async_trait::async_trait;
use octocrab::Octocrab;

use crate::bot::{LabelClient, PullRequestClient};
use crate::config::MergeStrategy;
use crate::github::api::operations::{merge_pull_request, remove_label, MergeError};
use crate::github::{CommitSha, GithubRepoName, PullRequest, PullRequestNumber};

#[derive(serde::Deserialize, Debug)]
struct LabelPayload {
    name: String,
}

#[derive(serde::Deserialize, Debug)]
struct PullRequestPayload {
    number: u64,
    #[serde(default)]
    labels: Vec<LabelPayload>,
}

/// Provides access to repositories using the GitHub API.
pub struct GithubRepositoryClient {
    client: Octocrab,
}

impl GithubRepositoryClient {
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Octocrab {
        &self.client
    }
}

#[async_trait]
impl LabelClient for GithubRepositoryClient {
    // https://docs.github.com/en/rest/issues/labels?apiVersion=2022-11-28#add-labels-to-an-issue
    async fn add_label(
        &self,
        repo: &GithubRepoName,
        pr: PullRequestNumber,
        label: &str,
    ) -> anyhow::Result<()> {
        let _: Vec<LabelPayload> = self
            .client
            .post(
                format!("/repos/{repo}/issues/{pr}/labels"),
                Some(&serde_json::json!({ "labels": [label] })),
            )
            .await
            .with_context(|| format!("Cannot add label {label} to {repo}#{pr}"))?;
        Ok(())
    }

    async fn remove_label(
        &self,
        repo: &GithubRepoName,
        pr: PullRequestNumber,
        label: &str,
    ) -> anyhow::Result<()> {
        remove_label(self, repo, pr, label).await
    }
}

#[async_trait]
impl PullRequestClient for GithubRepositoryClient {
    async fn get_pull_request(
        &self,
        repo: &GithubRepoName,
        pr: PullRequestNumber,
    ) -> anyhow::Result<PullRequest> {
        let response: PullRequestPayload = self
            .client
            .get(format!("/repos/{repo}/pulls/{pr}"), None::<&()>)
            .await
            .with_context(|| format!("Could not get PR {repo}#{pr}"))?;
        Ok(PullRequest {
            number: PullRequestNumber(response.number),
            labels: response
                .labels
                .into_iter()
                .map(|label| label.name)
                .collect(),
        })
    }

    async fn merge_pull_request(
        &self,
        repo: &GithubRepoName,
        pr: PullRequestNumber,
        strategy: &MergeStrategy,
    ) -> Result<CommitSha, MergeError> {
        merge_pull_request(self, repo, pr, strategy).await
    }
}
