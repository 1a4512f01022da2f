use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::bot::{LabelClient, PullRequestClient};
use crate::config::MergeStrategy;
use crate::github::{CommitSha, GithubRepoName, MergeError, PullRequest, PullRequestNumber};

/// A call performed by the bot against GitHub.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClientCall {
    AddLabel { pr: u64, label: String },
    RemoveLabel { pr: u64, label: String },
    GetPullRequest { pr: u64 },
    Merge { pr: u64, strategy: String },
}

impl ClientCall {
    pub fn add_label(pr: u64, label: &str) -> Self {
        Self::AddLabel {
            pr,
            label: label.to_string(),
        }
    }

    pub fn remove_label(pr: u64, label: &str) -> Self {
        Self::RemoveLabel {
            pr,
            label: label.to_string(),
        }
    }

    pub fn get_pull_request(pr: u64) -> Self {
        Self::GetPullRequest { pr }
    }

    pub fn merge(pr: u64, strategy: &str) -> Self {
        Self::Merge {
            pr,
            strategy: strategy.to_string(),
        }
    }
}

type MergeFn = Box<dyn Fn() -> Result<CommitSha, MergeError> + Send + Sync>;

/// In-memory GitHub that remembers PR labels and records every call made against it.
pub struct TestRepositoryClient {
    labels: Mutex<HashMap<u64, HashSet<String>>>,
    calls: Mutex<Vec<ClientCall>>,
    failing_labels: Mutex<HashSet<String>>,
    merge_fn: Mutex<MergeFn>,
}

impl Default for TestRepositoryClient {
    fn default() -> Self {
        Self {
            labels: Default::default(),
            calls: Default::default(),
            failing_labels: Default::default(),
            merge_fn: Mutex::new(Box::new(|| Ok(CommitSha("sha-merged".to_string())))),
        }
    }
}

impl TestRepositoryClient {
    // Setters
    pub fn with_labels(self, pr: u64, labels: &[&str]) -> Self {
        self.labels
            .lock()
            .unwrap()
            .entry(pr)
            .or_default()
            .extend(labels.iter().map(|label| label.to_string()));
        self
    }

    /// Label calls with the given label will fail.
    pub fn fail_label(&self, label: &str) {
        self.failing_labels
            .lock()
            .unwrap()
            .insert(label.to_string());
    }

    pub fn set_merge_fn<F: Fn() -> Result<CommitSha, MergeError> + Send + Sync + 'static>(
        &self,
        f: F,
    ) {
        *self.merge_fn.lock().unwrap() = Box::new(f);
    }

    // Getters
    pub fn has_label(&self, pr: u64, label: &str) -> bool {
        self.labels
            .lock()
            .unwrap()
            .get(&pr)
            .is_some_and(|labels| labels.contains(label))
    }

    pub fn added_labels(&self, pr_number: u64) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter_map(|call| match call {
                ClientCall::AddLabel { pr, label } if *pr == pr_number => Some(label.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn merge_calls(&self) -> Vec<(u64, String)> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter_map(|call| match call {
                ClientCall::Merge { pr, strategy } => Some((*pr, strategy.clone())),
                _ => None,
            })
            .collect()
    }

    // Checks
    pub fn check_calls(&self, calls: &[ClientCall]) {
        assert_eq!(self.calls.lock().unwrap().as_slice(), calls);
    }

    fn record(&self, call: ClientCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn check_failure(&self, label: &str) -> anyhow::Result<()> {
        if self.failing_labels.lock().unwrap().contains(label) {
            return Err(anyhow::anyhow!("Label {label} cannot be changed"));
        }
        Ok(())
    }
}

#[async_trait]
impl LabelClient for TestRepositoryClient {
    async fn add_label(
        &self,
        _repo: &GithubRepoName,
        pr: PullRequestNumber,
        label: &str,
    ) -> anyhow::Result<()> {
        self.record(ClientCall::add_label(pr.0, label));
        self.check_failure(label)?;
        self.labels
            .lock()
            .unwrap()
            .entry(pr.0)
            .or_default()
            .insert(label.to_string());
        Ok(())
    }

    async fn remove_label(
        &self,
        _repo: &GithubRepoName,
        pr: PullRequestNumber,
        label: &str,
    ) -> anyhow::Result<()> {
        self.record(ClientCall::remove_label(pr.0, label));
        self.check_failure(label)?;
        if let Some(labels) = self.labels.lock().unwrap().get_mut(&pr.0) {
            labels.remove(label);
        }
        Ok(())
    }
}

#[async_trait]
impl PullRequestClient for TestRepositoryClient {
    async fn get_pull_request(
        &self,
        _repo: &GithubRepoName,
        pr: PullRequestNumber,
    ) -> anyhow::Result<PullRequest> {
        self.record(ClientCall::get_pull_request(pr.0));
        Ok(PullRequest {
            number: pr,
            labels: self
                .labels
                .lock()
                .unwrap()
                .get(&pr.0)
                .cloned()
                .unwrap_or_default(),
        })
    }

    async fn merge_pull_request(
        &self,
        _repo: &GithubRepoName,
        pr: PullRequestNumber,
        strategy: &MergeStrategy,
    ) -> Result<CommitSha, MergeError> {
        self.record(ClientCall::merge(pr.0, strategy.as_str()));
        (self.merge_fn.lock().unwrap())()
    }
}
