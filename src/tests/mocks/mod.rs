use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::config::{BotConfig, MergeConfig, DEFAULT_API_URL};
use crate::github::GithubRepoName;
use crate::permissions::PolicySet;

mod client;
mod event;

pub use client::{ClientCall, TestRepositoryClient};
pub use event::{comment, label_change, CommentBuilder, LabelChangeBuilder};

/// Identity of the bot in tests. It intentionally does not contain `bot`, so that
/// tests can tell the exact identity match apart from the name heuristic.
pub const TEST_BOT_IDENTITY: &str = "owners-helper";

pub fn default_repo_name() -> GithubRepoName {
    GithubRepoName::new("test", "repo")
}

pub fn default_pr_number() -> u64 {
    42
}

/// `approver` is both an approver and a reviewer, `reviewer` is only a reviewer.
pub fn default_policy() -> PolicySet {
    PolicySet::new(
        HashSet::from(["approver".to_string()]),
        HashSet::from(["approver".to_string(), "reviewer".to_string()]),
    )
}

/// Configuration with the event file `event.json` and the OWNERS file `OWNERS`, both located
/// in `workspace`.
pub fn test_config(workspace: &Path, merge: MergeConfig) -> BotConfig {
    BotConfig {
        auth_token: None,
        api_url: DEFAULT_API_URL.to_string(),
        event_file_path: workspace.join("event.json"),
        workspace_root: workspace.to_path_buf(),
        policy_file_path: PathBuf::from("OWNERS"),
        actor_identity: TEST_BOT_IDENTITY.to_string(),
        merge,
    }
}
