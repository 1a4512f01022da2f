use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use thiserror::Error;

/// Role that a user needs to have to perform some action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Reviewer,
    Approver,
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Reviewer => f.write_str("reviewer"),
            Role::Approver => f.write_str("approver"),
        }
    }
}

/// Users listed in the OWNERS document of a repository.
///
/// Logins are compared exactly (case-sensitive). A user missing from a list does not have the
/// corresponding role.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PolicySet {
    approvers: HashSet<String>,
    reviewers: HashSet<String>,
}

impl PolicySet {
    pub fn new(approvers: HashSet<String>, reviewers: HashSet<String>) -> Self {
        Self {
            approvers,
            reviewers,
        }
    }

    pub fn reviewers(&self) -> &HashSet<String> {
        &self.reviewers
    }

    pub fn is_authorized(&self, username: &str, role: Role) -> bool {
        match role {
            Role::Reviewer => self.reviewers.contains(username),
            Role::Approver => self.approvers.contains(username),
        }
    }
}

/// Was the label change performed by the bot itself?
///
/// Any actor whose login contains `bot` (case-insensitive) is treated as a bot, so that
/// automation accounts never get their label changes reverted.
pub fn is_self_action(actor: &str, bot_identity: &str) -> bool {
    actor == bot_identity || actor.to_lowercase().contains("bot")
}

#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("OWNERS document not found at {0}")]
    NotFound(PathBuf),
    #[error("Cannot read OWNERS document {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot parse OWNERS document {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

/// Provides the approvers and reviewers of the repository.
pub trait PolicySource {
    fn load(&self) -> Result<PolicySet, PolicyError>;
}

#[derive(serde::Deserialize)]
struct OwnersDocument {
    #[serde(default)]
    approvers: Vec<String>,
    #[serde(default)]
    reviewers: Vec<String>,
}

/// Loads the policy from a YAML OWNERS file stored in the checked out repository.
pub struct FilePolicySource {
    path: PathBuf,
}

impl FilePolicySource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl PolicySource for FilePolicySource {
    fn load(&self) -> Result<PolicySet, PolicyError> {
        tracing::info!("Reading OWNERS from {}", self.path.display());

        let content = std::fs::read_to_string(&self.path).map_err(|error| {
            if error.kind() == std::io::ErrorKind::NotFound {
                PolicyError::NotFound(self.path.clone())
            } else {
                PolicyError::Io {
                    path: self.path.clone(),
                    source: error,
                }
            }
        })?;
        let document: OwnersDocument =
            serde_yaml::from_str(&content).map_err(|error| PolicyError::Parse {
                path: self.path.clone(),
                source: error,
            })?;

        let policy = PolicySet::new(
            document.approvers.into_iter().collect(),
            document.reviewers.into_iter().collect(),
        );
        tracing::debug!(
            "Loaded {} approver(s) and {} reviewer(s)",
            policy.approvers.len(),
            policy.reviewers.len()
        );
        Ok(policy)
    }
}
