use crate::github::{GithubRepoName, GithubUser, PullRequestNumber};

/// A classified incoming event.
#[derive(Debug)]
pub enum BotEvent {
    /// A comment was posted on a pull request (or issue).
    Comment(PullRequestComment),
    /// A label was added to or removed from a pull request.
    Label(PullRequestLabelChange),
    /// The event is irrelevant for the bot or some required field is missing.
    Unrecognized { reason: String },
}

#[derive(Clone, Debug)]
pub struct PullRequestComment {
    pub repository: GithubRepoName,
    pub author: GithubUser,
    pub pr_number: PullRequestNumber,
    pub text: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelAction {
    Labeled,
    Unlabeled,
}

impl LabelAction {
    pub fn from_action(action: &str) -> Option<Self> {
        match action {
            "labeled" => Some(Self::Labeled),
            "unlabeled" => Some(Self::Unlabeled),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PullRequestLabelChange {
    pub repository: GithubRepoName,
    pub action: LabelAction,
    pub actor: GithubUser,
    pub label: String,
    pub pr_number: PullRequestNumber,
}
