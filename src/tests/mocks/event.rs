use derive_builder::Builder;

use crate::bot::event::{LabelAction, PullRequestComment, PullRequestLabelChange};
use crate::github::{GithubRepoName, GithubUser, PullRequestNumber};
use crate::tests::mocks::{default_pr_number, default_repo_name};

#[derive(Builder)]
#[builder(pattern = "owned")]
pub struct Comment {
    #[builder(default = "default_repo_name()")]
    repo: GithubRepoName,
    #[builder(default = "default_pr_number()")]
    pr_number: u64,
    #[builder(setter(into))]
    text: String,
    #[builder(default = "\"reviewer\".to_string()", setter(into))]
    author: String,
}

impl CommentBuilder {
    pub fn create(self) -> PullRequestComment {
        let Comment {
            repo,
            pr_number,
            text,
            author,
        } = self.build().unwrap();
        PullRequestComment {
            repository: repo,
            author: GithubUser { username: author },
            pr_number: PullRequestNumber(pr_number),
            text,
        }
    }
}

pub fn comment(text: &str) -> CommentBuilder {
    CommentBuilder::default().text(text)
}

#[derive(Builder)]
#[builder(pattern = "owned")]
pub struct LabelChange {
    #[builder(default = "default_repo_name()")]
    repo: GithubRepoName,
    #[builder(default = "default_pr_number()")]
    pr_number: u64,
    #[builder(setter(into))]
    label: String,
    action: LabelAction,
    #[builder(default = "\"octocat\".to_string()", setter(into))]
    actor: String,
}

impl LabelChangeBuilder {
    pub fn create(self) -> PullRequestLabelChange {
        let LabelChange {
            repo,
            pr_number,
            label,
            action,
            actor,
        } = self.build().unwrap();
        PullRequestLabelChange {
            repository: repo,
            action,
            actor: GithubUser { username: actor },
            label,
            pr_number: PullRequestNumber(pr_number),
        }
    }
}

pub fn label_change(label: &str, action: LabelAction) -> LabelChangeBuilder {
    LabelChangeBuilder::default().label(label).action(action)
}
