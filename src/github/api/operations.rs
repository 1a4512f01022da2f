use http::StatusCode;
use thiserror::Error;

use crate::config::MergeStrategy;
use crate::github::api::client::GithubRepositoryClient;
use crate::github::{CommitSha, GithubRepoName, PullRequestNumber};

#[derive(Error, Debug)]
pub enum MergeError {
    #[error("Pull request not found")]
    NotFound,
    #[error("Pull request is not mergeable: {0}")]
    NotMergeable(String),
    #[error("Merge conflict")]
    Conflict,
    #[error("Unknown error ({status}): {text}")]
    Unknown { status: StatusCode, text: String },
    #[error("Network error: {0}")]
    NetworkError(#[from] octocrab::Error),
}

#[derive(serde::Serialize)]
struct MergeRequest<'a> {
    merge_method: &'a str,
}

#[derive(serde::Deserialize)]
struct MergeResponse {
    sha: String,
}

/// Merges a pull request with the given merge method.
///
/// Documentation: https://docs.github.com/en/rest/pulls/pulls?apiVersion=2022-11-28#merge-a-pull-request
pub async fn merge_pull_request(
    client: &GithubRepositoryClient,
    repo: &GithubRepoName,
    pr: PullRequestNumber,
    strategy: &MergeStrategy,
) -> Result<CommitSha, MergeError> {
    let octocrab = client.client();
    let merge_url = format!("/repos/{repo}/pulls/{pr}/merge");

    let request = MergeRequest {
        merge_method: strategy.as_str(),
    };
    let response = octocrab._put(merge_url, Some(&request)).await;

    match response {
        Ok(response) => {
            let status = response.status();
            let text = octocrab.body_to_string(response).await.unwrap_or_default();

            tracing::trace!("Response from merging {repo}#{pr}: {status} ({text})");

            match status {
                StatusCode::OK => {
                    let response: MergeResponse =
                        serde_json::from_str(&text).map_err(|error| MergeError::Unknown {
                            status,
                            text: format!("{error:?}"),
                        })?;
                    Ok(response.sha.into())
                }
                StatusCode::NOT_FOUND => Err(MergeError::NotFound),
                StatusCode::METHOD_NOT_ALLOWED => Err(MergeError::NotMergeable(text)),
                StatusCode::CONFLICT => Err(MergeError::Conflict),
                _ => Err(MergeError::Unknown { status, text }),
            }
        }
        Err(error) => {
            tracing::debug!("Merging {repo}#{pr} failed: {error:?}");
            Err(MergeError::NetworkError(error))
        }
    }
}

/// Removes a label from an issue or a pull request.
/// A label that is not present on the PR is not an error.
///
/// Documentation: https://docs.github.com/en/rest/issues/labels?apiVersion=2022-11-28#remove-a-label-from-an-issue
pub async fn remove_label(
    client: &GithubRepositoryClient,
    repo: &GithubRepoName,
    pr: PullRequestNumber,
    label: &str,
) -> anyhow::Result<()> {
    let octocrab = client.client();
    let url = format!("/repos/{repo}/issues/{pr}/labels/{label}");

    let response = octocrab._delete(url, None::<&()>).await?;
    let status = response.status();
    match status {
        StatusCode::OK => Ok(()),
        StatusCode::NOT_FOUND => {
            tracing::debug!("Label {label} is not present on {repo}#{pr}");
            Ok(())
        }
        _ => {
            let text = octocrab.body_to_string(response).await.unwrap_or_default();
            Err(anyhow::anyhow!(
                "Cannot remove label {label} from {repo}#{pr} ({status}): {text}"
            ))
        }
    }
}
