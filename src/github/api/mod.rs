use anyhow::Context;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use secrecy::{ExposeSecret, SecretString};

pub use client::GithubRepositoryClient;

pub mod client;
pub(crate) mod operations;

/// Creates an Octocrab client for the GitHub API located at `api_url`.
///
/// Without a token, the client can only read public data.
/// Failed requests are never resent, every call reaches GitHub at most once.
pub fn create_github_client(
    api_url: &str,
    token: Option<&SecretString>,
) -> anyhow::Result<Octocrab> {
    let mut builder = Octocrab::builder()
        .base_uri(api_url)
        .with_context(|| format!("Invalid GitHub API URL {api_url}"))?;
    builder.add_retry_config(RetryConfig::None);
    match token {
        Some(token) => {
            builder = builder.personal_token(token.expose_secret().clone());
        }
        None => {
            tracing::warn!("No auth token configured, GitHub calls will be unauthenticated");
        }
    }
    builder.build().context("Could not create Octocrab client")
}
