//! This is the library of the OWNERS bot.
pub mod bot;
pub mod config;
pub mod github;
pub mod permissions;
pub mod utils;

pub use bot::{handle_bot_event, process_event, BotContext, LabelClient, PullRequestClient};
pub use config::{BotConfig, MergeConfig, MergeStrategy};
pub use github::api::GithubRepositoryClient;
pub use permissions::{FilePolicySource, PolicySet, PolicySource};

#[cfg(test)]
mod tests;
