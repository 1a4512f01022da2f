use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use secrecy::SecretString;
use tracing_subscriber::EnvFilter;

use owners_bot::config::{parse_auto_merge_enabled, DEFAULT_API_URL, DEFAULT_POLICY_FILE_PATH};
use owners_bot::github::api::create_github_client;
use owners_bot::{
    process_event, BotConfig, BotContext, FilePolicySource, GithubRepositoryClient, MergeConfig,
    MergeStrategy,
};

#[derive(clap::Parser)]
struct Opts {
    /// Token used to authenticate against the GitHub API.
    #[arg(long, env = "AUTH_TOKEN", hide_env_values = true)]
    auth_token: Option<String>,

    /// Path to the OWNERS file, relative to the workspace root.
    #[arg(long, env = "POLICY_FILE_PATH", default_value = DEFAULT_POLICY_FILE_PATH)]
    policy_file_path: PathBuf,

    /// Path to the JSON document with the webhook event that should be handled.
    #[arg(long, env = "EVENT_FILE_PATH")]
    event_file_path: PathBuf,

    /// Root of the checked out repository.
    #[arg(long, env = "WORKSPACE_ROOT", default_value = ".")]
    workspace_root: PathBuf,

    /// Login of the bot, its own label changes are never reverted.
    #[arg(long, env = "ACTOR_IDENTITY", default_value = "")]
    actor_identity: String,

    /// Merge method used when a PR is merged (merge, squash or rebase).
    #[arg(long, env = "MERGE_STRATEGY", default_value = "merge")]
    merge_strategy: String,

    /// Set to `false` to disable merging of approved PRs.
    #[arg(long, env = "AUTO_MERGE_ENABLED", default_value = "true")]
    auto_merge_enabled: String,

    /// Base URL of the GitHub API.
    #[arg(long, env = "API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,
}

impl From<Opts> for BotConfig {
    fn from(opts: Opts) -> Self {
        BotConfig {
            auth_token: opts.auth_token.map(SecretString::new),
            api_url: opts.api_url,
            event_file_path: opts.event_file_path,
            workspace_root: opts.workspace_root,
            policy_file_path: opts.policy_file_path,
            actor_identity: opts.actor_identity,
            merge: MergeConfig {
                strategy: MergeStrategy::new(&opts.merge_strategy),
                auto_merge_enabled: parse_auto_merge_enabled(&opts.auto_merge_enabled),
            },
        }
    }
}

fn try_main(config: BotConfig) -> anyhow::Result<()> {
    if !config.merge.strategy.is_known() {
        tracing::warn!(
            "Unknown merge strategy `{}`, expected one of {:?}",
            config.merge.strategy,
            MergeStrategy::KNOWN
        );
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Cannot build tokio runtime")?;

    runtime.block_on(async {
        let client = GithubRepositoryClient::new(create_github_client(
            &config.api_url,
            config.auth_token.as_ref(),
        )?);
        let policy_source = FilePolicySource::new(config.policy_path());
        process_event(&BotContext::new(&config, &policy_source, &client)).await
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let opts = Opts::parse();
    if let Err(error) = try_main(opts.into()) {
        eprintln!("Error: {error:?}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use owners_bot::BotConfig;

    use super::Opts;

    fn parse(args: &[&str]) -> Result<Opts, clap::Error> {
        for var in [
            "EVENT_FILE_PATH",
            "MERGE_STRATEGY",
            "AUTO_MERGE_ENABLED",
            "POLICY_FILE_PATH",
            "WORKSPACE_ROOT",
        ] {
            std::env::remove_var(var);
        }
        Opts::try_parse_from(std::iter::once("owners-bot").chain(args.iter().copied()))
    }

    #[test]
    fn event_file_path_is_required() {
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn defaults() {
        let config = BotConfig::from(parse(&["--event-file-path", "event.json"]).unwrap());
        assert_eq!(config.event_file_path.to_str(), Some("event.json"));
        assert_eq!(config.merge.strategy.as_str(), "merge");
        assert!(config.merge.auto_merge_enabled);
        assert_eq!(config.policy_path(), std::path::Path::new(".").join("OWNERS"));
    }

    #[test]
    fn auto_merge_can_be_disabled() {
        let config = BotConfig::from(
            parse(&[
                "--event-file-path",
                "event.json",
                "--auto-merge-enabled",
                "false",
                "--merge-strategy",
                "squash",
            ])
            .unwrap(),
        );
        assert!(!config.merge.auto_merge_enabled);
        assert_eq!(config.merge.strategy.as_str(), "squash");
    }
}
