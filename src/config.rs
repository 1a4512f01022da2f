use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use secrecy::SecretString;

pub const DEFAULT_POLICY_FILE_PATH: &str = "OWNERS";
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Merge method sent to the code host when a pull request is merged.
///
/// The value is passed through verbatim, unknown methods are left for the code host to reject.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergeStrategy(String);

impl MergeStrategy {
    pub const KNOWN: [&'static str; 3] = ["merge", "squash", "rebase"];

    pub fn new(strategy: &str) -> Self {
        Self(strategy.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_known(&self) -> bool {
        Self::KNOWN.contains(&self.0.as_str())
    }
}

impl Default for MergeStrategy {
    fn default() -> Self {
        Self::new("merge")
    }
}

impl Display for MergeStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergeConfig {
    pub strategy: MergeStrategy,
    pub auto_merge_enabled: bool,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            strategy: MergeStrategy::default(),
            auto_merge_enabled: true,
        }
    }
}

/// Configuration of a single bot invocation.
/// It is created once at startup and never modified afterwards.
#[derive(Debug)]
pub struct BotConfig {
    pub auth_token: Option<SecretString>,
    pub api_url: String,
    pub event_file_path: PathBuf,
    pub workspace_root: PathBuf,
    pub policy_file_path: PathBuf,
    /// Login of the bot itself, used to recognize its own label changes.
    pub actor_identity: String,
    pub merge: MergeConfig,
}

impl BotConfig {
    /// Location of the OWNERS document, resolved against the workspace root.
    pub fn policy_path(&self) -> PathBuf {
        self.workspace_root.join(&self.policy_file_path)
    }
}

/// Only the exact string `false` disables auto-merge.
pub fn parse_auto_merge_enabled(value: &str) -> bool {
    value != "false"
}
