mod parser;

use std::fmt::{Display, Formatter};

use crate::github::{LabelModification, ProtectedLabel};
pub use parser::CommandParser;

/// Command that can be issued in a PR comment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandKind {
    /// `/lgtm`, toggles the `lgtm` label.
    Lgtm,
    /// `/approve`, toggles the `approved` label.
    Approve,
    /// `/hold`, toggles the `hold` label.
    Hold,
}

impl CommandKind {
    pub fn token(&self) -> &'static str {
        match self {
            Self::Lgtm => "/lgtm",
            Self::Approve => "/approve",
            Self::Hold => "/hold",
        }
    }

    pub fn label(&self) -> ProtectedLabel {
        match self {
            Self::Lgtm => ProtectedLabel::Lgtm,
            Self::Approve => ProtectedLabel::Approved,
            Self::Hold => ProtectedLabel::Hold,
        }
    }
}

/// Bot command specified by a user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BotCommand {
    pub kind: CommandKind,
    /// Remove the label instead of adding it.
    pub cancel: bool,
}

impl BotCommand {
    pub fn label_modification(&self) -> LabelModification {
        let label = self.kind.label();
        if self.cancel {
            LabelModification::Remove(label)
        } else {
            LabelModification::Add(label)
        }
    }
}

impl Display for BotCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.kind.token())?;
        if self.cancel {
            f.write_str(" cancel")?;
        }
        Ok(())
    }
}
