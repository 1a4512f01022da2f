//! Defines the parser for bot commands.

use crate::bot::command::{BotCommand, CommandKind};

const CANCEL_KEYWORD: &str = "cancel";

// The order of the commands in this list is the order in which they are executed.
const DEFAULT_COMMANDS: &[CommandKind] =
    &[CommandKind::Lgtm, CommandKind::Approve, CommandKind::Hold];

pub struct CommandParser {
    commands: Vec<CommandKind>,
}

impl CommandParser {
    pub fn new() -> Self {
        Self {
            commands: DEFAULT_COMMANDS.to_vec(),
        }
    }

    /// Parses bot commands from the given comment.
    ///
    /// A command has to be a standalone whitespace-separated word, so `random/lgtm` does not
    /// trigger anything. Each command is returned at most once. If the comment contains the
    /// word `cancel` anywhere, all of its commands are cancellations.
    pub fn parse_commands(&self, text: &str) -> Vec<BotCommand> {
        let text = text.to_lowercase();
        let words: Vec<&str> = text.split_whitespace().collect();
        let cancel = text.contains(CANCEL_KEYWORD);

        self.commands
            .iter()
            .filter(|kind| words.contains(&kind.token()))
            .map(|&kind| BotCommand { kind, cancel })
            .collect()
    }
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}
