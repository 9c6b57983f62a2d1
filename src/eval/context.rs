use crate::parse::{self, Tool};

/// Context for evaluating a single command.
#[derive(Debug)]
pub struct CommandContext<'a> {
    /// The trimmed command text, used for regex tiers and echoed in rationales.
    pub raw: &'a str,
    /// Which tool the command invokes.
    pub tool: Tool,
    /// Command text after the tool name and leading global options.
    pub subcommand: String,
    /// `subcommand` split on whitespace.
    pub tokens: Vec<String>,
}

impl<'a> CommandContext<'a> {
    /// Build a CommandContext from a raw command string.
    pub fn from_command(raw: &'a str) -> Self {
        let raw = raw.trim();
        let classified = parse::classify(raw);
        Self {
            raw,
            tool: classified.tool,
            subcommand: classified.subcommand,
            tokens: classified.tokens,
        }
    }

    /// Check if the subcommand starts with the given tokens.
    pub fn starts_with(&self, prefix: &[&str]) -> bool {
        self.tokens.len() >= prefix.len()
            && self.tokens.iter().zip(prefix).all(|(t, p)| t == p)
    }
}
