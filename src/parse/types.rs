//! Types produced by the classifier and consumed by the eval layer.

/// The tool a command invokes, as far as the guard is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Anything that is not git or gh. The guard takes no action.
    None,
    /// `git ...`
    Git,
    /// `gh ...` (GitHub CLI)
    Gh,
}

/// A command split into its tool and canonical subcommand.
///
/// For `git -C /repo -c user.name=x commit -m msg` the subcommand is
/// `commit -m msg`: leading global options are stripped so rules can
/// match on what the command actually does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedCommand {
    pub tool: Tool,
    /// Command text after the tool name and its leading global options.
    pub subcommand: String,
    /// `subcommand` split on whitespace. Empty when `subcommand` is empty.
    pub tokens: Vec<String>,
}

impl ClassifiedCommand {
    /// A command the guard does not care about.
    pub fn none() -> Self {
        Self {
            tool: Tool::None,
            subcommand: String::new(),
            tokens: Vec::new(),
        }
    }

    pub fn new(tool: Tool, subcommand: &str) -> Self {
        let subcommand = subcommand.trim().to_string();
        let tokens = subcommand.split_whitespace().map(String::from).collect();
        Self {
            tool,
            subcommand,
            tokens,
        }
    }
}
