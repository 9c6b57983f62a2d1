//! Command classifier: raw command string → tool + canonical subcommand.

use std::sync::LazyLock;

use regex::Regex;

use super::types::{ClassifiedCommand, Tool};

/// One leading git global option that takes a value: `-C <path>`,
/// `-c <key=value>`, `--git-dir[=| ]<path>`, `--work-tree[=| ]<path>`.
/// The value may be double-quoted, single-quoted, or a bare word.
static GIT_GLOBAL_OPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(?:-C\s+|-c\s+|--git-dir(?:=|\s+)|--work-tree(?:=|\s+))(?:"[^"]*"|'[^']*'|\S+)(?:\s+|$)"#,
    )
    .unwrap()
});

/// Classify a raw command string.
///
/// Never fails: anything that does not start with `git`/`gh` is
/// [`Tool::None`], and option syntax that does not parse simply stops
/// the stripping of global options.
pub fn classify(raw: &str) -> ClassifiedCommand {
    let cmd = raw.trim();

    if let Some(rest) = tool_remainder(cmd, "git") {
        return ClassifiedCommand::new(Tool::Git, strip_git_globals(rest));
    }
    if let Some(rest) = tool_remainder(cmd, "gh") {
        return ClassifiedCommand::new(Tool::Gh, rest);
    }
    ClassifiedCommand::none()
}

/// Text after `name ` when `cmd` is exactly `name` or starts with `name `.
fn tool_remainder<'a>(cmd: &'a str, name: &str) -> Option<&'a str> {
    if cmd == name {
        return Some("");
    }
    cmd.strip_prefix(name)?.strip_prefix(' ')
}

/// Repeatedly strip leading global options until none match.
fn strip_git_globals(rest: &str) -> &str {
    let mut rest = rest.trim_start();
    while let Some(m) = GIT_GLOBAL_OPTION.find(rest) {
        rest = rest[m.end()..].trim_start();
    }
    rest
}
