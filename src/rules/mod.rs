//! Rule tables: compiled matchers and per-tool evaluation tiers.
//!
//! Rules are built once from [`Config`] and never mutated. Each tool
//! (git, gh) has its own `ToolRules` implementation; the unconditional
//! hook-tampering tier lives in [`hooks`].

/// gh deny-by-name, GraphQL guidance and ask tiers.
pub mod gh;
/// git hook-bypass deny and destructive-operation ask tiers.
pub mod git;
/// Unconditional deny for commands that tamper with commit hooks.
pub mod hooks;

use log::warn;
use regex::{Regex, RegexBuilder};

use crate::config::{CommandRule, Config, PatternRule};
use crate::eval::{CommandContext, RuleMatch};
use crate::parse::Tool;

/// A case-insensitive regex matched against the whole command.
#[derive(Debug)]
pub struct RegexRule {
    regex: Regex,
    reason: String,
}

impl RegexRule {
    /// Compile a configured pattern. Invalid patterns are skipped with a warning.
    pub fn compile(rule: &PatternRule) -> Option<Self> {
        match RegexBuilder::new(&rule.pattern).case_insensitive(true).build() {
            Ok(regex) => Some(Self {
                regex,
                reason: rule.reason.clone(),
            }),
            Err(e) => {
                warn!("skipping invalid pattern {:?}: {e}", rule.pattern);
                None
            }
        }
    }

    pub fn compile_all(rules: &[PatternRule]) -> Vec<Self> {
        rules.iter().filter_map(Self::compile).collect()
    }

    pub fn is_match(&self, raw: &str) -> bool {
        self.regex.is_match(raw)
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// An ordered token sequence such as `["push", "--force"]`.
#[derive(Debug, Clone)]
pub struct TokenRule {
    tokens: Vec<String>,
    reason: String,
}

impl TokenRule {
    pub fn new(command: &str, reason: &str) -> Self {
        Self {
            tokens: command.split_whitespace().map(String::from).collect(),
            reason: reason.to_string(),
        }
    }

    /// Build rules from config, dropping entries with an empty command.
    pub fn from_config(rules: &[CommandRule]) -> Vec<Self> {
        rules
            .iter()
            .map(|r| Self::new(&r.command, &r.reason))
            .filter(|r| !r.tokens.is_empty())
            .collect()
    }

    /// The leading tokens equal this rule's tokens exactly.
    pub fn matches_prefix(&self, tokens: &[String]) -> bool {
        !self.tokens.is_empty()
            && tokens.len() >= self.tokens.len()
            && tokens.iter().zip(&self.tokens).all(|(t, r)| t == r)
    }

    /// The rule's tokens appear as a contiguous run anywhere in `tokens`
    /// (a prefix being the common case). Words compare whole, so `merge`
    /// never matches `--merge` or `merge-base`; flags also match their
    /// `=value` and short-cluster spellings.
    pub fn matches(&self, tokens: &[String]) -> bool {
        if self.tokens.is_empty() {
            return false;
        }
        tokens
            .windows(self.tokens.len())
            .any(|w| w.iter().zip(&self.tokens).all(|(t, r)| flag_matches(t, r)))
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Compare one command token against one rule token.
///
/// `--force-with-lease` matches `--force-with-lease=main`, and a short
/// cluster such as `-fu` matches `-f` (every letter of the rule present).
fn flag_matches(token: &str, rule: &str) -> bool {
    if token == rule {
        return true;
    }
    if rule.starts_with("--") {
        return token
            .strip_prefix(rule)
            .is_some_and(|rest| rest.starts_with('='));
    }
    match (short_cluster(token), short_cluster(rule)) {
        (Some(have), Some(want)) => want.chars().all(|c| have.contains(c)),
        _ => false,
    }
}

/// Letters of a single-dash flag cluster (`-rf` -> `rf`).
fn short_cluster(token: &str) -> Option<&str> {
    let letters = token.strip_prefix('-')?;
    let valid = !letters.is_empty() && letters.chars().all(|c| c.is_ascii_alphabetic());
    valid.then_some(letters)
}

/// Per-tool evaluation tiers. Each returns `Some` on the first matching rule.
pub trait ToolRules: Send + Sync {
    /// Tool-scoped deny (tiers 2 and 3).
    fn deny(&self, ctx: &CommandContext) -> Option<RuleMatch>;

    /// Non-blocking guidance (tier 4). Only gh has any.
    fn guidance(&self, _ctx: &CommandContext) -> Option<RuleMatch> {
        None
    }

    /// Ordered ask rules for this tool.
    fn ask_rules(&self) -> &[TokenRule];

    /// Ask tier (tier 5): first matching rule in table order.
    fn ask(&self, ctx: &CommandContext) -> Option<RuleMatch> {
        self.ask_rules()
            .iter()
            .find(|rule| rule.matches(&ctx.tokens))
            .map(|rule| RuleMatch::ask(rule.reason(), ctx.raw))
    }
}

/// All compiled rule tables, loaded once.
pub struct RuleTables {
    pub hooks: hooks::HookRules,
    git: git::GitRules,
    gh: gh::GhRules,
}

impl RuleTables {
    pub fn from_config(config: &Config) -> Self {
        Self {
            hooks: hooks::HookRules::from_config(&config.hooks),
            git: git::GitRules::from_config(&config.git),
            gh: gh::GhRules::from_config(&config.gh, &config.graphql),
        }
    }

    /// The tool-scoped tables for a classified tool.
    pub fn for_tool(&self, tool: Tool) -> Option<&dyn ToolRules> {
        match tool {
            Tool::Git => Some(&self.git),
            Tool::Gh => Some(&self.gh),
            Tool::None => None,
        }
    }
}
