//! git-guard: a PreToolUse hook for Claude Code that gates git and gh commands.
//!
//! Each shell command is classified as git, gh, or neither, then run
//! through ordered rule tiers. The first match decides:
//! [`eval::Decision::Deny`] for commands that bypass or remove commit hooks,
//! [`eval::Decision::Ask`] for destructive history/remote operations,
//! [`eval::Decision::AllowWithGuidance`] for `gh api graphql` calls with a
//! known failure signature, and [`eval::Decision::AllowSilent`] otherwise.
//!
//! # Architecture
//!
//! - **[`parse`]** — Classifier: tool detection and git global-option stripping.
//! - **[`rules`]** — Rule tables: compiled regex and token rules per tool.
//! - **[`guidance`]** — GraphQL guidance detectors.
//! - **[`eval`]** — Policy engine, decision types, per-command context.
//! - **[`hook`]** — Hook input parsing and decision output.
//! - **[`config`]** — Configuration loading: embedded defaults + user overlay merge.
//! - **[`logging`]** — Decision logging to `~/.local/share/git-guard/decisions.log`.

/// Configuration types, loading, and overlay merge logic.
pub mod config;
/// Policy engine: tier ordering, decision types, command context.
pub mod eval;
/// GraphQL call analysis producing non-blocking guidance.
pub mod guidance;
/// Hook payload in, permission decision out.
pub mod hook;
/// File-based decision logging.
pub mod logging;
/// Command classification: git/gh detection and subcommand extraction.
pub mod parse;
/// Rule tables and per-tool evaluation tiers.
pub mod rules;

use eval::RuleMatch;

/// Build the engine from default config and evaluate a command string.
///
/// This is the main entry point for tests and simple usage.
/// For CLI usage with user config, build the engine directly.
pub fn evaluate(command: &str) -> RuleMatch {
    let config = config::Config::default_config();
    let engine = eval::PolicyEngine::from_config(&config);
    engine.evaluate(command)
}
