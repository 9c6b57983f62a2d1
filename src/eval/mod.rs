pub mod context;
pub mod decision;

pub use context::CommandContext;
pub use decision::{Decision, RuleMatch};

use crate::config::Config;
use crate::parse::Tool;
use crate::rules::RuleTables;

/// Applies the rule tables to a command, tier by tier. First match wins.
pub struct PolicyEngine {
    tables: RuleTables,
    guard_all_commands: bool,
}

impl PolicyEngine {
    /// Build the engine from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            RuleTables::from_config(config),
            config.settings.guard_all_commands,
        )
    }

    /// Build the engine around already-compiled tables.
    pub fn new(tables: RuleTables, guard_all_commands: bool) -> Self {
        Self {
            tables,
            guard_all_commands,
        }
    }

    /// Evaluate a raw command string.
    ///
    /// 1. hook-tampering deny (any command)
    /// 2-3. tool-scoped deny
    /// 4. GraphQL guidance (gh only; skips the ask tier when it fires)
    /// 5. tool-scoped ask
    ///
    /// Commands that are neither git nor gh stop after tier 1. With
    /// `guard_all_commands` off they are allowed before any tier runs.
    pub fn evaluate(&self, command: &str) -> RuleMatch {
        let ctx = CommandContext::from_command(command);
        if ctx.raw.is_empty() {
            return RuleMatch::silent();
        }

        let Some(rules) = self.tables.for_tool(ctx.tool) else {
            if self.guard_all_commands
                && let Some(m) = self.tables.hooks.evaluate(&ctx)
            {
                return m;
            }
            return RuleMatch::silent();
        };

        if let Some(m) = self.tables.hooks.evaluate(&ctx) {
            return m;
        }
        if let Some(m) = rules.deny(&ctx) {
            return m;
        }
        if let Some(m) = rules.guidance(&ctx) {
            return m;
        }
        if let Some(m) = rules.ask(&ctx) {
            return m;
        }
        RuleMatch::silent()
    }

    /// Whether `command` is one the engine has any rules for.
    pub fn is_guarded(command: &str) -> bool {
        crate::parse::classify(command).tool != Tool::None
    }
}
