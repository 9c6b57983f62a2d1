use crate::config::GitConfig;
use crate::eval::{CommandContext, RuleMatch};
use crate::rules::{RegexRule, TokenRule, ToolRules};

/// git tiers: hook-bypass deny (regex) and destructive-operation ask (tokens).
///
/// The deny patterns only run for git commands so that the same words
/// inside a `gh api` body or a commit message of another tool do not trip them.
pub struct GitRules {
    deny: Vec<RegexRule>,
    ask: Vec<TokenRule>,
}

impl GitRules {
    pub fn from_config(config: &GitConfig) -> Self {
        Self {
            deny: RegexRule::compile_all(&config.deny),
            ask: TokenRule::from_config(&config.ask),
        }
    }
}

impl ToolRules for GitRules {
    fn deny(&self, ctx: &CommandContext) -> Option<RuleMatch> {
        self.deny
            .iter()
            .find(|rule| rule.is_match(ctx.raw))
            .map(|rule| RuleMatch::deny(rule.reason()))
    }

    fn ask_rules(&self) -> &[TokenRule] {
        &self.ask
    }
}
