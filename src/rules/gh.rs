use crate::config::{GhConfig, GraphqlConfig};
use crate::eval::{CommandContext, RuleMatch};
use crate::guidance::GraphqlAnalyzer;
use crate::rules::{TokenRule, ToolRules};

/// gh tiers: deny-by-name, GraphQL guidance, and ask.
pub struct GhRules {
    deny: Vec<TokenRule>,
    ask: Vec<TokenRule>,
    graphql: GraphqlAnalyzer,
}

impl GhRules {
    pub fn from_config(config: &GhConfig, graphql: &GraphqlConfig) -> Self {
        Self {
            deny: TokenRule::from_config(&config.deny),
            ask: TokenRule::from_config(&config.ask),
            graphql: GraphqlAnalyzer::from_config(graphql),
        }
    }
}

impl ToolRules for GhRules {
    /// Structurally safe commands with a mandated alternative: strict
    /// prefix match, reason shown verbatim.
    fn deny(&self, ctx: &CommandContext) -> Option<RuleMatch> {
        self.deny
            .iter()
            .find(|rule| rule.matches_prefix(&ctx.tokens))
            .map(|rule| RuleMatch::deny_verbatim(rule.reason()))
    }

    fn guidance(&self, ctx: &CommandContext) -> Option<RuleMatch> {
        if !ctx.starts_with(&["api", "graphql"]) {
            return None;
        }
        let findings = self.graphql.analyze(ctx.raw);
        if findings.is_empty() {
            return None;
        }
        Some(RuleMatch::guidance(crate::guidance::render(&findings)))
    }

    fn ask_rules(&self) -> &[TokenRule] {
        &self.ask
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::eval::Decision;

    fn rules_from(config: &Config) -> GhRules {
        GhRules::from_config(&config.gh, &config.graphql)
    }

    fn eval_with(s: &GhRules, cmd: &str) -> Option<RuleMatch> {
        let ctx = CommandContext::from_command(cmd);
        s.deny(&ctx)
            .or_else(|| s.guidance(&ctx))
            .or_else(|| s.ask(&ctx))
    }

    fn eval(cmd: &str) -> Option<Decision> {
        eval_with(&rules_from(&Config::default_config()), cmd).map(|m| m.decision)
    }

    #[test]
    fn allow_pr_list() {
        assert_eq!(eval("gh pr list"), None);
    }

    #[test]
    fn allow_pr_view() {
        assert_eq!(eval("gh pr view 123"), None);
    }

    #[test]
    fn ask_pr_merge() {
        assert_eq!(eval("gh pr merge 123"), Some(Decision::Ask));
    }

    #[test]
    fn ask_pr_close() {
        assert_eq!(eval("gh pr close 123"), Some(Decision::Ask));
    }

    #[test]
    fn ask_repo_delete() {
        assert_eq!(eval("gh repo delete my-repo --yes"), Some(Decision::Ask));
    }

    #[test]
    fn ask_release_delete() {
        assert_eq!(eval("gh release delete v1.0"), Some(Decision::Ask));
    }

    #[test]
    fn ask_after_repo_flag() {
        assert_eq!(eval("gh -R owner/repo pr merge 1"), Some(Decision::Ask));
    }

    #[test]
    fn graphql_guidance() {
        assert_eq!(
            eval("gh api graphql -f query='{ viewer { login } }'"),
            Some(Decision::AllowWithGuidance)
        );
    }

    #[test]
    fn graphql_clean_is_silent() {
        assert_eq!(
            eval("gh api graphql --raw-field query='{ viewer { login } }'"),
            None
        );
    }

    #[test]
    fn guidance_only_for_graphql_endpoint() {
        assert_eq!(eval("gh api repos/o/r/pulls -f query=x"), None);
    }

    #[test]
    fn deny_literal_command_from_config() {
        let mut config = Config::default_config();
        config.apply_overlay_str(
            r#"
            [gh]
            deny = [{ command = "pr comment", reason = "Use the review-reply workflow." }]
        "#,
        );
        let s = rules_from(&config);
        let m = eval_with(&s, "gh pr comment 12 --body hi").unwrap();
        assert_eq!(m.decision, Decision::Deny);
        assert_eq!(m.reason, "Use the review-reply workflow.");
        // strict prefix only
        assert!(eval_with(&s, "gh issue view 3 --comments pr comment").is_none());
    }
}
