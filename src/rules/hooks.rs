use crate::config::HooksConfig;
use crate::eval::{CommandContext, RuleMatch};
use crate::rules::RegexRule;

/// Unconditional deny: commands that disable or remove commit hooks.
///
/// Matched against the whole command text, whatever the tool.
pub struct HookRules {
    deny: Vec<RegexRule>,
}

impl HookRules {
    pub fn from_config(config: &HooksConfig) -> Self {
        Self {
            deny: RegexRule::compile_all(&config.deny),
        }
    }

    pub fn evaluate(&self, ctx: &CommandContext) -> Option<RuleMatch> {
        self.deny
            .iter()
            .find(|rule| rule.is_match(ctx.raw))
            .map(|rule| RuleMatch::deny(rule.reason()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::eval::Decision;

    fn eval(cmd: &str) -> Option<Decision> {
        let rules = HookRules::from_config(&Config::default_config().hooks);
        let ctx = CommandContext::from_command(cmd);
        rules.evaluate(&ctx).map(|m| m.decision)
    }

    #[test]
    fn deny_pre_commit_uninstall() {
        assert_eq!(eval("pre-commit uninstall"), Some(Decision::Deny));
    }

    #[test]
    fn deny_rm_hooks_dir() {
        assert_eq!(eval("rm -rf .git/hooks"), Some(Decision::Deny));
        assert_eq!(eval("rm .git/hooks/pre-commit"), Some(Decision::Deny));
    }

    #[test]
    fn deny_chmod_hooks() {
        assert_eq!(eval("chmod -x .git/hooks/pre-commit"), Some(Decision::Deny));
        assert_eq!(eval("chmod a-x .git/hooks/pre-push"), Some(Decision::Deny));
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(eval("PRE-COMMIT UNINSTALL"), Some(Decision::Deny));
    }

    #[test]
    fn reason_uses_template() {
        let rules = HookRules::from_config(&Config::default_config().hooks);
        let ctx = CommandContext::from_command("pre-commit uninstall");
        assert_eq!(
            rules.evaluate(&ctx).unwrap().reason,
            "This command removes pre-commit hooks. Fix the underlying issue instead."
        );
    }

    #[test]
    fn not_denied() {
        assert_eq!(eval("pre-commit run --all-files"), None);
        assert_eq!(eval("ls .git/hooks"), None);
        assert_eq!(eval("chmod +x .git/hooks/pre-commit"), None);
    }
}
