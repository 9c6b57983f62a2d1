/// Outcome of evaluating one command.
///
/// Ordered by severity so the worst of several outcomes can be taken with `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Decision {
    /// Proceed, no output.
    AllowSilent,
    /// Proceed, but hand corrective advice back to the caller.
    AllowWithGuidance,
    /// Requires explicit user confirmation.
    Ask,
    /// Blocked.
    Deny,
}

impl Decision {
    /// The hook protocol's `permissionDecision` value, or `None` for silent allow.
    pub fn permission(self) -> Option<&'static str> {
        match self {
            Decision::AllowSilent => None,
            Decision::AllowWithGuidance => Some("allow"),
            Decision::Ask => Some("ask"),
            Decision::Deny => Some("deny"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Decision::AllowSilent => "ALLOW",
            Decision::AllowWithGuidance => "GUIDE",
            Decision::Ask => "ASK",
            Decision::Deny => "DENY",
        }
    }
}

/// A decision plus the rationale shown to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    pub decision: Decision,
    /// Empty for [`Decision::AllowSilent`], non-empty otherwise.
    pub reason: String,
}

impl RuleMatch {
    pub fn silent() -> Self {
        Self {
            decision: Decision::AllowSilent,
            reason: String::new(),
        }
    }

    /// Deny for a violated safety property, e.g. "bypasses pre-commit hooks".
    pub fn deny(reason: &str) -> Self {
        Self {
            decision: Decision::Deny,
            reason: format!("This command {reason}. Fix the underlying issue instead."),
        }
    }

    /// Deny with a rationale that is shown verbatim (points at an alternative workflow).
    pub fn deny_verbatim(reason: &str) -> Self {
        Self {
            decision: Decision::Deny,
            reason: reason.to_string(),
        }
    }

    pub fn ask(risk: &str, command: &str) -> Self {
        Self {
            decision: Decision::Ask,
            reason: format!("{risk}\nCommand: {command}"),
        }
    }

    pub fn guidance(text: String) -> Self {
        Self {
            decision: Decision::AllowWithGuidance,
            reason: text,
        }
    }

    pub fn is_silent(&self) -> bool {
        self.decision == Decision::AllowSilent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silent_allow_has_no_permission() {
        assert_eq!(Decision::AllowSilent.permission(), None);
        assert_eq!(Decision::AllowWithGuidance.permission(), Some("allow"));
    }

    #[test]
    fn deny_template() {
        assert_eq!(
            RuleMatch::deny("deletes git hooks").reason,
            "This command deletes git hooks. Fix the underlying issue instead."
        );
    }

    #[test]
    fn ask_echoes_command() {
        let r = RuleMatch::ask("Overwrites remote history", "git push -f");
        assert_eq!(r.reason, "Overwrites remote history\nCommand: git push -f");
    }

    #[test]
    fn severity_order() {
        assert!(Decision::Deny > Decision::Ask);
        assert!(Decision::Ask > Decision::AllowWithGuidance);
        assert!(Decision::AllowWithGuidance > Decision::AllowSilent);
    }
}
