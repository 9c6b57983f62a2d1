//! The PreToolUse hook contract: JSON in on stdin, JSON decision out on stdout.

use serde::{Deserialize, Serialize};

use crate::eval::{Decision, RuleMatch};

/// The tool name Claude Code uses for shell execution.
pub const SHELL_TOOL: &str = "Bash";

#[derive(Debug, Deserialize)]
pub struct HookInput {
    pub tool_name: Option<String>,
    pub tool_input: Option<ToolInput>,
}

#[derive(Debug, Deserialize)]
pub struct ToolInput {
    pub command: Option<String>,
}

/// Extract the shell command from a hook payload.
///
/// `None` for anything the guard should let through untouched: malformed
/// JSON, a non-shell tool, or a missing/empty command.
pub fn command_from_input(input: &str) -> Option<String> {
    let hook_input: HookInput = serde_json::from_str(input).ok()?;
    if hook_input.tool_name.as_deref() != Some(SHELL_TOOL) {
        return None;
    }
    let command = hook_input.tool_input?.command?;
    let command = command.trim();
    if command.is_empty() {
        return None;
    }
    Some(command.to_string())
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HookOutput {
    pub hook_specific_output: HookSpecificOutput,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HookSpecificOutput {
    pub hook_event_name: &'static str,
    pub permission_decision: &'static str,
    pub permission_decision_reason: String,
}

/// Map a decision to the hook response. Silent allow produces nothing.
pub fn render(result: &RuleMatch) -> Option<HookOutput> {
    let permission_decision = result.decision.permission()?;
    let permission_decision_reason = match result.decision {
        Decision::Deny => format!("BLOCKED: {}", result.reason),
        Decision::Ask => format!("CAUTION: {}", result.reason),
        _ => result.reason.clone(),
    };
    Some(HookOutput {
        hook_specific_output: HookSpecificOutput {
            hook_event_name: "PreToolUse",
            permission_decision,
            permission_decision_reason,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_bash_command() {
        let input = r#"{"tool_name":"Bash","tool_input":{"command":"  git status  "}}"#;
        assert_eq!(command_from_input(input).as_deref(), Some("git status"));
    }

    #[test]
    fn other_tools_ignored() {
        let input = r#"{"tool_name":"Edit","tool_input":{"file_path":"a.rs"}}"#;
        assert_eq!(command_from_input(input), None);
    }

    #[test]
    fn malformed_input_fails_open() {
        assert_eq!(command_from_input("not json"), None);
        assert_eq!(command_from_input(r#"{"tool_name":"Bash"}"#), None);
        assert_eq!(
            command_from_input(r#"{"tool_name":"Bash","tool_input":{"command":""}}"#),
            None
        );
        assert_eq!(
            command_from_input(r#"{"tool_name":"Bash","tool_input":{"command":42}}"#),
            None
        );
    }

    #[test]
    fn extra_fields_tolerated() {
        let input = r#"{"session_id":"s","tool_name":"Bash","tool_input":{"command":"gh pr list","description":"d"}}"#;
        assert_eq!(command_from_input(input).as_deref(), Some("gh pr list"));
    }

    #[test]
    fn silent_allow_renders_nothing() {
        assert_eq!(render(&RuleMatch::silent()), None);
    }

    #[test]
    fn deny_json_shape() {
        let out = render(&RuleMatch::deny("deletes git hooks")).unwrap();
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["hookSpecificOutput"]["hookEventName"], "PreToolUse");
        assert_eq!(json["hookSpecificOutput"]["permissionDecision"], "deny");
        assert_eq!(
            json["hookSpecificOutput"]["permissionDecisionReason"],
            "BLOCKED: This command deletes git hooks. Fix the underlying issue instead."
        );
    }

    #[test]
    fn ask_prefixed() {
        let out = render(&RuleMatch::ask("Rewrites commit history", "git rebase main")).unwrap();
        assert_eq!(out.hook_specific_output.permission_decision, "ask");
        assert_eq!(
            out.hook_specific_output.permission_decision_reason,
            "CAUTION: Rewrites commit history\nCommand: git rebase main"
        );
    }

    #[test]
    fn guidance_is_allow_with_text() {
        let out = render(&RuleMatch::guidance("fix it".into())).unwrap();
        assert_eq!(out.hook_specific_output.permission_decision, "allow");
        assert_eq!(out.hook_specific_output.permission_decision_reason, "fix it");
    }
}
