use std::sync::LazyLock;

use regex::Regex;

use super::GuidanceFinding;
use crate::config::MutationFixConfig;

/// `--jq '<filter>'` or `--jq "<filter>"`; jq's own `$var` syntax lives here.
static JQ_ARG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"--jq(?:\s+|=)(?:'[^']*'|"[^"]*")"#).unwrap());

static SHELL_VAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$[A-Za-z]").unwrap());

/// A templated field flag carrying the query.
static FIELD_QUERY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?:^|\s)(?:-f|-F|--field)(?:\s+|=)['"]?query="#).unwrap());

/// A literal `\n` escape not followed by a vowel (`\node`, `\name`, `\null` are words).
static ESCAPED_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\n(?:[^aeiouAEIOU]|$)").unwrap());

/// A nonexistent or wrong mutation name and its replacement.
#[derive(Debug, Clone)]
pub struct MutationFix {
    pub wrong: String,
    pub correct: String,
    pub example: String,
}

impl From<&MutationFixConfig> for MutationFix {
    fn from(c: &MutationFixConfig) -> Self {
        Self {
            wrong: c.wrong.clone(),
            correct: c.correct.clone(),
            example: c.example.clone(),
        }
    }
}

pub(super) fn shell_variable(raw: &str) -> Option<GuidanceFinding> {
    let without_jq = JQ_ARG.replace_all(raw, "");
    let var = SHELL_VAR.find(&without_jq)?;
    Some(GuidanceFinding {
        title: "SHELL VARIABLE EXPANSION",
        body: format!(
            "`{var}...` in the query is expanded by the shell (or sent as an undeclared \
             GraphQL variable) before GitHub sees it. Substitute the literal value into \
             the query and pass it with --raw-field query='...'.",
            var = var.as_str()
        ),
    })
}

pub(super) fn wrong_mutations(raw: &str, fixes: &[MutationFix]) -> Vec<GuidanceFinding> {
    fixes
        .iter()
        .filter(|fix| raw.contains(fix.wrong.as_str()))
        .map(|fix| GuidanceFinding {
            title: "WRONG MUTATION NAME",
            body: format!(
                "`{}` is not the mutation you want. Use `{}` instead.\nExample: {}",
                fix.wrong, fix.correct, fix.example
            ),
        })
        .collect()
}

pub(super) fn wrong_field_flag(raw: &str) -> Option<GuidanceFinding> {
    if !FIELD_QUERY.is_match(raw) {
        return None;
    }
    Some(GuidanceFinding {
        title: "WRONG FLAG",
        body: "passing the query with -f/-F/--field runs it through gh's field \
               templating, which does its own placeholder substitution. Use \
               --raw-field query='...' so the query is sent verbatim."
            .to_string(),
    })
}

pub(super) fn multi_line_query(raw: &str) -> Option<GuidanceFinding> {
    let continued = raw.trim_end().ends_with('\\');
    if !continued && !ESCAPED_NEWLINE.is_match(raw) {
        return None;
    }
    Some(GuidanceFinding {
        title: "MULTI-LINE QUERY",
        body: "the query body spans lines (trailing `\\` or a literal `\\n`). Write the \
               whole query on a single line inside --raw-field query='...'."
            .to_string(),
    })
}
