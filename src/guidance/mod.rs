//! Corrective guidance for malformed `gh api graphql` calls.
//!
//! The command is allowed either way: a broken call fails against the API
//! on its own. The findings tell the caller how to fix it on the next try.

mod detectors;

use crate::config::GraphqlConfig;

pub use detectors::MutationFix;

/// One detected failure pattern and its correction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuidanceFinding {
    /// Short upper-case heading, e.g. `WRONG FLAG`.
    pub title: &'static str,
    pub body: String,
}

/// Runs every detector over the raw command text.
pub struct GraphqlAnalyzer {
    mutation_fixes: Vec<MutationFix>,
}

impl GraphqlAnalyzer {
    pub fn from_config(config: &GraphqlConfig) -> Self {
        Self {
            mutation_fixes: config
                .mutation_fixes
                .iter()
                .filter(|f| !f.wrong.is_empty())
                .map(MutationFix::from)
                .collect(),
        }
    }

    /// Findings in detector order. Detectors are independent; all may fire.
    pub fn analyze(&self, raw: &str) -> Vec<GuidanceFinding> {
        let mut findings = Vec::new();
        findings.extend(detectors::shell_variable(raw));
        findings.extend(detectors::wrong_mutations(raw, &self.mutation_fixes));
        findings.extend(detectors::wrong_field_flag(raw));
        findings.extend(detectors::multi_line_query(raw));
        findings
    }
}

/// Number the findings and join them under a header.
pub fn render(findings: &[GuidanceFinding]) -> String {
    let body = findings
        .iter()
        .enumerate()
        .map(|(i, f)| format!("{}. {}: {}", i + 1, f.title, f.body))
        .collect::<Vec<_>>()
        .join("\n\n");
    format!(
        "GraphQL guidance ({} issue(s) found; the command will run but is likely to fail):\n\n{body}",
        findings.len()
    )
}
