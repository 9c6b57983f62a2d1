use std::path::PathBuf;

use log::{LevelFilter, debug, info};
use simplelog::{ConfigBuilder, WriteLogger};

use crate::config::Settings;
use crate::eval::RuleMatch;

/// Install a file logger appending to `settings.log_file`.
/// Best-effort: any failure leaves logging disabled (logging must never block the hook).
pub fn init(settings: &Settings) {
    let Some(path) = log_path(settings) else {
        return;
    };
    let level = settings
        .log_level
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::Info);
    if level == LevelFilter::Off {
        return;
    }
    if let Some(dir) = path.parent() {
        let _ = std::fs::create_dir_all(dir);
    }
    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
    else {
        return;
    };
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    let _ = WriteLogger::init(level, config, file);
}

/// Resolved log file path, `None` when logging is disabled.
fn log_path(settings: &Settings) -> Option<PathBuf> {
    let raw = settings.log_file.trim();
    if raw.is_empty() {
        return None;
    }
    Some(PathBuf::from(shellexpand::tilde(raw).as_ref()))
}

/// Record one decision. Silent allows are only worth a debug line.
pub fn log_decision(command: &str, result: &RuleMatch) {
    // Compact single-line reason for the log (replace newlines with "; ")
    let reason_oneline = result.reason.replace('\n', "; ");
    let cmd_truncated: String = command.chars().take(200).collect();

    if result.is_silent() {
        debug!("{}\t{cmd_truncated}", result.decision.label());
        return;
    }
    info!(
        "{}\t{cmd_truncated}\t{reason_oneline}",
        result.decision.label()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(log_file: &str) -> Settings {
        Settings {
            log_file: log_file.into(),
            log_level: "info".into(),
            guard_all_commands: false,
        }
    }

    #[test]
    fn empty_path_disables_logging() {
        assert_eq!(log_path(&settings("")), None);
        assert_eq!(log_path(&settings("   ")), None);
    }

    #[test]
    fn absolute_path_kept() {
        assert_eq!(
            log_path(&settings("/var/log/git-guard.log")),
            Some(PathBuf::from("/var/log/git-guard.log"))
        );
    }

    #[test]
    fn tilde_expanded() {
        let path = log_path(&settings("~/git-guard.log")).unwrap();
        assert!(!path.starts_with("~"));
        assert!(path.ends_with("git-guard.log"));
    }

    #[test]
    fn log_decision_without_logger_is_harmless() {
        log_decision("git status", &RuleMatch::silent());
        log_decision("git push -f", &RuleMatch::ask("risk", "git push -f"));
    }
}
