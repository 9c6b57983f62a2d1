//! git-guard: PreToolUse hook for Claude Code.
//!
//! Reads the hook payload from stdin, writes a permission decision to stdout.
//! Always exits 0; anything unexpected is a silent allow.

use std::io::Read;

use git_guard::config::Config;
use git_guard::eval::PolicyEngine;
use git_guard::{hook, logging};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = Config::load();

    if args.iter().any(|a| a == "--dump-config") {
        match toml::to_string_pretty(&config) {
            Ok(s) => print!("{s}"),
            Err(e) => eprintln!("git-guard: cannot serialize config: {e}"),
        }
        return;
    }

    let mut input = String::new();
    if std::io::stdin().read_to_string(&mut input).is_err() {
        return;
    }
    let Some(command) = hook::command_from_input(&input) else {
        return;
    };

    // Most commands are neither git nor gh: skip logger and rule setup for them.
    if !config.settings.guard_all_commands && !PolicyEngine::is_guarded(&command) {
        return;
    }

    logging::init(&config.settings);
    let engine = PolicyEngine::from_config(&config);
    let result = engine.evaluate(&command);
    logging::log_decision(&command, &result);

    let Some(output) = hook::render(&result) else {
        return;
    };
    if let Ok(json) = serde_json::to_string(&output) {
        println!("{json}");
    }
}
