use serde::{Deserialize, Serialize};

/// Embedded default configuration.
const DEFAULT_CONFIG: &str = include_str!("../config.default.toml");

// ── Final (merged) config types ──

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub hooks: HooksConfig,
    #[serde(default)]
    pub git: GitConfig,
    #[serde(default)]
    pub gh: GhConfig,
    #[serde(default)]
    pub graphql: GraphqlConfig,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Settings {
    /// Decision log path. `~` is expanded; empty disables logging.
    #[serde(default)]
    pub log_file: String,
    /// One of off, error, warn, info, debug, trace.
    #[serde(default)]
    pub log_level: String,
    /// Run the unconditional deny tier for commands that are neither git nor gh.
    #[serde(default = "default_true")]
    pub guard_all_commands: bool,
}

fn default_true() -> bool {
    true
}

/// A regex rule: `pattern` is matched case-insensitively against the whole command.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PatternRule {
    pub pattern: String,
    /// Completes "This command <reason>."
    pub reason: String,
}

/// A token rule: `command` is a space-separated token sequence such as `push --force`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct CommandRule {
    pub command: String,
    pub reason: String,
}

/// An incorrect GraphQL mutation name and what to use instead.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct MutationFixConfig {
    pub wrong: String,
    pub correct: String,
    pub example: String,
}

/// Hook-tampering patterns checked regardless of tool.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct HooksConfig {
    #[serde(default)]
    pub deny: Vec<PatternRule>,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct GitConfig {
    #[serde(default)]
    pub deny: Vec<PatternRule>,
    #[serde(default)]
    pub ask: Vec<CommandRule>,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct GhConfig {
    /// Literal subcommands that are denied with a verbatim reason.
    #[serde(default)]
    pub deny: Vec<CommandRule>,
    #[serde(default)]
    pub ask: Vec<CommandRule>,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct GraphqlConfig {
    #[serde(default)]
    pub mutation_fixes: Vec<MutationFixConfig>,
}

// ── Overlay types (user config that merges with defaults) ──

#[derive(Debug, Deserialize, Default)]
struct ConfigOverlay {
    #[serde(default)]
    settings: SettingsOverlay,
    #[serde(default)]
    hooks: HooksOverlay,
    #[serde(default)]
    git: GitOverlay,
    #[serde(default)]
    gh: GhOverlay,
    #[serde(default)]
    graphql: GraphqlOverlay,
}

#[derive(Debug, Deserialize, Default)]
struct SettingsOverlay {
    log_file: Option<String>,
    log_level: Option<String>,
    guard_all_commands: Option<bool>,
}

#[derive(Debug, Deserialize, Default)]
struct HooksOverlay {
    #[serde(default)]
    replace: bool,
    #[serde(default)]
    deny: Vec<PatternRule>,
    #[serde(default)]
    remove_deny: Vec<String>,
}

#[derive(Debug, Deserialize, Default)]
struct GitOverlay {
    #[serde(default)]
    replace: bool,
    #[serde(default)]
    deny: Vec<PatternRule>,
    #[serde(default)]
    ask: Vec<CommandRule>,
    #[serde(default)]
    remove_deny: Vec<String>,
    #[serde(default)]
    remove_ask: Vec<String>,
}

#[derive(Debug, Deserialize, Default)]
struct GhOverlay {
    #[serde(default)]
    replace: bool,
    #[serde(default)]
    deny: Vec<CommandRule>,
    #[serde(default)]
    ask: Vec<CommandRule>,
    #[serde(default)]
    remove_deny: Vec<String>,
    #[serde(default)]
    remove_ask: Vec<String>,
}

#[derive(Debug, Deserialize, Default)]
struct GraphqlOverlay {
    #[serde(default)]
    replace: bool,
    #[serde(default)]
    mutation_fixes: Vec<MutationFixConfig>,
    #[serde(default)]
    remove_mutation_fixes: Vec<String>,
}

// ── Merge logic ──

/// Entries in a rule list are identified by this key for removal and dedup.
trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for PatternRule {
    fn key(&self) -> &str {
        &self.pattern
    }
}

impl Keyed for CommandRule {
    fn key(&self) -> &str {
        &self.command
    }
}

impl Keyed for MutationFixConfig {
    fn key(&self) -> &str {
        &self.wrong
    }
}

/// Merge a user rule list into a default list.
/// In replace mode: user list replaces default entirely.
/// In merge mode: remove keys first, drop defaults the user redefines,
/// then put the user's entries ahead of the remaining defaults (first match wins).
fn merge_rules<T: Keyed>(base: &mut Vec<T>, add: Vec<T>, remove: &[String], replace: bool) {
    if replace {
        *base = add;
        return;
    }
    base.retain(|item| {
        !remove.iter().any(|r| r == item.key()) && !add.iter().any(|a| a.key() == item.key())
    });
    let mut merged = Vec::with_capacity(add.len() + base.len());
    for item in add {
        if !merged.iter().any(|m: &T| m.key() == item.key()) {
            merged.push(item);
        }
    }
    merged.append(base);
    *base = merged;
}

impl Config {
    /// Load the default embedded configuration.
    pub fn default_config() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded default config must parse")
    }

    /// Load configuration with resolution order:
    /// 1. Start with embedded defaults
    /// 2. Merge user overlay from ~/.config/git-guard/config.toml (if exists)
    ///
    /// User config merges with defaults: lists extend, scalars override.
    /// Set `replace = true` in any section to replace its defaults entirely.
    /// Use `remove_<field>` lists to subtract specific entries by key.
    pub fn load() -> Self {
        let mut config = Self::default_config();
        if let Some(overlay) = Self::load_overlay() {
            config.apply_overlay(overlay);
        }
        config
    }

    /// Try to load user overlay from ~/.config/git-guard/config.toml.
    fn load_overlay() -> Option<ConfigOverlay> {
        let home = std::env::var_os("HOME")?;
        let path = std::path::Path::new(&home).join(".config/git-guard/config.toml");
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(overlay) => Some(overlay),
            Err(e) => {
                eprintln!("git-guard: config parse error: {e}");
                None
            }
        }
    }

    /// Apply an overlay on top of this config (merge semantics).
    fn apply_overlay(&mut self, overlay: ConfigOverlay) {
        // Settings: scalar overrides
        let s = overlay.settings;
        if let Some(v) = s.log_file {
            self.settings.log_file = v;
        }
        if let Some(v) = s.log_level {
            self.settings.log_level = v;
        }
        if let Some(v) = s.guard_all_commands {
            self.settings.guard_all_commands = v;
        }

        let h = overlay.hooks;
        merge_rules(&mut self.hooks.deny, h.deny, &h.remove_deny, h.replace);

        let g = overlay.git;
        merge_rules(&mut self.git.deny, g.deny, &g.remove_deny, g.replace);
        merge_rules(&mut self.git.ask, g.ask, &g.remove_ask, g.replace);

        let gh = overlay.gh;
        merge_rules(&mut self.gh.deny, gh.deny, &gh.remove_deny, gh.replace);
        merge_rules(&mut self.gh.ask, gh.ask, &gh.remove_ask, gh.replace);

        let q = overlay.graphql;
        merge_rules(
            &mut self.graphql.mutation_fixes,
            q.mutation_fixes,
            &q.remove_mutation_fixes,
            q.replace,
        );
    }

    /// Apply an overlay from a TOML string. Used for testing.
    #[cfg(test)]
    pub(crate) fn apply_overlay_str(&mut self, toml_str: &str) {
        let overlay: ConfigOverlay = toml::from_str(toml_str).unwrap();
        self.apply_overlay(overlay);
    }
}
