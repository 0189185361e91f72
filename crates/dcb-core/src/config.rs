use std::{env, fs, path::Path};

use crate::{errors::Error, Result};

pub const DEFAULT_COMMAND_PREFIX: &str = "!";

/// Typed configuration, read once at process start.
#[derive(Clone, Debug)]
pub struct Config {
    pub discord_bot_token: String,
    pub command_prefix: String,
    pub ignore_bot_messages: bool,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup (the process env in `load`).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let discord_bot_token = lookup("DISCORD_BOT_TOKEN")
            .and_then(non_empty)
            .ok_or_else(|| {
                Error::Config("DISCORD_BOT_TOKEN environment variable is required".to_string())
            })?;

        // An unset prefix falls back to the default; a set-but-blank one is a mistake.
        let command_prefix = match lookup("COMMAND_PREFIX") {
            None => DEFAULT_COMMAND_PREFIX.to_string(),
            Some(p) => non_empty(p.trim().to_string()).ok_or_else(|| {
                Error::Config("COMMAND_PREFIX must not be empty".to_string())
            })?,
        };

        let ignore_bot_messages = lookup("IGNORE_BOT_MESSAGES")
            .map(|s| parse_bool(&s))
            .unwrap_or(true);

        Ok(Self {
            discord_bot_token: discord_bot_token.trim().to_string(),
            command_prefix,
            ignore_bot_messages,
        })
    }
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }

        env::set_var(key, unquote(v.trim()));
    }
}

fn unquote(val: &str) -> &str {
    if val.len() >= 2
        && ((val.starts_with('"') && val.ends_with('"'))
            || (val.starts_with('\'') && val.ends_with('\'')))
    {
        return &val[1..val.len() - 1];
    }
    val
}

fn parse_bool(s: &str) -> bool {
    matches!(
        s.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
