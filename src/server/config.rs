use std::{collections::HashSet, path::PathBuf, time::Duration};

use crate::server::{
    error::{config::ConfigError, AppError},
    model::command::CommandKind,
};

const DEFAULT_USERS_FILE: &str = "users.json";
const DEFAULT_CHANNELS_FILE: &str = "channels.json";
const DEFAULT_POLLS_FILE: &str = "polls.json";
const DEFAULT_SEND_DELAY_MS: u64 = 300;
const DEFAULT_AUTH_EXEMPT_COMMANDS: &str = "channels,users";
const DEFAULT_PORT: u16 = 3000;

pub struct Config {
    pub discord_bot_token: String,

    pub users_file: PathBuf,
    pub channels_file: PathBuf,
    pub polls_file: PathBuf,

    /// Minimum spacing between two sends or edits of the same fanout pass.
    pub send_delay: Duration,
    /// Read-only commands that skip the allow-list check.
    pub auth_exempt_commands: HashSet<CommandKind>,

    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let send_delay_ms = match std::env::var("SEND_DELAY_MS") {
            Ok(value) => value
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: "SEND_DELAY_MS".to_string(),
                    value: value.clone(),
                    reason: e.to_string(),
                })?,
            Err(_) => DEFAULT_SEND_DELAY_MS,
        };

        let port = match std::env::var("PORT") {
            Ok(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: "PORT".to_string(),
                    value: value.clone(),
                    reason: e.to_string(),
                })?,
            Err(_) => DEFAULT_PORT,
        };

        let exempt = std::env::var("AUTH_EXEMPT_COMMANDS")
            .unwrap_or_else(|_| DEFAULT_AUTH_EXEMPT_COMMANDS.to_string());

        Ok(Self {
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            users_file: env_path("USERS_FILE", DEFAULT_USERS_FILE),
            channels_file: env_path("CHANNELS_FILE", DEFAULT_CHANNELS_FILE),
            polls_file: env_path("POLLS_FILE", DEFAULT_POLLS_FILE),
            send_delay: Duration::from_millis(send_delay_ms),
            auth_exempt_commands: parse_exempt_commands(&exempt)?,
            port,
        })
    }
}

fn env_path(name: &str, default: &str) -> PathBuf {
    std::env::var(name)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}

/// Parses a comma-separated list of command names into the exemption set.
///
/// Unknown names are rejected so a typo does not silently leave a command gated.
/// Messaging commands are accepted but dropped by the access gate, which never
/// exempts them.
///
/// # Arguments
/// - `value` - Comma-separated command names, e.g. `"channels,users"`
///
/// # Returns
/// - `Ok(HashSet<CommandKind>)` - Parsed command set (empty input yields an empty set)
/// - `Err(AppError::ConfigErr)` - A name does not match any command
pub fn parse_exempt_commands(value: &str) -> Result<HashSet<CommandKind>, AppError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| {
            CommandKind::from_name(name).ok_or_else(|| {
                ConfigError::InvalidEnvVar {
                    name: "AUTH_EXEMPT_COMMANDS".to_string(),
                    value: value.to_string(),
                    reason: format!("unknown command '{}'", name),
                }
                .into()
            })
        })
        .collect()
}
