//! Configuration loading from environment variables.

use crate::constants::{DEFAULT_MAX_TEXT_LEN, DEFAULT_MAX_UPLOAD_SIZE, DEFAULT_PORT};
use crate::translate::{Lang, ProviderKind};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// Runtime configuration for Lukulasi.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub state_db_path: String,
    pub content_dir: String,
    pub port: u16,
    pub max_upload_size: usize,
    pub max_text_len: usize,
    pub provider: ProviderKind,
    pub source_lang: Lang,
    pub target_lang: Lang,
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: String) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = resolve_home_dir() {
            return home.join(rest).to_string_lossy().to_string();
        }
    }
    path
}

fn resolve_home_dir() -> Option<PathBuf> {
    if let Ok(home) = env::var("HOME") {
        if !home.trim().is_empty() {
            return Some(PathBuf::from(home));
        }
    }

    if let Ok(profile) = env::var("USERPROFILE") {
        if !profile.trim().is_empty() {
            return Some(PathBuf::from(profile));
        }
    }

    std::env::current_dir().ok()
}

/// Parse a boolean-like environment flag value.
///
/// # Supported Values
/// - Truthy: `1`, `true`, `yes`, `on`
/// - Falsy: `0`, `false`, `no`, `off`, empty string
///
/// Matching is case-insensitive and ignores surrounding whitespace.
///
/// # Returns
/// `Some(bool)` when the value is recognized, otherwise `None`.
pub fn parse_env_flag(value: &str) -> Option<bool> {
    let normalized = value.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Read a boolean flag from the environment.
///
/// Missing or unrecognized values are treated as `false`.
///
/// # Returns
/// `true` when the value is a recognized truthy value.
pub fn env_flag_enabled(name: &str) -> bool {
    env::var(name)
        .ok()
        .and_then(|value| parse_env_flag(&value))
        .unwrap_or(false)
}

fn default_state_db_path() -> String {
    let home = resolve_home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".cache")
        .join("lukulasi")
        .join("state.redb")
        .to_string_lossy()
        .to_string()
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are missing.
    pub fn from_env() -> Self {
        let source_lang = env::var("SOURCE_LANG")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(Lang::Fi);
        Self {
            state_db_path: env::var("STATE_DB_PATH")
                .map(expand_tilde)
                .unwrap_or_else(|_| default_state_db_path()),
            content_dir: env::var("CONTENT_DIR")
                .map(expand_tilde)
                .unwrap_or_else(|_| "content/finnish".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            max_upload_size: env::var("MAX_UPLOAD_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_UPLOAD_SIZE),
            max_text_len: env::var("MAX_TEXT_LEN")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_TEXT_LEN),
            provider: env::var("TRANSLATION_PROVIDER")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(ProviderKind::MyMemory),
            source_lang,
            target_lang: env::var("TARGET_LANG")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or_else(|| source_lang.other()),
        }
    }
}
