//! Translation provider capability and the retrying service wrapper.

/// Offline word-list provider.
pub mod offline;
/// MyMemory HTTP provider.
pub mod my_memory;

pub use my_memory::MyMemoryProvider;
pub use offline::OfflineProvider;

use crate::constants::{TRANSLATE_MAX_RETRIES, TRANSLATE_RETRY_DELAY};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

/// One of the two supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Fi,
    En,
}

impl Lang {
    /// Two-letter wire code.
    pub fn code(self) -> &'static str {
        match self {
            Self::Fi => "fi",
            Self::En => "en",
        }
    }

    /// The other half of the fixed language pair.
    pub fn other(self) -> Self {
        match self {
            Self::Fi => Self::En,
            Self::En => Self::Fi,
        }
    }

    /// Display name for language pickers.
    pub fn name(self) -> &'static str {
        match self {
            Self::Fi => "Finnish",
            Self::En => "English",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Lang {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "fi" => Ok(Self::Fi),
            "en" => Ok(Self::En),
            other => Err(format!("unsupported language: {}", other)),
        }
    }
}

/// Provider-internal failure. Logged, never shown to the user directly.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("malformed payload")]
    MalformedPayload,

    #[error("unsupported language pair {0}->{1}")]
    UnsupportedPair(Lang, Lang),
}

/// Capability object for remote or offline translation lookups.
///
/// Implementations are selected once at construction and never swapped at
/// runtime. Calls may block; the GUI runs them on its worker thread.
pub trait TranslationProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Translate `text` between the fixed language pair.
    ///
    /// # Errors
    /// Returns a [`ProviderError`] describing the upstream failure.
    fn translate(&self, text: &str, source: Lang, target: Lang) -> Result<String, ProviderError>;
}

/// Which provider implementation to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    MyMemory,
    Offline,
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mymemory" => Ok(Self::MyMemory),
            "offline" | "mock" => Ok(Self::Offline),
            other => Err(format!("unknown translation provider: {}", other)),
        }
    }
}

/// Construct a provider by kind.
///
/// # Errors
/// Returns [`AppError::ProviderUnavailable`] when the provider cannot be
/// initialized (for example, HTTP client construction fails).
pub fn create_provider(kind: ProviderKind) -> Result<Box<dyn TranslationProvider>, AppError> {
    match kind {
        ProviderKind::MyMemory => Ok(Box::new(MyMemoryProvider::new()?)),
        ProviderKind::Offline => Ok(Box::new(OfflineProvider::new())),
    }
}

/// Provider wrapper applying the retry budget and collapsing failures.
pub struct TranslationService {
    provider: Box<dyn TranslationProvider>,
}

impl TranslationService {
    pub fn new(provider: Box<dyn TranslationProvider>) -> Self {
        Self { provider }
    }

    /// Build the service for a configured provider kind.
    ///
    /// # Errors
    /// Propagates provider construction failures.
    pub fn for_kind(kind: ProviderKind) -> Result<Self, AppError> {
        Ok(Self::new(create_provider(kind)?))
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Translate with at most [`TRANSLATE_MAX_RETRIES`] retries and a fixed
    /// backoff between attempts. Blocks for up to the combined attempt
    /// budget; callers keep it off the UI thread.
    ///
    /// # Errors
    /// Returns [`AppError::TranslationFailed`] after the final attempt; the
    /// upstream cause is logged, not surfaced.
    pub fn translate(&self, text: &str, source: Lang, target: Lang) -> Result<String, AppError> {
        let mut attempt = 0u32;
        loop {
            match self.provider.translate(text, source, target) {
                Ok(translated) => return Ok(translated),
                Err(err) => {
                    warn!(
                        provider = self.provider.name(),
                        attempt = attempt,
                        "translation attempt failed: {}",
                        err
                    );
                    if attempt >= TRANSLATE_MAX_RETRIES {
                        return Err(AppError::TranslationFailed);
                    }
                    attempt += 1;
                    std::thread::sleep(TRANSLATE_RETRY_DELAY);
                }
            }
        }
    }
}
