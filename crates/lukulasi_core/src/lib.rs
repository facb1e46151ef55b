//! Core domain library for Lukulasi (tokenization, selection tracking,
//! translation coordination, popup geometry, view-state persistence).

/// Configuration loading and defaults.
pub mod config;
/// Shared constants used across Lukulasi crates.
pub mod constants;
/// Built-in content library (difficulty-tagged reading texts).
pub mod content;
/// Translation request coordination (debounce, staleness, caching).
pub mod coordinator;
/// Application error types.
pub mod error;
/// Document text extraction seam and reformatting.
pub mod extract;
/// Tooltip/popup placement geometry.
pub mod popup;
/// Hover/selection tracking state machine.
pub mod selection;
/// Durable view-state key-value store.
pub mod store;
/// Cancellable debounce timers.
pub mod timer;
/// Text tokenization into word/whitespace runs.
pub mod token;
/// Translation provider capability and implementations.
pub mod translate;
/// View state model and restore policy.
pub mod view_state;

pub use config::Config;
pub use constants::DEFAULT_PORT;
pub use error::AppError;
pub use store::StateStore;
pub use token::{Token, TokenKind, TokenRange};
pub use translate::{Lang, TranslationService};
pub use view_state::ViewState;
