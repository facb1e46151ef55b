//! Shared constants used across Lukulasi crates.

use std::time::Duration;

/// Default API port for the content/upload server.
pub const DEFAULT_PORT: u16 = 38412;

/// Quiet period after hover-enter before a hover translation is issued.
pub const HOVER_DELAY: Duration = Duration::from_millis(100);

/// Debounce window for selection-change triggers.
pub const SELECTION_DEBOUNCE: Duration = Duration::from_millis(300);

/// Minimum trimmed selection length that still triggers a translation.
pub const MIN_SELECTION_LEN: usize = 3;

/// Maximum trimmed selection length before the selection is rejected.
pub const MAX_SELECTION_LEN: usize = 1000;

/// Upper bound on a single translation HTTP call.
pub const TRANSLATE_TIMEOUT: Duration = Duration::from_secs(10);

/// Retries after the initial translation attempt.
pub const TRANSLATE_MAX_RETRIES: u32 = 2;

/// Fixed backoff between translation attempts.
pub const TRANSLATE_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Margin kept between the popup and the viewport edges.
pub const POPUP_MARGIN: f32 = 8.0;

/// Average glyph width used to estimate popup width before first paint.
pub const POPUP_AVG_GLYPH_WIDTH: f32 = 7.5;

/// Horizontal padding inside the popup, applied on both sides.
pub const POPUP_PADDING: f32 = 12.0;

/// Line height used for popup height estimation.
pub const POPUP_LINE_HEIGHT: f32 = 20.0;

/// Widest popup the estimator will produce before wrapping.
pub const POPUP_MAX_WIDTH: f32 = 420.0;

/// Default maximum accepted upload size in bytes.
pub const DEFAULT_MAX_UPLOAD_SIZE: usize = 10 * 1024 * 1024;

/// Default maximum extracted-text length in characters.
pub const DEFAULT_MAX_TEXT_LEN: usize = 100_000;
