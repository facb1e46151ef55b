//! Protocol types for the translation backend worker.

use lukulasi_core::coordinator::TranslationRequest;

/// Commands issued by the UI thread for the backend worker to execute.
#[derive(Debug)]
pub enum CoreCmd {
    /// Run one translation lookup, blocking retries included.
    Translate { request: TranslationRequest },
}

/// Events produced by the backend worker and polled by the UI thread.
///
/// Every event carries the originating request id so the coordinator can
/// drop superseded completions.
#[derive(Debug)]
pub enum CoreEvent {
    /// The lookup succeeded.
    Translated { request_id: u64, text: String },
    /// The lookup failed after the retry budget; `cause` is for logging only.
    TranslateFailed { request_id: u64, cause: String },
}
