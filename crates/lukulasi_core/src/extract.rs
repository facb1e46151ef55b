//! Document text extraction seam.
//!
//! The core never parses PDFs itself; it consumes plain text from a
//! [`DocumentExtractor`] collaborator and owns the limit checks and the
//! readability reformatting applied to whatever the extractor produced.

use thiserror::Error;

/// Extraction failure, split into the four user-distinguishable kinds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("File size exceeds the {limit_mb}MB limit")]
    FileTooLarge { limit_mb: usize },

    #[error("No text content found in the document")]
    InvalidDocument,

    #[error("Extracted text exceeds the {limit} character limit")]
    TextTooLong { limit: usize },

    #[error("Failed to parse the document")]
    ParsingFailed,
}

impl ExtractError {
    /// Stable machine-readable code for API payloads.
    pub fn code(&self) -> &'static str {
        match self {
            Self::FileTooLarge { .. } => "FileTooLarge",
            Self::InvalidDocument => "InvalidDocument",
            Self::TextTooLong { .. } => "TextTooLong",
            Self::ParsingFailed => "ParsingFailed",
        }
    }
}

/// Plain text pulled out of an uploaded document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDocument {
    pub text: String,
    pub page_count: usize,
    pub title: Option<String>,
    pub author: Option<String>,
}

/// Collaborator seam for document ingestion.
pub trait DocumentExtractor: Send + Sync {
    /// Extract plain text from raw document bytes.
    ///
    /// # Errors
    /// Returns an [`ExtractError`] naming the failure kind.
    fn extract(&self, bytes: &[u8]) -> Result<ExtractedDocument, ExtractError>;
}

/// Reject uploads larger than `max_bytes` before parsing starts.
///
/// # Errors
/// [`ExtractError::FileTooLarge`] when the payload exceeds the limit.
pub fn check_upload_size(len: usize, max_bytes: usize) -> Result<(), ExtractError> {
    if len > max_bytes {
        return Err(ExtractError::FileTooLarge {
            limit_mb: max_bytes / (1024 * 1024),
        });
    }
    Ok(())
}

/// Validate extracted text against emptiness and length limits.
///
/// # Errors
/// [`ExtractError::InvalidDocument`] for empty text,
/// [`ExtractError::TextTooLong`] past the character limit.
pub fn check_extracted_text(text: &str, max_chars: usize) -> Result<(), ExtractError> {
    if text.trim().is_empty() {
        return Err(ExtractError::InvalidDocument);
    }
    if text.chars().count() > max_chars {
        return Err(ExtractError::TextTooLong { limit: max_chars });
    }
    Ok(())
}

/// Reformat raw extracted text for reading.
///
/// Normalizes line endings, collapses runs of blank lines to one, rejoins
/// words hyphenated across line breaks, collapses repeated spaces, and trims
/// each line.
pub fn reformat_extracted_text(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let dehyphenated = join_hyphenated_line_breaks(&normalized);
    let collapsed = collapse_spaces(&dehyphenated);

    let mut out = String::with_capacity(collapsed.len());
    let mut blank_run = 0usize;
    for line in collapsed.split('\n') {
        let line = line.trim();
        if line.is_empty() {
            blank_run += 1;
            // At most one blank line between paragraphs.
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(line);
    }
    out.trim().to_string()
}

/// Rejoin `word-\nword` into `wordword`. Only fires when non-whitespace
/// directly surrounds the break, so list dashes survive.
fn join_hyphenated_line_breaks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut prev_non_ws = false;
    while let Some(ch) = chars.next() {
        if ch == '-' && prev_non_ws {
            if let Some('\n') = chars.peek() {
                let mut lookahead = chars.clone();
                lookahead.next();
                if matches!(lookahead.peek(), Some(next) if !next.is_whitespace()) {
                    chars.next();
                    continue;
                }
            }
        }
        prev_non_ws = !ch.is_whitespace();
        out.push(ch);
    }
    out
}

fn collapse_spaces(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space_run = false;
    for ch in text.chars() {
        if ch == ' ' {
            if !in_space_run {
                out.push(ch);
            }
            in_space_run = true;
        } else {
            in_space_run = false;
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{
        check_extracted_text, check_upload_size, reformat_extracted_text, ExtractError,
    };

    #[test]
    fn upload_size_gate() {
        assert!(check_upload_size(10, 10).is_ok());
        assert_eq!(
            check_upload_size(10 * 1024 * 1024 + 1, 10 * 1024 * 1024),
            Err(ExtractError::FileTooLarge { limit_mb: 10 })
        );
    }

    #[test]
    fn extracted_text_gate() {
        assert!(check_extracted_text("Hei", 100).is_ok());
        assert_eq!(
            check_extracted_text("   \n ", 100),
            Err(ExtractError::InvalidDocument)
        );
        assert_eq!(
            check_extracted_text("pitkä teksti", 5),
            Err(ExtractError::TextTooLong { limit: 5 })
        );
    }

    #[test]
    fn reformat_normalizes_line_endings_and_blank_runs() {
        let raw = "rivi yksi\r\nrivi kaksi\r\r\n\n\nrivi kolme";
        let formatted = reformat_extracted_text(raw);
        assert_eq!(formatted, "rivi yksi\nrivi kaksi\n\nrivi kolme");
    }

    #[test]
    fn reformat_joins_hyphenated_words_across_breaks() {
        let raw = "suomen-\nkielinen teksti ja väli-\nviiva";
        let formatted = reformat_extracted_text(raw);
        assert_eq!(formatted, "suomenkielinen teksti ja väliviiva");
    }

    #[test]
    fn reformat_keeps_list_dashes() {
        let raw = "ostoslista:\n- maito\n- leipä";
        let formatted = reformat_extracted_text(raw);
        assert_eq!(formatted, "ostoslista:\n- maito\n- leipä");
    }

    #[test]
    fn reformat_collapses_spaces_and_trims_lines() {
        let raw = "  sana   toinen  \n   kolmas sana   ";
        let formatted = reformat_extracted_text(raw);
        assert_eq!(formatted, "sana toinen\nkolmas sana");
    }

    #[test]
    fn error_codes_are_stable() {
        assert_eq!(ExtractError::FileTooLarge { limit_mb: 10 }.code(), "FileTooLarge");
        assert_eq!(ExtractError::InvalidDocument.code(), "InvalidDocument");
        assert_eq!(ExtractError::TextTooLong { limit: 9 }.code(), "TextTooLong");
        assert_eq!(ExtractError::ParsingFailed.code(), "ParsingFailed");
    }
}
