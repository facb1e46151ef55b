//! PDF extraction behind the core [`DocumentExtractor`] seam.

use lukulasi_core::extract::{
    check_extracted_text, check_upload_size, reformat_extracted_text, DocumentExtractor,
    ExtractError, ExtractedDocument,
};
use tracing::warn;

/// Extracts text from uploaded PDFs with size and length limits applied.
pub struct PdfExtractor {
    max_bytes: usize,
    max_chars: usize,
}

impl PdfExtractor {
    pub fn new(max_bytes: usize, max_chars: usize) -> Self {
        Self {
            max_bytes,
            max_chars,
        }
    }
}

impl DocumentExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<ExtractedDocument, ExtractError> {
        check_upload_size(bytes.len(), self.max_bytes)?;

        let document = lopdf::Document::load_mem(bytes).map_err(|err| {
            warn!("pdf load failed: {}", err);
            ExtractError::ParsingFailed
        })?;
        let page_count = document.get_pages().len();

        let raw_text = pdf_extract::extract_text_from_mem(bytes).map_err(|err| {
            warn!("pdf text extraction failed: {}", err);
            ExtractError::ParsingFailed
        })?;

        let text = reformat_extracted_text(&raw_text);
        check_extracted_text(&text, self.max_chars)?;

        Ok(ExtractedDocument {
            text,
            page_count,
            title: None,
            author: None,
        })
    }
}
