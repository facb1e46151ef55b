//! Pure helpers for the reading view, kept free of egui types for testing.

use lukulasi_core::token::Token;

/// One visual line of the reading view: word tokens with their indices.
/// An empty line renders as paragraph spacing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct ReadingLine {
    pub words: Vec<(usize, String)>,
}

/// Split the token sequence into visual lines on newlines inside whitespace
/// runs. Word tokens keep their sequence indices so hit-testing can map back
/// to token ranges.
pub(crate) fn reading_lines(tokens: &[Token]) -> Vec<ReadingLine> {
    let mut lines = vec![ReadingLine::default()];
    for token in tokens {
        if token.is_word() {
            lines
                .last_mut()
                .expect("lines is never empty")
                .words
                .push((token.index, token.content.clone()));
        } else {
            for _ in token.content.chars().filter(|c| *c == '\n') {
                lines.push(ReadingLine::default());
            }
        }
    }
    lines
}

/// Bucket a scroll offset for persistence so the store is written when the
/// position meaningfully moves, not on every sub-pixel frame delta.
pub(crate) fn scroll_bucket(offset: f32) -> i32 {
    (offset / 4.0).round() as i32
}
