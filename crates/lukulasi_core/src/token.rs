//! Text tokenization into word and whitespace runs.

use serde::{Deserialize, Serialize};

/// What a token holds: a run of non-whitespace or a run of whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Whitespace,
}

/// Atomic unit of tokenized text.
///
/// Tokens are ordered and contiguous: concatenating every `content` field in
/// index order reproduces the original input exactly. `index` is stable for
/// the lifetime of one tokenization pass and addresses selection ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub index: usize,
    pub content: String,
    pub kind: TokenKind,
}

impl Token {
    /// Returns `true` for word tokens (the only hoverable kind).
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}

/// Inclusive span of token indices representing a hover target or selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRange {
    pub start: usize,
    pub end: usize,
}

impl TokenRange {
    /// Build a range from two endpoints in either order.
    ///
    /// # Returns
    /// A range with `start <= end`.
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Single-token range, used for hover targets.
    pub fn single(index: usize) -> Self {
        Self {
            start: index,
            end: index,
        }
    }

    /// Returns `true` when `index` falls inside the range.
    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }
}

/// Split text into alternating word and whitespace tokens.
///
/// Only whitespace boundaries split tokens; diacritics, punctuation, and any
/// other non-whitespace stay inside word tokens verbatim.
///
/// # Returns
/// An ordered token sequence whose concatenated contents equal `text`.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut run = String::new();
    let mut run_kind: Option<TokenKind> = None;

    for ch in text.chars() {
        let kind = if ch.is_whitespace() {
            TokenKind::Whitespace
        } else {
            TokenKind::Word
        };
        if run_kind != Some(kind) {
            if let Some(prev_kind) = run_kind.take() {
                tokens.push(Token {
                    index: tokens.len(),
                    content: std::mem::take(&mut run),
                    kind: prev_kind,
                });
            }
            run_kind = Some(kind);
        }
        run.push(ch);
    }

    if let Some(kind) = run_kind {
        tokens.push(Token {
            index: tokens.len(),
            content: run,
            kind,
        });
    }

    tokens
}

/// Concatenate token contents back into the original text.
pub fn join_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.content.as_str()).collect()
}

/// Concatenate the contents of the tokens covered by `range`.
///
/// Out-of-bounds indices are clipped to the sequence.
pub fn range_text(tokens: &[Token], range: TokenRange) -> String {
    tokens
        .iter()
        .skip(range.start)
        .take(range.end.saturating_sub(range.start) + 1)
        .map(|t| t.content.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{join_tokens, range_text, tokenize, TokenKind, TokenRange};

    #[test]
    fn tokenize_round_trips_exactly() {
        let cases = [
            "",
            "sana",
            "Hei maailma",
            "  leading and   repeated  spaces ",
            "rivi yksi\nrivi kaksi\n\n\nrivi kolme",
            "tabs\tand\r\nwindows line endings",
            "hyvää yötä, näkemiin — älä unohda",
        ];
        for case in cases {
            let tokens = tokenize(case);
            assert_eq!(join_tokens(&tokens), case, "input: {:?}", case);
        }
    }

    #[test]
    fn tokenize_partitions_kinds_and_alternates() {
        let tokens = tokenize("yksi  kaksi\nkolme");
        for token in &tokens {
            let all_ws = token.content.chars().all(char::is_whitespace);
            match token.kind {
                TokenKind::Whitespace => assert!(all_ws, "mixed token: {:?}", token),
                TokenKind::Word => {
                    assert!(
                        token.content.chars().all(|c| !c.is_whitespace()),
                        "mixed token: {:?}",
                        token
                    )
                }
            }
        }
        for pair in tokens.windows(2) {
            assert_ne!(pair[0].kind, pair[1].kind, "adjacent tokens share a kind");
        }
    }

    #[test]
    fn tokenize_is_stable_on_its_own_output() {
        let first = tokenize("  hei   sinä\tmaailma  ");
        let second = tokenize(&join_tokens(&first));
        assert_eq!(first, second);
    }

    #[test]
    fn tokenize_preserves_diacritics_inside_words() {
        let tokens = tokenize("syö äitisi öljyä");
        let words: Vec<&str> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Word)
            .map(|t| t.content.as_str())
            .collect();
        assert_eq!(words, ["syö", "äitisi", "öljyä"]);
    }

    #[test]
    fn tokenize_empty_input_is_empty() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn tokenize_indices_are_contiguous() {
        let tokens = tokenize("a b c");
        let indices: Vec<usize> = tokens.iter().map(|t| t.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn token_range_orders_endpoints() {
        let range = TokenRange::new(7, 2);
        assert_eq!(range.start, 2);
        assert_eq!(range.end, 7);
        let range = TokenRange::new(3, 3);
        assert_eq!((range.start, range.end), (3, 3));
    }

    #[test]
    fn range_text_clips_to_sequence() {
        let tokens = tokenize("yksi kaksi kolme");
        assert_eq!(range_text(&tokens, TokenRange::new(0, 2)), "yksi kaksi");
        assert_eq!(range_text(&tokens, TokenRange::new(2, 99)), "kaksi kolme");
    }
}
