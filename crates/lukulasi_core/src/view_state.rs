//! View state model, restore policy, and the stored-range codec.

use crate::token::TokenRange;

/// User-visible state mirrored to durable storage.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub input_text: String,
    pub input_mode: bool,
    pub last_translated: Option<TokenRange>,
    pub scroll_y: Option<f32>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            input_text: String::new(),
            input_mode: true,
            last_translated: None,
            scroll_y: None,
        }
    }
}

impl ViewState {
    /// Apply the restore-on-load policy to raw stored values.
    ///
    /// The app returns to reading mode only when the stored flag says the
    /// user was mid-reading AND the stored text is non-empty; every other
    /// combination restores into input mode.
    pub fn restore(
        stored_text: Option<String>,
        stored_input_mode: Option<bool>,
        last_translated: Option<TokenRange>,
        scroll_y: Option<f32>,
    ) -> Self {
        let input_text = stored_text.unwrap_or_default();
        let input_mode = match stored_input_mode {
            Some(false) if !input_text.is_empty() => false,
            _ => true,
        };
        if input_mode {
            Self {
                input_text,
                input_mode,
                last_translated: None,
                scroll_y: None,
            }
        } else {
            Self {
                input_text,
                input_mode,
                last_translated,
                scroll_y,
            }
        }
    }
}

/// Encode a token range as the stored JSON object `{"start":n,"end":n}`.
pub fn encode_range(range: TokenRange) -> String {
    serde_json::json!({ "start": range.start, "end": range.end }).to_string()
}

/// Decode a stored token range.
///
/// Both fields must be present, finite, and non-negative; anything else is
/// treated as absent. Endpoints are reordered if needed.
pub fn decode_range(raw: &str) -> Option<TokenRange> {
    let value: serde_json::Value = serde_json::from_str(raw).ok()?;
    let start = finite_index(value.get("start")?)?;
    let end = finite_index(value.get("end")?)?;
    Some(TokenRange::new(start, end))
}

fn finite_index(value: &serde_json::Value) -> Option<usize> {
    let number = value.as_f64()?;
    if !number.is_finite() || number < 0.0 {
        return None;
    }
    Some(number as usize)
}

#[cfg(test)]
mod tests {
    use super::{decode_range, encode_range, ViewState};
    use crate::token::TokenRange;

    #[test]
    fn restore_policy_matrix() {
        struct Case {
            text: Option<&'static str>,
            input_mode: Option<bool>,
            expect_input_mode: bool,
            expect_text: &'static str,
        }
        let cases = [
            // Mid-reading with text restores the reading view.
            Case {
                text: Some("Hei maailma"),
                input_mode: Some(false),
                expect_input_mode: false,
                expect_text: "Hei maailma",
            },
            // Cleared text always lands back in input mode.
            Case {
                text: Some(""),
                input_mode: Some(true),
                expect_input_mode: true,
                expect_text: "",
            },
            Case {
                text: Some(""),
                input_mode: Some(false),
                expect_input_mode: true,
                expect_text: "",
            },
            Case {
                text: Some("Hei"),
                input_mode: Some(true),
                expect_input_mode: true,
                expect_text: "Hei",
            },
            // Nothing stored: defaults.
            Case {
                text: None,
                input_mode: None,
                expect_input_mode: true,
                expect_text: "",
            },
        ];

        for case in cases {
            let state = ViewState::restore(
                case.text.map(str::to_string),
                case.input_mode,
                Some(TokenRange::new(1, 3)),
                Some(120.0),
            );
            assert_eq!(
                state.input_mode, case.expect_input_mode,
                "text {:?}, mode {:?}",
                case.text, case.input_mode
            );
            assert_eq!(state.input_text, case.expect_text);
            if state.input_mode {
                assert_eq!(state.last_translated, None);
                assert_eq!(state.scroll_y, None);
            } else {
                assert_eq!(state.last_translated, Some(TokenRange::new(1, 3)));
                assert_eq!(state.scroll_y, Some(120.0));
            }
        }
    }

    #[test]
    fn range_codec_round_trips() {
        let range = TokenRange::new(4, 17);
        assert_eq!(decode_range(&encode_range(range)), Some(range));
    }

    #[test]
    fn range_decoding_rejects_invalid_payloads() {
        let cases = [
            "",
            "not json",
            "{}",
            r#"{"start":1}"#,
            r#"{"start":"a","end":2}"#,
            r#"{"start":null,"end":2}"#,
            r#"{"start":-1,"end":2}"#,
            r#"{"start":1,"end":true}"#,
        ];
        for case in cases {
            assert_eq!(decode_range(case), None, "payload: {:?}", case);
        }
    }

    #[test]
    fn range_decoding_reorders_endpoints() {
        assert_eq!(
            decode_range(r#"{"start":9,"end":2}"#),
            Some(TokenRange::new(2, 9))
        );
    }
}
