//! Offline word-list provider for tests and network-less runs.

use super::{Lang, ProviderError, TranslationProvider};

const FI_EN: &[(&str, &str)] = &[
    ("hei", "hello"),
    ("näkemiin", "goodbye"),
    ("kiitos", "thank you"),
    ("kyllä", "yes"),
    ("ei", "no"),
    ("maailma", "world"),
    ("kirja", "book"),
    ("sana", "word"),
];

/// Fixed fi↔en word list behind the provider capability.
#[derive(Debug, Default)]
pub struct OfflineProvider;

impl OfflineProvider {
    pub fn new() -> Self {
        Self
    }

    fn lookup(word: &str, source: Lang) -> Option<&'static str> {
        let needle = word.to_lowercase();
        match source {
            Lang::Fi => FI_EN
                .iter()
                .find(|(fi, _)| *fi == needle)
                .map(|(_, en)| *en),
            Lang::En => FI_EN
                .iter()
                .find(|(_, en)| *en == needle)
                .map(|(fi, _)| *fi),
        }
    }
}

impl TranslationProvider for OfflineProvider {
    fn name(&self) -> &'static str {
        "Offline"
    }

    fn translate(&self, text: &str, source: Lang, target: Lang) -> Result<String, ProviderError> {
        if source == target {
            return Err(ProviderError::UnsupportedPair(source, target));
        }
        match Self::lookup(text.trim(), source) {
            Some(translated) => Ok(translated.to_string()),
            None => Ok(format!("[no offline translation for '{}']", text.trim())),
        }
    }
}
