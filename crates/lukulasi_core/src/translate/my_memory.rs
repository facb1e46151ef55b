//! Remote dictionary lookup against the MyMemory translation API.

use super::{Lang, ProviderError, TranslationProvider};
use crate::constants::TRANSLATE_TIMEOUT;
use crate::error::AppError;
use serde::Deserialize;

const API_URL: &str = "https://api.mymemory.translated.net/get";

#[derive(Debug, Deserialize)]
struct MyMemoryResponse {
    #[serde(rename = "responseData")]
    response_data: ResponseData,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// Blocking HTTP provider backed by api.mymemory.translated.net.
pub struct MyMemoryProvider {
    client: reqwest::blocking::Client,
}

impl MyMemoryProvider {
    /// Build the provider with the request timeout applied.
    ///
    /// # Errors
    /// Returns [`AppError::ProviderUnavailable`] if the HTTP client cannot be
    /// constructed.
    pub fn new() -> Result<Self, AppError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(TRANSLATE_TIMEOUT)
            .build()
            .map_err(|err| AppError::ProviderUnavailable(err.to_string()))?;
        Ok(Self { client })
    }
}

impl TranslationProvider for MyMemoryProvider {
    fn name(&self) -> &'static str {
        "MyMemory"
    }

    fn translate(&self, text: &str, source: Lang, target: Lang) -> Result<String, ProviderError> {
        let langpair = format!("{}|{}", source.code(), target.code());
        let response = self
            .client
            .get(API_URL)
            .query(&[("q", text), ("langpair", langpair.as_str())])
            .send()?;

        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status().as_u16()));
        }

        let payload: MyMemoryResponse = response
            .json()
            .map_err(|_| ProviderError::MalformedPayload)?;
        Ok(payload.response_data.translated_text)
    }
}
