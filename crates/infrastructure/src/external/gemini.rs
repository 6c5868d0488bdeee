use async_trait::async_trait;
use relief_application::ports::LocationExtractor;
use relief_domain::DomainError;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::http_client::send_checked;

const SERVICE: &str = "gemini";

/// Place-name extraction through the `generateContent` endpoint.
pub struct GeminiLocationExtractor {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl GeminiLocationExtractor {
    pub fn new(client: reqwest::Client, base_url: &str, model: &str, api_key: Option<String>) -> Self {
        Self {
            client,
            endpoint: format!(
                "{}/models/{}:generateContent",
                base_url.trim_end_matches('/'),
                model
            ),
            api_key,
        }
    }

    fn prompt(description: &str) -> String {
        format!(
            "Extract a place name from the following text: \"{}\". Return just the name.",
            description
        )
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}

#[async_trait]
impl LocationExtractor for GeminiLocationExtractor {
    #[instrument(skip(self, description))]
    async fn extract_location(&self, description: &str) -> Result<Option<String>, DomainError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            DomainError::ExternalService("Gemini API key is not configured".to_string())
        })?;

        let prompt = Self::prompt(description);
        let body = GenerateRequest {
            contents: [Content {
                parts: [Part { text: &prompt }],
            }],
        };

        let response = send_checked(
            SERVICE,
            self.client
                .post(&self.endpoint)
                .query(&[("key", api_key)])
                .json(&body),
        )
        .await?;

        let parsed: GenerateResponse =
            response
                .json()
                .await
                .map_err(|e| DomainError::InvalidResponse {
                    service: SERVICE.to_string(),
                    message: e.to_string(),
                })?;

        let text = parsed.first_text();
        debug!(extracted = ?text, "Gemini answered");

        Ok(text)
    }
}
