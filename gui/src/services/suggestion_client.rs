// Client for the generative-text endpoint behind the upgrade assistant.
// Speaks the Gemini `generateContent` REST shape.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::config::AssistantSettings;

pub const SUGGESTION_FAILURE_MESSAGE: &str =
    "Failed to get suggestions. There might be an issue with the API key or network.";

pub const UPGRADE_PROMPT: &str = r#"You are an expert data scientist and machine learning engineer specializing in time-series forecasting for financial markets.
A user has built an XGBoost model to predict 3-minute cryptocurrency price movements and is looking for specific, actionable advice to improve it.
The user has mentioned four areas of interest:
1. Feature Engineering
2. Hyperparameter Tuning
3. Exploring other time-series models
4. Incorporating external data

Based on these topics, provide a concise but detailed list of suggestions. For each suggestion, briefly explain why it's useful and give a concrete example. Structure your response in a clear, easy-to-read format. Use markdown for formatting, including headers for each of the four topics, and bullet points for suggestions. For example:

### Feature Engineering
*   **Create Lagged Features:** This helps the model see recent price action. For example, use the closing price from 1, 2, and 3 intervals ago as features.
*   **Add Technical Indicators:** Indicators can capture momentum and volatility. For example, calculate a 14-period Relative Strength Index (RSI) or Moving Average Convergence Divergence (MACD).

Continue this pattern for all four topics."#;

#[derive(Error, Debug)]
pub enum SuggestionError {
    #[error("No API key configured for the suggestion endpoint")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Suggestion endpoint returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Suggestion endpoint returned no text")]
    EmptyResponse,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize, Default)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize, Default)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize, Default)]
pub struct CandidatePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate.
    pub fn into_text(self) -> Result<String, SuggestionError> {
        let text: String = self
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();
        if text.trim().is_empty() {
            Err(SuggestionError::EmptyResponse)
        } else {
            Ok(text)
        }
    }
}

#[derive(Clone)]
pub struct SuggestionClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl SuggestionClient {
    pub fn new(settings: &AssistantSettings, api_key: Option<String>) -> Result<Self, SuggestionError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            endpoint: settings.endpoint.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            api_key,
        })
    }

    pub fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }

    pub async fn fetch_suggestions(&self) -> Result<String, SuggestionError> {
        let api_key = self.api_key.as_deref().ok_or(SuggestionError::MissingApiKey)?;
        let body = GenerateContentRequest {
            contents: vec![Content { parts: vec![Part { text: UPGRADE_PROMPT }] }],
        };

        tracing::info!(model = %self.model, "Requesting model-improvement suggestions");
        let response = self
            .http
            .post(self.url())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Suggestion request rejected");
            return Err(SuggestionError::Api { status: status.as_u16(), body });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        parsed.into_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> AssistantSettings {
        AssistantSettings {
            endpoint: "https://example.invalid/v1beta/".to_string(),
            model: "gemini-2.5-flash".to_string(),
            timeout_secs: 5,
        }
    }

    #[test]
    fn test_url_joins_endpoint_and_model() {
        let client = SuggestionClient::new(&settings(), None).unwrap();
        assert_eq!(client.url(), "https://example.invalid/v1beta/models/gemini-2.5-flash:generateContent");
    }

    #[tokio::test]
    async fn test_missing_key_fails_without_network() {
        let client = SuggestionClient::new(&settings(), None).unwrap();
        assert!(matches!(client.fetch_suggestions().await, Err(SuggestionError::MissingApiKey)));
    }

    #[test]
    fn test_response_text_is_concatenated() {
        let raw = r####"{"candidates":[{"content":{"parts":[{"text":"### Feature Engineering\n"},{"text":"*   **Lags**"}]}}]}"####;
        let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.into_text().unwrap(), "### Feature Engineering\n*   **Lags**");
    }

    #[test]
    fn test_response_without_text_is_empty_error() {
        let parsed: GenerateContentResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(matches!(parsed.into_text(), Err(SuggestionError::EmptyResponse)));
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(parsed.into_text(), Err(SuggestionError::EmptyResponse)));
    }

    #[test]
    fn test_prompt_names_all_four_topics() {
        for topic in ["Feature Engineering", "Hyperparameter Tuning", "other time-series models", "external data"] {
            assert!(UPGRADE_PROMPT.contains(topic), "missing {}", topic);
        }
    }
}
