//! Async HTTP client for the completion service

use std::fmt;
use std::time::Duration;

use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::ApiError;
use super::types::{
    CompletionRequest, CompletionResponse, ErrorBody, Message, PromptSuggestion,
    StartConversationResponse, SuggestRequest,
};

/// Client for the suggestion, completion, and conversation endpoints
pub struct ApiClient {
    http: Client,
    base_url: Url,
    api_key: Option<String>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client for the service rooted at `base_url`
    ///
    /// Blank API keys are treated as absent.
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url.trim()).map_err(|e| {
            ApiError::NotConfigured(format!("invalid base URL '{}': {}", base_url, e))
        })?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(ApiError::NotConfigured(format!(
                "base URL must be http(s): '{}'",
                base_url
            )));
        }

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::NotConfigured(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Full URL for an endpoint path relative to the base URL
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => builder.bearer_auth(key),
            None => builder,
        }
    }

    /// `POST /suggest`: prompts most similar to `query`, at most `top_k`
    pub async fn suggest(&self, query: &str, top_k: u32) -> Result<Vec<PromptSuggestion>, ApiError> {
        let builder = self
            .authorize(self.http.post(self.endpoint("suggest")))
            .json(&SuggestRequest { query, top_k });

        let mut suggestions: Vec<PromptSuggestion> = send_json(builder).await?;
        suggestions.truncate(top_k as usize);
        Ok(suggestions)
    }

    /// `POST /conversation/start`: returns the new conversation id
    pub async fn start_conversation(&self, title: Option<&str>) -> Result<i64, ApiError> {
        let mut builder = self.authorize(self.http.post(self.endpoint("conversation/start")));
        if let Some(title) = title {
            builder = builder.query(&[("title", title)]);
        }

        let started: StartConversationResponse = send_json(builder).await?;
        Ok(started.conversation_id)
    }

    /// `GET /conversation/{id}/messages`: history in chronological order
    pub async fn messages(&self, conversation_id: i64) -> Result<Vec<Message>, ApiError> {
        let path = format!("conversation/{}/messages", conversation_id);
        let builder = self.authorize(self.http.get(self.endpoint(&path)));
        send_json(builder).await
    }

    /// `POST /completion`: the assistant's reply text
    pub async fn complete(&self, request: &CompletionRequest) -> Result<String, ApiError> {
        let builder = self
            .authorize(self.http.post(self.endpoint("completion")))
            .json(request);

        let completion: CompletionResponse = send_json(builder).await?;
        Ok(completion.response)
    }
}

/// Send a request and decode a JSON success body
async fn send_json<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
    let response = builder
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Api {
            code: status.as_u16(),
            message: error_message(&body),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Human-readable message from an error body
///
/// Uses `detail` when the body is `{"detail": ...}`, otherwise the raw text.
pub(crate) fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: Value::String(detail),
        }) => detail,
        Ok(ErrorBody { detail }) => detail.to_string(),
        Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
