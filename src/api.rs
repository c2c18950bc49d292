//! Completion service access
//!
//! Defines the ApiError type, the JSON wire types, the async HTTP client, and
//! the background worker that runs requests off the UI thread.

use thiserror::Error;

mod client;
mod types;
mod worker;

pub use client::ApiClient;
pub use types::{ChatModel, CompletionRequest, Message, PromptSuggestion, Role};
pub use worker::{ApiHandle, ApiRequest, ApiResponse, spawn_worker};

/// Errors that can occur while talking to the completion service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Client could not be set up (bad base URL, TLS backend failure)
    #[error("Service not configured: {0}")]
    NotConfigured(String),

    /// Network error during the request
    #[error("Network error: {0}")]
    Network(String),

    /// Service answered with a non-success status
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Response body was not the expected JSON
    #[error("Parse error: {0}")]
    Parse(String),
}
