//! JSON wire types for the completion service

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Model family the completion endpoint should route to
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum ChatModel {
    #[default]
    #[serde(rename = "openai")]
    #[value(name = "openai")]
    OpenAi,
    #[serde(rename = "claude")]
    #[value(name = "claude")]
    Claude,
    #[serde(rename = "local")]
    #[value(name = "local")]
    Local,
}

impl ChatModel {
    /// Next model in selector order, wrapping around
    pub fn next(self) -> Self {
        match self {
            ChatModel::OpenAi => ChatModel::Claude,
            ChatModel::Claude => ChatModel::Local,
            ChatModel::Local => ChatModel::OpenAi,
        }
    }

    /// Identifier sent on the wire
    pub fn as_str(self) -> &'static str {
        match self {
            ChatModel::OpenAi => "openai",
            ChatModel::Claude => "claude",
            ChatModel::Local => "local",
        }
    }
}

impl fmt::Display for ChatModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ChatModel::OpenAi => "OpenAI",
            ChatModel::Claude => "Claude",
            ChatModel::Local => "Local model",
        };
        write!(f, "{}", label)
    }
}

/// Body of `POST /suggest`
#[derive(Debug, Serialize)]
pub(crate) struct SuggestRequest<'a> {
    pub query: &'a str,
    pub top_k: u32,
}

/// One entry of the `/suggest` response, most similar first
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PromptSuggestion {
    pub prompt: String,
    pub similarity: f64,
}

/// Body of `POST /completion`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub prompt: String,
    pub model: ChatModel,
    pub model_params: Map<String, Value>,
    /// `null` when no conversation is active
    pub conversation_id: Option<i64>,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>, model: ChatModel, conversation_id: Option<i64>) -> Self {
        Self {
            prompt: prompt.into(),
            model,
            model_params: Map::new(),
            conversation_id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CompletionResponse {
    pub response: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StartConversationResponse {
    pub conversation_id: i64,
}

/// Error body produced by the service: `{"detail": ...}`
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub detail: Value,
}

/// Author of a conversation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
    #[serde(other)]
    Other,
}

/// A single conversation message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
