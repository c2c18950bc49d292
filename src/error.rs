use thiserror::Error;

/// Custom error types for promptdeck
#[derive(Debug, Error)]
pub enum PromptdeckError {
    #[error("Invalid transcript file: {0}")]
    InvalidTranscript(String),

    #[error("Could not write preferences: {0}")]
    Preferences(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
