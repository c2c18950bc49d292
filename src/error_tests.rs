//! Tests for PromptdeckError type

use super::*;

#[test]
fn test_invalid_transcript_error_display() {
    let error = PromptdeckError::InvalidTranscript("expected value at line 1".to_string());
    let msg = error.to_string();
    assert!(msg.contains("Invalid transcript"));
    assert!(msg.contains("expected value at line 1"));
}

#[test]
fn test_preferences_error_display() {
    let error = PromptdeckError::Preferences("unsupported value".to_string());
    assert_eq!(
        error.to_string(),
        "Could not write preferences: unsupported value"
    );
}

#[test]
fn test_io_error_from_std_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test error");
    let err = PromptdeckError::from(io_err);
    assert!(matches!(err, PromptdeckError::Io(_)));
    assert!(err.to_string().contains("test error"));
}
