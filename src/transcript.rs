//! Transcript export and import
//!
//! Exports are pretty-printed JSON carrying the conversation id, model, and
//! messages. Imports accept that format or a bare array of messages.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::api::{ChatModel, Message};
use crate::error::PromptdeckError;

/// On-disk transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    #[serde(default)]
    pub conversation_id: Option<i64>,
    #[serde(default)]
    pub model: ChatModel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<String>,
    pub messages: Vec<Message>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TranscriptFile {
    Full(Transcript),
    Messages(Vec<Message>),
}

/// `promptdeck-<conversation id or "local">-<timestamp>.json`
pub fn export_file_name(conversation_id: Option<i64>, now: DateTime<Local>) -> String {
    let scope = match conversation_id {
        Some(id) => id.to_string(),
        None => "local".to_string(),
    };
    format!("promptdeck-{}-{}.json", scope, now.format("%Y%m%d-%H%M%S"))
}

/// Write `transcript` into `dir` and return the file path
pub fn export_to_dir(
    dir: &Path,
    transcript: &Transcript,
    now: DateTime<Local>,
) -> Result<PathBuf, PromptdeckError> {
    fs::create_dir_all(dir)?;

    let mut transcript = transcript.clone();
    transcript.exported_at = Some(now.to_rfc3339());

    let path = dir.join(export_file_name(transcript.conversation_id, now));
    let json = serde_json::to_string_pretty(&transcript)
        .map_err(|e| PromptdeckError::InvalidTranscript(e.to_string()))?;
    fs::write(&path, json)?;

    log::debug!("Exported {} messages to {}", transcript.messages.len(), path.display());
    Ok(path)
}

/// Parse transcript JSON
pub fn parse_transcript(json: &str) -> Result<Transcript, PromptdeckError> {
    let file: TranscriptFile = serde_json::from_str(json)
        .map_err(|e| PromptdeckError::InvalidTranscript(e.to_string()))?;

    Ok(match file {
        TranscriptFile::Full(transcript) => transcript,
        TranscriptFile::Messages(messages) => Transcript {
            conversation_id: None,
            model: ChatModel::default(),
            exported_at: None,
            messages,
        },
    })
}

pub fn import_from_path(path: &Path) -> Result<Transcript, PromptdeckError> {
    let json = fs::read_to_string(path)?;
    parse_transcript(&json)
}

#[cfg(test)]
#[path = "transcript_tests.rs"]
mod transcript_tests;
