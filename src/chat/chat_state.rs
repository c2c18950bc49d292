use log::{debug, warn};

use crate::api::{ApiError, ChatModel, CompletionRequest, Message, Role};
use crate::transcript::Transcript;

use super::scroll_state::ScrollState;

/// What the app should do after a completion finished
#[derive(Debug, PartialEq)]
pub enum CompletionOutcome {
    /// Reply stored; reload the transcript of this conversation
    Refetch(i64),
    /// Reply stored; the exchange was appended locally
    Appended,
    Failed(ApiError),
    /// No completion was in flight
    Ignored,
}

/// Conversation view state
#[derive(Debug)]
pub struct ChatState {
    conversation_id: Option<i64>,
    messages: Vec<Message>,
    last_reply: Option<String>,
    model: ChatModel,
    loading: bool,
    /// Prompt of the in-flight completion
    pending_prompt: Option<String>,
    pub scroll: ScrollState,
}

impl ChatState {
    pub fn new(model: ChatModel) -> Self {
        Self {
            conversation_id: None,
            messages: Vec::new(),
            last_reply: None,
            model,
            loading: false,
            pending_prompt: None,
            scroll: ScrollState::new(),
        }
    }

    pub fn conversation_id(&self) -> Option<i64> {
        self.conversation_id
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn model(&self) -> ChatModel {
        self.model
    }

    pub fn set_model(&mut self, model: ChatModel) {
        self.model = model;
    }

    /// Switch to the next model and return it
    pub fn cycle_model(&mut self) -> ChatModel {
        self.model = self.model.next();
        self.model
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn pending_prompt(&self) -> Option<&str> {
        self.pending_prompt.as_deref()
    }

    /// Most recent assistant reply, falling back to the transcript
    pub fn last_reply(&self) -> Option<&str> {
        self.last_reply.as_deref().or_else(|| {
            self.messages
                .iter()
                .rev()
                .find(|m| m.role == Role::Assistant)
                .map(|m| m.content.as_str())
        })
    }

    /// Start a completion for `prompt`
    ///
    /// Returns `None` without changing state if the prompt is blank or a
    /// completion is already in flight.
    pub fn begin_completion(&mut self, prompt: String) -> Option<CompletionRequest> {
        if self.loading || prompt.trim().is_empty() {
            return None;
        }
        self.loading = true;
        self.scroll.jump_to_bottom();
        let request = CompletionRequest::new(prompt.clone(), self.model, self.conversation_id);
        self.pending_prompt = Some(prompt);
        Some(request)
    }

    pub fn finish_completion(&mut self, result: Result<String, ApiError>) -> CompletionOutcome {
        if !self.loading {
            warn!("Completion response arrived with no request in flight");
            return CompletionOutcome::Ignored;
        }
        self.loading = false;
        let prompt = self.pending_prompt.take().unwrap_or_default();

        match result {
            Ok(reply) => {
                self.last_reply = Some(reply.clone());
                self.scroll.jump_to_bottom();
                match self.conversation_id {
                    Some(id) => CompletionOutcome::Refetch(id),
                    None => {
                        self.messages.push(Message::user(prompt));
                        self.messages.push(Message::assistant(reply));
                        CompletionOutcome::Appended
                    }
                }
            }
            Err(e) => CompletionOutcome::Failed(e),
        }
    }

    /// Make `id` the active conversation with an empty transcript
    pub fn conversation_started(&mut self, id: i64) {
        debug!("Active conversation is now {}", id);
        self.conversation_id = Some(id);
        self.messages.clear();
        self.last_reply = None;
        self.scroll = ScrollState::new();
    }

    /// Replace the transcript with messages fetched for `conversation_id`
    ///
    /// Returns false and changes nothing if that conversation is no longer
    /// active.
    pub fn apply_messages(&mut self, conversation_id: i64, messages: Vec<Message>) -> bool {
        if self.conversation_id != Some(conversation_id) {
            debug!(
                "Dropping messages for conversation {} (active: {:?})",
                conversation_id, self.conversation_id
            );
            return false;
        }
        self.messages = messages;
        self.scroll.jump_to_bottom();
        true
    }

    pub fn set_local_messages(&mut self, messages: Vec<Message>) {
        self.messages = messages;
        self.scroll.jump_to_bottom();
    }

    /// Load an imported transcript; its conversation (if any) becomes active
    pub fn load_transcript(&mut self, transcript: Transcript) {
        self.conversation_id = transcript.conversation_id;
        self.messages = transcript.messages;
        self.last_reply = None;
        self.scroll = ScrollState::new();
    }

    /// Snapshot for export
    pub fn to_transcript(&self) -> Transcript {
        Transcript {
            conversation_id: self.conversation_id,
            model: self.model,
            exported_at: None,
            messages: self.messages.clone(),
        }
    }
}

#[cfg(test)]
#[path = "chat_state_tests.rs"]
mod chat_state_tests;
