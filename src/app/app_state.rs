use std::path::PathBuf;

use chrono::Local;
use log::debug;

use crate::api::{ApiHandle, ApiRequest, ApiResponse};
use crate::chat::{ChatState, CompletionOutcome};
use crate::config::{ClipboardBackend, Config};
use crate::input::InputState;
use crate::layout::LayoutRegions;
use crate::notification::NotificationState;
use crate::prefs::{Prefs, save_prefs};
use crate::search::SearchState;
use crate::suggest::{SuggestState, SuggestionItem};
use crate::theme::Theme;
use crate::transcript::{self, Transcript};

/// Which pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    InputField,
    TranscriptPane,
    Search,
}

/// Settings fixed at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    pub suggest_enabled: bool,
    pub top_k: u32,
    pub clipboard_backend: ClipboardBackend,
    pub export_dir: PathBuf,
}

impl From<&Config> for AppSettings {
    fn from(config: &Config) -> Self {
        Self {
            suggest_enabled: config.suggest.enabled,
            top_k: config.suggest.top_k,
            clipboard_backend: config.clipboard.backend,
            export_dir: config.chat.export_dir.clone(),
        }
    }
}

/// Application state
pub struct App {
    pub input: InputState,
    pub suggest: SuggestState,
    pub chat: ChatState,
    pub search: SearchState,
    pub notification: NotificationState,
    pub layout_regions: LayoutRegions,
    pub theme: Theme,
    pub focus: Focus,
    pub settings: AppSettings,
    pub prefs: Prefs,
    /// Where theme changes are saved; `None` disables saving
    pub prefs_path: Option<PathBuf>,
    pub api: ApiHandle,
    pub should_quit: bool,
}

impl App {
    /// Create the app around a running API worker
    ///
    /// The saved theme preference wins over the configured one.
    pub fn new(api: ApiHandle, config: &Config, prefs: Prefs, prefs_path: Option<PathBuf>) -> Self {
        let theme_kind = prefs.theme.unwrap_or(config.ui.theme);

        Self {
            input: InputState::new(),
            suggest: SuggestState::new(),
            chat: ChatState::new(config.chat.model),
            search: SearchState::new(),
            notification: NotificationState::new(),
            layout_regions: LayoutRegions::new(),
            theme: Theme::new(theme_kind),
            focus: Focus::InputField,
            settings: AppSettings::from(config),
            prefs,
            prefs_path,
            api,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Move focus to the draft editor, reopening suggestions if there are any
    pub fn focus_input(&mut self) {
        self.focus = Focus::InputField;
        self.suggest.on_focus_gained();
    }

    /// Move focus away from the draft editor
    pub fn focus_transcript(&mut self) {
        self.focus = Focus::TranscriptPane;
        self.suggest.on_blur_outside();
    }

    pub fn open_search(&mut self) {
        self.search.open();
        self.focus = Focus::Search;
        self.suggest.on_blur_outside();
    }

    /// Tell the suggestion controller the draft changed and fetch if needed
    pub fn refresh_suggestions(&mut self) {
        if !self.settings.suggest_enabled {
            return;
        }
        let draft = self.input.draft();
        if let Some(fetch) = self.suggest.on_draft_changed(&draft) {
            self.api.send(ApiRequest::Suggest {
                query: fetch.query,
                top_k: self.settings.top_k,
                request_id: fetch.request_id,
            });
        }
    }

    /// Replace the draft with a chosen suggestion
    pub(crate) fn apply_selection(&mut self, text: &str) {
        self.input.set_draft(text);
    }

    /// Submit the draft as a completion request
    pub fn send_prompt(&mut self) {
        let Some(request) = self.chat.begin_completion(self.input.draft()) else {
            return;
        };
        self.suggest.on_escape();
        self.api.send(ApiRequest::Complete(request));
    }

    pub fn start_conversation(&mut self) {
        self.api.send(ApiRequest::StartConversation { title: None });
        self.notification.show("Starting a new conversation…");
    }

    /// Make `id` the active conversation and load its history
    pub fn open_conversation(&mut self, id: i64) {
        self.chat.conversation_started(id);
        self.load_messages(id);
    }

    fn load_messages(&mut self, id: i64) {
        self.api.send(ApiRequest::LoadMessages {
            conversation_id: id,
        });
    }

    pub fn import_transcript(&mut self, transcript: Transcript) {
        let count = transcript.messages.len();
        self.chat.load_transcript(transcript);
        self.notification
            .show(format!("Imported {} messages", count));
    }

    pub fn export_transcript(&mut self) {
        let snapshot = self.chat.to_transcript();
        match transcript::export_to_dir(&self.settings.export_dir, &snapshot, Local::now()) {
            Ok(path) => self
                .notification
                .show(format!("Exported to {}", path.display())),
            Err(e) => self.notification.show_error(format!("Export failed: {}", e)),
        }
    }

    pub fn cycle_model(&mut self) {
        let model = self.chat.cycle_model();
        self.notification.show(format!("Model: {}", model));
    }

    /// Switch between dark and light and remember the choice
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.prefs.theme = Some(self.theme.kind);

        if let Some(path) = &self.prefs_path
            && let Err(e) = save_prefs(path, &self.prefs)
        {
            self.notification.show_warning(e.to_string());
            return;
        }
        self.notification.show(format!("Theme: {}", self.theme.kind));
    }

    /// Apply every finished API response
    pub fn poll_api(&mut self) {
        while let Some(response) = self.api.try_recv() {
            self.handle_response(response);
        }
    }

    pub(crate) fn handle_response(&mut self, response: ApiResponse) {
        match response {
            ApiResponse::Suggestions {
                query,
                request_id,
                result,
            } => {
                let items = result.map(|list| list.into_iter().map(SuggestionItem::from).collect());
                let outcome = self.suggest.apply_fetch(&query, items);
                debug!("Suggest request #{} -> {:?}", request_id, outcome);
            }
            ApiResponse::ConversationStarted(Ok(id)) => {
                self.open_conversation(id);
                self.notification
                    .show(format!("Started conversation #{}", id));
            }
            ApiResponse::ConversationStarted(Err(e)) => {
                self.notification
                    .show_error(format!("Could not start conversation: {}", e));
            }
            ApiResponse::Messages {
                conversation_id,
                result: Ok(messages),
            } => {
                self.chat.apply_messages(conversation_id, messages);
            }
            ApiResponse::Messages {
                conversation_id,
                result: Err(e),
            } => {
                if self.chat.conversation_id() == Some(conversation_id) {
                    self.notification
                        .show_error(format!("Could not load messages: {}", e));
                }
            }
            ApiResponse::Completion(result) => self.finish_completion(result),
        }
    }

    fn finish_completion(&mut self, result: Result<String, crate::api::ApiError>) {
        match self.chat.finish_completion(result) {
            CompletionOutcome::Refetch(id) => {
                self.clear_draft();
                self.load_messages(id);
            }
            CompletionOutcome::Appended => self.clear_draft(),
            CompletionOutcome::Failed(e) => {
                self.notification
                    .show_error(format!("Completion failed: {}", e));
            }
            CompletionOutcome::Ignored => {}
        }
    }

    fn clear_draft(&mut self) {
        self.input.clear();
        self.refresh_suggestions();
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
