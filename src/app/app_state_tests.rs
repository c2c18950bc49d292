//! Tests for app state transitions driven by API responses

use std::fs;

use tempfile::TempDir;

use super::*;
use crate::api::{ApiError, ChatModel, Message, PromptSuggestion};
use crate::prefs::load_prefs;
use crate::test_utils::test_helpers::{test_app, test_app_with_config};
use crate::theme::ThemeKind;

fn suggestions(query: &str, prompts: &[&str]) -> ApiResponse {
    ApiResponse::Suggestions {
        query: query.to_string(),
        request_id: 1,
        result: Ok(prompts
            .iter()
            .map(|p| PromptSuggestion {
                prompt: p.to_string(),
                similarity: 0.8,
            })
            .collect()),
    }
}

mod suggestion_tests {
    use super::*;

    #[test]
    fn test_refresh_sends_fetch_for_draft() {
        let (mut app, mut api) = test_app();
        app.input.set_draft("write");
        app.refresh_suggestions();

        assert_eq!(
            api.sent(),
            vec![ApiRequest::Suggest {
                query: "write".to_string(),
                top_k: 5,
                request_id: 1,
            }]
        );
    }

    #[test]
    fn test_blank_draft_sends_nothing() {
        let (mut app, mut api) = test_app();
        app.input.set_draft("   ");
        app.refresh_suggestions();
        assert!(api.sent().is_empty());
        assert!(!app.suggest.is_visible());
    }

    #[test]
    fn test_disabled_suggestions_send_nothing() {
        let mut config = Config::default();
        config.suggest.enabled = false;
        let (mut app, mut api) = test_app_with_config(&config);
        app.input.set_draft("write");
        app.refresh_suggestions();
        assert!(api.sent().is_empty());
    }

    #[test]
    fn test_configured_top_k_is_used() {
        let mut config = Config::default();
        config.suggest.top_k = 3;
        let (mut app, mut api) = test_app_with_config(&config);
        app.input.set_draft("w");
        app.refresh_suggestions();
        assert!(matches!(
            api.sent().as_slice(),
            [ApiRequest::Suggest { top_k: 3, .. }]
        ));
    }

    #[test]
    fn test_matching_response_shows_dropdown() {
        let (mut app, api) = test_app();
        app.input.set_draft("write");
        app.refresh_suggestions();

        api.respond(suggestions("write", &["write a poem", "write a story"]));
        app.poll_api();

        assert!(app.suggest.is_shown());
        assert_eq!(app.suggest.items().len(), 2);
        assert_eq!(app.suggest.items()[0].text, "write a poem");
        assert_eq!(app.suggest.highlighted(), None);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let (mut app, api) = test_app();
        app.input.set_draft("hello");
        app.refresh_suggestions();
        app.input.set_draft("hello world");
        app.refresh_suggestions();

        api.respond(suggestions("hello", &["hello there"]));
        app.poll_api();
        assert!(!app.suggest.is_visible());
        assert!(app.suggest.items().is_empty());

        api.respond(suggestions("hello world", &["hello world program"]));
        app.poll_api();
        assert_eq!(app.suggest.items()[0].text, "hello world program");
    }

    #[test]
    fn test_failed_fetch_hides_silently() {
        let (mut app, api) = test_app();
        app.input.set_draft("x");
        app.refresh_suggestions();

        api.respond(ApiResponse::Suggestions {
            query: "x".to_string(),
            request_id: 1,
            result: Err(ApiError::Network("connection refused".to_string())),
        });
        app.poll_api();

        assert!(!app.suggest.is_visible());
        assert!(app.notification.current().is_none());
    }
}

mod completion_tests {
    use super::*;

    #[test]
    fn test_send_prompt_sends_completion_and_hides_dropdown() {
        let (mut app, mut api) = test_app();
        app.input.set_draft("write");
        app.refresh_suggestions();
        api.respond(suggestions("write", &["write a poem"]));
        app.poll_api();
        api.sent();

        app.send_prompt();

        assert!(!app.suggest.is_visible());
        assert!(app.chat.is_loading());
        match api.sent().as_slice() {
            [ApiRequest::Complete(request)] => {
                assert_eq!(request.prompt, "write");
                assert_eq!(request.model, ChatModel::OpenAi);
                assert_eq!(request.conversation_id, None);
            }
            other => panic!("unexpected requests: {:?}", other),
        }
    }

    #[test]
    fn test_blank_prompt_is_not_sent() {
        let (mut app, mut api) = test_app();
        app.input.set_draft("  ");
        app.send_prompt();
        assert!(api.sent().is_empty());
        assert!(!app.chat.is_loading());
    }

    #[test]
    fn test_local_reply_appends_and_clears_draft() {
        let (mut app, api) = test_app();
        app.input.set_draft("hi");
        app.send_prompt();

        api.respond(ApiResponse::Completion(Ok("hello!".to_string())));
        app.poll_api();

        assert_eq!(app.input.draft(), "");
        assert!(!app.chat.is_loading());
        assert_eq!(
            app.chat.messages(),
            &[Message::user("hi"), Message::assistant("hello!")]
        );
    }

    #[test]
    fn test_reply_in_conversation_refetches_messages() {
        let (mut app, mut api) = test_app();
        app.open_conversation(4);
        app.input.set_draft("hi");
        app.send_prompt();
        api.sent();

        api.respond(ApiResponse::Completion(Ok("hello!".to_string())));
        app.poll_api();

        assert_eq!(
            api.sent(),
            vec![ApiRequest::LoadMessages { conversation_id: 4 }]
        );
        assert_eq!(app.input.draft(), "");
    }

    #[test]
    fn test_failed_completion_keeps_draft_and_notifies() {
        let (mut app, api) = test_app();
        app.input.set_draft("hi");
        app.send_prompt();

        api.respond(ApiResponse::Completion(Err(ApiError::Api {
            code: 501,
            message: "Claude model not implemented".to_string(),
        })));
        app.poll_api();

        assert_eq!(app.input.draft(), "hi");
        assert!(!app.chat.is_loading());
        let notice = app.notification.current().map(|n| n.message.clone());
        assert!(notice.unwrap().contains("not implemented"));
    }
}

mod conversation_tests {
    use super::*;

    #[test]
    fn test_start_conversation_sends_request() {
        let (mut app, mut api) = test_app();
        app.start_conversation();
        assert_eq!(
            api.sent(),
            vec![ApiRequest::StartConversation { title: None }]
        );
    }

    #[test]
    fn test_started_conversation_loads_history() {
        let (mut app, mut api) = test_app();
        api.respond(ApiResponse::ConversationStarted(Ok(21)));
        app.poll_api();

        assert_eq!(app.chat.conversation_id(), Some(21));
        assert_eq!(
            api.sent(),
            vec![ApiRequest::LoadMessages { conversation_id: 21 }]
        );
    }

    #[test]
    fn test_messages_replace_transcript() {
        let (mut app, api) = test_app();
        app.open_conversation(2);
        api.respond(ApiResponse::Messages {
            conversation_id: 2,
            result: Ok(vec![Message::user("q"), Message::assistant("a")]),
        });
        app.poll_api();
        assert_eq!(app.chat.messages().len(), 2);
    }

    #[test]
    fn test_messages_for_old_conversation_are_ignored() {
        let (mut app, api) = test_app();
        app.open_conversation(2);
        app.open_conversation(3);
        api.respond(ApiResponse::Messages {
            conversation_id: 2,
            result: Err(ApiError::Network("timeout".to_string())),
        });
        app.poll_api();
        assert!(app.notification.current().is_none());
        assert_eq!(app.chat.conversation_id(), Some(3));
    }

    #[test]
    fn test_start_failure_notifies() {
        let (mut app, api) = test_app();
        api.respond(ApiResponse::ConversationStarted(Err(ApiError::Network(
            "refused".to_string(),
        ))));
        app.poll_api();
        assert_eq!(app.chat.conversation_id(), None);
        assert!(app.notification.current().is_some());
    }
}

mod settings_tests {
    use super::*;

    #[test]
    fn test_cycle_model_notifies() {
        let (mut app, _api) = test_app();
        app.cycle_model();
        assert_eq!(app.chat.model(), ChatModel::Claude);
        assert_eq!(
            app.notification.current().map(|n| n.message.clone()),
            Some("Model: Claude".to_string())
        );
    }

    #[test]
    fn test_toggle_theme_persists_choice() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("promptdeck").join("prefs.toml");
        let (mut app, _api) = test_app();
        app.prefs_path = Some(path.clone());

        app.toggle_theme();

        assert_eq!(app.theme.kind, ThemeKind::Light);
        assert_eq!(load_prefs(&path).prefs.theme, Some(ThemeKind::Light));
    }

    #[test]
    fn test_saved_theme_wins_over_config() {
        let (request_tx, _requests) = tokio::sync::mpsc::unbounded_channel();
        let (_responses, response_rx) = std::sync::mpsc::channel();
        let prefs = Prefs {
            theme: Some(ThemeKind::Light),
            api_key: None,
        };
        let app = App::new(
            ApiHandle::from_channels(request_tx, response_rx),
            &Config::default(),
            prefs,
            None,
        );
        assert_eq!(app.theme.kind, ThemeKind::Light);
    }

    #[test]
    fn test_export_writes_file() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.chat.export_dir = dir.path().to_path_buf();
        let (mut app, _api) = test_app_with_config(&config);
        app.chat
            .set_local_messages(vec![Message::user("hi"), Message::assistant("hey")]);

        app.export_transcript();

        let files: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(files.len(), 1);
        let notice = app.notification.current().map(|n| n.message.clone()).unwrap();
        assert!(notice.starts_with("Exported to"));
    }

    #[test]
    fn test_import_transcript() {
        let (mut app, _api) = test_app();
        app.import_transcript(Transcript {
            conversation_id: Some(8),
            model: ChatModel::OpenAi,
            exported_at: None,
            messages: vec![Message::user("a"), Message::assistant("b")],
        });
        assert_eq!(app.chat.conversation_id(), Some(8));
        assert_eq!(app.chat.messages().len(), 2);
    }

    #[test]
    fn test_focus_input_reopens_existing_suggestions() {
        let (mut app, api) = test_app();
        app.input.set_draft("w");
        app.refresh_suggestions();
        api.respond(suggestions("w", &["write"]));
        app.poll_api();

        app.focus_transcript();
        assert!(!app.suggest.is_visible());
        app.focus_input();
        assert!(app.suggest.is_shown());
    }
}
