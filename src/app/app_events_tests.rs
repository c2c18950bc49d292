//! Tests for keyboard dispatch

use ratatui::crossterm::event::{Event, KeyCode, KeyModifiers};

use crate::api::{ApiRequest, ApiResponse, ChatModel, PromptSuggestion};
use crate::app::{App, Focus};
use crate::test_utils::test_helpers::{TestApi, key, key_with_mods, test_app, type_text};

fn ctrl(c: char) -> ratatui::crossterm::event::KeyEvent {
    key_with_mods(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn respond_suggestions(app: &mut App, api: &TestApi, query: &str, prompts: &[&str]) {
    api.respond(ApiResponse::Suggestions {
        query: query.to_string(),
        request_id: 0,
        result: Ok(prompts
            .iter()
            .map(|p| PromptSuggestion {
                prompt: p.to_string(),
                similarity: 0.5,
            })
            .collect()),
    });
    app.poll_api();
}

#[test]
fn test_each_keystroke_fetches_suggestions() {
    let (mut app, mut api) = test_app();
    type_text(&mut app, "hi");

    let queries: Vec<String> = api
        .sent()
        .into_iter()
        .filter_map(|request| match request {
            ApiRequest::Suggest { query, .. } => Some(query),
            _ => None,
        })
        .collect();
    assert_eq!(queries, vec!["h", "hi"]);
}

#[test]
fn test_full_selection_flow() {
    let (mut app, api) = test_app();
    type_text(&mut app, "po");
    respond_suggestions(&mut app, &api, "po", &["poem", "post", "poll"]);

    app.handle_key_event(key(KeyCode::Down));
    app.handle_key_event(key(KeyCode::Down));
    app.handle_key_event(key(KeyCode::Down));
    assert_eq!(app.suggest.highlighted(), Some(2));

    app.handle_key_event(key(KeyCode::Enter));
    assert_eq!(app.input.draft(), "poll");
    assert!(!app.suggest.is_visible());
    assert!(!app.chat.is_loading());
}

#[test]
fn test_selection_does_not_fetch() {
    let (mut app, mut api) = test_app();
    type_text(&mut app, "po");
    respond_suggestions(&mut app, &api, "po", &["poem"]);
    api.sent();

    app.handle_key_event(key(KeyCode::Down));
    app.handle_key_event(key(KeyCode::Enter));
    assert!(api.sent().is_empty());
}

#[test]
fn test_enter_without_highlight_sends() {
    let (mut app, mut api) = test_app();
    type_text(&mut app, "po");
    respond_suggestions(&mut app, &api, "po", &["poem"]);
    api.sent();

    app.handle_key_event(key(KeyCode::Enter));
    assert!(app.chat.is_loading());
    assert!(matches!(api.sent().as_slice(), [ApiRequest::Complete(_)]));
}

#[test]
fn test_escape_then_focus_regained_reopens_without_fetch() {
    let (mut app, mut api) = test_app();
    type_text(&mut app, "po");
    respond_suggestions(&mut app, &api, "po", &["poem"]);
    api.sent();

    app.handle_key_event(key(KeyCode::Esc));
    assert!(!app.suggest.is_visible());

    app.handle_key_event(key(KeyCode::Tab));
    assert_eq!(app.focus, Focus::TranscriptPane);
    app.handle_key_event(key(KeyCode::Tab));
    assert_eq!(app.focus, Focus::InputField);

    assert!(app.suggest.is_shown());
    assert!(api.sent().is_empty());
}

#[test]
fn test_arrows_edit_text_when_dropdown_hidden() {
    let (mut app, _api) = test_app();
    type_text(&mut app, "ab");
    app.handle_key_event(key(KeyCode::Left));
    type_text(&mut app, "x");
    assert_eq!(app.input.draft(), "axb");
}

#[test]
fn test_editor_is_read_only_while_loading() {
    let (mut app, _api) = test_app();
    type_text(&mut app, "hi");
    app.handle_key_event(key(KeyCode::Enter));
    assert!(app.chat.is_loading());

    type_text(&mut app, "more");
    app.handle_key_event(key_with_mods(KeyCode::Enter, KeyModifiers::ALT));
    assert_eq!(app.input.draft(), "hi");
}

#[test]
fn test_alt_enter_inserts_newline() {
    let (mut app, _api) = test_app();
    type_text(&mut app, "a");
    app.handle_key_event(key_with_mods(KeyCode::Enter, KeyModifiers::ALT));
    type_text(&mut app, "b");
    assert_eq!(app.input.draft(), "a\nb");
    assert!(!app.chat.is_loading());
}

#[test]
fn test_ctrl_c_quits() {
    let (mut app, _api) = test_app();
    app.handle_key_event(ctrl('c'));
    assert!(app.should_quit());
}

#[test]
fn test_ctrl_n_starts_conversation() {
    let (mut app, mut api) = test_app();
    app.handle_key_event(ctrl('n'));
    assert_eq!(
        api.sent(),
        vec![ApiRequest::StartConversation { title: None }]
    );
}

#[test]
fn test_f2_cycles_model() {
    let (mut app, _api) = test_app();
    app.handle_key_event(key(KeyCode::F(2)));
    app.handle_key_event(key(KeyCode::F(2)));
    assert_eq!(app.chat.model(), ChatModel::Local);
}

#[test]
fn test_f3_toggles_theme() {
    let (mut app, _api) = test_app();
    let before = app.theme.kind;
    app.handle_key_event(key(KeyCode::F(3)));
    assert_ne!(app.theme.kind, before);
}

#[test]
fn test_ctrl_f_opens_search_and_hides_dropdown() {
    let (mut app, api) = test_app();
    type_text(&mut app, "po");
    respond_suggestions(&mut app, &api, "po", &["poem"]);

    app.handle_key_event(ctrl('f'));
    assert!(app.search.is_visible());
    assert_eq!(app.focus, Focus::Search);
    assert!(!app.suggest.is_visible());

    type_text(&mut app, "rain");
    assert_eq!(app.search.query(), "rain");
    assert_eq!(app.input.draft(), "po");
}

#[test]
fn test_transcript_keys_scroll() {
    let (mut app, _api) = test_app();
    app.chat.scroll.update_bounds(100, 10);
    app.handle_key_event(key(KeyCode::Tab));

    app.handle_key_event(key(KeyCode::Char('g')));
    assert_eq!(app.chat.scroll.offset, 0);
    app.handle_key_event(key(KeyCode::Char('j')));
    assert_eq!(app.chat.scroll.offset, 1);
    app.handle_key_event(key(KeyCode::Char('G')));
    assert_eq!(app.chat.scroll.offset, 90);
}

#[test]
fn test_paste_inserts_into_draft() {
    let (mut app, mut api) = test_app();
    app.handle_event(Event::Paste("write a poem".to_string()));
    assert_eq!(app.input.draft(), "write a poem");
    assert_eq!(api.sent().len(), 1);
}
