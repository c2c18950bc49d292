//! Tests for clipboard/backend

use super::*;

#[test]
fn test_copy_to_clipboard_osc52_backend() {
    let result = copy_to_clipboard("test", ClipboardBackend::Osc52);
    assert!(result.is_ok());
}

#[test]
fn test_copy_to_clipboard_system_backend() {
    // Depends on a display server being present
    let result = copy_to_clipboard("test", ClipboardBackend::System);
    assert!(
        result.is_ok()
            || matches!(
                result,
                Err(ClipboardError::SystemUnavailable | ClipboardError::WriteError)
            )
    );
}

#[test]
fn test_copy_to_clipboard_auto_backend() {
    let result = copy_to_clipboard("test", ClipboardBackend::Auto);
    assert!(result.is_ok());
}

#[test]
fn test_copy_to_clipboard_unicode() {
    let result = copy_to_clipboard("写一首关于春天的诗 🎉", ClipboardBackend::Osc52);
    assert!(result.is_ok());
}

#[test]
fn test_clipboard_error_display() {
    assert_eq!(
        ClipboardError::SystemUnavailable.to_string(),
        "system clipboard unavailable"
    );
}
