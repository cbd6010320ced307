//! Key event handlers for different UI modes

use std::path::PathBuf;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{UiMode, WorkspaceState};

/// Convert key events to messages based on current UI mode.
///
/// Purely local edits (cursor movement, prompt text) mutate state directly;
/// everything with remote effects goes through a [`Message`].
pub fn handle_key(state: &mut WorkspaceState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Browse => handle_key_browse(state, key),
        UiMode::SearchPrompt | UiMode::UploadPrompt => handle_key_prompt(state, key),
    }
}

/// Handle key events while browsing
fn handle_key_browse(state: &mut WorkspaceState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Char('/') => {
            state.open_prompt(UiMode::SearchPrompt);
            None
        }

        InputKey::Char('u') => {
            state.open_prompt(UiMode::UploadPrompt);
            None
        }

        InputKey::Char('r') => Some(Message::RefreshFiles),

        InputKey::Char('d') => Some(Message::ToggleDebugPanel),

        InputKey::Tab | InputKey::BackTab => Some(Message::SwitchView {
            view: state.active_view.toggled(),
        }),

        InputKey::Up | InputKey::Char('k') => {
            state.move_cursor_up();
            None
        }

        InputKey::Down | InputKey::Char('j') => {
            state.move_cursor_down();
            None
        }

        // Enter selects the file under the cursor; on the already-selected
        // file it toggles the selection off instead of re-fetching.
        InputKey::Enter => {
            let under_cursor = state.cursor_file()?.id.clone();
            if state.selected_file_id.as_deref() == Some(under_cursor.as_str()) {
                Some(Message::SelectFile { file_id: None })
            } else {
                Some(Message::SelectFile {
                    file_id: Some(under_cursor),
                })
            }
        }

        InputKey::Esc => {
            if state.selected_file_id.is_some() {
                Some(Message::SelectFile { file_id: None })
            } else {
                None
            }
        }

        _ => None,
    }
}

/// Handle key events while a prompt line is capturing text
fn handle_key_prompt(state: &mut WorkspaceState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => {
            state.close_prompt();
            None
        }

        InputKey::Enter => {
            let text = state.prompt_buffer.trim().to_string();
            let mode = state.ui_mode;
            state.close_prompt();
            match mode {
                // Empty search still submits: update clears results locally.
                UiMode::SearchPrompt => Some(Message::SubmitSearch { query: text }),
                UiMode::UploadPrompt if !text.is_empty() => Some(Message::SubmitUpload {
                    path: PathBuf::from(text),
                }),
                _ => None,
            }
        }

        InputKey::Char(c) => {
            state.prompt_buffer.push(c);
            None
        }

        InputKey::Backspace => {
            state.prompt_buffer.pop();
            None
        }

        // Clear all input
        InputKey::CharCtrl('u') => {
            state.prompt_buffer.clear();
            None
        }

        // Force quit even while a prompt is open
        InputKey::CharCtrl('c') => Some(Message::Quit),

        _ => None,
    }
}
