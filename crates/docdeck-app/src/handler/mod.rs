//! Handler module - TEA update function and key handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes

pub(crate) mod keys;
pub(crate) mod update;


use std::path::PathBuf;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update.
///
/// Every variant becomes one spawned task whose outcome returns to the loop
/// as a resolution [`Message`]; actions never touch state directly.
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Fetch the file listing
    LoadFiles,

    /// Upload the file at `path`
    Upload { path: PathBuf },

    /// Run a search. `scope_file_id` narrows it to one file when the user
    /// had a selection at submit time.
    RunSearch {
        ticket: u64,
        query: String,
        scope_file_id: Option<String>,
    },

    /// Fetch extracted content for one file
    FetchContent { ticket: u64, file_id: String },

    /// Fetch the server reconciliation listing for the debug panel
    LoadDebugReport,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
