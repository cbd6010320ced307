//! Message types for the application (TEA pattern)

use std::path::PathBuf;

use docdeck_client::DebugFileReport;
use docdeck_core::{FileContent, FileRecord, SearchMatch};

use crate::input_key::InputKey;
use crate::state::ActiveView;

/// All possible messages in the application.
///
/// Intent messages come from the keyboard layer; resolution messages come
/// from spawned tasks. Resolutions for content and search carry the ticket
/// issued when the request was dispatched, so stale ones can be discarded.
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Intent Messages
    // ─────────────────────────────────────────────────────────
    /// Re-fetch the file listing from the service
    RefreshFiles,

    /// Select a file (Some) or clear the selection (None)
    SelectFile { file_id: Option<String> },

    /// Run a search with the given query text
    SubmitSearch { query: String },

    /// Upload the file at the given local path
    SubmitUpload { path: PathBuf },

    /// Switch the right-hand pane
    SwitchView { view: ActiveView },

    /// Show or hide the server reconciliation panel
    ToggleDebugPanel,

    // ─────────────────────────────────────────────────────────
    // Listing Resolutions
    // ─────────────────────────────────────────────────────────
    /// File listing fetch completed
    FilesLoaded { files: Vec<FileRecord> },
    /// File listing fetch failed
    FilesLoadFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Upload Resolutions
    // ─────────────────────────────────────────────────────────
    /// Upload completed; the service assigned this record
    UploadCompleted { record: FileRecord },
    /// Upload failed (validation rejection or transport failure)
    UploadFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Search Resolutions
    // ─────────────────────────────────────────────────────────
    /// Search completed with raw (ungrouped) matches
    SearchCompleted {
        ticket: u64,
        matches: Vec<SearchMatch>,
    },
    /// Search failed
    SearchFailed { ticket: u64, error: String },

    // ─────────────────────────────────────────────────────────
    // Content Resolutions
    // ─────────────────────────────────────────────────────────
    /// Content fetch completed for `file_id`
    ContentLoaded {
        ticket: u64,
        file_id: String,
        content: FileContent,
    },
    /// Content fetch failed for `file_id`
    ContentLoadFailed {
        ticket: u64,
        file_id: String,
        error: String,
    },

    // ─────────────────────────────────────────────────────────
    // Debug Panel Resolutions
    // ─────────────────────────────────────────────────────────
    /// Server reconciliation listing arrived
    DebugReportLoaded { report: DebugFileReport },
    /// Reconciliation listing failed; the panel shows the error inline
    DebugReportFailed { error: String },
}
