//! Main update function - handles state transitions (TEA pattern)

use docdeck_core::content::render_content;
use docdeck_core::grouping::group_matches;
use tracing::{debug, warn};

use crate::message::Message;
use crate::state::{ActiveView, WorkspaceState};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state.
/// Returns optional follow-up message and/or action.
pub fn update(state: &mut WorkspaceState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.quitting = true;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // File Listing
        // ─────────────────────────────────────────────────────────
        Message::RefreshFiles => {
            state.begin_loading();
            UpdateResult::action(UpdateAction::LoadFiles)
        }

        Message::FilesLoaded { files } => {
            debug!("file listing resolved with {} records", files.len());
            state.merge_listing(files);
            state.finish_loading();
            UpdateResult::none()
        }

        Message::FilesLoadFailed { error } => {
            // Registry keeps its last good contents.
            warn!("file listing failed: {error}");
            state.fail(error);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Selection & Content
        // ─────────────────────────────────────────────────────────
        Message::SelectFile { file_id: Some(id) } => {
            if !state.files.iter().any(|f| f.id == id) {
                warn!("ignoring selection of unknown file {id}");
                return UpdateResult::none();
            }
            let ticket = state.select(id.clone());
            UpdateResult::action(UpdateAction::FetchContent {
                ticket,
                file_id: id,
            })
        }

        Message::SelectFile { file_id: None } => {
            state.clear_selection();
            UpdateResult::none()
        }

        Message::ContentLoaded {
            ticket,
            file_id,
            content,
        } => {
            if !state.content_ticket_is_current(ticket) {
                debug!("discarding stale content for {file_id} (ticket {ticket})");
                return UpdateResult::none();
            }
            let kind = state.selected_file().map(|f| f.kind).unwrap_or_default();
            state.content = Some(render_content(kind, &file_id, &content));
            state.content_loading = false;
            state.error = None;
            UpdateResult::none()
        }

        Message::ContentLoadFailed {
            ticket,
            file_id,
            error,
        } => {
            if !state.content_ticket_is_current(ticket) {
                debug!("discarding stale content failure for {file_id} (ticket {ticket})");
                return UpdateResult::none();
            }
            // Selection is kept so re-selecting retries the fetch.
            warn!("content fetch failed for {file_id}: {error}");
            state.content = None;
            state.content_loading = false;
            state.error = Some(error);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Upload
        // ─────────────────────────────────────────────────────────
        Message::SubmitUpload { path } => {
            state.begin_loading();
            UpdateResult::action(UpdateAction::Upload { path })
        }

        Message::UploadCompleted { record } => {
            debug!("upload completed: {} ({})", record.name, record.id);
            state.upsert_file(record);
            state.finish_loading();
            UpdateResult::none()
        }

        Message::UploadFailed { error } => {
            warn!("upload failed: {error}");
            state.fail(error);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Search
        // ─────────────────────────────────────────────────────────
        Message::SubmitSearch { query } => {
            let query = query.trim().to_string();
            if query.is_empty() {
                // Empty query clears results without a round-trip.
                state.search_groups.clear();
                state.last_query = None;
                return UpdateResult::none();
            }
            let ticket = state.issue_search_ticket();
            state.last_query = Some(query.clone());
            state.begin_loading();
            UpdateResult::action(UpdateAction::RunSearch {
                ticket,
                query,
                scope_file_id: state.selected_file_id.clone(),
            })
        }

        Message::SearchCompleted { ticket, matches } => {
            if !state.search_ticket_is_current(ticket) {
                debug!("discarding stale search result (ticket {ticket})");
                return UpdateResult::none();
            }
            state.search_groups = group_matches(matches);
            state.active_view = ActiveView::Search;
            state.finish_loading();
            UpdateResult::none()
        }

        Message::SearchFailed { ticket, error } => {
            if !state.search_ticket_is_current(ticket) {
                debug!("discarding stale search failure (ticket {ticket})");
                return UpdateResult::none();
            }
            warn!("search failed: {error}");
            state.search_groups.clear();
            state.fail(error);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // View & Debug Panel
        // ─────────────────────────────────────────────────────────
        Message::SwitchView { view } => {
            state.active_view = view;
            UpdateResult::none()
        }

        Message::ToggleDebugPanel => {
            if state.debug_panel_open {
                state.debug_panel_open = false;
                state.debug_report = None;
                UpdateResult::none()
            } else {
                state.debug_panel_open = true;
                UpdateResult::action(UpdateAction::LoadDebugReport)
            }
        }

        Message::DebugReportLoaded { report } => {
            // Panel may have been closed while the fetch was in flight.
            if state.debug_panel_open {
                state.debug_report = Some(report);
            }
            UpdateResult::none()
        }

        Message::DebugReportFailed { error } => {
            if state.debug_panel_open {
                warn!("debug listing failed: {error}");
                state.error = Some(error);
            }
            UpdateResult::none()
        }
    }
}
