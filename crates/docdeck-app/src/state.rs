//! Workspace state (Model in TEA pattern)

use docdeck_client::DebugFileReport;
use docdeck_core::{FileRecord, RenderDescriptor, SearchGroup};

/// Current UI input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Normal browsing - keys navigate and trigger operations
    #[default]
    Browse,

    /// Capturing text for a search query
    SearchPrompt,

    /// Capturing a filesystem path to upload
    UploadPrompt,
}

/// Which result pane is shown on the right side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    /// Content of the selected file
    #[default]
    Files,

    /// Grouped search results
    Search,
}

impl ActiveView {
    pub fn toggled(self) -> Self {
        match self {
            ActiveView::Files => ActiveView::Search,
            ActiveView::Search => ActiveView::Files,
        }
    }
}

/// Session phase of the workspace as a whole.
///
/// Crossed with the independent `active_view` and `selected_file_id`; the
/// recurring cycle is Idle → Loading → {Loaded, Error} → Loading → ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error,
}

/// Complete workspace state (the Model in TEA).
///
/// Exclusively owned and mutated by the controller's update cycle; renderers
/// only ever read a snapshot of it.
#[derive(Debug, Default)]
pub struct WorkspaceState {
    /// File registry, insertion order = arrival order.
    pub files: Vec<FileRecord>,

    /// Id of the selected file. Invariant: always references an id present
    /// in `files`; cleared when a registry merge drops the referent.
    pub selected_file_id: Option<String>,

    /// Which pane is shown: file content or search results.
    pub active_view: ActiveView,

    /// Grouped results of the most recent search.
    pub search_groups: Vec<SearchGroup>,

    /// Query text of the most recent non-empty search, for display.
    pub last_query: Option<String>,

    pub phase: SessionPhase,

    /// Inline error message. Set by any failed operation, cleared when the
    /// next operation starts.
    pub error: Option<String>,

    /// Render descriptor for the selected file. Only the current selection
    /// is cached; re-selecting a file re-fetches.
    pub content: Option<RenderDescriptor>,

    /// Whether a content fetch for the current selection is in flight.
    pub content_loading: bool,

    /// Ticket of the authoritative (most recently issued) content fetch.
    /// Resolutions carrying any other ticket are stale and discarded.
    content_ticket: u64,

    /// Ticket of the authoritative search, same discipline as content.
    search_ticket: u64,

    pub ui_mode: UiMode,

    /// Text being edited in the active prompt.
    pub prompt_buffer: String,

    /// File list cursor (0-based row, independent of selection).
    pub cursor: usize,

    /// Whether the server reconciliation panel is open.
    pub debug_panel_open: bool,

    /// Server-side reconciliation listing, once fetched for the open panel.
    /// Read-only diagnostic; never feeds back into `files`.
    pub debug_report: Option<DebugFileReport>,

    /// Set when the user asked to quit.
    pub quitting: bool,
}

impl WorkspaceState {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────
    // Phase Helpers
    // ─────────────────────────────────────────────────────────

    /// Enter the Loading phase, clearing any previous error.
    pub fn begin_loading(&mut self) {
        self.phase = SessionPhase::Loading;
        self.error = None;
    }

    pub fn finish_loading(&mut self) {
        self.phase = SessionPhase::Loaded;
        self.error = None;
    }

    /// Record a failed operation: phase Error plus the inline message.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.phase = SessionPhase::Error;
        self.error = Some(message.into());
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SessionPhase::Loading
    }

    // ─────────────────────────────────────────────────────────
    // File Registry
    // ─────────────────────────────────────────────────────────

    /// Reconcile the registry with a resolved server listing.
    ///
    /// The server's view wins for order and membership, but records the
    /// listing predates (uploads that completed while it was in flight) are
    /// appended rather than erased, so the registry converges once both
    /// streams resolve.
    pub fn merge_listing(&mut self, listing: Vec<FileRecord>) {
        let mut merged = listing;
        for existing in self.files.drain(..) {
            if !merged.iter().any(|f| f.id == existing.id) {
                merged.push(existing);
            }
        }
        self.files = merged;
        self.enforce_selection_invariant();
        self.clamp_cursor();
    }

    /// Insert or replace one record by id, preserving registry order.
    /// Registry order is upload *completion* order, not request order.
    pub fn upsert_file(&mut self, record: FileRecord) {
        match self.files.iter_mut().find(|f| f.id == record.id) {
            Some(slot) => *slot = record,
            None => self.files.push(record),
        }
    }

    /// Clear the selection if its referent disappeared from the registry.
    fn enforce_selection_invariant(&mut self) {
        let still_present = self
            .selected_file_id
            .as_ref()
            .is_some_and(|id| self.files.iter().any(|f| &f.id == id));
        if self.selected_file_id.is_some() && !still_present {
            self.clear_selection();
        }
    }

    pub fn selected_file(&self) -> Option<&FileRecord> {
        let id = self.selected_file_id.as_ref()?;
        self.files.iter().find(|f| &f.id == id)
    }

    // ─────────────────────────────────────────────────────────
    // Selection & Content Fetch Tickets
    // ─────────────────────────────────────────────────────────

    /// Select a file and stamp a fresh ticket for its content fetch.
    ///
    /// Any earlier fetch still in flight now carries a stale ticket and will
    /// be discarded on resolution: last selection wins.
    pub fn select(&mut self, file_id: String) -> u64 {
        self.selected_file_id = Some(file_id);
        self.content = None;
        self.content_loading = true;
        self.content_ticket += 1;
        self.content_ticket
    }

    /// Drop the selection and invalidate any in-flight content fetch.
    pub fn clear_selection(&mut self) {
        self.selected_file_id = None;
        self.content = None;
        self.content_loading = false;
        self.content_ticket += 1;
    }

    pub fn content_ticket_is_current(&self, ticket: u64) -> bool {
        ticket == self.content_ticket
    }

    // ─────────────────────────────────────────────────────────
    // Search Tickets
    // ─────────────────────────────────────────────────────────

    /// Stamp a fresh ticket for a newly issued search.
    /// The latest-issued search is authoritative for `search_groups`.
    pub fn issue_search_ticket(&mut self) -> u64 {
        self.search_ticket += 1;
        self.search_ticket
    }

    pub fn search_ticket_is_current(&self, ticket: u64) -> bool {
        ticket == self.search_ticket
    }

    // ─────────────────────────────────────────────────────────
    // Cursor & Prompt Helpers
    // ─────────────────────────────────────────────────────────

    pub fn cursor_file(&self) -> Option<&FileRecord> {
        self.files.get(self.cursor)
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_down(&mut self) {
        if self.cursor + 1 < self.files.len() {
            self.cursor += 1;
        }
    }

    fn clamp_cursor(&mut self) {
        if self.cursor >= self.files.len() {
            self.cursor = self.files.len().saturating_sub(1);
        }
    }

    pub fn open_prompt(&mut self, mode: UiMode) {
        self.ui_mode = mode;
        self.prompt_buffer.clear();
    }

    pub fn close_prompt(&mut self) {
        self.ui_mode = UiMode::Browse;
        self.prompt_buffer.clear();
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use docdeck_core::FileKind;

    fn record(id: &str, name: &str) -> FileRecord {
        FileRecord {
            id: id.to_string(),
            name: name.to_string(),
            kind: FileKind::Pdf,
        }
    }

    #[test]
    fn test_merge_listing_replaces_with_server_view() {
        let mut state = WorkspaceState::new();
        state.files = vec![record("a", "a.pdf")];
        state.merge_listing(vec![record("b", "b.pdf"), record("a", "a.pdf")]);

        let ids: Vec<&str> = state.files.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_merge_listing_keeps_records_listing_predates() {
        // Upload completed while the listing was in flight: the listing
        // resolves without it, but must not erase it.
        let mut state = WorkspaceState::new();
        state.upsert_file(record("up", "fresh.pdf"));
        state.merge_listing(vec![record("a", "a.pdf")]);

        let ids: Vec<&str> = state.files.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "up"]);
    }

    #[test]
    fn test_merge_listing_clears_dangling_selection() {
        let mut state = WorkspaceState::new();
        state.files = vec![record("gone", "g.pdf")];
        state.select("gone".to_string());
        state.merge_listing(vec![record("other", "o.pdf")]);

        assert!(state.selected_file_id.is_none());
        assert!(state.content.is_none());
        assert!(!state.content_loading);
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut state = WorkspaceState::new();
        state.upsert_file(record("a", "old.pdf"));
        state.upsert_file(record("b", "b.pdf"));
        state.upsert_file(record("a", "new.pdf"));

        assert_eq!(state.files.len(), 2);
        assert_eq!(state.files[0].name, "new.pdf");
    }

    #[test]
    fn test_select_stamps_fresh_ticket() {
        let mut state = WorkspaceState::new();
        state.files = vec![record("a", "a.pdf"), record("b", "b.pdf")];

        let first = state.select("a".to_string());
        let second = state.select("b".to_string());

        assert!(second > first);
        assert!(!state.content_ticket_is_current(first));
        assert!(state.content_ticket_is_current(second));
    }

    #[test]
    fn test_clear_selection_invalidates_in_flight_fetch() {
        let mut state = WorkspaceState::new();
        state.files = vec![record("a", "a.pdf")];
        let ticket = state.select("a".to_string());

        state.clear_selection();
        assert!(!state.content_ticket_is_current(ticket));
    }

    #[test]
    fn test_search_ticket_last_issued_wins() {
        let mut state = WorkspaceState::new();
        let first = state.issue_search_ticket();
        let second = state.issue_search_ticket();

        assert!(!state.search_ticket_is_current(first));
        assert!(state.search_ticket_is_current(second));
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut state = WorkspaceState::new();
        state.files = vec![record("a", "a.pdf"), record("b", "b.pdf")];
        state.move_cursor_down();
        state.move_cursor_down();
        assert_eq!(state.cursor, 1);

        state.merge_listing(vec![record("a", "a.pdf")]);
        assert_eq!(state.cursor, 0);

        state.move_cursor_up();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_fail_sets_phase_and_message() {
        let mut state = WorkspaceState::new();
        state.fail("upload rejected");
        assert_eq!(state.phase, SessionPhase::Error);
        assert_eq!(state.error.as_deref(), Some("upload rejected"));

        state.begin_loading();
        assert!(state.error.is_none());
        assert!(state.is_loading());
    }

    #[test]
    fn test_prompt_lifecycle() {
        let mut state = WorkspaceState::new();
        state.open_prompt(UiMode::SearchPrompt);
        state.prompt_buffer.push_str("invoice");
        assert_eq!(state.ui_mode, UiMode::SearchPrompt);

        state.close_prompt();
        assert_eq!(state.ui_mode, UiMode::Browse);
        assert!(state.prompt_buffer.is_empty());
    }
}
