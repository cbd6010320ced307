//! Main render/view function (View in TEA pattern)

use ratatui::Frame;

use docdeck_app::{ActiveView, UiMode, WorkspaceState};

use crate::{layout, widgets};

/// Render the complete UI (View function in TEA).
///
/// Pure rendering over a state snapshot; never modifies state.
pub fn view(frame: &mut Frame, state: &WorkspaceState, server: &str) {
    let areas = layout::create(frame.area());

    frame.render_widget(widgets::Header::new(server, state.phase), areas.header);

    let files_focused = state.active_view == ActiveView::Files;
    frame.render_widget(
        widgets::FileList::new(&state.files, state.cursor, state.selected_file_id.as_deref())
            .focused(files_focused),
        areas.files,
    );

    match state.active_view {
        ActiveView::Files => {
            frame.render_widget(
                widgets::ContentView::new(
                    state.selected_file(),
                    state.content.as_ref(),
                    state.content_loading,
                    state.error.as_deref(),
                )
                .focused(false),
                areas.main,
            );
        }
        ActiveView::Search => {
            frame.render_widget(
                widgets::SearchResults::new(&state.search_groups, state.last_query.as_deref())
                    .focused(true),
                areas.main,
            );
        }
    }

    if state.ui_mode == UiMode::Browse {
        frame.render_widget(
            widgets::StatusBar::new(
                state.phase,
                state.error.as_deref(),
                state.files.len(),
                state.selected_file().map(|f| f.name.as_str()),
            ),
            areas.status,
        );
    } else {
        frame.render_widget(
            widgets::PromptLine::new(state.ui_mode, &state.prompt_buffer),
            areas.status,
        );
    }

    if state.debug_panel_open {
        let overlay = layout::centered_overlay(frame.area(), 60, 60);
        frame.render_widget(widgets::DebugPanel::new(state.debug_report.as_ref()), overlay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    use docdeck_core::{FileKind, FileRecord};

    fn record(id: &str, name: &str) -> FileRecord {
        FileRecord {
            id: id.to_string(),
            name: name.to_string(),
            kind: FileKind::Pdf,
        }
    }

    fn draw(state: &WorkspaceState) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|frame| view(frame, state, "http://localhost:5000"))
            .unwrap();
        terminal
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_empty_workspace_renders_hints() {
        let state = WorkspaceState::new();
        let text = buffer_text(&draw(&state));

        assert!(text.contains("docdeck"));
        assert!(text.contains("no files yet"));
        assert!(text.contains("Select a file"));
    }

    #[test]
    fn test_file_list_and_selection_render() {
        let mut state = WorkspaceState::new();
        state.merge_listing(vec![record("a", "report.pdf"), record("b", "data.csv")]);
        state.select("a".to_string());

        let text = buffer_text(&draw(&state));
        assert!(text.contains("Files (2)"));
        assert!(text.contains("report.pdf"));
        assert!(text.contains("Loading content..."));
    }

    #[test]
    fn test_error_shows_in_status_bar() {
        let mut state = WorkspaceState::new();
        state.fail("connection refused");

        let text = buffer_text(&draw(&state));
        assert!(text.contains("connection refused"));
    }

    #[test]
    fn test_prompt_replaces_status_line() {
        let mut state = WorkspaceState::new();
        state.open_prompt(UiMode::SearchPrompt);
        state.prompt_buffer.push_str("invoice");

        let text = buffer_text(&draw(&state));
        assert!(text.contains("Search:"));
        assert!(text.contains("invoice"));
    }

    #[test]
    fn test_debug_overlay_renders_when_open() {
        let mut state = WorkspaceState::new();
        state.debug_panel_open = true;

        let text = buffer_text(&draw(&state));
        assert!(text.contains("Server Files"));
    }
}
