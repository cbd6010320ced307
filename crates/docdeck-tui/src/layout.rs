//! Screen layout definitions for the TUI
//!
//! Header on top, file list on the left, main pane on the right,
//! a one-row status/prompt line at the bottom.

use ratatui::layout::{Constraint, Layout, Rect};

/// Width of the file list column as a percentage of the screen.
const FILE_LIST_PERCENT: u16 = 32;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header area (title + server + keybindings)
    pub header: Rect,

    /// File list column
    pub files: Rect,

    /// Main pane (file content or search results)
    pub main: Rect,

    /// Status bar; the prompt line renders over it when open
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let rows = Layout::vertical([
        Constraint::Length(3), // Header (bordered)
        Constraint::Min(3),    // Body
        Constraint::Length(1), // Status / prompt line
    ])
    .split(area);

    let body = Layout::horizontal([
        Constraint::Percentage(FILE_LIST_PERCENT),
        Constraint::Min(20),
    ])
    .split(rows[1]);

    ScreenAreas {
        header: rows[0],
        files: body[0],
        main: body[1],
        status: rows[2],
    }
}

/// Centered overlay rect for the debug panel
pub fn centered_overlay(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_cover_full_height() {
        let area = Rect::new(0, 0, 100, 30);
        let areas = create(area);

        assert_eq!(areas.header.height, 3);
        assert_eq!(areas.status.height, 1);
        assert_eq!(
            areas.header.height + areas.files.height + areas.status.height,
            area.height
        );
        assert_eq!(areas.files.height, areas.main.height);
    }

    #[test]
    fn test_body_columns_cover_full_width() {
        let area = Rect::new(0, 0, 100, 30);
        let areas = create(area);

        assert_eq!(areas.files.width + areas.main.width, area.width);
        assert!(areas.files.width < areas.main.width);
    }

    #[test]
    fn test_overlay_is_centered_and_contained() {
        let area = Rect::new(0, 0, 100, 40);
        let overlay = centered_overlay(area, 60, 50);

        assert!(overlay.width <= 60);
        assert!(overlay.height <= 20);
        assert!(overlay.x >= 20);
        assert!(overlay.y >= 10);
    }
}
