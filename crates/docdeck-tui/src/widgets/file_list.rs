//! File list column widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use docdeck_core::FileRecord;

use crate::theme::styles;

/// Left-hand file registry listing with cursor and selection markers.
pub struct FileList<'a> {
    files: &'a [FileRecord],
    cursor: usize,
    selected_id: Option<&'a str>,
    focused: bool,
}

impl<'a> FileList<'a> {
    pub fn new(files: &'a [FileRecord], cursor: usize, selected_id: Option<&'a str>) -> Self {
        Self {
            files,
            cursor,
            selected_id,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// First visible row so the cursor stays inside the viewport.
    fn scroll_offset(&self, visible_rows: usize) -> usize {
        if visible_rows == 0 {
            return 0;
        }
        self.cursor.saturating_sub(visible_rows - 1)
    }
}

impl Widget for FileList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!("Files ({})", self.files.len());
        let block = styles::panel(&title, self.focused);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.files.is_empty() {
            Paragraph::new(Line::styled("no files yet - press u to upload", styles::dim()))
                .render(inner, buf);
            return;
        }

        let offset = self.scroll_offset(inner.height as usize);
        let lines: Vec<Line> = self
            .files
            .iter()
            .enumerate()
            .skip(offset)
            .take(inner.height as usize)
            .map(|(idx, file)| {
                let selected = self.selected_id == Some(file.id.as_str());
                let marker = if selected { "▶ " } else { "  " };
                let mut line = Line::from(vec![
                    Span::styled(marker, styles::accent()),
                    Span::raw(file.name.clone()),
                    Span::styled(format!("  {}", file.kind.label()), styles::dim()),
                ]);
                if idx == self.cursor {
                    line = line.style(styles::selected());
                }
                line
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
