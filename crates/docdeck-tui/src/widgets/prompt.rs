//! Prompt line for search queries and upload paths

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use docdeck_app::UiMode;

use crate::theme::styles;

/// Single-row input line rendered over the status bar while capturing text.
pub struct PromptLine<'a> {
    mode: UiMode,
    buffer: &'a str,
}

impl<'a> PromptLine<'a> {
    pub fn new(mode: UiMode, buffer: &'a str) -> Self {
        Self { mode, buffer }
    }
}

impl Widget for PromptLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let label = match self.mode {
            UiMode::SearchPrompt => " Search: ",
            UiMode::UploadPrompt => " Upload path: ",
            UiMode::Browse => return,
        };

        let line = Line::from(vec![
            Span::styled(label, styles::accent()),
            Span::raw(self.buffer.to_string()),
            Span::styled("█", styles::accent()),
            Span::styled("  (Enter submit · Esc cancel)", styles::dim()),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}
