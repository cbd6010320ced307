//! One-row status bar at the bottom of the screen

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use docdeck_app::SessionPhase;

use crate::theme::styles;

pub struct StatusBar<'a> {
    phase: SessionPhase,
    error: Option<&'a str>,
    file_count: usize,
    selected: Option<&'a str>,
}

impl<'a> StatusBar<'a> {
    pub fn new(
        phase: SessionPhase,
        error: Option<&'a str>,
        file_count: usize,
        selected: Option<&'a str>,
    ) -> Self {
        Self {
            phase,
            error,
            file_count,
            selected,
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        // Errors take the whole line; everything else is secondary.
        if let Some(error) = self.error {
            Paragraph::new(Line::styled(format!(" ✗ {error}"), styles::error()))
                .render(area, buf);
            return;
        }

        let phase = match self.phase {
            SessionPhase::Idle => "idle",
            SessionPhase::Loading => "working...",
            SessionPhase::Loaded => "ready",
            SessionPhase::Error => "error",
        };
        let mut spans = vec![
            Span::styled(format!(" {phase}"), styles::accent()),
            Span::styled(format!("  {} file(s)", self.file_count), styles::dim()),
        ];
        if let Some(name) = self.selected {
            // Selection doubles as search scope.
            spans.push(Span::styled(
                format!("  selected: {name} (searches scoped)"),
                styles::dim(),
            ));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
