//! Header bar widget
//!
//! Shows the app title, the service endpoint, a phase indicator, and the
//! keybinding hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use docdeck_app::SessionPhase;

use crate::theme::{palette, styles};

pub struct Header<'a> {
    server: &'a str,
    phase: SessionPhase,
}

impl<'a> Header<'a> {
    pub fn new(server: &'a str, phase: SessionPhase) -> Self {
        Self { server, phase }
    }

    fn phase_dot(&self) -> Span<'static> {
        let color = match self.phase {
            SessionPhase::Idle => palette::DIM,
            SessionPhase::Loading => palette::BUSY,
            SessionPhase::Loaded => palette::OK,
            SessionPhase::Error => palette::ERROR,
        };
        Span::styled("●", Style::default().fg(color))
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel("", false);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let line = Line::from(vec![
            self.phase_dot(),
            Span::raw(" "),
            Span::styled(
                "docdeck",
                styles::accent().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", self.server), styles::dim()),
            Span::raw("   "),
            Span::styled(
                "/ search  u upload  r refresh  Tab view  d server files  q quit",
                styles::dim(),
            ),
        ]);
        Paragraph::new(line).render(inner, buf);
    }
}
