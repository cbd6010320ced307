//! Server reconciliation overlay
//!
//! Shows what the service believes it is storing, next to whether the bytes
//! still exist on disk over there. Purely diagnostic.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};

use docdeck_client::DebugFileReport;

use crate::theme::styles;

pub struct DebugPanel<'a> {
    report: Option<&'a DebugFileReport>,
}

impl<'a> DebugPanel<'a> {
    pub fn new(report: Option<&'a DebugFileReport>) -> Self {
        Self { report }
    }
}

impl Widget for DebugPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = styles::panel("Server Files (d to close)", true);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let Some(report) = self.report else {
            Paragraph::new(Line::styled("loading...", styles::dim())).render(inner, buf);
            return;
        };

        let mut lines = vec![
            Line::styled(format!("{} file(s) on server", report.file_count), styles::dim()),
            Line::raw(""),
        ];

        // Deterministic row order for a HashMap-backed report.
        let mut ids: Vec<&String> = report.files.keys().collect();
        ids.sort();
        for id in ids {
            let entry = &report.files[id];
            let (mark, style) = if entry.exists {
                ("✓", styles::accent())
            } else {
                ("✗", styles::error())
            };
            lines.push(Line::from(vec![
                Span::styled(format!(" {mark} "), style),
                Span::raw(entry.filename.clone()),
                Span::styled(format!("  {id}"), styles::dim()),
            ]));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
