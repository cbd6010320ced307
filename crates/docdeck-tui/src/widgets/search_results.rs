//! Search results pane, grouped by file

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use docdeck_core::grouping::total_matches;
use docdeck_core::SearchGroup;

use crate::theme::styles;

/// Grouped search results: one header per file, previews underneath.
pub struct SearchResults<'a> {
    groups: &'a [SearchGroup],
    query: Option<&'a str>,
    focused: bool,
}

impl<'a> SearchResults<'a> {
    pub fn new(groups: &'a [SearchGroup], query: Option<&'a str>) -> Self {
        Self {
            groups,
            query,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for SearchResults<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match self.query {
            Some(query) => format!(
                "Search \"{}\" ({} matches)",
                query,
                total_matches(self.groups)
            ),
            None => "Search".to_string(),
        };
        let block = styles::panel(&title, self.focused);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.groups.is_empty() {
            let hint = if self.query.is_some() {
                "no matches"
            } else {
                "press / to search"
            };
            Paragraph::new(Line::styled(hint, styles::dim())).render(inner, buf);
            return;
        }

        let mut lines = Vec::new();
        for group in self.groups {
            lines.push(Line::from(vec![
                Span::styled(group.filename.clone(), styles::accent()),
                Span::styled(
                    format!("  {} · {} match(es)", group.kind.label(), group.matches.len()),
                    styles::dim(),
                ),
            ]));
            for m in &group.matches {
                lines.push(Line::from(vec![
                    Span::styled("  › ", styles::dim()),
                    Span::raw(m.preview.clone()),
                ]));
            }
            lines.push(Line::raw(""));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
