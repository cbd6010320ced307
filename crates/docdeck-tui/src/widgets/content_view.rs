//! Content pane: per-format display of the selected file

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use docdeck_core::content::{RenderDescriptor, RenderedSheet};
use docdeck_core::FileRecord;

use crate::theme::styles;

/// Right-hand pane showing the selected file's extracted content.
pub struct ContentView<'a> {
    file: Option<&'a FileRecord>,
    descriptor: Option<&'a RenderDescriptor>,
    loading: bool,
    error: Option<&'a str>,
    focused: bool,
}

impl<'a> ContentView<'a> {
    pub fn new(
        file: Option<&'a FileRecord>,
        descriptor: Option<&'a RenderDescriptor>,
        loading: bool,
        error: Option<&'a str>,
    ) -> Self {
        Self {
            file,
            descriptor,
            loading,
            error,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn body_lines(&self) -> Vec<Line<'static>> {
        if let Some(error) = self.error {
            return vec![
                Line::styled(error.to_string(), styles::error()),
                Line::raw(""),
                Line::styled("press Enter on the file to retry", styles::dim()),
            ];
        }
        if self.loading {
            return vec![Line::styled("Loading content...", styles::dim())];
        }
        match self.descriptor {
            None => vec![Line::styled(
                "Select a file to view its content",
                styles::dim(),
            )],
            Some(RenderDescriptor::Text { content }) => {
                content.lines().map(|l| Line::raw(l.to_string())).collect()
            }
            Some(RenderDescriptor::Image {
                raw_ref,
                extracted_text,
            }) => {
                let mut lines = vec![
                    Line::from(vec![
                        Span::styled("[image] ", styles::accent()),
                        Span::styled(
                            format!("raw asset: /api/files/{raw_ref}/raw"),
                            styles::dim(),
                        ),
                    ]),
                    Line::raw(""),
                ];
                if extracted_text.is_empty() {
                    lines.push(Line::styled("(no text extracted)", styles::dim()));
                } else {
                    lines.extend(extracted_text.lines().map(|l| Line::raw(l.to_string())));
                }
                lines
            }
            Some(RenderDescriptor::Table { sheets }) => {
                if sheets.is_empty() {
                    return vec![Line::styled("(empty workbook)", styles::dim())];
                }
                let mut lines = Vec::new();
                for sheet in sheets {
                    lines.extend(sheet_lines(sheet));
                    lines.push(Line::raw(""));
                }
                lines
            }
            Some(RenderDescriptor::Unsupported { kind }) => vec![Line::styled(
                format!("No preview available for {} files", kind.label()),
                styles::dim(),
            )],
        }
    }
}

fn sheet_lines(sheet: &RenderedSheet) -> Vec<Line<'static>> {
    let mut lines = vec![Line::styled(format!("▤ {}", sheet.name), styles::accent())];
    if !sheet.columns.is_empty() {
        lines.push(Line::styled(sheet.columns.join(" │ "), styles::selected()));
    }
    if sheet.rows.is_empty() && sheet.columns.is_empty() {
        lines.push(Line::styled("(empty sheet)", styles::dim()));
    }
    for row in &sheet.rows {
        lines.push(Line::raw(row.join(" │ ")));
    }
    lines
}

impl Widget for ContentView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match self.file {
            Some(file) => format!("{} [{}]", file.name, file.kind.label()),
            None => "Content".to_string(),
        };
        let block = styles::panel(&title, self.focused);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        Paragraph::new(self.body_lines())
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
