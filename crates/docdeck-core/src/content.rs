//! Content dispatch: declared file type + fetched payload → render descriptor

use serde_json::Value;

use crate::types::{FileContent, FileKind, Sheet};

/// One sheet prepared for display: headers resolved, cells stringified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSheet {
    pub name: String,
    /// Header row; empty when the sheet declared no columns.
    pub columns: Vec<String>,
    /// Body rows; empty when the sheet declared no data.
    pub rows: Vec<Vec<String>>,
}

/// The tagged value telling the presentation layer which view to display.
///
/// Dispatch is total: every kind/payload combination maps to exactly one
/// variant. `Unsupported` is a valid terminal rendering state, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderDescriptor {
    /// Plain extracted text (pdf and other text-bearing files).
    Text { content: String },
    /// Raster image: raw bytes are addressable by file id, OCR text inline.
    Image {
        /// File id to resolve against the raw-asset endpoint.
        raw_ref: String,
        extracted_text: String,
    },
    /// Spreadsheet sheets in display form.
    Table { sheets: Vec<RenderedSheet> },
    /// Declared type has no preview. Shown as a notice, never an error.
    Unsupported { kind: FileKind },
}

/// Map a file's declared kind and fetched content to a render descriptor.
///
/// - images always render as `Image`; OCR text is empty when the payload is
///   not textual
/// - spreadsheet kinds render as `Table` for a sheets payload
/// - pdf and unrecognized kinds render their text payload as `Text`
/// - every remaining kind/payload mismatch is `Unsupported`
pub fn render_content(kind: FileKind, file_id: &str, content: &FileContent) -> RenderDescriptor {
    if kind.is_image() {
        let extracted_text = match content {
            FileContent::Text { content } => content.clone(),
            FileContent::Sheets { .. } => String::new(),
        };
        return RenderDescriptor::Image {
            raw_ref: file_id.to_string(),
            extracted_text,
        };
    }

    match (kind, content) {
        (k, FileContent::Sheets { sheets }) if k.is_spreadsheet() => RenderDescriptor::Table {
            sheets: sheets
                .iter()
                .map(|(name, sheet)| render_sheet(name, sheet))
                .collect(),
        },
        (FileKind::Pdf | FileKind::Other, FileContent::Text { content }) => {
            RenderDescriptor::Text {
                content: content.clone(),
            }
        }
        _ => RenderDescriptor::Unsupported { kind },
    }
}

fn render_sheet(name: &str, sheet: &Sheet) -> RenderedSheet {
    RenderedSheet {
        name: name.to_string(),
        columns: sheet.columns.clone().unwrap_or_default(),
        rows: sheet
            .data
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|row| row.iter().map(cell_to_string).collect())
            .collect(),
    }
}

/// Stringify one cell. JSON null is the semantic absence marker and renders
/// as an empty string, never a literal "null" token.
fn cell_to_string(cell: &Value) -> String {
    match cell {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn sheets_content(entries: Vec<(&str, Sheet)>) -> FileContent {
        FileContent::Sheets {
            sheets: entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    fn text_content(s: &str) -> FileContent {
        FileContent::Text {
            content: s.to_string(),
        }
    }

    #[test]
    fn test_pdf_text_renders_as_text() {
        let desc = render_content(FileKind::Pdf, "id-1", &text_content("hello"));
        assert_eq!(
            desc,
            RenderDescriptor::Text {
                content: "hello".to_string()
            }
        );
    }

    #[test]
    fn test_image_renders_with_raw_ref_and_ocr_text() {
        for kind in [FileKind::Jpg, FileKind::Jpeg, FileKind::Png] {
            let desc = render_content(kind, "img-9", &text_content("scanned words"));
            assert_eq!(
                desc,
                RenderDescriptor::Image {
                    raw_ref: "img-9".to_string(),
                    extracted_text: "scanned words".to_string(),
                }
            );
        }
    }

    #[test]
    fn test_spreadsheet_renders_as_table() {
        let content = sheets_content(vec![(
            "Q1",
            Sheet {
                columns: Some(vec!["name".to_string(), "total".to_string()]),
                data: Some(vec![vec![Value::from("acme"), Value::from(12)]]),
            },
        )]);
        let desc = render_content(FileKind::Xlsx, "s-1", &content);
        let RenderDescriptor::Table { sheets } = desc else {
            panic!("expected table descriptor");
        };
        assert_eq!(sheets[0].name, "Q1");
        assert_eq!(sheets[0].columns, vec!["name", "total"]);
        assert_eq!(sheets[0].rows, vec![vec!["acme".to_string(), "12".to_string()]]);
    }

    #[test]
    fn test_null_cell_renders_as_empty_string() {
        let content = sheets_content(vec![(
            "S",
            Sheet {
                columns: None,
                data: Some(vec![vec![Value::Null, Value::from("x")]]),
            },
        )]);
        let RenderDescriptor::Table { sheets } = render_content(FileKind::Csv, "c", &content)
        else {
            panic!("expected table descriptor");
        };
        assert_eq!(sheets[0].rows, vec![vec!["".to_string(), "x".to_string()]]);
    }

    #[test]
    fn test_missing_columns_and_data_render_empty() {
        let content = sheets_content(vec![(
            "Bare",
            Sheet {
                columns: None,
                data: None,
            },
        )]);
        let RenderDescriptor::Table { sheets } = render_content(FileKind::Xls, "x", &content)
        else {
            panic!("expected table descriptor");
        };
        assert!(sheets[0].columns.is_empty());
        assert!(sheets[0].rows.is_empty());
    }

    #[test]
    fn test_dispatch_is_total_over_all_kinds() {
        // Every declared kind must map to exactly one descriptor for both
        // payload shapes; none may panic.
        let kinds = [
            FileKind::Pdf,
            FileKind::Xlsx,
            FileKind::Xls,
            FileKind::Csv,
            FileKind::Jpg,
            FileKind::Jpeg,
            FileKind::Png,
            FileKind::Other,
        ];
        for kind in kinds {
            let _ = render_content(kind, "id", &text_content("t"));
            let _ = render_content(kind, "id", &sheets_content(vec![]));
        }
    }

    #[test]
    fn test_mismatched_payload_is_unsupported_not_error() {
        // A pdf answered with sheets has no sensible preview.
        let desc = render_content(FileKind::Pdf, "p", &sheets_content(vec![]));
        assert_eq!(desc, RenderDescriptor::Unsupported { kind: FileKind::Pdf });

        // A spreadsheet answered with text likewise.
        let desc = render_content(FileKind::Csv, "c", &text_content("raw,csv"));
        assert_eq!(desc, RenderDescriptor::Unsupported { kind: FileKind::Csv });
    }

    #[test]
    fn test_image_with_sheets_payload_still_renders_image() {
        let desc = render_content(FileKind::Png, "p-1", &sheets_content(vec![]));
        assert_eq!(
            desc,
            RenderDescriptor::Image {
                raw_ref: "p-1".to_string(),
                extracted_text: String::new(),
            }
        );
    }

    #[test]
    fn test_numeric_and_bool_cells_stringified() {
        assert_eq!(cell_to_string(&Value::from(3.5)), "3.5");
        assert_eq!(cell_to_string(&Value::from(true)), "true");
        assert_eq!(cell_to_string(&Value::from("s")), "s");
    }
}
