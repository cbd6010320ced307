//! Domain types shared across all docdeck crates
//!
//! These mirror the document service's wire contract:
//! - file records are `{id, filename, type}`
//! - search matches are `{file_id, filename, type, preview}`
//! - file content is either `{content: "..."}` or `{sheets: {...}}`

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Declared format of an uploaded file.
///
/// A closed enum instead of a raw string tag: content dispatch matches on it
/// exhaustively, so adding a format means extending this enum and the
/// dispatcher, not hunting string comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Pdf,
    Xlsx,
    Xls,
    Csv,
    Jpg,
    Jpeg,
    Png,
    /// Any type tag the client does not recognize.
    #[default]
    #[serde(other)]
    Other,
}

impl FileKind {
    /// Raster image formats served with extracted OCR text.
    pub fn is_image(self) -> bool {
        matches!(self, FileKind::Jpg | FileKind::Jpeg | FileKind::Png)
    }

    /// Tabular formats served as per-sheet cell grids.
    pub fn is_spreadsheet(self) -> bool {
        matches!(self, FileKind::Xlsx | FileKind::Xls | FileKind::Csv)
    }

    /// Short label for display in the file list.
    pub fn label(self) -> &'static str {
        match self {
            FileKind::Pdf => "pdf",
            FileKind::Xlsx => "xlsx",
            FileKind::Xls => "xls",
            FileKind::Csv => "csv",
            FileKind::Jpg => "jpg",
            FileKind::Jpeg => "jpeg",
            FileKind::Png => "png",
            FileKind::Other => "file",
        }
    }
}

/// Identity and metadata for one uploaded document.
///
/// Never mutated in place; the registry replaces records wholesale on
/// re-fetch or upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Opaque id assigned by the service.
    pub id: String,
    #[serde(rename = "filename")]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FileKind,
}

/// One preview snippet returned by a search query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMatch {
    pub file_id: String,
    pub filename: String,
    #[serde(rename = "type")]
    pub kind: FileKind,
    pub preview: String,
}

/// Matches aggregated per file, in first-seen order.
///
/// Derived from a search response, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchGroup {
    pub file_id: String,
    pub filename: String,
    pub kind: FileKind,
    pub matches: Vec<SearchMatch>,
}

/// One sheet of a spreadsheet file as returned by the service.
///
/// Both fields are optional on the wire: a missing `columns` means the sheet
/// has no header row, a missing `data` means it has no body rows.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Sheet {
    #[serde(default)]
    pub columns: Option<Vec<String>>,
    #[serde(default)]
    pub data: Option<Vec<Vec<serde_json::Value>>>,
}

/// Content payload for one file, discriminated by body shape.
///
/// The service answers `/api/file-content` with `{content}` for text-bearing
/// files (pdf text, image OCR text) and `{sheets}` for spreadsheets.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FileContent {
    Text { content: String },
    Sheets { sheets: BTreeMap<String, Sheet> },
}
