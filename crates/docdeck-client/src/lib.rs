//! docdeck-client - typed async access to the document service
//!
//! Wraps the four remote operations (list, upload, search, content) plus the
//! raw-asset URL and the read-only debug listing. All failures are normalized
//! into the `docdeck_core::Error` taxonomy; callers never see raw transport
//! errors.

pub mod client;

pub use client::{DebugFileEntry, DebugFileReport, ServiceClient};
