//! # docdeck-core - Core Domain Types
//!
//! Foundation crate for docdeck. Provides the domain model for the document
//! workspace, the two pure transforms (search grouping and content dispatch),
//! error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`FileRecord`] - identity + metadata for one uploaded document
//! - [`FileKind`] - closed enum over the service's declared file types
//! - [`SearchMatch`] / [`SearchGroup`] - search snippets, flat and grouped
//! - [`FileContent`] / [`Sheet`] - content payloads as fetched from the service
//!
//! ### Pure Transforms
//! - [`group_matches()`] (`grouping`) - per-file groups in first-seen order
//! - [`render_content()`] (`content`) - kind + payload → [`RenderDescriptor`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - service failure taxonomy plus infrastructure errors
//! - [`Result`] - type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use docdeck_core::prelude::*;
//! ```

pub mod content;
pub mod error;
pub mod grouping;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all docdeck crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use content::{render_content, RenderDescriptor, RenderedSheet};
pub use error::{Error, Result, ResultExt};
pub use grouping::{group_matches, total_matches};
pub use types::{FileContent, FileKind, FileRecord, SearchGroup, SearchMatch, Sheet};
