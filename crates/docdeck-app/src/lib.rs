//! docdeck-app - Workspace state and orchestration for docdeck
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! document workspace: a message enum, a pure update function over
//! [`WorkspaceState`], and an action dispatcher that spawns the async
//! service calls. The [`WorkspaceController`] ties them together around a
//! single message channel.

pub mod actions;
pub mod controller;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod state;

// Re-export primary types
pub use controller::WorkspaceController;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{ActiveView, SessionPhase, UiMode, WorkspaceState};
