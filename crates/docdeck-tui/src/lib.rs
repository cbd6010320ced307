//! docdeck-tui - Terminal UI for docdeck
//!
//! This crate provides the ratatui-based terminal interface. It creates a
//! WorkspaceController from docdeck-app and adds terminal rendering, event
//! polling, and widget display.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
