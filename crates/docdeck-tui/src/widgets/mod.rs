//! Custom widget components

mod content_view;
mod debug_panel;
mod file_list;
mod header;
mod prompt;
mod search_results;
mod status_bar;

pub use content_view::ContentView;
pub use debug_panel::DebugPanel;
pub use file_list::FileList;
pub use header::Header;
pub use prompt::PromptLine;
pub use search_results::SearchResults;
pub use status_bar::StatusBar;
