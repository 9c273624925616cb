//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`input`]: Single-line expression editor with cursor
//! - [`result`]: Prefix form and value of the selected entry, or its error
//! - [`tree`]: Indented outline of the parsed expression tree
//! - [`tokens`]: Token stream produced by the lexer
//! - [`history`]: Previously submitted expressions
//! - [`status`]: Status bar with keybindings
//! - `utils`: Border styling and scroll clamping shared by the list panes
//!
//! Each pane module exports a primary `render_*` function taking the frame,
//! its area, the data to draw, and (for scrollable panes) focus and scroll state.

mod utils;

pub mod history;
pub mod input;
pub mod result;
pub mod status;
pub mod tokens;
pub mod tree;

// Re-export render functions for convenience
pub use history::render_history_pane;
pub use input::render_input_pane;
pub use result::render_result_pane;
pub use status::render_status_bar;
pub use tokens::render_tokens_pane;
pub use tree::render_tree_pane;
