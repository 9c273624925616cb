//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]** — application state, keyboard event loop, input editing, pane focus
//! - **[`panes`]** — stateless render functions for each visible pane (input, result,
//!   tree, tokens, history, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//! - **[`constants`]** — history capacity and event loop timing
//!
//! The entry point for consumers is [`App`]: construct it with [`App::new`] and
//! call [`App::run`] to start the event loop.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod constants;
pub mod panes;
pub mod theme;

pub use app::App;
