// Constants for the terminal UI

use std::time::Duration;

/// Maximum number of submissions kept in the history pane
pub const HISTORY_CAPACITY: usize = 200;

/// How long the event loop waits for a key before redrawing
pub const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(50);
