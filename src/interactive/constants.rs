//! Timing and sizing constants for the interactive client.

/// Debounce window before a typed query triggers a directory lookup.
pub const LOOKUP_DEBOUNCE_MS: u64 = 300;

/// Page size for each of the two directory queries (channels, users).
pub const LOOKUP_PAGE_SIZE: usize = 5;

/// Event polling interval in milliseconds.
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Status message auto-clear delay in milliseconds.
pub const STATUS_CLEAR_DELAY_MS: u64 = 3000;

/// Double Ctrl+C timeout in seconds.
pub const DOUBLE_CTRL_C_TIMEOUT_SECS: u64 = 1;

/// Sidebar width in columns.
pub const SIDEBAR_WIDTH: u16 = 32;

/// Height of the search input.
pub const SEARCH_BAR_HEIGHT: u16 = 3;
