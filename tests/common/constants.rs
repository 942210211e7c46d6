//! Shared constants for end-to-end tests

// ============================================================================
// Test Albums
// ============================================================================

pub const BLUE_TRAIN_TITLE: &str = "Blue Train";
pub const BLUE_TRAIN_ARTIST: &str = "John Coltrane";
pub const BLUE_TRAIN_PRICE: f64 = 56.99;
pub const BLUE_TRAIN_CONTENT: &str = "liner notes";

pub const JERU_TITLE: &str = "Jeru";
pub const JERU_ARTIST: &str = "Gerry Mulligan";
pub const JERU_PRICE: f64 = 17.99;

// ============================================================================
// Test Timeouts and Configuration
// ============================================================================

/// Maximum time to wait for server to become ready (milliseconds)
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Timeout for individual HTTP requests (seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Polling interval when waiting for server ready (milliseconds)
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 50;

/// SQLite busy timeout of the test stores (milliseconds)
pub const TEST_BUSY_TIMEOUT_MS: u64 = 1000;
