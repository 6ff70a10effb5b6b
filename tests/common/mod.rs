//! Common test utilities for integration tests

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use std::io::Write;
use tempfile::NamedTempFile;
use timecraft_capture::{CaptureServerHandler, Config, FixedClock};

/// Instant every test handler reports as "now"
pub fn test_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 15, 9, 30, 0).unwrap()
}

/// Create a test handler with default config and a pinned clock
pub fn get_test_handler() -> CaptureServerHandler {
    get_test_handler_with(Config::default())
}

/// Create a test handler with the given config and a pinned clock
pub fn get_test_handler_with(config: Config) -> CaptureServerHandler {
    CaptureServerHandler::with_config(config).with_clock(FixedClock(test_instant()))
}

/// Write `content` to a temporary TOML config file
pub fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
