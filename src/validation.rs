//! Validation helper functions for the capture MCP server
//!
//! This module turns raw tool parameters into typed values and reports
//! invalid input as MCP invalid-params errors.

use crate::capture::CaptureError;
use chrono::{DateTime, Utc};
use mcp_attr::Result as McpResult;

fn invalid_params(message: String) -> mcp_attr::Error {
    mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(message, true)
}

/// Parse and validate a processing timestamp parameter
///
/// # Arguments
/// * `timestamp_str` - Timestamp in RFC 3339 format
///
/// # Returns
/// Result containing the timestamp converted to UTC or error
pub fn parse_processed_at(timestamp_str: &str) -> McpResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(timestamp_str.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            invalid_params(format!(
                "Invalid timestamp '{}'. Use RFC 3339 (e.g., '2025-03-15T09:30:00Z')",
                timestamp_str
            ))
        })
}

/// Convert a pipeline rejection into an MCP error
pub fn capture_error(error: CaptureError) -> mcp_attr::Error {
    match error {
        CaptureError::EmptyContent => {
            invalid_params("Content is required. Capture anything: a task, note, idea or goal.".to_string())
        }
    }
}
