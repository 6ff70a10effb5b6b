//! Expand handler for the capture MCP server

use crate::CaptureServerHandler;
use crate::capture;
use mcp_attr::Result as McpResult;

impl CaptureServerHandler {
    /// Handles template expansion - always expands, regardless of `auto_expand`.
    pub async fn handle_expand(&self, content: String) -> McpResult<String> {
        let expanded = capture::expand(&content);
        if expanded != content {
            tracing::debug!(from = %content, to = %expanded, "expanded template command");
        }
        Ok(expanded)
    }
}
