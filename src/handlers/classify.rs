//! Classify handler for the capture MCP server

use crate::CaptureServerHandler;
use crate::capture;
use crate::formatting;
use mcp_attr::Result as McpResult;

impl CaptureServerHandler {
    /// Handles live classification - expands templates (when enabled) and suggests an item type.
    pub async fn handle_classify(&self, content: String) -> McpResult<String> {
        let analysis = capture::analyze_with(&content, self.config.auto_expand);
        tracing::debug!(
            suggestion = %analysis.suggestion.item_type,
            confidence = %analysis.suggestion.confidence,
            "classified capture"
        );
        Ok(formatting::format_analysis(&analysis))
    }
}
