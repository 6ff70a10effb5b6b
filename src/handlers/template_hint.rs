//! Template hint handler for the capture MCP server

use crate::CaptureServerHandler;
use crate::capture;
use mcp_attr::Result as McpResult;

impl CaptureServerHandler {
    /// Handles template hint lookup for the command currently being typed.
    pub async fn handle_template_hint(&self, content: String) -> McpResult<String> {
        Ok(match capture::template_hint(&content) {
            Some(hint) => format!("Template: {}", hint),
            None => "No template for this input. Commands: /tarefa, /meta, /habito, /lembrete"
                .to_string(),
        })
    }
}
