//! Capture handler for the capture MCP server

use crate::CaptureServerHandler;
use crate::capture::{self, CaptureRequest, Clock, FixedClock};
use crate::formatting;
use crate::validation;
use mcp_attr::Result as McpResult;

impl CaptureServerHandler {
    /// **Capture**: Run the full quick-capture pipeline and report the inbox note payload.
    /// **Flow**: expand slash command -> title -> tags -> energy / GTD category -> suggestion.
    ///
    /// A blank `context` falls back to the configured default context.
    /// `processed_at` pins the metadata timestamp (RFC 3339).
    pub async fn handle_capture(
        &self,
        content: String,
        title: Option<String>,
        context: Option<String>,
        processed_at: Option<String>,
    ) -> McpResult<String> {
        let fixed_clock;
        let clock: &dyn Clock = match processed_at {
            Some(ref timestamp) => {
                fixed_clock = FixedClock(validation::parse_processed_at(timestamp)?);
                &fixed_clock
            }
            None => self.clock.as_ref(),
        };

        let request = CaptureRequest {
            context: self
                .config
                .resolve_context(context.as_deref())
                .map(str::to_string),
            content,
            title,
        };

        let payload = capture::submit(&request, self.config.auto_expand, clock).map_err(|e| {
            tracing::warn!(error = %e, "rejected capture");
            validation::capture_error(e)
        })?;

        tracing::info!(
            title = %payload.titulo,
            suggestion = %payload.suggestion.item_type,
            confidence = %payload.suggestion.confidence,
            tags = payload.tags.len(),
            "captured note"
        );

        Ok(formatting::format_payload(&payload))
    }
}
