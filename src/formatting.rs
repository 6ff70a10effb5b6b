//! Formatting helper functions for the capture MCP server
//!
//! This module renders capture results as the plain-text tool responses.

use crate::capture::{CaptureAnalysis, NotePayload, Suggestion};

/// Format a suggestion as a single line
///
/// # Example output
/// `Suggestion: tarefa (confidence: high) - leading action verb`
pub fn format_suggestion(suggestion: &Suggestion) -> String {
    if suggestion.reason.is_empty() {
        format!(
            "Suggestion: {} (confidence: {})",
            suggestion.item_type, suggestion.confidence
        )
    } else {
        format!(
            "Suggestion: {} (confidence: {}) - {}",
            suggestion.item_type, suggestion.confidence, suggestion.reason
        )
    }
}

/// Format live analysis of the capture field
pub fn format_analysis(analysis: &CaptureAnalysis) -> String {
    let mut result = format!("Text: {}\n", analysis.expanded);
    result.push_str(&format_suggestion(&analysis.suggestion));
    result.push('\n');
    result.push_str(&format!(
        "Auto-convert: {}\n",
        if analysis.suggestion.should_auto_convert() {
            "yes"
        } else {
            "no"
        }
    ));
    if let Some(hint) = analysis.template_hint {
        result.push_str(&format!("Template: {}\n", hint));
    }
    result
}

/// Format a submitted capture into a display string
///
/// # Arguments
/// * `payload` - The note payload produced by the pipeline
///
/// # Returns
/// Formatted, multi-line report of the captured note
pub fn format_payload(payload: &NotePayload) -> String {
    let mut result = format!(
        "Captured to inbox: {} (kind: {})\n",
        payload.titulo, payload.tipo
    );
    result.push_str(&format!("  Content: {}\n", payload.conteudo));
    if payload.tags.is_empty() {
        result.push_str("  Tags: (none)\n");
    } else {
        result.push_str(&format!("  Tags: {}\n", payload.tags.join(", ")));
    }
    result.push_str(&format!("  Energy: {}\n", payload.metadata.energia));
    result.push_str(&format!("  GTD category: {}\n", payload.metadata.categoria_gtd));
    result.push_str(&format!(
        "  Processed at: {}\n",
        payload.metadata.processado_em.to_rfc3339()
    ));
    result.push_str(&format!("  {}\n", format_suggestion(&payload.suggestion)));
    result
}
