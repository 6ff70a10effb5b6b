//! Quick-capture pipeline: raw input -> expand -> classify / metadata
//!
//! The form owns the mutable text field; this module only turns a snapshot
//! of it into values the UI or the note store can consume.

use super::classifier::{self, Suggestion};
use super::clock::Clock;
use super::metadata::{self, CaptureMetadata};
use super::template;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of note as stored by the notes collaborator
///
/// Every capture starts as `rapida` (the GTD inbox); the other kinds are
/// assigned during review.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteKind {
    /// Unprocessed quick capture
    rapida,
    /// Project material
    projeto,
    /// Reference material
    referencia,
    /// Someday/maybe
    algum_dia,
    /// Converted into a task or goal
    processada,
}

impl fmt::Display for NoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Live feedback for the current contents of the capture field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaptureAnalysis {
    /// Text after template expansion (what the field should now show)
    pub expanded: String,
    pub suggestion: Suggestion,
    pub template_hint: Option<&'static str>,
}

/// Analyze one snapshot of the capture field
///
/// The hint is computed on the raw text, so it is only present while the
/// user is still typing a bare command.
pub fn analyze(raw: &str) -> CaptureAnalysis {
    analyze_with(raw, true)
}

/// Analyze a snapshot, optionally skipping slash-command expansion
pub fn analyze_with(raw: &str, expand_templates: bool) -> CaptureAnalysis {
    let expanded = if expand_templates {
        template::expand(raw)
    } else {
        raw.to_string()
    };
    let suggestion = classifier::classify(&expanded);
    CaptureAnalysis {
        template_hint: template::template_hint(raw),
        expanded,
        suggestion,
    }
}

/// Fields submitted from the capture form
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CaptureRequest {
    pub content: String,
    pub title: Option<String>,
    pub context: Option<String>,
}

impl CaptureRequest {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

/// Note handed to the external note store
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotePayload {
    pub titulo: String,
    pub conteudo: String,
    pub tipo: NoteKind,
    pub tags: Vec<String>,
    pub metadata: CaptureMetadata,
    /// Suggestion for the expanded content, shown after submit
    pub suggestion: Suggestion,
}

/// Reasons a capture cannot be submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// Content is empty or whitespace only
    EmptyContent,
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::EmptyContent => write!(f, "Content is required"),
        }
    }
}

impl std::error::Error for CaptureError {}

/// Build the note payload for a submitted capture
///
/// # Arguments
/// * `request` - Form fields
/// * `expand_templates` - Apply slash-command expansion to the content
/// * `clock` - Source of the `processado_em` timestamp
///
/// # Returns
/// The payload, or [`CaptureError::EmptyContent`] for blank content
pub fn submit(
    request: &CaptureRequest,
    expand_templates: bool,
    clock: &dyn Clock,
) -> Result<NotePayload, CaptureError> {
    if request.content.trim().is_empty() {
        return Err(CaptureError::EmptyContent);
    }

    let content = if expand_templates {
        template::expand(&request.content)
    } else {
        request.content.clone()
    };
    let context = request.context.as_deref();

    let titulo = match request.title.as_deref().map(str::trim) {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => metadata::generate_title(&content),
    };

    let capture_metadata = metadata::generate_metadata_with(&content, context, clock);

    Ok(NotePayload {
        titulo,
        tags: capture_metadata.tags.clone(),
        metadata: capture_metadata,
        suggestion: classifier::classify(&content),
        tipo: NoteKind::rapida,
        conteudo: content,
    })
}
