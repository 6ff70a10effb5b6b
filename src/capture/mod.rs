//! Quick-capture analysis engine
//!
//! Pure functions over captured text, split into submodules:
//! - `keywords`: static keyword and pattern tables
//! - `template`: slash-command expansion and hints
//! - `classifier`: task/goal/habit/note suggestion cascade
//! - `tags`: tag extraction, energy level and GTD category
//! - `metadata`: submit-time metadata and title generation
//! - `pipeline`: expand -> classify -> payload composition

pub mod classifier;
pub mod clock;
pub mod keywords;
pub mod metadata;
pub mod pipeline;
pub mod tags;
pub mod template;

// Re-export all public types
pub use classifier::{Confidence, ItemType, Suggestion, classify};
pub use clock::{Clock, FixedClock, SystemClock};
pub use metadata::{CaptureMetadata, generate_metadata, generate_metadata_with, generate_title};
pub use pipeline::{
    CaptureAnalysis, CaptureError, CaptureRequest, NoteKind, NotePayload, analyze, analyze_with, submit,
};
pub use tags::{EnergyLevel, GtdCategory, detect_energy, extract_tags, gtd_category};
pub use template::{expand, template_hint};
