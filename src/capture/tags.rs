//! Tag extraction, energy level and GTD category heuristics

use super::keywords::{
    self, ACTION_LEADING_VERB, CONTEXT_TOKEN, HASHTAG_TOKEN, HIGH_ENERGY_KEYWORDS,
    HIGH_ENERGY_MARKERS, LOW_ENERGY_KEYWORDS, LOW_ENERGY_MARKERS, LOW_ENERGY_PHRASES,
    PROJECT_INDICATORS, REFERENCE_INDICATORS, SOMEDAY_QUALIFIERS, URGENT_MARKERS,
};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const URGENT_TAG: &str = "#urgente";
pub const LOW_ENERGY_TAG: &str = "#energia-baixa";
pub const HIGH_ENERGY_TAG: &str = "#energia-alta";

/// Effort an item is expected to take
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnergyLevel {
    baixa,
    media,
    alta,
}

/// GTD bucket a captured item most likely belongs to
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GtdCategory {
    action,
    reference,
    someday,
    project,
}

impl fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl fmt::Display for GtdCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Normalize a context name into an `@context` tag
///
/// Returns `None` for blank input.
pub fn normalize_context(context: &str) -> Option<String> {
    let context = context.trim().to_lowercase();
    if context.is_empty() {
        None
    } else if context.starts_with('@') {
        Some(context)
    } else {
        Some(format!("@{}", context))
    }
}

/// Collect tags from captured text
///
/// Order: `@context` tokens, the explicit `context`, `#hashtag` tokens, then
/// marker tags. Duplicates keep their first position.
///
/// # Arguments
/// * `text` - Captured text
/// * `context` - Optional context chosen in the capture form (with or without `@`)
pub fn extract_tags(text: &str, context: Option<&str>) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    let mut push = |tag: String| {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    };

    for token in CONTEXT_TOKEN.find_iter(text) {
        push(token.as_str().to_lowercase());
    }
    if let Some(tag) = context.and_then(normalize_context) {
        push(tag);
    }
    for token in HASHTAG_TOKEN.find_iter(text) {
        push(token.as_str().to_lowercase());
    }

    let lower = text.to_lowercase();
    if keywords::contains_any(&lower, URGENT_MARKERS) {
        push(URGENT_TAG.to_string());
    }
    if keywords::contains_any(&lower, LOW_ENERGY_MARKERS) {
        push(LOW_ENERGY_TAG.to_string());
    }
    if keywords::contains_any(&lower, HIGH_ENERGY_MARKERS) {
        push(HIGH_ENERGY_TAG.to_string());
    }

    tags
}

/// Estimate the energy an item demands
///
/// High-energy keywords win over low-energy ones; anything else is `media`.
pub fn detect_energy(text: &str) -> EnergyLevel {
    let lower = text.to_lowercase();

    if keywords::contains_any(&lower, HIGH_ENERGY_KEYWORDS) {
        EnergyLevel::alta
    } else if keywords::contains_any(&lower, LOW_ENERGY_KEYWORDS)
        || keywords::contains_any(&lower, LOW_ENERGY_PHRASES)
    {
        EnergyLevel::baixa
    } else {
        EnergyLevel::media
    }
}

/// Guess the GTD category of captured text, defaulting to `action`
pub fn gtd_category(text: &str) -> GtdCategory {
    let lower = text.to_lowercase();

    if ACTION_LEADING_VERB.is_match(&lower) {
        GtdCategory::action
    } else if keywords::contains_any(&lower, PROJECT_INDICATORS) {
        GtdCategory::project
    } else if keywords::contains_any(&lower, SOMEDAY_QUALIFIERS) {
        GtdCategory::someday
    } else if keywords::contains_any(&lower, REFERENCE_INDICATORS) {
        GtdCategory::reference
    } else {
        GtdCategory::action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_context() {
        assert_eq!(normalize_context("Casa"), Some("@casa".to_string()));
        assert_eq!(normalize_context(" @Trabalho "), Some("@trabalho".to_string()));
        assert_eq!(normalize_context("   "), None);
    }

    #[test]
    fn test_extract_tags_order_and_dedup() {
        let tags = extract_tags("Ver #Projeto com @casa e @CASA", Some("casa"));
        assert_eq!(tags, vec!["@casa", "#projeto"]);
    }

    #[test]
    fn test_extract_tags_empty() {
        assert!(extract_tags("", None).is_empty());
        assert!(extract_tags("   ", Some("  ")).is_empty());
    }

    #[test]
    fn test_detect_energy_high_beats_low() {
        assert_eq!(detect_energy("ligar e escrever relatório"), EnergyLevel::alta);
    }

    #[test]
    fn test_gtd_category_leading_verb_needs_no_space() {
        assert_eq!(gtd_category("vou"), GtdCategory::action);
        assert_eq!(gtd_category("fazer o plano"), GtdCategory::action);
        assert_eq!(gtd_category(""), GtdCategory::action);
    }
}
