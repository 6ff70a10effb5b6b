//! Heuristic classification of captured text
//!
//! The classifier is an ordered decision cascade, not a scoring model: the
//! first tier that matches decides the suggestion.

use super::keywords::{
    self, GOAL_INDICATORS, GOAL_KEYWORDS, HABIT_INDICATORS, LEADING_TASK_VERB,
    MEASURABLE_QUANTITY, TASK_KEYWORDS,
};
use super::template::starts_with_command;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How strongly the classifier believes its suggested type
///
/// Ordered from weakest to strongest.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Confidence {
    none,
    low,
    medium,
    high,
}

/// Item type suggested for a captured text
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    /// Actionable task
    tarefa,
    /// Goal
    meta,
    /// Recurring habit
    habito,
    /// Plain note, processed during review
    nota,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Classification result for one snapshot of captured text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub confidence: Confidence,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    /// Human-readable justification, empty when there is nothing to judge
    pub reason: String,
}

impl Suggestion {
    fn new(confidence: Confidence, item_type: ItemType, reason: impl Into<String>) -> Self {
        Self {
            confidence,
            item_type,
            reason: reason.into(),
        }
    }

    /// Whether the capture can be converted without asking the user
    ///
    /// Only high-confidence tasks and goals qualify.
    pub fn should_auto_convert(&self) -> bool {
        self.confidence == Confidence::high
            && matches!(self.item_type, ItemType::tarefa | ItemType::meta)
    }
}

/// Literal commands that decide the type outright
const COMMAND_TYPES: &[(&str, ItemType)] = &[
    ("/tarefa", ItemType::tarefa),
    ("/meta", ItemType::meta),
    ("/habito", ItemType::habito),
];

/// Classify captured text into a typed suggestion
///
/// Tiers, first match wins:
/// 1. fewer than 3 characters: `none`/`nota`
/// 2. literal `/tarefa`, `/meta`, `/habito` prefix: `high`
/// 3. leading action verb, goal indicator, frequency indicator: `high`
/// 4. two or more task keywords, or any goal keyword: `medium`
/// 5. a single task keyword, or a measurable quantity: `low`
/// 6. otherwise `low`/`nota`
///
/// # Examples
/// ```
/// # use timecraft_capture::capture::classifier::{classify, Confidence, ItemType};
/// let suggestion = classify("fazer compras");
/// assert_eq!(suggestion.confidence, Confidence::high);
/// assert_eq!(suggestion.item_type, ItemType::tarefa);
/// ```
pub fn classify(text: &str) -> Suggestion {
    if text.chars().count() < 3 {
        return Suggestion::new(Confidence::none, ItemType::nota, "");
    }

    let lower = text.to_lowercase();

    for (command, item_type) in COMMAND_TYPES {
        if starts_with_command(&lower, command) {
            return Suggestion::new(
                Confidence::high,
                *item_type,
                format!("{} template used", command),
            );
        }
    }

    if LEADING_TASK_VERB.is_match(&lower) {
        return Suggestion::new(Confidence::high, ItemType::tarefa, "leading action verb");
    }
    if keywords::contains_any(&lower, GOAL_INDICATORS) {
        return Suggestion::new(Confidence::high, ItemType::meta, "explicit goal indicator");
    }
    if keywords::contains_any(&lower, HABIT_INDICATORS) {
        return Suggestion::new(
            Confidence::high,
            ItemType::habito,
            "regular frequency indicator",
        );
    }

    let task_matches = keywords::matching(&lower, TASK_KEYWORDS);
    let goal_matches = keywords::matching(&lower, GOAL_KEYWORDS);

    // Task keywords are counted before goal keywords, so text with both
    // leans towards tarefa.
    if task_matches.len() >= 2 {
        return Suggestion::new(
            Confidence::medium,
            ItemType::tarefa,
            format!("multiple task keywords: {}", task_matches[..2].join(", ")),
        );
    }
    if let Some(goal) = goal_matches.first() {
        return Suggestion::new(
            Confidence::medium,
            ItemType::meta,
            format!("goal-related keyword: {}", goal),
        );
    }

    if let [task] = task_matches.as_slice() {
        return Suggestion::new(
            Confidence::low,
            ItemType::tarefa,
            format!("possible task (keyword: {})", task),
        );
    }
    if MEASURABLE_QUANTITY.is_match(&lower) {
        return Suggestion::new(Confidence::low, ItemType::meta, "measurable quantity present");
    }

    Suggestion::new(Confidence::low, ItemType::nota, "will be processed during review")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_has_no_confidence() {
        for text in ["", "a", "ab", "çã"] {
            let suggestion = classify(text);
            assert_eq!(suggestion.confidence, Confidence::none);
            assert_eq!(suggestion.item_type, ItemType::nota);
            assert!(suggestion.reason.is_empty());
        }
    }

    #[test]
    fn test_command_prefix_beats_linguistic_pattern() {
        let suggestion = classify("/tarefa fazer algo");
        assert_eq!(suggestion.confidence, Confidence::high);
        assert_eq!(suggestion.item_type, ItemType::tarefa);
        assert_eq!(suggestion.reason, "/tarefa template used");

        let suggestion = classify("/META correr todos os dias");
        assert_eq!(suggestion.item_type, ItemType::meta);
        assert_eq!(suggestion.reason, "/meta template used");
    }

    #[test]
    fn test_multibyte_text_is_total() {
        let suggestion = classify("🚀🚀🚀");
        assert_eq!(suggestion.confidence, Confidence::low);
        assert_eq!(suggestion.item_type, ItemType::nota);
    }

    #[test]
    fn test_should_auto_convert() {
        assert!(classify("fazer compras").should_auto_convert());
        assert!(classify("meta: ler mais").should_auto_convert());
        assert!(!classify("meditar sempre").should_auto_convert());
        assert!(!classify("terminar e completar").should_auto_convert());
    }

    #[test]
    fn test_confidence_ordering() {
        assert!(Confidence::none < Confidence::low);
        assert!(Confidence::medium < Confidence::high);
    }
}
