//! Metadata attached to a capture at submit time

use super::clock::{Clock, SystemClock};
use super::tags::{self, EnergyLevel, GtdCategory};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Title used when the captured text is blank
pub const UNTITLED: &str = "Sem título";

const MAX_TITLE_CHARS: usize = 50;
const MAX_TITLE_WORDS: usize = 8;
const TRUNCATED_TITLE_CHARS: usize = 47;

static LEADING_COMMAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/[0-9A-Za-z_]+\s*").expect("leading command pattern is valid"));

/// Processing metadata for a captured note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureMetadata {
    pub energia: EnergyLevel,
    pub categoria_gtd: GtdCategory,
    pub tags: Vec<String>,
    pub processado_em: DateTime<Utc>,
}

/// Compose capture metadata stamped with the current time
pub fn generate_metadata(text: &str, context: Option<&str>) -> CaptureMetadata {
    generate_metadata_with(text, context, &SystemClock)
}

/// Compose capture metadata stamped by `clock`
pub fn generate_metadata_with(
    text: &str,
    context: Option<&str>,
    clock: &dyn Clock,
) -> CaptureMetadata {
    CaptureMetadata {
        energia: tags::detect_energy(text),
        categoria_gtd: tags::gtd_category(text),
        tags: tags::extract_tags(text, context),
        processado_em: clock.now(),
    }
}

/// Derive a short title from captured text
///
/// Short text is used as-is. Longer text loses its leading slash command and
/// is cut to the first eight words, with an ellipsis.
pub fn generate_title(text: &str) -> String {
    let clean = text.trim();
    if clean.is_empty() {
        return UNTITLED.to_string();
    }
    if clean.chars().count() <= MAX_TITLE_CHARS {
        return clean.to_string();
    }

    let without_command = LEADING_COMMAND.replace(clean, "");
    let words: Vec<&str> = without_command.split(' ').filter(|w| !w.is_empty()).collect();
    if words.len() <= MAX_TITLE_WORDS {
        return without_command.into_owned();
    }

    let truncated = words[..MAX_TITLE_WORDS].join(" ");
    if truncated.chars().count() > TRUNCATED_TITLE_CHARS {
        let cut: String = truncated.chars().take(TRUNCATED_TITLE_CHARS).collect();
        format!("{}...", cut)
    } else {
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::clock::FixedClock;
    use chrono::TimeZone;

    #[test]
    fn test_generate_metadata_with_fixed_clock() {
        let at = Utc.with_ymd_and_hms(2025, 3, 15, 9, 30, 0).unwrap();
        let metadata = generate_metadata_with("Ligar para o banco @telefone", None, &FixedClock(at));
        assert_eq!(metadata.energia, EnergyLevel::baixa);
        assert_eq!(metadata.categoria_gtd, GtdCategory::action);
        assert_eq!(metadata.tags, vec!["@telefone"]);
        assert_eq!(metadata.processado_em, at);
    }

    #[test]
    fn test_generate_title_short_and_blank() {
        assert_eq!(generate_title("   "), UNTITLED);
        assert_eq!(generate_title("  Comprar pão  "), "Comprar pão");
    }

    #[test]
    fn test_generate_title_few_words_keeps_text() {
        let text = "/nota Supercalifragilisticexpialidocious antidisestablishmentarianism";
        assert_eq!(
            generate_title(text),
            "Supercalifragilisticexpialidocious antidisestablishmentarianism"
        );
    }

    #[test]
    fn test_generate_title_truncates_words() {
        let text = "um dois tres quatro cinco seis sete oito nove dez onze doze treze";
        assert_eq!(generate_title(text), "um dois tres quatro cinco seis sete oito...");
    }

    #[test]
    fn test_generate_title_truncates_long_words() {
        let text = "planejamento estratégico trimestral completo revisando orçamento marketing vendas operações";
        let title = generate_title(text);
        assert!(title.ends_with("..."));
        assert_eq!(title.chars().count(), TRUNCATED_TITLE_CHARS + 3);
    }
}
