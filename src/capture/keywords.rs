//! Static keyword and pattern tables for quick-capture analysis
//!
//! Every table is an ordered slice. Several cascades are first-match-wins,
//! so the declared order is part of the behavior and must not be sorted.

use regex::Regex;
use std::sync::LazyLock;

/// Keywords that hint at an actionable task (substring match)
pub const TASK_KEYWORDS: &[&str] = &["fazer", "tarefa", "todo", "completar", "terminar"];

/// Keywords that hint at a goal (substring match)
pub const GOAL_KEYWORDS: &[&str] = &["meta", "objetivo", "alcançar", "conquistar"];

/// Explicit goal indicators checked at high confidence
pub const GOAL_INDICATORS: &[&str] = &[
    "meta:",
    "objetivo:",
    "alcançar",
    "conseguir",
    "atingir",
    "objetivo de",
];

/// Regular-frequency indicators checked at high confidence
pub const HABIT_INDICATORS: &[&str] = &[
    "diariamente",
    "todo dia",
    "todos os dias",
    "sempre",
    "hábito",
    "rotina",
    "toda manhã",
    "toda noite",
];

/// Leading action verb followed by whitespace (U+FEFF counts as whitespace)
pub static LEADING_TASK_VERB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(fazer|preciso|devo|tenho que|comprar|ligar|enviar|pagar)[\s\x{FEFF}]")
        .expect("leading task verb pattern is valid")
});

/// An ASCII number followed by a measurable unit
pub static MEASURABLE_QUANTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]+[\s\x{FEFF}]*(kg|quilos|km|livros|páginas|horas|dias|semanas|meses|anos)")
        .expect("measurable quantity pattern is valid")
});

/// `@context` tokens, including Latin-1 Supplement and Latin Extended-A letters
pub static CONTEXT_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@[0-9A-Za-z_\x{00C0}-\x{017F}]+").expect("context token pattern is valid")
});

/// `#hashtag` tokens, same alphabet as [`CONTEXT_TOKEN`]
pub static HASHTAG_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"#[0-9A-Za-z_\x{00C0}-\x{017F}]+").expect("hashtag token pattern is valid")
});

/// Keywords that mark an item as urgent (`#urgente`)
pub const URGENT_MARKERS: &[&str] = &["urgente", "prioridade", "importante", "asap", "hoje mesmo"];

/// Keywords that mark a low-effort item (`#energia-baixa`)
pub const LOW_ENERGY_MARKERS: &[&str] = &["quick", "rápido", "ligação", "email", "5min"];

/// Keywords that mark a demanding item (`#energia-alta`)
pub const HIGH_ENERGY_MARKERS: &[&str] = &[
    "escrever",
    "criar",
    "planejar",
    "analisar",
    "estudar",
    "reunião",
];

/// Energy detection: checked first, yields `alta`
pub const HIGH_ENERGY_KEYWORDS: &[&str] = &[
    "escrever",
    "criar",
    "planejar",
    "analisar",
    "estudar",
    "desenvolver",
    "projetar",
    "pesquisar",
    "estratégia",
    "reunião",
    "apresentação",
    "relatório",
    "código",
    "programar",
];

/// Energy detection: checked second, yields `baixa`
pub const LOW_ENERGY_KEYWORDS: &[&str] = &[
    "ligar",
    "comprar",
    "enviar",
    "pagar",
    "lembrar",
    "agendar",
    "confirmar",
    "verificar",
    "responder",
    "arquivar",
    "deletar",
    "quick",
    "rápido",
    "5min",
    "email",
];

/// Energy detection: phrase fallback, yields `baixa`
pub const LOW_ENERGY_PHRASES: &[&str] = &["ligar para", "enviar para", "comprar na", "pagar o"];

/// GTD category: leading verb (no trailing whitespace required)
pub static ACTION_LEADING_VERB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(fazer|preciso|devo|tenho que|vou)").expect("action verb pattern is valid")
});

/// GTD category: project indicators
pub const PROJECT_INDICATORS: &[&str] = &["projeto", "plano", "organizar", "preparar para"];

/// GTD category: "someday" qualifiers
pub const SOMEDAY_QUALIFIERS: &[&str] = &[
    "talvez",
    "futuro",
    "um dia",
    "quando",
    "se possível",
    "gostaria",
];

/// GTD category: reference indicators
pub const REFERENCE_INDICATORS: &[&str] = &[
    "informação",
    "dados",
    "referência",
    "documentar",
    "anotar",
];

/// Whitespace as the capture form sees it: Unicode whitespace plus U+FEFF
pub fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Trim leading and trailing [`is_blank`] characters
pub fn trim_blank(text: &str) -> &str {
    text.trim_matches(is_blank)
}

/// Returns true when `haystack` contains any of `needles`
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Returns the needles found in `haystack`, in declared order
pub fn matching<'a>(haystack: &str, needles: &[&'a str]) -> Vec<&'a str> {
    needles
        .iter()
        .copied()
        .filter(|needle| haystack.contains(needle))
        .collect()
}
