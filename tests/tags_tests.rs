//! Tag extraction, energy level and GTD category tests

use timecraft_capture::capture::{
    EnergyLevel, GtdCategory, ItemType, classify, detect_energy, expand, extract_tags, gtd_category,
};

#[test]
fn test_extract_tags_context_and_urgency() {
    let tags = extract_tags("reunião @trabalho urgente", None);
    assert!(tags.contains(&"@trabalho".to_string()));
    assert!(tags.contains(&"#urgente".to_string()));
    assert!(tags.contains(&"#energia-alta".to_string()));
}

#[test]
fn test_extract_tags_lowercases_tokens() {
    let tags = extract_tags("Ver @Escritório #Finanças", None);
    assert_eq!(tags, vec!["@escritório", "#finanças"]);
}

#[test]
fn test_extract_tags_explicit_context() {
    assert_eq!(extract_tags("algo", Some("Casa")), vec!["@casa"]);
    assert_eq!(extract_tags("algo", Some("@rua")), vec!["@rua"]);
    assert!(extract_tags("algo", Some("  ")).is_empty());
}

#[test]
fn test_extract_tags_dedup_with_explicit_marker_hashtag() {
    let tags = extract_tags("#urgente é urgente", None);
    assert_eq!(tags, vec!["#urgente"]);
}

#[test]
fn test_extract_tags_energy_markers() {
    assert_eq!(extract_tags("responder email", None), vec!["#energia-baixa"]);
    assert_eq!(
        extract_tags("ligação rápida para planejar", None),
        vec!["#energia-baixa", "#energia-alta"]
    );
}

#[test]
fn test_extract_tags_is_total() {
    for text in ["", "   ", "🙂🙂", "@", "#", "@@##"] {
        assert!(extract_tags(text, None).is_empty(), "tags for {:?}", text);
    }
}

#[test]
fn test_detect_energy() {
    assert_eq!(detect_energy("organizar a gaveta"), EnergyLevel::media);
    assert_eq!(detect_energy("Estudar Rust"), EnergyLevel::alta);
    assert_eq!(detect_energy("agendar dentista"), EnergyLevel::baixa);
    assert_eq!(detect_energy(""), EnergyLevel::media);
}

#[test]
fn test_gtd_category() {
    assert_eq!(gtd_category("vou ao mercado"), GtdCategory::action);
    assert_eq!(gtd_category("plano de viagem"), GtdCategory::project);
    assert_eq!(gtd_category("talvez aprender piano"), GtdCategory::someday);
    assert_eq!(gtd_category("dados do servidor"), GtdCategory::reference);
    assert_eq!(gtd_category("ir ao parque"), GtdCategory::action);
}

#[test]
fn test_gtd_category_priority() {
    // project indicators are checked before someday qualifiers
    assert_eq!(gtd_category("projeto para quando der"), GtdCategory::project);
    // leading verb wins over everything else
    assert_eq!(gtd_category("preciso anotar o plano"), GtdCategory::action);
}

const ODD_INPUTS: &[&str] = &["", "   ", "\u{FEFF}", "🙂🚀🎉", "日本語のメモ", "مرحبا ٣", "?!.,;", "@#/"];

#[test]
fn test_all_heuristics_are_total_on_odd_input() {
    for text in ODD_INPUTS {
        assert_eq!(detect_energy(text), EnergyLevel::media, "energy for {:?}", text);
        assert_eq!(gtd_category(text), GtdCategory::action, "category for {:?}", text);
        assert!(extract_tags(text, None).is_empty(), "tags for {:?}", text);
        let suggestion = classify(text);
        assert_eq!(suggestion.item_type, ItemType::nota, "type for {:?}", text);
    }
}

#[test]
fn test_all_heuristics_are_deterministic() {
    let inputs = [
        "reunião @trabalho urgente",
        "ligar para o banco #financas",
        "talvez aprender piano",
        "perder 5 kg",
        "🙂🚀🎉",
        "",
    ];
    for text in inputs {
        assert_eq!(detect_energy(text), detect_energy(text));
        assert_eq!(gtd_category(text), gtd_category(text));
        assert_eq!(extract_tags(text, Some("casa")), extract_tags(text, Some("casa")));
        assert_eq!(classify(text), classify(text));
        assert_eq!(expand(text), expand(text));
    }
}
