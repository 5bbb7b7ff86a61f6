use super::analysis::ColorAnalysis;
use super::cascade::{first_captures, Pattern};
use super::language::is_arabic_letter;
use super::section::{find_section, SectionKind};
use super::Language;
use crate::taxonomy::{colors, normalize_key};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Label used when a section carries a hex code but names no color
const UNNAMED_COLOR: &str = "Unspecified";

static LABELED_HEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:hex(?:ad[eé]cimal)?(?:\s+code)?|code\s+hex(?:ad[eé]cimal)?|code\s+couleur|(?:ال)?(?:رمز|كود)(?:\s+(?:ال)?(?:لون|سداسي|hex))*)[\s:：*=]*(#[0-9a-f]{6})\b",
    )
    .unwrap()
});

static BARE_HEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(#[0-9A-Fa-f]{6})\b").unwrap());

/// Stop class shared by every phrase pattern: the phrase ends at punctuation or markup
const PHRASE: &str = r"([^.,،;:!?؟\n*()\[\]]+)";

static PHRASE_PATTERNS: Lazy<Vec<Pattern>> = Lazy::new(|| {
    let p = |name, language, prefix: &str| Pattern::new(name, Some(language), &format!("{prefix}{PHRASE}"));
    vec![
        p("detected-en", Language::En, r"(?i)detected\s+(?:hair\s+)?colou?r[\s:：*]*(?:is\s+)?"),
        p(
            "hair-color-is-en",
            Language::En,
            r"(?i)hair\s+colou?r\s+(?:is|appears\s+to\s+be|seems\s+to\s+be|looks)\s+(?:like\s+)?(?:an?\s+)?",
        ),
        p("appears-en", Language::En, r"(?i)(?:appears|seems)\s+to\s+be\s+(?:an?\s+)?"),
        p("detected-fr", Language::Fr, r"(?i)couleur\s+détectée[\s:：*]*(?:est\s+)?"),
        p(
            "hair-color-is-fr",
            Language::Fr,
            r"(?i)couleur\s+(?:de\s+vos\s+cheveux|des\s+cheveux|naturelle)\s+(?:est|semble\s+être|paraît)\s+(?:un\s+|une\s+|d['’]un\s+)?",
        ),
        p(
            "cheveux-sont-fr",
            Language::Fr,
            r"(?i)cheveux\s+(?:sont|semblent\s+être|paraissent)\s+(?:d['’]un\s+|de\s+couleur\s+)?",
        ),
        p("detected-ar", Language::Ar, r"(?:ال)?لون\s+(?:ال)?مكتشف[\s:：*]*(?:هو\s+)?"),
        p("hair-color-is-ar", Language::Ar, r"لون\s+(?:ال)?شعر(?:ك)?\s+(?:هو\s+|يبدو\s+)?"),
        p("appears-ar", Language::Ar, r"يبدو\s+(?:أن\s+)?(?:اللون\s+|الشعر\s+)?"),
    ]
});

/// Basic color names scanned for in the first sentence, in priority order
const COLOR_KEYWORDS: &[&str] = &[
    "jet black",
    "dark brown",
    "light brown",
    "dark blonde",
    "light blonde",
    "golden blonde",
    "platinum",
    "auburn",
    "chestnut",
    "copper",
    "black",
    "brown",
    "blonde",
    "blond",
    "red",
    "ginger",
    "gray",
    "grey",
    "silver",
    "white",
    "châtain",
    "brun",
    "noir",
    "roux",
    "gris",
    "blanc",
    "بني غامق",
    "بني فاتح",
    "أشقر",
    "أسود",
    "كستنائي",
    "نحاسي",
    "أحمر",
    "رمادي",
    "أبيض",
    "بني",
];

/// Words after which a color phrase stops describing the color itself
const PHRASE_CONNECTORS: &[&str] = &[" with ", " and ", " but ", " avec ", " et ", " mais ", " مع ", " لكن "];

pub fn extract_color_analysis(
    text: &str,
    preferred: Language,
    default_hex: &str,
) -> Option<ColorAnalysis> {
    let section = find_section(text, SectionKind::Color, preferred)?;

    let explicit_hex = extract_hex(section);
    let phrase = detected_phrase(section, preferred).or_else(|| first_sentence_keyword(section));

    let analysis = match (phrase, explicit_hex) {
        (Some(phrase), hex) => build(&phrase, hex, default_hex),
        (None, Some(hex)) => ColorAnalysis {
            detected_color_label: UNNAMED_COLOR.to_string(),
            summary: summarize(UNNAMED_COLOR, &hex),
            color_hex: Some(hex),
            color_reference_note: None,
        },
        (None, None) => {
            debug!("Color section present but no color could be identified");
            return None;
        }
    };

    Some(analysis)
}

fn build(phrase: &str, explicit_hex: Option<String>, default_hex: &str) -> ColorAnalysis {
    match colors::lookup(phrase) {
        Some(entry) => {
            debug!("Color phrase '{}' mapped to {}", phrase, entry.canonical_name);
            let hex = explicit_hex.unwrap_or_else(|| entry.hex.to_string());
            ColorAnalysis {
                detected_color_label: entry.canonical_name.to_string(),
                summary: summarize(entry.canonical_name, &hex),
                color_hex: Some(hex),
                color_reference_note: Some(entry.reference_note.to_string()),
            }
        }
        None => {
            debug!("Color phrase '{}' not in taxonomy", phrase);
            let hex = explicit_hex.unwrap_or_else(|| default_hex.to_string());
            ColorAnalysis {
                detected_color_label: phrase.to_string(),
                summary: summarize(phrase, &hex),
                color_hex: Some(hex),
                color_reference_note: None,
            }
        }
    }
}

fn summarize(label: &str, hex: &str) -> String {
    format!("Detected hair color: {} ({})", label, hex)
}

/// Labeled hex code first, then any bare #RRGGBB in the section
fn extract_hex(section: &str) -> Option<String> {
    LABELED_HEX
        .captures(section)
        .or_else(|| BARE_HEX.captures(section))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_uppercase())
}

fn detected_phrase(section: &str, preferred: Language) -> Option<String> {
    let (pattern, caps) = first_captures(&PHRASE_PATTERNS, section, preferred)?;
    let phrase = clean_phrase(caps.get(1)?.as_str())?;
    debug!("Color phrase '{}' matched by {}", phrase, pattern.name);
    Some(phrase)
}

fn clean_phrase(raw: &str) -> Option<String> {
    let mut phrase = raw.trim();

    for connector in PHRASE_CONNECTORS {
        if let Some(idx) = phrase.find(connector) {
            phrase = &phrase[..idx];
        }
    }

    let phrase = strip_article(phrase.trim())
        .trim_matches(|c: char| c.is_whitespace() || matches!(c, '"' | '\'' | '«' | '»'));

    // a hex code is not a color name
    if phrase.is_empty() || phrase.starts_with('#') {
        None
    } else {
        Some(phrase.to_string())
    }
}

fn strip_article(phrase: &str) -> &str {
    match phrase.get(..4) {
        Some(head) if head.eq_ignore_ascii_case("the ") => &phrase[4..],
        _ => phrase,
    }
}

/// First keyword from the fixed list that appears in the section's first sentence
fn first_sentence_keyword(section: &str) -> Option<String> {
    let sentence = section
        .split(['.', '!', '?', '؟', '\n'])
        .map(str::trim)
        .find(|s| !s.is_empty())?;
    let haystack = normalize_key(sentence);

    COLOR_KEYWORDS
        .iter()
        .find(|keyword| contains_keyword(&haystack, &normalize_key(keyword)))
        .map(|keyword| {
            debug!("Color keyword '{}' found in first sentence", keyword);
            keyword.to_string()
        })
}

/// Proclitics that may attach to an Arabic keyword ("البني", "وبني")
const ARABIC_PROCLITICS: &[&str] = &["ال", "و", "ب", "ل", "ك", "ف", "وال", "بال", "كال", "فال", "لل"];

/// Keywords must sit on word boundaries; Arabic ones may carry a known proclitic
fn contains_keyword(haystack: &str, keyword: &str) -> bool {
    let arabic = keyword.chars().next().is_some_and(is_arabic_letter);

    haystack.match_indices(keyword).any(|(idx, _)| {
        let after = haystack[idx + keyword.len()..].chars().next();
        if after.is_some_and(char::is_alphanumeric) {
            return false;
        }

        let word_start = haystack[..idx]
            .char_indices()
            .rev()
            .take_while(|(_, c)| c.is_alphanumeric())
            .last()
            .map(|(i, _)| i)
            .unwrap_or(idx);
        let prefix = &haystack[word_start..idx];

        prefix.is_empty() || (arabic && ARABIC_PROCLITICS.contains(&prefix))
    })
}
