use super::normalize_key;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorTaxonomyEntry {
    pub canonical_name: &'static str,
    pub hex: &'static str,
    pub reference_note: &'static str,
}

const fn entry(
    canonical_name: &'static str,
    hex: &'static str,
    reference_note: &'static str,
) -> ColorTaxonomyEntry {
    ColorTaxonomyEntry {
        canonical_name,
        hex,
        reference_note,
    }
}

/// Canonical colors with every informal name (English, French, Arabic) that maps to them
static COLOR_TABLE: &[(&[&str], ColorTaxonomyEntry)] = &[
    (
        &["black", "jet black", "noir", "noir de jais", "أسود", "أسود فاحم"],
        entry("Black", "#1C1C1C", "Close to level 1 (black) on the standard tone chart"),
    ),
    (
        &["soft black", "off black", "natural black", "noir naturel", "أسود طبيعي"],
        entry("Soft Black", "#2B2222", "Close to level 2 (soft black) on the standard tone chart"),
    ),
    (
        &["darkest brown", "very dark brown", "brun très foncé", "بني غامق جدا", "بني داكن جدا"],
        entry("Darkest Brown", "#3B2A20", "Between levels 2 and 3 on the standard tone chart"),
    ),
    (
        &["dark brown", "deep brown", "brun foncé", "châtain foncé", "بني غامق", "بني داكن"],
        entry("Dark Brown", "#4E3629", "Close to level 3 (dark brown) on the standard tone chart"),
    ),
    (
        &["brown", "medium brown", "brun", "châtain", "بني", "بني متوسط"],
        entry("Medium Brown", "#6A4E3B", "Close to level 4 (medium brown) on the standard tone chart"),
    ),
    (
        &["light brown", "brun clair", "châtain clair", "بني فاتح"],
        entry("Light Brown", "#8D6A4F", "Close to level 5 (light brown) on the standard tone chart"),
    ),
    (
        &["chestnut", "chestnut brown", "marron", "كستنائي"],
        entry("Chestnut", "#7B3F1D", "Close to shade 4.4 (copper brown) on the standard tone chart"),
    ),
    (
        &["auburn", "acajou", "أحمر داكن", "كستنائي محمر"],
        entry("Auburn", "#922724", "Close to shade 5.5 (mahogany) on the standard tone chart"),
    ),
    (
        &["copper", "cuivré", "blond vénitien", "نحاسي"],
        entry("Copper", "#B05A2F", "Close to shade 7.4 (copper blonde) on the standard tone chart"),
    ),
    (
        &["red", "ginger", "roux", "rouge", "أحمر"],
        entry("Red", "#A52A2A", "Close to shade 6.6 (intense red) on the standard tone chart"),
    ),
    (
        &["dark blonde", "dark blond", "blond foncé", "أشقر غامق", "أشقر داكن"],
        entry("Dark Blonde", "#A67B5B", "Close to level 6 (dark blonde) on the standard tone chart"),
    ),
    (
        &["blonde", "blond", "medium blonde", "أشقر"],
        entry("Blonde", "#C9A66B", "Close to level 7 (blonde) on the standard tone chart"),
    ),
    (
        &["golden blonde", "honey blonde", "blond doré", "blond miel", "أشقر ذهبي", "أشقر عسلي"],
        entry("Golden Blonde", "#D4A84B", "Close to shade 7.3 (golden blonde) on the standard tone chart"),
    ),
    (
        &["light blonde", "light blond", "blond clair", "أشقر فاتح"],
        entry("Light Blonde", "#E6C88F", "Close to level 8 (light blonde) on the standard tone chart"),
    ),
    (
        &["platinum", "platinum blonde", "blond platine", "أشقر بلاتيني"],
        entry("Platinum Blonde", "#E8E4C9", "Close to level 10 (lightest blonde) on the standard tone chart"),
    ),
    (
        &["gray", "grey", "silver", "gris", "argenté", "رمادي", "فضي"],
        entry("Gray", "#9E9E9E", "Grey coverage; compare against level 7 ash shades"),
    ),
    (
        &["salt and pepper", "poivre et sel", "ملح وفلفل"],
        entry("Salt and Pepper", "#7D7D7D", "Mixed grey; compare against level 5 ash shades"),
    ),
    (
        &["white", "blanc", "أبيض"],
        entry("White", "#F2F0EB", "Full grey coverage; no level equivalent"),
    ),
];

/// Filler words dropped before a second lookup attempt
const FILLER_WORDS: &[&str] = &[
    "hair", "color", "colour", "shade", "tone", "cheveux", "couleur", "شعر", "الشعر", "لون",
];

static COLOR_INDEX: Lazy<HashMap<String, &'static ColorTaxonomyEntry>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for (keys, entry) in COLOR_TABLE {
        for key in keys.iter() {
            index.entry(strip_articles(&normalize_key(key))).or_insert(entry);
        }
    }
    index
});

/// Look up a free-text color phrase in the taxonomy
pub fn lookup(phrase: &str) -> Option<&'static ColorTaxonomyEntry> {
    let key = strip_articles(&normalize_key(trim_decoration(phrase)));
    if key.is_empty() {
        return None;
    }

    if let Some(entry) = COLOR_INDEX.get(&key) {
        return Some(*entry);
    }

    let without_filler = key
        .split(' ')
        .filter(|word| !FILLER_WORDS.contains(word))
        .collect::<Vec<_>>()
        .join(" ");

    if without_filler != key {
        return COLOR_INDEX.get(&without_filler).copied();
    }

    None
}

/// All canonical entries, in table order
pub fn entries() -> impl Iterator<Item = &'static ColorTaxonomyEntry> {
    COLOR_TABLE.iter().map(|(_, entry)| entry)
}

/// Informal names registered for a canonical entry
pub fn aliases(canonical_name: &str) -> &'static [&'static str] {
    COLOR_TABLE
        .iter()
        .find(|(_, entry)| entry.canonical_name == canonical_name)
        .map(|(keys, _)| *keys)
        .unwrap_or(&[])
}

fn trim_decoration(s: &str) -> &str {
    s.trim()
        .trim_matches(|c: char| matches!(c, '*' | '"' | '\'' | '«' | '»' | '`' | '_'))
        .trim_end_matches(|c: char| matches!(c, '.' | '!' | '?' | '؟' | '،' | ',' | ':'))
        .trim()
}

/// Drop the Arabic definite article from each word ("البني" -> "بني")
fn strip_articles(key: &str) -> String {
    key.split(' ')
        .map(|word| match word.strip_prefix("ال") {
            Some(rest) if rest.chars().count() >= 2 => rest,
            _ => word,
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_case_insensitive() {
        let entry = lookup("Dark Brown").unwrap();
        assert_eq!(entry.canonical_name, "Dark Brown");
        assert_eq!(entry.hex, "#4E3629");
        assert_eq!(lookup("  DARK   brown ").unwrap().canonical_name, "Dark Brown");
    }

    #[test]
    fn test_lookup_french() {
        assert_eq!(lookup("châtain clair").unwrap().canonical_name, "Light Brown");
        assert_eq!(lookup("Blond Doré").unwrap().canonical_name, "Golden Blonde");
    }

    #[test]
    fn test_lookup_arabic_variants() {
        assert_eq!(lookup("أسود").unwrap().canonical_name, "Black");
        // bare alef and diacritics fold to the same key
        assert_eq!(lookup("اَسود").unwrap().canonical_name, "Black");
        // definite article
        assert_eq!(lookup("البني الغامق").unwrap().canonical_name, "Dark Brown");
    }

    #[test]
    fn test_lookup_drops_filler_words() {
        assert_eq!(lookup("dark brown hair").unwrap().canonical_name, "Dark Brown");
        assert_eq!(lookup("**Auburn**").unwrap().canonical_name, "Auburn");
    }

    #[test]
    fn test_lookup_miss() {
        assert!(lookup("electric teal").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("   ").is_none());
    }

    #[test]
    fn test_every_entry_has_valid_hex() {
        for entry in entries() {
            assert_eq!(entry.hex.len(), 7, "{}", entry.canonical_name);
            assert!(entry.hex.starts_with('#'));
            assert!(entry.hex[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn test_aliases() {
        assert!(aliases("Gray").contains(&"grey"));
        assert!(aliases("Nope").is_empty());
    }
}
