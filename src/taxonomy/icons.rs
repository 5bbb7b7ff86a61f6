use super::normalize_key;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// Icon used when a hint matches no table
pub const DEFAULT_ICON: &str = "star";

/// How an icon hint should be rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum IconGlyph {
    /// The hint was already an emoji and is shown as-is
    Emoji(String),
    /// A named icon from the app's icon set
    Named(&'static str),
}

impl IconGlyph {
    pub fn as_str(&self) -> &str {
        match self {
            IconGlyph::Emoji(s) => s,
            IconGlyph::Named(name) => name,
        }
    }
}

impl std::fmt::Display for IconGlyph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

static ENGLISH_ICONS: &[(&str, &str)] = &[
    ("shampoo", "bottle"),
    ("conditioner", "bottle"),
    ("wash", "bottle"),
    ("water", "water"),
    ("droplet", "water"),
    ("drop", "water"),
    ("hydration", "water"),
    ("hydrate", "water"),
    ("moisture", "water"),
    ("oil", "oil"),
    ("serum", "oil"),
    ("mask", "jar"),
    ("treatment", "jar"),
    ("diet", "nutrition"),
    ("food", "nutrition"),
    ("nutrition", "nutrition"),
    ("vitamin", "pill"),
    ("supplement", "pill"),
    ("sun", "sun"),
    ("uv", "sun"),
    ("scissors", "cut"),
    ("trim", "cut"),
    ("cut", "cut"),
    ("heat", "flame"),
    ("fire", "flame"),
    ("brush", "brush"),
    ("comb", "brush"),
    ("sleep", "moon"),
    ("night", "moon"),
    ("leaf", "leaf"),
    ("natural", "leaf"),
    ("herbal", "leaf"),
    ("shield", "shield"),
    ("protect", "shield"),
    ("protection", "shield"),
    ("massage", "hand"),
    ("hand", "hand"),
    ("stress", "spa"),
    ("relax", "spa"),
    ("heart", "heart"),
    ("health", "heart"),
    ("sparkles", "sparkles"),
    ("shine", "sparkles"),
    ("star", "star"),
    ("doctor", "doctor"),
    ("dermatologist", "doctor"),
];

static ARABIC_ICONS: &[(&str, &str)] = &[
    ("شامبو", "bottle"),
    ("بلسم", "bottle"),
    ("غسل", "bottle"),
    ("ماء", "water"),
    ("مياه", "water"),
    ("ترطيب", "water"),
    ("قطرة", "water"),
    ("زيت", "oil"),
    ("سيروم", "oil"),
    ("قناع", "jar"),
    ("ماسك", "jar"),
    ("علاج", "jar"),
    ("غذاء", "nutrition"),
    ("تغذية", "nutrition"),
    ("طعام", "nutrition"),
    ("فيتامين", "pill"),
    ("مكملات", "pill"),
    ("شمس", "sun"),
    ("قص", "cut"),
    ("مقص", "cut"),
    ("حرارة", "flame"),
    ("مشط", "brush"),
    ("فرشاة", "brush"),
    ("نوم", "moon"),
    ("ورقة", "leaf"),
    ("طبيعي", "leaf"),
    ("أعشاب", "leaf"),
    ("حماية", "shield"),
    ("تدليك", "hand"),
    ("توتر", "spa"),
    ("استرخاء", "spa"),
    ("قلب", "heart"),
    ("صحة", "heart"),
    ("لمعان", "sparkles"),
    ("نجمة", "star"),
    ("طبيب", "doctor"),
];

static ENGLISH_INDEX: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| ENGLISH_ICONS.iter().copied().collect());

static ARABIC_INDEX: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    ARABIC_ICONS
        .iter()
        .map(|(keyword, icon)| (normalize_key(keyword), *icon))
        .collect()
});

/// Resolve an icon hint: emoji as-is, then the Arabic table, then English, then the default
pub fn resolve_icon(hint: &str) -> IconGlyph {
    let hint = hint.trim();

    if is_emoji(hint) {
        return IconGlyph::Emoji(hint.to_string());
    }

    let key = normalize_key(hint.trim_matches(|c: char| c.is_ascii_punctuation()));

    if let Some(icon) = ARABIC_INDEX.get(key.as_str()) {
        return IconGlyph::Named(*icon);
    }

    if let Some(icon) = ENGLISH_INDEX.get(key.as_str()) {
        return IconGlyph::Named(*icon);
    }

    // plural English keywords ("vitamins", "oils")
    if let Some(icon) = key.strip_suffix('s').and_then(|k| ENGLISH_INDEX.get(k)) {
        return IconGlyph::Named(*icon);
    }

    IconGlyph::Named(DEFAULT_ICON)
}

/// True when every char is part of an emoji sequence and at least one is a pictograph
pub fn is_emoji(s: &str) -> bool {
    let mut has_pictograph = false;

    for c in s.chars() {
        if is_pictograph(c) {
            has_pictograph = true;
        } else if !is_emoji_modifier(c) {
            return false;
        }
    }

    has_pictograph
}

fn is_pictograph(c: char) -> bool {
    matches!(c as u32,
        0x1F000..=0x1F02F   // mahjong
        | 0x1F0A0..=0x1F0FF // playing cards
        | 0x1F100..=0x1F1FF // enclosed alphanumerics, regional indicators
        | 0x1F300..=0x1F5FF // misc symbols and pictographs
        | 0x1F600..=0x1F64F // emoticons
        | 0x1F680..=0x1F6FF // transport and map
        | 0x1F900..=0x1F9FF // supplemental symbols and pictographs
        | 0x1FA70..=0x1FAFF // symbols and pictographs extended-a
        | 0x2600..=0x26FF   // misc symbols
        | 0x2700..=0x27BF   // dingbats
        | 0x2B50..=0x2B55   // stars and circles
        | 0x231A..=0x231B
        | 0x23E9..=0x23FA
    )
}

fn is_emoji_modifier(c: char) -> bool {
    matches!(c as u32,
        0xFE0F | 0xFE0E     // variation selectors
        | 0x200D            // zero width joiner
        | 0x20E3            // combining keycap
        | 0xE0020..=0xE007F // tags
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emoji_passthrough() {
        assert_eq!(resolve_icon("💧"), IconGlyph::Emoji("💧".to_string()));
        assert_eq!(resolve_icon(" ☀️ "), IconGlyph::Emoji("☀️".to_string()));
        // ZWJ sequence
        assert!(is_emoji("👩‍🦰"));
    }

    #[test]
    fn test_english_keywords() {
        assert_eq!(resolve_icon("shampoo"), IconGlyph::Named("bottle"));
        assert_eq!(resolve_icon("Water"), IconGlyph::Named("water"));
        assert_eq!(resolve_icon("vitamins"), IconGlyph::Named("pill"));
    }

    #[test]
    fn test_arabic_keywords() {
        assert_eq!(resolve_icon("شامبو"), IconGlyph::Named("bottle"));
        assert_eq!(resolve_icon("زيت"), IconGlyph::Named("oil"));
        // hamza-less spelling folds to the table entry
        assert_eq!(resolve_icon("اعشاب"), IconGlyph::Named("leaf"));
    }

    #[test]
    fn test_unknown_falls_back_to_default() {
        assert_eq!(resolve_icon("quantum"), IconGlyph::Named(DEFAULT_ICON));
        assert_eq!(resolve_icon(""), IconGlyph::Named(DEFAULT_ICON));
    }

    #[test]
    fn test_is_emoji_rejects_text() {
        assert!(!is_emoji("a💧"));
        assert!(!is_emoji(""));
        assert!(!is_emoji("#"));
    }
}
