//! Static reference tables: the hair color taxonomy and icon-hint keywords.
//!
//! Both tables are built once on first use and never mutated afterwards.

pub mod colors;
pub mod icons;

pub use icons::{resolve_icon, IconGlyph};

/// Fold an Arabic string for comparison: drop tashkeel and tatweel, unify
/// alef, yeh and teh marbuta variants.
pub fn fold_arabic(s: &str) -> String {
    s.chars()
        .filter_map(|c| match c {
            '\u{064B}'..='\u{065F}' | '\u{0670}' | '\u{0640}' => None,
            'أ' | 'إ' | 'آ' | 'ٱ' => Some('ا'),
            'ى' => Some('ي'),
            'ة' => Some('ه'),
            other => Some(other),
        })
        .collect()
}

/// Lowercase, collapse whitespace and fold Arabic variants
pub fn normalize_key(s: &str) -> String {
    let lowered = s.to_lowercase();
    let collapsed = lowered.split_whitespace().collect::<Vec<_>>().join(" ");
    fold_arabic(&collapsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_arabic_strips_diacritics() {
        // "أَسْوَد" with fatha/sukun marks
        assert_eq!(fold_arabic("أَسْوَد"), "اسود");
        assert_eq!(fold_arabic("إضاءة"), "اضاءه");
    }

    #[test]
    fn test_normalize_key_latin() {
        assert_eq!(normalize_key("  Dark   BROWN "), "dark brown");
    }
}
