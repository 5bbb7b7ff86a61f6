use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Languages the report templates are written in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
    Ar,
}

impl Language {
    /// Guess the report language from its content
    pub fn detect(text: &str) -> Self {
        let mut arabic = 0usize;
        let mut latin = 0usize;

        for c in text.chars() {
            if is_arabic_letter(c) {
                arabic += 1;
            } else if c.is_alphabetic() && (c.is_ascii() || ('\u{00C0}'..='\u{017F}').contains(&c)) {
                latin += 1;
            }
        }

        if arabic > 0 && arabic >= latin {
            return Language::Ar;
        }

        let lowered = text.to_lowercase();
        let french_hits = FRENCH_MARKERS
            .iter()
            .filter(|marker| lowered.contains(*marker))
            .count();

        if french_hits >= 2 {
            Language::Fr
        } else {
            Language::En
        }
    }
}

const FRENCH_MARKERS: &[&str] = &[
    "cheveux",
    "cuir chevelu",
    "analyse de",
    "analyse du",
    "recommandations",
    "couleur",
    "votre ",
    " est ",
    " des ",
];

pub fn is_arabic_letter(c: char) -> bool {
    matches!(c, '\u{0621}'..='\u{064A}' | '\u{0671}'..='\u{06D3}' | '\u{FB50}'..='\u{FDFF}' | '\u{FE70}'..='\u{FEFF}')
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::En => write!(f, "en"),
            Language::Fr => write!(f, "fr"),
            Language::Ar => write!(f, "ar"),
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // accept region-qualified tags like "fr-CA" or "ar_EG"
        let primary = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or("")
            .to_lowercase();

        match primary.as_str() {
            "en" | "eng" | "english" => Ok(Language::En),
            "fr" | "fra" | "fre" | "french" | "français" | "francais" => Ok(Language::Fr),
            "ar" | "ara" | "arabic" | "العربية" => Ok(Language::Ar),
            _ => Err(format!("Unknown language: {}", s)),
        }
    }
}
