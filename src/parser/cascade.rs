//! Ordered pattern lists tried in sequence until one matches.

use super::Language;
use regex::{Captures, Regex};

pub struct Pattern {
    pub name: &'static str,
    /// `None` marks a language-neutral fallback, always tried last
    pub language: Option<Language>,
    pub regex: Regex,
}

impl Pattern {
    /// Build a pattern from a literal regex; panics only on a malformed literal
    pub fn new(name: &'static str, language: Option<Language>, re: &str) -> Self {
        Self {
            name,
            language,
            regex: Regex::new(re).unwrap(),
        }
    }
}

/// Patterns of the preferred language first, then the other languages in
/// declared order, then language-neutral fallbacks.
pub fn ordered(patterns: &[Pattern], preferred: Language) -> impl Iterator<Item = &Pattern> {
    let preferred_first = patterns
        .iter()
        .filter(move |p| p.language == Some(preferred));
    let other_languages = patterns
        .iter()
        .filter(move |p| p.language.is_some() && p.language != Some(preferred));
    let neutral = patterns.iter().filter(|p| p.language.is_none());

    preferred_first.chain(other_languages).chain(neutral)
}

/// Captures of the first pattern that matches, with the pattern's name
pub fn first_captures<'p, 't>(
    patterns: &'p [Pattern],
    text: &'t str,
    preferred: Language,
) -> Option<(&'p Pattern, Captures<'t>)> {
    ordered(patterns, preferred).find_map(|pattern| {
        pattern
            .regex
            .captures(text)
            .map(|caps| (pattern, caps))
    })
}
