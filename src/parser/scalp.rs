use super::section::{find_section, SectionKind};
use super::Language;
use tracing::debug;

const SENTENCE_TERMINATORS: [char; 6] = ['.', '!', '?', '؟', '。', '\n'];

/// First sentence of the scalp section long enough to be meaningful, ending in a period
pub fn extract_scalp_summary(text: &str, preferred: Language, min_chars: usize) -> Option<String> {
    let section = find_section(text, SectionKind::Scalp, preferred)?;

    let sentence = section
        .split(SENTENCE_TERMINATORS)
        .map(clean_sentence)
        .find(|s| s.chars().count() >= min_chars);

    match sentence {
        Some(s) => Some(format!("{}.", s)),
        None => {
            debug!("Scalp section has no sentence of at least {} chars", min_chars);
            None
        }
    }
}

fn clean_sentence(raw: &str) -> String {
    let without_bold = raw.replace("**", "");
    without_bold
        .trim()
        .trim_start_matches(['-', '•', '*'])
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
