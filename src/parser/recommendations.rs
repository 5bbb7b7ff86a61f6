use super::analysis::RecommendationItem;
use super::section::{find_section, SectionKind};
use super::Language;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static ICON_HINT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)[(\[]?[ \t]*(?:\*\*)?[ \t]*(?:icon[ \t]*-?[ \t]*hint|تلميح[ \t]+(?:ال)?أيقونة|(?:ال)?أيقونة)[ \t]*(?:\*\*)?[ \t]*[:：][ \t]*(?:\*\*)?[ \t]*([^\s,;)\]*|]+)[ \t]*(?:\*\*)?[ \t]*[)\]]?",
    )
    .unwrap()
});

static LEADING_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^[ \t]*(?:\*\*)?[ \t]*(?:recommendation|recommandation|conseil|tip|توصية|نصيحة)[ \t]*(?:#?[0-9]+)?[ \t]*(?:\*\*)?[ \t]*[:：][ \t]*(?:\*\*)?[ \t]*",
    )
    .unwrap()
});

/// Up to `max_items` bulleted recommendations, in source order
pub fn extract_recommendations(
    text: &str,
    preferred: Language,
    max_items: usize,
    icon_cycle: &[String],
) -> Vec<RecommendationItem> {
    let Some(section) = find_section(text, SectionKind::Recommendations, preferred) else {
        return Vec::new();
    };

    let items: Vec<RecommendationItem> = section
        .lines()
        .filter_map(bullet_body)
        .filter_map(parse_bullet)
        .take(max_items)
        .enumerate()
        .map(|(index, (text, hint))| {
            let icon_hint = hint.unwrap_or_else(|| default_hint(icon_cycle, index));
            RecommendationItem { text, icon_hint }
        })
        .collect();

    debug!("Extracted {} recommendations", items.len());
    items
}

/// Line content after its bullet marker, or None if the line is not a bullet
fn bullet_body(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    let body = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('•'))?;

    // horizontal rules ("---") are not bullets
    if body.trim().chars().all(|c| c == '-') {
        return None;
    }

    Some(body)
}

/// Split a bullet into cleaned text and optional icon hint token
fn parse_bullet(body: &str) -> Option<(String, Option<String>)> {
    let hint = ICON_HINT
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim_end_matches(['.', '!', ',']).to_string())
        .filter(|token| !token.is_empty());

    let without_hint = ICON_HINT.replace_all(body, " ");
    let without_label = LEADING_LABEL.replace(&without_hint, "");

    let text = without_label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let text = text
        .trim_matches(|c: char| c.is_whitespace() || matches!(c, '-' | '–' | '|' | ',' | ';'))
        .trim_end_matches("**")
        .trim()
        .to_string();

    if text.is_empty() {
        None
    } else {
        Some((text, hint))
    }
}

fn default_hint(icon_cycle: &[String], index: usize) -> String {
    if icon_cycle.is_empty() {
        return crate::taxonomy::icons::DEFAULT_ICON.to_string();
    }
    icon_cycle[index % icon_cycle.len()].clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParserConfig;

    fn extract(text: &str) -> Vec<RecommendationItem> {
        let config = ParserConfig::default();
        extract_recommendations(
            text,
            Language::detect(text),
            config.max_recommendations,
            &config.default_icon_cycle,
        )
    }

    #[test]
    fn test_caps_at_five_in_order() {
        let text = "**Recommendations:**\n- One tip\n- Two tip\n- Three tip\n- Four tip\n- Five tip\n- Six tip\n- Seven tip\n";
        let items = extract(text);
        assert_eq!(items.len(), 5);
        let texts: Vec<_> = items.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["One tip", "Two tip", "Three tip", "Four tip", "Five tip"]);
    }

    #[test]
    fn test_icon_hint_emoji_and_keyword() {
        let text = "**Recommendations:**\n- Drink more water daily. IconHint: 💧\n- Use a sulfate-free shampoo (IconHint: shampoo)\n";
        let items = extract(text);
        assert_eq!(items[0].text, "Drink more water daily.");
        assert_eq!(items[0].icon_hint, "💧");
        assert_eq!(items[1].text, "Use a sulfate-free shampoo");
        assert_eq!(items[1].icon_hint, "shampoo");
    }

    #[test]
    fn test_labels_are_stripped() {
        let text = "**Recommendations:**\n- **Recommendation:** Trim split ends every 8 weeks. **IconHint:** scissors\n• توصية: استخدم زيت الأرغان IconHint: زيت\n";
        let items = extract(text);
        assert_eq!(items[0].text, "Trim split ends every 8 weeks.");
        assert_eq!(items[0].icon_hint, "scissors");
        assert_eq!(items[1].text, "استخدم زيت الأرغان");
        assert_eq!(items[1].icon_hint, "زيت");
    }

    #[test]
    fn test_default_hints_cycle_by_position() {
        let text = "**Recommendations:**\n- First\n- Second IconHint: sun\n- Third\n";
        let items = extract(text);
        assert_eq!(items[0].icon_hint, "droplet");
        assert_eq!(items[1].icon_hint, "sun");
        assert_eq!(items[2].icon_hint, "shield");
    }

    #[test]
    fn test_non_bullets_ignored() {
        let text = "**Recommendations:**\nHere is what we suggest:\n---\n- Only this one\n";
        let items = extract(text);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text, "Only this one");
    }

    #[test]
    fn test_stops_at_next_section() {
        let text = "**Recommendations:**\n- Sleep on silk\n\n**Disclaimer:**\n- Not medical advice\n";
        let items = extract(text);
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_stops_at_inline_bold_header() {
        let text = "**Recommendations:**\n- Use a gentle shampoo.\n\n**Lifestyle Advice:** Also consider the following.\n- Sleep eight hours a night.\n- Reduce stress daily.";
        let items = extract(text);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text, "Use a gentle shampoo.");
    }

    #[test]
    fn test_no_section() {
        assert!(extract("- orphan bullet").is_empty());
    }
}
