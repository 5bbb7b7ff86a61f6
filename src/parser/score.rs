use super::cascade::{ordered, Pattern};
use super::Language;
use crate::config::ScorePolicy;
use once_cell::sync::Lazy;
use tracing::{debug, warn};

/// Up to three digits with an optional one- or two-digit fraction ("82", "82.5", "٨٢٫٥")
const NUMBER: &str = "[0-9٠-٩۰-۹]{1,3}(?:[.,٫][0-9٠-٩۰-۹]{1,2})?";

static SCORE_PATTERNS: Lazy<Vec<Pattern>> = Lazy::new(|| {
    vec![
        Pattern::new(
            "score-label-en",
            Some(Language::En),
            &format!(r"(?i)global\s+hair\s+state\s+score[\s:：*]*({NUMBER})\s*[%٪]"),
        ),
        Pattern::new(
            "score-label-en-health",
            Some(Language::En),
            &format!(r"(?i)hair\s+health\s+score[\s:：*]*({NUMBER})\s*[%٪]"),
        ),
        Pattern::new(
            "score-label-fr",
            Some(Language::Fr),
            &format!(r"(?i)score\s+global[^\n0-9٠-٩۰-۹]{{0,48}}?({NUMBER})\s*[%٪]"),
        ),
        Pattern::new(
            "score-label-ar",
            Some(Language::Ar),
            &format!(r"(?:درجة|نتيجة|تقييم|مؤشر)\s+(?:ال)?حالة[^\n0-9٠-٩۰-۹]{{0,48}}?({NUMBER})\s*[%٪]"),
        ),
        Pattern::new(
            "score-unlabeled",
            None,
            &format!(r"(?:^|[^0-9٠-٩۰-۹.,])({NUMBER})\s*[%٪]"),
        ),
    ]
});

/// Health score from the first pattern in the cascade that yields a usable value
pub fn extract_health_score(text: &str, preferred: Language, policy: ScorePolicy) -> Option<u8> {
    for pattern in ordered(&SCORE_PATTERNS, preferred) {
        for caps in pattern.regex.captures_iter(text) {
            let Some(value) = caps.get(1).and_then(|m| parse_percentage(m.as_str())) else {
                continue;
            };

            if value <= 100 {
                debug!("Health score {} matched by {}", value, pattern.name);
                return Some(value as u8);
            }

            match policy {
                ScorePolicy::Clamp => {
                    warn!("Health score {}% out of range, clamping to 100", value);
                    return Some(100);
                }
                ScorePolicy::Reject => {
                    warn!("Health score {}% out of range, ignoring match", value);
                }
            }
        }
    }

    None
}

/// Parse a matched percentage, rounding any fraction half up
fn parse_percentage(s: &str) -> Option<u32> {
    let (whole, fraction) = match s.split_once(['.', ',', '٫']) {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (s, None),
    };

    let value = parse_digits(whole)?;
    let round_up = match fraction.and_then(|f| f.chars().next()) {
        Some(first) => parse_digits(&first.to_string())? >= 5,
        None => false,
    };

    Some(value + u32::from(round_up))
}

/// Parse ASCII, Arabic-Indic or Extended Arabic-Indic digits
fn parse_digits(s: &str) -> Option<u32> {
    s.chars().try_fold(0u32, |acc, c| {
        let digit = match c {
            '0'..='9' => c as u32 - '0' as u32,
            '٠'..='٩' => c as u32 - '٠' as u32,
            '۰'..='۹' => c as u32 - '۰' as u32,
            _ => return None,
        };
        acc.checked_mul(10)?.checked_add(digit)
    })
}
