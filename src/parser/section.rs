//! Locating labeled sections ("**Color Analysis:**", "## تحليل اللون", ...) in a report.

use super::cascade::{ordered, Pattern};
use super::Language;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Score,
    Scalp,
    Color,
    Recommendations,
    /// Headers we never extract from but which still end the previous section
    Other,
}

/// Header line prefix: optional markdown heading, bold marker and numbering
const HEADER_PREFIX: &str = r"(?im)^[ \t]*(?:#{1,6}[ \t]*)?(?:\*\*|__)?[ \t]*(?:\d{1,2}[.)][ \t]*)?(?:\*\*)?[ \t]*";
/// Header line suffix: optional closing bold marker and colon in either order
const HEADER_SUFFIX: &str = r"[ \t]*(?:\*\*|__)?[ \t]*[:：]?[ \t]*(?:\*\*|__)?";

fn header(name: &'static str, language: Language, label: &str) -> Pattern {
    Pattern::new(
        name,
        Some(language),
        &format!("{}(?:{}){}", HEADER_PREFIX, label, HEADER_SUFFIX),
    )
}

static SCORE_HEADERS: Lazy<Vec<Pattern>> = Lazy::new(|| {
    vec![
        header("score-en", Language::En, r"global\s+hair\s+state\s+score|(?:overall\s+)?hair\s+health\s+score"),
        header("score-fr", Language::Fr, r"score\s+global[^\n:：*]*"),
        header("score-ar", Language::Ar, r"(?:درجة|نتيجة|تقييم|مؤشر)\s+(?:ال)?حالة[^\n:：*]*"),
    ]
});

static SCALP_HEADERS: Lazy<Vec<Pattern>> = Lazy::new(|| {
    vec![
        header("scalp-en", Language::En, r"scalp\s+(?:analysis|health|condition)"),
        header("scalp-fr", Language::Fr, r"(?:analyse|état|santé)\s+du\s+cuir\s+chevelu"),
        header("scalp-ar", Language::Ar, r"(?:تحليل|صحة|حالة)\s+فروة\s+الرأس"),
    ]
});

static COLOR_HEADERS: Lazy<Vec<Pattern>> = Lazy::new(|| {
    vec![
        header("color-en", Language::En, r"(?:hair\s+)?colou?r\s+analysis"),
        header("color-fr", Language::Fr, r"analyse\s+(?:de\s+la\s+|des\s+|de\s+)?couleurs?(?:\s+des\s+cheveux)?"),
        header("color-ar", Language::Ar, r"تحليل\s+(?:ال)?(?:لون|ألوان)(?:\s+الشعر)?"),
    ]
});

static RECOMMENDATION_HEADERS: Lazy<Vec<Pattern>> = Lazy::new(|| {
    vec![
        header("recommendations-en", Language::En, r"(?:personali[sz]ed\s+)?recommendations|tips"),
        header("recommendations-fr", Language::Fr, r"recommandations(?:\s+personnalisées)?|conseils"),
        header("recommendations-ar", Language::Ar, r"(?:ال)?توصيات|(?:ال)?نصائح"),
    ]
});

static OTHER_HEADERS: Lazy<Vec<Pattern>> = Lazy::new(|| {
    vec![
        header(
            "other-en",
            Language::En,
            r"hair\s+(?:type|texture|density|porosity)|summary|conclusion|overall\s+assessment|observations|disclaimer",
        ),
        header(
            "other-fr",
            Language::Fr,
            r"(?:type|texture|densité|porosité)\s+(?:des\s+)?cheveux|résumé|conclusion|avertissement",
        ),
        header(
            "other-ar",
            Language::Ar,
            r"(?:نوع|ملمس|كثافة|مسامية)\s+الشعر|(?:ال)?ملخص|(?:ال)?خلاصة|تنبيه",
        ),
    ]
});

/// A line holding nothing but a bold run, e.g. "**Hair Type**" or "**Notes:**"
static BOLD_ONLY_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[ \t]*\*\*[^*\n]+\*\*[ \t]*[:：]?[ \t]*$").unwrap());

/// A line opening with a bold label, "**Label:** text" or "**Label**: text"
static INLINE_BOLD_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[ \t]*\*\*([^*\n]+?)(?:[ \t]*[:：][ \t]*\*\*|\*\*[ \t]*[:：])").unwrap()
});

/// Bold labels that annotate a field inside a section rather than open a new one
static FIELD_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:hex(?:ad[eé]cimal)?(?:\s+code)?|code\s+hex(?:ad[eé]cimal)?|code\s+couleur|detected\s+(?:hair\s+)?colou?r|couleur\s+détectée|icon\s*-?\s*hint|(?:ال)?(?:رمز|كود)(?:\s+\S+)*|(?:ال)?لون\s+(?:ال)?مكتشف)$",
    )
    .unwrap()
});

pub fn headers(kind: SectionKind) -> &'static [Pattern] {
    match kind {
        SectionKind::Score => &SCORE_HEADERS,
        SectionKind::Scalp => &SCALP_HEADERS,
        SectionKind::Color => &COLOR_HEADERS,
        SectionKind::Recommendations => &RECOMMENDATION_HEADERS,
        SectionKind::Other => &OTHER_HEADERS,
    }
}

const ALL_KINDS: [SectionKind; 5] = [
    SectionKind::Score,
    SectionKind::Scalp,
    SectionKind::Color,
    SectionKind::Recommendations,
    SectionKind::Other,
];

/// Body of the first matching section header, up to the next header or end of text.
///
/// The remainder of the header line itself belongs to the body, so
/// "**Scalp Analysis:** Mild dryness." yields "Mild dryness.".
pub fn find_section(text: &str, kind: SectionKind, preferred: Language) -> Option<&str> {
    ordered(headers(kind), preferred).find_map(|pattern| {
        let m = pattern
            .regex
            .find_iter(text)
            .find(|m| is_header_match(text, m.start(), m.end()))?;
        let rest = &text[m.end()..];
        let body = &rest[..next_boundary(rest)];
        tracing::debug!(
            "Section {:?} matched header pattern {} ({} bytes)",
            kind,
            pattern.name,
            body.len()
        );
        Some(body.trim())
    })
}

/// A header match counts only when it is marked up (bold, heading, colon) or
/// stands alone on its line, so prose like "Scalp health looks good" is not a header.
fn is_header_match(text: &str, start: usize, end: usize) -> bool {
    let matched = &text[start..end];
    if matched.contains([':', '：', '*', '#']) || matched.contains("__") {
        return true;
    }

    let line_end = text[end..].find('\n').map(|i| end + i).unwrap_or(text.len());
    text[end..line_end].trim().is_empty()
}

/// Byte offset of the first line (after the current one) that starts a new section
fn next_boundary(rest: &str) -> usize {
    let mut offset = match rest.find('\n') {
        Some(i) => i + 1,
        None => return rest.len(),
    };

    while offset < rest.len() {
        let line_end = rest[offset..]
            .find('\n')
            .map(|i| offset + i)
            .unwrap_or(rest.len());
        let line = &rest[offset..line_end];

        if is_section_boundary(line) {
            return offset;
        }

        offset = line_end + 1;
    }

    rest.len()
}

fn is_section_boundary(line: &str) -> bool {
    let trimmed = line.trim_start();

    if trimmed.starts_with('#') {
        return true;
    }

    // bullets never start a section, even when their label is a header word
    if trimmed.starts_with('-') || trimmed.starts_with('•') {
        return false;
    }

    // any "**Label:**" line opens a new section unless it labels a field such as the hex code
    if let Some(caps) = INLINE_BOLD_LABEL.captures(line) {
        let label = caps.get(1).map(|m| m.as_str().trim()).unwrap_or("");
        return !FIELD_LABEL.is_match(label);
    }

    if BOLD_ONLY_LINE.is_match(line) {
        return true;
    }

    ALL_KINDS
        .iter()
        .flat_map(|kind| headers(*kind).iter())
        .any(|pattern| {
            pattern
                .regex
                .find(line)
                .is_some_and(|m| is_header_match(line, m.start(), m.end()))
        })
}
