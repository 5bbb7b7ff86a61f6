mod analysis;
mod cascade;
mod color;
mod failure;
mod language;
mod recommendations;
mod scalp;
mod score;
mod section;

pub use analysis::AnalysisResult;
pub use language::Language;

use failure::is_failure_report;

use crate::config::ParserConfig;
use tracing::{debug, warn};

/// Turns one free-text analysis report into an [`AnalysisResult`].
///
/// Holds only configuration; every call is independent and no step can fail
/// the parse. A field that cannot be extracted is left absent (or defaulted,
/// for the health score).
#[derive(Debug, Clone, Default)]
pub struct ReportParser {
    config: ParserConfig,
}

impl ReportParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn parse(&self, text: &str) -> AnalysisResult {
        self.parse_with_language(text, None)
    }

    /// Parse with an optional declared language, whose patterns are tried first
    pub fn parse_with_language(&self, text: &str, declared: Option<Language>) -> AnalysisResult {
        let language = declared.unwrap_or_else(|| Language::detect(text));
        let default_score = self.config.default_health_score.min(100) as u8;

        let blank = text.trim().is_empty();
        if blank {
            warn!("Parsing an empty report");
        }

        if is_failure_report(text) || (blank && self.config.blank_is_failure) {
            debug!("Report is a failure message, skipping extraction");
            return AnalysisResult {
                health_score: default_score,
                color_analysis: None,
                scalp_summary: None,
                recommendations: Vec::new(),
                analysis_failed: true,
                raw_text: text.to_string(),
                language,
            };
        }

        let health_score =
            score::extract_health_score(text, language, self.config.score_policy)
                .unwrap_or(default_score);

        let color_analysis =
            color::extract_color_analysis(text, language, &self.config.default_color_hex);

        let scalp_summary =
            scalp::extract_scalp_summary(text, language, self.config.min_sentence_chars);

        let recommendations = recommendations::extract_recommendations(
            text,
            language,
            self.config.max_recommendations,
            &self.config.default_icon_cycle,
        );

        AnalysisResult {
            health_score,
            color_analysis,
            scalp_summary,
            recommendations,
            analysis_failed: false,
            raw_text: text.to_string(),
            language,
        }
    }
}

/// Parse a report with the default configuration
#[allow(dead_code)]
pub fn parse_report(text: &str) -> AnalysisResult {
    ReportParser::default().parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENGLISH_REPORT: &str = "\
**Global Hair State Score:** 82%

**Scalp Analysis:**
The scalp appears mildly dry around the crown with light flaking. No redness.

**Color Analysis:**
Your hair color is dark brown with subtle warm undertones.
Hex Code: #5D4037

**Recommendations:**
- **Recommendation:** Use a gentle sulfate-free shampoo twice a week. IconHint: shampoo
- Drink at least two liters of water daily. IconHint: 💧
- Massage your scalp for five minutes each evening.
- Apply a light argan oil to the ends. IconHint: oil
- Protect your hair from heat styling. IconHint: heat
- Trim split ends every eight weeks. IconHint: scissors
- Sleep on a silk pillowcase. IconHint: sleep
";

    const ARABIC_REPORT: &str = "\
**درجة الحالة العامة للشعر:** 68%

**تحليل فروة الرأس:**
فروة الرأس دهنية قليلا مع وجود بعض القشرة. لا يوجد احمرار.

**تحليل اللون:**
لون الشعر أسود طبيعي.

**التوصيات:**
- توصية: استخدم شامبو لطيف مرتين أسبوعيا. IconHint: شامبو
- اشرب كمية كافية من الماء يوميا
";

    #[test]
    fn test_full_english_report() {
        let result = parse_report(ENGLISH_REPORT);

        assert!(!result.analysis_failed);
        assert_eq!(result.language, Language::En);
        assert_eq!(result.health_score, 82);

        let color = result.color_analysis.as_ref().unwrap();
        assert_eq!(color.detected_color_label, "Dark Brown");
        assert_eq!(color.color_hex.as_deref(), Some("#5D4037"));
        assert!(color.color_reference_note.is_some());

        assert_eq!(
            result.scalp_summary.as_deref(),
            Some("The scalp appears mildly dry around the crown with light flaking.")
        );

        assert_eq!(result.recommendations.len(), 5);
        assert_eq!(
            result.recommendations[0].text,
            "Use a gentle sulfate-free shampoo twice a week."
        );
        assert_eq!(result.recommendations[0].icon_hint, "shampoo");
        assert_eq!(result.recommendations[1].icon_hint, "💧");
        // third item has no hint: cycle position 2
        assert_eq!(result.recommendations[2].icon_hint, "shield");
        assert_eq!(result.recommendations[4].icon_hint, "heat");
        assert_eq!(result.raw_text, ENGLISH_REPORT);
    }

    #[test]
    fn test_full_arabic_report() {
        let result = parse_report(ARABIC_REPORT);

        assert_eq!(result.language, Language::Ar);
        assert_eq!(result.health_score, 68);

        let color = result.color_analysis.as_ref().unwrap();
        assert_eq!(color.detected_color_label, "Soft Black");

        assert_eq!(
            result.scalp_summary.as_deref(),
            Some("فروة الرأس دهنية قليلا مع وجود بعض القشرة.")
        );

        assert_eq!(result.recommendations.len(), 2);
        assert_eq!(result.recommendations[0].text, "استخدم شامبو لطيف مرتين أسبوعيا.");
        assert_eq!(result.recommendations[0].icon_hint, "شامبو");
        assert_eq!(result.recommendations[1].icon_hint, "leaf");
    }

    #[test]
    fn test_failure_phrase_skips_extraction() {
        let result = parse_report("  Unable to   analyze. ");
        assert!(result.analysis_failed);
        assert!(result.color_analysis.is_none());
        assert!(result.scalp_summary.is_none());
        assert!(result.recommendations.is_empty());
        assert_eq!(result.health_score, 75);
    }

    #[test]
    fn test_failure_phrase_inside_report_is_not_failure() {
        let text = format!("{}\nNote: unable to analyze the nape area.", ENGLISH_REPORT);
        let result = parse_report(&text);
        assert!(!result.analysis_failed);
        assert_eq!(result.health_score, 82);
    }

    #[test]
    fn test_empty_input_defaults() {
        let result = parse_report("");
        assert!(!result.analysis_failed);
        assert!(result.is_blank());
        assert!(result.is_empty());
        assert_eq!(result.health_score, 75);
    }

    #[test]
    fn test_blank_is_failure_config() {
        let parser = ReportParser::new(ParserConfig {
            blank_is_failure: true,
            ..ParserConfig::default()
        });
        assert!(parser.parse("   \n").analysis_failed);
        assert!(!parser.parse(ENGLISH_REPORT).analysis_failed);
    }

    #[test]
    fn test_no_percentage_uses_default_score() {
        let result = parse_report("**Scalp Analysis:** The scalp is balanced and healthy.");
        assert_eq!(result.health_score, 75);
    }

    #[test]
    fn test_configured_default_score() {
        let parser = ReportParser::new(ParserConfig {
            default_health_score: 60,
            ..ParserConfig::default()
        });
        assert_eq!(parser.parse("nothing").health_score, 60);
    }

    #[test]
    fn test_declared_language_reorders_cascade() {
        // both labels present; the declared language's label wins
        let text = "Global Hair State Score: 80%\nدرجة الحالة العامة للشعر: 60%";
        let parser = ReportParser::default();
        assert_eq!(parser.parse_with_language(text, Some(Language::En)).health_score, 80);
        assert_eq!(parser.parse_with_language(text, Some(Language::Ar)).health_score, 60);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let parser = ReportParser::default();
        assert_eq!(parser.parse(ENGLISH_REPORT), parser.parse(ENGLISH_REPORT));
        assert_eq!(parser.parse(ARABIC_REPORT), parser.parse(ARABIC_REPORT));
    }

    #[test]
    fn test_malformed_input_never_panics() {
        let inputs = [
            "**",
            "**Color Analysis:**",
            "**Recommendations:**\n-\n•\n- IconHint:",
            "%%%% 999% ٪",
            "#\n#\n**Scalp Analysis:**\n.",
            "Hex Code: #ZZZZZZ",
        ];
        for input in inputs {
            let result = parse_report(input);
            assert!(result.health_score <= 100);
            assert_eq!(result.raw_text, input);
        }
    }
}
