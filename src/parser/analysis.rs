use super::Language;
use crate::taxonomy::{resolve_icon, IconGlyph};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Structured fields extracted from one free-text analysis report
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Always present, 0..=100
    pub health_score: u8,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_analysis: Option<ColorAnalysis>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scalp_summary: Option<String>,

    #[serde(default)]
    pub recommendations: Vec<RecommendationItem>,

    /// The whole report was a known "could not analyze" message
    #[serde(default)]
    pub analysis_failed: bool,

    pub raw_text: String,

    /// Language whose patterns were tried first
    #[serde(default)]
    pub language: Language,
}

impl AnalysisResult {
    /// True when the report had no content at all
    pub fn is_blank(&self) -> bool {
        self.raw_text.trim().is_empty()
    }

    /// True when nothing beyond the default score could be extracted
    pub fn is_empty(&self) -> bool {
        self.color_analysis.is_none()
            && self.scalp_summary.is_none()
            && self.recommendations.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColorAnalysis {
    pub detected_color_label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_hex: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_reference_note: Option<String>,

    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationItem {
    pub text: String,

    /// Emoji, English or Arabic keyword, or a positional default
    pub icon_hint: String,
}

impl RecommendationItem {
    pub fn icon(&self) -> IconGlyph {
        resolve_icon(&self.icon_hint)
    }
}
