use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::*;

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default = "default_record_dir")]
    pub record_dir: PathBuf,

    #[serde(default)]
    pub parser: ParserConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct ParserConfig {
    #[serde(default = "default_health_score")]
    pub default_health_score: u32,

    #[serde(default)]
    pub score_policy: ScorePolicy,

    #[serde(default = "default_min_sentence_chars")]
    pub min_sentence_chars: usize,

    #[serde(default = "default_max_recommendations")]
    pub max_recommendations: usize,

    #[serde(default = "default_color_hex")]
    pub default_color_hex: String,

    #[serde(default = "default_icon_cycle")]
    pub default_icon_cycle: Vec<String>,

    /// Treat empty or whitespace-only reports as failed analyses
    #[serde(default = "default_false")]
    pub blank_is_failure: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            default_health_score: default_health_score(),
            score_policy: ScorePolicy::default(),
            min_sentence_chars: default_min_sentence_chars(),
            max_recommendations: default_max_recommendations(),
            default_color_hex: default_color_hex(),
            default_icon_cycle: default_icon_cycle(),
            blank_is_failure: default_false(),
        }
    }
}

/// What to do with a matched percentage above 100
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScorePolicy {
    #[default]
    Clamp,
    Reject,
}
