use std::path::PathBuf;
use thiserror::Error;

#[allow(dead_code)]
#[derive(Error, Debug)]
pub enum TressaError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Record error: {0}")]
    Record(#[from] RecordError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("default_icon_cycle must contain at least one hint")]
    EmptyIconCycle,

    #[error("default_color_hex '{0}' is not a #RRGGBB value")]
    InvalidHex(String),

    #[error("max_recommendations must be at least 1")]
    ZeroRecommendations,

    #[error("default_health_score {0} is outside 0..=100")]
    ScoreOutOfRange(u32),
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read report '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read report from stdin: {0}")]
    Stdin(std::io::Error),

    #[error("Unknown language tag '{0}' (expected en, fr or ar)")]
    UnknownLanguage(String),
}

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Failed to create record directory: {0}")]
    CreateDir(std::io::Error),

    #[error("Failed to write record: {0}")]
    Write(std::io::Error),

    #[error("Failed to read record '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Record directory not found: {0}")]
    MissingDir(PathBuf),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
