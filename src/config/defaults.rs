use std::path::PathBuf;

pub fn default_version() -> u32 {
    1
}

pub fn default_record_dir() -> PathBuf {
    PathBuf::from("records")
}

pub fn default_health_score() -> u32 {
    75
}

pub fn default_min_sentence_chars() -> usize {
    10
}

pub fn default_max_recommendations() -> usize {
    5
}

pub fn default_color_hex() -> String {
    "#8B5A2B".to_string()
}

pub fn default_icon_cycle() -> Vec<String> {
    ["droplet", "leaf", "shield", "sparkles", "heart"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

pub fn default_false() -> bool {
    false
}
