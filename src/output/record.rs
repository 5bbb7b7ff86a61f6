use crate::error::RecordError;
use crate::parser::AnalysisResult;
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// What the persistence layer keeps for one analysis: the raw report and the
/// images it was produced from, plus the summary fields shown in history lists.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub id: Uuid,
    pub user_id: String,
    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub image_refs: Vec<String>,

    pub raw_text: String,
    pub health_score: u8,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_color: Option<String>,

    #[serde(default)]
    pub analysis_failed: bool,

    pub fingerprint: String,
}

impl AnalysisRecord {
    pub fn new(user_id: &str, image_refs: Vec<String>, result: &AnalysisResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            created_at: Utc::now(),
            image_refs,
            raw_text: result.raw_text.clone(),
            health_score: result.health_score,
            detected_color: result
                .color_analysis
                .as_ref()
                .map(|c| c.detected_color_label.clone()),
            analysis_failed: result.analysis_failed,
            fingerprint: fingerprint(&result.raw_text),
        }
    }

    fn file_name(&self) -> String {
        format!(
            "{}-{}.json",
            self.created_at.format("%Y%m%dT%H%M%S%.3fZ"),
            self.fingerprint
        )
    }
}

/// Stable short hash of a report, ignoring whitespace differences
pub fn fingerprint(raw_text: &str) -> String {
    let normalized = raw_text.split_whitespace().collect::<Vec<_>>().join(" ");
    let hash = Sha256::digest(normalized.as_bytes());
    format!("{:x}", hash)[..12].to_string()
}

/// Write a record under `<record_dir>/<user>/`, returning its path
pub fn write_record(record_dir: &Path, record: &AnalysisRecord) -> Result<PathBuf, RecordError> {
    let user_dir = record_dir.join(sanitize_component(&record.user_id));
    fs::create_dir_all(&user_dir).map_err(RecordError::CreateDir)?;

    let path = user_dir.join(record.file_name());
    let json = serde_json::to_string_pretty(record)?;
    fs::write(&path, json).map_err(RecordError::Write)?;

    tracing::debug!("Wrote analysis record {:?}", path);
    Ok(path)
}

/// Load every record below `record_dir`, oldest first
pub fn load_records(record_dir: &Path) -> Result<Vec<AnalysisRecord>, RecordError> {
    if !record_dir.is_dir() {
        return Err(RecordError::MissingDir(record_dir.to_path_buf()));
    }

    let mut records = Vec::new();
    collect_records(record_dir, &mut records)?;
    records.sort_by_key(|r| r.created_at);
    Ok(records)
}

fn collect_records(dir: &Path, records: &mut Vec<AnalysisRecord>) -> Result<(), RecordError> {
    let read_err = |source| RecordError::Read {
        path: dir.to_path_buf(),
        source,
    };

    for entry in fs::read_dir(dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();

        if path.is_dir() {
            collect_records(&path, records)?;
            continue;
        }

        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }

        let content = fs::read_to_string(&path).map_err(|source| RecordError::Read {
            path: path.clone(),
            source,
        })?;

        match serde_json::from_str::<AnalysisRecord>(&content) {
            Ok(record) => records.push(record),
            Err(e) => tracing::warn!("Skipping unreadable record {:?}: {}", path, e),
        }
    }

    Ok(())
}

/// Keep user ids from escaping the record directory
fn sanitize_component(s: &str) -> String {
    let cleaned: String = s
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    if cleaned.is_empty() {
        "anonymous".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_report;

    #[test]
    fn test_fingerprint_ignores_whitespace() {
        let fp1 = fingerprint("Score: 80%\n\nHealthy");
        let fp2 = fingerprint("  Score: 80%   Healthy ");
        assert_eq!(fp1, fp2);
        assert_eq!(fp1.len(), 12);
        assert_ne!(fp1, fingerprint("Score: 81% Healthy"));
    }

    #[test]
    fn test_write_and_load_records() {
        let dir = tempfile::tempdir().unwrap();
        let result = parse_report("Global Hair State Score: 91%\n**Color Analysis:** Your hair color is black.");
        let record = AnalysisRecord::new("user-42", vec!["front.jpg".to_string()], &result);

        let path = write_record(dir.path(), &record).unwrap();
        assert!(path.starts_with(dir.path().join("user-42")));

        // stray files are ignored
        fs::write(dir.path().join("notes.txt"), "ignore me").unwrap();

        let loaded = load_records(dir.path()).unwrap();
        assert_eq!(loaded, vec![record]);
        assert_eq!(loaded[0].health_score, 91);
        assert_eq!(loaded[0].detected_color.as_deref(), Some("Black"));
    }

    #[test]
    fn test_load_missing_dir() {
        let err = load_records(Path::new("/nonexistent/records")).unwrap_err();
        assert!(matches!(err, RecordError::MissingDir(_)));
    }

    #[test]
    fn test_sanitize_component() {
        assert_eq!(sanitize_component("../evil"), "___evil");
        assert_eq!(sanitize_component(""), "anonymous");
    }
}
