use crs::batch::CandidateRanker;
use crs::error::AppError;
use crs::intake::ProfileSubmission;
use crs::language::{LanguageTest, Skill};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) max_batch_rows: usize,
}

impl AppState {
    pub(crate) fn ranker(&self) -> CandidateRanker {
        CandidateRanker::new(self.max_batch_rows)
    }
}

/// Reads a snake_case identifier the same way the JSON API does.
fn parse_identifier<T: DeserializeOwned>(raw: &str, kind: &str) -> Result<T, String> {
    let value = serde_json::Value::String(raw.trim().to_ascii_lowercase());
    serde_json::from_value(value).map_err(|_| format!("'{raw}' is not a known {kind}"))
}

pub(crate) fn parse_test(raw: &str) -> Result<LanguageTest, String> {
    parse_identifier(raw, "language test (celpip, ielts, pte, tef, tcf)")
}

pub(crate) fn parse_skill(raw: &str) -> Result<Skill, String> {
    parse_identifier(raw, "skill (reading, writing, listening, speaking)")
}

pub(crate) fn load_profile(path: &Path) -> Result<ProfileSubmission, AppError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_are_case_insensitive() {
        assert_eq!(parse_test("IELTS"), Ok(LanguageTest::Ielts));
        assert_eq!(parse_skill(" Speaking "), Ok(Skill::Speaking));
    }

    #[test]
    fn unknown_identifiers_name_the_choices() {
        let error = parse_test("toefl").expect_err("not an accepted test");
        assert!(error.contains("celpip"));
    }

    #[test]
    fn missing_profile_file_is_an_io_error() {
        let error = load_profile(Path::new("/nonexistent/profile.json")).expect_err("missing");
        assert!(matches!(error, AppError::Io(_)));
    }
}
