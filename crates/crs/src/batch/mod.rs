mod parser;

use crate::intake::IntakeError;
use crate::scoring::{score, CrsResult};
use serde::Serialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

pub const DEFAULT_MAX_BATCH_ROWS: usize = 1000;

#[derive(Debug)]
pub enum BatchError {
    Io(std::io::Error),
    Csv(csv::Error),
    Row { row: usize, source: IntakeError },
    IncompleteLanguage { row: usize, prefix: &'static str },
    TooManyRows { limit: usize },
}

impl std::fmt::Display for BatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchError::Io(err) => write!(f, "failed to read candidate file: {}", err),
            BatchError::Csv(err) => write!(f, "invalid candidate CSV data: {}", err),
            BatchError::Row { row, source } => write!(f, "row {}: {}", row, source),
            BatchError::IncompleteLanguage { row, prefix } => write!(
                f,
                "row {}: {} language needs a test and reading, writing, listening and speaking levels",
                row, prefix
            ),
            BatchError::TooManyRows { limit } => {
                write!(f, "candidate file exceeds the {} row limit", limit)
            }
        }
    }
}

impl std::error::Error for BatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BatchError::Io(err) => Some(err),
            BatchError::Csv(err) => Some(err),
            BatchError::Row { source, .. } => Some(source),
            BatchError::IncompleteLanguage { .. } | BatchError::TooManyRows { .. } => None,
        }
    }
}

impl From<std::io::Error> for BatchError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for BatchError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Scored candidate with its position in the draw order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCandidate {
    pub rank: usize,
    pub candidate_id: String,
    pub result: CrsResult,
}

/// Scores a CSV of candidates and orders them by CRS total.
pub struct CandidateRanker {
    max_rows: usize,
}

impl Default for CandidateRanker {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_BATCH_ROWS)
    }
}

impl CandidateRanker {
    pub fn new(max_rows: usize) -> Self {
        Self { max_rows }
    }

    pub fn rank_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<RankedCandidate>, BatchError> {
        let file = std::fs::File::open(path)?;
        self.rank_reader(file)
    }

    pub fn rank_reader<R: Read>(&self, reader: R) -> Result<Vec<RankedCandidate>, BatchError> {
        let mut scored = Vec::new();

        for (index, record) in parser::parse_rows(reader).enumerate() {
            let row = index + 1;
            if row > self.max_rows {
                return Err(BatchError::TooManyRows {
                    limit: self.max_rows,
                });
            }

            let candidate = record?;
            let candidate_id = candidate.candidate_id.clone();
            let submission = candidate
                .into_submission()
                .map_err(|incomplete| BatchError::IncompleteLanguage {
                    row,
                    prefix: incomplete.0,
                })?;
            let profile = submission
                .into_profile()
                .map_err(|source| BatchError::Row { row, source })?;

            let result = score(&profile);
            debug!(row, %candidate_id, total = result.total, "scored candidate row");
            scored.push((candidate_id, result));
        }

        // Stable sort keeps file order for equal totals.
        scored.sort_by(|a, b| b.1.total.cmp(&a.1.total));
        info!(candidates = scored.len(), "ranked candidate batch");

        Ok(scored
            .into_iter()
            .enumerate()
            .map(|(index, (candidate_id, result))| RankedCandidate {
                rank: index + 1,
                candidate_id,
                result,
            })
            .collect())
    }
}
