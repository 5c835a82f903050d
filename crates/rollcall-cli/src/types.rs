use std::path::PathBuf;

/// Outcome of one pipeline run, summarized for the operator.
#[derive(Debug)]
pub struct RunResult {
    pub dataset: PathBuf,
    pub participants: usize,
    pub unique_ids: usize,
    pub rendered: usize,
    pub delivered: usize,
    pub audit_log: Option<PathBuf>,
}
