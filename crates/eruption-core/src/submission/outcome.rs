//! Result of a successful submission.

use crate::export::{ExportSnapshot, Recap};
use crate::models::{Assessment, StoredRecord};

/// Notice shown once the write has committed.
pub const SUCCESS_NOTICE: &str = "Assessment saved successfully";

/// Everything the presentation layer shows after a committed submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionOutcome {
    /// What was written
    pub record: StoredRecord,
    /// The finalized assessment
    pub assessment: Assessment,
    /// Evaluated teeth only
    pub recap: Recap,
    /// All 28 slots, ready to download
    pub export: ExportSnapshot,
}

impl SubmissionOutcome {
    pub fn notice(&self) -> &'static str {
        SUCCESS_NOTICE
    }
}
