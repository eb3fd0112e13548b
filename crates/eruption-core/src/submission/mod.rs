//! Submission handler: validate, persist, then present.
//!
//! ```text
//! AssessmentForm ──finalize()──► Assessment ──persist──► patient row (+ assessment row)
//!       │ violations                                   │ committed
//!       ▼                                              ▼
//!  ValidationError                           Recap + ExportSnapshot
//!  (no side effects)
//! ```

mod outcome;

pub use outcome::*;

use thiserror::Error;

use crate::config::PersistMode;
use crate::db::{Database, DbError};
use crate::export::{ExportError, ExportSnapshot, Recap};
use crate::form::{describe_violations, AssessmentForm, FormError, Violation};

/// Submission errors. Each carries a specific, user-visible message.
#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("{}", describe_violations(.0))]
    Validation(Vec<Violation>),

    #[error("Could not save the assessment: {0}")]
    Persistence(#[from] DbError),

    #[error("Assessment saved, but the export could not be built: {0}")]
    Export(#[from] ExportError),

    #[error(transparent)]
    Form(FormError),
}

impl From<FormError> for SubmissionError {
    fn from(e: FormError) -> Self {
        match e {
            FormError::Validation(violations) => SubmissionError::Validation(violations),
            other => SubmissionError::Form(other),
        }
    }
}

pub type SubmissionResult<T> = Result<T, SubmissionError>;

/// Runs one submission against a database.
pub struct SubmissionHandler<'a> {
    db: &'a mut Database,
    persist_mode: PersistMode,
}

impl<'a> SubmissionHandler<'a> {
    /// Create a handler using the reference (patient-only) write.
    pub fn new(db: &'a mut Database) -> Self {
        Self {
            db,
            persist_mode: PersistMode::default(),
        }
    }

    /// Choose what the write includes.
    pub fn with_persist_mode(mut self, persist_mode: PersistMode) -> Self {
        self.persist_mode = persist_mode;
        self
    }

    /// Submit a form.
    ///
    /// A rejected form leaves the database untouched and the draft intact.
    /// A failed write surfaces as [`SubmissionError::Persistence`]; the recap
    /// and export are only built once the write has committed. Identical
    /// resubmissions create independent records.
    pub fn submit(&mut self, form: &AssessmentForm) -> SubmissionResult<SubmissionOutcome> {
        let assessment = match form.finalize() {
            Ok(assessment) => assessment,
            Err(e) => {
                tracing::warn!(error = %e, "assessment rejected by validation");
                return Err(e.into());
            }
        };

        let record = self
            .db
            .persist_assessment(&assessment, self.persist_mode)
            .map_err(|e| {
                tracing::warn!(error = %e, "assessment write failed");
                SubmissionError::Persistence(e)
            })?;

        tracing::info!(
            patient_record_id = record.patient_record_id,
            persist_mode = %self.persist_mode,
            evaluated_teeth = assessment.dental_status().evaluated_count(),
            "assessment committed"
        );

        let recap = Recap::from_assessment(&assessment);
        let export = ExportSnapshot::from_assessment(&assessment)?;

        Ok(SubmissionOutcome {
            record,
            assessment,
            recap,
            export,
        })
    }
}
