//! Eruption Core Library
//!
//! Structured clinical form for recording a dental eruption assessment,
//! persisting it to SQLite and exporting it as JSON.
//!
//! # Architecture
//!
//! ```text
//!   Presentation (native UI via FFI, or the `eruption` CLI)
//!                         │ set fields / set_tooth
//!                         ▼
//!            ┌─────────────────────────┐
//!            │  AssessmentForm (draft) │  28 fixed tooth slots
//!            └────────────┬────────────┘
//!                         │ submit
//!                         ▼
//!            ┌─────────────────────────┐   violations → error notice,
//!            │    SubmissionHandler    │   nothing written
//!            └────────────┬────────────┘
//!                         │ one transaction, bound parameters
//!                         ▼
//!              patient (+ eruption_assessments)
//!                         │ committed
//!             ┌───────────┴───────────┐
//!             ▼                       ▼
//!      Recap (evaluated        ExportSnapshot (all 28
//!      teeth only)             slots, JSON download)
//! ```
//!
//! # Modules
//!
//! - [`models`]: Tooth ids, statuses, dental chart, assessment, patient rows
//! - [`form`]: Draft form and validation rules
//! - [`db`]: SQLite persistence
//! - [`submission`]: Validate → persist → present
//! - [`export`]: Recap table and JSON snapshot
//! - [`config`]: Startup configuration

pub mod config;
pub mod db;
pub mod export;
pub mod form;
pub mod models;
pub mod submission;

// Re-export commonly used types
pub use config::{CoreConfig, PersistMode};
pub use db::Database;
pub use export::{ExportSnapshot, Recap, RecapRow};
pub use form::{AssessmentForm, FormError, Violation};
pub use models::{
    Assessment, DentalChart, PatientRecord, Quadrant, StoredRecord, ToothId, ToothStatus,
};
pub use submission::{SubmissionError, SubmissionHandler, SubmissionOutcome};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum EruptionError {
    #[error("{0}")]
    ValidationError(String),

    #[error("{0}")]
    PersistenceError(String),

    #[error("{0}")]
    InvalidToothId(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<db::DbError> for EruptionError {
    fn from(e: db::DbError) -> Self {
        EruptionError::PersistenceError(e.to_string())
    }
}

impl From<serde_json::Error> for EruptionError {
    fn from(e: serde_json::Error) -> Self {
        EruptionError::SerializationError(e.to_string())
    }
}

impl From<export::ExportError> for EruptionError {
    fn from(e: export::ExportError) -> Self {
        EruptionError::SerializationError(e.to_string())
    }
}

impl From<FormError> for EruptionError {
    fn from(e: FormError) -> Self {
        match e {
            FormError::InvalidToothId(inner) => EruptionError::InvalidToothId(inner.to_string()),
            FormError::Validation(_) => EruptionError::ValidationError(e.to_string()),
        }
    }
}

impl From<SubmissionError> for EruptionError {
    fn from(e: SubmissionError) -> Self {
        match e {
            SubmissionError::Validation(_) => EruptionError::ValidationError(e.to_string()),
            SubmissionError::Persistence(_) => EruptionError::PersistenceError(e.to_string()),
            SubmissionError::Export(_) => EruptionError::SerializationError(e.to_string()),
            SubmissionError::Form(inner) => inner.into(),
        }
    }
}

impl<T> From<std::sync::PoisonError<T>> for EruptionError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        EruptionError::PersistenceError(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Open or create a database at the given path.
#[uniffi::export]
pub fn open_database(
    path: String,
    persist_mode: PersistMode,
) -> Result<Arc<EruptionCore>, EruptionError> {
    let db = Database::open(&path)?;
    Ok(Arc::new(EruptionCore {
        db: Arc::new(Mutex::new(db)),
        persist_mode,
    }))
}

/// Create an in-memory database (for testing).
#[uniffi::export]
pub fn open_database_in_memory(
    persist_mode: PersistMode,
) -> Result<Arc<EruptionCore>, EruptionError> {
    let db = Database::open_in_memory()?;
    Ok(Arc::new(EruptionCore {
        db: Arc::new(Mutex::new(db)),
        persist_mode,
    }))
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe database wrapper for FFI.
#[derive(uniffi::Object)]
pub struct EruptionCore {
    db: Arc<Mutex<Database>>,
    persist_mode: PersistMode,
}

#[uniffi::export]
impl EruptionCore {
    /// The four selector groups, in display order.
    pub fn quadrant_layout(&self) -> Vec<FfiQuadrant> {
        Quadrant::ALL.into_iter().map(FfiQuadrant::from).collect()
    }

    /// Options offered by every tooth selector.
    pub fn status_options(&self) -> Vec<FfiStatusOption> {
        ToothStatus::ALL
            .into_iter()
            .map(|status| FfiStatusOption {
                status,
                label: status.label().to_string(),
            })
            .collect()
    }

    /// Start a fresh form dated today.
    pub fn new_form(&self) -> Arc<FormSession> {
        Arc::new(FormSession {
            db: Arc::clone(&self.db),
            persist_mode: self.persist_mode,
            form: Mutex::new(AssessmentForm::dated_today()),
        })
    }

    /// Stored patient rows, optionally for one identifier.
    pub fn list_patient_records(
        &self,
        identifier: Option<String>,
    ) -> Result<Vec<FfiPatientRecord>, EruptionError> {
        let db = self.db.lock()?;
        let records = db.list_patient_records(identifier.as_deref())?;
        Ok(records.into_iter().map(|r| r.into()).collect())
    }
}

/// One in-progress form, owned by a single screen.
#[derive(uniffi::Object)]
pub struct FormSession {
    db: Arc<Mutex<Database>>,
    persist_mode: PersistMode,
    form: Mutex<AssessmentForm>,
}

#[uniffi::export]
impl FormSession {
    pub fn set_patient_name(&self, name: String) -> Result<(), EruptionError> {
        self.form.lock()?.set_patient_name(name);
        Ok(())
    }

    pub fn set_patient_id(&self, patient_id: String) -> Result<(), EruptionError> {
        self.form.lock()?.set_patient_id(patient_id);
        Ok(())
    }

    /// Set the exam date from `YYYY-MM-DD`.
    pub fn set_exam_date(&self, exam_date: String) -> Result<(), EruptionError> {
        let date = NaiveDate::parse_from_str(&exam_date, "%Y-%m-%d")
            .map_err(|e| EruptionError::InvalidInput(format!("exam date {}: {}", exam_date, e)))?;
        self.form.lock()?.set_exam_date(date);
        Ok(())
    }

    pub fn set_tooth(&self, tooth_id: u8, status: ToothStatus) -> Result<(), EruptionError> {
        self.form.lock()?.set_tooth(tooth_id, status)?;
        Ok(())
    }

    pub fn set_comments(&self, comments: String) -> Result<(), EruptionError> {
        self.form.lock()?.set_comments(comments);
        Ok(())
    }

    /// Violation messages; empty when the form can be submitted.
    pub fn validate(&self) -> Result<Vec<String>, EruptionError> {
        let form = self.form.lock()?;
        Ok(form.validate().into_iter().map(|v| v.to_string()).collect())
    }

    /// Validate, persist and build the recap and export.
    ///
    /// On error the draft is kept so the user can correct and resubmit.
    pub fn submit(&self) -> Result<FfiSubmissionOutcome, EruptionError> {
        let form = self.form.lock()?;
        let mut db = self.db.lock()?;
        let outcome = SubmissionHandler::new(&mut db)
            .with_persist_mode(self.persist_mode)
            .submit(&form)?;
        Ok(outcome.into())
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe quadrant group.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiQuadrant {
    pub number: u8,
    pub label: String,
    pub tooth_ids: Vec<u8>,
}

impl From<Quadrant> for FfiQuadrant {
    fn from(quadrant: Quadrant) -> Self {
        Self {
            number: quadrant.number(),
            label: quadrant.label().to_string(),
            tooth_ids: quadrant.teeth().map(ToothId::value).collect(),
        }
    }
}

/// FFI-safe selector option.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiStatusOption {
    pub status: ToothStatus,
    pub label: String,
}

/// FFI-safe patient row.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPatientRecord {
    pub id: i64,
    pub name: String,
    pub identifier: String,
    pub comment: String,
    pub created_at: String,
}

impl From<PatientRecord> for FfiPatientRecord {
    fn from(record: PatientRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            identifier: record.identifier,
            comment: record.comment,
            created_at: record.created_at,
        }
    }
}

/// FFI-safe recap row.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRecapRow {
    pub tooth_id: u8,
    pub status: ToothStatus,
    pub label: String,
}

impl From<RecapRow> for FfiRecapRow {
    fn from(row: RecapRow) -> Self {
        Self {
            tooth_id: row.tooth.value(),
            status: row.status,
            label: row.status.label().to_string(),
        }
    }
}

/// FFI-safe submission outcome.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSubmissionOutcome {
    pub patient_record_id: i64,
    pub assessment_id: Option<String>,
    pub notice: String,
    pub patient_line: String,
    pub exam_date: String,
    pub recap: Vec<FfiRecapRow>,
    pub comments: Option<String>,
    pub export_file_name: String,
    pub export_mime_type: String,
    pub export_contents: String,
}

impl From<SubmissionOutcome> for FfiSubmissionOutcome {
    fn from(outcome: SubmissionOutcome) -> Self {
        Self {
            patient_record_id: outcome.record.patient_record_id,
            assessment_id: outcome.record.assessment_id.clone(),
            notice: outcome.notice().to_string(),
            patient_line: outcome.recap.patient_line(),
            exam_date: outcome.recap.exam_date_display(),
            recap: outcome.recap.rows.into_iter().map(|r| r.into()).collect(),
            comments: outcome.recap.comments,
            export_file_name: outcome.export.file_name,
            export_mime_type: outcome.export.mime_type,
            export_contents: outcome.export.contents,
        }
    }
}
