//! Patient record models.

use serde::{Deserialize, Serialize};

use super::assessment::Assessment;

/// Values bound into the `patient` insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPatientRecord {
    pub name: String,
    pub identifier: String,
    pub comment: String,
}

impl From<&Assessment> for NewPatientRecord {
    fn from(assessment: &Assessment) -> Self {
        Self {
            name: assessment.patient_name().to_string(),
            identifier: assessment.patient_id().to_string(),
            comment: assessment.comments().to_string(),
        }
    }
}

/// A stored row of the `patient` table.
///
/// Every submission inserts a new row, so one identifier may appear
/// several times.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientRecord {
    /// SQLite row id
    pub id: i64,
    /// Patient name as entered
    pub name: String,
    /// External patient identifier
    pub identifier: String,
    /// Free-text comment
    pub comment: String,
    /// Insertion timestamp (SQLite `datetime('now')`, UTC)
    pub created_at: String,
}

/// What a submission wrote.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredRecord {
    /// Row id of the inserted `patient` row
    pub patient_record_id: i64,
    /// Id of the `eruption_assessments` row, when the full assessment was stored
    pub assessment_id: Option<String>,
}
