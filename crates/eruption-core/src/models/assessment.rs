//! Finalized eruption assessment.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::chart::DentalChart;
use super::tooth::{ToothId, ToothStatus};

/// The complete record of one patient's eruption exam.
///
/// Produced by [`crate::form::AssessmentForm::finalize`] once validation
/// passes and immutable afterwards. The serialized form is the export
/// document: `patient_name`, `patient_id`, `exam_date` (`YYYY-MM-DD`),
/// `dental_status` and `comments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    patient_name: String,
    patient_id: String,
    exam_date: NaiveDate,
    dental_status: DentalChart,
    comments: String,
}

impl Assessment {
    pub(crate) fn new(
        patient_name: String,
        patient_id: String,
        exam_date: NaiveDate,
        dental_status: DentalChart,
        comments: String,
    ) -> Self {
        Self {
            patient_name,
            patient_id,
            exam_date,
            dental_status,
            comments,
        }
    }

    pub fn patient_name(&self) -> &str {
        &self.patient_name
    }

    /// External patient identifier (also used in export filenames).
    pub fn patient_id(&self) -> &str {
        &self.patient_id
    }

    pub fn exam_date(&self) -> NaiveDate {
        self.exam_date
    }

    pub fn dental_status(&self) -> &DentalChart {
        &self.dental_status
    }

    pub fn tooth(&self, id: ToothId) -> ToothStatus {
        self.dental_status.get(id)
    }

    /// Free-text comment; empty when none was entered.
    pub fn comments(&self) -> &str {
        &self.comments
    }

    /// Parse an exported document back into an assessment.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
