//! Printed recap of a submitted assessment.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Assessment, ToothId, ToothStatus};

/// One evaluated tooth in the recap table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecapRow {
    pub tooth: ToothId,
    pub status: ToothStatus,
}

/// Summary shown after a successful submission.
///
/// Only evaluated teeth are listed; `Unset` slots are dropped here but
/// remain in storage and in the export.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recap {
    pub patient_name: String,
    pub patient_id: String,
    pub exam_date: NaiveDate,
    pub rows: Vec<RecapRow>,
    /// `None` when no comment was entered
    pub comments: Option<String>,
}

impl Recap {
    pub fn from_assessment(assessment: &Assessment) -> Self {
        let rows = assessment
            .dental_status()
            .evaluated()
            .map(|(tooth, status)| RecapRow { tooth, status })
            .collect();

        let comments = Some(assessment.comments())
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        Self {
            patient_name: assessment.patient_name().to_string(),
            patient_id: assessment.patient_id().to_string(),
            exam_date: assessment.exam_date(),
            rows,
            comments,
        }
    }

    /// "Patient: {name} (ID: {id})"
    pub fn patient_line(&self) -> String {
        format!("Patient: {} (ID: {})", self.patient_name, self.patient_id)
    }

    /// Exam date as DD/MM/YYYY.
    pub fn exam_date_display(&self) -> String {
        self.exam_date.format("%d/%m/%Y").to_string()
    }

    pub fn has_rows(&self) -> bool {
        !self.rows.is_empty()
    }
}
