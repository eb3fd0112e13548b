//! Submission writes and stored assessment lookups.

use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};

use super::patients::insert_patient_row;
use super::{Database, DbError, DbResult};
use crate::config::PersistMode;
use crate::models::{Assessment, DentalChart, NewPatientRecord, StoredRecord};

const DATE_FORMAT: &str = "%Y-%m-%d";

fn insert_assessment_row(
    conn: &Connection,
    patient_record_id: i64,
    assessment: &Assessment,
) -> DbResult<String> {
    let assessment_id = uuid::Uuid::new_v4().to_string();
    let dental_status_json = serde_json::to_string(assessment.dental_status())?;

    conn.execute(
        r#"
        INSERT INTO eruption_assessments (
            assessment_id, patient_record_id, exam_date, dental_status
        ) VALUES (?1, ?2, ?3, ?4)
        "#,
        params![
            assessment_id,
            patient_record_id,
            assessment.exam_date().format(DATE_FORMAT).to_string(),
            dental_status_json,
        ],
    )?;
    Ok(assessment_id)
}

impl Database {
    /// Write a finalized assessment as one atomic unit.
    ///
    /// Always inserts the `patient` row; in [`PersistMode::FullAssessment`]
    /// the exam date and statuses go into `eruption_assessments` within the
    /// same transaction. Any failure rolls the whole write back.
    pub fn persist_assessment(
        &mut self,
        assessment: &Assessment,
        mode: PersistMode,
    ) -> DbResult<StoredRecord> {
        let tx = self.transaction()?;

        let patient_record_id = insert_patient_row(&tx, &NewPatientRecord::from(assessment))?;
        let assessment_id = match mode {
            PersistMode::PatientOnly => None,
            PersistMode::FullAssessment => {
                Some(insert_assessment_row(&tx, patient_record_id, assessment)?)
            }
        };

        tx.commit()?;

        Ok(StoredRecord {
            patient_record_id,
            assessment_id,
        })
    }

    /// Rebuild a stored assessment (full mode only).
    pub fn get_assessment(&self, assessment_id: &str) -> DbResult<Option<Assessment>> {
        self.conn
            .query_row(
                r#"
                SELECT p.name, p.identifier, p.comment, a.exam_date, a.dental_status
                FROM eruption_assessments a
                JOIN patient p ON p.id = a.patient_record_id
                WHERE a.assessment_id = ?
                "#,
                [assessment_id],
                |row| {
                    Ok(AssessmentRow {
                        patient_name: row.get(0)?,
                        patient_id: row.get(1)?,
                        comments: row.get(2)?,
                        exam_date: row.get(3)?,
                        dental_status: row.get(4)?,
                    })
                },
            )
            .optional()?
            .map(|row| row.try_into())
            .transpose()
    }

    /// Assessment ids stored for a patient identifier, oldest first.
    pub fn list_assessment_ids(&self, identifier: &str) -> DbResult<Vec<String>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT a.assessment_id
            FROM eruption_assessments a
            JOIN patient p ON p.id = a.patient_record_id
            WHERE p.identifier = ?
            ORDER BY p.id
            "#,
        )?;

        let rows = stmt.query_map([identifier], |row| row.get::<_, String>(0))?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}

/// Intermediate row struct for database mapping.
struct AssessmentRow {
    patient_name: String,
    patient_id: String,
    comments: String,
    exam_date: String,
    dental_status: String,
}

impl TryFrom<AssessmentRow> for Assessment {
    type Error = DbError;

    fn try_from(row: AssessmentRow) -> Result<Self, Self::Error> {
        let exam_date = NaiveDate::parse_from_str(&row.exam_date, DATE_FORMAT)
            .map_err(|e| DbError::Constraint(format!("Bad exam date {}: {}", row.exam_date, e)))?;
        let dental_status: DentalChart = serde_json::from_str(&row.dental_status)?;

        Ok(Assessment::new(
            row.patient_name,
            row.patient_id,
            exam_date,
            dental_status,
            row.comments,
        ))
    }
}
