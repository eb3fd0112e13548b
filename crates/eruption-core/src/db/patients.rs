//! Patient record database operations.

use rusqlite::{named_params, Connection, Row};

use super::{Database, DbResult};
use crate::models::{NewPatientRecord, PatientRecord};

/// Parameterized insert into the `patient` table.
pub const INSERT_PATIENT_SQL: &str =
    "INSERT INTO patient (name, identifier, comment) VALUES (:name, :identifier, :comment)";

/// Insert one patient row on `conn` (a plain connection or an open
/// transaction) and return its row id. Values are always bound, never
/// interpolated into the SQL text.
pub(super) fn insert_patient_row(conn: &Connection, record: &NewPatientRecord) -> DbResult<i64> {
    conn.execute(
        INSERT_PATIENT_SQL,
        named_params! {
            ":name": record.name,
            ":identifier": record.identifier,
            ":comment": record.comment,
        },
    )?;
    Ok(conn.last_insert_rowid())
}

fn patient_from_row(row: &Row<'_>) -> rusqlite::Result<PatientRecord> {
    Ok(PatientRecord {
        id: row.get(0)?,
        name: row.get(1)?,
        identifier: row.get(2)?,
        comment: row.get(3)?,
        created_at: row.get(4)?,
    })
}

impl Database {
    /// Insert a patient row outside of a submission.
    pub fn insert_patient(&self, record: &NewPatientRecord) -> DbResult<i64> {
        insert_patient_row(&self.conn, record)
    }

    /// List patient rows, oldest first, optionally for one identifier.
    pub fn list_patient_records(&self, identifier: Option<&str>) -> DbResult<Vec<PatientRecord>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, name, identifier, comment, created_at
            FROM patient
            WHERE ?1 IS NULL OR identifier = ?1
            ORDER BY id
            "#,
        )?;

        let rows = stmt.query_map([identifier], patient_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Number of rows stored for an identifier.
    pub fn count_patient_records(&self, identifier: &str) -> DbResult<usize> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM patient WHERE identifier = ?",
            [identifier],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }
}
