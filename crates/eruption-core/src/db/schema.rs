//! SQLite schema definition.

/// Complete database schema for eruption assessments.
pub const SCHEMA: &str = r#"
-- Enable foreign keys
PRAGMA foreign_keys = ON;

-- ============================================================================
-- Patient records (one row per submission, no dedup on identifier)
-- ============================================================================

CREATE TABLE IF NOT EXISTS patient (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    identifier TEXT NOT NULL,
    comment TEXT NOT NULL DEFAULT '',
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- Lookup only; deliberately not UNIQUE
CREATE INDEX IF NOT EXISTS idx_patient_identifier ON patient(identifier);

-- ============================================================================
-- Eruption assessments (written alongside the patient row in full mode)
-- ============================================================================

CREATE TABLE IF NOT EXISTS eruption_assessments (
    assessment_id TEXT PRIMARY KEY,
    patient_record_id INTEGER NOT NULL REFERENCES patient(id),
    exam_date TEXT NOT NULL,                     -- YYYY-MM-DD
    dental_status TEXT NOT NULL,                 -- JSON object, all 28 teeth
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_assessments_patient ON eruption_assessments(patient_record_id);
"#;
