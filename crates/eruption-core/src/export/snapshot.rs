//! Downloadable JSON snapshot of a submitted assessment.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{ExportError, ExportResult};
use crate::models::Assessment;

/// MIME type of the export file.
pub const EXPORT_MIME_TYPE: &str = "application/json";

/// Deterministic export file name: `evaluation_dentaire_{id}_{YYYYMMDD}.json`.
pub fn export_file_name(patient_id: &str, exam_date: NaiveDate) -> String {
    format!(
        "evaluation_dentaire_{}_{}.json",
        patient_id,
        exam_date.format("%Y%m%d")
    )
}

/// Serialize an assessment as the export document (4-space indent, UTF-8
/// kept verbatim).
pub fn export_json(assessment: &Assessment) -> ExportResult<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    assessment.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| ExportError::Encoding(e.to_string()))
}

/// A ready-to-download export file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportSnapshot {
    pub file_name: String,
    pub mime_type: String,
    pub contents: String,
}

impl ExportSnapshot {
    /// Build the snapshot for all 28 slots, evaluated or not.
    pub fn from_assessment(assessment: &Assessment) -> ExportResult<Self> {
        Ok(Self {
            file_name: export_file_name(assessment.patient_id(), assessment.exam_date()),
            mime_type: EXPORT_MIME_TYPE.to_string(),
            contents: export_json(assessment)?,
        })
    }

    /// Parse the snapshot back into the assessment that produced it.
    pub fn to_assessment(&self) -> ExportResult<Assessment> {
        Ok(Assessment::from_json(&self.contents)?)
    }

    /// Write the file into `dir` (created if missing) and return its path.
    ///
    /// Identifiers are used verbatim in the file name, so names that would
    /// escape `dir` are refused.
    pub fn write_to_dir(&self, dir: &Path) -> ExportResult<PathBuf> {
        let name = Path::new(&self.file_name);
        let is_plain = name.file_name().map(|n| n == name.as_os_str()).unwrap_or(false);
        if !is_plain {
            return Err(ExportError::UnsafeFileName(self.file_name.clone()));
        }

        std::fs::create_dir_all(dir)?;
        let path = dir.join(name);
        std::fs::write(&path, &self.contents)?;
        Ok(path)
    }
}
