//! Required-field rules.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A broken form rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Violation {
    MissingPatientName,
    MissingPatientId,
}

impl Violation {
    /// Form field the violation refers to.
    pub fn field(self) -> &'static str {
        match self {
            Violation::MissingPatientName => "patient_name",
            Violation::MissingPatientId => "patient_id",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Violation::MissingPatientName => "Patient name is required",
            Violation::MissingPatientId => "Patient identifier is required",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Check the identity fields. Tooth statuses, date and comments are optional.
pub fn validate_identity(patient_name: &str, patient_id: &str) -> Vec<Violation> {
    let mut violations = Vec::new();
    if patient_name.trim().is_empty() {
        violations.push(Violation::MissingPatientName);
    }
    if patient_id.trim().is_empty() {
        violations.push(Violation::MissingPatientId);
    }
    violations
}

/// Single user-facing notice for a rejected submission.
pub fn describe_violations(violations: &[Violation]) -> String {
    let details: Vec<&str> = violations.iter().map(|v| v.message()).collect();
    format!(
        "Please fill in the patient information: {}",
        details.join("; ")
    )
}
