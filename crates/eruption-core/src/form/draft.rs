//! Draft assessment form.

use chrono::NaiveDate;

use super::validation::{validate_identity, Violation};
use super::{FormError, FormResult};
use crate::models::{Assessment, DentalChart, ToothId, ToothStatus};

/// An assessment being filled in.
///
/// Each form instance owns its 28 tooth slots. Fields are mutated one at a
/// time as the user interacts; [`AssessmentForm::finalize`] produces the
/// immutable [`Assessment`] once the identity fields are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentForm {
    patient_name: String,
    patient_id: String,
    exam_date: NaiveDate,
    dental_status: DentalChart,
    comments: String,
}

impl AssessmentForm {
    /// Create an empty form for the given exam date.
    pub fn new(exam_date: NaiveDate) -> Self {
        Self {
            patient_name: String::new(),
            patient_id: String::new(),
            exam_date,
            dental_status: DentalChart::new(),
            comments: String::new(),
        }
    }

    /// Create an empty form dated today (local time).
    pub fn dated_today() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }

    pub fn set_patient_name(&mut self, name: impl Into<String>) {
        self.patient_name = name.into();
    }

    pub fn set_patient_id(&mut self, patient_id: impl Into<String>) {
        self.patient_id = patient_id.into();
    }

    pub fn set_exam_date(&mut self, exam_date: NaiveDate) {
        self.exam_date = exam_date;
    }

    pub fn set_comments(&mut self, comments: impl Into<String>) {
        self.comments = comments.into();
    }

    /// Set a tooth's status from its raw two-digit number.
    pub fn set_tooth(&mut self, id: u8, status: ToothStatus) -> FormResult<()> {
        let id = ToothId::new(id)?;
        self.dental_status.set(id, status);
        Ok(())
    }

    /// Set a tooth's status from an already validated id.
    pub fn set_tooth_status(&mut self, id: ToothId, status: ToothStatus) {
        self.dental_status.set(id, status);
    }

    pub fn tooth(&self, id: ToothId) -> ToothStatus {
        self.dental_status.get(id)
    }

    pub fn patient_name(&self) -> &str {
        &self.patient_name
    }

    pub fn patient_id(&self) -> &str {
        &self.patient_id
    }

    pub fn exam_date(&self) -> NaiveDate {
        self.exam_date
    }

    pub fn dental_status(&self) -> &DentalChart {
        &self.dental_status
    }

    pub fn comments(&self) -> &str {
        &self.comments
    }

    /// List rule violations; empty when the form can be submitted.
    pub fn validate(&self) -> Vec<Violation> {
        validate_identity(&self.patient_name, &self.patient_id)
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Freeze the form into an [`Assessment`].
    ///
    /// The draft is left untouched so it can be corrected and resubmitted
    /// after a rejection.
    pub fn finalize(&self) -> FormResult<Assessment> {
        let violations = self.validate();
        if !violations.is_empty() {
            return Err(FormError::Validation(violations));
        }

        Ok(Assessment::new(
            self.patient_name.clone(),
            self.patient_id.clone(),
            self.exam_date,
            self.dental_status.clone(),
            self.comments.clone(),
        ))
    }
}

impl Default for AssessmentForm {
    fn default() -> Self {
        Self::dated_today()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InvalidToothId, TOOTH_COUNT};

    fn exam_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn filled_form() -> AssessmentForm {
        let mut form = AssessmentForm::new(exam_date());
        form.set_patient_name("Jane Doe");
        form.set_patient_id("P-42");
        form
    }

    #[test]
    fn test_new_form_is_draft() {
        let form = AssessmentForm::new(exam_date());
        assert_eq!(form.dental_status().len(), TOOTH_COUNT);
        assert_eq!(
            form.validate(),
            vec![Violation::MissingPatientName, Violation::MissingPatientId]
        );
    }

    #[test]
    fn test_set_tooth_rejects_unknown_id() {
        let mut form = filled_form();
        let err = form.set_tooth(18, ToothStatus::CompleteEruption).unwrap_err();
        assert_eq!(err, FormError::InvalidToothId(InvalidToothId("18".into())));
        assert_eq!(form.dental_status().evaluated_count(), 0);
    }

    #[test]
    fn test_set_tooth_last_write_wins() {
        let mut form = filled_form();
        form.set_tooth(11, ToothStatus::NoEruption).unwrap();
        form.set_tooth(11, ToothStatus::PartialEruption).unwrap();

        let id = ToothId::new(11).unwrap();
        assert_eq!(form.tooth(id), ToothStatus::PartialEruption);
    }

    #[test]
    fn test_partial_assessment_is_valid() {
        let form = filled_form();
        assert!(form.is_valid());
        assert!(form.finalize().is_ok());
    }

    #[test]
    fn test_finalize_rejects_blank_name() {
        let mut form = filled_form();
        form.set_patient_name("  ");
        form.set_tooth(21, ToothStatus::CompleteEruption).unwrap();
        form.set_comments("all other fields filled");

        let err = form.finalize().unwrap_err();
        assert_eq!(err, FormError::Validation(vec![Violation::MissingPatientName]));
    }

    #[test]
    fn test_finalize_keeps_draft_for_correction() {
        let mut form = AssessmentForm::new(exam_date());
        form.set_patient_name("Jane Doe");
        assert!(form.finalize().is_err());

        form.set_patient_id("P-42");
        let assessment = form.finalize().unwrap();
        assert_eq!(assessment.patient_name(), "Jane Doe");
        assert_eq!(assessment.patient_id(), "P-42");
        assert_eq!(assessment.exam_date(), exam_date());
    }
}
