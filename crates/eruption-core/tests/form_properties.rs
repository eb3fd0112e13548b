//! Property tests for the form model.

use chrono::NaiveDate;
use eruption_core::form::{AssessmentForm, FormError, Violation};
use eruption_core::models::{ToothId, ToothStatus, TOOTH_COUNT};
use proptest::prelude::*;

fn is_canonical(id: u8) -> bool {
    matches!(id, 11..=17 | 21..=27 | 31..=37 | 41..=47)
}

fn any_status() -> impl Strategy<Value = ToothStatus> {
    prop::sample::select(ToothStatus::ALL.to_vec())
}

fn blank() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec![' ', '\t', '\n', '\r']), 0..6)
        .prop_map(|chars| chars.into_iter().collect())
}

fn form() -> AssessmentForm {
    AssessmentForm::new(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
}

#[test]
fn test_every_canonical_id_accepted() {
    let mut form = form();
    for id in ToothId::all() {
        form.set_tooth(id.value(), ToothStatus::PartialEruption)
            .unwrap();
    }
    assert_eq!(form.dental_status().evaluated_count(), TOOTH_COUNT);
}

proptest! {
    #[test]
    fn set_tooth_accepts_exactly_canonical_ids(id in any::<u8>(), status in any_status()) {
        let mut form = form();
        let result = form.set_tooth(id, status);

        if is_canonical(id) {
            prop_assert!(result.is_ok());
            prop_assert_eq!(form.tooth(ToothId::new(id).unwrap()), status);
        } else {
            prop_assert!(matches!(result, Err(FormError::InvalidToothId(_))));
        }
        prop_assert_eq!(form.dental_status().len(), TOOTH_COUNT);
    }

    #[test]
    fn blank_name_always_rejected(
        name in blank(),
        patient_id in "[A-Z]-[0-9]{1,4}",
        comments in ".*",
        teeth in prop::collection::vec((prop::sample::select(ToothId::all().collect::<Vec<_>>()), any_status()), 0..28),
    ) {
        let mut form = form();
        form.set_patient_name(name);
        form.set_patient_id(patient_id);
        form.set_comments(comments);
        for (id, status) in teeth {
            form.set_tooth_status(id, status);
        }

        prop_assert_eq!(form.validate(), vec![Violation::MissingPatientName]);
        prop_assert!(form.finalize().is_err());
    }

    #[test]
    fn blank_identifier_always_rejected(name in "[A-Za-z ]{0,12}[A-Za-z]", patient_id in blank()) {
        let mut form = form();
        form.set_patient_name(name);
        form.set_patient_id(patient_id);

        prop_assert_eq!(form.validate(), vec![Violation::MissingPatientId]);
    }

    #[test]
    fn chart_json_round_trip(teeth in prop::collection::vec((prop::sample::select(ToothId::all().collect::<Vec<_>>()), any_status()), 0..40)) {
        let mut form = form();
        form.set_patient_name("Jane Doe");
        form.set_patient_id("P-42");
        for (id, status) in teeth {
            form.set_tooth_status(id, status);
        }
        let assessment = form.finalize().unwrap();

        let json = serde_json::to_string(&assessment).unwrap();
        let parsed = eruption_core::Assessment::from_json(&json).unwrap();
        prop_assert_eq!(parsed, assessment);
    }
}
