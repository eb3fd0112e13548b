//! The 28-slot dental chart.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::tooth::{ToothId, ToothStatus, TOOTH_COUNT};

/// Chart document with a slot missing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    #[error("Dental chart is missing tooth {0}")]
    MissingTooth(ToothId),
}

/// Eruption status for every charted tooth.
///
/// Always holds exactly the 28 canonical slots; slots never set by the user
/// stay `Unset`. Serializes as a JSON object keyed by tooth id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<ToothId, ToothStatus>",
    into = "BTreeMap<ToothId, ToothStatus>"
)]
pub struct DentalChart {
    slots: BTreeMap<ToothId, ToothStatus>,
}

impl DentalChart {
    /// Chart with every slot `Unset`.
    pub fn new() -> Self {
        Self {
            slots: ToothId::all().map(|id| (id, ToothStatus::Unset)).collect(),
        }
    }

    pub fn get(&self, id: ToothId) -> ToothStatus {
        self.slots.get(&id).copied().unwrap_or_default()
    }

    /// Overwrite a slot. Last write wins.
    pub fn set(&mut self, id: ToothId, status: ToothStatus) {
        self.slots.insert(id, status);
    }

    /// All slots in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (ToothId, ToothStatus)> + '_ {
        self.slots.iter().map(|(id, status)| (*id, *status))
    }

    /// Slots that have been evaluated (status other than `Unset`).
    pub fn evaluated(&self) -> impl Iterator<Item = (ToothId, ToothStatus)> + '_ {
        self.iter().filter(|(_, status)| status.is_set())
    }

    pub fn evaluated_count(&self) -> usize {
        self.evaluated().count()
    }

    /// Number of slots (always 28).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for DentalChart {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<BTreeMap<ToothId, ToothStatus>> for DentalChart {
    type Error = ChartError;

    fn try_from(slots: BTreeMap<ToothId, ToothStatus>) -> Result<Self, Self::Error> {
        if let Some(missing) = ToothId::all().find(|id| !slots.contains_key(id)) {
            return Err(ChartError::MissingTooth(missing));
        }
        debug_assert_eq!(slots.len(), TOOTH_COUNT);
        Ok(Self { slots })
    }
}

impl From<DentalChart> for BTreeMap<ToothId, ToothStatus> {
    fn from(chart: DentalChart) -> Self {
        chart.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tooth(n: u8) -> ToothId {
        ToothId::new(n).unwrap()
    }

    #[test]
    fn test_new_chart_has_all_slots_unset() {
        let chart = DentalChart::new();
        assert_eq!(chart.len(), TOOTH_COUNT);
        assert!(chart.iter().all(|(_, status)| status == ToothStatus::Unset));
        assert_eq!(chart.evaluated_count(), 0);
    }

    #[test]
    fn test_set_overwrites_slot() {
        let mut chart = DentalChart::new();
        chart.set(tooth(11), ToothStatus::PartialEruption);
        chart.set(tooth(11), ToothStatus::CompleteEruption);

        assert_eq!(chart.get(tooth(11)), ToothStatus::CompleteEruption);
        assert_eq!(chart.len(), TOOTH_COUNT);
        assert_eq!(chart.evaluated_count(), 1);
    }

    #[test]
    fn test_evaluated_skips_unset() {
        let mut chart = DentalChart::new();
        chart.set(tooth(47), ToothStatus::NoEruption);
        chart.set(tooth(21), ToothStatus::PartialEruption);
        chart.set(tooth(21), ToothStatus::Unset);

        let evaluated: Vec<_> = chart.evaluated().collect();
        assert_eq!(evaluated, vec![(tooth(47), ToothStatus::NoEruption)]);
    }

    #[test]
    fn test_json_object_keyed_by_tooth() {
        let mut chart = DentalChart::new();
        chart.set(tooth(16), ToothStatus::CompleteEruption);

        let value = serde_json::to_value(&chart).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), TOOTH_COUNT);
        assert_eq!(object["16"], "Éruption complète");
        assert_eq!(object["17"], "Sélectionner un état");
    }

    #[test]
    fn test_deserialize_rejects_missing_slot() {
        let mut value = serde_json::to_value(DentalChart::new()).unwrap();
        value.as_object_mut().unwrap().remove("33");

        let err = serde_json::from_value::<DentalChart>(value).unwrap_err();
        assert!(err.to_string().contains("missing tooth 33"));
    }

    #[test]
    fn test_deserialize_rejects_unknown_slot() {
        let mut value = serde_json::to_value(DentalChart::new()).unwrap();
        value
            .as_object_mut()
            .unwrap()
            .insert("18".into(), serde_json::json!("Éruption complète"));

        assert!(serde_json::from_value::<DentalChart>(value).is_err());
    }

    #[test]
    fn test_deserialize_rejects_alias_key() {
        let mut value = serde_json::to_value(DentalChart::new()).unwrap();
        value
            .as_object_mut()
            .unwrap()
            .insert("011".into(), serde_json::json!("Éruption complète"));
        assert_eq!(value.as_object().unwrap().len(), TOOTH_COUNT + 1);

        let err = serde_json::from_value::<DentalChart>(value).unwrap_err();
        assert!(err.to_string().contains("Invalid tooth id: 011"));
    }
}
