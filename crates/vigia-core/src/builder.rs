//! Request builder
//!
//! Turns a selected warehouse plus form selections into exactly one
//! `RiskQueryRequest`, mapping labels to backend codes through the static
//! tables. Validation failures block before anything touches the wire.

use crate::catalog;
use crate::error::{CoreError, Result};
use crate::types::request::RiskQueryRequest;
use crate::types::warehouse::Warehouse;

/// Form selections for one risk assessment submission
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentSelection {
    /// Index into the fixed scenario list (single choice)
    pub scenario_index: usize,

    /// Toggle per entry of the fixed measure list, in catalog order
    pub measures: Vec<bool>,

    /// Free-text comments
    pub comments: String,
}

impl AssessmentSelection {
    /// Create a selection with the given scenario and all measures enabled
    /// (the form's initial state)
    pub fn new(scenario_index: usize) -> Self {
        Self {
            scenario_index,
            measures: vec![true; catalog::SECURITY_MEASURES.len()],
            comments: String::new(),
        }
    }

    /// Replace the measure toggles
    pub fn with_measures(mut self, measures: Vec<bool>) -> Self {
        self.measures = measures;
        self
    }

    /// Set comments
    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = comments.into();
        self
    }

    /// Toggle a single measure by catalog index
    pub fn toggle_measure(&mut self, index: usize) {
        if let Some(flag) = self.measures.get_mut(index) {
            *flag = !*flag;
        }
    }

    /// Enable every measure
    pub fn select_all_measures(&mut self) {
        self.measures.iter_mut().for_each(|flag| *flag = true);
    }

    /// Disable every measure
    pub fn clear_all_measures(&mut self) {
        self.measures.iter_mut().for_each(|flag| *flag = false);
    }

    /// Number of enabled measures
    pub fn active_measure_count(&self) -> usize {
        self.measures.iter().filter(|flag| **flag).count()
    }
}

/// Build the wire payload for one submission.
///
/// Fails with a validation error when no warehouse is selected, the scenario
/// index is out of range, or the toggle vector does not cover the measure
/// catalog. The payload carries only the five canonical keys.
pub fn build_risk_query(
    warehouse: Option<&Warehouse>,
    selection: &AssessmentSelection,
) -> Result<RiskQueryRequest> {
    let warehouse = warehouse.ok_or(CoreError::MissingWarehouse)?;

    let (scenario_label, _) = catalog::SCENARIOS
        .get(selection.scenario_index)
        .ok_or(CoreError::ScenarioOutOfRange(selection.scenario_index))?;
    let scenario = catalog::scenario_code(scenario_label)?;

    if selection.measures.len() != catalog::SECURITY_MEASURES.len() {
        return Err(CoreError::MeasureSelectionMismatch {
            got: selection.measures.len(),
            expected: catalog::SECURITY_MEASURES.len(),
        });
    }

    let mut security_measures = Vec::new();
    for ((label, _), enabled) in catalog::SECURITY_MEASURES.iter().zip(&selection.measures) {
        if *enabled {
            security_measures.push(catalog::measure_code(label)?.to_string());
        }
    }

    Ok(RiskQueryRequest {
        address: warehouse.wire_address(),
        ambito: warehouse.ambito,
        scenarios: vec![scenario.to_string()],
        security_measures,
        comments: selection.comments.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::warehouse::{Ambito, WarehouseKind};

    fn sample_warehouse() -> Warehouse {
        Warehouse::new("MXCD02", "CEDIS Tepotzotlán", "Carretera Méx-Qro km 42")
            .with_region("México")
            .with_ambito(Ambito::Urbano)
            .with_kind(WarehouseKind::Fulfillment)
    }

    #[test]
    fn test_missing_warehouse_blocks_submission() {
        let selection = AssessmentSelection::new(0);
        let result = build_risk_query(None, &selection);
        assert!(matches!(result, Err(CoreError::MissingWarehouse)));
    }

    #[test]
    fn test_scenario_index_out_of_range() {
        let warehouse = sample_warehouse();
        let selection = AssessmentSelection::new(catalog::SCENARIOS.len());
        let result = build_risk_query(Some(&warehouse), &selection);
        assert!(matches!(result, Err(CoreError::ScenarioOutOfRange(_))));
    }

    #[test]
    fn test_measure_vector_must_cover_catalog() {
        let warehouse = sample_warehouse();
        let selection = AssessmentSelection::new(0).with_measures(vec![true; 3]);
        let result = build_risk_query(Some(&warehouse), &selection);
        assert!(matches!(
            result,
            Err(CoreError::MeasureSelectionMismatch { got: 3, .. })
        ));
    }

    #[test]
    fn test_builds_codes_not_labels() {
        let warehouse = sample_warehouse();
        let mut selection = AssessmentSelection::new(0);
        selection.clear_all_measures();
        selection.measures[0] = true; // Cámaras de seguridad
        selection.measures[1] = true; // Guardias de seguridad

        let request = build_risk_query(Some(&warehouse), &selection).unwrap();
        assert_eq!(request.scenarios, vec!["intrusion_armada"]);
        assert_eq!(request.security_measures, vec!["camaras", "guardias"]);
    }

    #[test]
    fn test_address_carries_fulfillment_code() {
        let warehouse = sample_warehouse();
        let selection = AssessmentSelection::new(2);
        let request = build_risk_query(Some(&warehouse), &selection).unwrap();
        assert_eq!(request.address, "MXCD02 - Carretera Méx-Qro km 42");
        assert_eq!(request.scenarios, vec!["vandalismo"]);
    }

    #[test]
    fn test_payload_never_grows_extra_keys() {
        let warehouse = sample_warehouse();
        // Every scenario, a few measure combinations: the emitted JSON must
        // stay at the five canonical keys.
        for index in 0..catalog::SCENARIOS.len() {
            let mut selection = AssessmentSelection::new(index);
            if index % 2 == 0 {
                selection.clear_all_measures();
            }
            let request = build_risk_query(Some(&warehouse), &selection).unwrap();
            let json = serde_json::to_value(&request).unwrap();
            let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
            assert_eq!(keys.len(), 5);
        }
    }

    #[test]
    fn test_all_measures_selected_by_default() {
        let warehouse = sample_warehouse();
        let selection = AssessmentSelection::new(0);
        let request = build_risk_query(Some(&warehouse), &selection).unwrap();
        assert_eq!(
            request.security_measures.len(),
            catalog::SECURITY_MEASURES.len()
        );
    }

    #[test]
    fn test_selection_helpers() {
        let mut selection = AssessmentSelection::new(0);
        assert_eq!(
            selection.active_measure_count(),
            catalog::SECURITY_MEASURES.len()
        );
        selection.clear_all_measures();
        assert_eq!(selection.active_measure_count(), 0);
        selection.toggle_measure(4);
        assert_eq!(selection.active_measure_count(), 1);
        selection.select_all_measures();
        assert_eq!(
            selection.active_measure_count(),
            catalog::SECURITY_MEASURES.len()
        );
    }
}
