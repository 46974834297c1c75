//! Integration tests for session reset.
//!
//! ## Test Coverage
//!
//! 1. Reset zeroes the budget, restores growth rates, clears the ledger and
//!    returns the projection year to its default
//! 2. Reset leaves the loaded region inputs (floor, baselines, matrix)
//!    untouched — only an explicit load replaces those
//! 3. The session is fully usable again after a reset

use health_policy_simulator_core_rs::analysis::EligibilityMatrix;
use health_policy_simulator_core_rs::{DecisionEngine, EngineConfig, Metric, RegionInputs};

fn spent_engine() -> DecisionEngine {
    let mut inputs = RegionInputs::default();
    inputs.budget_floor = 5000;
    let mut matrix = EligibilityMatrix::empty();
    matrix.set_active(Metric::Beds, 1);
    inputs.eligibility = matrix;

    let mut engine = DecisionEngine::with_inputs(EngineConfig::default(), inputs);
    engine.set_budget_ceiling(30_000).unwrap();
    engine.select_projection_year(2032);
    engine.apply_policy(Metric::Beds, 1, &[]).unwrap();
    engine
}

#[test]
fn test_reset_restores_session_state() {
    let mut engine = spent_engine();
    let initial = *engine.initial_growth_rates();

    engine.reset();

    assert!(!engine.is_budget_set());
    assert_eq!(engine.budget_ceiling(), 0);
    assert_eq!(engine.remaining_budget(), 0);
    assert_eq!(engine.current_growth_rates(), &initial);
    assert_eq!(engine.projection_year(), 2025);
    assert!(engine.ledger().is_empty());
    assert_eq!(engine.events().events_of_type("StateReset").len(), 1);
}

#[test]
fn test_reset_preserves_region_inputs() {
    let mut engine = spent_engine();
    let inputs_before = engine.inputs().clone();

    engine.reset();

    assert_eq!(engine.inputs(), &inputs_before);
    assert_eq!(engine.inputs().budget_floor, 5000);
}

#[test]
fn test_session_usable_after_reset() {
    let mut engine = spent_engine();
    engine.reset();

    // The floor is still loaded, so a new ceiling is accepted immediately.
    engine.set_budget_ceiling(10_000).unwrap();
    assert_eq!(engine.remaining_budget(), 5000);

    engine.apply_policy(Metric::Beds, 1, &[]).unwrap();
    assert_eq!(engine.ledger().len(), 1);
}

#[test]
fn test_repeated_reset_is_idempotent() {
    let mut engine = spent_engine();

    engine.reset();
    let rates_after_first = *engine.current_growth_rates();
    engine.reset();

    assert_eq!(engine.current_growth_rates(), &rates_after_first);
    assert!(engine.ledger().is_empty());
    assert_eq!(engine.events().events_of_type("StateReset").len(), 2);
}
