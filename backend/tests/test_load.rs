//! Integration tests for the region data load boundary.
//!
//! ## Test Coverage
//!
//! 1. **Full load**: all four input fields resolve from the source
//! 2. **Field fallbacks**: each absent field degrades to its documented
//!    default, observably (report, events, fallback count)
//! 3. **Whole-load failure**: a source error or a missing region leaves the
//!    prior engine state completely untouched
//! 4. **Session re-seed**: a successful load starts a fresh session over
//!    the new inputs

use health_policy_simulator_core_rs::analysis::EligibilityMatrix;
use health_policy_simulator_core_rs::{
    CostSeries, DecisionEngine, EngineConfig, FallbackField, LoadError, Metric,
    RegionDataSource, RegionId, RegionRecord, SourceError, StaticRegionData,
    DEFAULT_BASELINES, DEFAULT_GROWTH_RATES, METRIC_COUNT,
};

const REGION: RegionId = RegionId(11);

fn full_record() -> RegionRecord {
    let mut matrix = EligibilityMatrix::empty();
    for metric in Metric::ALL {
        matrix.set_active(metric, 2);
    }
    RegionRecord {
        cost_series: Some(CostSeries::from([(2019, 4800), (2020, 5000), (2021, 5300)])),
        baselines: [Some(10.0), Some(20.0), Some(30.0), Some(40.0), Some(50.0), Some(60.0)],
        growth_rates: Some([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]),
        eligibility_matrix: Some(matrix),
    }
}

/// Source whose every fetch fails, for whole-load failure tests.
struct FailingSource;

impl RegionDataSource for FailingSource {
    fn cost_series(&self, _region: RegionId) -> Result<Option<CostSeries>, SourceError> {
        Err(SourceError::Fetch("connection refused".to_string()))
    }

    fn baseline(&self, _region: RegionId, _metric: Metric) -> Result<Option<f64>, SourceError> {
        Err(SourceError::Fetch("connection refused".to_string()))
    }

    fn growth_rates(
        &self,
        _region: RegionId,
    ) -> Result<Option<[f64; METRIC_COUNT]>, SourceError> {
        Err(SourceError::Fetch("connection refused".to_string()))
    }

    fn eligibility_matrix(
        &self,
        _region: RegionId,
    ) -> Result<Option<EligibilityMatrix>, SourceError> {
        Err(SourceError::Fetch("connection refused".to_string()))
    }
}

// ============================================================================
// Test Group 1: Full load
// ============================================================================

#[test]
fn test_full_load_resolves_all_fields() {
    let source = StaticRegionData::new().with_region(REGION, full_record());
    let mut engine = DecisionEngine::new(EngineConfig::default());

    let report = engine.load_initial_data(&source, Some(REGION)).unwrap();

    assert!(!report.is_degraded());
    assert_eq!(engine.inputs().budget_floor, 5000);
    assert_eq!(engine.inputs().baselines, [10.0, 20.0, 30.0, 40.0, 50.0, 60.0]);
    assert_eq!(engine.initial_growth_rates(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(engine.current_growth_rates(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(engine.events().fallback_count(), 0);
    assert_eq!(engine.events().events_of_type("DataLoaded").len(), 1);
}

#[test]
fn test_reference_year_selects_floor() {
    let config = EngineConfig {
        reference_year: 2021,
        ..EngineConfig::default()
    };
    let source = StaticRegionData::new().with_region(REGION, full_record());
    let mut engine = DecisionEngine::new(config);

    engine.load_initial_data(&source, Some(REGION)).unwrap();

    assert_eq!(engine.inputs().budget_floor, 5300);
}

// ============================================================================
// Test Group 2: Field fallbacks
// ============================================================================

#[test]
fn test_missing_cost_series_blocks_budget_but_not_load() {
    let mut record = full_record();
    record.cost_series = None;

    let source = StaticRegionData::new().with_region(REGION, record);
    let mut engine = DecisionEngine::new(EngineConfig::default());

    let report = engine.load_initial_data(&source, Some(REGION)).unwrap();

    assert_eq!(report.budget_floor, 0);
    assert!(report.fallbacks.contains(&FallbackField::BudgetFloor));
    // Budget setting stays blocked until real cost data arrives.
    assert!(engine.set_budget_ceiling(6000).is_err());
}

#[test]
fn test_missing_baseline_falls_back_per_metric() {
    let mut record = full_record();
    record.baselines[Metric::Population.index()] = None;

    let source = StaticRegionData::new().with_region(REGION, record);
    let mut engine = DecisionEngine::new(EngineConfig::default());

    let report = engine.load_initial_data(&source, Some(REGION)).unwrap();

    assert_eq!(
        report.fallbacks,
        vec![FallbackField::Baseline(Metric::Population)]
    );
    assert_eq!(
        engine.inputs().baselines[Metric::Population.index()],
        DEFAULT_BASELINES[Metric::Population.index()]
    );
    // Other baselines kept their real values.
    assert_eq!(engine.inputs().baselines[0], 10.0);
}

#[test]
fn test_missing_rates_fall_back_as_whole_vector() {
    let mut record = full_record();
    record.growth_rates = None;

    let source = StaticRegionData::new().with_region(REGION, record);
    let mut engine = DecisionEngine::new(EngineConfig::default());

    let report = engine.load_initial_data(&source, Some(REGION)).unwrap();

    assert_eq!(report.fallbacks, vec![FallbackField::GrowthRates]);
    assert_eq!(engine.initial_growth_rates(), &DEFAULT_GROWTH_RATES);
}

#[test]
fn test_fallbacks_are_counted_and_logged() {
    let source = StaticRegionData::new(); // nothing on file for any region
    let mut engine = DecisionEngine::new(EngineConfig::default());

    let report = engine.load_initial_data(&source, Some(REGION)).unwrap();

    // Floor + 6 baselines + rates + matrix.
    assert_eq!(report.fallbacks.len(), 9);
    assert!(report.is_degraded());
    assert_eq!(engine.events().fallback_count(), 9);
    assert_eq!(
        engine
            .events()
            .events_for_metric(Metric::Visits)
            .len(),
        1
    );
}

// ============================================================================
// Test Group 3: Whole-load failure
// ============================================================================

#[test]
fn test_no_region_selected_is_an_error() {
    let source = StaticRegionData::new();
    let mut engine = DecisionEngine::new(EngineConfig::default());

    let err = engine.load_initial_data(&source, None).unwrap_err();

    assert_eq!(err, LoadError::NoRegionSelected);
    assert_eq!(engine.events().len(), 0);
}

#[test]
fn test_source_failure_leaves_prior_state_untouched() {
    let source = StaticRegionData::new().with_region(REGION, full_record());
    let mut engine = DecisionEngine::new(EngineConfig::default());
    engine.load_initial_data(&source, Some(REGION)).unwrap();
    engine.set_budget_ceiling(6000).unwrap();

    let inputs_before = engine.inputs().clone();
    let events_before = engine.events().len();

    let err = engine
        .load_initial_data(&FailingSource, Some(RegionId(22)))
        .unwrap_err();

    assert!(matches!(err, LoadError::Source(SourceError::Fetch(_))));
    assert_eq!(engine.inputs(), &inputs_before);
    assert!(engine.is_budget_set());
    assert_eq!(engine.remaining_budget(), 1000);
    assert_eq!(engine.events().len(), events_before);
}

// ============================================================================
// Test Group 4: Session re-seed on load
// ============================================================================

#[test]
fn test_load_reseeds_session() {
    let source = StaticRegionData::new().with_region(REGION, full_record());
    let mut engine = DecisionEngine::new(EngineConfig::default());
    engine.load_initial_data(&source, Some(REGION)).unwrap();
    engine.set_budget_ceiling(30_000).unwrap();
    engine
        .apply_policy(Metric::Beds, 2, &[Metric::Institutions])
        .unwrap();
    engine.select_projection_year(2035);

    // Switching regions invalidates the session: the floor changed.
    let other = RegionId(22);
    let mut other_record = full_record();
    other_record.cost_series = Some(CostSeries::from([(2020, 9000)]));
    let source = StaticRegionData::new()
        .with_region(REGION, full_record())
        .with_region(other, other_record);

    engine.load_initial_data(&source, Some(other)).unwrap();

    assert_eq!(engine.inputs().budget_floor, 9000);
    assert!(!engine.is_budget_set());
    assert_eq!(engine.remaining_budget(), 0);
    assert!(engine.ledger().is_empty());
    assert_eq!(engine.projection_year(), 2025);
    assert_eq!(engine.current_growth_rates(), engine.initial_growth_rates());
}
