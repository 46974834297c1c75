//! Decision engine
//!
//! The main entry point: owns the loaded region inputs, the mutable session
//! state, and the event log, and exposes the simulation operations — set a
//! budget ceiling, select a projection year, check and apply policies,
//! project metrics, reset.
//!
//! All operations run to completion synchronously. Expected failures
//! (budget below floor, ineligible policy, malformed secondary selection)
//! reject with a typed error and mutate nothing; nothing in this module
//! panics on caller input.

use crate::catalog::{PolicyCatalog, PolicyOption};
use crate::core::timeline::Timeline;
use crate::models::event::{Event, EventLog};
use crate::models::inputs::{RegionId, RegionInputs};
use crate::models::metric::{Metric, METRIC_COUNT};
use crate::models::state::{AppliedPolicy, DecisionState};
use crate::sources::{load_region, LoadError, LoadReport, RegionDataSource};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub mod eligibility;
pub mod projection;

pub use eligibility::PolicyRejection;
pub use projection::ProjectionComparison;

/// Errors from setting the budget ceiling. Validation failures a caller
/// surfaces to the decision-maker, not internal assertions.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BudgetError {
    #[error("budget floor is not loaded; load region data first")]
    FloorNotLoaded,

    #[error("ceiling {proposed} is below the budget floor {floor}")]
    BelowFloor { proposed: i64, floor: i64 },
}

/// Engine configuration: the domain parameters that are product
/// calibration, not algorithmic truths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Year baselines refer to and projections compound from.
    pub base_year: u16,

    /// Projection year selected on a fresh or reset session.
    pub default_projection_year: u16,

    /// Cost-series year whose value becomes the budget floor.
    pub reference_year: u16,

    /// Fraction of a policy's growth bonus granted to each secondary
    /// metric. Damped so multi-metric policies are not strictly dominant.
    pub spillover_ratio: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_year: 2020,
            default_projection_year: 2025,
            reference_year: 2020,
            spillover_ratio: 0.5,
        }
    }
}

/// Policy simulation engine for one region session.
///
/// # Example
///
/// ```
/// use health_policy_simulator_core_rs::{DecisionEngine, EngineConfig, Metric, RegionInputs};
///
/// let mut inputs = RegionInputs::default();
/// inputs.budget_floor = 5000;
///
/// let mut engine = DecisionEngine::with_inputs(EngineConfig::default(), inputs);
/// engine.set_budget_ceiling(8000).unwrap();
/// assert_eq!(engine.remaining_budget(), 3000);
///
/// // Beds sits in band 0 under the default matrix: only tier 0 unlocked.
/// assert!(engine.is_policy_eligible(Metric::Beds, 0));
/// assert!(!engine.is_policy_eligible(Metric::Beds, 3));
/// ```
#[derive(Debug)]
pub struct DecisionEngine {
    config: EngineConfig,
    catalog: &'static PolicyCatalog,
    inputs: RegionInputs,
    state: DecisionState,
    events: EventLog,
}

impl DecisionEngine {
    /// Engine with default inputs (floor 0: budget setting stays blocked
    /// until a region load supplies real cost data).
    pub fn new(config: EngineConfig) -> Self {
        Self::with_inputs(config, RegionInputs::default())
    }

    /// Engine over pre-resolved inputs, skipping the load boundary.
    pub fn with_inputs(config: EngineConfig, inputs: RegionInputs) -> Self {
        let timeline = Timeline::new(config.base_year, config.default_projection_year);
        let state = DecisionState::new(inputs.initial_growth_rates, timeline);
        Self {
            config,
            catalog: PolicyCatalog::standard(),
            inputs,
            state,
            events: EventLog::new(),
        }
    }

    /// Load a region's inputs from a data source and start a fresh session
    /// over them.
    ///
    /// The four input fields are resolved completely before anything is
    /// replaced: on `Err`, prior inputs and session state are untouched. On
    /// success the session state is re-seeded (the floor changed, so any
    /// previously accepted ceiling no longer describes this region) and
    /// every fallback the load applied is logged.
    pub fn load_initial_data(
        &mut self,
        source: &dyn RegionDataSource,
        region: Option<RegionId>,
    ) -> Result<LoadReport, LoadError> {
        let region = region.ok_or(LoadError::NoRegionSelected)?;
        let (inputs, report) = load_region(source, region, self.config.reference_year)?;

        self.inputs = inputs;
        self.state = DecisionState::new(
            self.inputs.initial_growth_rates,
            Timeline::new(self.config.base_year, self.config.default_projection_year),
        );

        for field in &report.fallbacks {
            self.events.log(Event::FallbackApplied { field: *field });
        }
        self.events.log(Event::DataLoaded {
            region,
            budget_floor: report.budget_floor,
            fallback_count: report.fallbacks.len(),
        });

        Ok(report)
    }

    /// Accept a budget ceiling.
    ///
    /// Rejected when the floor is not loaded or the ceiling is below it; a
    /// rejection zeroes the budget fields and forces the set flag off, so a
    /// failed attempt never leaves a stale earlier budget in place.
    pub fn set_budget_ceiling(&mut self, ceiling: i64) -> Result<(), BudgetError> {
        let floor = self.inputs.budget_floor;

        if floor == 0 {
            self.state.clear_budget();
            self.events.log(Event::BudgetRejected {
                proposed: ceiling,
                floor,
            });
            return Err(BudgetError::FloorNotLoaded);
        }

        if ceiling < floor {
            self.state.clear_budget();
            self.events.log(Event::BudgetRejected {
                proposed: ceiling,
                floor,
            });
            return Err(BudgetError::BelowFloor {
                proposed: ceiling,
                floor,
            });
        }

        self.state.set_budget(ceiling, floor);
        self.events.log(Event::BudgetSet {
            ceiling,
            floor,
            headroom: ceiling - floor,
        });
        Ok(())
    }

    /// Select the projection target year. Not validated; years outside the
    /// expected range flow into the projection math unchanged.
    pub fn select_projection_year(&mut self, year: u16) {
        self.state.timeline_mut().select_year(year);
        self.events.log(Event::YearSelected { year });
    }

    /// Whether `(metric, tier)` passes every eligibility gate right now.
    pub fn is_policy_eligible(&self, metric: Metric, tier: usize) -> bool {
        self.check_policy(metric, tier).is_ok()
    }

    /// Run the eligibility gates, returning the catalog option or the
    /// specific rejection. Pure; logs nothing.
    pub fn check_policy(
        &self,
        metric: Metric,
        tier: usize,
    ) -> Result<&'static PolicyOption, PolicyRejection> {
        eligibility::check_eligibility(self.catalog, &self.inputs, &self.state, metric, tier)
    }

    /// Apply a policy to a metric.
    ///
    /// Re-validates eligibility and the secondary-metric selection, then
    /// debits the cost, boosts the primary metric's growth rate by the
    /// option's bonus and each secondary metric's by the spillover share,
    /// and appends a ledger record. Any rejection leaves budget, rates and
    /// ledger untouched.
    pub fn apply_policy(
        &mut self,
        metric: Metric,
        tier: usize,
        additional: &[Metric],
    ) -> Result<AppliedPolicy, PolicyRejection> {
        let option = match self.check_policy(metric, tier) {
            Ok(option) => option,
            Err(rejection) => {
                self.events.log(Event::PolicyRejected {
                    metric,
                    tier,
                    reason: rejection.to_string(),
                });
                return Err(rejection);
            }
        };

        let secondary = match eligibility::validate_secondary(option, metric, additional) {
            Ok(secondary) => secondary,
            Err(rejection) => {
                self.events.log(Event::PolicyRejected {
                    metric,
                    tier,
                    reason: rejection.to_string(),
                });
                return Err(rejection);
            }
        };

        if option.affect_count == 1 && !additional.is_empty() {
            self.events.log(Event::ExtraSelectionsIgnored {
                metric,
                tier,
                ignored: additional.to_vec(),
            });
        }

        let cost = option.cost(self.inputs.budget_floor);
        self.state.debit(cost);

        self.state.boost_growth_rate(metric, option.growth_add);
        for secondary_metric in &secondary {
            self.state
                .boost_growth_rate(*secondary_metric, option.growth_add * self.config.spillover_ratio);
        }

        let applied = AppliedPolicy {
            id: Uuid::new_v4(),
            policy_id: option.id.to_string(),
            policy_name: option.name.to_string(),
            metric,
            tier,
            cost,
            growth_add: option.growth_add,
            secondary_metrics: secondary,
        };
        self.state.record(applied.clone());

        self.events.log(Event::PolicyApplied {
            policy_id: applied.policy_id.clone(),
            metric,
            tier,
            cost,
            remaining_after: self.state.remaining_budget(),
        });

        Ok(applied)
    }

    /// Project all metrics to `year` under the initial and current rates.
    pub fn project(&self, year: u16) -> ProjectionComparison {
        let horizon = self.state.timeline().horizon(year);
        ProjectionComparison {
            year,
            original: projection::project_vector(
                &self.inputs.baselines,
                &self.inputs.initial_growth_rates,
                horizon,
            ),
            current: projection::project_vector(
                &self.inputs.baselines,
                self.state.current_growth_rates(),
                horizon,
            ),
        }
    }

    /// Projection at the currently selected year.
    pub fn projection(&self) -> ProjectionComparison {
        self.project(self.state.timeline().selected_year())
    }

    /// Reset the session: budget cleared, growth rates restored from the
    /// initial rates, projection year back to the default, ledger emptied.
    /// Loaded inputs persist until the next explicit load.
    pub fn reset(&mut self) {
        self.state.reset(self.inputs.initial_growth_rates);
        self.events.log(Event::StateReset);
    }

    // ------------------------------------------------------------------
    // Read surface
    // ------------------------------------------------------------------

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn inputs(&self) -> &RegionInputs {
        &self.inputs
    }

    pub fn catalog(&self) -> &'static PolicyCatalog {
        self.catalog
    }

    pub fn budget_ceiling(&self) -> i64 {
        self.state.budget_ceiling()
    }

    pub fn remaining_budget(&self) -> i64 {
        self.state.remaining_budget()
    }

    pub fn is_budget_set(&self) -> bool {
        self.state.budget_is_set()
    }

    /// Spendable headroom the accepted ceiling opened (ceiling − floor),
    /// or 0 while no budget is set.
    pub fn headroom(&self) -> i64 {
        if !self.state.budget_is_set() {
            return 0;
        }
        self.state.budget_ceiling() - self.inputs.budget_floor
    }

    /// Remaining budget as a percentage of the headroom (0 when unset).
    pub fn remaining_budget_pct(&self) -> f64 {
        let headroom = self.headroom();
        if headroom == 0 {
            return 0.0;
        }
        self.state.remaining_budget() as f64 / headroom as f64 * 100.0
    }

    pub fn initial_growth_rates(&self) -> &[f64; METRIC_COUNT] {
        &self.inputs.initial_growth_rates
    }

    pub fn current_growth_rates(&self) -> &[f64; METRIC_COUNT] {
        self.state.current_growth_rates()
    }

    pub fn projection_year(&self) -> u16 {
        self.state.timeline().selected_year()
    }

    pub fn ledger(&self) -> &[AppliedPolicy] {
        self.state.ledger()
    }

    pub fn events(&self) -> &EventLog {
        &self.events
    }
}
