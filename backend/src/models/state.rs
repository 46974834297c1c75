//! Decision session state
//!
//! The mutable state of one simulation session: budget ceiling and remaining
//! headroom, the current (policy-adjusted) growth rates, the projection
//! timeline, and the append-only ledger of applied policies.
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 (minor currency units)
//! 2. `remaining_budget` is only ever debited after the engine's eligibility
//!    check confirmed affordability, so it never goes negative
//! 3. The ledger is append-only; a reset clears it wholesale but nothing
//!    ever edits past records

use crate::core::timeline::Timeline;
use crate::models::metric::{Metric, METRIC_COUNT};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One applied-policy record in the session ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedPolicy {
    /// Unique record identifier.
    pub id: Uuid,

    /// Catalog identifier of the applied option (e.g. `"M1P4"`).
    pub policy_id: String,

    /// Display name of the applied option.
    pub policy_name: String,

    /// Primary metric the policy targets.
    pub metric: Metric,

    /// Policy tier (0-5).
    pub tier: usize,

    /// Cost debited from the remaining budget (minor units).
    pub cost: i64,

    /// Growth bonus applied to the primary metric (percentage points).
    pub growth_add: f64,

    /// Secondary metrics that received the spillover bonus.
    pub secondary_metrics: Vec<Metric>,
}

/// Mutable state of one decision session.
///
/// Created fresh per region selection; [`DecisionState::reset`] restores the
/// initial budget and growth rates without touching the loaded region inputs
/// (those belong to [`crate::models::inputs::RegionInputs`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionState {
    /// Decision-maker-set budget upper limit (minor units). 0 until set.
    budget_ceiling: i64,

    /// Ceiling minus floor, minus the cost of every applied policy.
    remaining_budget: i64,

    /// Whether a valid ceiling has been accepted.
    budget_is_set: bool,

    /// Current growth rates (percent), initial rates plus policy bonuses.
    current_growth_rates: [f64; METRIC_COUNT],

    /// Projection timeline (base year and selected target year).
    timeline: Timeline,

    /// Applied policies in application order.
    ledger: Vec<AppliedPolicy>,
}

impl DecisionState {
    /// Fresh session state seeded from the initial growth rates.
    pub fn new(initial_growth_rates: [f64; METRIC_COUNT], timeline: Timeline) -> Self {
        Self {
            budget_ceiling: 0,
            remaining_budget: 0,
            budget_is_set: false,
            current_growth_rates: initial_growth_rates,
            timeline,
            ledger: Vec::new(),
        }
    }

    /// Accept a ceiling against a floor: headroom becomes the spendable
    /// budget. The engine validates `ceiling >= floor` beforehand.
    pub fn set_budget(&mut self, ceiling: i64, floor: i64) {
        self.budget_ceiling = ceiling;
        self.remaining_budget = ceiling - floor;
        self.budget_is_set = true;
    }

    /// Zero the budget fields and drop the set flag (rejection path).
    pub fn clear_budget(&mut self) {
        self.budget_ceiling = 0;
        self.remaining_budget = 0;
        self.budget_is_set = false;
    }

    /// Debit an applied policy's cost.
    ///
    /// Affordability was checked by the caller; the debug assertion guards
    /// the invariant in test builds.
    pub fn debit(&mut self, cost: i64) {
        debug_assert!(cost <= self.remaining_budget, "debit exceeds remaining budget");
        self.remaining_budget -= cost;
    }

    /// Add `delta` percentage points to a metric's current growth rate.
    pub fn boost_growth_rate(&mut self, metric: Metric, delta: f64) {
        self.current_growth_rates[metric.index()] += delta;
    }

    /// Append an applied-policy record.
    pub fn record(&mut self, applied: AppliedPolicy) {
        self.ledger.push(applied);
    }

    /// Restore the initial budget, growth rates, timeline and ledger.
    pub fn reset(&mut self, initial_growth_rates: [f64; METRIC_COUNT]) {
        self.clear_budget();
        self.current_growth_rates = initial_growth_rates;
        self.timeline.reset();
        self.ledger.clear();
    }

    pub fn budget_ceiling(&self) -> i64 {
        self.budget_ceiling
    }

    pub fn remaining_budget(&self) -> i64 {
        self.remaining_budget
    }

    pub fn budget_is_set(&self) -> bool {
        self.budget_is_set
    }

    pub fn current_growth_rates(&self) -> &[f64; METRIC_COUNT] {
        &self.current_growth_rates
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn timeline_mut(&mut self) -> &mut Timeline {
        &mut self.timeline
    }

    pub fn ledger(&self) -> &[AppliedPolicy] {
        &self.ledger
    }
}
