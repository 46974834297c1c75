//! Policy catalog
//!
//! The immutable table of budgeted interventions: six tiers (P0..P5) for
//! each of the six metrics. Tier 0 carries the highest cost share and the
//! weakest growth bonus; tier 5 the lowest cost share and the strongest
//! bonus — the severity-band ladder in the engine decides which tiers a
//! decision-maker may actually use.
//!
//! Reference data only: nothing here is mutated at runtime, and the figures
//! (cost percentages, growth bonuses, secondary pools) are the product
//! team's calibration, carried verbatim.

use crate::models::metric::{Metric, METRIC_COUNT};
use serde::Serialize;

/// Number of policy tiers per metric.
pub const POLICY_TIERS: usize = 6;

/// A named intervention scoped to one primary metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicyOption {
    /// Stable identifier, `"M{metric}P{tier}"`.
    pub id: &'static str,

    /// Display name.
    pub name: &'static str,

    /// Cost as an integer percentage of the budget floor.
    pub cost_pct: i64,

    /// Growth-rate bonus (percentage points) to the primary metric.
    pub growth_add: f64,

    /// Total number of metrics the policy touches (1-3), primary included.
    pub affect_count: usize,

    /// Fixed pool of metrics eligible as secondary targets. Empty iff
    /// `affect_count == 1`; the caller picks exactly `affect_count - 1`
    /// members from it.
    pub additional_pool: &'static [Metric],
}

impl PolicyOption {
    /// Cost in minor units against a given budget floor.
    ///
    /// Integer math, truncating toward zero: `floor * cost_pct / 100`.
    pub fn cost(&self, budget_floor: i64) -> i64 {
        budget_floor * self.cost_pct / 100
    }

    /// Number of secondary metrics the caller must select.
    pub fn required_secondary(&self) -> usize {
        self.affect_count.saturating_sub(1)
    }
}

/// The full 6x6 policy table, indexed by (metric, tier).
#[derive(Debug)]
pub struct PolicyCatalog {
    by_metric: [[PolicyOption; POLICY_TIERS]; METRIC_COUNT],
}

impl PolicyCatalog {
    /// The standard catalog shipped with the simulator.
    pub fn standard() -> &'static PolicyCatalog {
        &STANDARD
    }

    /// Option for a metric and tier, or `None` for an out-of-range tier.
    pub fn option(&self, metric: Metric, tier: usize) -> Option<&PolicyOption> {
        self.by_metric[metric.index()].get(tier)
    }

    /// All six tiers for a metric, in tier order.
    pub fn options_for(&self, metric: Metric) -> &[PolicyOption; POLICY_TIERS] {
        &self.by_metric[metric.index()]
    }
}

use Metric::{Beds, Institutions, MedicalCost, Personnel, Population, Visits};

static STANDARD: PolicyCatalog = PolicyCatalog {
    by_metric: [
        // Metric 0: medical institutions
        [
            PolicyOption {
                id: "M0P0",
                name: "Medical consortium development",
                cost_pct: 30,
                growth_add: 0.5,
                affect_count: 1,
                additional_pool: &[],
            },
            PolicyOption {
                id: "M0P1",
                name: "Legacy campus renovation",
                cost_pct: 26,
                growth_add: 0.9,
                affect_count: 1,
                additional_pool: &[],
            },
            PolicyOption {
                id: "M0P2",
                name: "Mid-tier facility upgrades",
                cost_pct: 22,
                growth_add: 1.4,
                affect_count: 2,
                additional_pool: &[Beds, Personnel],
            },
            PolicyOption {
                id: "M0P3",
                name: "Hospital expansion incentives",
                cost_pct: 18,
                growth_add: 1.8,
                affect_count: 2,
                additional_pool: &[Beds, MedicalCost],
            },
            PolicyOption {
                id: "M0P4",
                name: "Tendered construction program",
                cost_pct: 14,
                growth_add: 3.4,
                affect_count: 3,
                additional_pool: &[Beds, Personnel, Visits],
            },
            PolicyOption {
                id: "M0P5",
                name: "State-funded affiliated hospitals",
                cost_pct: 10,
                growth_add: 4.0,
                affect_count: 3,
                additional_pool: &[Beds, MedicalCost, Visits],
            },
        ],
        // Metric 1: hospital beds
        [
            PolicyOption {
                id: "M1P0",
                name: "Routine ward maintenance",
                cost_pct: 30,
                growth_add: 0.2,
                affect_count: 1,
                additional_pool: &[],
            },
            PolicyOption {
                id: "M1P1",
                name: "Incremental bed additions",
                cost_pct: 26,
                growth_add: 0.7,
                affect_count: 1,
                additional_pool: &[],
            },
            PolicyOption {
                id: "M1P2",
                name: "Specialty ward capacity",
                cost_pct: 22,
                growth_add: 1.2,
                affect_count: 2,
                additional_pool: &[Institutions, Visits],
            },
            PolicyOption {
                id: "M1P3",
                name: "Turnover efficiency drive",
                cost_pct: 18,
                growth_add: 1.8,
                affect_count: 2,
                additional_pool: &[MedicalCost, Personnel],
            },
            PolicyOption {
                id: "M1P4",
                name: "ICU expansion",
                cost_pct: 14,
                growth_add: 2.4,
                affect_count: 3,
                additional_pool: &[Institutions, Personnel, Visits],
            },
            PolicyOption {
                id: "M1P5",
                name: "Smart ward rollout",
                cost_pct: 10,
                growth_add: 3.0,
                affect_count: 3,
                additional_pool: &[Institutions, MedicalCost, Visits],
            },
        ],
        // Metric 2: population
        [
            PolicyOption {
                id: "M2P0",
                name: "Baseline health monitoring",
                cost_pct: 30,
                growth_add: 0.3,
                affect_count: 1,
                additional_pool: &[],
            },
            PolicyOption {
                id: "M2P1",
                name: "Demographic structure program",
                cost_pct: 26,
                growth_add: 0.7,
                affect_count: 1,
                additional_pool: &[],
            },
            PolicyOption {
                id: "M2P2",
                name: "Talent attraction scheme",
                cost_pct: 22,
                growth_add: 1.0,
                affect_count: 2,
                additional_pool: &[MedicalCost, Personnel],
            },
            PolicyOption {
                id: "M2P3",
                name: "Childbirth support package",
                cost_pct: 18,
                growth_add: 1.2,
                affect_count: 2,
                additional_pool: &[MedicalCost, Visits],
            },
            PolicyOption {
                id: "M2P4",
                name: "Public health outreach",
                cost_pct: 14,
                growth_add: 1.9,
                affect_count: 3,
                additional_pool: &[Institutions, Beds, Visits],
            },
            PolicyOption {
                id: "M2P5",
                name: "Parental leave mandate",
                cost_pct: 10,
                growth_add: 2.8,
                affect_count: 3,
                additional_pool: &[Institutions, MedicalCost, Personnel],
            },
        ],
        // Metric 3: medical cost
        [
            PolicyOption {
                id: "M3P0",
                name: "Innovative payment pilots",
                cost_pct: 30,
                growth_add: 0.8,
                affect_count: 1,
                additional_pool: &[],
            },
            PolicyOption {
                id: "M3P1",
                name: "Care spending share uplift",
                cost_pct: 26,
                growth_add: 1.6,
                affect_count: 1,
                additional_pool: &[],
            },
            PolicyOption {
                id: "M3P2",
                name: "Insurance scheme reform",
                cost_pct: 22,
                growth_add: 2.2,
                affect_count: 2,
                additional_pool: &[Institutions, Beds],
            },
            PolicyOption {
                id: "M3P3",
                name: "Centralized procurement",
                cost_pct: 18,
                growth_add: 2.8,
                affect_count: 2,
                additional_pool: &[Personnel, Visits],
            },
            PolicyOption {
                id: "M3P4",
                name: "Corporate sponsorship program",
                cost_pct: 14,
                growth_add: 3.4,
                affect_count: 3,
                additional_pool: &[Institutions, Beds, Visits],
            },
            PolicyOption {
                id: "M3P5",
                name: "National credit facility",
                cost_pct: 10,
                growth_add: 4.0,
                affect_count: 3,
                additional_pool: &[Institutions, Personnel, Visits],
            },
        ],
        // Metric 4: medical personnel
        [
            PolicyOption {
                id: "M4P0",
                name: "Medical university construction",
                cost_pct: 30,
                growth_add: 0.4,
                affect_count: 1,
                additional_pool: &[],
            },
            PolicyOption {
                id: "M4P1",
                name: "Overseas talent recruitment",
                cost_pct: 26,
                growth_add: 0.5,
                affect_count: 1,
                additional_pool: &[],
            },
            PolicyOption {
                id: "M4P2",
                name: "Hiring incentive scheme",
                cost_pct: 22,
                growth_add: 0.7,
                affect_count: 2,
                additional_pool: &[Institutions, Beds],
            },
            PolicyOption {
                id: "M4P3",
                name: "Compensation reform",
                cost_pct: 18,
                growth_add: 1.1,
                affect_count: 2,
                additional_pool: &[MedicalCost, Visits],
            },
            PolicyOption {
                id: "M4P4",
                name: "Relocation subsidies",
                cost_pct: 14,
                growth_add: 2.4,
                affect_count: 3,
                additional_pool: &[Institutions, Beds, Visits],
            },
            PolicyOption {
                id: "M4P5",
                name: "Macro staffing directive",
                cost_pct: 10,
                growth_add: 5.0,
                affect_count: 3,
                additional_pool: &[Institutions, MedicalCost, Visits],
            },
        ],
        // Metric 5: outpatient visits
        [
            PolicyOption {
                id: "M5P0",
                name: "Health data platform",
                cost_pct: 30,
                growth_add: 0.5,
                affect_count: 1,
                additional_pool: &[],
            },
            PolicyOption {
                id: "M5P1",
                name: "Intake workflow streamlining",
                cost_pct: 26,
                growth_add: 0.8,
                affect_count: 1,
                additional_pool: &[],
            },
            PolicyOption {
                id: "M5P2",
                name: "Online appointment scheduling",
                cost_pct: 22,
                growth_add: 1.2,
                affect_count: 2,
                additional_pool: &[Institutions, Beds],
            },
            PolicyOption {
                id: "M5P3",
                name: "Community clinic outreach",
                cost_pct: 18,
                growth_add: 1.8,
                affect_count: 2,
                additional_pool: &[Population, MedicalCost],
            },
            PolicyOption {
                id: "M5P4",
                name: "Flagship specialty promotion",
                cost_pct: 14,
                growth_add: 2.4,
                affect_count: 3,
                additional_pool: &[Institutions, Beds, Personnel],
            },
            PolicyOption {
                id: "M5P5",
                name: "Health literacy campaign",
                cost_pct: 10,
                growth_add: 3.0,
                affect_count: 3,
                additional_pool: &[Institutions, Population, Personnel],
            },
        ],
    ],
};
