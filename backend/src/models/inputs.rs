//! Region inputs
//!
//! The four externally loaded fields the simulation depends on, bundled so a
//! data load replaces them as one unit: no engine operation can ever observe
//! a half-updated mix of old and new region data.
//!
//! CRITICAL: all money values are i64 (minor currency units)

use crate::analysis::matrix::EligibilityMatrix;
use crate::models::metric::METRIC_COUNT;
use serde::{Deserialize, Serialize};

/// Numeric region code as used by the upstream dashboards.
///
/// `0` is the nationwide aggregate view; positive codes are provinces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegionId(pub u32);

impl RegionId {
    /// The nationwide aggregate pseudo-region.
    pub const NATIONWIDE: RegionId = RegionId(0);
}

/// Default per-metric baselines used when a region's records are absent.
pub const DEFAULT_BASELINES: [f64; METRIC_COUNT] = [100.0, 200.0, 300.0, 400.0, 500.0, 600.0];

/// Default initial growth rates (percent) used when the analysis vector is
/// absent. Falls back as a whole vector, never per element.
pub const DEFAULT_GROWTH_RATES: [f64; METRIC_COUNT] = [2.21, 4.91, 0.09, 12.55, 2.21, 0.77];

/// Externally loaded inputs for one region's simulation session.
///
/// Loaded atomically by [`crate::sources::load_region`]; a session reset
/// leaves these untouched (only the next explicit load replaces them).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionInputs {
    /// Budget floor: the region's total medical cost for the reference year
    /// (i64 minor units). A floor of 0 means the cost series was missing and
    /// blocks budget setting until real data arrives.
    pub budget_floor: i64,

    /// Baseline value of each metric as of the base year.
    pub baselines: [f64; METRIC_COUNT],

    /// Initial growth rates (percent) from the upstream analysis.
    pub initial_growth_rates: [f64; METRIC_COUNT],

    /// Severity classification gating policy strength per metric.
    pub eligibility: EligibilityMatrix,
}

impl Default for RegionInputs {
    fn default() -> Self {
        Self {
            budget_floor: 0,
            baselines: DEFAULT_BASELINES,
            initial_growth_rates: DEFAULT_GROWTH_RATES,
            eligibility: EligibilityMatrix::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_inputs_block_budget() {
        let inputs = RegionInputs::default();
        assert_eq!(inputs.budget_floor, 0);
        assert_eq!(inputs.baselines, DEFAULT_BASELINES);
        assert_eq!(inputs.initial_growth_rates, DEFAULT_GROWTH_RATES);
    }

    #[test]
    fn test_region_id_nationwide() {
        assert_eq!(RegionId::NATIONWIDE, RegionId(0));
        assert_ne!(RegionId::NATIONWIDE, RegionId(11));
    }
}
