//! Policy eligibility rules
//!
//! A policy tier is usable for a metric when three gates pass, in order:
//! the budget gate (a ceiling has been accepted), the affordability gate
//! (remaining budget covers the option's cost), and the severity ladder
//! (the metric's lowest active band unlocks the tier).
//!
//! The ladder is monotonic but not a plain threshold: band 0 (best
//! standing) restricts the actor to the weakest intervention only, band 5
//! (worst standing) unlocks everything, and bands 1-4 unlock every tier at
//! or above the band index. Worse standing never locks a tier that better
//! standing allowed.

use crate::catalog::{PolicyCatalog, PolicyOption};
use crate::models::inputs::RegionInputs;
use crate::models::metric::Metric;
use crate::models::state::DecisionState;
use thiserror::Error;

/// Why a policy request was rejected. Expected and recoverable: the caller
/// corrects the input (or the budget) and retries.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PolicyRejection {
    #[error("budget has not been set")]
    BudgetNotSet,

    #[error("unknown policy tier {tier} for {metric:?}")]
    UnknownPolicy { metric: Metric, tier: usize },

    #[error("insufficient budget: required {required}, remaining {remaining}")]
    InsufficientBudget { required: i64, remaining: i64 },

    #[error("no active severity band for {metric:?}")]
    NoActiveBand { metric: Metric },

    #[error("policy tier {tier} is locked at severity band {band} for {metric:?}")]
    TierLocked {
        metric: Metric,
        tier: usize,
        band: usize,
    },

    #[error("expected {expected} secondary metric(s), got {got}")]
    SecondaryCountMismatch { expected: usize, got: usize },

    #[error("secondary selection includes the primary metric or a duplicate")]
    SecondaryNotDistinct,

    #[error("secondary metric {metric:?} is outside the policy's eligible pool")]
    SecondaryOutsidePool { metric: Metric },
}

/// Whether `min_band` unlocks `tier` on the severity ladder.
pub(crate) fn tier_unlocked(min_band: usize, tier: usize) -> bool {
    match min_band {
        0 => tier == 0,
        5 => true,
        band => tier >= band,
    }
}

/// Run the three eligibility gates for `(metric, tier)`.
///
/// Returns the catalog option so the caller can apply it without a second
/// lookup. Pure: no logging, no mutation.
pub(crate) fn check_eligibility<'a>(
    catalog: &'a PolicyCatalog,
    inputs: &RegionInputs,
    state: &DecisionState,
    metric: Metric,
    tier: usize,
) -> Result<&'a PolicyOption, PolicyRejection> {
    let option = catalog
        .option(metric, tier)
        .ok_or(PolicyRejection::UnknownPolicy { metric, tier })?;

    if !state.budget_is_set() || inputs.budget_floor == 0 {
        return Err(PolicyRejection::BudgetNotSet);
    }

    let required = option.cost(inputs.budget_floor);
    let remaining = state.remaining_budget();
    if remaining < required {
        return Err(PolicyRejection::InsufficientBudget {
            required,
            remaining,
        });
    }

    let min_band = inputs
        .eligibility
        .min_band(metric)
        .ok_or(PolicyRejection::NoActiveBand { metric })?;

    if !tier_unlocked(min_band, tier) {
        return Err(PolicyRejection::TierLocked {
            metric,
            tier,
            band: min_band,
        });
    }

    Ok(option)
}

/// Validate the secondary-metric selection for an option.
///
/// Multi-metric options require exactly `affect_count - 1` distinct
/// selections drawn from the option's pool, none of them the primary
/// metric. Single-metric options accept any selection but use none of it —
/// the caller logs the ignored extras.
pub(crate) fn validate_secondary(
    option: &PolicyOption,
    metric: Metric,
    additional: &[Metric],
) -> Result<Vec<Metric>, PolicyRejection> {
    if option.affect_count <= 1 {
        return Ok(Vec::new());
    }

    let expected = option.required_secondary();
    if additional.len() != expected {
        return Err(PolicyRejection::SecondaryCountMismatch {
            expected,
            got: additional.len(),
        });
    }

    let mut combined: Vec<Metric> = Vec::with_capacity(option.affect_count);
    combined.push(metric);
    for candidate in additional {
        if combined.contains(candidate) {
            return Err(PolicyRejection::SecondaryNotDistinct);
        }
        combined.push(*candidate);
    }

    for candidate in additional {
        if !option.additional_pool.contains(candidate) {
            return Err(PolicyRejection::SecondaryOutsidePool { metric: *candidate });
        }
    }

    Ok(additional.to_vec())
}
