//! Compound-growth projection
//!
//! Projects each metric's baseline from the base year to a target year
//! under a growth-rate vector: `baseline * (1 + rate/100)^horizon`. Pure
//! functions of the supplied state; the engine exposes them as a comparison
//! between the initial rates (no interventions) and the current rates
//! (after applied policies).

use crate::models::metric::METRIC_COUNT;
use serde::Serialize;

/// Projection of all six metrics under original and current growth rates.
///
/// An entry is `None` when its baseline (or the computed value) is not a
/// finite number — "no value", never a silent zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionComparison {
    /// Target year the projection refers to.
    pub year: u16,

    /// Projection under the initial growth rates.
    pub original: [Option<f64>; METRIC_COUNT],

    /// Projection under the current (policy-adjusted) growth rates.
    pub current: [Option<f64>; METRIC_COUNT],
}

/// Project one vector of baselines over `horizon` years.
pub(crate) fn project_vector(
    baselines: &[f64; METRIC_COUNT],
    growth_rates: &[f64; METRIC_COUNT],
    horizon: i32,
) -> [Option<f64>; METRIC_COUNT] {
    let mut projected = [None; METRIC_COUNT];
    for i in 0..METRIC_COUNT {
        projected[i] = project_value(baselines[i], growth_rates[i], horizon);
    }
    projected
}

fn project_value(baseline: f64, growth_pct: f64, horizon: i32) -> Option<f64> {
    if !baseline.is_finite() {
        return None;
    }
    let value = baseline * (1.0 + growth_pct / 100.0).powi(horizon);
    value.is_finite().then_some(value)
}
