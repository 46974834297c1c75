//! Region data boundary
//!
//! The engine performs no I/O of its own: callers fetch region-scoped data
//! however they like (HTTP, cache, fixtures) and expose it through the
//! [`RegionDataSource`] trait. [`load_region`] resolves the four inputs the
//! simulation needs — budget floor, baselines, initial growth rates,
//! eligibility matrix — falling back to documented defaults field by field,
//! and reports every fallback so callers can surface degraded state.
//!
//! A load either yields a complete [`RegionInputs`] or an error; no
//! partially resolved input set ever reaches the engine.

use crate::analysis::matrix::EligibilityMatrix;
use crate::models::event::FallbackField;
use crate::models::inputs::{
    RegionId, RegionInputs, DEFAULT_BASELINES, DEFAULT_GROWTH_RATES,
};
use crate::models::metric::{Metric, METRIC_COUNT};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

pub mod static_data;

pub use static_data::{RegionRecord, StaticRegionData};

/// Year-indexed total cost for a region (minor currency units).
pub type CostSeries = BTreeMap<u16, i64>;

/// A source-level fetch failure (network, parse, upstream outage).
///
/// Distinct from data that is merely absent: absence degrades to defaults,
/// a fetch failure aborts the load.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SourceError {
    #[error("region data fetch failed: {0}")]
    Fetch(String),
}

/// Why a whole region load failed. Prior engine state survives these.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LoadError {
    #[error("no region selected")]
    NoRegionSelected,

    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Pre-fetched, region-scoped data the engine consumes.
///
/// Each method returns `Ok(None)` when the region simply has no record
/// (triggers a documented default) and `Err` when the fetch itself failed
/// (aborts the load).
pub trait RegionDataSource {
    /// Year-indexed total cost series for the region.
    fn cost_series(&self, region: RegionId) -> Result<Option<CostSeries>, SourceError>;

    /// Latest baseline value of one metric for the region.
    fn baseline(&self, region: RegionId, metric: Metric) -> Result<Option<f64>, SourceError>;

    /// Initial growth-rate vector (percent) from the upstream analysis.
    fn growth_rates(&self, region: RegionId)
        -> Result<Option<[f64; METRIC_COUNT]>, SourceError>;

    /// Pre-computed eligibility matrix from the upstream analysis.
    fn eligibility_matrix(
        &self,
        region: RegionId,
    ) -> Result<Option<EligibilityMatrix>, SourceError>;
}

/// Outcome of a completed region load.
#[derive(Debug, Clone, Serialize)]
pub struct LoadReport {
    /// Region the load resolved.
    pub region: RegionId,

    /// Resolved budget floor (minor units; 0 when the cost series fell back).
    pub budget_floor: i64,

    /// Every field that fell back to its built-in default, in resolution
    /// order.
    pub fallbacks: Vec<FallbackField>,
}

impl LoadReport {
    /// Whether any field fell back to a default.
    pub fn is_degraded(&self) -> bool {
        !self.fallbacks.is_empty()
    }
}

/// Resolve a complete [`RegionInputs`] for `region`.
///
/// `reference_year` selects the cost-series entry used as the budget floor.
/// Field-level absence degrades to defaults (floor 0, per-metric default
/// baselines, the default rate vector, the default matrix) and is recorded
/// in the report; a [`SourceError`] from any fetch aborts the whole load.
pub fn load_region(
    source: &dyn RegionDataSource,
    region: RegionId,
    reference_year: u16,
) -> Result<(RegionInputs, LoadReport), LoadError> {
    let mut fallbacks = Vec::new();

    let budget_floor = match source.cost_series(region)? {
        Some(series) => match series.get(&reference_year) {
            Some(cost) => *cost,
            None => {
                fallbacks.push(FallbackField::BudgetFloor);
                0
            }
        },
        None => {
            fallbacks.push(FallbackField::BudgetFloor);
            0
        }
    };

    let mut baselines = [0.0; METRIC_COUNT];
    for metric in Metric::ALL {
        baselines[metric.index()] = match source.baseline(region, metric)? {
            Some(value) => value,
            None => {
                fallbacks.push(FallbackField::Baseline(metric));
                DEFAULT_BASELINES[metric.index()]
            }
        };
    }

    let initial_growth_rates = match source.growth_rates(region)? {
        Some(rates) => rates,
        None => {
            fallbacks.push(FallbackField::GrowthRates);
            DEFAULT_GROWTH_RATES
        }
    };

    let eligibility = match source.eligibility_matrix(region)? {
        Some(matrix) => matrix,
        None => {
            fallbacks.push(FallbackField::EligibilityMatrix);
            EligibilityMatrix::default()
        }
    };

    let inputs = RegionInputs {
        budget_floor,
        baselines,
        initial_growth_rates,
        eligibility,
    };
    let report = LoadReport {
        region,
        budget_floor,
        fallbacks,
    };

    Ok((inputs, report))
}
