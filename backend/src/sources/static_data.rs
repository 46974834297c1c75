//! Static region data
//!
//! The canonical [`RegionDataSource`] implementation: an in-memory map of
//! pre-fetched region records. Host applications resolve their network
//! calls first, deserialize the result into this structure (it round-trips
//! through serde), and hand it to the engine; tests use it as their data
//! double.

use crate::analysis::matrix::EligibilityMatrix;
use crate::models::inputs::RegionId;
use crate::models::metric::{Metric, METRIC_COUNT};
use crate::sources::{CostSeries, RegionDataSource, SourceError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Everything a region may have on file. Absent pieces stay `None` and
/// degrade to defaults at load time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionRecord {
    /// Year-indexed total cost (minor units).
    pub cost_series: Option<CostSeries>,

    /// Latest value per metric, in metric index order.
    pub baselines: [Option<f64>; METRIC_COUNT],

    /// Initial growth rates (percent) from the upstream analysis.
    pub growth_rates: Option<[f64; METRIC_COUNT]>,

    /// Pre-computed eligibility matrix from the upstream analysis.
    pub eligibility_matrix: Option<EligibilityMatrix>,
}

/// In-memory set of pre-fetched region records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaticRegionData {
    regions: HashMap<RegionId, RegionRecord>,
}

impl StaticRegionData {
    /// Empty data set: every region resolves to defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion.
    pub fn with_region(mut self, region: RegionId, record: RegionRecord) -> Self {
        self.regions.insert(region, record);
        self
    }

    /// Insert or replace a region's record.
    pub fn insert(&mut self, region: RegionId, record: RegionRecord) {
        self.regions.insert(region, record);
    }

    /// Record for a region, if any.
    pub fn get(&self, region: RegionId) -> Option<&RegionRecord> {
        self.regions.get(&region)
    }

    /// Number of regions on file.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether no region has a record.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl RegionDataSource for StaticRegionData {
    fn cost_series(&self, region: RegionId) -> Result<Option<CostSeries>, SourceError> {
        Ok(self.get(region).and_then(|r| r.cost_series.clone()))
    }

    fn baseline(&self, region: RegionId, metric: Metric) -> Result<Option<f64>, SourceError> {
        Ok(self
            .get(region)
            .and_then(|r| r.baselines[metric.index()]))
    }

    fn growth_rates(
        &self,
        region: RegionId,
    ) -> Result<Option<[f64; METRIC_COUNT]>, SourceError> {
        Ok(self.get(region).and_then(|r| r.growth_rates))
    }

    fn eligibility_matrix(
        &self,
        region: RegionId,
    ) -> Result<Option<EligibilityMatrix>, SourceError> {
        Ok(self.get(region).and_then(|r| r.eligibility_matrix.clone()))
    }
}
