//! PyO3 wrapper for the decision engine
//!
//! This module provides the Python interface host dashboards embed. Region
//! data is handed over as a JSON document of pre-fetched records (the host
//! performs all network I/O), and the engine operations map onto methods
//! with dict-shaped results.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use super::types::{
    applied_to_py, ledger_to_py, parse_engine_config, parse_metric, projection_to_py,
    report_to_py,
};
use crate::engine::DecisionEngine as RustDecisionEngine;
use crate::models::inputs::RegionId;
use crate::models::metric::Metric;
use crate::sources::{LoadError, StaticRegionData};

/// Python wrapper for the Rust decision engine.
///
/// # Example (from Python)
///
/// ```python
/// from health_policy_simulator import DecisionEngine
///
/// engine = DecisionEngine.new({"base_year": 2020, "spillover_ratio": 0.5})
/// engine.load_static_data(prefetched_json)
/// engine.load_region(11)
///
/// engine.set_budget_ceiling(6000)
/// if engine.is_policy_eligible(1, 0):
///     record = engine.apply_policy(1, 0)
///     print(record["policy_name"], record["cost"])
///
/// comparison = engine.project(2030)
/// ```
#[pyclass(name = "DecisionEngine")]
pub struct PyDecisionEngine {
    inner: RustDecisionEngine,
    data: StaticRegionData,
}

#[pymethods]
impl PyDecisionEngine {
    /// Create an engine from an optional configuration dict
    /// (`base_year`, `default_projection_year`, `reference_year`,
    /// `spillover_ratio`; absent keys keep their defaults).
    #[staticmethod]
    #[pyo3(signature = (config=None))]
    fn new(config: Option<&Bound<'_, PyDict>>) -> PyResult<Self> {
        let config = parse_engine_config(config)?;
        Ok(PyDecisionEngine {
            inner: RustDecisionEngine::new(config),
            data: StaticRegionData::default(),
        })
    }

    /// Replace the pre-fetched region data set from a JSON document.
    ///
    /// Returns the number of regions on file.
    fn load_static_data(&mut self, json: &str) -> PyResult<usize> {
        self.data = serde_json::from_str(json)
            .map_err(|e| PyValueError::new_err(format!("invalid region data JSON: {}", e)))?;
        Ok(self.data.len())
    }

    /// Load a region's inputs and start a fresh session over them.
    ///
    /// Raises ValueError when no region is given, RuntimeError when the
    /// data source fails; prior state survives either.
    #[pyo3(signature = (region=None))]
    fn load_region(&mut self, py: Python, region: Option<u32>) -> PyResult<Py<PyDict>> {
        let report = self
            .inner
            .load_initial_data(&self.data, region.map(RegionId))
            .map_err(|e| match e {
                LoadError::NoRegionSelected => PyValueError::new_err(e.to_string()),
                LoadError::Source(_) => PyRuntimeError::new_err(e.to_string()),
            })?;
        report_to_py(py, &report)
    }

    /// Accept a budget ceiling. Raises ValueError on rejection (floor not
    /// loaded, or ceiling below floor).
    fn set_budget_ceiling(&mut self, ceiling: i64) -> PyResult<()> {
        self.inner
            .set_budget_ceiling(ceiling)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Select the projection target year.
    fn select_projection_year(&mut self, year: u16) {
        self.inner.select_projection_year(year);
    }

    /// Whether a policy tier is currently eligible for a metric (both by
    /// stable index).
    fn is_policy_eligible(&self, metric: usize, tier: usize) -> PyResult<bool> {
        Ok(self.inner.is_policy_eligible(parse_metric(metric)?, tier))
    }

    /// Apply a policy. `additional` holds the secondary metric indices for
    /// multi-metric options. Raises ValueError on any rejection; returns
    /// the ledger record on success.
    #[pyo3(signature = (metric, tier, additional=None))]
    fn apply_policy(
        &mut self,
        py: Python,
        metric: usize,
        tier: usize,
        additional: Option<Vec<usize>>,
    ) -> PyResult<Py<PyDict>> {
        let metric = parse_metric(metric)?;
        let additional = additional
            .unwrap_or_default()
            .into_iter()
            .map(parse_metric)
            .collect::<PyResult<Vec<Metric>>>()?;

        let applied = self
            .inner
            .apply_policy(metric, tier, &additional)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        applied_to_py(py, &applied)
    }

    /// Project all metrics to `year` (or the selected year when omitted).
    #[pyo3(signature = (year=None))]
    fn project(&self, py: Python, year: Option<u16>) -> PyResult<Py<PyDict>> {
        let projection = match year {
            Some(year) => self.inner.project(year),
            None => self.inner.projection(),
        };
        projection_to_py(py, &projection)
    }

    /// Reset the session state; loaded region inputs persist.
    fn reset(&mut self) {
        self.inner.reset();
    }

    // ========================================================================
    // State query methods
    // ========================================================================

    fn budget_ceiling(&self) -> i64 {
        self.inner.budget_ceiling()
    }

    fn remaining_budget(&self) -> i64 {
        self.inner.remaining_budget()
    }

    fn is_budget_set(&self) -> bool {
        self.inner.is_budget_set()
    }

    fn headroom(&self) -> i64 {
        self.inner.headroom()
    }

    fn remaining_budget_pct(&self) -> f64 {
        self.inner.remaining_budget_pct()
    }

    fn projection_year(&self) -> u16 {
        self.inner.projection_year()
    }

    fn initial_growth_rates(&self) -> Vec<f64> {
        self.inner.initial_growth_rates().to_vec()
    }

    fn current_growth_rates(&self) -> Vec<f64> {
        self.inner.current_growth_rates().to_vec()
    }

    /// Applied-policy ledger as a list of dicts.
    fn ledger(&self, py: Python) -> PyResult<Py<PyList>> {
        ledger_to_py(py, self.inner.ledger())
    }

    /// Number of default fallbacks applied so far (non-zero = degraded data).
    fn fallback_count(&self) -> usize {
        self.inner.events().fallback_count()
    }

    /// Full event log as a JSON array, for host-side auditing.
    fn events_json(&self) -> PyResult<String> {
        serde_json::to_string(self.inner.events().events())
            .map_err(|e| PyRuntimeError::new_err(format!("event serialization failed: {}", e)))
    }
}
