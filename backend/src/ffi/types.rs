//! Conversion helpers between Python objects and engine types.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::engine::{EngineConfig, ProjectionComparison};
use crate::models::metric::Metric;
use crate::models::state::AppliedPolicy;
use crate::sources::LoadReport;

/// Parse an optional configuration dict; absent keys keep their defaults.
pub fn parse_engine_config(config: Option<&Bound<'_, PyDict>>) -> PyResult<EngineConfig> {
    let mut parsed = EngineConfig::default();
    let Some(config) = config else {
        return Ok(parsed);
    };

    if let Some(value) = config.get_item("base_year")? {
        parsed.base_year = value.extract()?;
    }
    if let Some(value) = config.get_item("default_projection_year")? {
        parsed.default_projection_year = value.extract()?;
    }
    if let Some(value) = config.get_item("reference_year")? {
        parsed.reference_year = value.extract()?;
    }
    if let Some(value) = config.get_item("spillover_ratio")? {
        parsed.spillover_ratio = value.extract()?;
    }

    Ok(parsed)
}

/// Metric from its stable index, as Python callers address metrics.
pub fn parse_metric(index: usize) -> PyResult<Metric> {
    Metric::from_index(index)
        .ok_or_else(|| PyValueError::new_err(format!("metric index {} out of range (0-5)", index)))
}

/// Projection comparison as `{"year", "original", "current"}` with `None`
/// for entries that have no value.
pub fn projection_to_py(py: Python, projection: &ProjectionComparison) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("year", projection.year)?;
    dict.set_item("original", projection.original.to_vec())?;
    dict.set_item("current", projection.current.to_vec())?;
    Ok(dict.into())
}

/// Ledger record as a dict with metric indices.
pub fn applied_to_py(py: Python, applied: &AppliedPolicy) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("id", applied.id.to_string())?;
    dict.set_item("policy_id", &applied.policy_id)?;
    dict.set_item("policy_name", &applied.policy_name)?;
    dict.set_item("metric", applied.metric.index())?;
    dict.set_item("tier", applied.tier)?;
    dict.set_item("cost", applied.cost)?;
    dict.set_item("growth_add", applied.growth_add)?;
    dict.set_item(
        "secondary_metrics",
        applied
            .secondary_metrics
            .iter()
            .map(|m| m.index())
            .collect::<Vec<_>>(),
    )?;
    Ok(dict.into())
}

/// Full ledger as a list of dicts.
pub fn ledger_to_py(py: Python, ledger: &[AppliedPolicy]) -> PyResult<Py<PyList>> {
    let list = PyList::empty_bound(py);
    for applied in ledger {
        list.append(applied_to_py(py, applied)?)?;
    }
    Ok(list.into())
}

/// Load report as `{"region", "budget_floor", "fallback_count", "degraded"}`.
pub fn report_to_py(py: Python, report: &LoadReport) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("region", report.region.0)?;
    dict.set_item("budget_floor", report.budget_floor)?;
    dict.set_item("fallback_count", report.fallbacks.len())?;
    dict.set_item("degraded", report.is_degraded())?;
    Ok(dict.into())
}
