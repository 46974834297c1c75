//! Health Policy Simulator Core - Rust Engine
//!
//! Budget-allocation "what-if" engine for regional healthcare policy:
//! given a region's cost floor, metric baselines, growth rates and severity
//! classification, it gates which interventions a decision-maker may fund,
//! applies them against a budget, and projects the six tracked metrics
//! under original versus adjusted growth.
//!
//! # Architecture
//!
//! - **core**: projection timeline (base year, selected target year)
//! - **models**: domain types (Metric, RegionInputs, DecisionState, Event)
//! - **catalog**: the immutable 6x6 policy option table
//! - **analysis**: severity bands, ranking, and the eligibility matrix
//! - **engine**: the decision engine (budget, eligibility, apply, project)
//! - **sources**: pre-fetched region data boundary and the load path
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 (minor currency units)
//! 2. The engine is synchronous and performs no I/O; data arrives
//!    pre-fetched through the `sources` boundary
//! 3. Expected failures reject with typed errors and mutate nothing;
//!    every state change and rejection is recorded in the event log

// Module declarations
pub mod analysis;
pub mod catalog;
pub mod core;
pub mod engine;
pub mod models;
pub mod sources;

// Re-exports for convenience
pub use catalog::{PolicyCatalog, PolicyOption, POLICY_TIERS};
pub use crate::core::timeline::Timeline;
pub use engine::{
    BudgetError, DecisionEngine, EngineConfig, PolicyRejection, ProjectionComparison,
};
pub use models::{
    event::{Event, EventLog, FallbackField},
    inputs::{RegionId, RegionInputs, DEFAULT_BASELINES, DEFAULT_GROWTH_RATES},
    metric::{Metric, METRIC_COUNT},
    state::{AppliedPolicy, DecisionState},
};
pub use sources::{
    load_region, CostSeries, LoadError, LoadReport, RegionDataSource, RegionRecord,
    SourceError, StaticRegionData,
};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn health_policy_simulator_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::engine::PyDecisionEngine>()?;
    Ok(())
}
