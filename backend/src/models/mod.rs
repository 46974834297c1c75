//! Domain types: metrics, region inputs, session state, events.

pub mod event;
pub mod inputs;
pub mod metric;
pub mod state;

pub use event::{Event, EventLog, FallbackField};
pub use inputs::{RegionId, RegionInputs, DEFAULT_BASELINES, DEFAULT_GROWTH_RATES};
pub use metric::{Metric, METRIC_COUNT};
pub use state::{AppliedPolicy, DecisionState};
