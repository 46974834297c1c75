//! Metric model
//!
//! The six regional healthcare indicators tracked by the simulator.
//! Every per-metric vector in the crate is a fixed-size array indexed by
//! `Metric::index()`, so the ordering here is part of the public contract
//! and must match the upstream data feeds (0 = institutions .. 5 = visits).

use serde::{Deserialize, Serialize};

/// Number of tracked metrics. All per-metric vectors have this length.
pub const METRIC_COUNT: usize = 6;

/// One of the six tracked healthcare indicators for a region.
///
/// # Example
/// ```
/// use health_policy_simulator_core_rs::Metric;
///
/// assert_eq!(Metric::Population.index(), 2);
/// assert_eq!(Metric::from_index(2), Some(Metric::Population));
/// assert_eq!(Metric::from_index(6), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    /// Number of medical institutions
    Institutions,

    /// Number of hospital beds
    Beds,

    /// Resident population
    Population,

    /// Total medical cost
    MedicalCost,

    /// Number of medical personnel
    Personnel,

    /// Number of outpatient visits
    Visits,
}

impl Metric {
    /// All metrics in index order.
    pub const ALL: [Metric; METRIC_COUNT] = [
        Metric::Institutions,
        Metric::Beds,
        Metric::Population,
        Metric::MedicalCost,
        Metric::Personnel,
        Metric::Visits,
    ];

    /// Stable index of this metric (0-5), used to address per-metric vectors.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Metric for a stable index, or `None` if out of range.
    pub fn from_index(index: usize) -> Option<Metric> {
        Metric::ALL.get(index).copied()
    }

    /// Human-readable display label.
    pub fn label(self) -> &'static str {
        match self {
            Metric::Institutions => "Medical institutions",
            Metric::Beds => "Hospital beds",
            Metric::Population => "Population",
            Metric::MedicalCost => "Medical cost",
            Metric::Personnel => "Medical personnel",
            Metric::Visits => "Outpatient visits",
        }
    }
}
