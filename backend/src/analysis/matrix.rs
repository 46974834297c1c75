//! Eligibility matrix
//!
//! A 6x6 binary classification of each metric across the six severity bands
//! (band 0 = best standing, band 5 = worst). Row `i` holds metric `i`'s
//! active bands; the lowest active band index (`min_band`) drives the policy
//! unlock ladder in the engine.
//!
//! The matrix is normally produced by [`crate::analysis::bands`] from
//! growth-rate and rank data, or supplied pre-computed by an upstream
//! analysis service.

use crate::models::metric::{Metric, METRIC_COUNT};
use serde::{Deserialize, Serialize};

/// Number of severity bands. Rows and columns are both this wide.
pub const BAND_COUNT: usize = 6;

/// Fallback matrix used when the upstream analysis is unavailable.
///
/// Matches the documented defaults of the upstream dashboards: each metric
/// sits in exactly one mid/low band, which unlocks a moderate policy range.
const DEFAULT_ROWS: [[u8; BAND_COUNT]; METRIC_COUNT] = [
    [0, 1, 0, 0, 0, 0],
    [1, 0, 0, 0, 0, 0],
    [0, 0, 1, 0, 0, 0],
    [1, 0, 0, 0, 0, 0],
    [0, 1, 0, 0, 0, 0],
    [0, 1, 0, 0, 0, 0],
];

/// 6x6 binary severity classification of the six metrics.
///
/// # Example
/// ```
/// use health_policy_simulator_core_rs::analysis::EligibilityMatrix;
/// use health_policy_simulator_core_rs::Metric;
///
/// let matrix = EligibilityMatrix::default();
/// assert_eq!(matrix.min_band(Metric::Beds), Some(0));
/// assert_eq!(matrix.min_band(Metric::Population), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityMatrix {
    rows: [[bool; BAND_COUNT]; METRIC_COUNT],
}

impl EligibilityMatrix {
    /// Matrix with no active bands anywhere.
    pub fn empty() -> Self {
        Self {
            rows: [[false; BAND_COUNT]; METRIC_COUNT],
        }
    }

    /// Build a matrix from a 0/1 grid as delivered by upstream feeds.
    ///
    /// Any non-zero cell counts as active.
    pub fn from_rows(rows: [[u8; BAND_COUNT]; METRIC_COUNT]) -> Self {
        let mut matrix = Self::empty();
        for (i, row) in rows.iter().enumerate() {
            for (j, cell) in row.iter().enumerate() {
                matrix.rows[i][j] = *cell != 0;
            }
        }
        matrix
    }

    /// Whether `band` is active for `metric`.
    pub fn is_active(&self, metric: Metric, band: usize) -> bool {
        band < BAND_COUNT && self.rows[metric.index()][band]
    }

    /// Mark `band` active for `metric`.
    ///
    /// # Panics
    ///
    /// Panics if `band >= BAND_COUNT`.
    pub fn set_active(&mut self, metric: Metric, band: usize) {
        assert!(band < BAND_COUNT, "band {} out of range", band);
        self.rows[metric.index()][band] = true;
    }

    /// Lowest active band index for `metric`, scanning left to right.
    ///
    /// Returns `None` when the row has no active band (malformed upstream
    /// data; the engine treats this as ineligible rather than failing).
    pub fn min_band(&self, metric: Metric) -> Option<usize> {
        self.rows[metric.index()].iter().position(|active| *active)
    }

    /// The raw rows, indexed `[metric][band]`.
    pub fn rows(&self) -> &[[bool; BAND_COUNT]; METRIC_COUNT] {
        &self.rows
    }
}

impl Default for EligibilityMatrix {
    fn default() -> Self {
        Self::from_rows(DEFAULT_ROWS)
    }
}
