//! Severity band classification
//!
//! Builds the [`EligibilityMatrix`] from per-metric growth rates and
//! nationwide ranks. Each band is a predicate over the (growth, rank) pair;
//! a metric can satisfy several bands at once, and the lowest satisfied band
//! is what ultimately gates policy strength.
//!
//! The thresholds are business parameters inherited from the upstream
//! analysis, kept as named constants rather than inlined literals so a
//! product decision to retune them touches exactly one place.

use crate::analysis::matrix::{EligibilityMatrix, BAND_COUNT};
use crate::models::metric::{Metric, METRIC_COUNT};

/// Growth rate (percent) at or above which growth counts as strong.
pub const STRONG_GROWTH_PCT: f64 = 5.0;

/// Growth rate (percent) below which a metric counts as declining.
pub const DECLINE_PCT: f64 = -2.0;

/// Growth rate (percent) below which the decline counts as severe.
pub const SEVERE_DECLINE_PCT: f64 = -5.0;

/// Rank at or above which a region counts as a front-runner for a metric.
pub const LEADING_RANK: u32 = 15;

/// Rank cutoff for the upper tier of regions.
pub const UPPER_TIER_RANK: u32 = 30;

/// Rank cutoff for the watchlist tier.
pub const WATCHLIST_RANK: u32 = 40;

/// Rank cutoff for the lower tier of regions.
pub const LOWER_TIER_RANK: u32 = 50;

/// Rank floor for the mid-table band (exclusive).
pub const MID_RANK_FLOOR: u32 = 20;

/// One severity band: an index, a short label, and its admission predicate.
///
/// Lower rank numbers mean a better nationwide position.
pub struct BandCriterion {
    /// Band index (0 = best standing, 5 = worst).
    pub band: usize,

    /// Short descriptive label for reporting.
    pub name: &'static str,

    /// Whether a (growth percent, rank) pair falls into this band.
    pub matches: fn(growth: f64, rank: u32) -> bool,
}

/// The six band criteria in band order.
///
/// Band 5 is deliberately broad: it catches the unremarkable middle of the
/// field that no sharper band claims, so well-formed inputs rarely produce
/// an empty row.
pub const BAND_CRITERIA: [BandCriterion; BAND_COUNT] = [
    BandCriterion {
        band: 0,
        name: "leading with strong growth",
        matches: |growth, rank| growth >= STRONG_GROWTH_PCT && rank <= LEADING_RANK,
    },
    BandCriterion {
        band: 1,
        name: "steady development",
        matches: |growth, rank| {
            growth >= 0.0 && growth < STRONG_GROWTH_PCT && rank <= UPPER_TIER_RANK
        },
    },
    BandCriterion {
        band: 2,
        name: "slowing or flat",
        matches: |growth, rank| growth >= DECLINE_PCT && growth < 0.0 && rank <= WATCHLIST_RANK,
    },
    BandCriterion {
        band: 3,
        name: "marked decline",
        matches: |growth, rank| {
            growth < DECLINE_PCT && rank > MID_RANK_FLOOR && rank <= LOWER_TIER_RANK
        },
    },
    BandCriterion {
        band: 4,
        name: "urgent attention",
        matches: |growth, rank| growth < SEVERE_DECLINE_PCT && rank > LOWER_TIER_RANK,
    },
    BandCriterion {
        band: 5,
        name: "mid-table, room to improve",
        matches: |growth, rank| {
            growth >= DECLINE_PCT
                && growth < STRONG_GROWTH_PCT
                && rank > LEADING_RANK
                && rank <= LOWER_TIER_RANK
        },
    },
];

/// Classify each metric's (growth, rank) pair into the band matrix.
///
/// A metric with a missing growth rate or rank gets an empty row: the engine
/// treats empty rows as ineligible, so absent analysis data locks policies
/// for that metric instead of mis-classifying it.
///
/// # Example
/// ```
/// use health_policy_simulator_core_rs::analysis::build_eligibility_matrix;
/// use health_policy_simulator_core_rs::Metric;
///
/// let growth = [Some(6.0), Some(2.0), None, Some(-3.0), Some(-6.0), Some(1.0)];
/// let ranks = [Some(8), Some(24), Some(3), Some(33), Some(60), Some(40)];
///
/// let matrix = build_eligibility_matrix(&growth, &ranks);
/// assert_eq!(matrix.min_band(Metric::Institutions), Some(0));
/// assert_eq!(matrix.min_band(Metric::Population), None);
/// ```
pub fn build_eligibility_matrix(
    growth_rates: &[Option<f64>; METRIC_COUNT],
    ranks: &[Option<u32>; METRIC_COUNT],
) -> EligibilityMatrix {
    let mut matrix = EligibilityMatrix::empty();

    for metric in Metric::ALL {
        let i = metric.index();
        let (growth, rank) = match (growth_rates[i], ranks[i]) {
            (Some(growth), Some(rank)) => (growth, rank),
            _ => continue,
        };

        for criterion in &BAND_CRITERIA {
            if (criterion.matches)(growth, rank) {
                matrix.set_active(metric, criterion.band);
            }
        }
    }

    matrix
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_some<T: Copy>(values: [T; METRIC_COUNT]) -> [Option<T>; METRIC_COUNT] {
        values.map(Some)
    }

    #[test]
    fn test_strong_growth_front_runner_hits_band_0() {
        let matrix = build_eligibility_matrix(
            &all_some([6.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
            &all_some([10, 1, 1, 1, 1, 1]),
        );

        assert!(matrix.is_active(Metric::Institutions, 0));
        assert_eq!(matrix.min_band(Metric::Institutions), Some(0));
    }

    #[test]
    fn test_mid_table_metric_hits_bands_1_and_5() {
        // 2% growth at rank 24: steady development, and also mid-table.
        let matrix = build_eligibility_matrix(
            &all_some([2.0; METRIC_COUNT]),
            &all_some([24; METRIC_COUNT]),
        );

        assert!(matrix.is_active(Metric::Beds, 1));
        assert!(matrix.is_active(Metric::Beds, 5));
        assert_eq!(matrix.min_band(Metric::Beds), Some(1));
    }

    #[test]
    fn test_severe_decline_trailing_rank_hits_band_4() {
        let matrix = build_eligibility_matrix(
            &all_some([-7.0; METRIC_COUNT]),
            &all_some([70; METRIC_COUNT]),
        );

        for metric in Metric::ALL {
            assert_eq!(matrix.min_band(metric), Some(4));
        }
    }

    #[test]
    fn test_marked_decline_band_requires_mid_rank() {
        // Growth below the decline threshold but rank too good for band 3.
        let matrix = build_eligibility_matrix(
            &all_some([-3.0; METRIC_COUNT]),
            &all_some([10; METRIC_COUNT]),
        );

        assert!(!matrix.is_active(Metric::Visits, 3));

        let matrix = build_eligibility_matrix(
            &all_some([-3.0; METRIC_COUNT]),
            &all_some([33; METRIC_COUNT]),
        );

        assert!(matrix.is_active(Metric::Visits, 3));
    }

    #[test]
    fn test_missing_data_leaves_row_empty() {
        let mut growth = all_some([2.0; METRIC_COUNT]);
        let mut ranks = all_some([24; METRIC_COUNT]);
        growth[Metric::Population.index()] = None;
        ranks[Metric::Personnel.index()] = None;

        let matrix = build_eligibility_matrix(&growth, &ranks);

        assert_eq!(matrix.min_band(Metric::Population), None);
        assert_eq!(matrix.min_band(Metric::Personnel), None);
        assert_eq!(matrix.min_band(Metric::Beds), Some(1));
    }
}
