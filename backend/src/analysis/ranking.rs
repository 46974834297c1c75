//! Nationwide ranking helpers
//!
//! Ranks a region's metric value against every other region's value for the
//! same metric. Rank 1 is the largest value; ties share the rank of the
//! first equal entry. These ranks feed [`super::bands`] alongside growth
//! rates to classify metrics into severity bands.

use crate::models::inputs::RegionId;
use serde::{Deserialize, Serialize};

/// One region's value for a metric, as delivered by upstream feeds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionValue {
    pub id: RegionId,
    pub value: f64,
}

/// A region's value together with its descending rank.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedValue {
    pub id: RegionId,
    pub value: f64,
    pub rank: u32,
}

/// Find `id`'s value in `data` and its descending rank.
///
/// Returns `None` when the data set is empty or the id is absent.
///
/// # Example
/// ```
/// use health_policy_simulator_core_rs::analysis::{value_and_rank, RegionValue};
/// use health_policy_simulator_core_rs::RegionId;
///
/// let data = [
///     RegionValue { id: RegionId(1), value: 40.0 },
///     RegionValue { id: RegionId(2), value: 90.0 },
///     RegionValue { id: RegionId(3), value: 70.0 },
/// ];
///
/// let ranked = value_and_rank(&data, RegionId(3)).unwrap();
/// assert_eq!(ranked.rank, 2);
/// ```
pub fn value_and_rank(data: &[RegionValue], id: RegionId) -> Option<RankedValue> {
    let target = data.iter().find(|item| item.id == id)?;
    Some(RankedValue {
        id,
        value: target.value,
        rank: descending_rank(data, target.value),
    })
}

/// Insertion rank a hypothetical `value` would take among `data`.
///
/// Returns `None` when the data set is empty (no field to rank against).
pub fn rank_of_value(data: &[RegionValue], value: f64) -> Option<u32> {
    if data.is_empty() {
        return None;
    }
    Some(descending_rank(data, value))
}

/// Rank = 1 + number of strictly greater values.
///
/// Equivalent to scanning the descending sort for the first slot the value
/// fits into, without materializing the sort.
fn descending_rank(data: &[RegionValue], value: f64) -> u32 {
    let greater = data.iter().filter(|item| item.value > value).count();
    greater as u32 + 1
}
