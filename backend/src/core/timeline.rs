//! Projection timeline
//!
//! The simulation projects metric values from a fixed base year to a
//! caller-selected target year. This module owns that bookkeeping and the
//! signed horizon math; it performs no range validation on the selected
//! year — out-of-range targets flow into the projection arithmetic
//! unchanged, as the callers expect.

use serde::{Deserialize, Serialize};

/// Base year and selected projection year for a simulation session.
///
/// # Example
/// ```
/// use health_policy_simulator_core_rs::Timeline;
///
/// let mut timeline = Timeline::new(2020, 2025);
/// assert_eq!(timeline.selected_year(), 2025);
///
/// timeline.select_year(2030);
/// assert_eq!(timeline.horizon(timeline.selected_year()), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Year the baseline values refer to.
    base_year: u16,

    /// Year `reset` returns the selection to.
    default_year: u16,

    /// Currently selected projection target year.
    selected_year: u16,
}

impl Timeline {
    /// Create a timeline with the selection at `default_year`.
    pub fn new(base_year: u16, default_year: u16) -> Self {
        Self {
            base_year,
            default_year,
            selected_year: default_year,
        }
    }

    /// Select a projection target year. Not validated; years before the
    /// base year produce negative horizons.
    pub fn select_year(&mut self, year: u16) {
        self.selected_year = year;
    }

    /// The year baselines refer to.
    pub fn base_year(&self) -> u16 {
        self.base_year
    }

    /// The currently selected projection target year.
    pub fn selected_year(&self) -> u16 {
        self.selected_year
    }

    /// Signed number of years between the base year and `year`.
    pub fn horizon(&self, year: u16) -> i32 {
        i32::from(year) - i32::from(self.base_year)
    }

    /// Return the selection to the default year.
    pub fn reset(&mut self) {
        self.selected_year = self.default_year;
    }
}
