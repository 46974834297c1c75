//! Growth/rank analysis feeding the eligibility matrix.
//!
//! - **matrix**: the 6x6 severity classification consumed by the engine
//! - **bands**: criteria that classify (growth, rank) pairs into bands
//! - **ranking**: descending-rank helpers over per-region values
//!
//! The engine never calls into this module at decision time; callers run the
//! analysis (or fetch a pre-computed matrix) and hand the result to the data
//! loading boundary in [`crate::sources`].

pub mod bands;
pub mod matrix;
pub mod ranking;

pub use bands::{build_eligibility_matrix, BandCriterion, BAND_CRITERIA};
pub use matrix::{EligibilityMatrix, BAND_COUNT};
pub use ranking::{rank_of_value, value_and_rank, RankedValue, RegionValue};
