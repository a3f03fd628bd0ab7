//! `vx-stats` — proportions and distributions over the allocation state.
//!
//! | Method | Ratio | Zero denominator |
//! |--------|-------|------------------|
//! | `overall_allocated_proportion` | assigned / people | `DivisionUndefined` |
//! | `allocated_proportion_by_interval` | assigned in bracket / people in bracket | `NaN` for that bracket |
//! | `allocated_distribution_across_intervals` | assigned in bracket / assigned | `DivisionUndefined` |
//!
//! The overall proportion is the people-weighted mean of the per-bracket
//! proportions.

pub mod error;
pub mod reporter;


pub use error::{StatsError, StatsResult};
pub use reporter::{IntervalTally, StatisticsReporter};
