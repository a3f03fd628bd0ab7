//! `vx-alloc` — quota-based allocation of people to hub/day slots.
//!
//! # Quota cascade (summary)
//!
//! ```text
//! for each hub (name order), for each day (Mon..Sun):
//!   total = hours[day] × hourly_capacity(hub)
//!   for bracket in oldest → youngest:
//!     book up to floor((total − booked) × 40%) unassigned people of bracket
//!   book up to (total − booked) more unassigned people of the oldest bracket
//! ```
//!
//! The engine mutates only the per-person booking held by
//! `vx_registry::Registry`; [`WeeklyPlan`] is derived from that state.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use vx_alloc::AllocationEngine;
//!
//! let engine = AllocationEngine::new();
//! engine.clear_allocation(&mut registry);
//! let plan = engine.allocate_week(&mut registry)?;
//! println!("{} people booked", plan.total());
//! ```

pub mod engine;
pub mod plan;
pub mod policy;

#[cfg(test)]
mod tests;

pub use engine::{AllocationEngine, BracketFill, DayOutcome};
pub use plan::{DayPlan, WeeklyPlan};
pub use policy::QuotaPolicy;
