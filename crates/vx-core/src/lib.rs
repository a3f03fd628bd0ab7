//! `vx-core` — foundational types for the `vaxplan` campaign planner.
//!
//! This crate is a dependency of every other `vx-*` crate.  It has no `vx-*`
//! dependencies and few external ones (`chrono` for the default current year,
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `PersonId`, `HubId`                                   |
//! | [`interval`]    | `AgeInterval`, `AgeIntervals` (the age partition)     |
//! | [`week`]        | `Weekday`, `WeeklyHours`, `TimeSlot`                  |
//! | [`config`]      | `CampaignConfig`                                      |
//! | [`error`]       | `CampaignError`, `CampaignResult`                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod interval;
pub mod week;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::CampaignConfig;
pub use error::{CampaignError, CampaignResult};
pub use ids::{HubId, PersonId};
pub use interval::{AgeInterval, AgeIntervals};
pub use week::{DAYS_PER_WEEK, MAX_DAILY_HOURS, TimeSlot, WeeklyHours, Weekday};
