//! `vx-registry` — people, hubs, capacity, and CSV ingestion.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`person`]    | `Person`, `Slot` (a person's hub/day booking)             |
//! | [`hub`]       | `Hub`, `Staffing` (hourly capacity from staff counts)     |
//! | [`registry`]  | `Registry` — the owned campaign context                   |
//! | [`listener`]  | `LoadListener` trait, `NoopListener`, `CollectingListener`|
//! | [`loader`]    | `load_people_csv`, `load_people_reader`, `LoadSummary`    |
//! | [`error`]     | `LoadError`, `LoadResult<T>`                              |
//!
//! # Capacity model (summary)
//!
//! ```text
//! hourly_capacity = min(10 × doctors, 12 × nurses, 20 × other)
//! daily_slots     = weekly_hours[day] × hourly_capacity
//! ```

pub mod error;
pub mod hub;
pub mod listener;
pub mod loader;
pub mod person;
pub mod registry;


pub use error::{LoadError, LoadResult};
pub use hub::{Hub, Staffing};
pub use listener::{CollectingListener, LoadListener, NoopListener};
pub use loader::{LoadSummary, PEOPLE_HEADER, load_people_csv, load_people_reader};
pub use person::{Person, Slot};
pub use registry::Registry;
