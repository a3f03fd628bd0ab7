//! `Person` and its allocation state.

use std::fmt;

use vx_core::{HubId, PersonId, Weekday};

/// Where and when a person is booked.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slot {
    pub hub: HubId,
    pub day: Weekday,
}

impl Slot {
    pub fn new(hub: HubId, day: Weekday) -> Self {
        Self { hub, day }
    }

    #[inline]
    pub fn is_at(&self, hub: &str, day: Weekday) -> bool {
        self.day == day && self.hub.as_str() == hub
    }
}

/// One registered person.
///
/// Structural fields (id, names, birth year) are fixed at registration.  The
/// only mutable state is the allocation, stored as a single `Option<Slot>` so
/// that "assigned" always implies both a hub and a day.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    id:         PersonId,
    first:      String,
    last:       String,
    birth_year: i32,
    slot:       Option<Slot>,
}

impl Person {
    pub fn new(
        id:         PersonId,
        first:      impl Into<String>,
        last:       impl Into<String>,
        birth_year: i32,
    ) -> Self {
        Self {
            id,
            first: first.into(),
            last: last.into(),
            birth_year,
            slot: None,
        }
    }

    pub fn id(&self) -> &PersonId {
        &self.id
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn last(&self) -> &str {
        &self.last
    }

    pub fn birth_year(&self) -> i32 {
        self.birth_year
    }

    /// Age in whole years at `current_year`.  A birth year in the future
    /// yields 0.
    pub fn age(&self, current_year: i32) -> u32 {
        u32::try_from(current_year.saturating_sub(self.birth_year)).unwrap_or(0)
    }

    // ── Allocation state ──────────────────────────────────────────────────

    #[inline]
    pub fn is_assigned(&self) -> bool {
        self.slot.is_some()
    }

    pub fn slot(&self) -> Option<&Slot> {
        self.slot.as_ref()
    }

    pub fn hub(&self) -> Option<&HubId> {
        self.slot.as_ref().map(|s| &s.hub)
    }

    pub fn day(&self) -> Option<Weekday> {
        self.slot.as_ref().map(|s| s.day)
    }

    pub(crate) fn assign(&mut self, slot: Slot) {
        self.slot = Some(slot);
    }

    pub(crate) fn clear(&mut self) {
        self.slot = None;
    }
}

impl fmt::Display for Person {
    /// `"id, last, first"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.id, self.last, self.first)
    }
}
