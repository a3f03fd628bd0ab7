//! `WeeklyPlan` — the week's bookings, derived from per-person state.
//!
//! The plan is never the source of truth.  It is rebuilt from the `Slot`
//! stored on each `Person`, so it cannot disagree with the registry.

use std::collections::BTreeMap;

use vx_core::{DAYS_PER_WEEK, HubId, PersonId, Weekday};
use vx_registry::Registry;

/// Hub name → ids booked there, for one day.  Ids are in ascending order.
pub type DayPlan = BTreeMap<HubId, Vec<PersonId>>;

/// Bookings for Monday..Sunday.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeeklyPlan {
    days: [DayPlan; DAYS_PER_WEEK],
}

impl WeeklyPlan {
    /// Snapshot the current allocation state of `registry`.
    ///
    /// Every defined hub appears on every day, with an empty list when nobody
    /// is booked there.
    pub fn from_registry(registry: &Registry) -> Self {
        let empty: DayPlan = registry.hubs().map(|h| (h.clone(), Vec::new())).collect();
        let mut days: [DayPlan; DAYS_PER_WEEK] = std::array::from_fn(|_| empty.clone());

        for person in registry.people() {
            if let Some(slot) = person.slot() {
                days[slot.day.index()]
                    .entry(slot.hub.clone())
                    .or_default()
                    .push(person.id().clone());
            }
        }
        Self { days }
    }

    pub fn day(&self, day: Weekday) -> &DayPlan {
        &self.days[day.index()]
    }

    /// Ids booked at `hub` on `day`; empty for unknown hubs.
    pub fn at(&self, hub: &str, day: Weekday) -> &[PersonId] {
        self.days[day.index()].get(hub).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `(day, plan)` pairs, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &DayPlan)> + '_ {
        Weekday::ALL.into_iter().zip(self.days.iter())
    }

    /// Total bookings across the week.
    pub fn total(&self) -> usize {
        self.days.iter().flat_map(|d| d.values()).map(Vec::len).sum()
    }

    /// Bookings per day, Monday first.
    pub fn daily_totals(&self) -> [usize; DAYS_PER_WEEK] {
        self.days.each_ref().map(|d| d.values().map(Vec::len).sum())
    }
}
