//! `StatisticsReporter` — read-only ratios over the current allocation.

use std::collections::BTreeMap;

use tracing::debug;

use vx_core::AgeInterval;
use vx_registry::Registry;

use crate::{StatsError, StatsResult};

// ── IntervalTally ─────────────────────────────────────────────────────────────

/// Head count and bookings for one age bracket.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntervalTally {
    pub interval: AgeInterval,
    /// People whose current age falls in the bracket.
    pub people:   usize,
    /// Of those, how many hold a slot.
    pub assigned: usize,
}

impl IntervalTally {
    /// `assigned / people`; `NaN` for an empty bracket.
    pub fn proportion(&self) -> f64 {
        if self.people == 0 {
            f64::NAN
        } else {
            self.assigned as f64 / self.people as f64
        }
    }
}

// ── StatisticsReporter ────────────────────────────────────────────────────────

/// Computes campaign ratios from a borrowed [`Registry`].
///
/// Nothing is cached: every call reads the registry as it is now, and people
/// are classified by their current age under the current brackets.
#[derive(Copy, Clone, Debug)]
pub struct StatisticsReporter<'a> {
    registry: &'a Registry,
}

impl<'a> StatisticsReporter<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Fraction of all registered people who hold a slot.
    pub fn overall_allocated_proportion(&self) -> StatsResult<f64> {
        let people = self.registry.count_people();
        if people == 0 {
            return Err(StatsError::DivisionUndefined("overall allocated proportion"));
        }
        Ok(self.registry.assigned_count() as f64 / people as f64)
    }

    /// Bracket label → fraction of that bracket's people who hold a slot.
    ///
    /// Every bracket is present; an empty one maps to `NaN`.
    pub fn allocated_proportion_by_interval(&self) -> StatsResult<BTreeMap<String, f64>> {
        Ok(self
            .tallies()?
            .iter()
            .map(|t| (t.interval.label(), t.proportion()))
            .collect())
    }

    /// Bracket label → share of all booked people that fall in the bracket.
    ///
    /// The values sum to 1 (up to rounding).
    pub fn allocated_distribution_across_intervals(&self) -> StatsResult<BTreeMap<String, f64>> {
        let tallies = self.tallies()?;
        let assigned: usize = tallies.iter().map(|t| t.assigned).sum();
        if assigned == 0 {
            return Err(StatsError::DivisionUndefined("allocated distribution"));
        }
        Ok(tallies
            .iter()
            .map(|t| (t.interval.label(), t.assigned as f64 / assigned as f64))
            .collect())
    }

    /// One tally per bracket, youngest first.
    pub fn tallies(&self) -> StatsResult<Vec<IntervalTally>> {
        let intervals = self.registry.intervals()?;
        let year = self.registry.current_year();

        let mut tallies: Vec<IntervalTally> = intervals
            .ascending()
            .iter()
            .map(|&interval| IntervalTally { interval, people: 0, assigned: 0 })
            .collect();

        for person in self.registry.people() {
            let age = person.age(year);
            // Brackets start at 0 and tile the age axis, so exactly one matches.
            if let Some(t) = tallies.iter_mut().find(|t| t.interval.contains(age)) {
                t.people += 1;
                t.assigned += usize::from(person.is_assigned());
            }
        }
        debug!(brackets = tallies.len(), "interval tallies computed");
        Ok(tallies)
    }
}
