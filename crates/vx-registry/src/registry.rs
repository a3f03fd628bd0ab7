//! The `Registry`: the single owned context for a campaign.
//!
//! It owns every `Person` and `Hub`, the age partition, and the weekly
//! working hours.  There is no global state; the allocation engine and the
//! statistics reporter borrow a `Registry` explicitly (`&mut` to allocate,
//! `&` to report), so the borrow checker guarantees a single writer.
//!
//! People and hubs live in `BTreeMap`s keyed by id/name.  Every iteration
//! (candidate selection, week allocation, reports) therefore runs in
//! ascending key order, which is what makes allocation reproducible.

use std::collections::BTreeMap;

use tracing::debug;

use vx_core::{
    AgeInterval, AgeIntervals, CampaignConfig, CampaignError, CampaignResult, DAYS_PER_WEEK,
    HubId, PersonId, TimeSlot, WeeklyHours, Weekday,
};

use crate::{Hub, Person, Slot, Staffing};

#[derive(Debug)]
pub struct Registry {
    config:    CampaignConfig,
    people:    BTreeMap<PersonId, Person>,
    hubs:      BTreeMap<HubId, Hub>,
    intervals: Option<AgeIntervals>,
    hours:     Option<WeeklyHours>,
}

impl Registry {
    /// Empty registry computing ages against `current_year`, with default
    /// campaign rules.
    pub fn new(current_year: i32) -> Self {
        Self::with_config(CampaignConfig::for_year(current_year))
    }

    pub fn with_config(config: CampaignConfig) -> Self {
        Self {
            config,
            people:    BTreeMap::new(),
            hubs:      BTreeMap::new(),
            intervals: None,
            hours:     None,
        }
    }

    pub fn config(&self) -> &CampaignConfig {
        &self.config
    }

    pub fn current_year(&self) -> i32 {
        self.config.current_year
    }

    // ── People ────────────────────────────────────────────────────────────

    /// Register a person.  Returns `false` (and changes nothing) if `id` is
    /// already registered.
    pub fn add_person(
        &mut self,
        first:      &str,
        last:       &str,
        id:         &str,
        birth_year: i32,
    ) -> bool {
        if self.people.contains_key(id) {
            debug!(id, "duplicate person ignored");
            return false;
        }
        let id = PersonId::from(id);
        self.people.insert(id.clone(), Person::new(id, first, last, birth_year));
        true
    }

    pub fn count_people(&self) -> usize {
        self.people.len()
    }

    pub fn person(&self, id: &str) -> CampaignResult<&Person> {
        self.people
            .get(id)
            .ok_or_else(|| CampaignError::NotConfigured(format!("unknown person {id:?}")))
    }

    /// `"id, last, first"` for the given person.
    pub fn person_summary(&self, id: &str) -> CampaignResult<String> {
        self.person(id).map(ToString::to_string)
    }

    pub fn age(&self, id: &str) -> CampaignResult<u32> {
        self.person(id).map(|p| p.age(self.config.current_year))
    }

    /// All people in ascending id order.
    pub fn people(&self) -> impl Iterator<Item = &Person> + '_ {
        self.people.values()
    }

    // ── Age intervals ─────────────────────────────────────────────────────

    /// Replace the age partition.  See [`AgeIntervals::from_breaks`].
    pub fn set_age_intervals(&mut self, breaks: &[u32]) -> CampaignResult<()> {
        self.intervals = Some(AgeIntervals::from_breaks(breaks)?);
        Ok(())
    }

    pub fn intervals(&self) -> CampaignResult<&AgeIntervals> {
        self.intervals
            .as_ref()
            .ok_or_else(|| CampaignError::NotConfigured("age intervals".into()))
    }

    /// Interval labels in ascending order; empty before intervals are set.
    pub fn interval_labels(&self) -> Vec<String> {
        self.intervals.as_ref().map(AgeIntervals::labels).unwrap_or_default()
    }

    /// The bracket a person's *current* age falls into.
    pub fn interval_of(&self, person: &Person) -> CampaignResult<AgeInterval> {
        Ok(self.intervals()?.classify(person.age(self.config.current_year)))
    }

    /// Ids of everyone whose age falls into the interval labelled `label`.
    ///
    /// An unknown label matches nobody.
    pub fn people_in_interval(&self, label: &str) -> CampaignResult<Vec<PersonId>> {
        let intervals = self.intervals()?;
        let Some(bracket) = intervals.find_label(label) else {
            return Ok(Vec::new());
        };
        Ok(self
            .people
            .values()
            .filter(|p| bracket.contains(p.age(self.config.current_year)))
            .map(|p| p.id().clone())
            .collect())
    }

    // ── Hubs ──────────────────────────────────────────────────────────────

    pub fn define_hub(&mut self, name: &str) -> CampaignResult<()> {
        if self.hubs.contains_key(name) {
            return Err(CampaignError::DuplicateKey { kind: "hub", key: name.to_owned() });
        }
        let id = HubId::from(name);
        self.hubs.insert(id.clone(), Hub::new(id));
        Ok(())
    }

    /// Hub names in lexicographic order.
    pub fn hubs(&self) -> impl Iterator<Item = &HubId> + '_ {
        self.hubs.keys()
    }

    pub fn hub(&self, name: &str) -> CampaignResult<&Hub> {
        self.hubs
            .get(name)
            .ok_or_else(|| CampaignError::NotConfigured(format!("unknown hub {name:?}")))
    }

    /// Set the staff of an existing hub.  Every count must be at least 1.
    pub fn set_staff(
        &mut self,
        name:    &str,
        doctors: u32,
        nurses:  u32,
        other:   u32,
    ) -> CampaignResult<()> {
        if doctors < 1 || nurses < 1 || other < 1 {
            return Err(CampaignError::Config(format!(
                "hub {name:?} needs at least one of each staff role \
                 (doctors={doctors}, nurses={nurses}, other={other})"
            )));
        }
        let hub = self
            .hubs
            .get_mut(name)
            .ok_or_else(|| CampaignError::Config(format!("unknown hub {name:?}")))?;
        hub.set_staffing(Staffing { doctors, nurses, other });
        Ok(())
    }

    /// Hourly capacity of a staffed hub.
    ///
    /// Unknown hubs and hubs whose capacity is 0 (not staffed yet) both fail
    /// with [`CampaignError::NotConfigured`].
    pub fn hourly_capacity(&self, name: &str) -> CampaignResult<u32> {
        match self.hub(name)?.hourly_capacity() {
            0 => Err(CampaignError::NotConfigured(format!("hub {name:?} has no staff"))),
            capacity => Ok(capacity),
        }
    }

    // ── Working hours ─────────────────────────────────────────────────────

    /// Set the working hours for Monday..Sunday.  See [`WeeklyHours::new`].
    pub fn set_weekly_hours(&mut self, hours: &[u32]) -> CampaignResult<()> {
        self.hours = Some(WeeklyHours::new(hours)?);
        Ok(())
    }

    pub fn weekly_hours(&self) -> CampaignResult<&WeeklyHours> {
        self.hours
            .as_ref()
            .ok_or_else(|| CampaignError::NotConfigured("weekly working hours".into()))
    }

    /// Appointment start times for each day, Monday first.
    pub fn time_slots(&self) -> CampaignResult<Vec<Vec<TimeSlot>>> {
        Ok(self
            .weekly_hours()?
            .week_time_slots(self.config.first_slot_hour, self.config.slot_minutes))
    }

    /// `hours[day] × hourly_capacity(hub)`.
    pub fn daily_available_slots(&self, hub: &str, day: Weekday) -> CampaignResult<u32> {
        let hours = self.weekly_hours()?.hours(day);
        Ok(hours.saturating_mul(self.hourly_capacity(hub)?))
    }

    /// Daily slot counts for every hub, Monday first.  Unstaffed hubs report
    /// zero slots rather than an error.
    pub fn weekly_available(&self) -> CampaignResult<BTreeMap<HubId, [u32; DAYS_PER_WEEK]>> {
        let hours = *self.weekly_hours()?;
        Ok(self
            .hubs
            .values()
            .map(|hub| {
                let capacity = hub.hourly_capacity();
                let slots = Weekday::ALL.map(|day| hours.hours(day).saturating_mul(capacity));
                (hub.name().clone(), slots)
            })
            .collect())
    }

    // ── Allocation state ──────────────────────────────────────────────────

    /// Up to `limit` unassigned people whose current age falls into
    /// `bracket`, in ascending id order.
    pub fn unassigned_in(
        &self,
        bracket: AgeInterval,
        limit:   usize,
    ) -> CampaignResult<Vec<PersonId>> {
        let intervals = self.intervals()?;
        let year = self.config.current_year;
        Ok(self
            .people
            .values()
            .filter(|p| !p.is_assigned() && intervals.classify(p.age(year)) == bracket)
            .take(limit)
            .map(|p| p.id().clone())
            .collect())
    }

    /// Book a person into `slot`.
    ///
    /// Returns `Ok(false)` and leaves the existing booking in place if the
    /// person is already assigned; allocations are exclusive until cleared.
    pub fn assign(&mut self, id: &str, slot: Slot) -> CampaignResult<bool> {
        let person = self
            .people
            .get_mut(id)
            .ok_or_else(|| CampaignError::NotConfigured(format!("unknown person {id:?}")))?;
        if person.is_assigned() {
            return Ok(false);
        }
        person.assign(slot);
        Ok(true)
    }

    /// Reset every person to unassigned.  Nothing else changes.
    pub fn clear_allocation(&mut self) {
        for person in self.people.values_mut() {
            person.clear();
        }
    }

    /// Ids of the people booked at `hub` on `day`, in ascending id order.
    pub fn allocated_to(&self, hub: &str, day: Weekday) -> Vec<PersonId> {
        self.people
            .values()
            .filter(|p| p.slot().is_some_and(|s| s.is_at(hub, day)))
            .map(|p| p.id().clone())
            .collect()
    }

    pub fn assigned_count(&self) -> usize {
        self.people.values().filter(|p| p.is_assigned()).count()
    }
}
