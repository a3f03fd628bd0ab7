//! The `AllocationEngine` and its per-day quota cascade.

use tracing::{debug, info};

use vx_core::{AgeInterval, CampaignConfig, CampaignResult, HubId, PersonId, Weekday};
use vx_registry::{Registry, Slot};

use crate::{QuotaPolicy, WeeklyPlan};

// ── Outcome types ─────────────────────────────────────────────────────────────

/// What one bracket received during the cascade.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BracketFill {
    pub interval: AgeInterval,
    /// Slots offered: the policy share of what was still free.
    pub quota:    usize,
    /// People actually booked (less than `quota` when the bracket runs dry).
    pub filled:   usize,
}

/// Detailed result of one [`AllocationEngine::allocate_day_detailed`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayOutcome {
    pub hub:     HubId,
    pub day:     Weekday,
    /// Daily slot budget of the hub.
    pub slots:   usize,
    /// One entry per bracket, oldest first.
    pub cascade: Vec<BracketFill>,
    /// People booked by the final pass into the oldest bracket.
    pub mop_up:  usize,
    /// Everyone booked at this hub on this day after the call, ascending ids.
    pub people:  Vec<PersonId>,
}

impl DayOutcome {
    /// People booked by this call (cascade plus mop-up).
    pub fn newly_assigned(&self) -> usize {
        self.cascade.iter().map(|b| b.filled).sum::<usize>() + self.mop_up
    }
}

// ── AllocationEngine ──────────────────────────────────────────────────────────

/// Books people into hub/day slots, oldest age bracket first.
///
/// The engine holds only its policy.  All state lives in the [`Registry`]
/// passed to each call, and only the per-person allocation is mutated.
///
/// # Daily algorithm
///
/// For a hub with `total` slots on a day:
///
/// 1. Walk the brackets oldest-first.  Each bracket may take
///    `quota = policy.quota(total - booked_so_far)` people.
/// 2. Candidates are unassigned people whose *current* age falls in the
///    bracket, taken in ascending id order.
/// 3. Whatever is still free (`total - booked_so_far`) is offered once more to
///    the oldest bracket, regardless of which bracket left it unused.
///
/// People already booked anywhere are never picked again, so repeated calls
/// draw from a shrinking pool.  Clear the allocation first to reproduce a run.
#[derive(Copy, Clone, Debug, Default)]
pub struct AllocationEngine {
    policy: QuotaPolicy,
}

impl AllocationEngine {
    /// Engine using the 40% campaign rule.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: QuotaPolicy) -> Self {
        Self { policy }
    }

    pub fn from_config(config: &CampaignConfig) -> Self {
        Self::with_policy(QuotaPolicy::from(config))
    }

    pub fn policy(&self) -> QuotaPolicy {
        self.policy
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Allocate one hub's slots for one day.
    ///
    /// Returns the ids of everyone booked at `hub` on `day` after the call,
    /// whether booked now or by an earlier call.
    pub fn allocate_day(
        &self,
        registry: &mut Registry,
        hub:      &str,
        day:      Weekday,
    ) -> CampaignResult<Vec<PersonId>> {
        self.allocate_day_detailed(registry, hub, day).map(|outcome| outcome.people)
    }

    /// Like [`allocate_day`](Self::allocate_day) but also reports the quota
    /// and fill of every bracket.
    pub fn allocate_day_detailed(
        &self,
        registry: &mut Registry,
        hub:      &str,
        day:      Weekday,
    ) -> CampaignResult<DayOutcome> {
        // Everything that can fail on configuration is checked before the
        // first booking, so an error never leaves a half-filled day behind.
        let total = registry.daily_available_slots(hub, day)? as usize;
        let intervals = registry.intervals()?.clone();
        let slot = Slot::new(HubId::from(hub), day);

        let mut booked = 0;
        let mut cascade = Vec::with_capacity(intervals.len());

        for interval in intervals.by_descending_start() {
            let quota = self.policy.quota(total - booked);
            let filled = book(registry, interval, quota, &slot)?;
            booked += filled;
            debug!(%hub, %day, bracket = %interval, quota, filled, "bracket filled");
            cascade.push(BracketFill { interval, quota, filled });
        }

        let oldest = intervals.oldest();
        let mop_up = book(registry, oldest, total - booked, &slot)?;
        booked += mop_up;
        debug!(%hub, %day, bracket = %oldest, mop_up, booked, total, "day allocated");

        Ok(DayOutcome {
            hub: slot.hub,
            day,
            slots: total,
            cascade,
            mop_up,
            people: registry.allocated_to(hub, day),
        })
    }

    /// Allocate every hub (in name order) for every day (Monday first).
    ///
    /// The iteration order is fixed, so the same registry state followed by
    /// [`clear_allocation`](Self::clear_allocation) and `allocate_week`
    /// always yields the same plan.
    ///
    /// Every hub is checked before the first booking: if any hub has no
    /// staff (or intervals or hours are missing) the call fails with
    /// `CampaignError::NotConfigured` and nobody is booked.
    pub fn allocate_week(&self, registry: &mut Registry) -> CampaignResult<WeeklyPlan> {
        let hubs: Vec<HubId> = registry.hubs().cloned().collect();
        registry.intervals()?;
        for hub in &hubs {
            registry.daily_available_slots(hub.as_str(), Weekday::Monday)?;
        }

        for hub in &hubs {
            for day in Weekday::ALL {
                self.allocate_day_detailed(registry, hub.as_str(), day)?;
            }
        }

        let plan = WeeklyPlan::from_registry(registry);
        info!(
            hubs = hubs.len(),
            people = registry.count_people(),
            booked = plan.total(),
            "week allocated"
        );
        Ok(plan)
    }

    /// Reset every person to unassigned.
    pub fn clear_allocation(&self, registry: &mut Registry) {
        registry.clear_allocation();
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Book up to `limit` unassigned members of `interval` into `slot`.
fn book(
    registry: &mut Registry,
    interval: AgeInterval,
    limit:    usize,
    slot:     &Slot,
) -> CampaignResult<usize> {
    if limit == 0 {
        return Ok(0);
    }
    let picked = registry.unassigned_in(interval, limit)?;
    for id in &picked {
        registry.assign(id.as_str(), slot.clone())?;
    }
    Ok(picked.len())
}
