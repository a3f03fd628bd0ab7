//! Unit tests for vx-alloc.

use vx_core::{CampaignError, Weekday};
use vx_registry::Registry;

use crate::{AllocationEngine, QuotaPolicy, WeeklyPlan};

// ── Helpers ───────────────────────────────────────────────────────────────────

const YEAR: i32 = 2021;

/// Register `count` people aged `age`, ids `{prefix}000`, `{prefix}001`, …
fn add_cohort(reg: &mut Registry, prefix: &str, count: usize, age: i32) {
    for i in 0..count {
        let id = format!("{prefix}{i:03}");
        assert!(reg.add_person("First", "Last", &id, YEAR - age));
    }
}

/// One hub with 10 slots/hour (1 doctor) open `hours` per day.
fn one_hub(hours: [u32; 7]) -> Registry {
    let mut reg = Registry::new(YEAR);
    reg.define_hub("Hub").unwrap();
    reg.set_staff("Hub", 1, 1, 1).unwrap();
    reg.set_weekly_hours(&hours).unwrap();
    reg
}

/// Booked people per bracket label.
fn booked_by_label(reg: &Registry) -> Vec<(String, usize)> {
    reg.intervals()
        .unwrap()
        .ascending()
        .iter()
        .map(|bracket| {
            let booked = reg
                .people()
                .filter(|p| p.is_assigned() && bracket.contains(p.age(YEAR)))
                .count();
            (bracket.label(), booked)
        })
        .collect()
}

/// The quota scenario: brackets [0,40) [40,60) [60,+), 100 Monday slots,
/// 50 people each aged 70, 45 and 20.
fn quota_scenario() -> Registry {
    let mut reg = one_hub([10, 0, 0, 0, 0, 0, 0]);
    reg.set_age_intervals(&[40, 60]).unwrap();
    add_cohort(&mut reg, "OLD", 50, 70);
    add_cohort(&mut reg, "MID", 50, 45);
    add_cohort(&mut reg, "YNG", 50, 20);
    reg
}

// ── QuotaPolicy ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod policy {
    use super::*;

    #[test]
    fn forty_percent_floor() {
        let p = QuotaPolicy::default();
        assert_eq!(p.percent(), 40);
        assert_eq!(p.quota(100), 40);
        assert_eq!(p.quota(60), 24);
        assert_eq!(p.quota(36), 14);
        assert_eq!(p.quota(2), 0);
        assert_eq!(p.quota(0), 0);
    }

    #[test]
    fn percent_clamped() {
        let p = QuotaPolicy::new(250);
        assert_eq!(p.percent(), 100);
        assert_eq!(p.quota(7), 7);
    }
}

// ── allocate_day ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod allocate_day {
    use super::*;

    #[test]
    fn quota_cascade_then_mop_up() {
        let mut reg = quota_scenario();
        let engine = AllocationEngine::new();
        let outcome = engine
            .allocate_day_detailed(&mut reg, "Hub", Weekday::Monday)
            .unwrap();

        assert_eq!(outcome.slots, 100);
        let steps: Vec<(String, usize, usize)> = outcome
            .cascade
            .iter()
            .map(|b| (b.interval.label(), b.quota, b.filled))
            .collect();
        assert_eq!(
            steps,
            [
                ("[60,+)".to_string(), 40, 40),
                ("[40,60)".to_string(), 24, 24),
                ("[0,40)".to_string(), 14, 14),
            ]
        );
        // 22 slots left; only 10 people remain in [60,+).
        assert_eq!(outcome.mop_up, 10);
        assert_eq!(outcome.newly_assigned(), 88);
        assert_eq!(outcome.people.len(), 88);

        assert_eq!(
            booked_by_label(&reg),
            [
                ("[0,40)".to_string(), 14),
                ("[40,60)".to_string(), 24),
                ("[60,+)".to_string(), 50),
            ]
        );
    }

    #[test]
    fn mop_up_targets_oldest_bracket_only() {
        // The young bracket leaves no slack; the old one runs dry at once.
        // Leftover slots are offered only to the (empty) oldest bracket.
        let mut reg = one_hub([10, 0, 0, 0, 0, 0, 0]);
        reg.set_age_intervals(&[40]).unwrap();
        add_cohort(&mut reg, "OLD", 5, 70);
        add_cohort(&mut reg, "YNG", 100, 20);

        let outcome = AllocationEngine::new()
            .allocate_day_detailed(&mut reg, "Hub", Weekday::Monday)
            .unwrap();

        assert_eq!(outcome.cascade[0].quota, 40);
        assert_eq!(outcome.cascade[0].filled, 5);
        assert_eq!(outcome.cascade[1].quota, 38); // floor(95 × 0.4)
        assert_eq!(outcome.cascade[1].filled, 38);
        assert_eq!(outcome.mop_up, 0);
        assert_eq!(reg.assigned_count(), 43);
    }

    #[test]
    fn candidates_taken_in_id_order() {
        let mut reg = one_hub([1, 0, 0, 0, 0, 0, 0]); // 10 slots
        reg.set_age_intervals(&[60]).unwrap();
        add_cohort(&mut reg, "P", 20, 70);

        let ids = AllocationEngine::new()
            .allocate_day(&mut reg, "Hub", Weekday::Monday)
            .unwrap();
        // Cascade: 4 (40% of 10), then [0,60) empty, then mop-up of 6.
        let ids: Vec<&str> = ids.iter().map(|id| id.as_str()).collect();
        assert_eq!(
            ids,
            ["P000", "P001", "P002", "P003", "P004", "P005", "P006", "P007", "P008", "P009"]
        );
    }

    #[test]
    fn repeated_call_draws_from_remaining_pool() {
        let mut reg = one_hub([1, 0, 0, 0, 0, 0, 0]); // 10 slots
        reg.set_age_intervals(&[60]).unwrap();
        add_cohort(&mut reg, "P", 15, 70);
        let engine = AllocationEngine::new();

        let first = engine.allocate_day(&mut reg, "Hub", Weekday::Monday).unwrap();
        assert_eq!(first.len(), 10);

        // Second call books the 5 left; result lists everyone at (Hub, Mon).
        let outcome = engine
            .allocate_day_detailed(&mut reg, "Hub", Weekday::Monday)
            .unwrap();
        assert_eq!(outcome.newly_assigned(), 5);
        assert_eq!(outcome.people.len(), 15);
    }

    #[test]
    fn assigned_people_are_not_moved() {
        let mut reg = one_hub([1, 1, 0, 0, 0, 0, 0]);
        reg.set_age_intervals(&[60]).unwrap();
        add_cohort(&mut reg, "P", 10, 70);
        let engine = AllocationEngine::new();

        engine.allocate_day(&mut reg, "Hub", Weekday::Monday).unwrap();
        let tuesday = engine.allocate_day(&mut reg, "Hub", Weekday::Tuesday).unwrap();
        assert!(tuesday.is_empty());
        assert!(reg.people().all(|p| p.day() == Some(Weekday::Monday)));
    }

    #[test]
    fn zero_hour_day_books_nobody() {
        let mut reg = quota_scenario();
        let outcome = AllocationEngine::new()
            .allocate_day_detailed(&mut reg, "Hub", Weekday::Sunday)
            .unwrap();
        assert_eq!(outcome.slots, 0);
        assert_eq!(outcome.newly_assigned(), 0);
        assert_eq!(reg.assigned_count(), 0);
    }

    #[test]
    fn classification_follows_current_intervals() {
        let mut reg = one_hub([1, 0, 0, 0, 0, 0, 0]); // 10 slots
        add_cohort(&mut reg, "A", 10, 50);
        add_cohort(&mut reg, "B", 6, 70);
        let engine = AllocationEngine::new();
        let booked = |reg: &Registry, prefix: char| {
            reg.people()
                .filter(|p| p.id().as_str().starts_with(prefix) && p.is_assigned())
                .count()
        };

        // With a single break at 40 both cohorts share the oldest bracket,
        // and the lower ids (the A cohort) take all ten slots.
        reg.set_age_intervals(&[40]).unwrap();
        engine.allocate_day(&mut reg, "Hub", Weekday::Monday).unwrap();
        assert_eq!((booked(&reg, 'A'), booked(&reg, 'B')), (10, 0));

        // After moving the break the 70-year-olds form the oldest bracket:
        // 4 by quota, then A gets floor(6 × 0.4) = 2, then the mop-up takes
        // the remaining 2 seventy-year-olds.
        engine.clear_allocation(&mut reg);
        reg.set_age_intervals(&[60]).unwrap();
        engine.allocate_day(&mut reg, "Hub", Weekday::Monday).unwrap();
        assert_eq!((booked(&reg, 'A'), booked(&reg, 'B')), (2, 6));
    }

    #[test]
    fn configuration_errors_book_nobody() {
        let engine = AllocationEngine::new();

        let mut no_intervals = one_hub([8; 7]);
        add_cohort(&mut no_intervals, "P", 3, 70);
        assert!(matches!(
            engine.allocate_day(&mut no_intervals, "Hub", Weekday::Monday),
            Err(CampaignError::NotConfigured(_))
        ));
        assert_eq!(no_intervals.assigned_count(), 0);

        let mut unknown_hub = quota_scenario();
        assert!(matches!(
            engine.allocate_day(&mut unknown_hub, "Nowhere", Weekday::Monday),
            Err(CampaignError::NotConfigured(_))
        ));

        let mut no_hours = Registry::new(YEAR);
        no_hours.define_hub("Hub").unwrap();
        no_hours.set_staff("Hub", 1, 1, 1).unwrap();
        no_hours.set_age_intervals(&[40]).unwrap();
        assert!(engine.allocate_day(&mut no_hours, "Hub", Weekday::Monday).is_err());
    }
}

// ── allocate_week ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod allocate_week {
    use super::*;

    /// Two hubs, demand well above weekly supply.
    fn busy_registry() -> Registry {
        let mut reg = Registry::new(YEAR);
        for (name, doctors) in [("Valentino", 2), ("Lingotto", 1)] {
            reg.define_hub(name).unwrap();
            reg.set_staff(name, doctors, 2, 1).unwrap();
        }
        reg.set_weekly_hours(&[2, 2, 1, 0, 1, 0, 0]).unwrap();
        reg.set_age_intervals(&[30, 50, 70]).unwrap();
        add_cohort(&mut reg, "A", 200, 80);
        add_cohort(&mut reg, "B", 60, 60);
        add_cohort(&mut reg, "C", 60, 40);
        add_cohort(&mut reg, "D", 60, 20);
        reg
    }

    #[test]
    fn reproducible_after_clear() {
        let mut reg = busy_registry();
        let engine = AllocationEngine::new();

        engine.clear_allocation(&mut reg);
        let first = engine.allocate_week(&mut reg).unwrap();
        engine.clear_allocation(&mut reg);
        let second = engine.allocate_week(&mut reg).unwrap();

        assert_eq!(first, second);
        assert!(first.total() > 0);
    }

    #[test]
    fn week_totals_match_supply() {
        let mut reg = busy_registry();
        let plan = AllocationEngine::new().allocate_week(&mut reg).unwrap();

        // Lingotto: min(10, 24, 20) = 10/h; Valentino: min(20, 24, 20) = 20/h.
        // 6 working hours → 60 + 120 slots.  The 80-year-old cohort never
        // runs dry, so every mop-up fills its day completely.
        assert_eq!(plan.daily_totals(), [60, 60, 30, 0, 30, 0, 0]);
        assert_eq!(plan.total(), 180);
        assert_eq!(plan.at("Lingotto", Weekday::Monday).len(), 20);
        assert_eq!(plan.at("Valentino", Weekday::Monday).len(), 40);
        assert!(plan.at("Valentino", Weekday::Sunday).is_empty());
        assert!(plan.at("Nowhere", Weekday::Monday).is_empty());
    }

    #[test]
    fn hubs_processed_in_name_order() {
        let mut reg = busy_registry();
        AllocationEngine::new().allocate_week(&mut reg).unwrap();
        // Lingotto is served before Valentino, so it gets the lowest ids of
        // the oldest cohort on Monday.
        assert_eq!(reg.person("A000").unwrap().hub().unwrap().as_str(), "Lingotto");
        assert_eq!(reg.person("A000").unwrap().day(), Some(Weekday::Monday));
    }

    #[test]
    fn plan_agrees_with_person_state() {
        let mut reg = busy_registry();
        let plan = AllocationEngine::new().allocate_week(&mut reg).unwrap();

        for (day, hubs) in plan.iter() {
            assert_eq!(hubs.len(), 2, "every hub listed on {day}");
            for (hub, ids) in hubs {
                assert_eq!(ids, &reg.allocated_to(hub.as_str(), day));
                for id in ids {
                    let person = reg.person(id.as_str()).unwrap();
                    assert_eq!(person.hub(), Some(hub));
                    assert_eq!(person.day(), Some(day));
                }
            }
        }
        assert_eq!(plan.total(), reg.assigned_count());
        assert_eq!(plan, WeeklyPlan::from_registry(&reg));
    }

    #[test]
    fn unstaffed_hub_fails_week() {
        let mut reg = busy_registry();
        reg.define_hub("Empty").unwrap();
        assert!(matches!(
            AllocationEngine::new().allocate_week(&mut reg),
            Err(CampaignError::NotConfigured(_))
        ));
    }

    #[test]
    fn unstaffed_hub_late_in_name_order_books_nobody() {
        let mut reg = busy_registry();
        reg.define_hub("Zeta").unwrap();
        let err = AllocationEngine::new().allocate_week(&mut reg).unwrap_err();
        assert!(matches!(err, CampaignError::NotConfigured(ref m) if m.contains("Zeta")));
        assert_eq!(reg.assigned_count(), 0);
    }

    #[test]
    fn missing_intervals_fail_week_before_booking() {
        let mut reg = one_hub([1, 0, 0, 0, 0, 0, 0]);
        add_cohort(&mut reg, "P", 5, 70);
        assert!(matches!(
            AllocationEngine::new().allocate_week(&mut reg),
            Err(CampaignError::NotConfigured(_))
        ));
        assert_eq!(reg.assigned_count(), 0);
    }

    #[test]
    fn clear_resets_only_allocation() {
        let mut reg = busy_registry();
        let engine = AllocationEngine::new();
        engine.allocate_week(&mut reg).unwrap();
        let people = reg.count_people();

        engine.clear_allocation(&mut reg);
        assert_eq!(reg.assigned_count(), 0);
        assert_eq!(reg.count_people(), people);
        assert_eq!(reg.interval_labels().len(), 4);
        assert_eq!(WeeklyPlan::from_registry(&reg).total(), 0);
    }
}
