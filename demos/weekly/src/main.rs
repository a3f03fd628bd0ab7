//! weekly — one week of a synthetic vaccination campaign.
//!
//! Builds a seeded population, loads it through the CSV loader, staffs three
//! hubs, runs a week of allocation and prints the resulting statistics.
//!
//! Usage: `weekly [config.json]`.  The optional JSON file overrides any
//! `CampaignConfig` field; missing fields keep their defaults.

mod population;
mod telemetry;


use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use vx_alloc::AllocationEngine;
use vx_core::{CampaignConfig, Weekday};
use vx_registry::{CollectingListener, Registry, load_people_reader};
use vx_stats::StatisticsReporter;

// ── Constants ─────────────────────────────────────────────────────────────────

const PEOPLE:       usize = 2_000;
const SEED:         u64   = 42;
const AGE_BREAKS:   [u32; 4] = [20, 40, 60, 80];
const WEEKLY_HOURS: [u32; 7] = [8, 8, 8, 8, 8, 4, 0];

/// Hub name and (doctors, nurses, other staff).
const HUBS: [(&str, u32, u32, u32); 3] = [
    ("Lingotto",  3, 2, 1),
    ("Valentino", 2, 2, 2),
    ("Nizza",     1, 1, 1),
];

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => CampaignConfig::default(),
    };
    telemetry::init(&config.log_level)?;
    info!(year = config.current_year, quota = config.quota_percent, "campaign configured");

    let year = config.current_year;
    let engine = AllocationEngine::from_config(&config);
    let mut registry = Registry::with_config(config);

    // 1. People.
    let csv = population::people_csv(PEOPLE, SEED, year - 95, year - 5);
    let mut listener = CollectingListener::default();
    let summary = load_people_reader(&mut registry, Cursor::new(csv), &mut listener)?;
    println!(
        "Loaded {} people from {} lines ({} rejected)",
        summary.people_added, summary.lines_read, summary.rejected
    );
    for (line, raw) in &listener.rejected {
        println!("  rejected line {line}: {raw}");
    }

    // 2. Brackets, hubs, hours.
    registry.set_age_intervals(&AGE_BREAKS)?;
    for (name, doctors, nurses, other) in HUBS {
        registry.define_hub(name)?;
        registry.set_staff(name, doctors, nurses, other)?;
    }
    registry.set_weekly_hours(&WEEKLY_HOURS)?;

    println!();
    println!("{:<10} Mon..Sun slots", "Hub");
    for (hub, slots) in registry.weekly_available()? {
        println!("{hub:<10} {slots:?}");
    }
    let monday = &registry.time_slots()?[Weekday::Monday.index()];
    if let (Some(first), Some(last)) = (monday.first(), monday.last()) {
        println!("Monday appointments: {} from {first} to {last}", monday.len());
    }

    // 3. Allocate.
    engine.clear_allocation(&mut registry);
    let plan = engine.allocate_week(&mut registry)?;

    println!();
    println!("Booked per day:");
    for ((day, _), booked) in plan.iter().zip(plan.daily_totals()) {
        println!("  {day}  {booked:>5}");
    }
    println!("  total {:>5}", plan.total());

    // 4. Statistics.
    let stats = StatisticsReporter::new(&registry);
    println!();
    println!("Allocated overall: {:.1}%", 100.0 * stats.overall_allocated_proportion()?);

    let by_interval = stats.allocated_proportion_by_interval()?;
    let distribution = stats.allocated_distribution_across_intervals()?;
    println!("{:<9} {:>10} {:>12}", "Bracket", "allocated", "of bookings");
    for label in registry.interval_labels() {
        println!(
            "{label:<9} {:>9.1}% {:>11.1}%",
            100.0 * by_interval[&label],
            100.0 * distribution[&label],
        );
    }

    Ok(())
}

fn load_config(path: &Path) -> Result<CampaignConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}
