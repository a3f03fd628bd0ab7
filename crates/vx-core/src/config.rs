//! Campaign-wide configuration.
//!
//! Typically built with `CampaignConfig::default()` or loaded from a JSON
//! file by the application (enable the `serde` feature) and handed to
//! `Registry::with_config` and `AllocationEngine::from_config`.

use chrono::Datelike;

/// Tunables shared by the registry, the allocation engine, and reports.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct CampaignConfig {
    /// Year that ages are computed against (`age = current_year - birth_year`).
    pub current_year: i32,

    /// Share of the remaining daily slots offered to each age bracket, in
    /// percent.  The campaign rule is 40.
    pub quota_percent: u32,

    /// Hour of the first appointment of the day.  Default: 9.
    pub first_slot_hour: u32,

    /// Length of one appointment in minutes.  Default: 15 (4 per hour).
    pub slot_minutes: u32,

    /// Fallback `tracing` filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl CampaignConfig {
    pub const DEFAULT_QUOTA_PERCENT: u32 = 40;

    /// Default configuration pinned to a given year (handy in tests).
    pub fn for_year(current_year: i32) -> Self {
        Self { current_year, ..Self::default() }
    }

    /// Number of appointment slots in one working hour.
    pub fn slots_per_hour(&self) -> u32 {
        60 / self.slot_minutes.clamp(1, 60)
    }
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            current_year:    chrono::Local::now().year(),
            quota_percent:   Self::DEFAULT_QUOTA_PERCENT,
            first_slot_hour: 9,
            slot_minutes:    15,
            log_level:       "info".to_string(),
        }
    }
}
