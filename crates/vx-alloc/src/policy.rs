//! `QuotaPolicy` — how many of the remaining slots each bracket may take.

use vx_core::CampaignConfig;

/// Share of the still-available daily slots offered to one age bracket.
///
/// The quota is always computed on what is left *after* the older brackets
/// have been served, never on the day's original total:
///
/// ```text
/// quota = floor(remaining × percent / 100)
/// ```
///
/// Integer arithmetic keeps the floor exact (`36 × 40 / 100 = 14`).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuotaPolicy {
    percent: u32,
}

impl QuotaPolicy {
    /// Percentages above 100 are clamped to 100.
    pub fn new(percent: u32) -> Self {
        Self { percent: percent.min(100) }
    }

    pub fn percent(&self) -> u32 {
        self.percent
    }

    /// Quota for one bracket given the slots still available.
    #[inline]
    pub fn quota(&self, remaining: usize) -> usize {
        let scaled = remaining as u128 * u128::from(self.percent) / 100;
        // percent <= 100, so the result never exceeds `remaining`.
        usize::try_from(scaled).unwrap_or(remaining)
    }
}

impl Default for QuotaPolicy {
    /// The campaign rule: 40% of the remaining slots.
    fn default() -> Self {
        Self::new(CampaignConfig::DEFAULT_QUOTA_PERCENT)
    }
}

impl From<&CampaignConfig> for QuotaPolicy {
    fn from(config: &CampaignConfig) -> Self {
        Self::new(config.quota_percent)
    }
}
