use thiserror::Error;
use vx_core::CampaignError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// The ratio's denominator is zero (no people, or nobody allocated).
    #[error("{0} is undefined: denominator is zero")]
    DivisionUndefined(&'static str),

    #[error(transparent)]
    Campaign(#[from] CampaignError),
}

pub type StatsResult<T> = Result<T, StatsError>;
