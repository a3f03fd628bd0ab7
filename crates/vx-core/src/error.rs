//! Campaign error type.
//!
//! Sub-crates wrap `CampaignError` as one variant of their own error enums
//! (see `vx_registry::LoadError` and `vx_stats::StatsError`).

use thiserror::Error;

/// The shared error type for configuration and lookup failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CampaignError {
    /// A hub (or other keyed entity) with this key already exists.
    #[error("duplicate {kind} {key:?}")]
    DuplicateKey { kind: &'static str, key: String },

    /// Invalid staffing counts, weekly hours, or interval breaks.
    #[error("configuration error: {0}")]
    Config(String),

    /// Something was queried before it was configured, or the key is unknown.
    #[error("not configured: {0}")]
    NotConfigured(String),
}

/// Shorthand result type for all `vx-*` crates.
pub type CampaignResult<T> = Result<T, CampaignError>;
