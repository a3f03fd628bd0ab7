use thiserror::Error;
use vx_core::CampaignError;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unexpected CSV header {0:?}: expected \"SSN,LAST,FIRST,YEAR\"")]
    Header(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Campaign(#[from] CampaignError),
}

pub type LoadResult<T> = Result<T, LoadError>;
