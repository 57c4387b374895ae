use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("percentage out of range: {0} (expected 0..=100)")]
    PercentageOutOfRange(u8),
    #[error("unknown university type: {0}")]
    InvalidUniversityType(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
