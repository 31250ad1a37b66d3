use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpatialError {
    /// Cell size must be a positive finite number; anything else would map
    /// every position to a nonsense key and silently break neighbor pruning.
    #[error("invalid cell size {0}: must be positive and finite")]
    InvalidCellSize(f64),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
