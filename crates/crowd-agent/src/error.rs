use crowd_core::AgentId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    /// No free slot left in the store.  Growth policy is the caller's
    /// responsibility; the core only reports the condition distinguishably.
    #[error("agent store full: capacity {capacity} exhausted")]
    CapacityExhausted { capacity: usize },

    /// A body or motion parameter violated its precondition (`{0}`).
    /// Raised at the `add` boundary — continuing with e.g. zero mass would
    /// silently corrupt the integration.
    #[error("invalid agent parameter: {0}")]
    InvalidParameter(&'static str),

    #[error("agent {0} is out of bounds for this store")]
    OutOfBounds(AgentId),
}

pub type AgentResult<T> = Result<T, AgentError>;
