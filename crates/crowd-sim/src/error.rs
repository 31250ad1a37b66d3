use crowd_agent::AgentError;
use crowd_core::CrowdError;
use crowd_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("agent error: {0}")]
    Agent(#[from] AgentError),

    #[error("spatial index error: {0}")]
    Spatial(#[from] SpatialError),

    #[error("core error: {0}")]
    Core(#[from] CrowdError),
}

pub type SimResult<T> = Result<T, SimError>;
