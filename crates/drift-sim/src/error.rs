use drift_core::{ActorId, DriftError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("arena configuration error: {0}")]
    Config(String),

    #[error("unknown actor {0}")]
    UnknownActor(ActorId),

    #[error(transparent)]
    Core(#[from] DriftError),
}

pub type SimResult<T> = Result<T, SimError>;
