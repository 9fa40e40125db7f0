use aco_colony::ColonyError;
use aco_core::AcoError;
use aco_schedule::ScheduleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("invalid parameters: {0}")]
    Params(#[from] AcoError),

    #[error("colony invariant violated: {0}")]
    Colony(#[from] ColonyError),

    #[error("cannot draw event delay: {0}")]
    Schedule(#[from] ScheduleError),
}

pub type SimResult<T> = Result<T, SimError>;
