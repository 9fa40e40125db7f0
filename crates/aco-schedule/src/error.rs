use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("interval mean must be a finite positive number, got {0}")]
    InvalidMean(f64),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
