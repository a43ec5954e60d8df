use jp_core::JpError;
use thiserror::Error;

/// Errors produced by [`JourneyPlanner`](crate::JourneyPlanner).
///
/// "Nothing nearby" and "no route" are not errors; `plan` returns an empty
/// list for both.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    #[error("planner configuration: {0}")]
    Config(#[from] JpError),
}

pub type PlanResult<T> = Result<T, PlanError>;
