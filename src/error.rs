use thiserror::Error;

/// Errors surfaced by task store operations.
///
/// "Not found" outcomes for complete/delete are deliberately not errors;
/// those operations report them as `Ok(false)`.
#[derive(Debug, Error)]
pub enum TodoError {
    /// The date token is neither a keyword nor a valid `YYYY-MM-DD` date.
    #[error("invalid date '{0}': use YYYY-MM-DD, 'today' or 'tomorrow'")]
    InvalidDate(String),

    /// The reschedule offset is not an integer.
    #[error("invalid minutes value '{0}': expected a whole number")]
    InvalidMinutes(String),

    /// A task description was empty or all whitespace.
    #[error("task description must not be empty")]
    EmptyDescription,

    /// Writing the task file failed.
    #[error("failed to write the task file: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding the task collection failed.
    #[error("failed to encode the task file: {0}")]
    Json(#[from] serde_json::Error),
}
