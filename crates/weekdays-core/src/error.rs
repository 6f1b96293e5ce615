use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalkError {
    #[error("at most 3 arguments expected, but {got} present")]
    Arity { got: usize },

    #[error(
        "(Number, Date | absent, String | absent) required, but got ({count}, {origin}, {pattern})"
    )]
    Type {
        count: String,
        origin: String,
        pattern: String,
    },

    #[error("Format pattern must not be empty")]
    EmptyPattern,

    #[error("Invalid format pattern: {0}")]
    InvalidPattern(String),

    #[error("Date out of range stepping from {date}")]
    OutOfRange { date: NaiveDateTime },
}
