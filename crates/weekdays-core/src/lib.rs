pub mod args;
pub mod calendar;
pub mod error;
pub mod format;
pub mod walker;

pub use calendar::{MonToFri, WeekdayPredicate};
pub use error::WalkError;
pub use format::{DateFormatter, StrftimeFormatter};
pub use walker::{WeekdayWalker, Weekdays, recent_weekdays};
