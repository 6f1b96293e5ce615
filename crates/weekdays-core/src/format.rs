use std::fmt::Write;

use chrono::NaiveDateTime;
use chrono::format::{Item, StrftimeItems};

use crate::error::WalkError;

/// Renders a date to a string according to a pattern.
pub trait DateFormatter {
    fn format(&self, date: &NaiveDateTime, pattern: &str) -> String;

    /// Reject a pattern before any date is formatted with it.
    /// Accepts everything unless the formatter knows better.
    fn check_pattern(&self, _pattern: &str) -> Result<(), WalkError> {
        Ok(())
    }
}

/// strftime-style formatter backed by chrono (`%Y-%m-%d`, `%a %d %b`, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrftimeFormatter;

impl DateFormatter for StrftimeFormatter {
    /// Output is truncated if the pattern cannot be rendered; call
    /// `check_pattern` first.
    fn format(&self, date: &NaiveDateTime, pattern: &str) -> String {
        let mut out = String::new();
        let _ = write!(out, "{}", date.format(pattern));
        out
    }

    fn check_pattern(&self, pattern: &str) -> Result<(), WalkError> {
        if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
            return Err(WalkError::InvalidPattern(pattern.to_string()));
        }
        // Offset specifiers (%z, %Z, ...) parse fine but cannot render a naive date.
        let mut sample = String::new();
        write!(sample, "{}", NaiveDateTime::default().format(pattern))
            .map_err(|_| WalkError::InvalidPattern(pattern.to_string()))
    }
}

impl<F> DateFormatter for F
where
    F: Fn(&NaiveDateTime, &str) -> String,
{
    fn format(&self, date: &NaiveDateTime, pattern: &str) -> String {
        self(date, pattern)
    }
}
