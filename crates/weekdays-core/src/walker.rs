use chrono::{Duration, Local, NaiveDateTime};
use serde::Serialize;

use crate::calendar::{MonToFri, WeekdayPredicate};
use crate::error::WalkError;
use crate::format::{DateFormatter, StrftimeFormatter};

/// Result of a walk, always ordered from earliest to latest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Weekdays {
    Dates(Vec<NaiveDateTime>),
    Formatted(Vec<String>),
}

impl Weekdays {
    /// Number of entries.
    pub fn len(&self) -> usize {
        match self {
            Weekdays::Dates(dates) => dates.len(),
            Weekdays::Formatted(strings) => strings.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entries rendered for display. Raw dates use `YYYY-MM-DD HH:MM:SS`.
    pub fn to_strings(&self) -> Vec<String> {
        match self {
            Weekdays::Dates(dates) => dates.iter().map(|d| d.to_string()).collect(),
            Weekdays::Formatted(strings) => strings.clone(),
        }
    }
}

/// Walks calendar days from an origin, one day at a time, collecting the
/// days the predicate accepts.
#[derive(Debug, Clone, Default)]
pub struct WeekdayWalker<P = MonToFri, F = StrftimeFormatter> {
    predicate: P,
    formatter: F,
}

impl WeekdayWalker {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P, F> WeekdayWalker<P, F>
where
    P: WeekdayPredicate,
    F: DateFormatter,
{
    pub fn with(predicate: P, formatter: F) -> Self {
        Self {
            predicate,
            formatter,
        }
    }

    /// Collect `|count|` weekdays starting at `origin` (default: now).
    ///
    /// A non-negative count walks forward, a negative one backward. The
    /// origin itself is tested first in both directions. The result is
    /// ascending either way. With a `pattern`, every entry is formatted.
    pub fn walk(
        &self,
        count: i64,
        origin: Option<NaiveDateTime>,
        pattern: Option<&str>,
    ) -> Result<Weekdays, WalkError> {
        if let Some(pattern) = pattern {
            if pattern.is_empty() {
                return Err(WalkError::EmptyPattern);
            }
            self.formatter.check_pattern(pattern)?;
        }

        let mut cursor = origin.unwrap_or_else(|| Local::now().naive_local());
        let backward = count < 0;
        let step = if backward {
            Duration::days(-1)
        } else {
            Duration::days(1)
        };
        let target = usize::try_from(count.unsigned_abs()).unwrap_or(usize::MAX);

        let mut dates = Vec::new();
        while dates.len() < target {
            if self.predicate.is_weekday(&cursor) {
                dates.push(cursor);
                if dates.len() == target {
                    break;
                }
            }
            cursor = cursor
                .checked_add_signed(step)
                .ok_or(WalkError::OutOfRange { date: cursor })?;
        }

        if backward {
            dates.reverse();
        }

        Ok(match pattern {
            Some(pattern) => Weekdays::Formatted(
                dates
                    .iter()
                    .map(|d| self.formatter.format(d, pattern))
                    .collect(),
            ),
            None => Weekdays::Dates(dates),
        })
    }
}

/// Walk with the Mon-Fri rule and strftime formatting.
pub fn recent_weekdays(
    count: i64,
    origin: Option<NaiveDateTime>,
    pattern: Option<&str>,
) -> Result<Weekdays, WalkError> {
    WeekdayWalker::new().walk(count, origin, pattern)
}
