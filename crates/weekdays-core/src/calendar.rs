use chrono::{Datelike, NaiveDateTime, Weekday};

/// Decides whether a date counts as a weekday.
///
/// Implementations must be pure: the same date always gets the same answer.
pub trait WeekdayPredicate {
    fn is_weekday(&self, date: &NaiveDateTime) -> bool;
}

/// Plain Monday-Friday rule. No holiday awareness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonToFri;

impl WeekdayPredicate for MonToFri {
    fn is_weekday(&self, date: &NaiveDateTime) -> bool {
        is_weekday(date)
    }
}

impl<F> WeekdayPredicate for F
where
    F: Fn(&NaiveDateTime) -> bool,
{
    fn is_weekday(&self, date: &NaiveDateTime) -> bool {
        self(date)
    }
}

/// Returns true for Monday through Friday.
pub fn is_weekday(date: &NaiveDateTime) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
