use chrono::{NaiveDate, NaiveDateTime};

use crate::error::WalkError;
use crate::walker::{Weekdays, recent_weekdays};

/// Most arguments a walk accepts: count, origin, pattern.
pub const MAX_ARGS: usize = 3;

/// Placeholder for an omitted origin or pattern.
pub const ABSENT: &str = "-";

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// A walk request validated from untyped textual arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkArgs {
    pub count: i64,
    pub origin: Option<NaiveDateTime>,
    pub pattern: Option<String>,
}

impl WalkArgs {
    /// Validate `COUNT [ORIGIN] [PATTERN]`.
    ///
    /// All checks run before any walking. Too many arguments is an arity
    /// error; any position with the wrong shape is a type error that
    /// describes all three positions.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self, WalkError> {
        if args.len() > MAX_ARGS {
            return Err(WalkError::Arity { got: args.len() });
        }

        let token = |i: usize| {
            args.get(i)
                .map(|s| s.as_ref())
                .filter(|s| *s != ABSENT)
        };
        let (count, origin, pattern) = (token(0), token(1), token(2));

        let parsed_count = count.and_then(|c| c.parse::<i64>().ok());
        let parsed_origin = match origin {
            None => Some(None),
            Some(o) => parse_origin(o).map(Some),
        };

        match (parsed_count, parsed_origin) {
            (Some(count), Some(origin)) => Ok(Self {
                count,
                origin,
                pattern: pattern.map(str::to_string),
            }),
            _ => Err(WalkError::Type {
                count: describe(count),
                origin: describe(origin),
                pattern: describe(pattern),
            }),
        }
    }

    pub fn run(&self) -> Result<Weekdays, WalkError> {
        recent_weekdays(self.count, self.origin, self.pattern.as_deref())
    }
}

/// Accepts `YYYY-MM-DD` (midnight) or a full date and time.
pub fn parse_origin(s: &str) -> Option<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Human-readable shape of a received argument, guessed from its text
/// rather than its position.
fn describe(token: Option<&str>) -> String {
    match token {
        None => "absent".to_string(),
        Some(t) => {
            if let Ok(n) = t.parse::<i64>() {
                format!("Number({n})")
            } else if let Some(d) = parse_origin(t) {
                format!("Date({d})")
            } else {
                format!("String({t:?})")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn parse_count_only() {
        let args = WalkArgs::parse(&["5"]).unwrap();
        assert_eq!(
            args,
            WalkArgs {
                count: 5,
                origin: None,
                pattern: None
            }
        );
    }

    #[test]
    fn parse_all_three() {
        let args = WalkArgs::parse(&["-3", "2018-06-20", "%d/%m"]).unwrap();
        assert_eq!(args.count, -3);
        assert_eq!(args.origin, Some(date(2018, 6, 20)));
        assert_eq!(args.pattern.as_deref(), Some("%d/%m"));
    }

    #[test]
    fn parse_origin_with_time() {
        let expected = NaiveDate::from_ymd_opt(2018, 6, 20)
            .unwrap()
            .and_hms_opt(8, 15, 0)
            .unwrap();
        assert_eq!(parse_origin("2018-06-20T08:15:00"), Some(expected));
        assert_eq!(parse_origin("2018-06-20 08:15:00"), Some(expected));
        assert_eq!(parse_origin("20/06/2018"), None);
    }

    #[test]
    fn placeholder_means_absent() {
        let args = WalkArgs::parse(&["2", "-", "%F"]).unwrap();
        assert_eq!(args.origin, None);
        assert_eq!(args.pattern.as_deref(), Some("%F"));

        let args = WalkArgs::parse(&["2", "2025-01-13", "-"]).unwrap();
        assert_eq!(args.pattern, None);
    }

    #[test]
    fn too_many_arguments() {
        let err = WalkArgs::parse(&["3", "2018-06-20", "%F", "extra"]).unwrap_err();
        assert!(matches!(err, WalkError::Arity { got: 4 }));
        assert_eq!(err.to_string(), "at most 3 arguments expected, but 4 present");
    }

    #[test]
    fn non_numeric_count() {
        let err = WalkArgs::parse(&["three", "2018-06-20"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "(Number, Date | absent, String | absent) required, \
             but got (String(\"three\"), Date(2018-06-20 00:00:00), absent)"
        );
    }

    #[test]
    fn fractional_count_is_rejected() {
        let err = WalkArgs::parse(&["1.5"]).unwrap_err();
        assert!(matches!(err, WalkError::Type { count, .. } if count == "String(\"1.5\")"));
    }

    #[test]
    fn invalid_origin() {
        let err = WalkArgs::parse(&["3", "tomorrow", "%F"]).unwrap_err();
        match err {
            WalkError::Type {
                count,
                origin,
                pattern,
            } => {
                assert_eq!(count, "Number(3)");
                assert_eq!(origin, "String(\"tomorrow\")");
                assert_eq!(pattern, "String(\"%F\")");
            }
            other => panic!("expected Type error, got {other:?}"),
        }
    }

    #[test]
    fn missing_count() {
        let err = WalkArgs::parse::<&str>(&[]).unwrap_err();
        assert!(matches!(err, WalkError::Type { count, .. } if count == "absent"));
    }

    #[test]
    fn run_walks_with_defaults() {
        let args = WalkArgs::parse(&["2", "2025-01-18", "%a %d"]).unwrap();
        let result = args.run().unwrap();
        assert_eq!(
            result,
            Weekdays::Formatted(vec!["Mon 20".to_string(), "Tue 21".to_string()])
        );
    }
}
