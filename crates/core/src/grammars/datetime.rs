//! Combined date-time shorthand grammar.
//!
//! A date-time shorthand is any date shorthand and any time shorthand
//! separated by a space; each half goes through its own grammar and the
//! results are joined back with a single space. `t` and `.` on their own
//! resolve to "now" through both grammars at once.

use std::sync::OnceLock;

use regex::Captures;

use crate::clock::Clock;
use crate::format;
use crate::grammar::{Grammar, Rule};
use crate::grammars::{date, time};
use crate::types::FieldType;

pub(crate) fn grammar() -> &'static Grammar {
    static GRAMMAR: OnceLock<Grammar> = OnceLock::new();
    GRAMMAR.get_or_init(build)
}

pub(crate) fn expand(input: &str, clock: &dyn Clock) -> String {
    grammar().expand(input, clock)
}

fn build() -> Grammar {
    Grammar::new(
        FieldType::DateTime,
        vec![
            Rule::new(
                r"(?i)^(t|[.])$",
                resolve_now,
                "t or . for the current date and time",
                "t",
            ),
            // Greedy first half: the split happens at the last space, so
            // space-separated date shorthand like `10 9` stays in the date
            // half of `10 9 0530`.
            Rule::new(
                r"^(.+) (.+)$",
                resolve_pair,
                "any date and time shorthand separated by a space",
                "1.1.16 0530",
            ),
        ],
    )
}

fn resolve_now(caps: &Captures<'_>, clock: &dyn Clock) -> Option<String> {
    let token = &caps[1];
    Some(format::date_time(
        &date::expand(token, clock),
        &time::expand(token, clock),
    ))
}

fn resolve_pair(caps: &Captures<'_>, clock: &dyn Clock) -> Option<String> {
    Some(format::date_time(
        &date::expand(&caps[1], clock),
        &time::expand(&caps[2], clock),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn anchor() -> FixedClock {
        FixedClock(
            NaiveDate::from_ymd_opt(2016, 8, 30)
                .unwrap()
                .and_hms_opt(14, 27, 1)
                .unwrap(),
        )
    }

    fn expand_at_anchor(input: &str) -> String {
        expand(input, &anchor())
    }

    #[test]
    fn test_now() {
        assert_eq!(expand_at_anchor("t"), "8/30/2016 14:27:01");
        assert_eq!(expand_at_anchor("."), "8/30/2016 14:27:01");
    }

    #[test]
    fn test_date_and_time_halves() {
        assert_eq!(expand_at_anchor("1.1.16 0530"), "1/1/2016 05:30:00");
        assert_eq!(expand_at_anchor("t t"), "8/30/2016 14:27:01");
        assert_eq!(expand_at_anchor("mon 5"), "8/29/2016 05:00:00");
        assert_eq!(expand_at_anchor("10.9 5.5.30,5"), "10/9/2016 05:05:30.5");
    }

    #[test]
    fn test_greedy_split_keeps_spaced_date_together() {
        // The date grammar accepts a space separator, so the last space is
        // the boundary between the halves.
        assert_eq!(expand_at_anchor("10 9 0530"), "10/9/2016 05:30:00");
    }

    #[test]
    fn test_unmatched_halves_pass_through() {
        assert_eq!(expand_at_anchor("foo bar"), "foo bar");
        assert_eq!(expand_at_anchor("1.1.16 bar"), "1/1/2016 bar");
        assert_eq!(expand_at_anchor("foo 0530"), "foo 05:30:00");
    }

    #[test]
    fn test_passthrough() {
        for input in ["", "hello", "1.1.16"] {
            assert_eq!(expand_at_anchor(input), input, "{input}");
        }
    }
}
