//! Time shorthand grammar.
//!
//! Expands data-entry shortcuts into `HH:MM:SS[.fraction]`:
//! - `t` or `.`: the current time
//! - `5`: `05:00:00`
//! - `5.30`, `0530`: `05:30:00`
//! - `5.5.30`, `050530`: `05:05:30`
//! - `5.5.30,5`, `050530,5`, `0505305`: `05:05:30.5`
//!
//! Components are not range-checked; `25.70` expands to `25:70:00`.

use std::sync::OnceLock;

use chrono::Timelike;
use regex::Captures;

use crate::clock::Clock;
use crate::format;
use crate::grammar::{Grammar, Rule};
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
        FieldType::Time,
        vec![
            Rule::new(r"(?i)^(t|[.])$", resolve_now, "t or . for the current time", "t"),
            Rule::new(
                r"^(\d{1,2})$",
                resolve_hours,
                "H for a whole hour",
                "5",
            ),
            Rule::new(
                r"^(\d{1,2})[./:](\d{1,2})$",
                resolve_hours_minutes,
                "H.M (also H/M, H:M)",
                "5.30",
            ),
            Rule::new(
                r"^(\d{2})(\d{2})$",
                resolve_hours_minutes,
                "HHMM packed",
                "0530",
            ),
            Rule::new(
                r"^(\d{1,2})[./:](\d{1,2})[./:](\d{1,2})$",
                resolve_hours_minutes_seconds,
                "H.M.S",
                "5.5.30",
            ),
            Rule::new(
                r"^(\d{2})(\d{2})(\d{2})$",
                resolve_hours_minutes_seconds,
                "HHMMSS packed",
                "050530",
            ),
            Rule::new(
                r"^(\d{1,2})[./:](\d{1,2})[./:](\d{1,2}),(\d{1,3})$",
                resolve_with_fraction,
                "H.M.S,F with a 1-3 digit fraction",
                "5.5.30,5",
            ),
            Rule::new(
                r"^(\d{2})(\d{2})(\d{2}),?(\d{1,3})$",
                resolve_with_fraction,
                "HHMMSS followed by a fraction, comma optional",
                "050530,5",
            ),
        ],
    )
}

fn resolve_now(_caps: &Captures<'_>, clock: &dyn Clock) -> Option<String> {
    let now = clock.time_of_day();
    Some(format::time(now.hour(), now.minute(), now.second(), None))
}

fn resolve_hours(caps: &Captures<'_>, _clock: &dyn Clock) -> Option<String> {
    Some(format::time(&caps[1], "00", "00", None))
}

fn resolve_hours_minutes(caps: &Captures<'_>, _clock: &dyn Clock) -> Option<String> {
    Some(format::time(&caps[1], &caps[2], "00", None))
}

fn resolve_hours_minutes_seconds(caps: &Captures<'_>, _clock: &dyn Clock) -> Option<String> {
    Some(format::time(&caps[1], &caps[2], &caps[3], None))
}

fn resolve_with_fraction(caps: &Captures<'_>, _clock: &dyn Clock) -> Option<String> {
    Some(format::time(
        &caps[1],
        &caps[2],
        &caps[3],
        Some(&caps[4]),
    ))
}
