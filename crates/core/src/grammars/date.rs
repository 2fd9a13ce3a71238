//! Date shorthand grammar.
//!
//! Expands data-entry shortcuts into `month/day/year`:
//! - `t` or `.`: today
//! - weekday names (`m`, `tue`, `friday`, ...): that day of the current week
//! - `5`: the 5th of the current month
//! - `10.9`: month 10, day 9 of the current year
//! - `1.1.16`: January 1st, 2016

use std::sync::OnceLock;

use chrono::{Datelike, Duration};
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
        FieldType::Date,
        vec![
            Rule::new(r"(?i)^(t|[.])$", resolve_today, "t or . for today", "t"),
            weekday_rule(r"(?i)^(su(?:n|nday)?)$", 0, "su[n[day]] for this week's Sunday", "su"),
            weekday_rule(r"(?i)^(m(?:o|on|onday)?)$", 1, "m[o[n[day]]] for this week's Monday", "mon"),
            weekday_rule(r"(?i)^(tu(?:e|es|esday)?)$", 2, "tu[e[s[day]]] for this week's Tuesday", "tue"),
            weekday_rule(r"(?i)^(w(?:e|ed|ednesday)?)$", 3, "w[e[d[nesday]]] for this week's Wednesday", "wed"),
            weekday_rule(r"(?i)^(th(?:u|urs|ursday)?)$", 4, "th[u[rs[day]]] for this week's Thursday", "thu"),
            weekday_rule(r"(?i)^(f(?:r|ri|riday)?)$", 5, "f[r[i[day]]] for this week's Friday", "fri"),
            weekday_rule(r"(?i)^(sa(?:t|turday)?)$", 6, "sa[t[urday]] for this week's Saturday", "sat"),
            Rule::new(
                r"^(\d{1,2})$",
                resolve_day_of_month,
                "D for that day of the current month",
                "5",
            ),
            Rule::new(
                r"^(\d{1,2})[. /](\d{1,2})$",
                resolve_month_day,
                "M.D (also M/D, M D) within the current year",
                "10.9",
            ),
            Rule::new(
                r"^(\d{1,2})[. /](\d{1,2})[. /](\d{2,4})$",
                resolve_month_day_year,
                "M.D.Y, two-digit years get 2000 added",
                "1.1.16",
            ),
        ],
    )
}

fn resolve_today(_caps: &Captures<'_>, clock: &dyn Clock) -> Option<String> {
    let today = clock.today();
    Some(format::date(today.day(), today.month(), today.year()))
}

/// A rule expanding to the given weekday of the current week, with the week
/// starting on Sunday (index 0).
fn weekday_rule(
    pattern: &str,
    weekday: i64,
    synopsis: &'static str,
    example: &'static str,
) -> Rule {
    Rule::new(
        pattern,
        move |_caps: &Captures<'_>, clock: &dyn Clock| {
            let today = clock.today();
            let offset = weekday - i64::from(today.weekday().num_days_from_sunday());
            let target = today + Duration::days(offset);
            Some(format::date(target.day(), target.month(), target.year()))
        },
        synopsis,
        example,
    )
}

fn resolve_day_of_month(caps: &Captures<'_>, clock: &dyn Clock) -> Option<String> {
    let today = clock.today();
    Some(format::date(&caps[1], today.month(), today.year()))
}

// The first captured group is the month and the second the day: `10.9` is
// October 9th.
fn resolve_month_day(caps: &Captures<'_>, clock: &dyn Clock) -> Option<String> {
    Some(format::date(&caps[2], &caps[1], clock.today().year()))
}

fn resolve_month_day_year(caps: &Captures<'_>, _clock: &dyn Clock) -> Option<String> {
    let year = &caps[3];
    let year = if year.len() == 2 {
        (2000 + year.parse::<i32>().ok()?).to_string()
    } else {
        year.to_string()
    };
    Some(format::date(&caps[2], &caps[1], year))
}
