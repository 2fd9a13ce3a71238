//! Golden corpus tests for shorthand expansion.
//!
//! Every case is expanded against a clock pinned to Tuesday, August 30th
//! 2016, 14:27:01, so weekday shortcuts land in a week that crosses a month
//! boundary and every expected output is an exact string.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use quickfield_core::{FieldType, FixedClock, Quickfield};

/// A golden test case: input token and its exact expansion.
struct GoldenCase {
    field: FieldType,
    input: &'static str,
    expected: &'static str,
    description: &'static str,
}

const fn case(
    field: FieldType,
    input: &'static str,
    expected: &'static str,
    description: &'static str,
) -> GoldenCase {
    GoldenCase {
        field,
        input,
        expected,
        description,
    }
}

// =============================================================================
// Golden Corpus: Date shorthand
// =============================================================================

const DATE_CASES: &[GoldenCase] = &[
    case(FieldType::Date, "t", "8/30/2016", "today"),
    case(FieldType::Date, ".", "8/30/2016", "today (dot form)"),
    case(FieldType::Date, "T", "8/30/2016", "today, case-insensitive"),
    case(FieldType::Date, "su", "8/28/2016", "Sunday of the current week"),
    case(FieldType::Date, "sunday", "8/28/2016", "Sunday, full name"),
    case(FieldType::Date, "m", "8/29/2016", "Monday, shortest form"),
    case(FieldType::Date, "tu", "8/30/2016", "Tuesday (the anchor itself)"),
    case(FieldType::Date, "wed", "8/31/2016", "Wednesday"),
    case(FieldType::Date, "th", "9/1/2016", "Thursday crosses into September"),
    case(FieldType::Date, "thurs", "9/1/2016", "Thursday, four-letter form"),
    case(FieldType::Date, "f", "9/2/2016", "Friday"),
    case(FieldType::Date, "FRIDAY", "9/2/2016", "Friday, case-insensitive"),
    case(FieldType::Date, "sat", "9/3/2016", "Saturday"),
    case(FieldType::Date, "5", "8/5/2016", "day of the current month"),
    case(FieldType::Date, "05", "8/05/2016", "captured digits kept verbatim"),
    case(FieldType::Date, "31", "8/31/2016", "two-digit day"),
    case(FieldType::Date, "10.9", "10/9/2016", "first group is the month"),
    case(FieldType::Date, "10/9", "10/9/2016", "slash separator"),
    case(FieldType::Date, "10 9", "10/9/2016", "space separator"),
    case(FieldType::Date, "1.1.16", "1/1/2016", "two-digit year widened"),
    case(FieldType::Date, "12.24.1999", "12/24/1999", "four-digit year"),
    case(FieldType::Date, "7/4/76", "7/4/2076", "two-digit year always +2000"),
    case(FieldType::Date, "1.1.123", "1/1/123", "three-digit year verbatim"),
];

// =============================================================================
// Golden Corpus: Time shorthand
// =============================================================================

const TIME_CASES: &[GoldenCase] = &[
    case(FieldType::Time, "t", "14:27:01", "current time"),
    case(FieldType::Time, ".", "14:27:01", "current time (dot form)"),
    case(FieldType::Time, "5", "05:00:00", "whole hour"),
    case(FieldType::Time, "05", "05:00:00", "whole hour, padded input"),
    case(FieldType::Time, "5.5", "05:05:00", "hours and minutes"),
    case(FieldType::Time, "5:30", "05:30:00", "colon separator"),
    case(FieldType::Time, "5/30", "05:30:00", "slash separator"),
    case(FieldType::Time, "0530", "05:30:00", "packed HHMM"),
    case(FieldType::Time, "5.5.30", "05:05:30", "hours, minutes, seconds"),
    case(FieldType::Time, "050530", "05:05:30", "packed HHMMSS"),
    case(FieldType::Time, "5.5.30,5", "05:05:30.5", "fraction after comma"),
    case(FieldType::Time, "050530,5", "05:05:30.5", "packed with fraction"),
    case(FieldType::Time, "0505305", "05:05:30.5", "packed, comma elided"),
    case(FieldType::Time, "050530,123", "05:05:30.123", "three-digit fraction"),
    case(FieldType::Time, "25.70", "25:70:00", "no range validation"),
];

// =============================================================================
// Golden Corpus: Date + time shorthand
// =============================================================================

const DATETIME_CASES: &[GoldenCase] = &[
    case(FieldType::DateTime, "t", "8/30/2016 14:27:01", "now, both halves"),
    case(FieldType::DateTime, ".", "8/30/2016 14:27:01", "now (dot form)"),
    case(
        FieldType::DateTime,
        "1.1.16 0530",
        "1/1/2016 05:30:00",
        "full date and packed time",
    ),
    case(
        FieldType::DateTime,
        "t t",
        "8/30/2016 14:27:01",
        "each half resolved on its own",
    ),
    case(
        FieldType::DateTime,
        "mon 5",
        "8/29/2016 05:00:00",
        "weekday date with whole-hour time",
    ),
    case(
        FieldType::DateTime,
        "10 9 0530",
        "10/9/2016 05:30:00",
        "last space splits the halves",
    ),
    case(
        FieldType::DateTime,
        "foo 0530",
        "foo 05:30:00",
        "unmatched date half passes through",
    ),
    case(
        FieldType::DateTime,
        "1.1.16 bar",
        "1/1/2016 bar",
        "unmatched time half passes through",
    ),
];

// =============================================================================
// Golden Corpus: passthrough (identity law)
// =============================================================================

const PASSTHROUGH_CASES: &[GoldenCase] = &[
    case(FieldType::Date, "", "", "empty input"),
    case(FieldType::Date, "hello", "hello", "plain text"),
    case(FieldType::Date, "123", "123", "three digits match no date rule"),
    case(FieldType::Date, "1.2.3.4", "1.2.3.4", "too many groups"),
    case(FieldType::Date, "2021-01-01", "2021-01-01", "dash is no separator"),
    case(FieldType::Time, "5pm", "5pm", "meridiem suffix unsupported"),
    case(FieldType::Time, "12345", "12345", "five digits match no time rule"),
    case(FieldType::Time, "1234567890", "1234567890", "too long for packed form"),
    case(FieldType::Time, "5,5", "5,5", "comma only valid before a fraction"),
    case(FieldType::DateTime, "hello", "hello", "no space, not t"),
    case(FieldType::DateTime, "1.1.16", "1.1.16", "lone date is not a datetime"),
];

fn run(cases: &[GoldenCase]) {
    let anchor = NaiveDate::from_ymd_opt(2016, 8, 30)
        .unwrap()
        .and_hms_opt(14, 27, 1)
        .unwrap();
    let qf = Quickfield::with_clock(FixedClock(anchor));

    for case in cases {
        assert_eq!(
            qf.expand(case.field, case.input),
            case.expected,
            "{} ({} {:?})",
            case.description,
            case.field,
            case.input
        );
    }
}

#[test]
fn test_date_corpus() {
    run(DATE_CASES);
}

#[test]
fn test_time_corpus() {
    run(TIME_CASES);
}

#[test]
fn test_datetime_corpus() {
    run(DATETIME_CASES);
}

#[test]
fn test_passthrough_corpus() {
    run(PASSTHROUGH_CASES);
}

/// Expanding relative shortcuts twice against the same clock is stable, but
/// re-parsing formatted output in general is not asserted anywhere: a date
/// like `1/1/2016` would be re-read as month 1, day 1 - single-pass behavior
/// is the contract.
#[test]
fn test_same_clock_same_output() {
    let anchor = NaiveDate::from_ymd_opt(2016, 8, 30)
        .unwrap()
        .and_hms_opt(14, 27, 1)
        .unwrap();
    let qf = Quickfield::with_clock(FixedClock(anchor));

    let first = qf.expand(FieldType::DateTime, "t");
    let second = qf.expand(FieldType::DateTime, "t");
    assert_eq!(first, second);
}
