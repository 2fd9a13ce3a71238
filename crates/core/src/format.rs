//! Output formatting for expanded values.
//!
//! Pure string assembly: resolvers compute the components, these functions
//! decide how they read. Components arrive as whatever the resolver captured
//! or computed, so a `Display` bound keeps the callers free to pass captured
//! text and chrono numbers alike.

use std::fmt::Display;

/// `{month}/{day}/{year}` with components passed through verbatim (no
/// zero-padding).
pub(crate) fn date(day: impl Display, month: impl Display, year: impl Display) -> String {
    format!("{month}/{day}/{year}")
}

/// `{HH}:{MM}:{SS}`, each component left-padded with zeros to two
/// characters. A non-empty fraction appends `.{fraction}` verbatim.
pub(crate) fn time(
    hours: impl Display,
    minutes: impl Display,
    seconds: impl Display,
    fraction: Option<&str>,
) -> String {
    let mut out = format!(
        "{:0>2}:{:0>2}:{:0>2}",
        hours.to_string(),
        minutes.to_string(),
        seconds.to_string()
    );
    if let Some(fraction) = fraction.filter(|f| !f.is_empty()) {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Date and time halves joined by a single space.
pub(crate) fn date_time(date: &str, time: &str) -> String {
    format!("{date} {time}")
}
