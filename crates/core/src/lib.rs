//! Quickfield Core
//!
//! Expands the data-entry shorthand of classic ERP input fields into fully
//! formatted date and time values. Type `t` into a date field and get today,
//! `0530` into a time field and get `05:30:00`, `f` and get Friday of the
//! current week.
//!
//! Anything that matches no shorthand is returned unchanged - the engine
//! never rejects input.
//!
//! # Quick Start
//!
//! ```
//! use quickfield_core::{FieldType, Quickfield};
//!
//! let qf = Quickfield::new();
//!
//! assert_eq!(qf.expand(FieldType::Date, "1.1.16"), "1/1/2016");
//! assert_eq!(qf.expand(FieldType::Time, "0530"), "05:30:00");
//! assert_eq!(qf.expand(FieldType::DateTime, "1.1.16 0530"), "1/1/2016 05:30:00");
//!
//! // Unrecognized input passes through unchanged.
//! assert_eq!(qf.expand(FieldType::Date, "not a date"), "not a date");
//! ```
//!
//! # Deterministic "now"
//!
//! Relative shortcuts (`t`, `.`, weekday names) are anchored on the ambient
//! clock, which is injectable for reproducible output:
//!
//! ```
//! use chrono::NaiveDate;
//! use quickfield_core::{FieldType, FixedClock, Quickfield};
//!
//! // Tuesday, August 30th 2016.
//! let anchor = NaiveDate::from_ymd_opt(2016, 8, 30)
//!     .unwrap()
//!     .and_hms_opt(14, 27, 1)
//!     .unwrap();
//! let qf = Quickfield::with_clock(FixedClock(anchor));
//!
//! assert_eq!(qf.expand(FieldType::Date, "t"), "8/30/2016");
//! assert_eq!(qf.expand(FieldType::Date, "f"), "9/2/2016");
//! assert_eq!(qf.expand(FieldType::Time, "t"), "14:27:01");
//! ```

pub mod clock;
mod format;
pub mod grammar;
mod grammars;
pub mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use grammar::{Grammar, Rule};
pub use types::{FieldType, UnknownFieldType};

/// Main entry point - a configured expansion engine.
pub struct Quickfield {
    clock: Box<dyn Clock>,
}

impl Quickfield {
    /// Create an engine reading the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Create an engine with an injected clock.
    #[must_use]
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Box::new(clock),
        }
    }

    /// Expand a shorthand token for the given field type.
    ///
    /// Returns the input unchanged when no rule of the field's grammar
    /// matches; never fails.
    #[must_use]
    pub fn expand(&self, field: FieldType, input: &str) -> String {
        Self::grammar(field).expand(input, &*self.clock)
    }

    /// A parse handle bound to one field type.
    ///
    /// # Examples
    ///
    /// ```
    /// use quickfield_core::{FieldType, Quickfield};
    ///
    /// let qf = Quickfield::new();
    /// let time = qf.parser(FieldType::Time);
    /// assert_eq!(time.parse("0530"), "05:30:00");
    /// ```
    #[must_use]
    pub fn parser(&self, field: FieldType) -> FieldParser<'_> {
        FieldParser {
            field,
            engine: self,
        }
    }

    /// Parse handles for all field types at once.
    ///
    /// # Examples
    ///
    /// ```
    /// use quickfield_core::Quickfield;
    ///
    /// let qf = Quickfield::new();
    /// let parsers = qf.parsers();
    /// assert_eq!(parsers.date.parse("1.1.16"), "1/1/2016");
    /// assert_eq!(parsers.time.parse("5"), "05:00:00");
    /// ```
    #[must_use]
    pub fn parsers(&self) -> Parsers<'_> {
        Parsers {
            date: self.parser(FieldType::Date),
            time: self.parser(FieldType::Time),
            datetime: self.parser(FieldType::DateTime),
        }
    }

    /// The grammar table for a field type (for help/documentation).
    #[must_use]
    pub fn grammar(field: FieldType) -> &'static Grammar {
        match field {
            FieldType::Date => grammars::date::grammar(),
            FieldType::Time => grammars::time::grammar(),
            FieldType::DateTime => grammars::datetime::grammar(),
        }
    }

    /// All grammar tables, in field-type order.
    pub fn grammars() -> impl Iterator<Item = &'static Grammar> {
        FieldType::ALL.into_iter().map(Self::grammar)
    }
}

impl Default for Quickfield {
    fn default() -> Self {
        Self::new()
    }
}

/// A parser bound to a single field type.
pub struct FieldParser<'a> {
    field: FieldType,
    engine: &'a Quickfield,
}

impl FieldParser<'_> {
    /// The field type this parser expands for.
    #[must_use]
    pub fn field(&self) -> FieldType {
        self.field
    }

    /// Expand a shorthand token, or return it unchanged.
    #[must_use]
    pub fn parse(&self, input: &str) -> String {
        self.engine.expand(self.field, input)
    }
}

/// One parser per supported field type.
pub struct Parsers<'a> {
    pub date: FieldParser<'a>,
    pub time: FieldParser<'a>,
    pub datetime: FieldParser<'a>,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The passthrough law: input matching no rule comes back untouched for
    /// every field type.
    #[test]
    fn test_passthrough_law() {
        let qf = Quickfield::new();
        for field in FieldType::ALL {
            for input in ["", "no shorthand here", "x1", "§", "2021-01-01"] {
                assert_eq!(qf.expand(field, input), input, "{field} {input:?}");
            }
        }
    }

    #[test]
    fn test_grammar_metadata_covers_all_fields() {
        let fields: Vec<_> = Quickfield::grammars().map(Grammar::field).collect();
        assert_eq!(fields, FieldType::ALL);
        for grammar in Quickfield::grammars() {
            assert!(grammar.rules().count() >= 2);
        }
    }

    #[test]
    fn test_bound_parsers_match_expand() {
        let qf = Quickfield::new();
        let parsers = qf.parsers();
        assert_eq!(parsers.datetime.parse("1.1.16 0530"), "1/1/2016 05:30:00");
        assert_eq!(
            qf.parser(FieldType::Date).parse("10.9"),
            qf.expand(FieldType::Date, "10.9")
        );
    }
}
