//! Field types and the error for requesting an unknown one.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The three kinds of input field that carry a shorthand grammar.
///
/// The field type is chosen by the caller per parse call and selects which
/// grammar table and formatter apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Date,
    Time,
    DateTime,
}

impl FieldType {
    /// All field types, in grammar-listing order.
    pub const ALL: [FieldType; 3] = [FieldType::Date, FieldType::Time, FieldType::DateTime];

    /// Stable identifier, as accepted by [`FieldType::from_str`].
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Time => "time",
            Self::DateTime => "datetime",
        }
    }

    /// Human-readable name for help output.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Time => "Time",
            Self::DateTime => "Date + Time",
        }
    }

    /// Short aliases accepted alongside [`FieldType::id`].
    #[must_use]
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Date => &["d"],
            Self::Time => &["t"],
            Self::DateTime => &["dt", "date-time"],
        }
    }

    /// Check if the given name matches this field type's id or any alias.
    fn matches_name(self, name: &str) -> bool {
        self.id() == name || self.aliases().contains(&name)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error for a field type name outside {date, time, datetime}.
///
/// Only reachable through the string boundary ([`FieldType::from_str`]);
/// callers holding a [`FieldType`] value cannot hit it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field type '{0}' (expected date, time, or datetime)")]
pub struct UnknownFieldType(pub String);

impl FromStr for FieldType {
    type Err = UnknownFieldType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|field| field.matches_name(&name))
            .ok_or_else(|| UnknownFieldType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for field in FieldType::ALL {
            assert_eq!(field.id().parse::<FieldType>(), Ok(field));
        }
    }

    #[test]
    fn test_aliases_and_case() {
        assert_eq!("dt".parse::<FieldType>(), Ok(FieldType::DateTime));
        assert_eq!("d".parse::<FieldType>(), Ok(FieldType::Date));
        assert_eq!("DateTime".parse::<FieldType>(), Ok(FieldType::DateTime));
        assert_eq!(" time ".parse::<FieldType>(), Ok(FieldType::Time));
    }

    #[test]
    fn test_unknown_field_type() {
        let err = "duration".parse::<FieldType>().unwrap_err();
        assert_eq!(err, UnknownFieldType("duration".to_string()));
        assert!(err.to_string().contains("duration"));
    }
}
