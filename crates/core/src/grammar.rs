//! First-match-wins rule scanning shared by all grammars.

use regex::{Captures, Regex};
use tracing::{debug, trace};

use crate::clock::Clock;
use crate::types::FieldType;

/// Computes the expanded value from a matched shorthand and the ambient
/// clock. Returning `None` lets the scan fall through to the next rule and
/// ultimately to passthrough.
pub(crate) type Resolver = Box<dyn Fn(&Captures<'_>, &dyn Clock) -> Option<String> + Send + Sync>;

/// One shorthand rule: an anchored recognition pattern plus the resolver
/// that expands it.
pub struct Rule {
    pattern: Regex,
    resolver: Resolver,
    synopsis: &'static str,
    example: &'static str,
}

impl Rule {
    pub(crate) fn new(
        pattern: &str,
        resolver: impl Fn(&Captures<'_>, &dyn Clock) -> Option<String> + Send + Sync + 'static,
        synopsis: &'static str,
        example: &'static str,
    ) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            resolver: Box::new(resolver),
            synopsis,
            example,
        }
    }

    /// The anchored recognition pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// One-line description for grammar listings.
    #[must_use]
    pub fn synopsis(&self) -> &'static str {
        self.synopsis
    }

    /// Example shorthand accepted by this rule.
    #[must_use]
    pub fn example(&self) -> &'static str {
        self.example
    }
}

/// The ordered rule list for one field type.
///
/// Order is significant: the first rule whose pattern matches the whole
/// input wins, and input matching no rule passes through unchanged.
pub struct Grammar {
    field: FieldType,
    rules: Vec<Rule>,
}

impl Grammar {
    pub(crate) fn new(field: FieldType, rules: Vec<Rule>) -> Self {
        Self { field, rules }
    }

    /// The field type this grammar belongs to.
    #[must_use]
    pub fn field(&self) -> FieldType {
        self.field
    }

    /// The rules in match order.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Expand a shorthand token, or return it unchanged when no rule
    /// matches.
    #[must_use]
    pub fn expand(&self, input: &str, clock: &dyn Clock) -> String {
        trace!(field = self.field.id(), input, "scanning grammar");
        for rule in &self.rules {
            let Some(caps) = rule.pattern.captures(input) else {
                continue;
            };
            if let Some(expanded) = (rule.resolver)(&caps, clock) {
                debug!(
                    field = self.field.id(),
                    rule = rule.synopsis,
                    input,
                    expanded = %expanded,
                    "shorthand expanded"
                );
                return expanded;
            }
        }
        trace!(field = self.field.id(), input, "no rule matched, passing through");
        input.to_string()
    }
}
