//! The day identifier.
//!
//! A [`Day`] is nothing more than a parsed integer, but giving it a type
//! keeps "already validated" and "raw user input" apart: everything past the
//! CLI boundary works with `Day`, never with strings.
//!
//! Parsing accepts any base-10 integer, including zero and negatives.  The
//! aggregator range `1..=D` is simply empty for non-positive values; the
//! tool does not enforce a lower bound.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// A puzzle day identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(i64);

impl Day {
    /// Wrap an already-parsed integer.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// The raw integer value.
    pub fn value(&self) -> i64 {
        self.0
    }

    /// All days the aggregator must register, in ascending order: `1..=D`.
    ///
    /// Empty when the day is zero or negative.
    pub fn registered(self) -> impl Iterator<Item = Day> {
        (1..=self.0).map(Day)
    }

    /// Number of days [`Self::registered`] yields.
    pub fn registered_count(self) -> u64 {
        if self.0 < 1 { 0 } else { self.0 as u64 }
    }
}

impl FromStr for Day {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(Day)
            .map_err(|_| DomainError::InvalidDay { value: s.into() })
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
