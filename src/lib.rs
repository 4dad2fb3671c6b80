//! timesieve — cron-style calendar constraints.
//!
//! A [`TimeQuery`] holds one accepted-value set per calendar field
//! (minute, hour, day of month, month, day of week) plus optional
//! absolute time bounds. Build one from integers, selectors, or the
//! five-token cron form, then ask whether a timestamp matches and when
//! the next match occurs.
//!
//! # Examples
//!
//! ```
//! use timesieve::TimeQuery;
//!
//! let query: TimeQuery = "0,30 9-17 * * 1-5".parse().unwrap();
//! let from: jiff::Zoned = "2026-02-06T12:41:00[UTC]".parse().unwrap();
//! let next = query.next_from(&from).unwrap();
//! assert_eq!(next.to_string(), "2026-02-06T13:00:00+00:00[UTC]");
//! ```

mod bitset;
mod display;
pub mod error;
pub mod eval;
pub mod field;
mod parser;
pub mod query;
#[cfg(feature = "wait")]
pub mod wait;

pub use error::QueryError;
pub use eval::Occurrences;
pub use field::Field;
pub use query::{Bound, TimeQuery};
pub use query::{
    day, days, hour, hours, minute, minutes, month, months, weekday, weekdays,
};

use jiff::Zoned;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// --- TimeQuery convenience methods ---

impl TimeQuery {
    /// Parse the five-token textual form
    /// (`minute hour day-of-month month day-of-week`).
    pub fn parse(input: &str) -> Result<Self, QueryError> {
        parser::parse(input)
    }

    /// Check whether a timestamp's calendar fields all match.
    /// Time bounds are not consulted; only [`next_from`](Self::next_from)
    /// applies them.
    pub fn matches(&self, t: &Zoned) -> bool {
        eval::matches(self, t)
    }

    /// Compute the next occurrence strictly after `from`.
    pub fn next_from(&self, from: &Zoned) -> Result<Zoned, QueryError> {
        eval::next_from(self, from)
    }

    /// Compute the next occurrence after the current instant.
    pub fn next_now(&self) -> Result<Zoned, QueryError> {
        eval::next_from(self, &Zoned::now())
    }

    /// Compute the next `n` occurrences after `from`, eagerly.
    pub fn next_n_from(&self, from: &Zoned, n: usize) -> Result<Vec<Zoned>, QueryError> {
        eval::next_n_from(self, from, n)
    }

    /// Compute the next `n` occurrences after the current instant.
    pub fn next_n_now(&self, n: usize) -> Result<Vec<Zoned>, QueryError> {
        eval::next_n_from(self, &Zoned::now(), n)
    }

    /// Lazily iterate over occurrences after `from`.
    pub fn occurrences(&self, from: &Zoned) -> Occurrences<'_> {
        Occurrences::new(self, from)
    }
}

impl FromStr for TimeQuery {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl Serialize for TimeQuery {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for TimeQuery {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Deserialize from the five-token string form
        let s = String::deserialize(deserializer)?;
        TimeQuery::parse(&s).map_err(serde::de::Error::custom)
    }
}
