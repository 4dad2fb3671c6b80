use jiff::Zoned;

use crate::bitset::BitSet;
use crate::error::QueryError;
use crate::field::Field;
use crate::parser;

/// An optional inclusive absolute time bound on a query.
///
/// Unbounded is a first-class state with its own combination rules, so
/// bound handling never degenerates into scattered null checks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Bound {
    #[default]
    Unbounded,
    At(Zoned),
}

impl Bound {
    pub fn as_zoned(&self) -> Option<&Zoned> {
        match self {
            Bound::Unbounded => None,
            Bound::At(t) => Some(t),
        }
    }

    /// The more restrictive of two lower bounds.
    fn later(&self, other: &Bound) -> Bound {
        match (self, other) {
            (Bound::Unbounded, b) => b.clone(),
            (a, Bound::Unbounded) => a.clone(),
            (Bound::At(a), Bound::At(b)) => Bound::At(a.max(b).clone()),
        }
    }

    /// The more restrictive of two upper bounds.
    fn earlier(&self, other: &Bound) -> Bound {
        match (self, other) {
            (Bound::Unbounded, b) => b.clone(),
            (a, Bound::Unbounded) => a.clone(),
            (Bound::At(a), Bound::At(b)) => Bound::At(a.min(b).clone()),
        }
    }
}

/// A recurring calendar constraint: one accepted-value set per calendar
/// field, plus optional absolute time bounds.
///
/// A fresh query matches every timestamp. Narrowing methods intersect
/// values into one field and return the updated query, so a query is
/// never observed in an inconsistent state: each step either succeeds or
/// fails with [`QueryError::Empty`].
///
/// ```
/// use timesieve::TimeQuery;
///
/// let query = TimeQuery::new().hour([9])?.minutes("0,30")?;
/// assert_eq!(query.to_string(), "0,30 9 * * *");
/// # Ok::<(), timesieve::QueryError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeQuery {
    fields: [BitSet; 5],
    not_before: Bound,
    not_after: Bound,
}

impl Default for TimeQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeQuery {
    /// A query matching every timestamp: all five fields fully open, no
    /// bounds.
    pub fn new() -> Self {
        Self {
            fields: Field::ALL.map(|f| BitSet::full(f.slots())),
            not_before: Bound::Unbounded,
            not_after: Bound::Unbounded,
        }
    }

    pub(crate) fn field_set(&self, field: Field) -> &BitSet {
        &self.fields[field as usize]
    }

    /// Inclusive lower time bound, if any.
    pub fn not_before(&self) -> &Bound {
        &self.not_before
    }

    /// Inclusive upper time bound, if any.
    pub fn not_after(&self) -> &Bound {
        &self.not_after
    }

    /// True if no timestamp can ever satisfy this query: some field has
    /// no accepted values, or the bounds cross.
    pub fn is_empty(&self) -> bool {
        if self.fields.iter().any(|set| set.is_empty()) {
            return true;
        }
        match (&self.not_before, &self.not_after) {
            (Bound::At(lo), Bound::At(hi)) => hi < lo,
            _ => false,
        }
    }

    /// Intersect `set` into one field, failing if that exhausts it.
    pub(crate) fn intersect(mut self, field: Field, set: BitSet) -> Result<Self, QueryError> {
        let current = &mut self.fields[field as usize];
        *current = current.intersection(&set);
        if current.is_empty() {
            return Err(QueryError::Empty);
        }
        Ok(self)
    }

    fn narrow_values(
        self,
        field: Field,
        values: impl IntoIterator<Item = i8>,
    ) -> Result<Self, QueryError> {
        let (min, max) = field.range();
        let mut set = BitSet::new(field.slots());
        for value in values {
            if value < min || value > max {
                return Err(QueryError::range(field, value as i16));
            }
            set.set(field.index(value));
        }
        self.intersect(field, set)
    }

    fn narrow_selector(self, field: Field, selector: &str) -> Result<Self, QueryError> {
        match parser::field_values(field, selector)? {
            // "*" narrows nothing
            None => Ok(self),
            Some(set) => self.intersect(field, set),
        }
    }

    /// Keep only the given minute values (0-59).
    pub fn minute(self, minutes: impl IntoIterator<Item = i8>) -> Result<Self, QueryError> {
        self.narrow_values(Field::Minute, minutes)
    }

    /// Keep only the given hour values (0-23).
    pub fn hour(self, hours: impl IntoIterator<Item = i8>) -> Result<Self, QueryError> {
        self.narrow_values(Field::Hour, hours)
    }

    /// Keep only the given days of the month (1-31).
    pub fn day(self, days: impl IntoIterator<Item = i8>) -> Result<Self, QueryError> {
        self.narrow_values(Field::DayOfMonth, days)
    }

    /// Keep only the given months (1-12).
    pub fn month(self, months: impl IntoIterator<Item = i8>) -> Result<Self, QueryError> {
        self.narrow_values(Field::Month, months)
    }

    /// Keep only the given days of the week. 0 and 7 both mean Sunday.
    pub fn weekday(self, days: impl IntoIterator<Item = i8>) -> Result<Self, QueryError> {
        self.narrow_values(Field::DayOfWeek, days)
    }

    /// Narrow the minute field with a selector like `"*/15"` or `"0,30"`.
    pub fn minutes(self, selector: &str) -> Result<Self, QueryError> {
        self.narrow_selector(Field::Minute, selector)
    }

    /// Narrow the hour field with a selector like `"9-17"`.
    pub fn hours(self, selector: &str) -> Result<Self, QueryError> {
        self.narrow_selector(Field::Hour, selector)
    }

    /// Narrow the day-of-month field with a selector like `"1,15"`.
    pub fn days(self, selector: &str) -> Result<Self, QueryError> {
        self.narrow_selector(Field::DayOfMonth, selector)
    }

    /// Narrow the month field with a selector like `"1-3,9"`.
    pub fn months(self, selector: &str) -> Result<Self, QueryError> {
        self.narrow_selector(Field::Month, selector)
    }

    /// Narrow the day-of-week field with a selector like `"1-5"`.
    pub fn weekdays(self, selector: &str) -> Result<Self, QueryError> {
        self.narrow_selector(Field::DayOfWeek, selector)
    }

    /// Accept only occurrences at or after `t`.
    pub fn after(mut self, t: Zoned) -> Result<Self, QueryError> {
        self.not_before = Bound::At(t);
        if self.is_empty() {
            return Err(QueryError::Empty);
        }
        Ok(self)
    }

    /// Accept only occurrences at or before `t`.
    pub fn before(mut self, t: Zoned) -> Result<Self, QueryError> {
        self.not_after = Bound::At(t);
        if self.is_empty() {
            return Err(QueryError::Empty);
        }
        Ok(self)
    }

    /// Accept only occurrences between the two instants, inclusive.
    /// Argument order does not matter.
    pub fn between(mut self, t1: Zoned, t2: Zoned) -> Result<Self, QueryError> {
        let (lo, hi) = if t2 < t1 { (t2, t1) } else { (t1, t2) };
        self.not_before = Bound::At(lo);
        self.not_after = Bound::At(hi);
        if self.is_empty() {
            return Err(QueryError::Empty);
        }
        Ok(self)
    }

    /// Combine two queries: the result matches exactly the timestamps
    /// both inputs match. Field sets intersect; the later lower bound
    /// and the earlier upper bound win.
    pub fn and(&self, other: &TimeQuery) -> Result<TimeQuery, QueryError> {
        let mut combined = TimeQuery::new();
        for field in Field::ALL {
            combined.fields[field as usize] =
                self.field_set(field).intersection(other.field_set(field));
        }
        combined.not_before = self.not_before.later(&other.not_before);
        combined.not_after = self.not_after.earlier(&other.not_after);

        if combined.is_empty() {
            return Err(QueryError::Empty);
        }
        Ok(combined)
    }
}

// --- free constructors: build an open query and narrow one field ---

/// Query matching the given minute values (0-59).
pub fn minute(minutes: impl IntoIterator<Item = i8>) -> Result<TimeQuery, QueryError> {
    TimeQuery::new().minute(minutes)
}

/// Query matching the given hour values (0-23).
pub fn hour(hours: impl IntoIterator<Item = i8>) -> Result<TimeQuery, QueryError> {
    TimeQuery::new().hour(hours)
}

/// Query matching the given days of the month (1-31).
pub fn day(days: impl IntoIterator<Item = i8>) -> Result<TimeQuery, QueryError> {
    TimeQuery::new().day(days)
}

/// Query matching the given months (1-12).
pub fn month(months: impl IntoIterator<Item = i8>) -> Result<TimeQuery, QueryError> {
    TimeQuery::new().month(months)
}

/// Query matching the given days of the week. 0 and 7 both mean Sunday.
pub fn weekday(days: impl IntoIterator<Item = i8>) -> Result<TimeQuery, QueryError> {
    TimeQuery::new().weekday(days)
}

/// Query built from a minute selector.
pub fn minutes(selector: &str) -> Result<TimeQuery, QueryError> {
    TimeQuery::new().minutes(selector)
}

/// Query built from an hour selector.
pub fn hours(selector: &str) -> Result<TimeQuery, QueryError> {
    TimeQuery::new().hours(selector)
}

/// Query built from a day-of-month selector.
pub fn days(selector: &str) -> Result<TimeQuery, QueryError> {
    TimeQuery::new().days(selector)
}

/// Query built from a month selector.
pub fn months(selector: &str) -> Result<TimeQuery, QueryError> {
    TimeQuery::new().months(selector)
}

/// Query built from a day-of-week selector.
pub fn weekdays(selector: &str) -> Result<TimeQuery, QueryError> {
    TimeQuery::new().weekdays(selector)
}
