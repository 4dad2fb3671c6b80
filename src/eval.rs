//! Matching and the cascading next-occurrence search.
//!
//! The search never scans every minute of a year. It probes the
//! remaining minutes of the current hour, then pins the minute to the
//! earliest accepted one and probes the remaining hours of the day,
//! then pins hour and minute and walks forward day by day up to the
//! horizon.

use jiff::{RoundMode, Span, Unit, Zoned, ZonedRound};

use crate::error::QueryError;
use crate::field::Field;
use crate::query::{Bound, TimeQuery};

/// Day-by-day search horizon. A year, leap years included.
const HORIZON_DAYS: i64 = 366;

/// True iff every field of `t` is accepted by the query.
///
/// Time bounds are deliberately not consulted here; `next_from` applies
/// them around its candidates.
pub fn matches(query: &TimeQuery, t: &Zoned) -> bool {
    Field::ALL
        .into_iter()
        .all(|field| query.field_set(field).test(field.index(field.of(t))))
}

/// Timestamp arithmetic only fails at the edge of representable time,
/// where no further occurrence can exist anyway.
fn overflow(_: jiff::Error) -> QueryError {
    QueryError::Unsatisfiable
}

/// Earliest timestamp strictly after `from` (truncated to the minute)
/// that the query accepts and that lies within its bounds.
pub fn next_from(query: &TimeQuery, from: &Zoned) -> Result<Zoned, QueryError> {
    let mut from = from;
    if let Bound::At(lo) = query.not_before() {
        if lo > from {
            from = lo;
        }
    }

    let in_bounds = |t: &Zoned| match query.not_after() {
        Bound::At(hi) => t <= hi,
        Bound::Unbounded => true,
    };

    // start of the next whole minute
    let start = from
        .round(
            ZonedRound::new()
                .smallest(Unit::Minute)
                .mode(RoundMode::Trunc),
        )
        .map_err(overflow)?
        .checked_add(Span::new().minutes(1))
        .map_err(overflow)?;

    // remaining minutes of the current hour
    let start_minute = start.minute() as i64;
    for minute in start_minute..60 {
        let t = start
            .checked_add(Span::new().minutes(minute - start_minute))
            .map_err(overflow)?;
        if !in_bounds(&t) {
            return Err(QueryError::Unsatisfiable);
        }
        if matches(query, &t) {
            return Ok(t);
        }
    }

    // from here on the minute is pinned to the earliest accepted one;
    // continue at that minute in the next hour
    let lowest_minute = query.field_set(Field::Minute).lowest_set()? as i64;
    let start = start
        .checked_add(Span::new().minutes(60 - start_minute + lowest_minute))
        .map_err(overflow)?;

    // remaining hours of the current day
    let start_hour = start.hour() as i64;
    for hour in start_hour..24 {
        let t = start
            .checked_add(Span::new().hours(hour - start_hour))
            .map_err(overflow)?;
        if !in_bounds(&t) {
            return Err(QueryError::Unsatisfiable);
        }
        if matches(query, &t) {
            return Ok(t);
        }
    }

    // pin the hour too and walk forward a day at a time
    let lowest_hour = query.field_set(Field::Hour).lowest_set()? as i64;
    let start = start
        .checked_add(Span::new().hours(24 - start_hour + lowest_hour))
        .map_err(overflow)?;

    for day in 0..HORIZON_DAYS {
        let t = start.checked_add(Span::new().days(day)).map_err(overflow)?;
        if !in_bounds(&t) {
            return Err(QueryError::Unsatisfiable);
        }
        if matches(query, &t) {
            return Ok(t);
        }
    }

    Err(QueryError::Unsatisfiable)
}

/// The next `n` occurrences after `from`, strictly increasing, each
/// seeding the search for the one after it. Eager: fails outright if
/// any step fails.
pub fn next_n_from(query: &TimeQuery, from: &Zoned, n: usize) -> Result<Vec<Zoned>, QueryError> {
    let mut result = Vec::with_capacity(n);
    let mut cursor = from.clone();
    for _ in 0..n {
        cursor = next_from(query, &cursor)?;
        result.push(cursor.clone());
    }
    Ok(result)
}

/// Lazy iterator over a query's occurrences after a starting point.
///
/// An exhausted search (horizon passed, or upper bound reached) ends
/// the stream; a corrupted query surfaces as an error item.
pub struct Occurrences<'a> {
    query: &'a TimeQuery,
    cursor: Zoned,
    done: bool,
}

impl<'a> Occurrences<'a> {
    pub(crate) fn new(query: &'a TimeQuery, from: &Zoned) -> Self {
        Self {
            query,
            cursor: from.clone(),
            done: false,
        }
    }
}

impl Iterator for Occurrences<'_> {
    type Item = Result<Zoned, QueryError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match next_from(self.query, &self.cursor) {
            Ok(t) => {
                self.cursor = t.clone();
                Some(Ok(t))
            }
            Err(QueryError::Unsatisfiable) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
