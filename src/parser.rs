//! Textual selector parsing.
//!
//! One selector describes the accepted values of a single field:
//! `*` (everything), `*/N` (every Nth value from the field minimum),
//! or a comma list of single values and `A-B` ranges. Five selectors
//! separated by whitespace form a whole query, in the order
//! `minute hour day-of-month month day-of-week`.

use crate::bitset::BitSet;
use crate::error::QueryError;
use crate::field::Field;
use crate::query::TimeQuery;

/// Resolve one field's selector into a value set.
///
/// Returns `None` for `"*"`, which narrows nothing. Every resolved
/// value is validated against the field's range before it is set.
pub(crate) fn field_values(field: Field, selector: &str) -> Result<Option<BitSet>, QueryError> {
    if selector == "*" {
        return Ok(None);
    }

    let (min, max) = field.range();
    let mut set = BitSet::new(field.slots());

    if let Some(step_text) = selector.strip_prefix("*/") {
        let step: i16 = step_text
            .parse()
            .map_err(|_| QueryError::parse(format!("invalid step selector: {selector}")))?;
        if step <= 0 {
            return Err(QueryError::parse(format!(
                "step must be positive: {selector}"
            )));
        }
        let mut v = min as i16;
        while v <= max as i16 {
            set.set(field.index(v as i8));
            v += step;
        }
        return Ok(Some(set));
    }

    for term in selector.split(',') {
        if let Some((lo_text, hi_text)) = term.split_once('-') {
            let lo = parse_value(field, lo_text, selector)?;
            let hi = parse_value(field, hi_text, selector)?;
            if lo > hi {
                return Err(QueryError::parse(format!(
                    "range start exceeds end in selector: {term}"
                )));
            }
            for v in lo..=hi {
                set.set(field.index(v));
            }
        } else {
            let v = parse_value(field, term, selector)?;
            set.set(field.index(v));
        }
    }

    Ok(Some(set))
}

/// Parse one integer term and check it against the field's range.
fn parse_value(field: Field, term: &str, selector: &str) -> Result<i8, QueryError> {
    let value: i16 = term
        .parse()
        .map_err(|_| QueryError::parse(format!("unsupported selector: {selector}")))?;
    let (min, max) = field.range();
    if value < min as i16 || value > max as i16 {
        return Err(QueryError::range(field, value));
    }
    Ok(value as i8)
}

/// Parse the five-token textual form of a whole query.
pub(crate) fn parse(s: &str) -> Result<TimeQuery, QueryError> {
    let tokens: Vec<&str> = s.split_whitespace().collect();
    if tokens.len() != Field::ALL.len() {
        return Err(QueryError::parse(format!(
            "expected 5 fields (minute hour day-of-month month day-of-week), got {}",
            tokens.len()
        )));
    }

    let mut query = TimeQuery::new();
    for (field, token) in Field::ALL.into_iter().zip(tokens) {
        if let Some(set) = field_values(field, token)? {
            query = query.intersect(field, set)?;
        }
    }
    Ok(query)
}
