use std::fmt;

use crate::field::Field;

/// All errors produced by timesieve.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QueryError {
    /// A supplied value lies outside the field's valid bounds.
    Range {
        field: Field,
        value: i16,
        min: i8,
        max: i8,
    },

    /// Selector text matches no supported grammar, or the five-token
    /// string form has the wrong shape.
    Parse { message: String },

    /// The operation would leave some field with zero matching values,
    /// or the time bounds cross. The dominant expected error: every
    /// narrowing caller should be prepared for it.
    Empty,

    /// No occurrence exists within the 366-day search horizon (or
    /// within the query's time bounds).
    Unsatisfiable,
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range {
                field,
                value,
                min,
                max,
            } => write!(
                f,
                "{} must be between {min} and {max}, got {value}",
                field.name()
            ),
            Self::Parse { message } => write!(f, "{message}"),
            Self::Empty => write!(f, "no date matches the query"),
            Self::Unsatisfiable => write!(f, "no occurrence within the search horizon"),
        }
    }
}

impl std::error::Error for QueryError {}

impl QueryError {
    pub(crate) fn range(field: Field, value: i16) -> Self {
        let (min, max) = field.range();
        Self::Range {
            field,
            value,
            min,
            max,
        }
    }

    pub(crate) fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }
}
