use std::fmt;

use crate::field::Field;
use crate::query::TimeQuery;

impl fmt::Display for TimeQuery {
    /// Render the canonical five-token form, in the same field order
    /// `parse` reads: a fully open field as `*`, anything else as the
    /// ascending comma list of accepted calendar values.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in Field::ALL.into_iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            let set = self.field_set(field);
            if set.is_full() {
                write!(f, "*")?;
                continue;
            }
            for (j, index) in set.indices().enumerate() {
                if j > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{}", field.value(index))?;
            }
        }
        Ok(())
    }
}
