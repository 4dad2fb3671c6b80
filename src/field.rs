use std::fmt;

use jiff::Zoned;

/// One of the five calendar dimensions a query constrains.
///
/// Declaration order is also the token order of the textual form
/// (`minute hour day-of-month month day-of-week`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl Field {
    /// All fields, in declaration (and textual) order.
    pub const ALL: [Field; 5] = [
        Field::Minute,
        Field::Hour,
        Field::DayOfMonth,
        Field::Month,
        Field::DayOfWeek,
    ];

    /// Inclusive range of valid calendar values.
    ///
    /// Day-of-week accepts both 0 and 7 for Sunday, so its raw range is
    /// [0, 7] even though it has only seven distinct values.
    pub fn range(self) -> (i8, i8) {
        match self {
            Field::Minute => (0, 59),
            Field::Hour => (0, 23),
            Field::DayOfMonth => (1, 31),
            Field::Month => (1, 12),
            Field::DayOfWeek => (0, 7),
        }
    }

    /// Number of distinct bit positions for this field.
    pub(crate) fn slots(self) -> u32 {
        match self {
            // 0 and 7 share the Sunday slot
            Field::DayOfWeek => 7,
            _ => {
                let (min, max) = self.range();
                (max - min + 1) as u32
            }
        }
    }

    /// Map a calendar value (assumed within `range`) to its zero-based
    /// bit position.
    pub(crate) fn index(self, value: i8) -> u32 {
        match self {
            Field::DayOfWeek => {
                if value == 7 {
                    0
                } else {
                    value as u32
                }
            }
            _ => {
                let (min, _) = self.range();
                (value - min) as u32
            }
        }
    }

    /// The calendar value a bit position stands for. Inverse of `index`
    /// (day-of-week positions map back to 0..=6, never 7).
    pub(crate) fn value(self, index: u32) -> i8 {
        let (min, _) = self.range();
        match self {
            Field::DayOfWeek => index as i8,
            _ => index as i8 + min,
        }
    }

    /// Extract this field's calendar value from a timestamp.
    pub(crate) fn of(self, t: &Zoned) -> i8 {
        match self {
            Field::Minute => t.minute(),
            Field::Hour => t.hour(),
            Field::DayOfMonth => t.day(),
            Field::Month => t.month(),
            Field::DayOfWeek => t.weekday().to_sunday_zero_offset(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::Minute => "minute",
            Field::Hour => "hour",
            Field::DayOfMonth => "day of month",
            Field::Month => "month",
            Field::DayOfWeek => "day of week",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
