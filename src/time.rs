//! Defines [`TimeOfDay`], the only input the clock geometry reads.

use chrono::{NaiveTime, ParseError, Timelike};
use std::fmt;
use std::str::FromStr;

/// A wall-clock time reduced to its hour, minute, and second. There is no
/// date, timezone, or sub-second part; callers normalize to whatever
/// reference they want to draw before converting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
    second: u32,
}

impl TimeOfDay {
    /// Returns `None` unless `hour < 24`, `minute < 60`, and `second < 60`.
    pub fn from_hms_opt(hour: u32, minute: u32, second: u32) -> Option<Self> {
        match hour < 24 && minute < 60 && second < 60 {
            true => Some(TimeOfDay {
                hour,
                minute,
                second,
            }),
            false => None,
        }
    }

    pub fn midnight() -> Self {
        TimeOfDay {
            hour: 0,
            minute: 0,
            second: 0,
        }
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }
}

impl<T: Timelike> From<&T> for TimeOfDay {
    /// Reads the hour, minute, and second of any [`chrono`] time. Leap
    /// seconds live in chrono's nanosecond field, so `second()` is always
    /// below 60.
    fn from(t: &T) -> TimeOfDay {
        TimeOfDay {
            hour: t.hour(),
            minute: t.minute(),
            second: t.second(),
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = ParseError;

    /// Parses `HH:MM:SS`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = NaiveTime::parse_from_str(s, "%H:%M:%S")?;
        Ok(TimeOfDay::from(&t))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}
