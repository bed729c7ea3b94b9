//! Calendar date used for release dates and artist birthdates.
//!
//! # Responsibility
//! - Provide a total order over `(year, month, day)` triples.
//! - Check calendar validity against a reference "today".
//!
//! # Invariants
//! - Ordering is year-major, then month, then day, on the literal integers.
//!   Out-of-range fields are compared as-is, never normalized.
//! - Validity is a separate check; construction accepts any triple.

use chrono::{Datelike, Local};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Earliest year accepted by [`Date::is_valid_on`].
pub const MIN_YEAR: i32 = 1900;

const QUADRENNIAL: i32 = 4;
const CENTENNIAL: i32 = 100;
const QUATERCENTENNIAL: i32 = 400;

static MDY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([+-]?\d+)/([+-]?\d+)/([+-]?\d+)$").expect("valid date regex")
});

/// Error returned when `m/d/yyyy` text cannot be parsed into a [`Date`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    /// Text is not three `/`-separated integer fields.
    Malformed(String),
    /// A field does not fit the integer range.
    FieldOutOfRange(String),
}

impl Display for DateParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(text) => write!(f, "date `{text}` is not in m/d/yyyy form"),
            Self::FieldOutOfRange(text) => write!(f, "date `{text}` has an out-of-range field"),
        }
    }
}

impl Error for DateParseError {}

/// A `(year, month, day)` triple.
///
/// Field order matters: the derived `Ord` compares year, then month, then day.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Date {
    year: i32,
    month: i32,
    day: i32,
}

impl Date {
    pub fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }

    /// Parses `m/d/yyyy` text. Performs no calendar validation.
    pub fn parse_mdy(text: &str) -> Result<Self, DateParseError> {
        let captures = MDY_RE
            .captures(text)
            .ok_or_else(|| DateParseError::Malformed(text.to_string()))?;
        let field = |index: usize| -> Result<i32, DateParseError> {
            captures[index]
                .parse::<i32>()
                .map_err(|_| DateParseError::FieldOutOfRange(text.to_string()))
        };
        Ok(Self::new(field(3)?, field(1)?, field(2)?))
    }

    /// Returns the local calendar date.
    pub fn today() -> Self {
        let now = Local::now().date_naive();
        Self::new(now.year(), now.month() as i32, now.day() as i32)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> i32 {
        self.month
    }

    pub fn day(&self) -> i32 {
        self.day
    }

    /// Checks calendar validity relative to the local date.
    pub fn is_valid(&self) -> bool {
        self.is_valid_on(Self::today())
    }

    /// Checks calendar validity relative to `today`.
    ///
    /// A date is valid when the year is at least [`MIN_YEAR`], the date is
    /// not after `today`, and the month/day fit the Gregorian calendar.
    pub fn is_valid_on(&self, today: Date) -> bool {
        if self.year < MIN_YEAR || *self > today {
            return false;
        }
        if !(1..=12).contains(&self.month) {
            return false;
        }
        (1..=self.days_in_month()).contains(&self.day)
    }

    pub fn is_leap_year(&self) -> bool {
        if self.year % QUADRENNIAL != 0 {
            return false;
        }
        if self.year % CENTENNIAL != 0 {
            return true;
        }
        self.year % QUATERCENTENNIAL == 0
    }

    fn days_in_month(&self) -> i32 {
        match self.month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if self.is_leap_year() => 29,
            2 => 28,
            _ => 0,
        }
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.month, self.day, self.year)
    }
}
