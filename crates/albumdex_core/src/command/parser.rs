//! Comma-separated command line parsing.
//!
//! # Responsibility
//! - Turn one input line into a typed [`Command`].
//! - Reject malformed lines with a typed [`CommandError`].
//!
//! # Invariants
//! - Parsing is purely syntactic: calendar validity and collection membership
//!   are checked by the session, not here.
//! - Trailing empty fields are dropped before counting fields.

use crate::model::album::ValidationError;
use crate::model::date::{Date, DateParseError};
use crate::model::genre::Genre;
use crate::model::rating::Star;
use std::error::Error;
use std::fmt::{Display, Formatter};

const ADD_FIELDS: usize = 6;
const DELETE_FIELDS: usize = 4;
const RATE_FIELDS: usize = 5;
const MIN_STARS: i64 = 1;
const MAX_STARS: i64 = 5;

/// Message shown for every malformed command except a bad star value.
pub const INVALID_COMMAND_MESSAGE: &str = "Invalid command!";
/// Message shown when a rating falls outside `1..=5`.
pub const INVALID_RATING_MESSAGE: &str = "Invalid rating, rating scale is 1 to 5.";

/// Title/artist/birthdate triple that identifies one album.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumRef {
    pub title: String,
    pub artist: String,
    /// Birthdate exactly as typed, echoed back in messages.
    pub born_text: String,
    pub born: Date,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `A,title,artist,dob,genre,released`
    Add {
        album: AlbumRef,
        genre: Genre,
        released: Date,
    },
    /// `D,title,artist,dob`
    Delete { album: AlbumRef },
    /// `R,title,artist,dob,stars`
    Rate { album: AlbumRef, stars: Star },
    /// `PD`
    PrintByDate,
    /// `PG`
    PrintByGenre,
    /// `PR`
    PrintByRating,
    /// `Q`
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    UnknownOpcode(String),
    WrongFieldCount {
        opcode: &'static str,
        expected: usize,
        actual: usize,
    },
    Date(DateParseError),
    InvalidNumber(String),
    RatingOutOfRange(i64),
    Validation(ValidationError),
}

impl CommandError {
    /// Console message for this rejection.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::RatingOutOfRange(_) => INVALID_RATING_MESSAGE,
            _ => INVALID_COMMAND_MESSAGE,
        }
    }

    /// Stable short code for log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownOpcode(_) => "unknown_opcode",
            Self::WrongFieldCount { .. } => "wrong_field_count",
            Self::Date(_) => "bad_date",
            Self::InvalidNumber(_) => "bad_number",
            Self::RatingOutOfRange(_) => "rating_out_of_range",
            Self::Validation(_) => "validation",
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownOpcode(opcode) => write!(f, "unknown command `{opcode}`"),
            Self::WrongFieldCount {
                opcode,
                expected,
                actual,
            } => write!(f, "`{opcode}` expects {expected} fields, got {actual}"),
            Self::Date(err) => write!(f, "{err}"),
            Self::InvalidNumber(text) => write!(f, "`{text}` is not a number"),
            Self::RatingOutOfRange(stars) => {
                write!(f, "rating {stars} is outside {MIN_STARS}..={MAX_STARS}")
            }
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Date(err) => Some(err),
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DateParseError> for CommandError {
    fn from(value: DateParseError) -> Self {
        Self::Date(value)
    }
}

impl From<ValidationError> for CommandError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Parses one command line.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let fields = split_fields(line);
    let opcode = fields.first().copied().unwrap_or_default();

    match opcode {
        "A" => {
            expect_fields("A", &fields, ADD_FIELDS)?;
            let album = album_ref(&fields)?;
            let released = Date::parse_mdy(fields[5])?;
            Ok(Command::Add {
                album,
                genre: Genre::from_token(fields[4]),
                released,
            })
        }
        "D" => {
            expect_fields("D", &fields, DELETE_FIELDS)?;
            Ok(Command::Delete {
                album: album_ref(&fields)?,
            })
        }
        "R" => {
            expect_fields("R", &fields, RATE_FIELDS)?;
            // Star range is checked before the birthdate is parsed.
            let stars = parse_stars(fields[4])?;
            Ok(Command::Rate {
                album: album_ref(&fields)?,
                stars,
            })
        }
        "PD" => Ok(Command::PrintByDate),
        "PG" => Ok(Command::PrintByGenre),
        "PR" => Ok(Command::PrintByRating),
        "Q" => Ok(Command::Quit),
        other => Err(CommandError::UnknownOpcode(other.to_string())),
    }
}

fn split_fields(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(',').collect();
    while fields.len() > 1 && fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    fields
}

fn expect_fields(
    opcode: &'static str,
    fields: &[&str],
    expected: usize,
) -> Result<(), CommandError> {
    if fields.len() != expected {
        return Err(CommandError::WrongFieldCount {
            opcode,
            expected,
            actual: fields.len(),
        });
    }
    Ok(())
}

fn album_ref(fields: &[&str]) -> Result<AlbumRef, CommandError> {
    Ok(AlbumRef {
        title: fields[1].to_string(),
        artist: fields[2].to_string(),
        born_text: fields[3].to_string(),
        born: Date::parse_mdy(fields[3])?,
    })
}

fn parse_stars(text: &str) -> Result<Star, CommandError> {
    let stars = text
        .parse::<i64>()
        .map_err(|_| CommandError::InvalidNumber(text.to_string()))?;
    if !(MIN_STARS..=MAX_STARS).contains(&stars) {
        return Err(CommandError::RatingOutOfRange(stars));
    }
    Star::try_from(stars).map_err(|_| CommandError::RatingOutOfRange(stars))
}
