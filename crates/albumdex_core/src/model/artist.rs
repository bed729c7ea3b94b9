//! Artist identity and ordering.
//!
//! # Responsibility
//! - Hold an artist's display name and birthdate.
//! - Provide identity (`PartialEq`) and sort order (`compare`).
//!
//! # Invariants
//! - `name` has at least one whitespace-delimited token.
//! - Equality is case-sensitive on `name`; ordering is case-insensitive.
//!   Two artists may sort as equal without being equal.

use crate::model::album::ValidationError;
use crate::model::date::Date;
use crate::model::words::{compare_words_ignore_case, split_words};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// Album artist. Immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ArtistFields")]
pub struct Artist {
    name: String,
    born: Date,
}

#[derive(Deserialize)]
struct ArtistFields {
    name: String,
    born: Date,
}

impl TryFrom<ArtistFields> for Artist {
    type Error = ValidationError;

    fn try_from(value: ArtistFields) -> Result<Self, Self::Error> {
        Self::new(value.name, value.born)
    }
}

impl Artist {
    /// Creates an artist.
    ///
    /// # Errors
    /// - [`ValidationError::BlankArtistName`] when `name` has no tokens.
    pub fn new(name: impl Into<String>, born: Date) -> Result<Self, ValidationError> {
        let name = name.into();
        if split_words(&name).is_empty() {
            return Err(ValidationError::BlankArtistName);
        }
        Ok(Self { name, born })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn born(&self) -> Date {
        self.born
    }

    /// Orders by first name, then last name, then birthdate.
    ///
    /// Names compare case-insensitively by character code. A single-token
    /// name serves as both first and last name.
    pub fn compare(&self, other: &Artist) -> Ordering {
        let (first, last) = self.first_and_last();
        let (other_first, other_last) = other.first_and_last();

        compare_words_ignore_case(first, other_first)
            .then_with(|| compare_words_ignore_case(last, other_last))
            .then_with(|| self.born.cmp(&other.born))
    }

    fn first_and_last(&self) -> (&str, &str) {
        let words = split_words(&self.name);
        let first = words.first().copied().unwrap_or_default();
        let last = words.last().copied().unwrap_or_default();
        (first, last)
    }
}

impl PartialEq for Artist {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.born == other.born
    }
}

impl Eq for Artist {}

impl Display for Artist {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.name, self.born)
    }
}

#[cfg(test)]
mod tests {
    use super::Artist;
    use crate::model::album::ValidationError;
    use crate::model::date::Date;
    use std::cmp::Ordering;

    fn artist(name: &str, born: Date) -> Artist {
        Artist::new(name, born).unwrap()
    }

    #[test]
    fn compare_uses_first_name_before_last_name() {
        let early = Date::new(1990, 10, 30);
        let jacky = artist("Jacky Smalls", early);
        let yasmine = artist("Yasmine Ahmed", early);

        assert_eq!(jacky.compare(&yasmine), Ordering::Less);
        assert_eq!(yasmine.compare(&jacky), Ordering::Greater);
    }

    #[test]
    fn compare_falls_back_to_birthdate() {
        let first = artist("Jacky Smalls", Date::new(1990, 10, 30));
        let second = artist("Jacky Smalls", Date::new(2020, 7, 23));
        let duplicate = artist("Jacky Smalls", Date::new(1990, 10, 30));

        assert_eq!(first.compare(&second), Ordering::Less);
        assert_eq!(second.compare(&first), Ordering::Greater);
        assert_eq!(first.compare(&duplicate), Ordering::Equal);
    }

    #[test]
    fn single_token_name_is_first_and_last() {
        let born = Date::new(1958, 8, 16);
        let madonna = artist("Madonna", born);
        let madonna_ciccone = artist("Madonna Ciccone", born);

        // Same first token, then "madonna" vs "ciccone" on the last token.
        assert_eq!(madonna.compare(&madonna_ciccone), Ordering::Greater);
    }

    #[test]
    fn ordering_ignores_case_but_equality_does_not() {
        let born = Date::new(1942, 6, 18);
        let upper = artist("Paul McCartney", born);
        let lower = artist("paul mccartney", born);

        assert_eq!(upper.compare(&lower), Ordering::Equal);
        assert_ne!(upper, lower);
        assert_eq!(upper, artist("Paul McCartney", born));
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = Artist::new("   ", Date::new(1990, 1, 1)).unwrap_err();
        assert_eq!(err, ValidationError::BlankArtistName);
    }

    #[test]
    fn display_is_name_and_birthdate() {
        let taylor = artist("Taylor Swift", Date::new(1989, 12, 13));
        assert_eq!(taylor.to_string(), "Taylor Swift:12/13/1989");
    }
}
