//! Album record.
//!
//! # Responsibility
//! - Aggregate title, artist, genre, release date and rating history.
//! - Define album identity and the pairwise orderings used by sorts.
//!
//! # Invariants
//! - `title` has at least one whitespace-delimited token.
//! - Identity is case-insensitive title plus artist equality; genre, release
//!   date and ratings never participate.

use crate::model::artist::Artist;
use crate::model::date::Date;
use crate::model::genre::Genre;
use crate::model::rating::{RatingLedger, Star};
use crate::model::words::{compare_words, compare_words_ignore_case, eq_ignore_case, split_words};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Precondition violations raised while constructing domain entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    BlankTitle,
    BlankArtistName,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "album title must contain at least one word"),
            Self::BlankArtistName => write!(f, "artist name must contain at least one word"),
        }
    }
}

impl Error for ValidationError {}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "AlbumFields")]
pub struct Album {
    title: String,
    artist: Artist,
    genre: Genre,
    released: Date,
    ratings: RatingLedger,
}

#[derive(Deserialize)]
struct AlbumFields {
    title: String,
    artist: Artist,
    genre: Genre,
    released: Date,
    #[serde(default)]
    ratings: RatingLedger,
}

impl TryFrom<AlbumFields> for Album {
    type Error = ValidationError;

    fn try_from(value: AlbumFields) -> Result<Self, Self::Error> {
        let mut album = Self::new(value.title, value.artist, value.genre, value.released)?;
        album.ratings = value.ratings;
        Ok(album)
    }
}

impl Album {
    /// Creates an unrated album.
    ///
    /// # Errors
    /// - [`ValidationError::BlankTitle`] when `title` has no tokens.
    pub fn new(
        title: impl Into<String>,
        artist: Artist,
        genre: Genre,
        released: Date,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        validate_title(&title)?;
        Ok(Self {
            title,
            artist,
            genre,
            released,
            ratings: RatingLedger::new(),
        })
    }

    /// Creates a lookup key for collection searches.
    ///
    /// Only title and artist take part in equality, so genre and release
    /// date are filled with placeholders.
    pub fn key(title: impl Into<String>, artist: Artist) -> Result<Self, ValidationError> {
        Self::new(title, artist, Genre::Unknown, Date::new(0, 0, 0))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), ValidationError> {
        let title = title.into();
        validate_title(&title)?;
        self.title = title;
        Ok(())
    }

    pub fn artist(&self) -> &Artist {
        &self.artist
    }

    pub fn set_artist(&mut self, artist: Artist) {
        self.artist = artist;
    }

    pub fn genre(&self) -> Genre {
        self.genre
    }

    pub fn set_genre(&mut self, genre: Genre) {
        self.genre = genre;
    }

    pub fn released(&self) -> Date {
        self.released
    }

    pub fn set_released(&mut self, released: Date) {
        self.released = released;
    }

    pub fn ratings(&self) -> &RatingLedger {
        &self.ratings
    }

    /// Records one rating. Range checking belongs to the caller.
    pub fn rate(&mut self, star: Star) {
        self.ratings.push(star);
    }

    /// Mean star value, or `None` when the album has never been rated.
    pub fn average_rating(&self) -> Option<f64> {
        self.ratings.average()
    }

    pub fn rating_summary(&self) -> String {
        self.ratings.summary()
    }

    /// Orders titles word by word, case-insensitively.
    ///
    /// The first differing word decides. When one title is a word-prefix of
    /// the other, the shorter title comes first.
    pub fn compare_titles(&self, other: &Album) -> Ordering {
        let words = split_words(&self.title);
        let other_words = split_words(&other.title);

        words
            .iter()
            .zip(other_words.iter())
            .map(|(word, other_word)| compare_words_ignore_case(word, other_word))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| words.len().cmp(&other_words.len()))
    }

    /// Orders by genre name, then by artist.
    pub fn compare_genre(&self, other: &Album) -> Ordering {
        compare_words(self.genre.name(), other.genre.name())
            .then_with(|| self.artist.compare(&other.artist))
    }
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    if split_words(title).is_empty() {
        return Err(ValidationError::BlankTitle);
    }
    Ok(())
}

impl PartialEq for Album {
    fn eq(&self, other: &Self) -> bool {
        eq_ignore_case(&self.title, &other.title) && self.artist == other.artist
    }
}

impl Eq for Album {}

impl Display for Album {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] Released {} [{}] [{}] {}",
            self.title,
            self.released,
            self.artist,
            self.genre,
            self.ratings.summary()
        )
    }
}
