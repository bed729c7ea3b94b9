//! Domain model for the album collection.
//!
//! # Responsibility
//! - Define albums, artists, dates, genres and rating history.
//! - Own every pairwise comparison the collection sorts rely on.
//!
//! # Invariants
//! - Each album exclusively owns its artist, dates and ratings.
//! - Ordering compares raw character codes, never locale collation.

pub mod album;
pub mod artist;
pub mod date;
pub mod genre;
pub mod rating;
pub mod words;
