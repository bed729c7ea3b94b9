//! Sort orders over the collection.
//!
//! Each order is one comparator chain. All three run through the same
//! in-place selection sort so tie-breaking cannot drift between them.

use crate::model::album::Album;
use std::cmp::Ordering;

/// Comparator returning `Less` when the left album belongs first.
pub type AlbumComparator = fn(&Album, &Album) -> Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Average rating descending, unrated last, then title.
    Rating,
    /// Genre name, then artist.
    Genre,
    /// Release date ascending, then title.
    Date,
}

impl SortKey {
    pub fn comparator(self) -> AlbumComparator {
        match self {
            Self::Rating => by_rating,
            Self::Genre => by_genre,
            Self::Date => by_date,
        }
    }

    /// Listing header label, e.g. `Rating/Title`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Rating => "Rating/Title",
            Self::Genre => "Genre/Artist",
            Self::Date => "Released Date/Title",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rating => "rating",
            Self::Genre => "genre",
            Self::Date => "date",
        }
    }
}

/// Higher average first. Rated albums always precede unrated ones; two
/// unrated albums, like two equal averages, fall through to title order.
pub fn by_rating(left: &Album, right: &Album) -> Ordering {
    compare_averages(left.average_rating(), right.average_rating())
        .then_with(|| left.compare_titles(right))
}

pub fn by_genre(left: &Album, right: &Album) -> Ordering {
    left.compare_genre(right)
}

pub fn by_date(left: &Album, right: &Album) -> Ordering {
    left.released()
        .cmp(&right.released())
        .then_with(|| left.compare_titles(right))
}

// `None` is "no rating": it loses to any number and ties with itself.
// Never compared numerically.
fn compare_averages(left: Option<f64>, right: Option<f64>) -> Ordering {
    match (left, right) {
        (Some(left), Some(right)) => right.partial_cmp(&left).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// In-place selection sort.
///
/// For each position, scans the unsorted suffix for the element that
/// compares strictly first and swaps it into place. O(n^2) comparisons.
pub fn selection_sort(albums: &mut [Album], compare: AlbumComparator) {
    let len = albums.len();
    for position in 0..len.saturating_sub(1) {
        let mut first = position;
        for candidate in position + 1..len {
            if compare(&albums[candidate], &albums[first]) == Ordering::Less {
                first = candidate;
            }
        }
        albums.swap(position, first);
    }
}
