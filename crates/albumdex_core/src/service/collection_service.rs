//! Collection use-case service.
//!
//! # Responsibility
//! - Provide stable add/remove/rate/lookup entry points for command callers.
//! - Produce sorted listings framed by a header and footer.
//!
//! # Invariants
//! - Listings sort the underlying store in place before rendering.
//! - An empty collection renders a single fixed message and is not sorted.

use crate::collection::sort::SortKey;
use crate::collection::AlbumRepository;
use crate::model::album::Album;
use crate::model::rating::Star;

/// Printed instead of a listing when nothing is stored.
pub const EMPTY_COLLECTION_MESSAGE: &str = "Collection is empty!";
/// Closes every non-empty listing.
pub const LISTING_FOOTER: &str = "* end of list *";

/// Use-case wrapper around an album repository.
pub struct CollectionService<R: AlbumRepository> {
    repo: R,
}

impl<R: AlbumRepository> CollectionService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn into_repository(self) -> R {
        self.repo
    }

    /// Returns `false` when an equal album is already stored.
    pub fn add(&mut self, album: Album) -> bool {
        self.repo.add(album)
    }

    pub fn remove(&mut self, key: &Album) -> bool {
        self.repo.remove(key)
    }

    pub fn rate(&mut self, key: &Album, star: Star) -> bool {
        self.repo.rate(key, star)
    }

    pub fn contains(&self, key: &Album) -> bool {
        self.repo.contains(key)
    }

    pub fn lookup(&self, key: &Album) -> Option<&Album> {
        self.repo.lookup(key)
    }

    pub fn print_by_rating(&mut self) -> Vec<String> {
        self.print_sorted(SortKey::Rating)
    }

    pub fn print_by_genre(&mut self) -> Vec<String> {
        self.print_sorted(SortKey::Genre)
    }

    pub fn print_by_date(&mut self) -> Vec<String> {
        self.print_sorted(SortKey::Date)
    }

    /// Sorts by `key` and renders header, one line per album, and footer.
    pub fn print_sorted(&mut self, key: SortKey) -> Vec<String> {
        if self.repo.albums().is_empty() {
            return vec![EMPTY_COLLECTION_MESSAGE.to_string()];
        }

        self.repo.sort(key);

        let mut lines = Vec::with_capacity(self.repo.albums().len() + 2);
        lines.push(format!("* Collection sorted by {} *", key.label()));
        lines.extend(self.repo.albums().iter().map(ToString::to_string));
        lines.push(LISTING_FOOTER.to_string());
        lines
    }
}
