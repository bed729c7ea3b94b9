//! In-memory album collection.
//!
//! # Responsibility
//! - Store albums as a duplicate-free set over a contiguous array.
//! - Provide linear search, insert, delete, rate and in-place sorts.
//!
//! # Invariants
//! - No two stored albums are equal (title ignoring case + artist).
//! - `len() <= capacity()`. Capacity starts at [`INITIAL_CAPACITY`], grows by
//!   exactly [`GROWTH_INCREMENT`] when a full store accepts an album, and
//!   never shrinks.
//! - Removal closes the gap by shifting later albums one slot left.
//! - Not-found and duplicate outcomes are plain `false`/`None`, not errors.

pub mod sort;

use crate::model::album::Album;
use crate::model::rating::Star;
use log::debug;
use sort::{selection_sort, SortKey};

/// Capacity of a freshly created collection.
pub const INITIAL_CAPACITY: usize = 4;
/// Slots added each time a full collection must accept another album.
pub const GROWTH_INCREMENT: usize = 4;

/// Repository interface over an album store.
///
/// Lookups take an album used as a key; only title and artist matter.
pub trait AlbumRepository {
    /// Inserts `album` unless an equal album is stored. Returns whether it
    /// was inserted.
    fn add(&mut self, album: Album) -> bool;
    /// Removes the album equal to `key`. Returns whether one was removed.
    fn remove(&mut self, key: &Album) -> bool;
    /// Rates the stored album equal to `key`. No-op returning `false` when
    /// absent.
    fn rate(&mut self, key: &Album, star: Star) -> bool;
    fn contains(&self, key: &Album) -> bool;
    /// Returns the stored album equal to `key`, not the key itself.
    fn lookup(&self, key: &Album) -> Option<&Album>;
    /// Reorders the store in place.
    fn sort(&mut self, key: SortKey);
    /// Stored albums in current store order.
    fn albums(&self) -> &[Album];
}

#[derive(Debug, Clone)]
pub struct Collection {
    albums: Vec<Album>,
    capacity: usize,
}

impl Default for Collection {
    fn default() -> Self {
        Self::new()
    }
}

impl Collection {
    pub fn new() -> Self {
        Self {
            albums: Vec::with_capacity(INITIAL_CAPACITY),
            capacity: INITIAL_CAPACITY,
        }
    }

    pub fn len(&self) -> usize {
        self.albums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    /// Logical capacity under the fixed-increment growth policy.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Position of the album equal to `key`, scanning from the front.
    pub fn find(&self, key: &Album) -> Option<usize> {
        self.albums.iter().position(|album| album == key)
    }

    pub fn get(&self, index: usize) -> Option<&Album> {
        self.albums.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Album> {
        self.albums.iter()
    }

    /// One formatted line per album in current store order.
    pub fn display_all(&self) -> Vec<String> {
        self.albums.iter().map(ToString::to_string).collect()
    }

    fn grow(&mut self) {
        self.capacity += GROWTH_INCREMENT;
        self.albums
            .reserve_exact(self.capacity.saturating_sub(self.albums.len()));
        debug!(
            "event=collection_grow module=collection status=ok capacity={}",
            self.capacity
        );
    }
}

impl AlbumRepository for Collection {
    fn add(&mut self, album: Album) -> bool {
        if self.contains(&album) {
            debug!(
                "event=album_add module=collection status=duplicate size={}",
                self.len()
            );
            return false;
        }
        if self.albums.len() == self.capacity {
            self.grow();
        }
        self.albums.push(album);
        debug!(
            "event=album_add module=collection status=ok size={}",
            self.len()
        );
        true
    }

    fn remove(&mut self, key: &Album) -> bool {
        let Some(index) = self.find(key) else {
            debug!("event=album_remove module=collection status=not_found");
            return false;
        };
        self.albums.remove(index);
        debug!(
            "event=album_remove module=collection status=ok index={} size={}",
            index,
            self.len()
        );
        true
    }

    fn rate(&mut self, key: &Album, star: Star) -> bool {
        let Some(index) = self.find(key) else {
            debug!("event=album_rate module=collection status=not_found");
            return false;
        };
        self.albums[index].rate(star);
        debug!(
            "event=album_rate module=collection status=ok index={} star={}",
            index, star
        );
        true
    }

    fn contains(&self, key: &Album) -> bool {
        self.find(key).is_some()
    }

    fn lookup(&self, key: &Album) -> Option<&Album> {
        self.find(key).map(|index| &self.albums[index])
    }

    fn sort(&mut self, key: SortKey) {
        selection_sort(&mut self.albums, key.comparator());
        debug!(
            "event=collection_sort module=collection status=ok order={} size={}",
            key.as_str(),
            self.len()
        );
    }

    fn albums(&self) -> &[Album] {
        &self.albums
    }
}
