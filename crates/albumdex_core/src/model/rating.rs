//! Star rating history attached to one album.
//!
//! # Invariants
//! - Ratings are append-only; nothing is removed or reordered.
//! - An empty ledger has no average (`None`), never zero.

use serde::{Deserialize, Serialize};

/// One star value. Expected range is `1..=5`; the ledger does not enforce it.
pub type Star = u8;

/// Number of star buckets reported by [`RatingLedger::counts`].
pub const STAR_BUCKETS: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatingLedger {
    // Oldest first; iteration helpers expose newest first.
    stars: Vec<Star>,
}

impl RatingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new rating as the most recent entry.
    pub fn push(&mut self, star: Star) {
        self.stars.push(star);
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Ratings from newest to oldest.
    pub fn newest_first(&self) -> impl Iterator<Item = Star> + '_ {
        self.stars.iter().rev().copied()
    }

    /// Arithmetic mean of every recorded value, or `None` when empty.
    pub fn average(&self) -> Option<f64> {
        if self.stars.is_empty() {
            return None;
        }
        let sum: f64 = self.stars.iter().map(|&star| f64::from(star)).sum();
        Some(sum / self.stars.len() as f64)
    }

    /// Counts per star value; index 0 holds one-star ratings.
    ///
    /// Values outside `1..=5` are not counted in any bucket.
    pub fn counts(&self) -> [usize; STAR_BUCKETS] {
        let mut counts = [0; STAR_BUCKETS];
        for &star in &self.stars {
            if (1..=STAR_BUCKETS).contains(&usize::from(star)) {
                counts[usize::from(star) - 1] += 1;
            }
        }
        counts
    }

    /// Human-readable summary: per-star counts plus the two-decimal mean.
    pub fn summary(&self) -> String {
        let Some(average) = self.average() else {
            return "Rating: none".to_string();
        };
        let [one, two, three, four, five] = self.counts();
        format!(
            "Rating: *({one})**({two})***({three})****({four})*****({five})(average rating: {average:.2})"
        )
    }
}
