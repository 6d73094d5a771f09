//! Collectible markers and the collected-marker set.

use std::fmt::{self, Display};

/// One of the two collectible markers on the board.
///
/// # Examples
///
/// ```
/// use ricochet_core::Marker;
///
/// for marker in Marker::ALL {
///     println!("{marker}");
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Marker {
    /// The first marker.
    A,
    /// The second marker.
    B,
}

impl Marker {
    /// Both markers, in A, B order.
    pub const ALL: [Self; 2] = [Self::A, Self::B];

    const fn bit(self) -> u8 {
        match self {
            Self::A => 0b01,
            Self::B => 0b10,
        }
    }
}

impl Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => f.write_str("A"),
            Self::B => f.write_str("B"),
        }
    }
}

/// A set of collected markers, represented as a 2-bit bitset.
///
/// The set only grows during a game session: markers are inserted when the
/// token passes over them and are never removed short of a session reset.
/// The compact representation makes the set cheap to copy and to use as part
/// of a search-state key.
///
/// # Examples
///
/// ```
/// use ricochet_core::{Marker, MarkerSet};
///
/// let mut collected = MarkerSet::EMPTY;
/// assert!(collected.insert(Marker::A));
/// assert!(!collected.insert(Marker::A)); // already present
/// assert!(!collected.is_full());
///
/// collected.insert(Marker::B);
/// assert_eq!(collected, MarkerSet::FULL);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MarkerSet(u8);

impl MarkerSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);
    /// The set containing both markers.
    pub const FULL: Self = Self(0b11);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Returns `true` if the marker is in the set.
    #[must_use]
    pub const fn contains(self, marker: Marker) -> bool {
        self.0 & marker.bit() != 0
    }

    /// Inserts a marker, returning `true` if it was newly inserted.
    pub const fn insert(&mut self, marker: Marker) -> bool {
        let inserted = !self.contains(marker);
        self.0 |= marker.bit();
        inserted
    }

    /// Returns the number of markers in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if both markers are in the set.
    #[must_use]
    pub const fn is_full(self) -> bool {
        self.0 == Self::FULL.0
    }

    /// Iterates over the markers in the set, in A, B order.
    pub fn iter(self) -> impl Iterator<Item = Marker> {
        Marker::ALL.into_iter().filter(move |&m| self.contains(m))
    }
}

impl FromIterator<Marker> for MarkerSet {
    fn from_iter<I: IntoIterator<Item = Marker>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for marker in iter {
            set.insert(marker);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_contains() {
        let mut set = MarkerSet::new();
        assert!(set.is_empty());
        assert!(!set.contains(Marker::A));

        assert!(set.insert(Marker::A));
        assert!(set.contains(Marker::A));
        assert!(!set.contains(Marker::B));
        assert_eq!(set.len(), 1);

        // Re-inserting reports no change
        assert!(!set.insert(Marker::A));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_full_set() {
        let set: MarkerSet = Marker::ALL.into_iter().collect();
        assert_eq!(set, MarkerSet::FULL);
        assert!(set.is_full());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_iteration_order() {
        let set: MarkerSet = [Marker::B, Marker::A].into_iter().collect();
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![Marker::A, Marker::B]);
    }

    #[test]
    fn test_constants() {
        assert_eq!(MarkerSet::EMPTY.len(), 0);
        assert!(MarkerSet::FULL.is_full());
        assert_eq!(MarkerSet::default(), MarkerSet::EMPTY);
    }
}
