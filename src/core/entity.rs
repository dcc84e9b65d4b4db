//! Stable identifiers for board elements.
//!
//! ## ID Layout
//!
//! Positions are numbered `0..24` and triples `0..16`, both in the order the
//! topology builder creates them (outer ring, middle ring, inner ring, then
//! the cross-ring connectors). The numbering is identical on every build,
//! so fixed layouts can address positions by index.
//!
//! ```
//! use morris_rules::core::PositionId;
//!
//! let corner = PositionId::new(0);
//! assert_eq!(corner.index(), 0);
//! assert!(PositionId::checked(23).is_some());
//! assert!(PositionId::checked(24).is_none());
//! ```

use serde::{Deserialize, Serialize};

use super::config::POSITION_COUNT;

/// Index of a position on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PositionId(pub u8);

impl PositionId {
    /// Create a position ID. Does not check the range.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Create a position ID if `index` names a board position.
    #[must_use]
    pub fn checked(index: usize) -> Option<Self> {
        (index < POSITION_COUNT).then(|| Self(index as u8))
    }

    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PositionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Index of a triple (a line of three positions).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TripleId(pub u8);

impl TripleId {
    /// Create a triple ID.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TripleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Triple({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_id_range() {
        assert_eq!(PositionId::checked(0), Some(PositionId::new(0)));
        assert_eq!(PositionId::checked(23), Some(PositionId::new(23)));
        assert_eq!(PositionId::checked(24), None);
        assert_eq!(PositionId::checked(usize::MAX), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", PositionId::new(7)), "#7");
        assert_eq!(format!("{}", TripleId::new(3)), "Triple(3)");
    }
}
