//! Content flags for collision filtering.

use serde::{Deserialize, Serialize};

/// Content flags describe what type of volume a brush is.
///
/// Traces carry a mask; brushes whose contents don't intersect it are
/// ignored (e.g. player movement passes through triggers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ContentFlags(pub u32);

impl ContentFlags {
    /// Empty space - nothing here.
    pub const EMPTY: Self = Self(0);

    /// Solid world geometry - walls, floors, etc.
    pub const SOLID: Self = Self(1 << 0);

    /// Player clip - blocks characters only.
    pub const PLAYER_CLIP: Self = Self(1 << 1);

    /// Trigger volume - never blocks movement.
    pub const TRIGGER: Self = Self(1 << 2);

    /// Character body.
    pub const CHARACTER: Self = Self(1 << 3);

    /// Standard mask for character movement and wall probes.
    pub const MASK_CHARACTER_SOLID: Self = Self(
        Self::SOLID.0 | Self::PLAYER_CLIP.0 | Self::CHARACTER.0,
    );

    /// Check if these flags contain a specific flag.
    #[inline]
    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check if any of the given flags are set.
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }
}

impl std::ops::BitOr for ContentFlags {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}
