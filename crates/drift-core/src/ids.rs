//! Strongly typed actor identifier.
//!
//! `ActorId` is `Copy + Ord + Hash` so it can be used as a map key and sorted
//! without ceremony.  The inner integer is `pub` to allow direct indexing
//! into the arena's SoA `Vec`s, but callers should prefer `.index()`.

use std::fmt;

/// Index of an actor in arena storage.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorId(pub u32);

impl ActorId {
    /// Sentinel meaning "no valid actor"; equal to `u32::MAX`.
    pub const INVALID: ActorId = ActorId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for ActorId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ActorId({})", self.0)
    }
}

impl From<ActorId> for usize {
    #[inline(always)]
    fn from(id: ActorId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for ActorId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<ActorId, Self::Error> {
        u32::try_from(n).map(ActorId)
    }
}
