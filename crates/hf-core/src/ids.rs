//! Lattice keys and typed identifiers.
//!
//! `VertexKey` is an ordered integer pair supplied by the layout.  `EdgeKey`
//! is the canonical (sorted) form of an undirected vertex pair and is the only
//! identity used for edge-state lookup, whatever the traversal direction.
//! Every lookup and insertion site goes through [`EdgeKey::new`].

use std::fmt;

// ── VertexKey ─────────────────────────────────────────────────────────────────

/// Integer coordinate pair identifying one lattice vertex.
///
/// Ordering is lexicographic on `(q, r)`; it decides which endpoint comes
/// first in an [`EdgeKey`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexKey {
    pub q: i32,
    pub r: i32,
}

impl VertexKey {
    #[inline]
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }
}

impl From<(i32, i32)> for VertexKey {
    #[inline]
    fn from((q, r): (i32, i32)) -> Self {
        Self { q, r }
    }
}

impl fmt::Display for VertexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.q, self.r)
    }
}

// ── EdgeKey ───────────────────────────────────────────────────────────────────

/// Canonical undirected edge key: endpoints stored in sorted order.
///
/// Fields are private so a non-canonical key cannot be constructed.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeKey {
    lo: VertexKey,
    hi: VertexKey,
}

impl EdgeKey {
    /// Build the canonical key for the undirected pair `{a, b}`.
    #[inline]
    pub fn new(a: VertexKey, b: VertexKey) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// The lexicographically smaller endpoint.
    #[inline]
    pub fn lo(self) -> VertexKey {
        self.lo
    }

    /// The lexicographically larger endpoint.
    #[inline]
    pub fn hi(self) -> VertexKey {
        self.hi
    }

    #[inline]
    pub fn endpoints(self) -> (VertexKey, VertexKey) {
        (self.lo, self.hi)
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.lo, self.hi)
    }
}

// ── Typed integer IDs ─────────────────────────────────────────────────────────

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Registration index of an agent in the scheduler.
    pub struct AgentId(u32);
}
