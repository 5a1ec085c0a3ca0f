//! Priority keys for frontier ordering.

use serde::{Deserialize, Serialize};

use crate::grid::Cost;

/// Two-component priority with strict lexicographic ordering: `k1`
/// ascending, `k2` breaking ties ascending.
///
/// Keys are value objects recomputed on demand; they are never mutated in
/// place. The derived `Ord` is exactly the lexicographic field order, and
/// `Cost`'s ordering places the unreachable sentinel above every finite
/// value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Key {
    /// Primary component: estimated total cost through the vertex.
    pub k1: Cost,
    /// Secondary component: goal distance alone.
    pub k2: Cost,
}

impl Key {
    /// Key of a vertex with no known goal distance.
    pub const UNREACHABLE: Key = Key {
        k1: Cost::Unreachable,
        k2: Cost::Unreachable,
    };

    /// Create a key from its two components.
    #[inline]
    pub fn new(k1: Cost, k2: Cost) -> Self {
        Self { k1, k2 }
    }
}
