//! Vertex state for the navigation grid.

use serde::{Deserialize, Serialize};

use crate::core::GridCoord;

/// A path cost: a non-negative finite value or the explicit unreachable
/// sentinel.
///
/// `Unreachable` is a distinct tag rather than a maximum integer, so cost
/// arithmetic can never wrap a "no path" marker into a small finite value.
/// The derived ordering places every finite cost below `Unreachable`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Cost {
    /// Known finite cost to the goal.
    Finite(u32),
    /// No known route (or not yet computed).
    Unreachable,
}

impl Cost {
    /// Zero cost.
    pub const ZERO: Cost = Cost::Finite(0);

    /// True if this is a finite value.
    #[inline]
    pub fn is_finite(self) -> bool {
        matches!(self, Cost::Finite(_))
    }

    /// The finite value, if any.
    #[inline]
    pub fn finite(self) -> Option<u32> {
        match self {
            Cost::Finite(v) => Some(v),
            Cost::Unreachable => None,
        }
    }

    /// Add a step cost, saturating within the finite range.
    /// `Unreachable` absorbs any addition.
    #[inline]
    pub fn saturating_add(self, step: u32) -> Cost {
        match self {
            Cost::Finite(v) => Cost::Finite(v.saturating_add(step)),
            Cost::Unreachable => Cost::Unreachable,
        }
    }
}

impl std::fmt::Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cost::Finite(v) => write!(f, "{}", v),
            Cost::Unreachable => write!(f, "inf"),
        }
    }
}

/// A single cell of the navigation grid.
///
/// One vertex per cell, created when the grid is built and mutated in place
/// for the life of the grid. Identity is the coordinate alone: two vertices
/// with equal coordinates are the same cell regardless of which cost
/// snapshot they carry.
#[derive(Clone, Debug)]
pub struct Vertex {
    coord: GridCoord,
    walkable: bool,
    g: Cost,
    rhs: Cost,
    // Observational fields for display layers; never read by the search.
    last_heuristic: Option<u32>,
    last_primary: Option<Cost>,
}

impl Vertex {
    /// Create a walkable vertex with no cost information.
    pub fn new(coord: GridCoord) -> Self {
        Self {
            coord,
            walkable: true,
            g: Cost::Unreachable,
            rhs: Cost::Unreachable,
            last_heuristic: None,
            last_primary: None,
        }
    }

    /// Cell coordinate.
    #[inline]
    pub fn coord(&self) -> GridCoord {
        self.coord
    }

    /// Whether this cell can be traversed.
    #[inline]
    pub fn is_walkable(&self) -> bool {
        self.walkable
    }

    /// Current best known cost to the goal.
    #[inline]
    pub fn g(&self) -> Cost {
        self.g
    }

    /// One-step lookahead cost to the goal.
    #[inline]
    pub fn rhs(&self) -> Cost {
        self.rhs
    }

    /// Heuristic distance recorded at the last reconciliation, if any.
    #[inline]
    pub fn last_heuristic(&self) -> Option<u32> {
        self.last_heuristic
    }

    /// Primary key value recorded at the last reconciliation, if any.
    #[inline]
    pub fn last_primary(&self) -> Option<Cost> {
        self.last_primary
    }

    pub(crate) fn set_walkable(&mut self, walkable: bool) {
        self.walkable = walkable;
    }

    pub(crate) fn set_g(&mut self, g: Cost) {
        self.g = g;
    }

    pub(crate) fn set_rhs(&mut self, rhs: Cost) {
        self.rhs = rhs;
    }

    pub(crate) fn record_display(&mut self, heuristic: u32, primary: Cost) {
        self.last_heuristic = Some(heuristic);
        self.last_primary = Some(primary);
    }

    /// Reinitialize costs and observational fields, preserving walkability.
    pub(crate) fn reset_costs(&mut self) {
        self.g = Cost::Unreachable;
        self.rhs = Cost::Unreachable;
        self.last_heuristic = None;
        self.last_primary = None;
    }

    /// Immutable value copy for external observers.
    pub fn snapshot(&self, heuristic: u32, primary: Cost) -> VertexSnapshot {
        VertexSnapshot {
            coord: self.coord,
            walkable: self.walkable,
            g: self.g,
            rhs: self.rhs,
            heuristic,
            primary,
        }
    }
}

// Identity by coordinate only: required so containment lookups treat "the
// cell at (x, y)" as a stable key regardless of attached costs.
impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for Vertex {}

impl std::hash::Hash for Vertex {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.coord.hash(state);
    }
}

/// Immutable copy of a vertex's state at notification time.
///
/// Carries everything a display layer needs; never aliases live search
/// state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexSnapshot {
    /// Cell coordinate.
    pub coord: GridCoord,
    /// Walkability at snapshot time.
    pub walkable: bool,
    /// Best known cost to the goal.
    pub g: Cost,
    /// One-step lookahead cost.
    pub rhs: Cost,
    /// Heuristic distance from the current start.
    pub heuristic: u32,
    /// Primary component of the vertex's priority key.
    pub primary: Cost,
}
