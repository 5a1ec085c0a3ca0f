//! Incremental shortest-path planning.
//!
//! Implements D* Lite over the navigation grid:
//!
//! - [`Key`]: two-component lexicographic priority
//! - [`IndexedFrontier`]: the open list — an indexed binary min-heap with
//!   O(log n) insert/remove/update and O(1) membership
//! - [`DStarLite`]: the planner — key computation, vertex reconciliation,
//!   the relaxation loop, incremental-update entry points, and greedy
//!   next-step extraction
//!
//! The planner never inspects the frontier beyond key order, and the
//! frontier never inspects vertex semantics beyond the keys it is handed.

mod dstar;
mod frontier;
mod key;

pub use dstar::{DStarLite, PlannerEvent};
pub use frontier::IndexedFrontier;
pub use key::Key;
