//! # Marga
//!
//! Incremental shortest-path planning over 8-connected occupancy grids
//! using D* Lite.
//!
//! The planner maintains a goal-anchored cost gradient that is repaired
//! incrementally as obstacles appear or disappear and as the seeking agent
//! moves, instead of re-solving from scratch on every change.
//!
//! ## Quick Start
//!
//! ```rust
//! use marga::{DStarLite, GridCoord, NavGrid};
//!
//! let mut planner = DStarLite::new(NavGrid::new(16, 16));
//!
//! let start = GridCoord::new(0, 0);
//! let goal = GridCoord::new(15, 15);
//! planner.find_path(start, goal).unwrap();
//!
//! // Walk the gradient one greedy step at a time.
//! let step = planner.find_next(start).unwrap();
//!
//! // An obstacle appeared: toggle the cell, then report it.
//! planner.grid_mut().set_walkable(GridCoord::new(8, 8), false).unwrap();
//! planner.change_vertex(GridCoord::new(8, 8)).unwrap();
//! let step = planner.find_next(start).unwrap();
//! # let _ = step;
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: fundamental types ([`GridCoord`])
//! - [`grid`]: the vertex arena, neighbor enumeration, and cost model
//! - [`planning`]: priority keys, the indexed frontier, and the planner
//! - [`error`]: fail-fast contract violations
//!
//! "No path exists" is not an error: it is reported through
//! [`Cost::Unreachable`] on the start vertex and `None` from
//! [`DStarLite::find_next`].
//!
//! ## Concurrency
//!
//! Single-owner, synchronous. Every call runs to completion on the
//! caller's thread; mutating calls must be issued strictly sequentially by
//! one control loop.

pub mod core;
pub mod error;
pub mod grid;
pub mod planning;

pub use crate::core::GridCoord;
pub use error::{FrontierError, GridError, PlannerError};
pub use grid::{Cost, NavGrid, Vertex, VertexSnapshot};
pub use planning::{DStarLite, IndexedFrontier, Key, PlannerEvent};
