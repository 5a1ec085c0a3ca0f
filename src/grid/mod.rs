//! Navigation grid: vertex arena, neighbor enumeration, and cost model.
//!
//! The grid owns one [`Vertex`] per cell for a fixed width x height area
//! and exposes the three primitives the planner builds on:
//!
//! - walkable-filtered 8-connected neighbor enumeration
//! - the octile-distance heuristic (admissible and consistent for the
//!   10/14 cost model)
//! - the edge-cost function for adjacent cells
//!
//! Cell walkability is toggled by the host through
//! [`NavGrid::set_walkable`]; the planner only reacts once the change is
//! reported via `DStarLite::change_vertex`.

mod storage;
mod vertex;

pub use storage::NavGrid;
pub use vertex::{Cost, Vertex, VertexSnapshot};

/// Movement cost constants for the 8-connected grid.
pub mod costs {
    /// Cardinal step cost.
    pub const STRAIGHT: u32 = 10;
    /// Diagonal step cost (fixed-point approximation of sqrt(2) * 10).
    pub const DIAGONAL: u32 = 14;
}
