//! Error types for the planner and its collaborators.
//!
//! Every variant signals a caller bug (fail-fast contracts); "no path
//! exists" is an ordinary outcome and is reported through
//! [`Cost::Unreachable`](crate::grid::Cost) and `find_next` returning
//! `None`, never through these types.

use thiserror::Error;

use crate::core::GridCoord;

/// Grid lookup and edge-cost contract violations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Coordinate outside the grid bounds.
    #[error("grid position {0} is out of bounds")]
    OutOfBounds(GridCoord),

    /// Edge cost requested between cells that are not 8-adjacent
    /// (or between a cell and itself).
    #[error("cells {0} and {1} are not neighbors")]
    InvalidAdjacency(GridCoord, GridCoord),
}

/// Frontier (open list) contract violations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierError {
    /// Inserting a vertex that is already queued.
    #[error("vertex {0} is already in the frontier")]
    DuplicateEntry(GridCoord),

    /// Updating or removing a vertex that is not queued.
    #[error("vertex {0} not found in the frontier")]
    NotFound(GridCoord),

    /// Top/pop on an empty frontier.
    #[error("frontier is empty")]
    EmptyFrontier,
}

/// Umbrella error for planner entry points.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlannerError {
    /// Grid contract violation.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Frontier contract violation.
    #[error(transparent)]
    Frontier(#[from] FrontierError),
}
