//! Fundamental types shared across the crate.
//!
//! - [`GridCoord`]: Integer cell indices for grid access

mod point;

pub use point::GridCoord;
