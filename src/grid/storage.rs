//! Vertex arena for a fixed-size 8-connected grid.

use crate::core::GridCoord;
use crate::error::GridError;

use super::costs;
use super::vertex::Vertex;

/// Fixed-size navigation grid owning one [`Vertex`] per cell.
///
/// Vertices live in a flat row-major arena; every other component refers to
/// cells by [`GridCoord`], never by reference, so there is exactly one
/// mutable owner of all search state.
#[derive(Clone, Debug)]
pub struct NavGrid {
    width: usize,
    height: usize,
    vertices: Vec<Vertex>,
}

impl NavGrid {
    /// Create a grid with every cell walkable and no cost information.
    pub fn new(width: usize, height: usize) -> Self {
        let vertices = (0..width * height)
            .map(|i| {
                Vertex::new(GridCoord::new(
                    (i % width.max(1)) as i32,
                    (i / width.max(1)) as i32,
                ))
            })
            .collect();
        Self {
            width,
            height,
            vertices,
        }
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if grid coordinates are within bounds.
    #[inline]
    pub fn is_valid_coord(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    /// Convert grid coordinates to flat array index.
    #[inline]
    fn coord_to_index(&self, coord: GridCoord) -> Option<usize> {
        if self.is_valid_coord(coord) {
            Some(coord.y as usize * self.width + coord.x as usize)
        } else {
            None
        }
    }

    /// Look up the vertex at `coord`.
    #[inline]
    pub fn vertex(&self, coord: GridCoord) -> Result<&Vertex, GridError> {
        self.coord_to_index(coord)
            .map(|i| &self.vertices[i])
            .ok_or(GridError::OutOfBounds(coord))
    }

    /// Mutable lookup of the vertex at `coord`.
    #[inline]
    pub(crate) fn vertex_mut(&mut self, coord: GridCoord) -> Result<&mut Vertex, GridError> {
        self.coord_to_index(coord)
            .map(|i| &mut self.vertices[i])
            .ok_or(GridError::OutOfBounds(coord))
    }

    /// Toggle walkability of a cell. The planner does not react until the
    /// host reports the change through `DStarLite::change_vertex`.
    pub fn set_walkable(&mut self, coord: GridCoord, walkable: bool) -> Result<(), GridError> {
        self.vertex_mut(coord)?.set_walkable(walkable);
        Ok(())
    }

    /// In-bounds walkable cells among the 8 surrounding offsets, in the
    /// fixed offset order.
    ///
    /// The queried cell's own walkability is not checked: the planner must
    /// enumerate the neighbors of a cell that just became unwalkable in
    /// order to retract costs routed through it.
    pub fn neighbors(&self, coord: GridCoord) -> Vec<GridCoord> {
        let mut neighbors = Vec::with_capacity(8);
        for n in coord.neighbors_8() {
            if let Some(i) = self.coord_to_index(n) {
                if self.vertices[i].is_walkable() {
                    neighbors.push(n);
                }
            }
        }
        neighbors
    }

    /// Octile distance between two cells.
    ///
    /// Symmetric, zero on self-distance, and satisfies the triangle
    /// inequality, as required for the planner's key-based termination
    /// bound.
    #[inline]
    pub fn heuristic(&self, a: GridCoord, b: GridCoord) -> u32 {
        let dx = (a.x - b.x).unsigned_abs();
        let dy = (a.y - b.y).unsigned_abs();
        costs::DIAGONAL * dx.min(dy) + costs::STRAIGHT * dx.abs_diff(dy)
    }

    /// Cost of the edge between two adjacent cells: [`costs::STRAIGHT`] for
    /// cardinal moves, [`costs::DIAGONAL`] for diagonal moves.
    pub fn edge_cost(&self, a: GridCoord, b: GridCoord) -> Result<u32, GridError> {
        let dx = (a.x - b.x).unsigned_abs();
        let dy = (a.y - b.y).unsigned_abs();

        if dx > 1 || dy > 1 || (dx == 0 && dy == 0) {
            return Err(GridError::InvalidAdjacency(a, b));
        }

        Ok(if dx + dy == 1 {
            costs::STRAIGHT
        } else {
            costs::DIAGONAL
        })
    }

    /// Reinitialize every vertex's cost and observational fields,
    /// preserving walkability.
    pub(crate) fn reset_costs(&mut self) {
        for v in &mut self.vertices {
            v.reset_costs();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cost;

    #[test]
    fn bounds_checks() {
        let grid = NavGrid::new(3, 3);
        assert!(grid.is_valid_coord(GridCoord::new(0, 0)));
        assert!(grid.is_valid_coord(GridCoord::new(2, 2)));
        assert!(!grid.is_valid_coord(GridCoord::new(-1, 0)));
        assert!(!grid.is_valid_coord(GridCoord::new(0, -1)));
        assert!(!grid.is_valid_coord(GridCoord::new(3, 0)));
        assert!(!grid.is_valid_coord(GridCoord::new(0, 3)));
    }

    #[test]
    fn vertex_lookup_returns_correct_cell() {
        let grid = NavGrid::new(3, 3);
        let v = grid.vertex(GridCoord::new(1, 2)).unwrap();
        assert_eq!(v.coord(), GridCoord::new(1, 2));
    }

    #[test]
    fn vertex_lookup_out_of_bounds_fails() {
        let grid = NavGrid::new(3, 3);
        assert_eq!(
            grid.vertex(GridCoord::new(-1, 0)),
            Err(GridError::OutOfBounds(GridCoord::new(-1, 0)))
        );
        assert_eq!(
            grid.vertex(GridCoord::new(3, 3)),
            Err(GridError::OutOfBounds(GridCoord::new(3, 3)))
        );
    }

    #[test]
    fn neighbors_center_cell() {
        let grid = NavGrid::new(3, 3);
        assert_eq!(grid.neighbors(GridCoord::new(1, 1)).len(), 8);
    }

    #[test]
    fn neighbors_corner_cell() {
        let grid = NavGrid::new(3, 3);
        let neighbors = grid.neighbors(GridCoord::new(0, 0));
        assert_eq!(neighbors.len(), 3);
        assert!(neighbors.contains(&GridCoord::new(1, 0)));
        assert!(neighbors.contains(&GridCoord::new(0, 1)));
        assert!(neighbors.contains(&GridCoord::new(1, 1)));
    }

    #[test]
    fn neighbors_exclude_unwalkable() {
        let mut grid = NavGrid::new(3, 3);
        grid.set_walkable(GridCoord::new(1, 0), false).unwrap();
        let neighbors = grid.neighbors(GridCoord::new(0, 0));
        assert_eq!(neighbors.len(), 2);
        assert!(!neighbors.contains(&GridCoord::new(1, 0)));
    }

    #[test]
    fn heuristic_octile_values() {
        let grid = NavGrid::new(10, 10);
        let a = GridCoord::new(0, 0);
        assert_eq!(grid.heuristic(a, a), 0);
        assert_eq!(grid.heuristic(a, GridCoord::new(3, 0)), 30);
        assert_eq!(grid.heuristic(a, GridCoord::new(3, 3)), 42);
        assert_eq!(grid.heuristic(a, GridCoord::new(4, 2)), 48);
    }

    #[test]
    fn heuristic_is_symmetric_and_triangular() {
        let grid = NavGrid::new(6, 6);
        let coords: Vec<GridCoord> = (0..6)
            .flat_map(|x| (0..6).map(move |y| GridCoord::new(x, y)))
            .collect();
        for &a in &coords {
            for &b in &coords {
                assert_eq!(grid.heuristic(a, b), grid.heuristic(b, a));
                for &c in &coords {
                    assert!(grid.heuristic(a, c) <= grid.heuristic(a, b) + grid.heuristic(b, c));
                }
            }
        }
    }

    #[test]
    fn edge_cost_cardinal_and_diagonal() {
        let grid = NavGrid::new(3, 3);
        let c = GridCoord::new(1, 1);
        assert_eq!(grid.edge_cost(c, GridCoord::new(1, 2)), Ok(10));
        assert_eq!(grid.edge_cost(c, GridCoord::new(2, 2)), Ok(14));
    }

    #[test]
    fn edge_cost_rejects_non_neighbors() {
        let grid = NavGrid::new(5, 5);
        let a = GridCoord::new(0, 0);
        assert_eq!(
            grid.edge_cost(a, a),
            Err(GridError::InvalidAdjacency(a, a))
        );
        assert_eq!(
            grid.edge_cost(a, GridCoord::new(2, 0)),
            Err(GridError::InvalidAdjacency(a, GridCoord::new(2, 0)))
        );
        assert_eq!(
            grid.edge_cost(a, GridCoord::new(2, 2)),
            Err(GridError::InvalidAdjacency(a, GridCoord::new(2, 2)))
        );
    }

    #[test]
    fn reset_costs_clears_costs_keeps_walls() {
        let mut grid = NavGrid::new(3, 3);
        grid.set_walkable(GridCoord::new(1, 1), false).unwrap();
        grid.vertex_mut(GridCoord::new(0, 0))
            .unwrap()
            .set_g(Cost::Finite(10));
        grid.vertex_mut(GridCoord::new(2, 2))
            .unwrap()
            .set_rhs(Cost::Finite(25));

        grid.reset_costs();

        for x in 0..3 {
            for y in 0..3 {
                let v = grid.vertex(GridCoord::new(x, y)).unwrap();
                assert_eq!(v.g(), Cost::Unreachable);
                assert_eq!(v.rhs(), Cost::Unreachable);
            }
        }
        assert!(!grid.vertex(GridCoord::new(1, 1)).unwrap().is_walkable());
    }

    #[test]
    fn empty_grid_reset_does_not_panic() {
        let mut grid = NavGrid::new(0, 0);
        grid.reset_costs();
        assert_eq!(grid.width(), 0);
    }
}
