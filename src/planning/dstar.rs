//! D* Lite incremental planner.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::core::GridCoord;
use crate::error::PlannerError;
use crate::grid::{Cost, NavGrid, VertexSnapshot};

use super::frontier::IndexedFrontier;
use super::key::Key;

/// Change record produced by mutating planner calls.
///
/// Immutable value copies only; consumers cannot reach live search state
/// through these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlannerEvent {
    /// A vertex's g/rhs state was reconciled or mutated.
    VertexChanged(VertexSnapshot),
    /// The key modifier advanced (reported on every `change_vertex` call).
    KeyModifierChanged(u32),
    /// A new session reset all vertex costs.
    CostsReset,
}

/// Incremental shortest-path planner over an 8-connected [`NavGrid`].
///
/// Maintains a goal-anchored cost gradient (g/rhs per vertex) that is
/// repaired incrementally as obstacles appear or disappear and as the
/// seeking agent moves, instead of re-solving from scratch. Single-owner,
/// synchronous: one control loop issues [`find_path`](Self::find_path),
/// [`find_next`](Self::find_next),
/// [`update_agent_position`](Self::update_agent_position) and
/// [`change_vertex`](Self::change_vertex) strictly sequentially.
#[derive(Debug)]
pub struct DStarLite {
    grid: NavGrid,
    frontier: IndexedFrontier,
    start: Option<GridCoord>,
    goal: Option<GridCoord>,
    /// Start position as of the last heuristic rebase.
    last: Option<GridCoord>,
    /// Accumulated heuristic correction for start movement.
    k_m: u32,
    events: Vec<PlannerEvent>,
}

impl DStarLite {
    /// Create a planner owning the given grid. No session is active until
    /// [`find_path`](Self::find_path) is called.
    pub fn new(grid: NavGrid) -> Self {
        Self {
            grid,
            frontier: IndexedFrontier::new(),
            start: None,
            goal: None,
            last: None,
            k_m: 0,
            events: Vec::new(),
        }
    }

    /// Read access to the grid.
    #[inline]
    pub fn grid(&self) -> &NavGrid {
        &self.grid
    }

    /// Mutable access to the grid, for host-side walkability toggles.
    /// Report each changed cell through [`change_vertex`](Self::change_vertex).
    #[inline]
    pub fn grid_mut(&mut self) -> &mut NavGrid {
        &mut self.grid
    }

    /// Current key modifier.
    #[inline]
    pub fn key_modifier(&self) -> u32 {
        self.k_m
    }

    /// Drain the change records accumulated since the last call.
    pub fn take_events(&mut self) -> Vec<PlannerEvent> {
        std::mem::take(&mut self.events)
    }

    /// Begin a new search session from `start` towards `goal`.
    ///
    /// Resets all cost state, seeds the goal, and runs the relaxation loop
    /// to quiescence. If either endpoint is unwalkable or they coincide,
    /// the session is left degenerate: every g stays unreachable and
    /// [`find_next`](Self::find_next) reports no path.
    pub fn find_path(&mut self, start: GridCoord, goal: GridCoord) -> Result<(), PlannerError> {
        self.grid.vertex(start)?;
        self.grid.vertex(goal)?;
        debug!("[DStarLite] find_path: start={} goal={}", start, goal);

        self.frontier.clear();
        self.start = Some(start);
        self.goal = Some(goal);
        self.last = Some(start);
        self.k_m = 0;

        self.grid.reset_costs();
        self.events.push(PlannerEvent::CostsReset);

        self.grid.vertex_mut(goal)?.set_rhs(Cost::ZERO);
        self.emit_vertex(goal, start)?;
        let goal_key = self.calculate_key(goal, start)?;
        self.frontier.insert(goal, goal_key)?;

        let endpoints_walkable = self.grid.vertex(start)?.is_walkable()
            && self.grid.vertex(goal)?.is_walkable();
        if endpoints_walkable && start != goal {
            self.compute_shortest_path(start)?;
        } else {
            debug!("[DStarLite] degenerate session, no search performed");
        }
        Ok(())
    }

    /// The next greedy step from `current`: the walkable neighbor with the
    /// strictly smallest g (first encountered wins ties), or `None` when
    /// `g(current)` is unreachable.
    ///
    /// This is the only path-extraction primitive; no full path is ever
    /// materialized.
    pub fn find_next(&self, current: GridCoord) -> Result<Option<GridCoord>, PlannerError> {
        if !self.grid.vertex(current)?.g().is_finite() {
            return Ok(None);
        }

        let mut next = None;
        let mut min_g = Cost::Unreachable;
        for neighbor in self.grid.neighbors(current) {
            let g = self.grid.vertex(neighbor)?.g();
            if g < min_g {
                min_g = g;
                next = Some(neighbor);
            }
        }
        Ok(next)
    }

    /// Report the agent's current cell. Pure bookkeeping: takes effect on
    /// the next key computation and does not itself trigger recomputation.
    pub fn update_agent_position(&mut self, position: GridCoord) -> Result<(), PlannerError> {
        self.grid.vertex(position)?;
        self.start = Some(position);
        Ok(())
    }

    /// Report a walkability (or cost) change at `changed`, then repair the
    /// cost gradient incrementally.
    ///
    /// No-op before the first session. Call once per changed cell; it is
    /// safe to call repeatedly for a batch of simultaneous changes, since
    /// the key-modifier correction collapses to zero once `last == start`.
    pub fn change_vertex(&mut self, changed: GridCoord) -> Result<(), PlannerError> {
        let (Some(last), Some(start)) = (self.last, self.start) else {
            return Ok(());
        };
        self.grid.vertex(changed)?;
        debug!("[DStarLite] change_vertex: {}", changed);

        self.k_m = self.k_m.saturating_add(self.grid.heuristic(last, start));
        self.events.push(PlannerEvent::KeyModifierChanged(self.k_m));
        self.last = Some(start);

        let rhs = if self.grid.vertex(changed)?.is_walkable() {
            self.compute_rhs(changed)?
        } else {
            Cost::Unreachable
        };
        self.grid.vertex_mut(changed)?.set_rhs(rhs);
        self.update_vertex(changed, start)?;

        self.compute_shortest_path(start)
    }

    /// Priority of `v` anchored to the current start: `(d + h + k_m, d)`
    /// with `d = min(g, rhs)`, or the unreachable key when `d` is.
    fn calculate_key(&self, v: GridCoord, start: GridCoord) -> Result<Key, PlannerError> {
        let vertex = self.grid.vertex(v)?;
        let d = vertex.g().min(vertex.rhs());
        Ok(match d {
            Cost::Unreachable => Key::UNREACHABLE,
            Cost::Finite(_) => {
                let h = self.grid.heuristic(start, v);
                Key::new(d.saturating_add(h).saturating_add(self.k_m), d)
            }
        })
    }

    /// Reconcile `v`'s frontier membership with its local consistency and
    /// emit a change record.
    fn update_vertex(&mut self, v: GridCoord, start: GridCoord) -> Result<(), PlannerError> {
        let vertex = self.grid.vertex(v)?;
        let inconsistent = vertex.g() != vertex.rhs();
        let queued = self.frontier.contains(v);

        if queued && inconsistent {
            let key = self.calculate_key(v, start)?;
            self.frontier.update(v, key)?;
        } else if !queued && inconsistent {
            let key = self.calculate_key(v, start)?;
            self.frontier.insert(v, key)?;
        } else if queued {
            self.frontier.remove(v)?;
        }

        self.emit_vertex(v, start)
    }

    /// One-step lookahead: 0 at the goal, else the cheapest route through a
    /// walkable neighbor with finite g.
    fn compute_rhs(&self, v: GridCoord) -> Result<Cost, PlannerError> {
        if Some(v) == self.goal {
            return Ok(Cost::ZERO);
        }

        let mut min_rhs = Cost::Unreachable;
        for neighbor in self.grid.neighbors(v) {
            let g = self.grid.vertex(neighbor)?.g();
            if g.is_finite() {
                let step = self.grid.edge_cost(v, neighbor)?;
                min_rhs = min_rhs.min(g.saturating_add(step));
            }
        }
        Ok(min_rhs)
    }

    /// Main relaxation loop: expand inconsistent vertices in key order
    /// until the start is consistent and no queued key precedes it.
    ///
    /// The three branches (stale entry, overconsistent, underconsistent)
    /// must stay in this order for the termination bound to hold.
    fn compute_shortest_path(&mut self, start: GridCoord) -> Result<(), PlannerError> {
        let mut expansions = 0usize;

        loop {
            if self.frontier.is_empty() {
                break;
            }
            let top_key = self.frontier.top_key()?;
            let start_key = self.calculate_key(start, start)?;
            let start_vertex = self.grid.vertex(start)?;
            if !(top_key < start_key || start_vertex.g() != start_vertex.rhs()) {
                break;
            }

            let v = self.frontier.top()?;
            let new_key = self.calculate_key(v, start)?;

            if top_key < new_key {
                // Stale entry whose priority rose since insertion
                // (start moved): re-key without expanding.
                self.frontier.update(v, new_key)?;
                continue;
            }

            expansions += 1;
            let vertex = self.grid.vertex(v)?;
            if vertex.g() > vertex.rhs() {
                // Overconsistent: a cheaper route is known; finalize it and
                // relax the neighbors.
                let g = vertex.rhs();
                self.grid.vertex_mut(v)?.set_g(g);
                self.emit_vertex(v, start)?;
                self.frontier.pop()?;

                for neighbor in self.grid.neighbors(v) {
                    let step = self.grid.edge_cost(v, neighbor)?;
                    let through_v = g.saturating_add(step);
                    if through_v < self.grid.vertex(neighbor)?.rhs() {
                        self.grid.vertex_mut(neighbor)?.set_rhs(through_v);
                    }
                    self.update_vertex(neighbor, start)?;
                }
            } else {
                // Underconsistent: the recorded route was invalidated;
                // retract g and recompute every rhs that was justified
                // through v.
                let g_old = vertex.g();
                self.grid.vertex_mut(v)?.set_g(Cost::Unreachable);
                self.emit_vertex(v, start)?;

                for neighbor in self.grid.neighbors(v) {
                    let step = self.grid.edge_cost(v, neighbor)?;
                    if self.grid.vertex(neighbor)?.rhs() == g_old.saturating_add(step) {
                        let rhs = self.compute_rhs(neighbor)?;
                        self.grid.vertex_mut(neighbor)?.set_rhs(rhs);
                    }
                    self.update_vertex(neighbor, start)?;
                }
                self.update_vertex(v, start)?;
            }
        }

        trace!(
            "[DStarLite] relaxation quiescent after {} expansions, {} queued",
            expansions,
            self.frontier.len()
        );
        Ok(())
    }

    /// Record the vertex's display fields and append an immutable snapshot
    /// to the event journal.
    fn emit_vertex(&mut self, v: GridCoord, start: GridCoord) -> Result<(), PlannerError> {
        let heuristic = self.grid.heuristic(start, v);
        let primary = self.calculate_key(v, start)?.k1;
        let vertex = self.grid.vertex_mut(v)?;
        vertex.record_display(heuristic, primary);
        let snapshot = vertex.snapshot(heuristic, primary);
        self.events.push(PlannerEvent::VertexChanged(snapshot));
        Ok(())
    }
}
