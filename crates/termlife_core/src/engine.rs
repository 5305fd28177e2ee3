//! Generation advance.
//!
//! A tick runs in two phases. [`plan`] reads the grid and records which cells
//! die and which are born, without writing anything, so every neighbor count
//! sees the previous generation only. [`Transition::commit`] then applies the
//! two lists.

use crate::grid::{Grid, Point};
use crate::rules::Variant;

/// Cells that change in the next generation, collected against the
/// pre-tick state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transition {
    pub to_kill: Vec<Point>,
    pub to_spawn: Vec<Point>,
    pub alive_before: usize,
}

/// Summary of one committed generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub alive_before: usize,
    pub alive_after: usize,
    pub births: usize,
    pub deaths: usize,
}

impl TickOutcome {
    /// True when nothing is left alive after the tick.
    pub fn is_extinct(&self) -> bool {
        self.alive_after == 0
    }
}

/// Collect phase: evaluates every cell in row-major order.
pub fn plan(grid: &Grid, variant: Variant) -> Transition {
    let rules = variant.rules();
    let (width, height) = grid.dimensions();
    let mut transition = Transition::default();

    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let alive = grid.is_alive(x, y);
            let n = grid.live_neighbors(x, y);
            let next = rules.next_state(alive, n);

            if alive {
                transition.alive_before += 1;
                if !next {
                    transition.to_kill.push(Point::new(x, y));
                }
            } else if next {
                transition.to_spawn.push(Point::new(x, y));
            }
        }
    }

    transition
}

impl Transition {
    pub fn is_empty(&self) -> bool {
        self.to_kill.is_empty() && self.to_spawn.is_empty()
    }

    /// Commit phase: kills first, then spawns.
    ///
    /// Counts come from the cells that actually flipped; stale or off-grid
    /// points are skipped.
    pub fn commit(self, grid: &mut Grid) -> TickOutcome {
        let mut deaths = 0;
        for point in &self.to_kill {
            if grid.is_alive(point.x, point.y) {
                grid.set_dead(point.x, point.y);
                deaths += 1;
            }
        }
        let mut births = 0;
        for point in &self.to_spawn {
            if grid.contains(point.x, point.y) && !grid.is_alive(point.x, point.y) {
                grid.set_alive(point.x, point.y);
                births += 1;
            }
        }

        // Spawns run last, so every birth is still alive here.
        let alive_after = grid.population();
        TickOutcome {
            alive_before: alive_after + deaths - births,
            alive_after,
            births,
            deaths,
        }
    }
}

/// Advances `grid` by one generation.
pub fn tick(grid: &mut Grid, variant: Variant) -> TickOutcome {
    plan(grid, variant).commit(grid)
}
