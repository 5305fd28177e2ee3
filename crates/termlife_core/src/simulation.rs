//! The simulation context and its auto-run state machine.
//!
//! [`Simulation`] is the single owner of the grid. Every mutation (manual
//! toggles, stamps, ticks) goes through `&mut self`, so whoever holds it
//! serializes them by construction.

use std::time::Instant;

use crate::cursor::{Cursor, Direction};
use crate::engine::{self, TickOutcome};
use crate::grid::Grid;
use crate::metrics::Metrics;
use crate::pattern::Pattern;
use crate::rules::Variant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
}

impl RunState {
    pub fn is_running(self) -> bool {
        self == RunState::Running
    }
}

#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    variant: Variant,
    cursor: Cursor,
    run_state: RunState,
    generation: u64,
    last_outcome: Option<TickOutcome>,
    metrics: Metrics,
}

impl Simulation {
    /// Empty grid, cursor centered, auto-run stopped.
    pub fn new(variant: Variant, width: u16, height: u16) -> Self {
        Self {
            grid: Grid::new(width, height),
            variant,
            cursor: Cursor::centered(width, height),
            run_state: RunState::Stopped,
            generation: 0,
            last_outcome: None,
            metrics: Metrics::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state.is_running()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn last_outcome(&self) -> Option<&TickOutcome> {
        self.last_outcome.as_ref()
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn toggle_auto_run(&mut self) -> RunState {
        self.run_state = match self.run_state {
            RunState::Stopped => RunState::Running,
            RunState::Running => RunState::Stopped,
        };
        tracing::info!(state = ?self.run_state, generation = self.generation, "Auto-run toggled");
        self.run_state
    }

    /// Advances exactly one generation regardless of run state.
    ///
    /// The run state only changes when the tick leaves the grid empty, which
    /// stops auto-run.
    pub fn step(&mut self) -> TickOutcome {
        let started = Instant::now();
        let outcome = engine::tick(&mut self.grid, self.variant);
        self.generation += 1;
        self.metrics.record_tick(started.elapsed(), &outcome);
        tracing::debug!(
            generation = self.generation,
            births = outcome.births,
            deaths = outcome.deaths,
            population = outcome.alive_after,
            "Generation advanced"
        );

        if outcome.is_extinct() && self.run_state.is_running() {
            self.run_state = RunState::Stopped;
            tracing::info!(generation = self.generation, "Extinction, auto-run stopped");
        }
        self.last_outcome = Some(outcome);
        outcome
    }

    /// Scheduling pulse: one tick while running, nothing otherwise.
    pub fn pulse(&mut self) -> Option<TickOutcome> {
        self.run_state.is_running().then(|| self.step())
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        let (width, height) = self.grid.dimensions();
        self.cursor.step(direction, width, height);
    }

    pub fn set_cursor(&mut self, x: u16, y: u16) {
        let (width, height) = self.grid.dimensions();
        self.cursor.set(x, y, width, height);
    }

    /// Flips one cell. A manual edit, not a tick.
    pub fn toggle_cell(&mut self, x: i32, y: i32) -> Option<bool> {
        self.grid.toggle(x, y)
    }

    pub fn toggle_at_cursor(&mut self) -> Option<bool> {
        let (x, y) = self.cursor.position();
        self.toggle_cell(x, y)
    }

    /// Pointer click: moves the cursor there and toggles the cell when the
    /// click lands on the grid.
    pub fn click(&mut self, x: u16, y: u16) -> Option<bool> {
        if !self.grid.contains(x as i32, y as i32) {
            return None;
        }
        self.set_cursor(x, y);
        self.toggle_cell(x as i32, y as i32)
    }

    /// Stamps `pattern` with its top-left corner on the cursor.
    pub fn stamp_at_cursor(&mut self, pattern: &Pattern) {
        let (x, y) = self.cursor.position();
        pattern.stamp(&mut self.grid, x, y);
        tracing::debug!(pattern = pattern.name(), x, y, "Pattern stamped");
    }

    pub fn clear(&mut self) {
        self.grid.clear();
        tracing::debug!("Grid cleared");
    }

    /// Follows a viewport resize. Cells outside the new bounds are dropped
    /// and the cursor is pulled back inside.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.grid.resize(width, height);
        self.cursor.clamp(width, height);
        tracing::debug!(width, height, "Grid resized");
    }
}
