//! Cellular-automaton state and rule engine.
//!
//! The [`Grid`] holds liveness, [`rules`] maps a cell's neighborhood to its
//! next state, [`engine`] advances whole generations and [`Simulation`] ties
//! them together with the cursor and the auto-run state machine.

pub mod cursor;
pub mod engine;
pub mod error;
pub mod grid;
pub mod metrics;
pub mod pattern;
pub mod rules;
pub mod simulation;

pub use cursor::{Cursor, Direction};
pub use engine::{TickOutcome, Transition};
pub use error::{CoreError, Result};
pub use grid::{Grid, Point};
pub use pattern::{Pattern, PatternLibrary};
pub use rules::{RuleTable, Variant};
pub use simulation::{RunState, Simulation};
