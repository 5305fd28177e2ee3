//! Tick statistics and logging setup.
//!
//! The interactive view owns the terminal, so log output goes to a file
//! rather than stdout or stderr.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use tracing_subscriber::EnvFilter;

use crate::engine::TickOutcome;

/// Generations between periodic summary log lines.
const SUMMARY_INTERVAL: u64 = 1000;

/// Running statistics for the simulation.
#[derive(Debug, Clone)]
pub struct Metrics {
    tick_count: u64,
    population: usize,
    total_births: u64,
    total_deaths: u64,
    last_tick_duration: Duration,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Creates a new metrics collector.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tick_count: 0,
            population: 0,
            total_births: 0,
            total_deaths: 0,
            last_tick_duration: Duration::ZERO,
            start_time: Instant::now(),
        }
    }

    /// Records a committed generation with its duration.
    pub fn record_tick(&mut self, duration: Duration, outcome: &TickOutcome) {
        self.tick_count += 1;
        self.population = outcome.alive_after;
        self.total_births += outcome.births as u64;
        self.total_deaths += outcome.deaths as u64;
        self.last_tick_duration = duration;

        if self.tick_count % SUMMARY_INTERVAL == 0 {
            tracing::info!(
                tick = self.tick_count,
                population = self.population,
                births = self.total_births,
                deaths = self.total_deaths,
                duration_us = duration.as_micros() as u64,
                "Simulation tick"
            );
        }
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn population(&self) -> usize {
        self.population
    }

    #[must_use]
    pub fn total_births(&self) -> u64 {
        self.total_births
    }

    #[must_use]
    pub fn total_deaths(&self) -> u64 {
        self.total_deaths
    }

    #[must_use]
    pub fn last_tick_duration(&self) -> Duration {
        self.last_tick_duration
    }

    /// Gets elapsed time since metrics creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Installs a fmt subscriber appending to `path`.
///
/// `RUST_LOG` takes precedence over `level`. A subscriber that is already
/// installed is left in place.
pub fn init_logging(path: &Path, level: &str) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
    Ok(())
}
