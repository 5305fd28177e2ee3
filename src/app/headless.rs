use anyhow::{Context, Result};
use std::fmt;
use std::time::Duration;

use termlife_core::{PatternLibrary, Simulation, Variant};

/// Parameters of a run without a terminal.
#[derive(Debug, Clone)]
pub struct HeadlessRun {
    pub variant: Variant,
    pub width: u16,
    pub height: u16,
    pub pattern: String,
    pub generations: u64,
}

/// What a headless run ended with.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessReport {
    pub generation: u64,
    pub population: usize,
    pub total_births: u64,
    pub total_deaths: u64,
    pub extinct: bool,
    pub elapsed: Duration,
}

impl HeadlessRun {
    /// Stamps the pattern at the grid center and advances until the
    /// generation limit or extinction, whichever comes first.
    pub fn execute(&self) -> Result<HeadlessReport> {
        anyhow::ensure!(
            self.width > 0 && self.height > 0,
            "Grid must be at least 1x1, got {}x{}",
            self.width,
            self.height
        );

        let library = PatternLibrary::builtin()?;
        let pattern = library
            .by_name(&self.pattern)
            .with_context(|| format!("Unknown pattern `{}`", self.pattern))?;

        let mut sim = Simulation::new(self.variant, self.width, self.height);
        let anchor_x = (i32::from(self.width) - pattern.width() as i32) / 2;
        let anchor_y = (i32::from(self.height) - pattern.height() as i32) / 2;
        sim.set_cursor(anchor_x.max(0) as u16, anchor_y.max(0) as u16);
        sim.stamp_at_cursor(pattern);

        tracing::info!(
            variant = %self.variant,
            width = self.width,
            height = self.height,
            pattern = pattern.name(),
            generations = self.generations,
            "Headless run started"
        );

        let mut extinct = sim.population() == 0;
        for _ in 0..self.generations {
            if extinct {
                break;
            }
            extinct = sim.step().is_extinct();
        }

        let metrics = sim.metrics();
        let report = HeadlessReport {
            generation: sim.generation(),
            population: sim.population(),
            total_births: metrics.total_births(),
            total_deaths: metrics.total_deaths(),
            extinct,
            elapsed: metrics.elapsed(),
        };
        tracing::info!(
            generation = report.generation,
            population = report.population,
            extinct,
            "Headless run finished"
        );
        Ok(report)
    }
}

impl fmt::Display for HeadlessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Generation {} | Population {} | Births {} | Deaths {} | {:.1?} elapsed",
            self.generation, self.population, self.total_births, self.total_deaths, self.elapsed
        )?;
        if self.extinct {
            write!(f, " | extinct")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(pattern: &str, generations: u64) -> HeadlessRun {
        HeadlessRun {
            variant: Variant::Life,
            width: 40,
            height: 20,
            pattern: pattern.to_string(),
            generations,
        }
    }

    #[test]
    fn test_runs_requested_generations() {
        let report = run("glider", 12).execute().unwrap();
        assert_eq!(report.generation, 12);
        assert_eq!(report.population, 5);
        assert!(!report.extinct);
    }

    #[test]
    fn test_stops_at_extinction() {
        // Only one acorn cell fits on a 2x2 grid and it dies on the first tick.
        let mut params = run("acorn", 500);
        params.width = 2;
        params.height = 2;
        let report = params.execute().unwrap();
        assert!(report.extinct);
        assert_eq!(report.generation, 1);
        assert_eq!(report.population, 0);
        assert!(report.to_string().ends_with("extinct"));
    }

    #[test]
    fn test_pattern_names_are_forgiving() {
        assert!(run("Lightweight-Spaceship", 1).execute().is_ok());
        assert!(run("gosper_glider_gun", 1).execute().is_ok());
    }

    #[test]
    fn test_unknown_pattern() {
        let err = run("pulsar", 1).execute().unwrap_err();
        assert!(err.to_string().contains("pulsar"));
    }

    #[test]
    fn test_zero_generations_leaves_seed() {
        let report = run("acorn", 0).execute().unwrap();
        assert_eq!(report.generation, 0);
        assert_eq!(report.population, 7);
    }
}
