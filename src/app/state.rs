use anyhow::Result;
use ratatui::layout::Rect;
use ratatui::style::Color;

use crate::app::shutdown::ShutdownManager;
use crate::model::config::AppConfig;
use termlife_core::{PatternLibrary, Simulation, Variant};

pub struct App {
    pub running: bool,
    pub simulation: Simulation,
    pub config: AppConfig,
    pub patterns: PatternLibrary,
    pub live_color: Color,
    pub show_help: bool,
    pub shutdown: ShutdownManager,
    // Layout tracking
    pub last_grid_rect: Rect,
}

impl App {
    /// Builds the app for a terminal of `columns x rows`. The grid takes the
    /// whole terminal minus the status bar.
    pub fn new(config: AppConfig, variant: Variant, columns: u16, rows: u16) -> Result<Self> {
        let patterns = PatternLibrary::builtin()?;
        let live_color = config.live_color()?;
        let grid_rect = Rect::new(0, 0, columns, rows.saturating_sub(config.status_rows()));
        let simulation = Simulation::new(variant, grid_rect.width, grid_rect.height);

        tracing::info!(
            %variant,
            width = grid_rect.width,
            height = grid_rect.height,
            "Simulation created"
        );

        Ok(Self {
            running: true,
            simulation,
            config,
            patterns,
            live_color,
            show_help: false,
            shutdown: ShutdownManager::new(),
            last_grid_rect: grid_rect,
        })
    }

    /// Grid area for a terminal of `columns x rows`.
    pub fn grid_rect_for(&self, columns: u16, rows: u16) -> Rect {
        Rect::new(
            0,
            0,
            columns,
            rows.saturating_sub(self.config.status_rows()),
        )
    }

    /// Shortcut and name of every built-in pattern, for the help overlay.
    pub fn pattern_legend(&self) -> Vec<(char, String)> {
        self.patterns
            .iter()
            .map(|(key, pattern)| (key, pattern.name().to_string()))
            .collect()
    }

    pub fn quit(&mut self, reason: &str) {
        self.running = false;
        self.shutdown.request_shutdown(reason);
    }
}
