use ratatui::layout::{Constraint, Direction, Layout, Position};
use ratatui::Frame;

use crate::app::state::App;
use termlife_tui::views::{HelpWidget, StatusWidget};
use termlife_tui::GridWidget;

impl App {
    pub fn draw(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(self.config.status_rows()),
            ])
            .split(f.area());
        let grid_area = chunks[0];
        self.last_grid_rect = grid_area;

        f.render_widget(
            GridWidget::new(self.simulation.grid(), self.live_color),
            grid_area,
        );

        if self.config.display.show_status {
            f.render_widget(StatusWidget::new(&self.simulation), chunks[1]);
        }

        if self.show_help {
            let legend = self.pattern_legend();
            f.render_widget(HelpWidget::new(&legend), f.area());
            return;
        }

        // The terminal cursor marks the edit position; it is hidden while
        // auto-running.
        if !self.simulation.is_running() {
            let cursor = self.simulation.cursor();
            if let Some((x, y)) = GridWidget::grid_to_screen(cursor.x, cursor.y, grid_area) {
                f.set_cursor_position(Position::new(x, y));
            }
        }
    }
}
