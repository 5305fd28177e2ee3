use crossterm::event::{Event, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use crate::app::events::{command_for, Command};
use crate::app::state::App;
use termlife_tui::GridWidget;

impl App {
    pub fn handle_input(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(columns, rows) => self.handle_resize(columns, rows),
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let patterns = &self.patterns;
        if let Some(command) = command_for(key, |c| patterns.by_shortcut(c).is_some()) {
            self.apply(command);
        }
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Quit => self.quit("quit key"),
            Command::Step => {
                self.simulation.step();
            }
            Command::ToggleAutoRun => {
                self.simulation.toggle_auto_run();
            }
            Command::Move(direction) => self.simulation.move_cursor(direction),
            Command::Stamp(key) => {
                if let Some(pattern) = self.patterns.by_shortcut(key) {
                    self.simulation.stamp_at_cursor(pattern);
                }
            }
            Command::ToggleCell => {
                self.simulation.toggle_at_cursor();
            }
            Command::ClearGrid => self.simulation.clear(),
            Command::ToggleHelp => self.show_help = !self.show_help,
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            if let Some((x, y)) =
                GridWidget::screen_to_grid(mouse.column, mouse.row, self.last_grid_rect)
            {
                self.simulation.click(x, y);
            }
        }
    }

    pub fn handle_resize(&mut self, columns: u16, rows: u16) {
        let rect = self.grid_rect_for(columns, rows);
        self.simulation.resize(rect.width, rect.height);
        self.last_grid_rect = rect;
    }
}
