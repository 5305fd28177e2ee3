use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use termlife_core::{RunState, Simulation};

/// One-line summary under the grid.
pub struct StatusWidget<'a> {
    pub simulation: &'a Simulation,
}

impl<'a> StatusWidget<'a> {
    pub fn new(simulation: &'a Simulation) -> Self {
        Self { simulation }
    }

    fn state_span(state: RunState) -> Span<'static> {
        match state {
            RunState::Running => Span::styled(
                " RUNNING ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            RunState::Stopped => Span::styled(
                " PAUSED ",
                Style::default().fg(Color::Black).bg(Color::Yellow),
            ),
        }
    }
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let sim = self.simulation;
        let cursor = sim.cursor();
        let line = Line::from(vec![
            Self::state_span(sim.run_state()),
            Span::styled(
                format!(" {} {} ", sim.variant(), sim.variant().rules()),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(format!(
                "| Gen: {} | Pop: {} | Cursor: {},{} ",
                sim.generation(),
                sim.population(),
                cursor.x,
                cursor.y
            )),
            Span::styled("| ? help", Style::default().fg(Color::DarkGray)),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}
