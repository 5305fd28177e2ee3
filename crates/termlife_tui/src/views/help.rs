use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};

const CONTROLS: &[(&str, &str)] = &[
    ("q Esc ^C", "Quit"),
    ("Space s", "Step one generation"),
    ("Enter r", "Start / stop auto-run"),
    ("Arrows hjkl", "Move cursor"),
    ("x Click", "Toggle cell"),
    ("c", "Clear grid"),
    ("?", "Toggle this help"),
];

/// Centered overlay listing the key bindings and pattern shortcuts.
pub struct HelpWidget<'a> {
    patterns: &'a [(char, String)],
}

impl<'a> HelpWidget<'a> {
    pub fn new(patterns: &'a [(char, String)]) -> Self {
        Self { patterns }
    }

    fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = CONTROLS
            .iter()
            .map(|(keys, action)| format!(" {keys:<12} {action}"))
            .collect();
        lines.push(String::new());
        lines.push(" Patterns (stamped at the cursor)".to_string());
        lines.extend(
            self.patterns
                .iter()
                .map(|(key, name)| format!(" {key:<12} {name}")),
        );
        lines
    }
}

impl Widget for HelpWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines();
        let width = 44.min(area.width);
        let height = (lines.len() as u16 + 2).min(area.height);
        let help_area = Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        );

        Clear.render(help_area, buf);
        Paragraph::new(lines.join("\n"))
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .render(help_area, buf);
    }
}
