use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

use termlife_core::Grid;

/// Paints live cells as colored blanks. Grid cell `(x, y)` maps to screen
/// cell `(area.x + x, area.y + y)`.
pub struct GridWidget<'a> {
    grid: &'a Grid,
    live_color: Color,
}

impl<'a> GridWidget<'a> {
    pub fn new(grid: &'a Grid, live_color: Color) -> Self {
        Self { grid, live_color }
    }

    pub fn grid_to_screen(x: u16, y: u16, area: Rect) -> Option<(u16, u16)> {
        let sx = area.x.checked_add(x)?;
        let sy = area.y.checked_add(y)?;
        (sx < area.right() && sy < area.bottom()).then_some((sx, sy))
    }

    pub fn screen_to_grid(column: u16, row: u16, area: Rect) -> Option<(u16, u16)> {
        if column >= area.left()
            && column < area.right()
            && row >= area.top()
            && row < area.bottom()
        {
            Some((column - area.x, row - area.y))
        } else {
            None
        }
    }
}

impl Widget for GridWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for point in self.grid.live_cells() {
            let Some((sx, sy)) = Self::grid_to_screen(point.x as u16, point.y as u16, area) else {
                continue;
            };
            if let Some(cell) = buf.cell_mut((sx, sy)) {
                cell.set_char(' ').set_bg(self.live_color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_to_grid_respects_area() {
        let area = Rect::new(2, 1, 10, 5);
        assert_eq!(GridWidget::screen_to_grid(2, 1, area), Some((0, 0)));
        assert_eq!(GridWidget::screen_to_grid(11, 5, area), Some((9, 4)));
        assert_eq!(GridWidget::screen_to_grid(12, 5, area), None);
        assert_eq!(GridWidget::screen_to_grid(1, 3, area), None);
    }

    #[test]
    fn test_render_paints_live_cells() {
        let mut grid = Grid::new(4, 2);
        grid.set_alive(1, 0);
        grid.set_alive(3, 1);
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        GridWidget::new(&grid, Color::Green).render(area, &mut buf);

        assert_eq!(buf[(1, 0)].bg, Color::Green);
        assert_eq!(buf[(3, 1)].bg, Color::Green);
        assert_eq!(buf[(0, 0)].bg, Color::Reset);
    }

    #[test]
    fn test_render_clips_to_area() {
        let mut grid = Grid::new(8, 8);
        grid.set_alive(7, 7);
        let area = Rect::new(0, 0, 4, 4);
        let mut buf = Buffer::empty(area);
        GridWidget::new(&grid, Color::Green).render(area, &mut buf);
        assert!(buf.content().iter().all(|cell| cell.bg == Color::Reset));
    }
}
