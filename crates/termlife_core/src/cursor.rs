/// Direction of a single cursor move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

/// Anchor for toggling and stamping. Always within `[0, w-1] x [0, h-1]`
/// (or at the origin when the grid is empty).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub x: u16,
    pub y: u16,
}

impl Cursor {
    pub fn centered(width: u16, height: u16) -> Self {
        let mut cursor = Self {
            x: width / 2,
            y: height / 2,
        };
        cursor.clamp(width, height);
        cursor
    }

    pub fn step(&mut self, direction: Direction, width: u16, height: u16) {
        match direction {
            Direction::Left => self.x = self.x.saturating_sub(1),
            Direction::Up => self.y = self.y.saturating_sub(1),
            Direction::Right => self.x = self.x.saturating_add(1),
            Direction::Down => self.y = self.y.saturating_add(1),
        }
        self.clamp(width, height);
    }

    pub fn set(&mut self, x: u16, y: u16, width: u16, height: u16) {
        self.x = x;
        self.y = y;
        self.clamp(width, height);
    }

    pub fn clamp(&mut self, width: u16, height: u16) {
        self.x = self.x.min(width.saturating_sub(1));
        self.y = self.y.min(height.saturating_sub(1));
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }
}
