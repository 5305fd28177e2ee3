use crate::error::{CoreError, Result};

/// A cell position. Signed so neighbor offsets can step off the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Dense liveness plane of `width * height` cells, row-major.
///
/// Positions outside `[0, width) x [0, height)` are dead and cannot be
/// written; there is no wraparound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
    cells: Vec<bool>,
}

impl Grid {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn dimensions(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32 {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    /// Raw lookup. Fails for positions the grid cannot represent.
    pub fn cell(&self, x: i32, y: i32) -> Result<bool> {
        self.index(x, y)
            .map(|idx| self.cells[idx])
            .ok_or(CoreError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
    }

    /// Liveness query where anything off the grid counts as dead.
    #[inline]
    pub fn is_alive(&self, x: i32, y: i32) -> bool {
        self.cell(x, y).unwrap_or(false)
    }

    pub fn set(&mut self, x: i32, y: i32, alive: bool) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = alive;
        }
    }

    pub fn set_alive(&mut self, x: i32, y: i32) {
        self.set(x, y, true);
    }

    pub fn set_dead(&mut self, x: i32, y: i32) {
        self.set(x, y, false);
    }

    /// Flips one cell and returns its new liveness, or `None` off the grid.
    pub fn toggle(&mut self, x: i32, y: i32) -> Option<bool> {
        let idx = self.index(x, y)?;
        self.cells[idx] = !self.cells[idx];
        Some(self.cells[idx])
    }

    /// Number of live cells in the Moore neighborhood of `(x, y)`.
    pub fn live_neighbors(&self, x: i32, y: i32) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dx, dy)| self.is_alive(x.saturating_add(dx), y.saturating_add(dy)))
            .count() as u8
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Live positions in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = Point> + '_ {
        let width = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &alive)| alive)
            .map(move |(idx, _)| Point::new((idx % width) as i32, (idx / width) as i32))
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Reinitializes the grid to new dimensions. Cells inside both the old
    /// and the new bounds keep their liveness; the rest are dropped.
    pub fn resize(&mut self, width: u16, height: u16) {
        if (width, height) == self.dimensions() {
            return;
        }
        let mut resized = Grid::new(width, height);
        for point in self.live_cells() {
            resized.set_alive(point.x, point.y);
        }
        *self = resized;
    }
}
