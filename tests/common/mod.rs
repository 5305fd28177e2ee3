pub mod macros;

use termlife_core::{Grid, Pattern, Simulation, Variant};

/// Builds grids (and simulations around them) from explicit live cells.
#[allow(dead_code)]
pub struct GridBuilder {
    width: u16,
    height: u16,
    variant: Variant,
    alive: Vec<(i32, i32)>,
}

#[allow(dead_code)]
impl GridBuilder {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            variant: Variant::Life,
            alive: Vec::new(),
        }
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_alive(mut self, x: i32, y: i32) -> Self {
        self.alive.push((x, y));
        self
    }

    pub fn with_cells(mut self, cells: &[(i32, i32)]) -> Self {
        self.alive.extend_from_slice(cells);
        self
    }

    /// Places a row-string pattern with its top-left corner at `(x, y)`.
    pub fn with_rows(mut self, x: i32, y: i32, rows: &[&str]) -> Self {
        let pattern = Pattern::from_rows("fixture", rows).expect("valid fixture rows");
        for row in 0..pattern.height() {
            for col in 0..pattern.width() {
                if pattern.is_set(row, col) {
                    self.alive.push((x + col as i32, y + row as i32));
                }
            }
        }
        self
    }

    pub fn build(self) -> Grid {
        let mut grid = Grid::new(self.width, self.height);
        for (x, y) in self.alive {
            grid.set_alive(x, y);
        }
        grid
    }

    pub fn build_simulation(self) -> Simulation {
        let variant = self.variant;
        let mut sim = Simulation::new(variant, self.width, self.height);
        for (x, y) in self.alive {
            sim.grid_mut().set_alive(x, y);
        }
        sim
    }
}

/// Live cells of `grid` in row-major order.
#[allow(dead_code)]
pub fn live_cells(grid: &Grid) -> Vec<(i32, i32)> {
    grid.live_cells().map(|p| (p.x, p.y)).collect()
}

/// Sorted copy of `cells`, row-major, for comparing against [`live_cells`].
#[allow(dead_code)]
pub fn row_major(cells: &[(i32, i32)]) -> Vec<(i32, i32)> {
    let mut cells = cells.to_vec();
    cells.sort_by_key(|&(x, y)| (y, x));
    cells
}
