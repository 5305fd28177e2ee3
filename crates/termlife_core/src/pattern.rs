//! Fixed cell patterns and stamping them onto a grid.

use termlife_data::PatternData;

use crate::error::{CoreError, Result};
use crate::grid::Grid;

/// An immutable rectangular on/off matrix. Row 0 is the top row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    name: String,
    width: usize,
    cells: Vec<Vec<bool>>,
}

impl Pattern {
    /// Builds a pattern from plaintext rows (`O` alive, `.` dead).
    ///
    /// `o`, `*` and `1` are also read as alive, `0` and space as dead. Short
    /// rows are padded with dead cells up to the widest row.
    pub fn from_rows(name: &str, rows: &[&str]) -> Result<Self> {
        let cells = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row.chars()
                    .map(|c| match c {
                        'O' | 'o' | '*' | '1' => Ok(true),
                        '.' | '0' | ' ' => Ok(false),
                        other => Err(CoreError::invalid_pattern(
                            name,
                            format!("row {i} has unexpected character `{other}`"),
                        )),
                    })
                    .collect::<Result<Vec<bool>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_cells(name, cells)
    }

    /// Builds a pattern from a 0/1 matrix.
    pub fn from_matrix(name: &str, rows: &[&[u8]]) -> Result<Self> {
        let cells = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row.iter()
                    .map(|&value| match value {
                        0 => Ok(false),
                        1 => Ok(true),
                        other => Err(CoreError::invalid_pattern(
                            name,
                            format!("row {i} has value {other}, expected 0 or 1"),
                        )),
                    })
                    .collect::<Result<Vec<bool>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_cells(name, cells)
    }

    fn from_cells(name: &str, mut cells: Vec<Vec<bool>>) -> Result<Self> {
        let width = cells.iter().map(Vec::len).max().unwrap_or(0);
        if width == 0 {
            return Err(CoreError::invalid_pattern(name, "pattern has no cells"));
        }
        for row in &mut cells {
            row.resize(width, false);
        }
        Ok(Self {
            name: name.to_string(),
            width,
            cells,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn is_set(&self, row: usize, col: usize) -> bool {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    pub fn population(&self) -> usize {
        self.cells.iter().flatten().filter(|&&alive| alive).count()
    }

    /// Overlays the pattern with its top-left corner at the anchor.
    ///
    /// Stamping is destructive: a 0 in the pattern kills the cell below it.
    /// Cells landing off the grid are dropped.
    pub fn stamp(&self, grid: &mut Grid, anchor_x: i32, anchor_y: i32) {
        stamp(grid, self, anchor_x, anchor_y);
    }
}

impl TryFrom<&PatternData> for Pattern {
    type Error = CoreError;

    fn try_from(data: &PatternData) -> Result<Self> {
        Pattern::from_rows(data.name, data.rows)
    }
}

/// Writes `pattern` onto `grid` at `(anchor_x + col, anchor_y + row)`.
pub fn stamp(grid: &mut Grid, pattern: &Pattern, anchor_x: i32, anchor_y: i32) {
    for (i, row) in pattern.cells.iter().enumerate() {
        for (j, &alive) in row.iter().enumerate() {
            let x = anchor_x.saturating_add(j as i32);
            let y = anchor_y.saturating_add(i as i32);
            grid.set(x, y, alive);
        }
    }
}

/// The built-in patterns, parsed once and keyed by their shortcut.
#[derive(Debug, Clone)]
pub struct PatternLibrary {
    entries: Vec<(char, Pattern)>,
}

impl PatternLibrary {
    pub fn builtin() -> Result<Self> {
        Self::from_data(termlife_data::PATTERNS)
    }

    pub fn from_data(data: &[PatternData]) -> Result<Self> {
        let entries = data
            .iter()
            .map(|d| -> Result<(char, Pattern)> {
                Ok((d.shortcut, Pattern::try_from(d)?))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { entries })
    }

    pub fn by_shortcut(&self, key: char) -> Option<&Pattern> {
        self.entries
            .iter()
            .find(|(shortcut, _)| *shortcut == key)
            .map(|(_, pattern)| pattern)
    }

    /// Case-insensitive lookup; spaces, dashes and underscores are ignored.
    pub fn by_name(&self, name: &str) -> Option<&Pattern> {
        let wanted = normalize(name);
        self.entries
            .iter()
            .find(|(_, pattern)| normalize(pattern.name()) == wanted)
            .map(|(_, pattern)| pattern)
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &Pattern)> {
        self.entries.iter().map(|(key, pattern)| (*key, pattern))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}
