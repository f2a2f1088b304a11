use std::fmt;
use std::str::FromStr;

use super::types::{BoardError, CELL_COUNT, Cell, CellIndex, Mark, SIDE};

/// A 3x3 board stored row-major. `Copy`, so every hypothetical move yields a
/// fresh value and no search node shares cells with another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validating constructor: rejects anything that is not exactly nine cells.
    pub fn from_cells(cells: &[Cell]) -> Result<Self, BoardError> {
        let cells: [Cell; CELL_COUNT] = cells.try_into().map_err(|_| {
            BoardError::invalid(format!(
                "expected {} cells, got {}",
                CELL_COUNT,
                cells.len()
            ))
        })?;
        Ok(Self { cells })
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: CellIndex) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn is_valid_move(&self, index: CellIndex) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns a copy of this board with `mark` placed at `index`.
    ///
    /// Panics when `index` is out of range; callers index with values taken
    /// from [`Board::available_moves`] or checked with [`Board::is_valid_move`].
    pub fn with_mark(&self, index: CellIndex, mark: Mark) -> Board {
        let mut next = *self;
        next.cells[index] = Cell::Marked(mark);
        next
    }

    /// Empty cell indices in ascending order.
    pub fn available_moves(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_empty())
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.mark() == Some(mark))
            .count()
    }

    /// Cross moves first, so a board reached by alternating play has as many
    /// crosses as circles, or exactly one more.
    pub fn is_reachable(&self) -> bool {
        let crosses = self.count(Mark::Cross);
        let circles = self.count(Mark::Circle);
        crosses == circles || crosses == circles + 1
    }

    /// Side to move under alternating play starting with Cross.
    pub fn next_mark(&self) -> Mark {
        if self.count(Mark::Cross) > self.count(Mark::Circle) {
            Mark::Circle
        } else {
            Mark::Cross
        }
    }

    /// Same layout with every Cross turned into Circle and vice versa.
    pub fn mirrored(&self) -> Board {
        let mut next = *self;
        for cell in next.cells.iter_mut() {
            if let Cell::Marked(mark) = *cell {
                *cell = Cell::Marked(mark.opponent());
            }
        }
        next
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses nine row-major symbols: `X`, `O`, and `.`, `-` or `_` for empty.
    /// Whitespace and `/` or `|` row separators are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(CELL_COUNT);
        for ch in s.chars() {
            if ch.is_ascii_whitespace() || ch == '/' || ch == '|' {
                continue;
            }
            let cell = match ch.to_ascii_uppercase() {
                'X' => Cell::Marked(Mark::Cross),
                'O' => Cell::Marked(Mark::Circle),
                '.' | '-' | '_' => Cell::Empty,
                other => {
                    return Err(BoardError::invalid(format!(
                        "unexpected symbol '{}'",
                        other
                    )));
                }
            };
            cells.push(cell);
        }
        Board::from_cells(&cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(SIDE).enumerate() {
            if row > 0 {
                write!(f, "/")?;
            }
            for cell in chunk {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}
