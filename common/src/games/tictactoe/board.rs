use std::fmt;

use super::types::{CELL_COUNT, Cell, Mark};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn get(&self, index: usize) -> Cell {
        self.cells[index]
    }

    pub fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark.into();
    }

    pub fn clear_cell(&mut self, index: usize) {
        self.cells[index] = Cell::Empty;
    }

    pub fn clear(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.cells[index] == Cell::Empty
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != Cell::Empty).count()
    }
}

/// Empty cell indices in ascending order.
pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| **cell == Cell::Empty)
        .map(|(index, _)| index)
        .collect()
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f, "-+-+-")?;
            }
            writeln!(f, "{}|{}|{}", chunk[0].symbol(), chunk[1].symbol(), chunk[2].symbol())?;
        }
        Ok(())
    }
}
