use std::fmt;

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// Result of scanning a board. Always recomputed from the cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    XWins,
    OWins,
    Tie,
}

impl Outcome {
    pub fn win_for(mark: Mark) -> Self {
        match mark {
            Mark::X => Outcome::XWins,
            Mark::O => Outcome::OWins,
        }
    }

    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }

    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::XWins => Some(Mark::X),
            Outcome::OWins => Some(Mark::O),
            Outcome::InProgress | Outcome::Tie => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::XWins => write!(f, "X wins!"),
            Outcome::OWins => write!(f, "O wins!"),
            Outcome::Tie => write!(f, "It's a tie!"),
        }
    }
}

/// Row-major cell coordinate on the 3x3 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index >= CELL_COUNT {
            return None;
        }
        Some(Self::new(index / BOARD_SIZE, index % BOARD_SIZE))
    }

    pub fn index(&self) -> Option<usize> {
        if self.row >= BOARD_SIZE || self.col >= BOARD_SIZE {
            return None;
        }
        Some(self.row * BOARD_SIZE + self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [usize; 3]) -> Self {
        Self { mark, cells }
    }

    pub fn start(&self) -> Position {
        Position::new(self.cells[0] / BOARD_SIZE, self.cells[0] % BOARD_SIZE)
    }

    pub fn end(&self) -> Position {
        Position::new(self.cells[2] / BOARD_SIZE, self.cells[2] % BOARD_SIZE)
    }
}
