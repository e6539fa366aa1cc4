//! Game board representation and terminal-state evaluation.
//!
//! This module contains:
//! - Cell occupancy for the 3x3 grid
//! - Mark placement and emptiness queries
//! - The evaluation that classifies a board as in progress, won, drawn,
//!   or impossible under legal alternating play

use crate::player::Player;
use serde::{Deserialize, Serialize};

/// Number of rows and columns in the grid
pub const GRID_SIZE: usize = 3;

/// Total number of cells
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// All 8 winning lines: 3 rows, 3 columns, 2 diagonals
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// A single cell of the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// No mark placed yet
    #[default]
    Empty,
    /// Occupied by the given player's mark
    Mark(Player),
}

/// Outcome of evaluating a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Moves remain and nobody has won
    InProgress,
    /// All cells filled with no completed line
    Draw,
    /// The given player completed a line
    Win(Player),
    /// Configuration that cannot arise from legal alternating play
    Invalid,
}

impl GameResult {
    /// Result string handed to presentation code
    pub fn label(&self) -> &'static str {
        match self {
            GameResult::InProgress | GameResult::Invalid => "",
            GameResult::Draw => "Draw",
            GameResult::Win(_) => "Win",
        }
    }

    /// Whether this result ends the game
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameResult::Draw | GameResult::Win(_))
    }
}

/// The 3x3 game board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cell at a position
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if the cell at a position holds no mark.
    ///
    /// Out-of-range indices are a caller contract violation and panic.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.cells[row][col] == Cell::Empty
    }

    /// Write a player's mark into a cell.
    ///
    /// Placement does not validate occupancy or terminal state; callers
    /// must check `is_empty` and the game result first. Turn alternation
    /// is the session's job, not the board's.
    pub fn place(&mut self, row: usize, col: usize, player: Player) {
        self.cells[row][col] = Cell::Mark(player);
    }

    /// Clear every cell. Idempotent.
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; GRID_SIZE]; GRID_SIZE];
    }

    /// Check if all 9 cells are filled
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| *cell != Cell::Empty)
    }

    /// Count marks per player, in turn order
    pub fn mark_counts(&self) -> (usize, usize) {
        let mut first = 0;
        let mut second = 0;
        for cell in self.cells.iter().flatten() {
            match cell {
                Cell::Mark(Player::First) => first += 1,
                Cell::Mark(Player::Second) => second += 1,
                Cell::Empty => {}
            }
        }
        (first, second)
    }

    /// Classify the current board contents.
    ///
    /// Evaluation order is authoritative: mark-count imbalance first,
    /// multiple completed lines second, single-line win third, fullness
    /// fourth, otherwise in progress. A board that is simultaneously full
    /// and has a winning line reports `Win`, not `Draw`.
    pub fn evaluate(&self) -> GameResult {
        let (first, second) = self.mark_counts();
        if first.abs_diff(second) > 1 {
            return GameResult::Invalid;
        }

        let (completed, owner) = self.completed_lines();
        if completed > 1 {
            return GameResult::Invalid;
        }
        if completed == 1 {
            if let Some(player) = owner {
                return GameResult::Win(player);
            }
        }

        if self.is_full() {
            return GameResult::Draw;
        }

        GameResult::InProgress
    }

    /// Count completed lines across all 8 line positions, tagged with the
    /// owning player of the last one found
    fn completed_lines(&self) -> (usize, Option<Player>) {
        let mut completed = 0;
        let mut owner = None;

        for [a, b, c] in LINES {
            if let Cell::Mark(player) = self.cell_at(a) {
                if self.cell_at(b) == Cell::Mark(player) && self.cell_at(c) == Cell::Mark(player) {
                    completed += 1;
                    owner = Some(player);
                }
            }
        }

        (completed, owner)
    }

    fn cell_at(&self, (row, col): (usize, usize)) -> Cell {
        self.cells[row][col]
    }
}
