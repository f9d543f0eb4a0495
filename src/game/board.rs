//! Board Representation and Line Evaluation
//!
//! The fixed 3x3 grid. Evaluation always scans the whole board so a move
//! completing several lines at once is still seen; both lines necessarily
//! belong to the mover, who simply wins.

use serde::{Deserialize, Serialize};

use crate::game::state::PlayerNum;

/// Number of cells on the board.
pub const BOARD_CELLS: usize = 9;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// State of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[repr(u8)]
pub enum Cell {
    /// No mark.
    #[default]
    Empty = 0,
    /// Marked by player one.
    PlayerOne = 1,
    /// Marked by player two.
    PlayerTwo = 2,
}

impl Cell {
    /// The mark belonging to a player.
    pub fn mark_of(player: PlayerNum) -> Cell {
        match player {
            PlayerNum::One => Cell::PlayerOne,
            PlayerNum::Two => Cell::PlayerTwo,
        }
    }
}

/// Outcome of evaluating a board position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardOutcome {
    /// No line complete, empty cells remain.
    Undecided,
    /// A line is fully held by this player.
    Won(PlayerNum),
    /// All cells filled, no line complete.
    Drawn,
}

/// The 3x3 grid, cell 0 top-left, row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Board(pub [Cell; BOARD_CELLS]);

impl Board {
    /// An empty board.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Cell at an index, if the index is on the board.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.0.get(index).copied()
    }

    /// Place a player's mark. The caller has already validated the cell.
    pub fn set(&mut self, index: usize, player: PlayerNum) {
        self.0[index] = Cell::mark_of(player);
    }

    /// Are all cells marked?
    pub fn is_full(&self) -> bool {
        self.0.iter().all(|c| *c != Cell::Empty)
    }

    /// Evaluate the full position against all 8 lines.
    pub fn evaluate(&self) -> BoardOutcome {
        for line in &LINES {
            let first = self.0[line[0]];
            if first != Cell::Empty && line.iter().all(|&i| self.0[i] == first) {
                let winner = match first {
                    Cell::PlayerOne => PlayerNum::One,
                    Cell::PlayerTwo => PlayerNum::Two,
                    Cell::Empty => unreachable!(),
                };
                return BoardOutcome::Won(winner);
            }
        }
        if self.is_full() {
            BoardOutcome::Drawn
        } else {
            BoardOutcome::Undecided
        }
    }

    /// Cells as raw u8 values (0 empty, 1 player one, 2 player two).
    pub fn to_u8_array(&self) -> [u8; BOARD_CELLS] {
        let mut out = [0u8; BOARD_CELLS];
        for (i, cell) in self.0.iter().enumerate() {
            out[i] = *cell as u8;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(marks: [u8; 9]) -> Board {
        let mut board = Board::empty();
        for (i, m) in marks.iter().enumerate() {
            board.0[i] = match m {
                0 => Cell::Empty,
                1 => Cell::PlayerOne,
                2 => Cell::PlayerTwo,
                _ => panic!("bad mark"),
            };
        }
        board
    }

    #[test]
    fn test_empty_board_undecided() {
        assert_eq!(Board::empty().evaluate(), BoardOutcome::Undecided);
        assert!(!Board::empty().is_full());
        assert_eq!(Board::empty().to_u8_array(), [0; 9]);
    }

    #[test]
    fn test_all_eight_lines_win() {
        for line in &LINES {
            let mut board = Board::empty();
            for &i in line {
                board.set(i, PlayerNum::One);
            }
            assert_eq!(
                board.evaluate(),
                BoardOutcome::Won(PlayerNum::One),
                "line {:?} should win",
                line
            );
        }
    }

    #[test]
    fn test_player_two_win() {
        let board = board_from([2, 2, 2, 1, 1, 0, 0, 0, 0]);
        assert_eq!(board.evaluate(), BoardOutcome::Won(PlayerNum::Two));
    }

    #[test]
    fn test_full_board_draw() {
        // 1 2 1 / 1 2 2 / 2 1 1 has no complete line
        let board = board_from([1, 2, 1, 1, 2, 2, 2, 1, 1]);
        assert!(board.is_full());
        assert_eq!(board.evaluate(), BoardOutcome::Drawn);
    }

    #[test]
    fn test_double_line_still_single_winner() {
        // Player one holds both diagonals through the centre.
        let board = board_from([1, 2, 1, 2, 1, 2, 1, 0, 1]);
        assert_eq!(board.evaluate(), BoardOutcome::Won(PlayerNum::One));
    }

    #[test]
    fn test_cell_bounds() {
        let board = Board::empty();
        assert_eq!(board.cell(8), Some(Cell::Empty));
        assert_eq!(board.cell(9), None);
    }
}
