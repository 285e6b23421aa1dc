use std::fmt;

use thiserror::Error;

use super::LINES;

pub const GRID_SIZE: usize = 9;
pub const LOCAL_BOARD_COUNT: usize = 9;
/// The first move of a game is played in the centre local board.
pub const STARTING_LOCAL_BOARD: usize = 4;

/// A player's mark. X moves first and is the maximizing player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opposite(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn is_maximizing(self) -> bool {
        self == Mark::X
    }

    pub fn to_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl std::str::FromStr for Mark {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_lowercase().as_str() {
            "x" => Ok(Mark::X),
            "o" => Ok(Mark::O),
            _ => Err(format!("invalid mark `{}`, expected x or o", input)),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum BoardError {
    #[error("cell ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },
    #[error("cell ({row}, {col}) is already taken")]
    CellOccupied { row: usize, col: usize },
    #[error("cell ({row}, {col}) is not in local board {expected}")]
    WrongLocalBoard {
        row: usize,
        col: usize,
        expected: usize,
    },
    #[error("the game is already over")]
    GameOver,
    #[error("cell ({row}, {col}) was not the last move played")]
    UndoMismatch { row: usize, col: usize },
}

/// Index of the local board containing global cell (`row`, `col`).
pub fn local_board_of(row: usize, col: usize) -> usize {
    (row / 3) * 3 + col / 3
}

/// The local board the opponent is sent to after a move at (`row`, `col`).
pub fn next_local_board(row: usize, col: usize) -> usize {
    (row % 3) * 3 + col % 3
}

/// Top-left global cell of a local board.
pub fn local_board_origin(index: usize) -> (usize, usize) {
    ((index / 3) * 3, (index % 3) * 3)
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct PlayedMove {
    row: usize,
    col: usize,
    previous_target: Option<usize>,
}

/// A 9x9 ultimate tic-tac-toe grid, the player to move, and the local board
/// that player is sent to.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    cells: [[Option<Mark>; GRID_SIZE]; GRID_SIZE],
    turn: Mark,
    target: Option<usize>,
    winner: Option<Mark>,
    filled: usize,
    history: Vec<PlayedMove>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty grid with X to move in the centre local board.
    pub fn new() -> Self {
        Self {
            cells: [[None; GRID_SIZE]; GRID_SIZE],
            turn: Mark::X,
            target: Some(STARTING_LOCAL_BOARD),
            winner: None,
            filled: 0,
            history: Vec::new(),
        }
    }

    /// The mark at (`row`, `col`). Cells off the grid read as empty.
    pub fn get(&self, row: usize, col: usize) -> Option<Mark> {
        self.cells.get(row)?.get(col).copied().flatten()
    }

    pub fn turn(&self) -> Mark {
        self.turn
    }

    pub fn set_turn(&mut self, turn: Mark) {
        self.turn = turn;
    }

    pub fn toggle_turn(&mut self) -> Mark {
        self.turn = self.turn.opposite();
        self.turn
    }

    /// The local board the player to move is sent to, or `None` when any empty
    /// cell may be played.
    pub fn target(&self) -> Option<usize> {
        self.target
    }

    pub fn set_target(&mut self, target: Option<usize>) {
        self.target = target;
    }

    /// The mark that completed a line, if any.
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    pub fn is_full(&self) -> bool {
        self.filled == GRID_SIZE * GRID_SIZE
    }

    pub fn moves_played(&self) -> usize {
        self.history.len()
    }

    pub fn is_local_board_full(&self, index: usize) -> bool {
        let (origin_row, origin_col) = local_board_origin(index);
        (origin_row..origin_row + 3)
            .all(|row| (origin_col..origin_col + 3).all(|col| self.cells[row][col].is_some()))
    }

    /// The local board the player to move must play in. A target board with no
    /// empty cell frees the player to play anywhere.
    pub fn playable_local_board(&self) -> Option<usize> {
        self.target
            .filter(|&index| !self.is_local_board_full(index))
    }

    pub fn check_playable(&self, row: usize, col: usize) -> Result<(), BoardError> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return Err(BoardError::OutOfBounds { row, col });
        }
        if self.winner.is_some() || self.is_full() {
            return Err(BoardError::GameOver);
        }
        if self.cells[row][col].is_some() {
            return Err(BoardError::CellOccupied { row, col });
        }
        match self.playable_local_board() {
            Some(expected) if local_board_of(row, col) != expected => {
                Err(BoardError::WrongLocalBoard { row, col, expected })
            }
            _ => Ok(()),
        }
    }

    /// True if the player to move would complete a line by marking the empty
    /// cell (`row`, `col`).
    pub fn wins_with(&self, row: usize, col: usize) -> bool {
        let mark = Some(self.turn);
        Self::local_lines(local_board_of(row, col))
            .filter(|line| line.contains(&(row, col)))
            .any(|line| {
                line.iter()
                    .all(|&(r, c)| (r, c) == (row, col) || self.cells[r][c] == mark)
            })
    }

    /// Places the mark of the player to move. The turn is not toggled.
    pub fn play(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        self.check_playable(row, col)?;

        self.cells[row][col] = Some(self.turn);
        self.filled += 1;
        self.history.push(PlayedMove {
            row,
            col,
            previous_target: self.target,
        });
        self.target = Some(next_local_board(row, col));
        if self.completes_line(row, col) {
            self.winner = Some(self.turn);
        }

        Ok(())
    }

    /// Takes back the last move, which must have been played at (`row`, `col`).
    pub fn unplay(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        let last = match self.history.last() {
            Some(&last) if last.row == row && last.col == col => last,
            _ => return Err(BoardError::UndoMismatch { row, col }),
        };

        self.history.pop();
        self.cells[row][col] = None;
        self.filled -= 1;
        self.target = last.previous_target;
        // a finished game accepts no further moves, so the line was made by this one
        self.winner = None;

        Ok(())
    }

    /// The three cells of every line in local board `index`, as global coordinates.
    pub fn local_lines(index: usize) -> impl Iterator<Item = [(usize, usize); 3]> {
        let (origin_row, origin_col) = local_board_origin(index);
        LINES.into_iter().map(move |line| {
            line.map(|cell| (origin_row + cell / 3, origin_col + cell % 3))
        })
    }

    fn completes_line(&self, row: usize, col: usize) -> bool {
        let mark = self.cells[row][col];
        Self::local_lines(local_board_of(row, col))
            .filter(|line| line.contains(&(row, col)))
            .any(|line| line.iter().all(|&(r, c)| self.cells[r][c] == mark))
    }

    fn has_line(&self, mark: Mark) -> bool {
        (0..LOCAL_BOARD_COUNT)
            .flat_map(Self::local_lines)
            .any(|line| line.iter().all(|&(r, c)| self.cells[r][c] == Some(mark)))
    }

    fn find_winner(&self) -> Option<Mark> {
        (0..LOCAL_BOARD_COUNT)
            .flat_map(Self::local_lines)
            .find_map(|line| {
                let [(r0, c0), (r1, c1), (r2, c2)] = line;
                let mark = self.cells[r0][c0]?;
                (self.cells[r1][c1] == Some(mark) && self.cells[r2][c2] == Some(mark))
                    .then_some(mark)
            })
    }

    /// Builds a board from 81 cell characters in row-major order: `X`, `O`, or
    /// `.` for empty. Whitespace is ignored. The player to move is derived from
    /// the mark counts, and the player may play anywhere. A finished grid must
    /// have been won by the player who moved last.
    pub fn from_cells(grid: &str) -> Result<Self, String> {
        let cells: Vec<char> = grid.chars().filter(|c| !c.is_whitespace()).collect();
        if cells.len() != GRID_SIZE * GRID_SIZE {
            return Err(format!(
                "invalid number of cells. Expected 81, got {}",
                cells.len()
            ));
        }

        let mut board = Board::new();
        board.target = None;
        let mut x_count = 0;
        let mut o_count = 0;
        for (i, c) in cells.into_iter().enumerate() {
            let mark = match c {
                'X' | 'x' => {
                    x_count += 1;
                    Some(Mark::X)
                }
                'O' | 'o' => {
                    o_count += 1;
                    Some(Mark::O)
                }
                '.' | '_' => None,
                _ => return Err(format!("invalid character `{}` in grid", c)),
            };
            board.cells[i / GRID_SIZE][i % GRID_SIZE] = mark;
        }

        board.filled = x_count + o_count;
        board.turn = if x_count > o_count { Mark::O } else { Mark::X };
        if board.has_line(Mark::X) && board.has_line(Mark::O) {
            return Err("both players have completed a line".to_string());
        }
        board.winner = board.find_winner();
        if board.winner == Some(board.turn) {
            return Err(format!("{} is to move but already has a line", board.turn));
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let playable = self.playable_local_board();
        writeln!(f, "    0 1 2   3 4 5   6 7 8")?;
        for row in 0..GRID_SIZE {
            if row > 0 && row % 3 == 0 {
                writeln!(f, "   -------+-------+-------")?;
            }
            write!(f, "{}  ", row)?;
            for col in 0..GRID_SIZE {
                if col > 0 && col % 3 == 0 {
                    write!(f, " |")?;
                }
                let symbol = match self.cells[row][col] {
                    Some(mark) => mark.to_char(),
                    None if playable.map_or(true, |b| b == local_board_of(row, col)) => '.',
                    None => ' ',
                };
                write!(f, " {}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Builds a [`Board`] from a 9x9 grid of `X`, `O` and `.` tokens.
#[macro_export]
macro_rules! uttt_position {
    ($($cell:tt)*) => {{
        let grid = stringify!($($cell)*);
        $crate::games::ultimate_tic_tac_toe::Board::from_cells(grid).unwrap()
    }};
}
