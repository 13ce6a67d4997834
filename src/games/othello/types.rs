//! Core domain types for Othello.

use super::phases::Phase;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Side length of the board.
pub const BOARD_SIZE: usize = 8;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Player {
    /// Dark discs (moves first).
    Dark,
    /// Light discs.
    Light,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Dark => Player::Light,
            Player::Light => Player::Dark,
        }
    }

    /// Returns the cell holding this player's disc.
    pub fn cell(self) -> Cell {
        match self {
            Player::Dark => Cell::Dark,
            Player::Light => Cell::Light,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    /// No disc.
    #[default]
    Empty,
    /// Dark disc.
    Dark,
    /// Light disc.
    Light,
}

impl Cell {
    /// Returns the player owning the disc in this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Dark => Some(Player::Dark),
            Cell::Light => Some(Player::Light),
        }
    }

    /// Text symbol used by the board's text form.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Dark => 'X',
            Cell::Light => 'O',
        }
    }

    fn from_symbol(c: char) -> Option<Self> {
        match c {
            '.' | '-' => Some(Cell::Empty),
            'X' | 'x' | 'B' | 'b' => Some(Cell::Dark),
            'O' | 'o' | 'W' | 'w' => Some(Cell::Light),
            _ => None,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        player.cell()
    }
}

/// A cell coordinate, both components in `[0, 8)`.
///
/// Construction is checked, so a `Position` always indexes the board.
/// Deserialization goes through the same check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPosition", into = "RawPosition")]
pub struct Position {
    row: u8,
    col: u8,
}

/// Unchecked wire form of a [`Position`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawPosition {
    row: usize,
    col: usize,
}

/// A coordinate outside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Position ({}, {}) is off the board", row, col)]
pub struct PositionError {
    /// Requested row.
    pub row: usize,
    /// Requested column.
    pub col: usize,
}

impl TryFrom<RawPosition> for Position {
    type Error = PositionError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::new(raw.row, raw.col).ok_or(PositionError {
            row: raw.row,
            col: raw.col,
        })
    }
}

impl From<Position> for RawPosition {
    fn from(pos: Position) -> Self {
        Self {
            row: pos.row(),
            col: pos.col(),
        }
    }
}

impl Position {
    /// Creates a position, or `None` when either coordinate is off the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Row index.
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column index.
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major index in `[0, 64)`.
    pub fn index(self) -> usize {
        self.row() * BOARD_SIZE + self.col()
    }

    /// Creates a position from a row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= CELL_COUNT {
            return None;
        }
        Self::new(index / BOARD_SIZE, index % BOARD_SIZE)
    }

    /// Steps one cell in direction `(dr, dc)`, or `None` off the edge.
    pub fn step(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// All 64 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELL_COUNT).filter_map(Position::from_index)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Disc totals for each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscCount {
    /// Dark discs on the board.
    pub dark: usize,
    /// Light discs on the board.
    pub light: usize,
    /// Empty cells.
    pub empty: usize,
}

impl DiscCount {
    /// Occupied cells.
    pub fn occupied(&self) -> usize {
        self.dark + self.light
    }

    /// Cells accounted for; always 64 for a well-formed board.
    pub fn total(&self) -> usize {
        self.dark + self.light + self.empty
    }
}

/// 8x8 Othello board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed `[row][col]`.
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates the standard opening position.
    ///
    /// Light holds (3,3) and (4,4); Dark holds (3,4) and (4,3).
    pub fn new() -> Self {
        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        cells[3][3] = Cell::Light;
        cells[4][4] = Cell::Light;
        cells[3][4] = Cell::Dark;
        cells[4][3] = Cell::Dark;
        Self { cells }
    }

    /// Creates a board with every cell empty.
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Creates a board from explicit rows, `[row][col]`.
    pub fn from_rows(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Gets the cell at a position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// Sets the cell at a position (rules engine only).
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row()][pos.col()] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Counts cells holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|c| **c == cell).count()
    }

    /// Disc totals for both sides plus empty cells.
    pub fn disc_count(&self) -> DiscCount {
        DiscCount {
            dark: self.count(Cell::Dark),
            light: self.count(Cell::Light),
            empty: self.count(Cell::Empty),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            let line: String = row.iter().map(|c| c.symbol()).collect();
            if r + 1 < BOARD_SIZE {
                writeln!(f, "{line}")?;
            } else {
                write!(f, "{line}")?;
            }
        }
        Ok(())
    }
}

/// Error parsing a board from its text form.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// Wrong number of non-blank lines.
    #[display("Expected {} rows, found {}", BOARD_SIZE, _0)]
    RowCount(#[error(not(source))] usize),
    /// A row had the wrong number of cells.
    #[display("Row {} has {} cells, expected {}", row, len, BOARD_SIZE)]
    RowLength {
        /// Row index.
        row: usize,
        /// Cells found.
        len: usize,
    },
    /// An unrecognized cell symbol.
    #[display("Unknown cell symbol {:?} at row {}", symbol, row)]
    Symbol {
        /// Row index.
        row: usize,
        /// Offending character.
        symbol: char,
    },
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses eight lines of `.`, `X` (Dark) and `O` (Light). Whitespace inside
    /// a line and blank lines are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<Vec<char>> = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|line| !line.is_empty())
            .collect();

        if lines.len() != BOARD_SIZE {
            return Err(BoardParseError::RowCount(lines.len()));
        }

        let mut board = Board::empty();
        for (row, line) in lines.iter().enumerate() {
            if line.len() != BOARD_SIZE {
                return Err(BoardParseError::RowLength {
                    row,
                    len: line.len(),
                });
            }
            for (col, symbol) in line.iter().enumerate() {
                let cell = Cell::from_symbol(*symbol).ok_or(BoardParseError::Symbol {
                    row,
                    symbol: *symbol,
                })?;
                board.cells[row][col] = cell;
            }
        }
        Ok(board)
    }
}

/// Complete game state: the board, whose turn it is, and the controller phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Side to move.
    turn: Player,
    /// Turn-machine phase.
    phase: Phase,
}

impl GameState {
    /// Creates a new game: opening board, Dark to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::Dark,
            phase: Phase::HumanToMove,
        }
    }

    /// Creates a state from an arbitrary position.
    pub(crate) fn from_parts(board: Board, turn: Player, phase: Phase) -> Self {
        Self { board, turn, phase }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn set_turn(&mut self, turn: Player) {
        self.turn = turn;
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
