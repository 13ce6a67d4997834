//! Game controller: the turn state machine.
//!
//! The controller owns the one authoritative [`GameState`]. Human moves
//! (Dark) go straight through the rules; the automated side (Light) moves
//! only when the presentation layer calls
//! [`GameController::trigger_automated_move`], which searches a scratch copy
//! of the board and then commits the chosen move in one step.
//!
//! Passing is automatic: a side with no legal move is skipped, and the game
//! ends only when neither side can move.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::phases::{Outcome, Phase};
use super::rules::{self, has_legal_move};
use super::search::{Difficulty, Searcher};
use super::types::{Board, DiscCount, GameState, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Side controlled by the human.
pub const HUMAN: Player = Player::Dark;

/// Side controlled by the search.
pub const AUTOMATED: Player = Player::Light;

/// Report of one automated ply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomatedPly {
    /// Board after the ply.
    pub board: Board,
    /// Cell played, or `None` if the automated side had to pass.
    pub played: Option<Position>,
    /// Search value of the position.
    pub value: i32,
    /// Nodes the search visited.
    pub nodes: u64,
    /// Side to move next.
    pub turn: Player,
    /// Phase after the ply.
    pub phase: Phase,
    /// True if the game is over.
    pub terminal: bool,
    /// True if the human had no reply and was passed.
    pub human_passed: bool,
}

/// Orchestrates human submissions and automated search over one game.
#[derive(Debug, Clone)]
pub struct GameController {
    state: GameState,
    difficulty: Difficulty,
    searcher: Searcher,
    last_human: Option<Position>,
    last_automated: Option<Position>,
}

impl GameController {
    /// Creates a controller at the opening position with the default difficulty.
    #[instrument]
    pub fn new() -> Self {
        Self::with_difficulty(Difficulty::default())
    }

    /// Creates a controller at the opening position.
    #[instrument]
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self {
            state: GameState::new(),
            difficulty,
            searcher: Searcher::new(),
            last_human: None,
            last_automated: None,
        }
    }

    /// Creates a controller at an arbitrary position with `turn` to move.
    ///
    /// Passes and game end are resolved immediately, so the resulting phase
    /// may hand the turn to the other side or be [`Phase::Terminal`].
    #[instrument(skip(board))]
    pub fn with_position(board: Board, turn: Player, difficulty: Difficulty) -> Self {
        let mut controller = Self {
            state: GameState::from_parts(board, turn, Phase::awaiting(turn, HUMAN)),
            difficulty,
            searcher: Searcher::new(),
            last_human: None,
            last_automated: None,
        };
        controller.advance(turn.opponent());
        controller
    }

    /// Resets to the opening position. Difficulty is kept.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        info!(difficulty = %self.difficulty, "Starting new game");
        self.state = GameState::new();
        self.last_human = None;
        self.last_automated = None;
    }

    /// Sets the search depth used by subsequent automated moves.
    #[instrument(skip(self))]
    pub fn configure_difficulty(&mut self, difficulty: Difficulty) {
        debug!(depth = difficulty.depth(), "Difficulty configured");
        self.difficulty = difficulty;
    }

    /// Submits a human move.
    ///
    /// Returns the phase after the move (and any automatic pass).
    ///
    /// # Errors
    ///
    /// - [`MoveError::WrongPhase`] unless the phase is [`Phase::HumanToMove`].
    /// - [`MoveError::InvalidMove`] for an off-board, occupied, or
    ///   non-capturing cell.
    ///
    /// The board and turn are unchanged on error.
    #[instrument(skip(self), fields(phase = %self.state.phase()))]
    pub fn submit_move(&mut self, row: usize, col: usize) -> Result<Phase, MoveError> {
        let phase = self.state.phase();
        if phase != Phase::HumanToMove {
            warn!("Move submitted out of turn");
            return Err(MoveError::WrongPhase { phase });
        }

        let Some(position) = Position::new(row, col) else {
            warn!("Move submitted off the board");
            return Err(MoveError::InvalidMove { row, col });
        };

        self.commit(Move::new(HUMAN, position)).inspect_err(|e| {
            warn!(error = %e, "Move rejected");
        })?;
        self.last_human = Some(position);

        Ok(self.advance(HUMAN))
    }

    /// Runs one automated ply: search at the configured depth, then commit.
    ///
    /// # Errors
    ///
    /// [`MoveError::WrongPhase`] unless the phase is
    /// [`Phase::AutomatedPending`].
    #[instrument(skip(self), fields(difficulty = %self.difficulty))]
    pub fn trigger_automated_move(&mut self) -> Result<AutomatedPly, MoveError> {
        let phase = self.state.phase();
        if phase != Phase::AutomatedPending {
            warn!(%phase, "Automated move triggered out of turn");
            return Err(MoveError::WrongPhase { phase });
        }
        self.state.set_phase(Phase::AutomatedToMove);

        let result = self
            .searcher
            .best_move(self.state.board(), self.difficulty.depth());

        if let Some(position) = result.best_move {
            if let Err(e) = self.commit(Move::new(AUTOMATED, position)) {
                self.state.set_phase(Phase::AutomatedPending);
                return Err(e);
            }
            self.last_automated = Some(position);
            info!(%position, value = result.value, nodes = result.nodes, "Automated move played");
        } else {
            info!("Automated side has no move, passing");
        }

        let phase = self.advance(AUTOMATED);
        Ok(AutomatedPly {
            board: self.state.board().clone(),
            played: result.best_move,
            value: result.value,
            nodes: result.nodes,
            turn: self.state.turn(),
            phase,
            terminal: phase.is_terminal(),
            human_passed: phase == Phase::AutomatedPending,
        })
    }

    /// Legal moves for `player` on the current board, row-major.
    #[instrument(skip(self))]
    pub fn legal_moves(&self, player: Player) -> Vec<Position> {
        rules::legal_moves(self.state.board(), player)
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the full game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Player {
        self.state.turn()
    }

    /// Returns the phase.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Returns the configured difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Disc counts for each side.
    pub fn score(&self) -> DiscCount {
        self.state.board().disc_count()
    }

    /// True once neither side can move.
    pub fn is_terminal(&self) -> bool {
        self.state.phase().is_terminal()
    }

    /// Result by majority disc count, once the game is over.
    pub fn winner(&self) -> Option<Outcome> {
        self.is_terminal().then(|| rules::outcome(self.state.board()))
    }

    /// Most recent cell played by `player` this game.
    pub fn last_move(&self, player: Player) -> Option<Position> {
        if player == HUMAN {
            self.last_human
        } else {
            self.last_automated
        }
    }

    /// Validates and applies a move to the authoritative board.
    fn commit(&mut self, mov: Move) -> Result<(), MoveError> {
        MoveContract::pre(self.state.board(), &mov)?;

        #[cfg(debug_assertions)]
        let before = self.state.board().clone();

        if !rules::apply(self.state.board_mut(), mov.position, mov.player) {
            return Err(MoveError::invalid(mov.position));
        }

        #[cfg(debug_assertions)]
        if let Err(e) = MoveContract::post(&before, self.state.board()) {
            *self.state.board_mut() = before;
            return Err(e);
        }

        debug!(%mov, "Move committed");
        Ok(())
    }

    /// Hands the turn on after `mover` has moved (or passed).
    fn advance(&mut self, mover: Player) -> Phase {
        let next = mover.opponent();
        let board = self.state.board();

        let (turn, phase) = if has_legal_move(board, next) {
            (next, Phase::awaiting(next, HUMAN))
        } else if has_legal_move(board, mover) {
            info!(passed = %next, "No legal move, passing");
            (mover, Phase::awaiting(mover, HUMAN))
        } else {
            (next, Phase::Terminal)
        };

        self.state.set_turn(turn);
        self.state.set_phase(phase);

        if phase.is_terminal() {
            let count = self.state.board().disc_count();
            info!(dark = count.dark, light = count.light, "Game over");
        } else {
            debug!(%turn, %phase, "Turn advanced");
        }
        phase
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}
