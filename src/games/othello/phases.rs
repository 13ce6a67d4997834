//! Turn-machine phases and game outcome.

use super::Player;
use serde::{Deserialize, Serialize};

/// Phase of the controller's turn state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Waiting for the human (Dark) to submit a move.
    HumanToMove,
    /// The engine (Light) has a move to make; waiting for the trigger.
    AutomatedPending,
    /// The engine is searching and committing its move.
    AutomatedToMove,
    /// Neither side can move. Absorbing until a new game.
    Terminal,
}

impl Phase {
    /// Phase in which `player` is expected to move.
    pub fn awaiting(player: Player, human: Player) -> Self {
        if player == human {
            Phase::HumanToMove
        } else {
            Phase::AutomatedPending
        }
    }

    /// Returns true once the game has ended.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Terminal)
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player holds the majority of discs.
    Winner(Player),
    /// Equal disc counts.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
