use serde::Serialize;

use crate::selection::TokenRef;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Human,
    Automated,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Self::Human => Self::Automated,
            Self::Automated => Self::Human,
        }
    }
}

/// Turn state of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Phase {
    HumanTurn,
    AutomatedTurn,
    GameOver { winner: Side },
}

impl Phase {
    /// The side allowed to move, `None` once the game is over.
    pub fn to_move(self) -> Option<Side> {
        match self {
            Self::HumanTurn => Some(Side::Human),
            Self::AutomatedTurn => Some(Side::Automated),
            Self::GameOver { .. } => None,
        }
    }
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub piles: Vec<u32>,
    pub selection: Vec<TokenRef>,
    pub phase: Phase,
    pub current_turn: Option<Side>,
    pub is_game_over: bool,
    pub winner: Option<Side>,
    pub nim_sum: u32,
    /// Bumped on every restart.
    pub generation: u64,
}

/// A token as drawn on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TokenView {
    pub pile: usize,
    pub token: u32,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub selected: bool,
}

/// Everything the host needs to redraw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    pub state: GameState,
    pub tokens: Vec<TokenView>,
    pub confirm_enabled: bool,
    pub status: String,
    pub message: Option<String>,
}
