pub mod ai;
pub mod api;
pub mod board;
pub mod config;
pub mod controller;
pub mod game;
pub mod layout;
pub mod logging;
pub mod selection;
pub mod timer;
pub mod types;

pub use board::{Board, PILE_COUNT, STARTING_PILES};
pub use config::ControllerConfig;
pub use controller::Controller;
pub use game::{MoveReport, NimGame};
pub use selection::{RejectReason, SelectOutcome, Selection, TokenRef};
pub use types::{GameState, Phase, Side, View};
