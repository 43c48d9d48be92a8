pub mod strategy;

pub use strategy::{PileMove, optimal_move};
