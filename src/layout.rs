use serde::Deserialize;

use crate::board::Board;
use crate::selection::TokenRef;

/// Canvas geometry. Defaults match the 400x300 reference canvas.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub width: f64,
    pub height: f64,
    pub token_radius: f64,
    pub row_spacing: f64,
    pub token_spacing: f64,
    pub top_offset: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 300.0,
            token_radius: 10.0,
            row_spacing: 50.0,
            token_spacing: 30.0,
            top_offset: 50.0,
        }
    }
}

/// Centre of a token on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenPosition {
    pub token: TokenRef,
    pub x: f64,
    pub y: f64,
}

impl LayoutConfig {
    /// Rows are centred horizontally, so a token's position depends on
    /// how many tokens its pile currently holds.
    pub fn token_center(&self, pile: usize, token: u32, count: u32) -> (f64, f64) {
        let x = self.width / 2.0 - f64::from(count) * self.token_spacing / 2.0
            + f64::from(token) * self.token_spacing;
        let y = self.top_offset + pile as f64 * self.row_spacing;
        (x, y)
    }

    pub fn tokens(&self, board: &Board) -> Vec<TokenPosition> {
        board
            .piles()
            .iter()
            .enumerate()
            .flat_map(|(pile, &count)| {
                (0..count).map(move |token| {
                    let (x, y) = self.token_center(pile, token, count);
                    TokenPosition {
                        token: TokenRef::new(pile, token),
                        x,
                        y,
                    }
                })
            })
            .collect()
    }

    /// The token nearest to `(x, y)` within the token radius.
    pub fn pick_token(&self, board: &Board, x: f64, y: f64) -> Option<TokenRef> {
        self.tokens(board)
            .into_iter()
            .map(|pos| (pos.token, (pos.x - x).hypot(pos.y - y)))
            .filter(|&(_, dist)| dist <= self.token_radius)
            .min_by(|(_, left), (_, right)| left.total_cmp(right))
            .map(|(token, _)| token)
    }
}
