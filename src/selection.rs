use serde::Serialize;

/// A single token on the board: `token` is its position within `pile`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TokenRef {
    pub pile: usize,
    pub token: u32,
}

impl TokenRef {
    pub fn new(pile: usize, token: u32) -> Self {
        Self { pile, token }
    }
}

/// Why a selection request was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    NotHumanTurn,
    PileOutOfRange,
    TokenOutOfRange,
    CrossPile,
}

/// Result of a selection request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "reason")]
pub enum SelectOutcome {
    Selected,
    Deselected,
    Rejected(RejectReason),
}

impl SelectOutcome {
    pub fn changed(self) -> bool {
        !matches!(self, Self::Rejected(_))
    }
}

/// Tokens the human has marked for removal this turn.
///
/// Every entry shares one pile; insertion order is kept so the host can
/// highlight tokens in the order they were picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    tokens: Vec<TokenRef>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles `token`. Adding is refused when the selection already
    /// holds tokens from another pile.
    pub fn toggle(&mut self, token: TokenRef) -> SelectOutcome {
        if let Some(idx) = self.tokens.iter().position(|t| *t == token) {
            self.tokens.remove(idx);
            return SelectOutcome::Deselected;
        }

        match self.pile() {
            Some(pile) if pile != token.pile => SelectOutcome::Rejected(RejectReason::CrossPile),
            _ => {
                self.tokens.push(token);
                SelectOutcome::Selected
            }
        }
    }

    /// The pile shared by all entries, if any.
    pub fn pile(&self) -> Option<usize> {
        self.tokens.first().map(|t| t.pile)
    }

    pub fn contains(&self, token: TokenRef) -> bool {
        self.tokens.contains(&token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    pub fn tokens(&self) -> &[TokenRef] {
        &self.tokens
    }
}
