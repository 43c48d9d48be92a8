pub const PILE_COUNT: usize = 3;
pub const STARTING_PILES: [u32; PILE_COUNT] = [1, 2, 3];

/// Nim position: the number of tokens left in each pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    piles: [u32; PILE_COUNT],
}

impl Board {
    /// Creates the starting position `[1, 2, 3]`.
    pub fn new() -> Self {
        Self::from_piles(STARTING_PILES)
    }

    pub fn from_piles(piles: [u32; PILE_COUNT]) -> Self {
        Self { piles }
    }

    pub fn piles(&self) -> [u32; PILE_COUNT] {
        self.piles
    }

    pub fn pile(&self, index: usize) -> Option<u32> {
        self.piles.get(index).copied()
    }

    /// XOR of all pile sizes. Zero means the side to move is lost
    /// against perfect play.
    pub fn nim_sum(&self) -> u32 {
        self.piles.iter().fold(0, |acc, &pile| acc ^ pile)
    }

    pub fn is_terminal(&self) -> bool {
        self.piles.iter().all(|&pile| pile == 0)
    }

    pub fn token_count(&self) -> u32 {
        self.piles.iter().sum()
    }

    /// Removes `count` tokens from `pile`.
    /// Returns `false` and leaves the board untouched when the move is illegal.
    pub fn remove(&mut self, pile: usize, count: u32) -> bool {
        match self.piles.get_mut(pile) {
            Some(size) if count > 0 && count <= *size => {
                *size -= count;
                true
            }
            _ => false,
        }
    }

    pub fn to_vec(&self) -> Vec<u32> {
        self.piles.to_vec()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
