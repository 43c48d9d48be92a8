use crate::ai::{PileMove, optimal_move};
use crate::board::Board;
use crate::selection::{RejectReason, SelectOutcome, Selection, TokenRef};
use crate::types::{GameState, Phase, Side};

/// What a committed move did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub side: Side,
    pub mv: PileMove,
    pub board: Board,
    /// `true` when `side` just took the last token and won.
    pub terminal: bool,
}

/// Human-vs-computer Nim game.
///
/// Requests that do not fit the current phase are ignored rather than
/// reported as errors; callers see a `Rejected` outcome or `None`.
#[derive(Debug, Clone)]
pub struct NimGame {
    board: Board,
    selection: Selection,
    phase: Phase,
    generation: u64,
}

impl NimGame {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            selection: Selection::new(),
            phase: Phase::HumanTurn,
            generation: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Identifies the current game; changes on every reset so that work
    /// scheduled for an earlier game can be recognised as stale.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn select_token(&mut self, pile: usize, token: u32) -> SelectOutcome {
        if self.phase != Phase::HumanTurn {
            return SelectOutcome::Rejected(RejectReason::NotHumanTurn);
        }
        let Some(size) = self.board.pile(pile) else {
            return SelectOutcome::Rejected(RejectReason::PileOutOfRange);
        };
        if token >= size {
            return SelectOutcome::Rejected(RejectReason::TokenOutOfRange);
        }

        self.selection.toggle(TokenRef::new(pile, token))
    }

    /// Removes the selected tokens and hands the turn to the computer.
    /// Returns `None` when there is nothing to commit or it is not the
    /// human's turn.
    pub fn commit_move(&mut self) -> Option<MoveReport> {
        if self.phase != Phase::HumanTurn {
            return None;
        }
        let pile = self.selection.pile()?;
        let mv = PileMove {
            pile,
            count: self.selection.len() as u32,
        };

        let removed = self.board.remove(mv.pile, mv.count);
        // Selection only ever holds tokens that are on the board.
        debug_assert!(removed, "selection out of sync with board: {mv:?}");
        if !removed {
            return None;
        }
        self.selection.clear();

        Some(self.finish_move(Side::Human, mv))
    }

    /// The computer's reply for the current board, without applying it.
    pub fn compute_automated_move(&self) -> Option<PileMove> {
        optimal_move(&self.board)
    }

    /// Applies a computer move and hands the turn back to the human.
    /// Returns `None` outside the computer's turn or for an illegal move.
    pub fn apply_automated_move(&mut self, mv: PileMove) -> Option<MoveReport> {
        if self.phase != Phase::AutomatedTurn {
            return None;
        }
        let removed = self.board.remove(mv.pile, mv.count);
        debug_assert!(removed, "illegal automated move {mv:?} on {:?}", self.board);
        if !removed {
            return None;
        }

        Some(self.finish_move(Side::Automated, mv))
    }

    /// Computes the computer's reply and applies it in one step.
    pub fn play_automated_turn(&mut self) -> Option<MoveReport> {
        if self.phase != Phase::AutomatedTurn {
            return None;
        }
        let mv = self.compute_automated_move()?;
        self.apply_automated_move(mv)
    }

    /// Back to the starting board with the human to move.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.selection.clear();
        self.phase = Phase::HumanTurn;
        self.generation += 1;
    }

    /// Resets and lets the computer open the game.
    pub fn start_automated_first(&mut self) {
        self.reset();
        self.phase = Phase::AutomatedTurn;
    }

    pub fn is_terminal(&self) -> bool {
        self.board.is_terminal()
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            Phase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn to_game_state(&self) -> GameState {
        GameState {
            piles: self.board.to_vec(),
            selection: self.selection.tokens().to_vec(),
            phase: self.phase,
            current_turn: self.phase.to_move(),
            is_game_over: self.winner().is_some(),
            winner: self.winner(),
            nim_sum: self.board.nim_sum(),
            generation: self.generation,
        }
    }

    fn finish_move(&mut self, side: Side, mv: PileMove) -> MoveReport {
        let terminal = self.board.is_terminal();
        self.phase = if terminal {
            Phase::GameOver { winner: side }
        } else {
            match side.opponent() {
                Side::Human => Phase::HumanTurn,
                Side::Automated => Phase::AutomatedTurn,
            }
        };

        MoveReport {
            side,
            mv,
            board: self.board,
            terminal,
        }
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, phase: Phase) {
        self.board = board;
        self.phase = phase;
        self.selection.clear();
    }
}

impl Default for NimGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_correct() {
        let game = NimGame::new();
        let state = game.to_game_state();

        assert_eq!(state.piles, vec![1, 2, 3]);
        assert!(state.selection.is_empty());
        assert_eq!(state.phase, Phase::HumanTurn);
        assert_eq!(state.current_turn, Some(Side::Human));
        assert!(!state.is_game_over);
        assert_eq!(state.winner, None);
    }

    #[test]
    fn human_move_then_balancing_reply() {
        let mut game = NimGame::new();

        assert_eq!(game.select_token(2, 0), SelectOutcome::Selected);
        assert_eq!(game.select_token(2, 1), SelectOutcome::Selected);
        let report = game.commit_move().unwrap();

        assert_eq!(report.mv, PileMove { pile: 2, count: 2 });
        assert_eq!(report.board.piles(), [1, 2, 1]);
        assert!(!report.terminal);
        assert_eq!(game.phase(), Phase::AutomatedTurn);
        assert!(game.selection().is_empty());

        let reply = game.play_automated_turn().unwrap();

        assert_eq!(reply.mv, PileMove { pile: 1, count: 2 });
        assert_eq!(game.board().piles(), [1, 0, 1]);
        assert_eq!(game.phase(), Phase::HumanTurn);
    }

    #[test]
    fn taking_the_last_token_wins_for_human() {
        let mut game = NimGame::new();
        game.set_board_for_test(Board::from_piles([0, 0, 1]), Phase::HumanTurn);

        game.select_token(2, 0);
        let report = game.commit_move().unwrap();

        assert!(report.terminal);
        assert!(game.is_terminal());
        assert_eq!(game.phase(), Phase::GameOver { winner: Side::Human });
        assert_eq!(game.winner(), Some(Side::Human));
    }

    #[test]
    fn taking_the_last_token_wins_for_computer() {
        let mut game = NimGame::new();
        game.set_board_for_test(Board::from_piles([0, 4, 0]), Phase::AutomatedTurn);

        let report = game.play_automated_turn().unwrap();

        assert!(report.terminal);
        assert_eq!(game.winner(), Some(Side::Automated));
    }

    #[test]
    fn selection_rejects_out_of_range_and_cross_pile() {
        let mut game = NimGame::new();

        assert_eq!(
            game.select_token(3, 0),
            SelectOutcome::Rejected(RejectReason::PileOutOfRange)
        );
        assert_eq!(
            game.select_token(0, 1),
            SelectOutcome::Rejected(RejectReason::TokenOutOfRange)
        );
        assert_eq!(game.select_token(0, 0), SelectOutcome::Selected);
        assert_eq!(
            game.select_token(1, 0),
            SelectOutcome::Rejected(RejectReason::CrossPile)
        );
        assert_eq!(game.selection().tokens(), &[TokenRef::new(0, 0)]);
    }

    #[test]
    fn human_input_is_ignored_outside_human_turn() {
        let mut game = NimGame::new();
        game.select_token(0, 0);
        game.commit_move().unwrap();

        assert_eq!(
            game.select_token(1, 0),
            SelectOutcome::Rejected(RejectReason::NotHumanTurn)
        );
        assert_eq!(game.commit_move(), None);
    }

    #[test]
    fn empty_commit_is_a_no_op() {
        let mut game = NimGame::new();

        assert_eq!(game.commit_move(), None);
        assert_eq!(game.phase(), Phase::HumanTurn);
        assert_eq!(game.board().piles(), [1, 2, 3]);
    }

    #[test]
    fn automated_move_is_ignored_on_human_turn() {
        let mut game = NimGame::new();

        assert_eq!(game.play_automated_turn(), None);
        assert_eq!(
            game.apply_automated_move(PileMove { pile: 2, count: 1 }),
            None
        );
        assert_eq!(game.board().piles(), [1, 2, 3]);
    }

    #[test]
    fn game_over_accepts_nothing_but_reset() {
        let mut game = NimGame::new();
        game.set_board_for_test(Board::from_piles([0, 0, 1]), Phase::HumanTurn);
        game.select_token(2, 0);
        game.commit_move().unwrap();

        assert_eq!(
            game.select_token(0, 0),
            SelectOutcome::Rejected(RejectReason::NotHumanTurn)
        );
        assert_eq!(game.play_automated_turn(), None);

        game.reset();
        assert_eq!(game.phase(), Phase::HumanTurn);
        assert_eq!(game.board().piles(), [1, 2, 3]);
    }

    #[test]
    fn reset_clears_everything_and_bumps_generation() {
        let mut game = NimGame::new();
        game.select_token(1, 0);
        game.select_token(1, 1);
        game.commit_move().unwrap();
        let before = game.generation();

        game.reset();

        assert_eq!(game.board().piles(), [1, 2, 3]);
        assert!(game.selection().is_empty());
        assert_eq!(game.phase(), Phase::HumanTurn);
        assert_eq!(game.generation(), before + 1);
    }

    #[test]
    fn computer_can_open_the_game() {
        let mut game = NimGame::new();

        game.start_automated_first();

        assert_eq!(game.phase(), Phase::AutomatedTurn);
        assert_eq!(game.board().piles(), [1, 2, 3]);
        let reply = game.play_automated_turn().unwrap();
        assert_eq!(reply.mv, PileMove { pile: 0, count: 1 });
        assert_eq!(game.phase(), Phase::HumanTurn);
    }
}
