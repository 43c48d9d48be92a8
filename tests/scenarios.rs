use std::time::Duration;

use nim::{
    Controller, ControllerConfig, NimGame, Phase, RejectReason, SelectOutcome, Side, TokenRef,
};
use web_time::Instant;

#[test]
fn human_move_and_balancing_reply() {
    let mut game = NimGame::new();

    game.select_token(2, 0);
    game.select_token(2, 1);
    let report = game.commit_move().unwrap();
    assert_eq!(report.board.piles(), [1, 2, 1]);
    assert_eq!(game.phase(), Phase::AutomatedTurn);
    assert_eq!(game.board().nim_sum(), 2);

    game.play_automated_turn().unwrap();

    assert_eq!(game.board().piles(), [1, 0, 1]);
    assert_eq!(game.phase(), Phase::HumanTurn);
}

#[test]
fn cross_pile_selection_keeps_first_pile() {
    let mut game = NimGame::new();

    game.select_token(0, 0);
    let outcome = game.select_token(1, 0);

    assert_eq!(outcome, SelectOutcome::Rejected(RejectReason::CrossPile));
    assert_eq!(game.selection().tokens(), &[TokenRef::new(0, 0)]);
}

#[test]
fn full_game_through_controller() {
    let config = ControllerConfig {
        reply_delay_ms: 500,
        ..ControllerConfig::default()
    };
    let mut controller = Controller::new(config);
    let mut now = Instant::now();

    while controller.game().winner().is_none() {
        let piles = controller.game().board().piles();
        let pile = piles.iter().rposition(|&p| p > 0).unwrap();
        let (x, y) = controller.config().layout.token_center(pile, 0, piles[pile]);
        assert!(controller.click(x, y));
        assert!(controller.confirm(now));

        if controller.game().winner().is_some() {
            break;
        }
        assert!(!controller.tick(now + Duration::from_millis(499)));
        now += Duration::from_millis(500);
        assert!(controller.tick(now));
    }

    // The starting position is lost for whoever moves first.
    assert_eq!(controller.game().winner(), Some(Side::Automated));
    let view = controller.view();
    assert!(view.tokens.is_empty());
    assert!(!view.confirm_enabled);
    assert_eq!(view.message.as_deref(), Some("Computer Wins!"));

    assert!(controller.key_down("r"));
    let view = controller.view();
    assert_eq!(view.state.piles, vec![1, 2, 3]);
    assert_eq!(view.state.phase, Phase::HumanTurn);
    assert_eq!(view.message, None);
}

#[test]
fn reply_scheduled_before_restart_never_lands() {
    let mut controller = Controller::default();
    let now = Instant::now();
    controller.select(2, 0);
    controller.confirm(now);

    controller.restart();
    controller.select(1, 0);

    assert!(!controller.tick(now + Duration::from_secs(10)));
    assert_eq!(controller.game().board().piles(), [1, 2, 3]);
    assert_eq!(controller.game().selection().tokens(), &[TokenRef::new(1, 0)]);
}
