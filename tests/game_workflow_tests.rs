use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

use supercon::{
    get_player_hand, legal_moves_by_identity, Card, Game, TurnState, DECK_SIZE, DEFAULT_HAND_SIZE,
    DEFAULT_PLAYER_COUNT,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn cards(identities: &[&str]) -> Vec<Card> {
    identities
        .iter()
        .map(|s| Card::from_identity(s).unwrap())
        .collect()
}

fn cards_in_zones(game: &Game) -> usize {
    game.draw_pile_len()
        + game.table_pile().len()
        + game
            .players()
            .iter()
            .map(|player| player.hand.len())
            .sum::<usize>()
}

#[test]
fn test_full_match_runs_to_a_win() {
    init_tracing();

    // Single-suit hands so every move is legal and the drive is deterministic
    let mut game = Game::with_zones(
        vec![],
        cards(&["T_sp"]),
        vec![
            cards(&["T_1", "T_2", "T_3"]),
            cards(&["T_4", "T_5", "T_cr", "T_su"]),
        ],
    );

    let mut plays = Vec::new();
    for _ in 0..16 {
        if game.turn_state() == TurnState::GameOver {
            break;
        }
        let seat = game.current_player_index();
        let hand = get_player_hand(game.players(), seat + 1).unwrap();
        let mask = game.current_legal_moves();
        let choice = mask.iter().position(|legal| *legal).unwrap();
        let identity = hand[choice].to_string();

        game.play(seat, &identity).unwrap();
        assert_eq!(game.turn_state(), TurnState::TurnAdvancePending);
        game.advance_turn().unwrap();
        plays.push(identity);
    }

    assert_eq!(game.turn_state(), TurnState::GameOver);
    assert_eq!(game.winner(), Some(1));
    assert_eq!(plays, vec!["T_1", "T_4", "T_2", "T_5", "T_3"]);
    assert!(get_player_hand(game.players(), 1).unwrap().is_empty());

    // Every play landed on the table in order, nothing left the game
    assert_eq!(
        game.table_pile(),
        cards(&["T_sp", "T_1", "T_4", "T_2", "T_5", "T_3"])
    );
    assert_eq!(cards_in_zones(&game), 8);
}

#[test]
fn test_seeded_deal_produces_a_playable_game() {
    init_tracing();

    let mut game = Game::new();
    game.init_and_shuffle(&mut ChaCha8Rng::seed_from_u64(2024))
        .unwrap();
    game.deal(DEFAULT_PLAYER_COUNT, DEFAULT_HAND_SIZE, true)
        .unwrap();

    assert_eq!(cards_in_zones(&game), DECK_SIZE);
    assert!(game.current_top().unwrap().is_normal());
    for player in game.players() {
        assert_eq!(player.hand.len(), DEFAULT_HAND_SIZE);
    }

    // Drive the match on first-legal-card picks until it ends or stalls
    let mut steps = 0;
    while game.turn_state() != TurnState::GameOver && steps < 64 {
        let seat = game.current_player_index();
        assert!(seat < DEFAULT_PLAYER_COUNT);

        let hand = get_player_hand(game.players(), seat + 1).unwrap();
        let mask = game.current_legal_moves();
        assert_eq!(mask.len(), hand.len());

        let Some(choice) = mask.iter().position(|legal| *legal) else {
            break;
        };
        game.play(seat, &hand[choice].to_string()).unwrap();
        game.advance_turn().unwrap();

        assert_eq!(cards_in_zones(&game), DECK_SIZE);
        steps += 1;
    }

    // Either somebody went out or the seat to act has no legal card
    if game.turn_state() == TurnState::GameOver {
        let winner = game.winner().unwrap();
        assert!(get_player_hand(game.players(), winner).unwrap().is_empty());
    } else {
        assert!(game.current_legal_moves().iter().all(|legal| !legal));
    }
}

#[test]
fn test_unseeded_table_accepts_any_first_card() {
    init_tracing();

    let mut game = Game::new();
    game.init_and_shuffle(&mut ChaCha8Rng::seed_from_u64(3))
        .unwrap();
    game.deal(2, 3, false).unwrap();

    assert!(game.current_top().is_none());
    let mask = game.current_legal_moves();
    assert_eq!(mask.len(), 3);
    assert!(mask.iter().all(|legal| *legal));

    let first = get_player_hand(game.players(), 1).unwrap()[0];
    game.play(0, &first.to_string()).unwrap();
    assert_eq!(game.current_top(), Some(first));

    game.advance_turn().unwrap();
    assert_eq!(game.current_player_index(), 1);
}

#[test]
fn test_failed_operations_leave_the_game_untouched() {
    init_tracing();

    let mut game = Game::with_zones(
        vec![],
        cards(&["T_4"]),
        vec![cards(&["C_3"]), cards(&["T_1"])],
    );
    let before = game.clone();

    assert!(game.play(1, "T_1").is_err()); // out of turn
    assert!(game.play(0, "bogus").is_err()); // unparseable identity
    assert!(game.play(0, "T_1").is_err()); // not in this hand
    assert!(game.play(0, "C_3").is_err()); // incompatible with T_4
    assert!(game.advance_turn().is_err()); // no move pending

    assert_eq!(game, before);
}

#[test]
fn test_identity_masks_agree_with_engine_masks() {
    init_tracing();

    let mut game = Game::new();
    game.init_and_shuffle(&mut ChaCha8Rng::seed_from_u64(12))
        .unwrap();
    game.deal(DEFAULT_PLAYER_COUNT, DEFAULT_HAND_SIZE, true)
        .unwrap();

    let top = game.current_top().unwrap().to_string();
    let hand: Vec<String> = get_player_hand(game.players(), 1)
        .unwrap()
        .iter()
        .map(|card| card.to_string())
        .collect();

    assert_eq!(
        legal_moves_by_identity(&top, &hand),
        game.current_legal_moves()
    );
}

#[test]
fn test_reset_starts_a_fresh_match() {
    init_tracing();

    let mut game = Game::new();
    game.init_and_shuffle(&mut ChaCha8Rng::seed_from_u64(7))
        .unwrap();
    game.deal(DEFAULT_PLAYER_COUNT, DEFAULT_HAND_SIZE, true)
        .unwrap();

    game.reset();
    assert_eq!(cards_in_zones(&game), 0);

    // A fresh initialization and a different table shape both work
    game.init_and_shuffle(&mut ChaCha8Rng::seed_from_u64(8))
        .unwrap();
    game.deal(2, 5, false).unwrap();
    assert_eq!(game.players().len(), 2);
    assert_eq!(cards_in_zones(&game), DECK_SIZE);
    assert!(game.current_top().is_none());
}
