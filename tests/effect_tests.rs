//! Freeze and Draw3 resolution against a stacked deck.

use flip_engine::cards::{Card, Deck, Modifier};
use flip_engine::core::{FreezePolicy, GameConfig, PlayerId};
use flip_engine::game::{Effect, Game, GameBuilder, PlayerState, RoundWin};
use flip_engine::strategy::{BankAt, Decision};
use flip_engine::training::TrajectoryRecorder;

fn n(value: u8) -> Card {
    Card::Number(value)
}

fn m(modifier: Modifier) -> Card {
    Card::Modifier(modifier)
}

/// Deck whose first draw is `draws[0]`.
fn deck_drawing(draws: &[Card]) -> Deck {
    Deck::stacked(draws.iter().rev().copied())
}

fn seat(id: u8) -> PlayerId {
    PlayerId::new(id)
}

fn game_with(players: usize, draws: &[Card]) -> Game {
    GameBuilder::new()
        .player_count(players)
        .deck(deck_drawing(draws))
        .build()
        .unwrap()
}

#[test]
fn test_draw3_stops_when_target_busts() {
    let mut game = game_with(2, &[n(5), m(Modifier::Draw3), n(3), n(5), n(9)]);

    game.turn(seat(0)).unwrap();
    let outcome = game.turn(seat(1)).unwrap();

    let effect = outcome.effect.unwrap();
    assert_eq!(effect.effect, Effect::Draw3);
    assert_eq!(effect.target, seat(0));
    assert_eq!(effect.forced_turns, 2);

    let target = game.player(seat(0));
    assert_eq!(target.state(), PlayerState::Busted);
    assert_eq!(target.round_score(), 0);
    assert!(target.hand().is_empty());

    // The third forced draw never happened.
    assert_eq!(game.deck().len(), 1);
    assert!(outcome.active);
    assert_eq!(outcome.round_score, 0);
}

#[test]
fn test_draw3_runs_three_turns() {
    let mut game = game_with(2, &[n(5), m(Modifier::Draw3), n(1), n(2), n(3)]);

    game.turn(seat(0)).unwrap();
    let outcome = game.turn(seat(1)).unwrap();

    assert_eq!(outcome.effect.unwrap().forced_turns, 3);
    let target = game.player(seat(0));
    assert!(target.is_active());
    assert_eq!(target.round_score(), 11);
    assert_eq!(target.hand().number_count(), 4);
    assert!(game.player(seat(1)).hand().is_empty());
}

#[test]
fn test_forced_turns_skip_the_decision_hook() {
    let (recorder, log) = TrajectoryRecorder::new(BankAt::new(0));
    let mut game = GameBuilder::new()
        .player_count(2)
        .strategy(0, recorder)
        .deck(deck_drawing(&[m(Modifier::Draw3), n(1), n(2), n(3)]))
        .build()
        .unwrap();

    game.turn(seat(1)).unwrap();

    // Seat 0 would bank immediately on its own turn, but forced turns always draw.
    let log = log.lock().unwrap();
    assert_eq!(log.len(), 3);
    assert_eq!(log.count(Decision::Draw), 3);
    assert_eq!(game.player(seat(0)).round_score(), 6);
}

#[test]
fn test_freeze_targets_highest_table_score() {
    let mut game = game_with(
        4,
        &[n(10), n(12), n(12), n(8), n(8), m(Modifier::Plus10), m(Modifier::Freeze)],
    );

    game.turn(seat(0)).unwrap(); // 10
    game.turn(seat(1)).unwrap(); // 12
    game.turn(seat(2)).unwrap(); // 12
    game.turn(seat(1)).unwrap(); // 20
    game.turn(seat(2)).unwrap(); // 20
    game.turn(seat(1)).unwrap(); // 30

    let scores: Vec<_> = (0..3).map(|i| game.player(seat(i)).table_score()).collect();
    assert_eq!(scores, vec![10, 30, 20]);

    let outcome = game.turn(seat(3)).unwrap();
    assert_eq!(outcome.effect.unwrap().target, seat(1));
    assert_eq!(game.player(seat(1)).state(), PlayerState::Frozen);
    assert_eq!(game.player(seat(1)).game_score(), 30);
    assert!(outcome.active);
}

#[test]
fn test_freeze_discard_policy_keeps_round_score_until_reset() {
    let config = GameConfig::default()
        .with_player_count(2)
        .with_freeze_policy(FreezePolicy::Discard);
    let mut game = GameBuilder::new()
        .config(config)
        .deck(deck_drawing(&[n(10), m(Modifier::Freeze)]))
        .build()
        .unwrap();

    game.turn(seat(0)).unwrap();
    game.turn(seat(1)).unwrap();

    let frozen = game.player(seat(0));
    assert_eq!(frozen.state(), PlayerState::Frozen);
    assert_eq!(frozen.game_score(), 0);
    assert_eq!(frozen.round_score(), 10);
}

#[test]
fn test_freeze_on_all_tie_picks_first_seat() {
    let mut game = game_with(3, &[m(Modifier::Freeze)]);

    let outcome = game.turn(seat(2)).unwrap();
    assert_eq!(outcome.effect.unwrap().target, seat(0));
    assert!(!game.player(seat(0)).is_active());
    assert!(game.player(seat(1)).is_active());
}

#[test]
fn test_nested_freeze_during_forced_turns() {
    let mut game = game_with(2, &[n(4), m(Modifier::Draw3), m(Modifier::Freeze), n(6), n(7)]);

    game.turn(seat(0)).unwrap();
    let outcome = game.turn(seat(1)).unwrap();

    // Seat 0's forced Freeze lands back on seat 1, the only other active player.
    assert!(!outcome.active);
    assert_eq!(game.player(seat(1)).state(), PlayerState::Frozen);

    let effect = outcome.effect.unwrap();
    assert_eq!(effect.target, seat(0));
    assert_eq!(effect.forced_turns, 3);
    assert_eq!(game.player(seat(0)).round_score(), 17);
    assert!(game.deck().is_empty());
}

#[test]
fn test_draw3_target_reaching_seven_numbers_wins_the_round() {
    let mut game = game_with(
        2,
        &[
            n(1),
            n(8),
            n(2),
            n(9),
            n(3),
            n(10),
            n(4),
            m(Modifier::Draw3),
            n(5),
            n(6),
            n(0),
            n(11),
            n(12),
        ],
    );

    let summary = game.play_round().unwrap();

    // Seat 1 drew the Draw3; seat 0 reached seven numbers on the forced draws.
    assert_eq!(summary.turns, 8);
    assert_eq!(summary.forced_turns, 3);
    assert_eq!(
        summary.winner,
        Some(RoundWin {
            player: seat(0),
            award: (0..=6).sum::<i64>() + 15,
        })
    );
    assert_eq!(summary.end_states[seat(0)], PlayerState::Locked);
    assert_eq!(summary.end_states[seat(1)], PlayerState::Active);
    assert_eq!(summary.game_scores[seat(0)], 36);
    assert_eq!(summary.game_scores[seat(1)], 0);

    // Seat 1 never took another turn.
    assert_eq!(game.deck().len(), 2);
}
