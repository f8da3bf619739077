//! Turn and round flow: banking, busting, extra lives, round-win bonus.

use flip_engine::cards::{Card, Deck, Modifier};
use flip_engine::core::{PlayerId, PlayerMap};
use flip_engine::game::{GameBuilder, PlayerState, RoundWin};
use flip_engine::strategy::{BankAt, Decision};
use flip_engine::training::TrajectoryRecorder;

fn n(value: u8) -> Card {
    Card::Number(value)
}

/// Deck whose first draw is `draws[0]`.
fn deck_drawing(draws: &[Card]) -> Deck {
    Deck::stacked(draws.iter().rev().copied())
}

fn seat(id: u8) -> PlayerId {
    PlayerId::new(id)
}

#[test]
fn test_extra_life_forgives_duplicate() {
    let mut game = GameBuilder::new()
        .player_count(1)
        .deck(deck_drawing(&[Modifier::ExtraLife.into(), n(4), n(4)]))
        .build()
        .unwrap();

    game.turn(seat(0)).unwrap();
    game.turn(seat(0)).unwrap();
    let outcome = game.turn(seat(0)).unwrap();

    assert!(outcome.active);
    assert_eq!(outcome.round_score, 4);
    assert_eq!(outcome.reward, 0);

    let hand = game.player(seat(0)).hand();
    assert!(!hand.has_extra_life());
    assert_eq!(hand.cards().as_slice(), &[n(4)]);
}

#[test]
fn test_duplicate_without_life_busts() {
    let (recorder, log) = TrajectoryRecorder::new(flip_engine::strategy::AlwaysDraw);
    let mut game = GameBuilder::new()
        .player_count(1)
        .strategy(0, recorder)
        .deck(deck_drawing(&[n(3), n(3)]))
        .build()
        .unwrap();

    game.turn(seat(0)).unwrap();
    let outcome = game.turn(seat(0)).unwrap();

    assert!(!outcome.active);
    assert_eq!(outcome.round_score, 0);
    assert_eq!(outcome.reward, -5);
    assert_eq!(game.player(seat(0)).state(), PlayerState::Busted);
    assert!(game.player(seat(0)).hand().is_empty());

    let log = log.lock().unwrap();
    assert_eq!(log.len(), 2);
    assert_eq!(log.total_reward(), -5);
    assert_eq!(log.transitions[1].prior.round_score(), 3);
    assert_eq!(log.transitions[1].next.round_score(), 0);
}

#[test]
fn test_bank_reports_unchanged_observation() {
    let (recorder, log) = TrajectoryRecorder::new(BankAt::new(0));
    let mut game = GameBuilder::new()
        .player_count(1)
        .strategy(0, recorder)
        .build()
        .unwrap();

    game.turn(seat(0)).unwrap();

    let log = log.lock().unwrap();
    assert_eq!(log.len(), 1);
    let transition = &log.transitions[0];
    assert_eq!(transition.decision, Decision::Bank);
    assert_eq!(transition.reward, 0);
    assert_eq!(transition.prior, transition.next);
}

#[test]
fn test_round_everyone_locks_in() {
    let mut game = GameBuilder::new()
        .player_count(4)
        .strategy(0, BankAt::new(12))
        .strategy(1, BankAt::new(0))
        .strategy(2, BankAt::new(8))
        .strategy(3, BankAt::new(20))
        .deck(deck_drawing(&[n(12), n(8), n(12), n(8)]))
        .build()
        .unwrap();

    let summary = game.play_round().unwrap();

    assert_eq!(summary.round, 1);
    assert_eq!(summary.turns, 8);
    assert_eq!(summary.winner, None);
    assert_eq!(summary.max_round_score, 20);
    assert!(summary.end_states.values().all(|s| *s == PlayerState::Locked));

    let expected = PlayerMap::new(4, |p| [12, 0, 8, 20][p.index()]);
    assert_eq!(summary.game_scores, expected);
    assert_eq!(game.scores(), expected);

    for player in game.players() {
        assert_eq!(player.round_score(), 0);
        assert!(player.hand().is_empty());
        assert!(player.is_active());
    }
    assert_eq!(game.max_game_score(), 20);
    assert!(game.deck().is_empty());
}

#[test]
fn test_seven_numbers_win_the_round() {
    let mut draws = Vec::new();
    for (mine, theirs) in (0..6).zip(7..13) {
        draws.push(n(mine));
        draws.push(n(theirs));
    }
    draws.push(n(6));
    draws.push(n(1));
    draws.push(n(1));

    let mut game = GameBuilder::new()
        .player_count(2)
        .deck(deck_drawing(&draws))
        .build()
        .unwrap();

    let summary = game.play_round().unwrap();

    assert_eq!(summary.turns, 13);
    assert_eq!(
        summary.winner,
        Some(RoundWin {
            player: seat(0),
            award: (0..=6).sum::<i64>() + 15,
        })
    );
    assert_eq!(summary.end_states[seat(0)], PlayerState::Locked);
    assert_eq!(summary.end_states[seat(1)], PlayerState::Active);
    assert_eq!(game.player(seat(0)).game_score(), 36);
    assert_eq!(game.player(seat(1)).game_score(), 0);

    // The round stopped at once; the trailing cards are still in the deck.
    assert_eq!(game.deck().len(), 2);
    assert!(game.players().iter().all(|p| p.is_active() && p.hand().is_empty()));
}

#[test]
fn test_round_reset_after_bust() {
    let mut game = GameBuilder::new()
        .player_count(2)
        .strategy(1, BankAt::new(5))
        .deck(deck_drawing(&[n(2), n(9), n(2)]))
        .build()
        .unwrap();

    let summary = game.play_round().unwrap();

    assert_eq!(summary.end_states[seat(0)], PlayerState::Busted);
    assert_eq!(summary.end_states[seat(1)], PlayerState::Locked);
    assert_eq!(game.scores()[seat(1)], 9);
    assert_eq!(game.rounds_played(), 1);
}
