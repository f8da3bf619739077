//! Round and game coordination.
//!
//! `Game` owns the deck and every player. Turns are strictly sequential: a
//! turn, including any Freeze or Draw3 it sets off, completes before the
//! next seat acts. Draw3 is the one place a turn runs further turns for a
//! different player, by recursing into the same turn logic.

use serde::{Deserialize, Serialize};

use super::player::{Effect, Player, PlayerState, Receipt};
use crate::cards::{Card, Deck};
use crate::core::{
    FlipError, GameConfig, GameRng, PlayerId, PlayerMap, ReshufflePolicy, Result,
};
use crate::strategy::{Decision, Strategy};

/// Forced turns dealt by a Draw3.
pub const DRAW3_TURNS: usize = 3;

/// Result of a single turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub player: PlayerId,
    /// `None` if the player was not active and nothing happened.
    pub decision: Option<Decision>,
    pub forced: bool,
    pub card: Option<Card>,
    pub effect: Option<EffectOutcome>,
    pub reward: i64,
    pub active: bool,
    pub round_score: i64,
    pub game_score: i64,
}

/// A resolved Freeze or Draw3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectOutcome {
    pub effect: Effect,
    pub source: PlayerId,
    pub target: PlayerId,
    /// Forced turns the target actually took (always 0 for Freeze).
    pub forced_turns: usize,
}

/// A round-win bonus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundWin {
    pub player: PlayerId,
    pub award: i64,
}

/// Summary of one round, captured before the end-of-round reset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// Round number (1-based).
    pub round: u32,
    /// Top-level turns taken.
    pub turns: usize,
    /// Turns forced by Draw3, including nested ones.
    pub forced_turns: usize,
    /// Highest round score seen during the round.
    pub max_round_score: i64,
    pub winner: Option<RoundWin>,
    pub end_states: PlayerMap<PlayerState>,
    pub game_scores: PlayerMap<i64>,
}

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Tie on the top score.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
        }
    }
}

/// Why `play_game` stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEnd {
    TargetReached,
    RoundLimit,
}

/// Summary of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub rounds: u32,
    pub end: GameEnd,
    pub result: GameResult,
    pub scores: PlayerMap<i64>,
}

/// The coordinator: one deck, an ordered table of players.
pub struct Game {
    config: GameConfig,
    rng: GameRng,
    deck: Deck,
    players: Vec<Player>,
    max_game_score: i64,
    rounds_played: u32,
    round_forced_turns: usize,
}

impl Game {
    /// Create a game with default strategies, shuffling a fresh deck.
    pub fn new(config: GameConfig) -> Result<Self> {
        GameBuilder::new().config(config).build()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Highest game score seen so far.
    pub fn max_game_score(&self) -> i64 {
        self.max_game_score
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Current game scores by seat.
    pub fn scores(&self) -> PlayerMap<i64> {
        PlayerMap::new(self.players.len(), |id| self.players[id.index()].game_score())
    }

    /// Seats ordered by game score, highest first; ties keep seat order.
    pub fn standings(&self) -> Vec<(PlayerId, i64)> {
        let mut standings: Vec<_> = self
            .players
            .iter()
            .map(|p| (p.id(), p.game_score()))
            .collect();
        standings.sort_by(|a, b| b.1.cmp(&a.1));
        standings
    }

    /// Take one turn for `player`, asking its strategy whether to draw.
    pub fn turn(&mut self, player: PlayerId) -> Result<TurnOutcome> {
        self.play_turn(player, false)
    }

    /// Target for Freeze or Draw3 played by `caller`.
    ///
    /// The other active player with the highest game plus round score; the
    /// first in seat order wins ties. Falls back to `caller` when nobody
    /// else is active.
    pub fn select_target(&self, caller: PlayerId) -> PlayerId {
        let mut best: Option<(PlayerId, i64)> = None;
        for player in &self.players {
            if player.id() == caller || !player.is_active() {
                continue;
            }
            let score = player.table_score();
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((player.id(), score));
            }
        }
        best.map_or(caller, |(id, _)| id)
    }

    /// Freeze the target chosen for `caller`.
    pub fn resolve_freeze(&mut self, caller: PlayerId) -> EffectOutcome {
        let target = self.select_target(caller);
        let policy = self.config.freeze_policy;
        let banked = self.players[target.index()].freeze(policy);
        log::info!(
            "[{}] froze {} ({} points banked)",
            self.players[caller.index()].name(),
            self.players[target.index()].name(),
            banked
        );
        self.max_game_score = self.max_game_score.max(self.players[target.index()].game_score());
        EffectOutcome {
            effect: Effect::Freeze,
            source: caller,
            target,
            forced_turns: 0,
        }
    }

    /// Force the target chosen for `caller` to draw up to three times.
    ///
    /// Stops as soon as the target is out of the round.
    pub fn resolve_draw3(&mut self, caller: PlayerId) -> Result<EffectOutcome> {
        let target = self.select_target(caller);
        log::info!(
            "[{}] plays draw 3 on {}",
            self.players[caller.index()].name(),
            self.players[target.index()].name()
        );

        let mut forced_turns = 0;
        while forced_turns < DRAW3_TURNS && self.players[target.index()].is_active() {
            self.play_turn(target, true)?;
            forced_turns += 1;
            self.round_forced_turns += 1;
        }

        Ok(EffectOutcome {
            effect: Effect::Draw3,
            source: caller,
            target,
            forced_turns,
        })
    }

    /// Play turns in seat order until every player is out of the round or
    /// someone collects enough distinct numbers, then reset all players.
    pub fn play_round(&mut self) -> Result<RoundSummary> {
        if self.config.reshuffle == ReshufflePolicy::PerRound && self.rounds_played > 0 {
            self.deck.shuffle(&mut self.rng);
        }
        let round = self.rounds_played + 1;
        log::info!("round {} begins ({} cards left)", round, self.deck.len());

        self.round_forced_turns = 0;
        let mut turns = 0;
        let mut max_round_score = 0;
        let mut winner = None;

        'round: while self.players.iter().any(Player::is_active) {
            for seat in 0..self.players.len() {
                if !self.players[seat].is_active() {
                    continue;
                }
                let id = self.players[seat].id();
                self.turn(id)?;
                turns += 1;

                max_round_score = self
                    .players
                    .iter()
                    .map(Player::round_score)
                    .fold(max_round_score, i64::max);

                if let Some(champion) = self.round_winner(id) {
                    let bonus = self.config.round_win_bonus;
                    let award = self.players[champion.index()].award_round_win(bonus);
                    log::info!(
                        "[{}] collected {} numbers and wins the round for {} points",
                        self.players[champion.index()].name(),
                        self.config.round_win_threshold,
                        award
                    );
                    self.track_max_score();
                    winner = Some(RoundWin {
                        player: champion,
                        award,
                    });
                    break 'round;
                }
            }
        }

        let summary = RoundSummary {
            round,
            turns,
            forced_turns: self.round_forced_turns,
            max_round_score,
            winner,
            end_states: PlayerMap::new(self.players.len(), |id| self.players[id.index()].state()),
            game_scores: self.scores(),
        };

        for player in &mut self.players {
            player.reset_for_round();
        }
        self.rounds_played = round;

        log::info!(
            "round {} over: scores {:?}",
            round,
            summary.game_scores.values().collect::<Vec<_>>()
        );
        Ok(summary)
    }

    /// Play rounds until a player reaches the target score or the round cap
    /// is hit.
    ///
    /// With no target score the game runs until the deck is exhausted,
    /// which surfaces as `FlipError::DeckExhausted`.
    pub fn play_game(&mut self) -> Result<GameSummary> {
        let end = loop {
            if self.rounds_played >= self.config.max_rounds {
                break GameEnd::RoundLimit;
            }
            self.play_round()?;
            if let Some(target) = self.config.target_score {
                if self.max_game_score >= target {
                    break GameEnd::TargetReached;
                }
            }
        };

        let result = self.result();
        log::info!("game over after {} rounds ({:?}): {:?}", self.rounds_played, end, result);
        Ok(GameSummary {
            rounds: self.rounds_played,
            end,
            result,
            scores: self.scores(),
        })
    }

    /// Current leaders.
    pub fn result(&self) -> GameResult {
        let top = self.players.iter().map(Player::game_score).max().unwrap_or(0);
        let leaders: Vec<PlayerId> = self
            .players
            .iter()
            .filter(|p| p.game_score() == top)
            .map(Player::id)
            .collect();
        match leaders.as_slice() {
            [single] => GameResult::Winner(*single),
            _ => GameResult::Winners(leaders),
        }
    }

    fn play_turn(&mut self, id: PlayerId, forced: bool) -> Result<TurnOutcome> {
        let seat = id.index();
        let max_score = self.max_game_score;

        if !self.players[seat].is_active() {
            return Ok(self.outcome(id, None, forced, None, None, 0));
        }

        let prior = self.players[seat].observe(max_score);
        let decision = {
            let player = &mut self.players[seat];
            log::info!("[{}] starting hand: {}", player.name(), player.hand());
            log::debug!("[{}] observation: {:?}", player.name(), prior.as_slice());
            let decision = if forced { Decision::Draw } else { player.decide(&prior) };
            log::info!(
                "[{}] action: {}{}",
                player.name(),
                decision,
                if forced { " (forced)" } else { "" }
            );
            decision
        };

        let mut card = None;
        let mut effect = None;
        let mut reward = 0;

        match decision {
            Decision::Bank => {
                let player = &mut self.players[seat];
                let banked = player.lock_in();
                log::info!("[{}] locked in for {} points", player.name(), banked);
                player.learn(&prior, decision, reward, &prior);
            }
            Decision::Draw => {
                let drawn = self.deck.draw()?;
                if let Card::Number(value) = drawn {
                    Card::number(value)?;
                }
                card = Some(drawn);
                log::info!("[{}] drew {}", self.players[seat].name(), drawn);

                let receipt = self.players[seat].receive(drawn);
                match receipt {
                    Receipt::Held => {}
                    Receipt::LifeUsed => {
                        log::info!("[{}] used extra life", self.players[seat].name());
                    }
                    Receipt::Busted => {
                        log::info!("[{}] busted", self.players[seat].name());
                        reward = self.config.bust_reward;
                    }
                    Receipt::Effect(Effect::Freeze) => effect = Some(self.resolve_freeze(id)),
                    Receipt::Effect(Effect::Draw3) => effect = Some(self.resolve_draw3(id)?),
                }

                let player = &mut self.players[seat];
                let next = player.observe(max_score);
                player.learn(&prior, decision, reward, &next);
            }
        }

        let player = &mut self.players[seat];
        player.end_turn();
        if player.is_active() {
            log::info!("[{}] new hand: {}", player.name(), player.hand());
            log::info!("[{}] new score: {}", player.name(), player.round_score());
        }
        self.track_max_score();

        Ok(self.outcome(id, Some(decision), forced, card, effect, reward))
    }

    fn outcome(
        &self,
        id: PlayerId,
        decision: Option<Decision>,
        forced: bool,
        card: Option<Card>,
        effect: Option<EffectOutcome>,
        reward: i64,
    ) -> TurnOutcome {
        let player = &self.players[id.index()];
        TurnOutcome {
            player: id,
            decision,
            forced,
            card,
            effect,
            reward,
            active: player.is_active(),
            round_score: player.round_score(),
            game_score: player.game_score(),
        }
    }

    /// Active player at or above the distinct-number threshold, checking
    /// the acting player first.
    fn round_winner(&self, acting: PlayerId) -> Option<PlayerId> {
        let threshold = self.config.round_win_threshold;
        let qualifies = |p: &Player| p.is_active() && p.hand().number_count() >= threshold;

        if qualifies(&self.players[acting.index()]) {
            return Some(acting);
        }
        self.players.iter().find(|p| qualifies(*p)).map(Player::id)
    }

    fn track_max_score(&mut self) {
        self.max_game_score = self
            .players
            .iter()
            .map(Player::game_score)
            .fold(self.max_game_score, i64::max);
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("config", &self.config)
            .field("cards_left", &self.deck.len())
            .field("players", &self.players)
            .field("max_game_score", &self.max_game_score)
            .field("rounds_played", &self.rounds_played)
            .finish()
    }
}

/// Builder for creating a `Game`.
pub struct GameBuilder {
    config: GameConfig,
    strategies: Vec<(usize, Box<dyn Strategy>)>,
    names: Vec<(usize, String)>,
    deck: Option<Deck>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            strategies: Vec::new(),
            names: Vec::new(),
            deck: None,
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.config.player_count = count;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn target_score(mut self, target: Option<i64>) -> Self {
        self.config.target_score = target;
        self
    }

    /// Strategy for one seat. Seats without one use `AlwaysDraw`.
    pub fn strategy(mut self, seat: usize, strategy: impl Strategy + 'static) -> Self {
        self.strategies.push((seat, Box::new(strategy)));
        self
    }

    /// Display name for one seat.
    pub fn name(mut self, seat: usize, name: impl Into<String>) -> Self {
        self.names.push((seat, name.into()));
        self
    }

    /// Use a prepared deck instead of shuffling a fresh one.
    pub fn deck(mut self, deck: Deck) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Build the game.
    pub fn build(self) -> Result<Game> {
        self.config.validate()?;
        let player_count = self.config.player_count;

        let out_of_range = self
            .strategies
            .iter()
            .map(|(seat, _)| *seat)
            .chain(self.names.iter().map(|(seat, _)| *seat))
            .find(|seat| *seat >= player_count);
        if let Some(seat) = out_of_range {
            return Err(FlipError::InvalidConfig(format!(
                "seat {} does not exist in a {}-player game",
                seat, player_count
            )));
        }

        let mut players: Vec<Player> = PlayerId::all(player_count).map(Player::new).collect();
        for (seat, strategy) in self.strategies {
            players[seat] = Player::with_strategy(PlayerId::new(seat as u8), strategy);
        }
        for (seat, name) in self.names {
            players[seat].set_name(name);
        }

        let mut rng = GameRng::new(self.config.seed);
        let deck = match self.deck {
            Some(deck) => deck,
            None => Deck::shuffled(&mut rng),
        };

        Ok(Game {
            config: self.config,
            rng,
            deck,
            players,
            max_game_score: 0,
            rounds_played: 0,
            round_forced_turns: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Modifier, STANDARD_DECK_SIZE};
    use crate::strategy::BankAt;

    fn n(value: u8) -> Card {
        Card::Number(value)
    }

    /// Deck whose first draw is `draws[0]`.
    fn deck_drawing(draws: &[Card]) -> Deck {
        Deck::stacked(draws.iter().rev().copied())
    }

    #[test]
    fn test_game_creation() {
        let game = Game::new(GameConfig::default()).unwrap();
        assert_eq!(game.players().len(), 4);
        assert_eq!(game.deck().len(), STANDARD_DECK_SIZE);
        assert!(game.players().iter().all(Player::is_active));
        assert_eq!(game.player(PlayerId::new(3)).name(), "Player 3");
    }

    #[test]
    fn test_builder_rejects_unknown_seat() {
        let result = GameBuilder::new().player_count(2).strategy(5, BankAt::new(1)).build();
        assert!(matches!(result, Err(FlipError::InvalidConfig(_))));
    }

    #[test]
    fn test_select_target_highest_other() {
        let mut game = GameBuilder::new()
            .player_count(4)
            .deck(deck_drawing(&[n(10), n(12), n(8), n(1)]))
            .build()
            .unwrap();
        for seat in 0..4 {
            game.turn(PlayerId::new(seat)).unwrap();
        }
        // Seat 0 has 10, seats 1-3 have 12, 8, 1.
        assert_eq!(game.select_target(PlayerId::new(1)), PlayerId::new(0));
        assert_eq!(game.select_target(PlayerId::new(0)), PlayerId::new(1));
    }

    #[test]
    fn test_select_target_tie_prefers_seat_order() {
        let game = GameBuilder::new().player_count(4).build().unwrap();
        assert_eq!(game.select_target(PlayerId::new(0)), PlayerId::new(1));
        assert_eq!(game.select_target(PlayerId::new(1)), PlayerId::new(0));
    }

    #[test]
    fn test_select_target_falls_back_to_caller() {
        let mut game = GameBuilder::new()
            .player_count(2)
            .strategy(1, BankAt::new(0))
            .build()
            .unwrap();
        game.turn(PlayerId::new(1)).unwrap();
        assert_eq!(game.player(PlayerId::new(1)).state(), PlayerState::Locked);
        assert_eq!(game.select_target(PlayerId::new(0)), PlayerId::new(0));
    }

    #[test]
    fn test_inactive_turn_is_noop() {
        let mut game = GameBuilder::new()
            .player_count(1)
            .strategy(0, BankAt::new(0))
            .build()
            .unwrap();
        game.turn(PlayerId::new(0)).unwrap();
        let outcome = game.turn(PlayerId::new(0)).unwrap();
        assert_eq!(outcome.decision, None);
        assert_eq!(game.deck().len(), STANDARD_DECK_SIZE);
    }

    #[test]
    fn test_bank_turn() {
        let mut game = GameBuilder::new()
            .player_count(1)
            .strategy(0, BankAt::new(5))
            .deck(deck_drawing(&[n(6)]))
            .build()
            .unwrap();
        let first = game.turn(PlayerId::new(0)).unwrap();
        assert_eq!(first.card, Some(n(6)));
        assert!(first.active);
        assert_eq!(first.round_score, 6);

        let second = game.turn(PlayerId::new(0)).unwrap();
        assert_eq!(second.decision, Some(Decision::Bank));
        assert!(!second.active);
        assert_eq!(second.round_score, 0);
        assert_eq!(second.game_score, 6);
        assert!(game.player(PlayerId::new(0)).hand().is_empty());
    }

    #[test]
    fn test_out_of_range_number_is_invalid_card() {
        let mut game = GameBuilder::new()
            .player_count(1)
            .deck(deck_drawing(&[n(13)]))
            .build()
            .unwrap();

        let result = game.turn(PlayerId::new(0));
        assert_eq!(result, Err(FlipError::InvalidCardValue("13".to_string())));

        let player = game.player(PlayerId::new(0));
        assert!(player.is_active());
        assert!(player.hand().is_empty());
        assert_eq!(player.round_score(), 0);
    }

    #[test]
    fn test_freeze_self_when_alone() {
        let mut game = GameBuilder::new()
            .player_count(1)
            .deck(deck_drawing(&[n(9), Modifier::Freeze.into()]))
            .build()
            .unwrap();
        game.turn(PlayerId::new(0)).unwrap();
        let outcome = game.turn(PlayerId::new(0)).unwrap();

        let effect = outcome.effect.unwrap();
        assert_eq!(effect.target, PlayerId::new(0));
        assert!(!outcome.active);
        // Default policy banks the frozen round score.
        assert_eq!(outcome.game_score, 9);
        assert!(game.player(PlayerId::new(0)).hand().is_empty());
    }

    #[test]
    fn test_result_tie() {
        let game = GameBuilder::new().player_count(3).build().unwrap();
        assert_eq!(
            game.result(),
            GameResult::Winners(vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)])
        );
    }

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::new(1));
        assert!(!result.is_winner(PlayerId::new(0)));
        assert!(result.is_winner(PlayerId::new(1)));

        let tie = GameResult::Winners(vec![PlayerId::new(0), PlayerId::new(2)]);
        assert!(tie.is_winner(PlayerId::new(2)));
        assert!(!tie.is_winner(PlayerId::new(1)));
    }
}
