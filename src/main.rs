//! Command-line driver.
//!
//! Plays one seeded game and prints the standings. The turn-by-turn trace
//! goes through the logger; set `RUST_LOG=debug` to include observations.

use clap::{Parser, ValueEnum};
use flip_engine::core::{FreezePolicy, GameConfig, GameRng, ReshufflePolicy};
use flip_engine::game::{Game, GameBuilder};
use flip_engine::strategy::{BankAt, RandomStrategy};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FreezeArg {
    Bank,
    Discard,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ReshuffleArg {
    Game,
    Round,
}

#[derive(Debug, Parser)]
#[command(name = "flip", about = "Simulate a push-your-luck card game")]
struct Args {
    /// Number of players.
    #[arg(short, long, default_value_t = 4)]
    players: usize,

    /// Shuffle seed.
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Score that ends the game.
    #[arg(short, long, default_value_t = 200)]
    target: i64,

    /// Ignore the target score and play until the deck runs out.
    #[arg(long)]
    no_target: bool,

    /// Maximum rounds before the game is called.
    #[arg(long, default_value_t = 1000)]
    max_rounds: u32,

    /// What a freeze does to the frozen player's round score.
    #[arg(long, value_enum, default_value_t = FreezeArg::Bank)]
    freeze: FreezeArg,

    /// Deck lifetime.
    #[arg(long, value_enum, default_value_t = ReshuffleArg::Game)]
    reshuffle: ReshuffleArg,

    /// Every seat banks once its round score reaches this value.
    #[arg(long, conflicts_with = "random")]
    bank_at: Option<i64>,

    /// Every seat draws with this probability.
    #[arg(long)]
    random: Option<f64>,
}

fn build(args: &Args) -> flip_engine::Result<Game> {
    let config = GameConfig::default()
        .with_player_count(args.players)
        .with_seed(args.seed)
        .with_target_score(if args.no_target { None } else { Some(args.target) })
        .with_max_rounds(args.max_rounds)
        .with_freeze_policy(match args.freeze {
            FreezeArg::Bank => FreezePolicy::Bank,
            FreezeArg::Discard => FreezePolicy::Discard,
        })
        .with_reshuffle(match args.reshuffle {
            ReshuffleArg::Game => ReshufflePolicy::PerGame,
            ReshuffleArg::Round => ReshufflePolicy::PerRound,
        });

    let mut builder = GameBuilder::new().config(config);
    let mut strategy_rng = GameRng::new(args.seed).fork();
    for seat in 0..args.players {
        if let Some(threshold) = args.bank_at {
            builder = builder.strategy(seat, BankAt::new(threshold));
        } else if let Some(probability) = args.random {
            builder = builder.strategy(seat, RandomStrategy::new(probability, strategy_rng.fork()));
        }
    }
    builder.build()
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut game = match build(&args) {
        Ok(game) => game,
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(2);
        }
    };

    match game.play_game() {
        Ok(summary) => {
            println!("game over after {} rounds ({:?})", summary.rounds, summary.end);
            println!("result: {:?}", summary.result);
        }
        Err(err) => {
            println!("game stopped after {} rounds: {}", game.rounds_played(), err);
        }
    }
    for (player, score) in game.standings() {
        println!("{:<12}{:>6}", game.player(player).name(), score);
    }
}
