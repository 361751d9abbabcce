use battleship_hunt::{init_logging, Board, GameSession, HuntTargetAi};
use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

const MAX_GAMES: u64 = 100_000;

/// Batch simulation of the hunt and target opponent.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base RNG seed; game `i` uses `seed + i`.
    seed: u64,
    /// Number of fleets to sink.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..=MAX_GAMES))]
    games: u64,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let mut shots = Vec::new();
    for i in 0..args.games {
        let seed = args.seed.wrapping_add(i);
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        board
            .place_fleet_randomly(&mut rng)
            .map_err(|e| anyhow::anyhow!(e))?;
        let mut ai = HuntTargetAi::from_seed(seed);
        shots.push(ai.sink_fleet(&mut board));
    }

    let mut duel = GameSession::computer_vs_computer(args.seed).map_err(|e| anyhow::anyhow!(e))?;
    while !duel.is_over() {
        duel.play_auto_turn()?;
    }

    let total: usize = shots.iter().sum();
    let result = json!({
        "seed": args.seed,
        "games": args.games,
        "shots": shots,
        "min": shots.iter().min(),
        "max": shots.iter().max(),
        "mean": total as f64 / args.games as f64,
        "duel": {
            "winner": duel.winner(),
            "turns": duel.turns_played(),
        },
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
