use std::io::{self, BufRead, Write};

use battleship_hunt::{
    cli::{coord_to_string, parse_coord, render_board},
    init_logging, AttackResult, GameSession, Side, TurnReport,
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch two computer players fight it out.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed } => {
            let seed = resolve_seed(seed);
            let session = GameSession::versus_computer(seed).map_err(|e| anyhow::anyhow!(e))?;
            play(session)
        }
        Commands::Auto { seed } => {
            let seed = resolve_seed(seed);
            let mut session =
                GameSession::computer_vs_computer(seed).map_err(|e| anyhow::anyhow!(e))?;
            while !session.is_over() {
                let report = session.play_auto_turn()?;
                println!("{}", describe(&report));
            }
            if let Some(winner) = session.winner() {
                println!("{:?} player wins after {} turns", winner, session.turns_played());
            }
            Ok(())
        }
    }
}

fn resolve_seed(seed: Option<u64>) -> u64 {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            s
        }
        None => rand::random(),
    }
}

fn play(mut session: GameSession) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !session.is_over() {
        if session.current_turn() == Side::Second {
            let report = session.play_auto_turn()?;
            println!("{}", describe(&report));
            continue;
        }

        println!("\nEnemy waters:");
        print!("{}", render_board(session.player(Side::Second).board(), false));
        println!("\nYour fleet:");
        print!("{}", render_board(session.player(Side::First).board(), true));
        print!("Target (e.g. A5, or 'quit'): ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        if line.trim().eq_ignore_ascii_case("quit") {
            println!("Goodbye.");
            return Ok(());
        }
        let coord = match parse_coord(&line) {
            Ok(coord) => coord,
            Err(msg) => {
                println!("{}", msg);
                continue;
            }
        };
        let report = session.play_turn(coord)?;
        if report.attack.result == AttackResult::Rejected {
            println!("{} was already attacked, pick another cell.", coord_to_string(coord));
            continue;
        }
        println!("{}", describe(&report));
    }

    match session.winner() {
        Some(Side::First) => println!("\nYou sank the enemy fleet. You win!"),
        _ => println!("\nYour fleet is lost. The computer wins."),
    }
    Ok(())
}

fn describe(report: &TurnReport) -> String {
    let who = match report.attacker {
        Side::First => "Player 1",
        Side::Second => "Player 2",
    };
    let what = match report.attack.result {
        AttackResult::Hit => "hit",
        AttackResult::Sunk => "hit and sunk a ship",
        AttackResult::Miss => "missed",
        AttackResult::Rejected => "was rejected",
    };
    format!("{} fires at {}: {}", who, coord_to_string(report.attack.coordinate), what)
}
