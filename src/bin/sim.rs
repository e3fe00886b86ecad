//! Bot-vs-bot duel: two independent engines, one per board, driven by a
//! plain synchronous turn loop. Prints a JSON result line.

use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use salvo::{init_logging, Fleet, Outcome, TargetEngine, Tuning};
use serde_json::json;

#[derive(Parser)]
#[command(name = "sim", about = "Run a seeded bot-vs-bot Battleship duel")]
struct Args {
    /// Fleet placement seed for player 1.
    seed1: u64,
    /// Fleet placement seed for player 2.
    seed2: u64,
    /// Abort after this many turns per side.
    #[arg(long, default_value_t = 200)]
    max_turns: usize,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let mut rng1 = SmallRng::seed_from_u64(args.seed1);
    let mut rng2 = SmallRng::seed_from_u64(args.seed2);

    let mut fleet1 = Fleet::new();
    let mut fleet2 = Fleet::new();
    fleet1.place_all_random(&mut rng1)?;
    fleet2.place_all_random(&mut rng2)?;

    // engine 1 attacks fleet 2 and vice versa; the engines share nothing
    let mut engine1 = TargetEngine::new(Tuning::DEFAULT);
    let mut engine2 = TargetEngine::new(Tuning::DEFAULT);

    let mut winner = None;
    for _ in 0..args.max_turns {
        let shot = engine1.next_shot()?;
        let outcome = fleet2.resolve_shot(shot)?;
        engine1.report_outcome(shot, outcome)?;
        log_shot("player1", shot, outcome);
        if fleet2.all_sunk() {
            winner = Some("player1");
            break;
        }

        let shot = engine2.next_shot()?;
        let outcome = fleet1.resolve_shot(shot)?;
        engine2.report_outcome(shot, outcome)?;
        log_shot("player2", shot, outcome);
        if fleet1.all_sunk() {
            winner = Some("player2");
            break;
        }
    }

    let result = json!({
        "player1": {"shots": engine1.shots_fired(), "destroyed_enemy": engine1.is_fleet_destroyed()},
        "player2": {"shots": engine2.shots_fired(), "destroyed_enemy": engine2.is_fleet_destroyed()},
        "winner": winner,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

fn log_shot(who: &str, shot: salvo::Coord, outcome: Outcome) {
    log::info!("{} fires at {}: {:?}", who, shot, outcome);
}
