//! Dirt Bike Jump native entry point
//!
//! The game proper runs in the browser (`trunk serve` / the page host). The
//! native binary plays headless runs with the autopilot at 60 Hz and logs
//! the result, which is handy for checking tuning changes.

#[cfg(not(target_arch = "wasm32"))]
use clap::Parser;

/// Headless autopilot runs for balance checks
#[cfg(not(target_arch = "wasm32"))]
#[derive(Parser, Debug)]
#[command(name = "dirt-bike-jump", version, about)]
struct Args {
    /// Spawner seed
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Number of consecutive runs (the session restarts between them)
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    runs: u64,

    /// Play in insane mode
    #[arg(short, long)]
    insane: bool,

    /// Tuning overrides as a JSON file
    #[arg(short, long)]
    tuning: Option<std::path::PathBuf>,
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use dirt_bike_jump::Tuning;
    use dirt_bike_jump::consts::FRAME_MS;
    use dirt_bike_jump::sim::{GameSession, TickInput, rating_for, tick};

    env_logger::init();
    let args = Args::parse();

    let tuning = match &args.tuning {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(json) => Tuning::from_json_or_default(&json),
            Err(e) => {
                log::warn!("Could not read {}: {} - using stock tuning", path.display(), e);
                Tuning::default()
            }
        },
        None => Tuning::default(),
    };

    // Ten simulated minutes per run at most
    let max_ticks = (10.0 * 60_000.0 / FRAME_MS) as u64;

    log::info!(
        "Dirt Bike Jump (native) - seed {}, {} run(s), insane: {}",
        args.seed,
        args.runs,
        args.insane
    );

    let input = TickInput {
        autopilot: true,
        ..Default::default()
    };
    let mut session = GameSession::with_tuning(tuning, args.seed);
    session.set_insane_mode(args.insane);

    let mut best = 0;
    for run in 1..=args.runs {
        if run > 1 {
            session.restart();
        }

        let mut timestamp = 0.0;
        while !session.is_over && session.time_ticks < max_ticks {
            timestamp += FRAME_MS;
            tick(&mut session, &input, timestamp);
            session.drain_events();
        }

        let outcome = if session.is_over { "crashed" } else { "timed out" };
        println!(
            "run {}: score {} after {} ticks ({}, top speed {}) - {}",
            run,
            session.score,
            session.time_ticks,
            outcome,
            session.speed_readout(),
            rating_for(session.score)
        );
        best = best.max(session.score);
    }

    println!("best score: {}", best);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start, this is just to satisfy the compiler
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let args = Args::try_parse_from(["dirt-bike-jump"]).unwrap();
        assert_eq!(args.seed, 42);
        assert_eq!(args.runs, 1);
        assert!(!args.insane);
        assert!(args.tuning.is_none());
    }

    #[test]
    fn test_cli_flags() {
        let args = Args::try_parse_from(["dirt-bike-jump", "--runs", "3", "-s", "7", "--insane"]).unwrap();
        assert_eq!(args.seed, 7);
        assert_eq!(args.runs, 3);
        assert!(args.insane);
    }

    #[test]
    fn test_cli_rejects_junk() {
        assert!(Args::try_parse_from(["dirt-bike-jump", "banana"]).is_err());
        assert!(Args::try_parse_from(["dirt-bike-jump", "--runs", "0"]).is_err());
        assert!(Args::try_parse_from(["dirt-bike-jump", "--seed", "-4"]).is_err());
    }
}
