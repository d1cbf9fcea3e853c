//! Engine self-play demo.
//!
//! Both sides are played by the search at `depth` plies. Each turn also
//! prints a hint from a seeded random advisor. Log output goes to stderr,
//! filtered by the `CHESS_AI_LOG` environment variable (default `warn`).

use std::process::ExitCode;

use chess_ai::board::{SearchConfig, DEFAULT_DEPTH};
use chess_ai::{Game, MoveAdvisor, RandomAdvisor};
use clap::Parser;
use log::error;

const LOG_ENV: &str = "CHESS_AI_LOG";

#[derive(Parser, Debug)]
#[command(name = "chess_ai")]
#[command(about = "Play the engine against itself", long_about = None)]
struct Args {
    /// Search depth in plies
    #[arg(default_value_t = DEFAULT_DEPTH)]
    depth: u32,

    /// Stop after this many plies if the game is still going
    #[arg(default_value_t = 60)]
    max_plies: usize,

    /// Seed for the hint advisor
    #[arg(default_value_t = 0)]
    seed: u64,
}

fn logger_builder(env_var: &str) -> env_logger::Builder {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or(env_var, "warn"))
}

fn main() -> ExitCode {
    logger_builder(LOG_ENV).init();
    let args = Args::parse();

    let mut game = Game::new().with_config(SearchConfig::depth(args.depth));
    let advisor = RandomAdvisor::with_seed(args.seed);

    println!("{}\n", game.board());
    for _ in 0..args.max_plies {
        if game.status().is_over() {
            break;
        }
        let side = game.side_to_move();
        let hint = advisor.suggest_move(game.board(), side);
        let played = match game.engine_move() {
            Ok(played) => played,
            Err(err) => {
                error!("engine could not move: {err}");
                return ExitCode::FAILURE;
            }
        };
        println!(
            "{}. {} plays {} ({}) [hint: {}]",
            game.history().len(),
            played.side,
            played.mv,
            played.quality,
            hint.map_or_else(|| "none".to_string(), |mv| mv.to_string())
        );
        println!("{}\n", game.board());
    }

    println!("{}", game.fen());
    println!("{}", game.status());
    ExitCode::SUCCESS
}
