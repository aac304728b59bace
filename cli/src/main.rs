mod board_codec;
mod commands;
mod config;

use clap::{Parser, Subcommand};
use tictactoe_common::games::SessionRng;
use tictactoe_common::{log, logger};

use commands::{play_once, self_play};
use config::get_config_manager;

#[derive(Parser)]
#[command(name = "tictactoe_cli", about = "Play 3x3 tic-tac-toe against a minimax engine")]
struct Args {
    /// YAML config file; defaults are used when it does not exist
    #[arg(long)]
    config: Option<String>,

    /// Seed for the opening rules, overriding the config file
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play one move on a board and print the result as YAML
    Play {
        /// Nine digits in row-major order: 0 free, 1 X, 2 O
        #[arg(long)]
        board: String,

        /// Cell (0-8) for the side to move; the engine chooses when omitted
        #[arg(long)]
        square: Option<usize>,
    },
    /// Let the engine play both sides until the game ends
    Selfplay {
        #[arg(long)]
        games: Option<u32>,

        /// Starting board; empty when omitted
        #[arg(long)]
        board: Option<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = get_config_manager(args.config.as_deref()).get_config()?;

    let prefix = if args.use_log_prefix || config.use_log_prefix {
        Some("Cli".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let mut rng = match args.seed.or(config.seed) {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Using seed {}", rng.seed());

    match args.command {
        Command::Play { board, square } => {
            let response = play_once(&board, square, rng)?;
            print!("{}", serde_yaml_ng::to_string(&response)?);
        }
        Command::Selfplay { games, board } => {
            let games = games.unwrap_or(config.selfplay_games);
            let tally = self_play(board.as_deref(), games, &mut rng, |rendered| {
                println!("{}\n", rendered);
            })?;
            println!(
                "X wins: {}, O wins: {}, ties: {}",
                tally.x_wins, tally.o_wins, tally.ties
            );
        }
    }

    Ok(())
}
