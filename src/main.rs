use std::path::PathBuf;

use guess_number::{
    init_logging, ui, CliPlayer, GameSession, InputError, RoundConfig, SessionEnd, SessionError,
    StatsStore, DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_NUMBER, DEFAULT_MIN_NUMBER, DEFAULT_STATS_FILE,
    INTERRUPTED_EXIT_CODE,
};

use clap::{Args, Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Guess the secret number, with statistics kept between sessions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    play: PlayArgs,
}

#[derive(Args, Clone, Debug)]
struct PlayArgs {
    /// Smallest number the secret can be.
    #[arg(long, default_value_t = DEFAULT_MIN_NUMBER, allow_negative_numbers = true)]
    min: i64,
    /// Largest number the secret can be.
    #[arg(long, default_value_t = DEFAULT_MAX_NUMBER, allow_negative_numbers = true)]
    max: i64,
    /// Guesses allowed per round.
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    attempts: u32,
    #[arg(long, default_value = DEFAULT_STATS_FILE)]
    stats_file: PathBuf,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play rounds until you decline to continue (default).
    Play(PlayArgs),
    /// Print the stored statistics and exit.
    Stats {
        #[arg(long, default_value = DEFAULT_STATS_FILE)]
        stats_file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Stats { stats_file }) => {
            let store = StatsStore::new(stats_file);
            ui::print_stats(&store.load());
            Ok(())
        }
        Some(Commands::Play(args)) => play(args),
        None => play(cli.play),
    }
}

fn play(args: PlayArgs) -> anyhow::Result<()> {
    let config = RoundConfig::new(args.min, args.max, args.attempts)?;

    ctrlc::set_handler(|| {
        ui::print_interrupted("Ctrl+C");
        std::process::exit(INTERRUPTED_EXIT_CODE);
    })?;

    let rng = if let Some(s) = args.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let store = StatsStore::new(args.stats_file);
    let mut session = GameSession::new(config, store, Box::new(CliPlayer::new()), rng);

    match session.run() {
        Ok(SessionEnd::Declined) | Ok(SessionEnd::Aborted) => Ok(()),
        Err(e) => {
            match &e {
                SessionError::Input(InputError::Closed) => ui::print_interrupted("Ctrl+D"),
                SessionError::Input(InputError::Io(_)) => {
                    eprintln!("\nAn unexpected error occurred: {}\nPlease restart the program.", e);
                }
                SessionError::Save(_) => {
                    eprintln!("Statistics on disk were left at their last saved state. Goodbye!");
                }
            }
            std::process::exit(e.exit_code());
        }
    }
}
