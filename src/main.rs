//! Assembly: Endgame - CLI
//!
//! Hangman-style word game with a TUI, a line-based mode, and a simulator.

use anyhow::Result;
use assembly_endgame::{
    commands::{describe, run_simple, run_simulation},
    config::GameConfig,
    interactive::{App, run_tui},
    logging::{self, choose_sink},
    output::{print_languages, print_simulation_result},
    registry::Registry,
    strategy::StrategyType,
};
use clap::{Parser, Subcommand};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "assembly-endgame",
    about = "Guess the language before the programming world is left with only Assembly",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to config.toml (default: next to the executable, then CWD)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Seed the word picker for reproducible games
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file (the TUI logs nowhere otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode (no TUI)
    Simple,

    /// List the languages in elimination order
    Languages,

    /// Play many games automatically and report statistics
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        games: usize,

        /// Strategy: frequency (default) or random
        #[arg(long, default_value = "frequency")]
        strategy: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let tui = matches!(command, Commands::Play);
    logging::init(choose_sink(cli.log_file.as_deref(), tui))?;

    let config = GameConfig::load(cli.config.as_deref())?;
    let seed = cli.seed.or(config.seed);
    debug!("config: {config:?}, seed: {seed:?}");

    let registry = Registry::builtin();

    match command {
        Commands::Play => {
            let app = App::new(registry, config, make_rng(seed));
            run_tui(app)
        }
        Commands::Simple => {
            let mut rng = make_rng(seed);
            run_simple(&registry, config.display.keyboard, &mut rng)
        }
        Commands::Languages => {
            print_languages(&describe(&registry));
            Ok(())
        }
        Commands::Simulate { games, strategy } => {
            let strategy = StrategyType::from_name(&strategy);
            println!(
                "Simulating {games} games with the {} strategy...",
                strategy.name()
            );
            let result = run_simulation(
                &registry,
                strategy,
                games,
                seed.unwrap_or_else(rand::random),
                true,
            );
            print_simulation_result(&result);
            Ok(())
        }
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64)
}
