//! arena - terminal front-end for the arena autobattler

mod app;
mod input;
mod record;
mod render;
mod simulation;

use anyhow::{Context, Result};
use app::{Game, GameOptions};
use arena_core::{Catalog, ClassName, GameConstants};
use clap::{Args, Parser, Subcommand, ValueEnum};
use input::Prompter;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use simulation::RunSimulation;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "arena", version, about = "Fight five monsters in a row to become champion")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play interactively (default)
    Play(PlayArgs),
    /// Auto-play many runs and report statistics
    Simulate(SimulateArgs),
}

#[derive(Args, Default)]
struct ConfigArgs {
    /// Run constants TOML file
    #[arg(long)]
    constants: Option<PathBuf>,
    /// Directory holding weapons.toml and monsters.toml
    #[arg(long)]
    catalog: Option<PathBuf>,
}

impl ConfigArgs {
    fn load(&self) -> Result<(Catalog, GameConstants)> {
        let catalog = match &self.catalog {
            Some(dir) => Catalog::load(dir)
                .with_context(|| format!("loading catalog from {}", dir.display()))?,
            None => Catalog::default_catalog(),
        };
        let constants = match &self.constants {
            Some(path) => GameConstants::load(path)
                .with_context(|| format!("loading constants from {}", path.display()))?,
            None => GameConstants::default(),
        };
        Ok((catalog, constants))
    }
}

#[derive(Args)]
struct PlayArgs {
    /// Seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,
    /// Where the best-run record is kept
    #[arg(long, default_value = "game_stats.json")]
    stats_file: PathBuf,
    /// Skip the pauses between combat lines
    #[arg(long)]
    fast: bool,
    #[arg(long)]
    skip_tutorial: bool,
    #[command(flatten)]
    config: ConfigArgs,
}

impl Default for PlayArgs {
    fn default() -> Self {
        PlayArgs {
            seed: None,
            stats_file: PathBuf::from("game_stats.json"),
            fast: false,
            skip_tutorial: false,
            config: ConfigArgs::default(),
        }
    }
}

#[derive(Args)]
struct SimulateArgs {
    #[arg(long, default_value_t = 1000)]
    runs: u32,
    #[arg(long)]
    seed: Option<u64>,
    /// Class for every run; random per run when omitted
    #[arg(long, value_enum)]
    class: Option<ClassArg>,
    #[command(flatten)]
    config: ConfigArgs,
}

#[derive(Clone, Copy, ValueEnum)]
enum ClassArg {
    Rogue,
    Warrior,
    Barbarian,
}

impl From<ClassArg> for ClassName {
    fn from(arg: ClassArg) -> Self {
        match arg {
            ClassArg::Rogue => ClassName::Rogue,
            ClassArg::Warrior => ClassName::Warrior,
            ClassArg::Barbarian => ClassName::Barbarian,
        }
    }
}

fn main() -> Result<()> {
    setup_logging();

    let cli = Cli::parse();
    match cli.command.unwrap_or_else(|| Command::Play(PlayArgs::default())) {
        Command::Play(args) => play(args),
        Command::Simulate(args) => simulate(args),
    }
}

/// Log to stderr, filtered by RUST_LOG (warnings only by default)
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}

fn rng_from(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

fn play(args: PlayArgs) -> Result<()> {
    let (catalog, constants) = args.config.load()?;
    let stdin = io::stdin();
    let prompter = Prompter::new(stdin.lock(), io::stdout());

    let mut game = Game::new(
        prompter,
        rng_from(args.seed),
        catalog,
        constants,
        args.stats_file,
        GameOptions {
            fast: args.fast,
            skip_tutorial: args.skip_tutorial,
        },
    );
    game.run()
}

fn simulate(args: SimulateArgs) -> Result<()> {
    let (catalog, constants) = args.config.load()?;
    let mut rng = rng_from(args.seed);

    let result = RunSimulation::run(
        args.runs,
        args.class.map(ClassName::from),
        &catalog,
        &constants,
        &mut rng,
    )?;
    for line in result.report() {
        println!("{}", line);
    }
    Ok(())
}
