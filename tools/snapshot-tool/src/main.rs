//! snapshot-tool: inspect, replay and generate Planet Wars snapshots.
//!
//! Usage:
//!   snapshot-tool inspect turn_017.txt --json
//!   snapshot-tool replay game_0042.log
//!   snapshot-tool generate --seed 7 --pairs 11 --output map7.txt
//!
//! Diagnostics go to stderr (`RUST_LOG` controls the level); stdout only
//! carries snapshot or order text.

use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use planetwars_core::constants::{ENEMY, ME, NEUTRAL};
use planetwars_state::procgen::{generate_snapshot, GeneratorConfig};
use planetwars_state::{run_turns, DriverConfig, GameState, Idle};

#[derive(Parser)]
#[command(name = "snapshot-tool", version, about = "Planet Wars snapshot utilities")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a single snapshot and print its state.
    Inspect {
        /// Snapshot file.
        path: PathBuf,
        /// Print JSON instead of snapshot text.
        #[arg(long)]
        json: bool,
    },
    /// Feed a recorded multi-turn stream through the turn loop.
    Replay {
        /// Recorded server output, snapshots separated by `go` lines.
        path: PathBuf,
        /// Stop after this many turns.
        #[arg(long)]
        max_turns: Option<u32>,
        /// Fail on the first unparseable snapshot.
        #[arg(long)]
        strict: bool,
    },
    /// Generate a symmetric map.
    Generate {
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Mirrored planet pairs, home planets included.
        #[arg(long, default_value_t = 10)]
        pairs: usize,
        /// Output file (default: stdout).
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    match Cli::parse().command {
        Command::Inspect { path, json } => cmd_inspect(path, json),
        Command::Replay {
            path,
            max_turns,
            strict,
        } => cmd_replay(path, max_turns, strict),
        Command::Generate {
            seed,
            pairs,
            output,
        } => cmd_generate(seed, pairs, output),
    }
}

fn cmd_inspect(path: PathBuf, json: bool) -> Result<()> {
    let text =
        fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    let state = GameState::from_snapshot(&text)
        .with_context(|| format!("parsing {}", path.display()))?;

    info!(
        planets = state.num_planets(),
        fleets = state.num_fleets(),
        merge_conflicts = state.fleet_merge_conflicts(),
        "snapshot loaded"
    );
    for (label, player) in [("me", ME), ("enemy", ENEMY)] {
        info!(
            player = label,
            alive = state.is_alive(player),
            planets = state.planets_owned_by(player).count(),
            fleets = state.fleets_owned_by(player).count(),
            ships = state.total_ships(player),
            production = state.production(player),
            "player summary"
        );
    }
    info!(planets = state.planets_owned_by(NEUTRAL).count(), "neutral");

    let mut stdout = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, &state.snapshot())?;
        writeln!(stdout)?;
    } else {
        write!(stdout, "{state}")?;
    }
    Ok(())
}

fn cmd_replay(path: PathBuf, max_turns: Option<u32>, strict: bool) -> Result<()> {
    let file = File::open(&path).with_context(|| format!("opening {}", path.display()))?;
    let config = DriverConfig {
        max_turns,
        strict,
        ..Default::default()
    };

    let turns = run_turns(BufReader::new(file), io::stdout().lock(), &mut Idle, &config)
        .with_context(|| format!("replaying {}", path.display()))?;
    info!(turns, "replay complete");
    Ok(())
}

fn cmd_generate(seed: u64, pairs: usize, output: Option<PathBuf>) -> Result<()> {
    let config = GeneratorConfig {
        seed,
        pairs,
        ..Default::default()
    };
    let text = generate_snapshot(&config);

    match output {
        Some(path) => {
            fs::write(&path, &text).with_context(|| format!("writing {}", path.display()))?;
            info!(seed, planets = 1 + 2 * pairs, path = %path.display(), "map written");
        }
        None => io::stdout().lock().write_all(text.as_bytes())?,
    }
    Ok(())
}
