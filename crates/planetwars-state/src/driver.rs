//! Turn loop — reads snapshots, runs a strategy, commits orders.
//!
//! The game server writes one snapshot per turn terminated by a `go` line
//! and expects the client's orders terminated by `go` in return.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::{debug, info, warn};

use planetwars_core::constants::TURN_END;
use planetwars_core::error::ParseError;

use crate::game_state::GameState;

/// Decision logic plugged into the turn loop.
pub trait Strategy {
    /// Inspect the turn's state and issue orders on it.
    fn do_turn(&mut self, state: &mut GameState);
}

/// Strategy that never issues orders.
#[derive(Debug, Default, Clone, Copy)]
pub struct Idle;

impl Strategy for Idle {
    fn do_turn(&mut self, _state: &mut GameState) {}
}

impl<F: FnMut(&mut GameState)> Strategy for F {
    fn do_turn(&mut self, state: &mut GameState) {
        self(state)
    }
}

/// Configuration for the turn loop.
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Keep one container across turns so the distance cache survives while
    /// the planet layout is unchanged. Otherwise every turn starts fresh.
    pub reuse_distance_cache: bool,
    /// Stop after this many turns.
    pub max_turns: Option<u32>,
    /// Fail on an unparseable snapshot instead of answering it with `go`.
    pub strict: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            reuse_distance_cache: true,
            max_turns: None,
            strict: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Play turns until the input ends or `max_turns` is reached.
///
/// Unless `config.strict` is set, a snapshot that fails to parse is
/// answered with a bare `go` so the server still sees the turn end.
/// Returns the number of turns answered.
pub fn run_turns<R, W, S>(
    input: R,
    mut output: W,
    strategy: &mut S,
    config: &DriverConfig,
) -> Result<u32, DriverError>
where
    R: BufRead,
    W: Write,
    S: Strategy + ?Sized,
{
    let mut state = GameState::new();
    let mut buffer = String::new();
    let mut turns = 0u32;

    for line in input.lines() {
        let line = line?;
        if line.trim() != TURN_END {
            buffer.push_str(&line);
            buffer.push('\n');
            continue;
        }

        turns += 1;
        match play_turn(&mut state, &buffer, strategy, config) {
            Ok(()) => state.finish_turn(&mut output)?,
            Err(e) if config.strict => return Err(e.into()),
            Err(e) => {
                warn!(turn = turns, error = %e, "dropping unparseable snapshot");
                state = GameState::new();
                writeln!(output, "{TURN_END}")?;
                output.flush()?;
            }
        }
        buffer.clear();

        if config.max_turns.is_some_and(|max| turns >= max) {
            break;
        }
    }

    if !buffer.trim().is_empty() {
        debug!(bytes = buffer.len(), "input ended mid-snapshot");
    }
    info!(turns, "turn loop finished");
    Ok(turns)
}

/// Load one snapshot and let the strategy act on it.
pub fn play_turn<S: Strategy + ?Sized>(
    state: &mut GameState,
    snapshot: &str,
    strategy: &mut S,
    config: &DriverConfig,
) -> Result<(), ParseError> {
    if config.reuse_distance_cache {
        state.load_turn(snapshot)?;
    } else {
        *state = GameState::from_snapshot(snapshot)?;
    }
    strategy.do_turn(state);
    Ok(())
}
