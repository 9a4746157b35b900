//! Game state container for the Planet Wars client.
//!
//! Parses each turn's snapshot into planets and merged fleets, answers an
//! AI's queries, aggregates its orders and commits them in the wire
//! protocol. Also hosts the turn loop and a seeded map generator.

pub mod driver;
pub mod game_state;
mod parse;
pub mod procgen;

pub use driver::{run_turns, DriverConfig, DriverError, Idle, Strategy};
pub use game_state::GameState;
pub use planetwars_core as core;
