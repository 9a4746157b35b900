//! Core types and definitions for the Planet Wars game-state client.
//!
//! This crate defines the vocabulary shared by the state container and
//! tools: planets, fleets, orders, the distance cache, player constants,
//! and parse errors. It performs no I/O.

pub mod constants;
pub mod distance;
pub mod entities;
pub mod error;
pub mod order;
pub mod state;
pub mod types;

pub use distance::DistanceCache;
pub use entities::{Fleet, Planet};
pub use error::{ParseError, ParseErrorKind};
pub use order::Order;
pub use state::GameStateSnapshot;
pub use types::{PlanetId, PlayerId};

#[cfg(test)]
mod tests;
