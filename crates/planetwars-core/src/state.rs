//! Serializable view of a parsed snapshot, for logging and replay files.

use serde::{Deserialize, Serialize};

use crate::entities::{Fleet, Planet};

/// Every planet and fleet of one turn, in container order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub planets: Vec<Planet>,
    pub fleets: Vec<Fleet>,
}
