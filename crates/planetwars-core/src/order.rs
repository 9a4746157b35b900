//! Movement orders committed at the end of a turn.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::PlanetId;

/// Ships to send along one route, aggregated over a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub source: PlanetId,
    pub destination: PlanetId,
    pub ships: u32,
}

/// Wire form: `<source> <destination> <ships>`.
impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.source, self.destination, self.ships)
    }
}
