//! Planet and fleet records observed each turn.
//!
//! Entities never reference each other or the container; relationships are
//! plain planet ids resolved through the owning `GameState`.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::NEUTRAL;
use crate::types::{PlanetId, PlayerId};

/// A stationary planet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    id: PlanetId,
    owner: PlayerId,
    num_ships: i64,
    growth_rate: i64,
    position: DVec2,
}

impl Planet {
    pub fn new(
        id: PlanetId,
        owner: PlayerId,
        num_ships: i64,
        growth_rate: i64,
        position: DVec2,
    ) -> Self {
        Self {
            id,
            owner,
            num_ships,
            growth_rate,
            position,
        }
    }

    pub fn id(&self) -> PlanetId {
        self.id
    }

    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    pub fn set_owner(&mut self, owner: PlayerId) {
        self.owner = owner;
    }

    pub fn is_neutral(&self) -> bool {
        self.owner == NEUTRAL
    }

    /// Ships currently stationed here. Signed so callers can track
    /// commitments past zero.
    pub fn num_ships(&self) -> i64 {
        self.num_ships
    }

    pub fn set_num_ships(&mut self, num_ships: i64) {
        self.num_ships = num_ships;
    }

    pub fn add_ships(&mut self, amount: i64) {
        self.num_ships += amount;
    }

    pub fn remove_ships(&mut self, amount: i64) {
        self.num_ships -= amount;
    }

    /// Ships added per turn while owned. Applied by the game server.
    pub fn growth_rate(&self) -> i64 {
        self.growth_rate
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }
}

/// Ships in transit between two planets. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fleet {
    owner: PlayerId,
    num_ships: u32,
    source_planet: PlanetId,
    destination_planet: PlanetId,
    total_trip_length: u32,
    turns_remaining: u32,
}

impl Fleet {
    pub fn new(
        owner: PlayerId,
        num_ships: u32,
        source_planet: PlanetId,
        destination_planet: PlanetId,
        total_trip_length: u32,
        turns_remaining: u32,
    ) -> Self {
        debug_assert!(num_ships > 0, "fleets always carry ships");
        Self {
            owner,
            num_ships,
            source_planet,
            destination_planet,
            total_trip_length,
            turns_remaining,
        }
    }

    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    pub fn num_ships(&self) -> u32 {
        self.num_ships
    }

    pub fn source_planet(&self) -> PlanetId {
        self.source_planet
    }

    pub fn destination_planet(&self) -> PlanetId {
        self.destination_planet
    }

    /// Turns from launch to arrival.
    pub fn total_trip_length(&self) -> u32 {
        self.total_trip_length
    }

    /// Turns until arrival.
    pub fn turns_remaining(&self) -> u32 {
        self.turns_remaining
    }
}
