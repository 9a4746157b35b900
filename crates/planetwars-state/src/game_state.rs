//! Game state container — the planets, fleets and orders of one turn.
//!
//! `GameState` owns everything parsed from a snapshot, answers the AI's
//! queries, aggregates its orders per route, and writes them back in the
//! wire protocol when the turn is committed.

use std::fmt;
use std::io::{self, Write};

use indexmap::IndexMap;
use tracing::{debug, warn};

use planetwars_core::constants::*;
use planetwars_core::distance::DistanceCache;
use planetwars_core::entities::{Fleet, Planet};
use planetwars_core::error::{ParseError, ParseErrorKind};
use planetwars_core::order::Order;
use planetwars_core::state::GameStateSnapshot;
use planetwars_core::types::{PlanetId, PlayerId};

use crate::parse::{parse_line, Record};

/// Fleets arriving at the same planet on the same turn for the same owner
/// are one arrival event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct FleetKey {
    owner: PlayerId,
    destination: PlanetId,
    turns_remaining: u32,
}

/// Merge accumulator entry. `source` and `total_trip_length` are the
/// first-seen values for the key.
#[derive(Debug, Clone, Copy)]
struct PendingFleet {
    num_ships: u32,
    source: PlanetId,
    total_trip_length: u32,
}

/// All observed state for one turn plus the orders issued against it.
#[derive(Debug, Default)]
pub struct GameState {
    planets: Vec<Planet>,
    fleets: Vec<Fleet>,
    pending_fleets: IndexMap<FleetKey, PendingFleet>,
    fleet_merge_conflicts: usize,
    issued_orders: IndexMap<(PlanetId, PlanetId), u32>,
    distances: DistanceCache,
}

impl GameState {
    /// Create an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and initialise a snapshot in one step. On failure no container
    /// is returned, so partially parsed state is never visible.
    pub fn from_snapshot(snapshot: &str) -> Result<Self, ParseError> {
        let mut state = Self::new();
        state.parse_game_state(snapshot)?;
        state.initialise();
        Ok(state)
    }

    // --- Parsing ---

    /// Parse snapshot text, appending planets and accumulating fleets.
    ///
    /// Stops at the first bad line. After an error the container holds
    /// partial state and must be discarded. Call [`GameState::initialise`]
    /// after a successful parse to materialize the fleets.
    pub fn parse_game_state(&mut self, snapshot: &str) -> Result<(), ParseError> {
        for (index, line) in snapshot.lines().enumerate() {
            let line_no = index + 1;
            match parse_line(line_no, line)? {
                Some(Record::Planet {
                    position,
                    owner,
                    num_ships,
                    growth_rate,
                }) => {
                    let id = self.planets.len();
                    self.planets
                        .push(Planet::new(id, owner, num_ships, growth_rate, position));
                }
                Some(Record::Fleet {
                    owner,
                    num_ships,
                    source,
                    destination,
                    total_trip_length,
                    turns_remaining,
                }) => {
                    let key = FleetKey {
                        owner,
                        destination,
                        turns_remaining,
                    };
                    self.accumulate_fleet(key, num_ships, source, total_trip_length)
                        .map_err(|kind| ParseError::new(line_no, kind))?;
                }
                None => {}
            }
        }

        debug!(
            planets = self.planets.len(),
            pending_fleets = self.pending_fleets.len(),
            "snapshot parsed"
        );
        Ok(())
    }

    fn accumulate_fleet(
        &mut self,
        key: FleetKey,
        num_ships: u32,
        source: PlanetId,
        total_trip_length: u32,
    ) -> Result<(), ParseErrorKind> {
        match self.pending_fleets.get_mut(&key) {
            Some(pending) => {
                if pending.source != source || pending.total_trip_length != total_trip_length {
                    self.fleet_merge_conflicts += 1;
                    warn!(
                        owner = key.owner,
                        destination = key.destination,
                        turns_remaining = key.turns_remaining,
                        kept_source = pending.source,
                        kept_trip_length = pending.total_trip_length,
                        source,
                        total_trip_length,
                        "merged fleets disagree on source or trip length"
                    );
                }
                pending.num_ships = pending
                    .num_ships
                    .checked_add(num_ships)
                    .ok_or(ParseErrorKind::FleetShipOverflow)?;
            }
            None => {
                self.pending_fleets.insert(
                    key,
                    PendingFleet {
                        num_ships,
                        source,
                        total_trip_length,
                    },
                );
            }
        }
        Ok(())
    }

    /// Turn the merge accumulator into fleets, in first-seen key order.
    pub fn initialise(&mut self) {
        self.fleets
            .extend(self.pending_fleets.drain(..).map(|(key, pending)| {
                Fleet::new(
                    key.owner,
                    pending.num_ships,
                    pending.source,
                    key.destination,
                    pending.total_trip_length,
                    key.turns_remaining,
                )
            }));
    }

    /// Replace planets and fleets with a new turn's snapshot and drop any
    /// outstanding orders.
    ///
    /// The distance cache is kept when the planet layout is unchanged and
    /// cleared otherwise. On error the container must be discarded or
    /// reloaded.
    pub fn load_turn(&mut self, snapshot: &str) -> Result<(), ParseError> {
        let previous = std::mem::take(&mut self.planets);
        self.fleets.clear();
        self.pending_fleets.clear();
        self.fleet_merge_conflicts = 0;
        self.issued_orders.clear();

        let result = self.parse_game_state(snapshot);

        let same_layout = previous.len() == self.planets.len()
            && previous
                .iter()
                .zip(&self.planets)
                .all(|(old, new)| old.position() == new.position());
        if !same_layout {
            self.distances.clear();
        }

        result?;
        self.initialise();
        Ok(())
    }

    /// Fleet records merged into an existing arrival whose source or trip
    /// length differed. The first-seen values are kept.
    pub fn fleet_merge_conflicts(&self) -> usize {
        self.fleet_merge_conflicts
    }

    // --- Planet queries ---

    pub fn num_planets(&self) -> usize {
        self.planets.len()
    }

    /// # Panics
    ///
    /// Panics if `id` is out of range.
    pub fn planet(&self, id: PlanetId) -> &Planet {
        &self.planets[id]
    }

    /// # Panics
    ///
    /// Panics if `id` is out of range.
    pub fn planet_mut(&mut self, id: PlanetId) -> &mut Planet {
        &mut self.planets[id]
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn planets_owned_by(&self, owner: PlayerId) -> impl Iterator<Item = &Planet> + '_ {
        self.planets.iter().filter(move |p| p.owner() == owner)
    }

    pub fn my_planets(&self) -> impl Iterator<Item = &Planet> + '_ {
        self.planets_owned_by(ME)
    }

    pub fn neutral_planets(&self) -> impl Iterator<Item = &Planet> + '_ {
        self.planets_owned_by(NEUTRAL)
    }

    pub fn enemy_planets(&self) -> impl Iterator<Item = &Planet> + '_ {
        self.planets_owned_by(ENEMY)
    }

    /// Neutral and enemy planets.
    pub fn not_my_planets(&self) -> impl Iterator<Item = &Planet> + '_ {
        self.planets.iter().filter(|p| p.owner() != ME)
    }

    // --- Fleet queries ---

    pub fn num_fleets(&self) -> usize {
        self.fleets.len()
    }

    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn fleet(&self, index: usize) -> &Fleet {
        &self.fleets[index]
    }

    pub fn fleets(&self) -> &[Fleet] {
        &self.fleets
    }

    pub fn fleets_owned_by(&self, owner: PlayerId) -> impl Iterator<Item = &Fleet> + '_ {
        self.fleets.iter().filter(move |f| f.owner() == owner)
    }

    pub fn my_fleets(&self) -> impl Iterator<Item = &Fleet> + '_ {
        self.fleets_owned_by(ME)
    }

    pub fn enemy_fleets(&self) -> impl Iterator<Item = &Fleet> + '_ {
        self.fleets_owned_by(ENEMY)
    }

    // --- Summaries ---

    /// A player is alive while they own a planet or have a fleet in flight.
    pub fn is_alive(&self, player: PlayerId) -> bool {
        self.planets.iter().any(|p| p.owner() == player)
            || self.fleets.iter().any(|f| f.owner() == player)
    }

    /// Ships gained per turn across the player's planets.
    pub fn production(&self, player: PlayerId) -> i64 {
        self.planets_owned_by(player).map(Planet::growth_rate).sum()
    }

    /// Ships on the player's planets plus ships in the player's fleets.
    pub fn total_ships(&self, player: PlayerId) -> i64 {
        let on_planets: i64 = self.planets_owned_by(player).map(Planet::num_ships).sum();
        let in_flight: i64 = self
            .fleets_owned_by(player)
            .map(|f| i64::from(f.num_ships()))
            .sum();
        on_planets + in_flight
    }

    // --- Distance ---

    /// Travel time in turns between two planets. Cached per unordered pair.
    ///
    /// # Panics
    ///
    /// Panics if either id is out of range.
    pub fn distance(&self, a: PlanetId, b: PlanetId) -> u32 {
        self.distances.distance(&self.planets, a, b)
    }

    /// Number of planet pairs with a cached distance.
    pub fn cached_distances(&self) -> usize {
        self.distances.len()
    }

    // --- Orders ---

    /// Queue `ships` to move from `source` to `destination` this turn.
    ///
    /// Orders on the same route add up into one wire command. Zero-ship and
    /// self-targeted orders are ignored. A route total saturates at
    /// `u32::MAX`.
    pub fn issue_order(&mut self, source: PlanetId, destination: PlanetId, ships: u32) {
        if ships == 0 || source == destination {
            return;
        }
        let total = self.issued_orders.entry((source, destination)).or_insert(0);
        let sum = total.checked_add(ships);
        if sum.is_none() {
            warn!(source, destination, ships, "order total saturated");
        }
        *total = sum.unwrap_or(u32::MAX);
    }

    /// Aggregated orders in first-issued route order.
    pub fn orders(&self) -> impl Iterator<Item = Order> + '_ {
        self.issued_orders
            .iter()
            .map(|(&(source, destination), &ships)| Order {
                source,
                destination,
                ships,
            })
    }

    pub fn num_orders(&self) -> usize {
        self.issued_orders.len()
    }

    /// Drop this turn's orders. The distance cache is kept.
    pub fn reset_turn(&mut self) {
        self.issued_orders.clear();
    }

    /// Commit the turn: one line per route, then `go`, then flush.
    ///
    /// The order map is drained so it is never sent twice.
    pub fn finish_turn<W: Write>(&mut self, mut out: W) -> io::Result<()> {
        let orders = std::mem::take(&mut self.issued_orders);
        let count = orders.len();
        for ((source, destination), ships) in orders {
            let order = Order {
                source,
                destination,
                ships,
            };
            writeln!(out, "{order}")?;
        }
        writeln!(out, "{TURN_END}")?;
        out.flush()?;

        debug!(orders = count, "turn committed");
        Ok(())
    }

    /// [`GameState::finish_turn`] against locked stdout.
    pub fn finish_turn_stdout(&mut self) -> io::Result<()> {
        self.finish_turn(io::stdout().lock())
    }

    // --- Serialization ---

    /// Clone the planets and fleets into a serializable view.
    pub fn snapshot(&self) -> GameStateSnapshot {
        GameStateSnapshot {
            planets: self.planets.clone(),
            fleets: self.fleets.clone(),
        }
    }
}

/// Full-state debug dump in snapshot syntax, for logs and replays.
impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for planet in &self.planets {
            write!(f, "{}", PlanetRecord(planet))?;
        }
        for fleet in &self.fleets {
            writeln!(
                f,
                "{FLEET_TAG} {} {} {} {} {} {}",
                fleet.owner(),
                fleet.num_ships(),
                fleet.source_planet(),
                fleet.destination_planet(),
                fleet.total_trip_length(),
                fleet.turns_remaining()
            )?;
        }
        Ok(())
    }
}

/// One `P x y owner ships growth` line, six decimal places on the
/// coordinates.
pub(crate) struct PlanetRecord<'a>(pub &'a Planet);

impl fmt::Display for PlanetRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let planet = self.0;
        writeln!(
            f,
            "{PLANET_TAG} {:.6} {:.6} {} {} {}",
            planet.x(),
            planet.y(),
            planet.owner(),
            planet.num_ships(),
            planet.growth_rate()
        )
    }
}
