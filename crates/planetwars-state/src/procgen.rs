//! Seeded snapshot generator for tests, benchmarks and replay fixtures.
//!
//! Maps are point-symmetric about the centre so neither player starts with
//! an advantage: a neutral centre planet, then planet pairs mirrored
//! through it. The first pair are the two home planets.

use std::f64::consts::TAU;

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use planetwars_core::constants::{ENEMY, ME, NEUTRAL};
use planetwars_core::entities::Planet;

use crate::game_state::PlanetRecord;

/// Placement attempts before a planet is accepted regardless of spacing.
const MAX_PLACEMENT_ATTEMPTS: u32 = 64;

/// Configuration for generating a snapshot.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// RNG seed. Same seed = same snapshot text.
    pub seed: u64,
    /// Mirrored planet pairs, home planets included. Produces
    /// `1 + 2 * pairs` planets.
    pub pairs: usize,
    /// Radius of the disc planets are placed in.
    pub radius: f64,
    /// Minimum distance between any two planets, when achievable.
    pub min_spacing: f64,
    pub home_ships: i64,
    pub home_growth: i64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            pairs: 10,
            radius: 12.0,
            min_spacing: 2.0,
            home_ships: 100,
            home_growth: 5,
        }
    }
}

/// Generate a map as snapshot text, one `P` record per line.
pub fn generate_snapshot(config: &GeneratorConfig) -> String {
    generate_planets(config)
        .iter()
        .map(|planet| PlanetRecord(planet).to_string())
        .collect()
}

/// Generate the planets of a map in id order.
pub fn generate_planets(config: &GeneratorConfig) -> Vec<Planet> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let centre = DVec2::splat(config.radius);
    let mut planets = Vec::with_capacity(1 + 2 * config.pairs);

    planets.push(Planet::new(
        0,
        NEUTRAL,
        rng.gen_range(0..=50),
        rng.gen_range(1..=5),
        centre,
    ));

    for pair in 0..config.pairs {
        let offset = place_offset(&mut rng, config, &planets, centre, pair == 0);
        let (owners, ships, growth) = if pair == 0 {
            ((ME, ENEMY), config.home_ships, config.home_growth)
        } else {
            (
                (NEUTRAL, NEUTRAL),
                rng.gen_range(1..=100),
                rng.gen_range(1..=5),
            )
        };

        let id = planets.len();
        planets.push(Planet::new(id, owners.0, ships, growth, centre + offset));
        planets.push(Planet::new(id + 1, owners.1, ships, growth, centre - offset));
    }

    planets
}

/// Pick an offset from the centre whose mirrored pair keeps clear of the
/// planets already placed. Home planets sit in the outer half of the disc.
fn place_offset(
    rng: &mut ChaCha8Rng,
    config: &GeneratorConfig,
    placed: &[Planet],
    centre: DVec2,
    home: bool,
) -> DVec2 {
    let min_fraction: f64 = if home { 0.25 } else { 0.0 };
    let mut offset = DVec2::ZERO;

    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let angle = rng.gen_range(0.0..TAU);
        // sqrt keeps the density uniform over the disc.
        let r = config.radius * rng.gen_range(min_fraction..1.0).sqrt();
        offset = DVec2::from_angle(angle) * r;

        let clear = offset.length() * 2.0 >= config.min_spacing
            && placed.iter().all(|p| {
                p.position().distance(centre + offset) >= config.min_spacing
                    && p.position().distance(centre - offset) >= config.min_spacing
            });
        if clear {
            break;
        }
    }

    offset
}
