//! Memoized planet-to-planet travel distance.
//!
//! Distances are whole turns: the Euclidean distance rounded up. Each
//! unordered pair is computed at most once per cache lifetime.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::entities::Planet;
use crate::types::PlanetId;

/// Cache of distances keyed by unordered planet pair.
///
/// Uses interior mutability so lookups work through a shared borrow of the
/// owning state. Not `Sync`; the client is single-threaded.
#[derive(Debug, Default)]
pub struct DistanceCache {
    cache: RefCell<HashMap<(PlanetId, PlanetId), u32>>,
}

impl DistanceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Distance between planets `a` and `b`, in turns.
    ///
    /// # Panics
    ///
    /// Panics if either id is not an index into `planets`.
    pub fn distance(&self, planets: &[Planet], a: PlanetId, b: PlanetId) -> u32 {
        let key = if a <= b { (a, b) } else { (b, a) };
        if let Some(&d) = self.cache.borrow().get(&key) {
            return d;
        }
        let d = travel_distance(&planets[key.0], &planets[key.1]);
        self.cache.borrow_mut().insert(key, d);
        d
    }

    /// Number of cached pairs.
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }

    pub fn clear(&mut self) {
        self.cache.get_mut().clear();
    }
}

/// `ceil(sqrt(dx² + dy²))` between two planets.
pub fn travel_distance(a: &Planet, b: &Planet) -> u32 {
    let delta = a.position() - b.position();
    (delta.x * delta.x + delta.y * delta.y).sqrt().ceil() as u32
}
