use glam::DVec2;

use crate::constants::*;
use crate::distance::{travel_distance, DistanceCache};
use crate::entities::{Fleet, Planet};
use crate::error::{ParseError, ParseErrorKind};
use crate::order::Order;

fn planet_at(id: usize, x: f64, y: f64) -> Planet {
    Planet::new(id, NEUTRAL, 10, 1, DVec2::new(x, y))
}

// ---- Entities ----

#[test]
fn test_planet_getters_and_setters() {
    let mut p = Planet::new(3, ME, 50, 5, DVec2::new(1.5, -2.0));
    assert_eq!(p.id(), 3);
    assert_eq!(p.owner(), ME);
    assert_eq!(p.growth_rate(), 5);
    assert_eq!(p.x(), 1.5);
    assert_eq!(p.y(), -2.0);

    p.set_owner(ENEMY);
    assert_eq!(p.owner(), ENEMY);

    // Setting zero must be a write, not a read.
    p.set_num_ships(0);
    assert_eq!(p.num_ships(), 0);

    p.add_ships(12);
    p.remove_ships(20);
    assert_eq!(p.num_ships(), -8);
}

#[test]
fn test_planet_is_neutral() {
    let mut p = planet_at(0, 0.0, 0.0);
    assert!(p.is_neutral());
    p.set_owner(ME);
    assert!(!p.is_neutral());
}

#[test]
fn test_fleet_getters() {
    let f = Fleet::new(ENEMY, 25, 4, 7, 9, 3);
    assert_eq!(f.owner(), ENEMY);
    assert_eq!(f.num_ships(), 25);
    assert_eq!(f.source_planet(), 4);
    assert_eq!(f.destination_planet(), 7);
    assert_eq!(f.total_trip_length(), 9);
    assert_eq!(f.turns_remaining(), 3);
}

#[test]
fn test_planet_serde() {
    let p = Planet::new(1, ME, 42, 3, DVec2::new(10.25, 4.0));
    let json = serde_json::to_string(&p).unwrap();
    let back: Planet = serde_json::from_str(&json).unwrap();
    assert_eq!(p, back);
}

// ---- Distance ----

#[test]
fn test_distance_rounds_up() {
    let a = planet_at(0, 0.0, 0.0);
    assert_eq!(travel_distance(&a, &planet_at(1, 3.0, 4.0)), 5);
    assert_eq!(travel_distance(&a, &planet_at(1, 1.0, 1.0)), 2);
    assert_eq!(travel_distance(&a, &planet_at(1, 10.0, 0.0)), 10);
    assert_eq!(travel_distance(&a, &planet_at(1, 10.01, 0.0)), 11);
}

#[test]
fn test_distance_to_self_is_zero() {
    let planets = vec![planet_at(0, 7.5, 2.5)];
    let cache = DistanceCache::new();
    assert_eq!(cache.distance(&planets, 0, 0), 0);
}

#[test]
fn test_distance_symmetric_and_cached_once() {
    let planets = vec![
        planet_at(0, 0.0, 0.0),
        planet_at(1, 6.2, 9.9),
        planet_at(2, -4.0, 3.3),
    ];
    let cache = DistanceCache::new();
    assert!(cache.is_empty());

    let ab = cache.distance(&planets, 0, 1);
    let ba = cache.distance(&planets, 1, 0);
    assert_eq!(ab, ba);
    assert_eq!(cache.len(), 1, "unordered pair should share one entry");

    for _ in 0..10 {
        assert_eq!(cache.distance(&planets, 1, 0), ab);
    }
    assert_eq!(cache.len(), 1);

    cache.distance(&planets, 2, 1);
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_distance_cache_clear() {
    let planets = vec![planet_at(0, 0.0, 0.0), planet_at(1, 1.0, 0.0)];
    let mut cache = DistanceCache::new();
    cache.distance(&planets, 0, 1);
    cache.clear();
    assert!(cache.is_empty());
}

#[test]
#[should_panic]
fn test_distance_invalid_id_panics() {
    let planets = vec![planet_at(0, 0.0, 0.0)];
    DistanceCache::new().distance(&planets, 0, 5);
}

// ---- Orders and errors ----

#[test]
fn test_order_wire_format() {
    let order = Order {
        source: 0,
        destination: 1,
        ships: 12,
    };
    assert_eq!(order.to_string(), "0 1 12");
}

#[test]
fn test_parse_error_message() {
    let err = ParseError::new(
        3,
        ParseErrorKind::WrongTokenCount {
            tag: "P".into(),
            expected: PLANET_TOKENS,
            found: 4,
        },
    );
    assert_eq!(err.to_string(), "line 3: `P` record needs 6 tokens, found 4");
}
