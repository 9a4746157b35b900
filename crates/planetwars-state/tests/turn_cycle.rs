//! Full parse → query → order → commit cycle through the public API.

use planetwars_state::core::constants::{ENEMY, ME};
use planetwars_state::procgen::{generate_snapshot, GeneratorConfig};
use planetwars_state::{run_turns, DriverConfig, GameState, Strategy};

/// Sends half of each owned planet's ships to the nearest planet it
/// does not own.
struct NearestTarget;

impl Strategy for NearestTarget {
    fn do_turn(&mut self, state: &mut GameState) {
        let mut moves = Vec::new();
        for source in state.my_planets() {
            let target = state
                .not_my_planets()
                .min_by_key(|p| state.distance(source.id(), p.id()));
            if let Some(target) = target {
                let ships = u32::try_from(source.num_ships() / 2).unwrap_or(0);
                moves.push((source.id(), target.id(), ships));
            }
        }
        for (source, destination, ships) in moves {
            state.issue_order(source, destination, ships);
            state.planet_mut(source).remove_ships(i64::from(ships));
        }
    }
}

#[test]
fn test_single_turn_cycle() {
    let snapshot = "\
# two homes, one neutral in the middle
P 0 0 1 60 5
P 20 0 2 60 5
P 8 0 0 10 2
F 2 15 1 2 12 4
F 2 5 1 2 12 4
";
    let mut state = GameState::from_snapshot(snapshot).unwrap();
    assert_eq!(state.num_fleets(), 1);
    assert_eq!(state.fleet(0).num_ships(), 20);
    assert!(state.is_alive(ME));
    assert!(state.is_alive(ENEMY));

    NearestTarget.do_turn(&mut state);
    assert_eq!(state.planet(0).num_ships(), 30);

    let mut out = Vec::new();
    state.finish_turn(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "0 2 30\ngo\n");
}

#[test]
fn test_generated_game_through_driver() {
    let map = generate_snapshot(&GeneratorConfig {
        seed: 2024,
        pairs: 5,
        ..Default::default()
    });
    let input = format!("{map}go\n{map}go\n{map}go\n");

    let mut out = Vec::new();
    let turns = run_turns(
        input.as_bytes(),
        &mut out,
        &mut NearestTarget,
        &DriverConfig::default(),
    )
    .unwrap();
    assert_eq!(turns, 3);

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    // Home planet is id 1 with 100 ships: one order of 50 per turn.
    assert_eq!(lines.iter().filter(|l| **l == "go").count(), 3);
    assert_eq!(lines.len(), 6);
    for order in lines.iter().filter(|l| **l != "go") {
        let fields: Vec<u32> = order
            .split(' ')
            .map(|t| t.parse().unwrap())
            .collect();
        assert_eq!(fields[0], 1);
        assert_eq!(fields[2], 50);
    }
}
