//! Bicycle and human behavior

mod common;

use grid_traffic::simulation::{
    Direction, Light, Neighbors, Terrain, Vehicle, VehicleKind, BICYCLE_DEATH_TIME,
    HUMAN_DEATH_TIME,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use common::{around, ScriptedDirections, FIXTURE_X, FIXTURE_Y, TRIES_FOR_RANDOMNESS};
use Terrain::{Crosswalk, Grass, Light as Signal, Street, Trail, Wall};

/// Neighbor tables and the direction a north-facing bicycle should pick
fn bicycle_choices() -> Vec<(Neighbors, Direction)> {
    vec![
        (around(Wall, Wall, Crosswalk, Signal), Direction::West),
        (around(Wall, Street, Street, Signal), Direction::West),
        (around(Crosswalk, Street, Street, Signal), Direction::North),
        (around(Crosswalk, Grass, Street, Signal), Direction::North),
        (around(Trail, Street, Street, Signal), Direction::North),
        (around(Grass, Grass, Signal, Grass), Direction::South),
        (around(Signal, Crosswalk, Grass, Signal), Direction::North),
        (around(Trail, Signal, Crosswalk, Wall), Direction::North),
        (around(Signal, Trail, Grass, Crosswalk), Direction::East),
        (around(Street, Grass, Grass, Crosswalk), Direction::North),
        (around(Grass, Grass, Grass, Trail), Direction::West),
        (around(Grass, Street, Street, Trail), Direction::West),
        (around(Crosswalk, Grass, Grass, Signal), Direction::North),
        // the trail behind does not count
        (around(Grass, Grass, Trail, Signal), Direction::West),
        (around(Grass, Street, Grass, Signal), Direction::West),
    ]
}

#[test]
fn test_bicycle_constructor() {
    let bicycle = Vehicle::new(VehicleKind::Bicycle, FIXTURE_X, FIXTURE_Y, Direction::North);

    assert_eq!(bicycle.x(), FIXTURE_X);
    assert_eq!(bicycle.y(), FIXTURE_Y);
    assert_eq!(bicycle.direction(), Direction::North);
    assert_eq!(bicycle.death_time(), BICYCLE_DEATH_TIME);
    assert_eq!(bicycle.death_time(), 35);
    assert!(bicycle.is_alive());
}

#[test]
fn test_bicycle_can_pass() {
    let mut bicycle = Vehicle::new(VehicleKind::Bicycle, 0, 0, Direction::North);

    for light in Light::ALL {
        assert!(bicycle.can_pass(Trail, light));
        assert!(bicycle.can_pass(Street, light));
        assert!(!bicycle.can_pass(Grass, light));
        assert!(!bicycle.can_pass(Wall, light));
        assert_eq!(bicycle.can_pass(Signal, light), light == Light::Green);
        assert_eq!(bicycle.can_pass(Crosswalk, light), light == Light::Green);
    }
}

#[test]
fn test_bicycle_choose_direction() {
    let bicycle = Vehicle::new(VehicleKind::Bicycle, 0, 0, Direction::North);
    let mut no_draws = ScriptedDirections::new(&[]);
    for (neighbors, expected) in bicycle_choices() {
        assert_eq!(
            bicycle.choose_direction(&neighbors, &mut no_draws),
            expected,
            "bicycle chose incorrectly for {:?}",
            neighbors
        );
    }
}

#[test]
fn test_bicycle_last_trail_wins() {
    let bicycle = Vehicle::new(VehicleKind::Bicycle, 0, 0, Direction::South);
    let mut no_draws = ScriptedDirections::new(&[]);

    // north is behind, east and west are both trail
    let fork = around(Trail, Trail, Street, Trail);
    assert_eq!(bicycle.choose_direction(&fork, &mut no_draws), Direction::West);
}

#[test]
fn test_human_constructor() {
    let human = Vehicle::new(VehicleKind::Human, FIXTURE_X, FIXTURE_Y, Direction::North);

    assert_eq!(human.x(), FIXTURE_X);
    assert_eq!(human.y(), FIXTURE_Y);
    assert_eq!(human.direction(), Direction::North);
    assert_eq!(human.death_time(), HUMAN_DEATH_TIME);
    assert_eq!(human.death_time(), 45);
    assert!(human.is_alive());
}

#[test]
fn test_human_can_pass() {
    let mut human = Vehicle::new(VehicleKind::Human, 0, 0, Direction::North);

    for light in Light::ALL {
        assert!(human.can_pass(Grass, light));
        assert!(!human.can_pass(Street, light));
        assert!(!human.can_pass(Signal, light));
        assert!(!human.can_pass(Trail, light));
        assert!(!human.can_pass(Wall, light));
    }
    assert!(human.can_pass(Crosswalk, Light::Red));
    assert!(human.can_pass(Crosswalk, Light::Yellow));
    assert!(!human.can_pass(Crosswalk, Light::Green));
}

#[test]
fn test_human_heads_for_first_crosswalk() {
    let mut no_draws = ScriptedDirections::new(&[]);

    let human = Vehicle::new(VehicleKind::Human, 0, 0, Direction::North);
    let both = around(Crosswalk, Crosswalk, Grass, Grass);
    assert_eq!(human.choose_direction(&both, &mut no_draws), Direction::North);

    let east_and_south = around(Grass, Crosswalk, Crosswalk, Grass);
    assert_eq!(human.choose_direction(&east_and_south, &mut no_draws), Direction::East);

    // facing west, the east crosswalk is behind
    let human = Vehicle::new(VehicleKind::Human, 0, 0, Direction::West);
    assert_eq!(human.choose_direction(&east_and_south, &mut no_draws), Direction::South);
}

#[test]
fn test_human_forced_into_only_exit() {
    let mut no_draws = ScriptedDirections::new(&[]);
    let human = Vehicle::new(VehicleKind::Human, 0, 0, Direction::North);

    let dead_end = around(Wall, Street, Grass, Signal);
    assert_eq!(human.choose_direction(&dead_end, &mut no_draws), Direction::South);

    // a crosswalk behind is still the only way out
    let behind = around(Street, Street, Crosswalk, Wall);
    assert_eq!(human.choose_direction(&behind, &mut no_draws), Direction::South);
}

#[test]
fn test_human_retries_left_then_right() {
    let human = Vehicle::new(VehicleKind::Human, 0, 0, Direction::North);
    let field = around(Grass, Grass, Grass, Grass);

    let mut draws = ScriptedDirections::new(&[Direction::West]);
    assert_eq!(human.choose_direction(&field, &mut draws), Direction::West);

    // drew south (behind); left of south is east
    let mut draws = ScriptedDirections::new(&[Direction::South]);
    assert_eq!(human.choose_direction(&field, &mut draws), Direction::East);

    // drew east onto the street; left of east is north
    let road = around(Grass, Street, Grass, Grass);
    let mut draws = ScriptedDirections::new(&[Direction::East]);
    assert_eq!(human.choose_direction(&road, &mut draws), Direction::North);

    // drew north into a wall; left is west (street), right is east
    let corner = around(Wall, Grass, Grass, Street);
    let mut draws = ScriptedDirections::new(&[Direction::North]);
    assert_eq!(human.choose_direction(&corner, &mut draws), Direction::East);
}

#[test]
fn test_human_stays_on_walkable_ground() {
    let human = Vehicle::new(VehicleKind::Human, 0, 0, Direction::East);
    let maps = [
        around(Grass, Street, Grass, Grass),
        around(Wall, Grass, Street, Grass),
        around(Grass, Wall, Grass, Signal),
        around(Trail, Grass, Grass, Wall),
    ];
    let mut rng = StdRng::seed_from_u64(5);
    for neighbors in maps {
        for _ in 0..TRIES_FOR_RANDOMNESS {
            let choice = human.choose_direction(&neighbors, &mut rng);
            assert_eq!(neighbors[choice], Grass, "human walked onto {:?}", neighbors[choice]);
        }
    }
}
