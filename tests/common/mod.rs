//! Shared fixtures for the integration tests

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};

use grid_traffic::simulation::{Direction, DirectionSource, Light, Neighbors, Terrain, TrafficGrid};

/// Enough draws for a uniform pick over four directions to cover them all
pub const TRIES_FOR_RANDOMNESS: usize = 50;

pub const FIXTURE_X: i32 = 10;
pub const FIXTURE_Y: i32 = 10;

/// Install a test logger honoring RUST_LOG; safe to call from every test
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Hands out a fixed sequence of directions
pub struct ScriptedDirections(VecDeque<Direction>);

impl ScriptedDirections {
    pub fn new(directions: &[Direction]) -> Self {
        Self(directions.iter().copied().collect())
    }

    pub fn remaining(&self) -> usize {
        self.0.len()
    }
}

impl DirectionSource for ScriptedDirections {
    fn random_direction(&mut self) -> Direction {
        self.0
            .pop_front()
            .expect("scripted direction source ran out of draws")
    }
}

/// Neighbors in north, east, south, west order
pub fn around(north: Terrain, east: Terrain, south: Terrain, west: Terrain) -> Neighbors {
    Neighbors::new(north, east, south, west)
}

/// A small hand-drawn map with one light state for every signalled cell
///
/// `S` street, `L` light, `C` crosswalk, `T` trail, `G` grass, `W` wall.
pub struct GridFixture {
    rows: Vec<Vec<Terrain>>,
    pub light: Light,
}

impl GridFixture {
    pub fn new(rows: &[&str], light: Light) -> Self {
        let rows = rows
            .iter()
            .map(|row| {
                row.chars()
                    .map(|c| match c {
                        'S' => Terrain::Street,
                        'L' => Terrain::Light,
                        'C' => Terrain::Crosswalk,
                        'T' => Terrain::Trail,
                        'G' => Terrain::Grass,
                        _ => Terrain::Wall,
                    })
                    .collect()
            })
            .collect();
        Self { rows, light }
    }
}

impl TrafficGrid for GridFixture {
    fn terrain(&self, x: i32, y: i32) -> Terrain {
        if x < 0 || y < 0 {
            return Terrain::Wall;
        }
        self.rows
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .unwrap_or(Terrain::Wall)
    }

    fn light(&self, _x: i32, _y: i32) -> Light {
        self.light
    }
}

/// Keyed-map form of a neighbor table
pub fn as_map(neighbors: &Neighbors) -> HashMap<Direction, Terrain> {
    neighbors.iter().collect()
}
