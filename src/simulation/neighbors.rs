//! The terrain surrounding a vehicle's cell

use std::collections::HashMap;
use std::ops::Index;

use anyhow::{Context, Result};

use super::direction::Direction;
use super::types::Terrain;

/// Terrain of the four cells adjacent to a vehicle, one per direction
///
/// Always complete: a policy can look up any direction without a failure case.
/// Iteration runs north, east, south, west.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbors([Terrain; 4]);

impl Neighbors {
    pub fn new(north: Terrain, east: Terrain, south: Terrain, west: Terrain) -> Self {
        Self([north, east, south, west])
    }

    /// Build the table by asking for each direction in turn
    pub fn from_fn(mut terrain_of: impl FnMut(Direction) -> Terrain) -> Self {
        Self(Direction::ALL.map(&mut terrain_of))
    }

    /// Build from a keyed map, failing if any direction is missing
    pub fn from_map(map: &HashMap<Direction, Terrain>) -> Result<Self> {
        let mut terrains = [Terrain::Wall; 4];
        for direction in Direction::ALL {
            terrains[direction.index()] = *map
                .get(&direction)
                .with_context(|| format!("Neighbor mapping is missing {:?}", direction))?;
        }
        Ok(Self(terrains))
    }

    pub fn get(&self, direction: Direction) -> Terrain {
        self.0[direction.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Direction, Terrain)> + '_ {
        Direction::ALL.into_iter().zip(self.0.iter().copied())
    }

    /// The only direction whose terrain satisfies `valid`, if exactly one does
    pub fn sole(&self, valid: impl Fn(Terrain) -> bool) -> Option<Direction> {
        let mut matches = self.iter().filter(|&(_, terrain)| valid(terrain));
        match (matches.next(), matches.next()) {
            (Some((direction, _)), None) => Some(direction),
            _ => None,
        }
    }
}

impl Index<Direction> for Neighbors {
    type Output = Terrain;

    fn index(&self, direction: Direction) -> &Terrain {
        &self.0[direction.index()]
    }
}

impl TryFrom<&HashMap<Direction, Terrain>> for Neighbors {
    type Error = anyhow::Error;

    fn try_from(map: &HashMap<Direction, Terrain>) -> Result<Self> {
        Self::from_map(map)
    }
}
