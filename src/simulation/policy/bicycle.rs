use super::{follow_road, Policy};
use crate::simulation::direction::{Direction, DirectionSource};
use crate::simulation::neighbors::Neighbors;
use crate::simulation::types::{Light, Terrain};

/// Prefers trails, otherwise rides the street like a car
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bicycle;

fn is_rideable(terrain: Terrain) -> bool {
    matches!(
        terrain,
        Terrain::Trail | Terrain::Street | Terrain::Light | Terrain::Crosswalk
    )
}

impl Policy for Bicycle {
    fn choose_direction<S: DirectionSource + ?Sized>(
        &self,
        facing: Direction,
        neighbors: &Neighbors,
        _source: &mut S,
    ) -> Direction {
        let behind = facing.reverse();
        // last trail in north-east-south-west order wins
        neighbors
            .iter()
            .filter(|&(direction, terrain)| terrain == Terrain::Trail && direction != behind)
            .map(|(direction, _)| direction)
            .last()
            .unwrap_or_else(|| follow_road(facing, neighbors, is_rideable))
    }

    fn can_pass(&mut self, terrain: Terrain, light: Light) -> bool {
        match terrain {
            Terrain::Trail | Terrain::Street => true,
            Terrain::Light | Terrain::Crosswalk => light == Light::Green,
            Terrain::Grass | Terrain::Wall => false,
        }
    }
}
