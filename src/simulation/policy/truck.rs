use super::{is_roadway, Policy};
use crate::simulation::direction::{Direction, DirectionSource};
use crate::simulation::neighbors::Neighbors;
use crate::simulation::types::{Light, Terrain};

/// Wanders the street network at random and ignores traffic lights
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Truck;

impl Policy for Truck {
    fn choose_direction<S: DirectionSource + ?Sized>(
        &self,
        facing: Direction,
        neighbors: &Neighbors,
        source: &mut S,
    ) -> Direction {
        // a dead end is the only way a truck turns around on its own
        if let Some(only) = neighbors.sole(is_roadway) {
            return only;
        }

        let behind = facing.reverse();
        let draw = source.random_direction();
        [draw, draw.left(), draw.right()]
            .into_iter()
            .find(|&direction| is_roadway(neighbors[direction]) && direction != behind)
            .unwrap_or_else(|| draw.reverse())
    }

    fn can_pass(&mut self, terrain: Terrain, light: Light) -> bool {
        match terrain {
            Terrain::Street | Terrain::Light => true,
            Terrain::Crosswalk => light != Light::Red,
            Terrain::Trail | Terrain::Grass | Terrain::Wall => false,
        }
    }
}
