use super::{follow_road, is_roadway, Policy};
use crate::simulation::direction::{Direction, DirectionSource};
use crate::simulation::neighbors::Neighbors;
use crate::simulation::types::{Light, Terrain};

/// Drives straight along streets and obeys every signal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Car;

impl Policy for Car {
    fn choose_direction<S: DirectionSource + ?Sized>(
        &self,
        facing: Direction,
        neighbors: &Neighbors,
        _source: &mut S,
    ) -> Direction {
        follow_road(facing, neighbors, is_roadway)
    }

    fn can_pass(&mut self, terrain: Terrain, light: Light) -> bool {
        match terrain {
            Terrain::Street => true,
            Terrain::Light => light != Light::Red,
            Terrain::Crosswalk => light == Light::Green,
            Terrain::Trail | Terrain::Grass | Terrain::Wall => false,
        }
    }
}
