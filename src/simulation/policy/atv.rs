use super::Policy;
use crate::simulation::direction::{Direction, DirectionSource};
use crate::simulation::neighbors::Neighbors;
use crate::simulation::types::{Light, Terrain};

/// Goes anywhere but walls, in a random direction, never backing up by choice
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Atv;

impl Policy for Atv {
    fn choose_direction<S: DirectionSource + ?Sized>(
        &self,
        facing: Direction,
        neighbors: &Neighbors,
        source: &mut S,
    ) -> Direction {
        let behind = facing.reverse();
        let draw = source.random_direction();
        // ATVs try right before left
        [draw, draw.right(), draw.left(), draw.reverse()]
            .into_iter()
            .find(|&direction| neighbors[direction] != Terrain::Wall && direction != behind)
            .unwrap_or_else(|| {
                // walled in on three sides: back out if there is room
                if neighbors[behind] != Terrain::Wall {
                    behind
                } else {
                    draw
                }
            })
    }

    fn can_pass(&mut self, terrain: Terrain, _light: Light) -> bool {
        terrain != Terrain::Wall
    }
}
