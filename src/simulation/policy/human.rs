use super::Policy;
use crate::simulation::direction::{Direction, DirectionSource};
use crate::simulation::neighbors::Neighbors;
use crate::simulation::types::{Light, Terrain};

/// Walks on grass, heads for crosswalks, and crosses while traffic is stopped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Human;

fn is_walkable(terrain: Terrain) -> bool {
    matches!(terrain, Terrain::Grass | Terrain::Crosswalk)
}

impl Policy for Human {
    fn choose_direction<S: DirectionSource + ?Sized>(
        &self,
        facing: Direction,
        neighbors: &Neighbors,
        source: &mut S,
    ) -> Direction {
        let behind = facing.reverse();

        let crosswalk = neighbors
            .iter()
            .find(|&(direction, terrain)| terrain == Terrain::Crosswalk && direction != behind);
        if let Some((direction, _)) = crosswalk {
            return direction;
        }

        // a dead end is the only way a human turns around
        if let Some(only) = neighbors.sole(is_walkable) {
            return only;
        }

        let draw = source.random_direction();
        [draw, draw.left(), draw.right()]
            .into_iter()
            .find(|&direction| is_walkable(neighbors[direction]) && direction != behind)
            .unwrap_or_else(|| draw.reverse())
    }

    fn can_pass(&mut self, terrain: Terrain, light: Light) -> bool {
        match terrain {
            Terrain::Grass => true,
            Terrain::Crosswalk => matches!(light, Light::Red | Light::Yellow),
            Terrain::Street | Terrain::Light | Terrain::Trail | Terrain::Wall => false,
        }
    }
}
