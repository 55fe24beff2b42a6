use super::{follow_road, is_roadway, Policy};
use crate::simulation::direction::{Direction, DirectionSource};
use crate::simulation::neighbors::Neighbors;
use crate::simulation::types::{Light, Terrain, TAXI_CROSSWALK_WAIT};

/// Drives like a car, but gets impatient at red crosswalks
///
/// The first red-crosswalk query arms a countdown and refuses. Each further
/// consecutive red-crosswalk query counts down and refuses, until the count
/// hits zero and the taxi goes through. Any other query disarms the countdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Taxi {
    wait_cycle: u32,
}

impl Taxi {
    /// Remaining red-crosswalk queries before the taxi proceeds; 0 when not waiting
    pub fn wait_cycle(&self) -> u32 {
        self.wait_cycle
    }
}

impl Policy for Taxi {
    fn choose_direction<S: DirectionSource + ?Sized>(
        &self,
        facing: Direction,
        neighbors: &Neighbors,
        _source: &mut S,
    ) -> Direction {
        follow_road(facing, neighbors, is_roadway)
    }

    fn can_pass(&mut self, terrain: Terrain, light: Light) -> bool {
        if terrain == Terrain::Crosswalk && light == Light::Red {
            if self.wait_cycle > 0 {
                self.wait_cycle -= 1;
                self.wait_cycle == 0
            } else {
                self.wait_cycle = TAXI_CROSSWALK_WAIT;
                false
            }
        } else {
            self.wait_cycle = 0;
            match terrain {
                Terrain::Street => true,
                Terrain::Light | Terrain::Crosswalk => light != Light::Red,
                Terrain::Trail | Terrain::Grass | Terrain::Wall => false,
            }
        }
    }
}
