//! Per-kind movement and passability policies
//!
//! Each vehicle kind supplies two decisions over the shared vehicle state:
//! which way to head given the surrounding terrain, and whether it may enter
//! a cell of a given terrain under a given light. The set of kinds is closed,
//! so dispatch is a plain enum match.

mod atv;
mod bicycle;
mod car;
mod human;
mod taxi;
mod truck;

use super::direction::{Direction, DirectionSource};
use super::neighbors::Neighbors;
use super::types::{Light, Terrain};
use super::vehicle::VehicleKind;

pub use atv::Atv;
pub use bicycle::Bicycle;
pub use car::Car;
pub use human::Human;
pub use taxi::Taxi;
pub use truck::Truck;

/// Decision functions supplied by one vehicle kind
pub trait Policy {
    /// Pick the next heading. Always returns one of the four directions.
    fn choose_direction<S: DirectionSource + ?Sized>(
        &self,
        facing: Direction,
        neighbors: &Neighbors,
        source: &mut S,
    ) -> Direction;

    /// Whether the vehicle may enter a cell. Only [`Taxi`] mutates itself here.
    fn can_pass(&mut self, terrain: Terrain, light: Light) -> bool;
}

/// The policy carried by a vehicle, holding any per-kind transient state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyState {
    Car(Car),
    Taxi(Taxi),
    Truck(Truck),
    Atv(Atv),
    Bicycle(Bicycle),
    Human(Human),
}

impl PolicyState {
    pub fn for_kind(kind: VehicleKind) -> Self {
        match kind {
            VehicleKind::Car => PolicyState::Car(Car),
            VehicleKind::Taxi => PolicyState::Taxi(Taxi::default()),
            VehicleKind::Truck => PolicyState::Truck(Truck),
            VehicleKind::Atv => PolicyState::Atv(Atv),
            VehicleKind::Bicycle => PolicyState::Bicycle(Bicycle),
            VehicleKind::Human => PolicyState::Human(Human),
        }
    }
}

impl Policy for PolicyState {
    fn choose_direction<S: DirectionSource + ?Sized>(
        &self,
        facing: Direction,
        neighbors: &Neighbors,
        source: &mut S,
    ) -> Direction {
        match self {
            PolicyState::Car(p) => p.choose_direction(facing, neighbors, source),
            PolicyState::Taxi(p) => p.choose_direction(facing, neighbors, source),
            PolicyState::Truck(p) => p.choose_direction(facing, neighbors, source),
            PolicyState::Atv(p) => p.choose_direction(facing, neighbors, source),
            PolicyState::Bicycle(p) => p.choose_direction(facing, neighbors, source),
            PolicyState::Human(p) => p.choose_direction(facing, neighbors, source),
        }
    }

    fn can_pass(&mut self, terrain: Terrain, light: Light) -> bool {
        match self {
            PolicyState::Car(p) => p.can_pass(terrain, light),
            PolicyState::Taxi(p) => p.can_pass(terrain, light),
            PolicyState::Truck(p) => p.can_pass(terrain, light),
            PolicyState::Atv(p) => p.can_pass(terrain, light),
            PolicyState::Bicycle(p) => p.can_pass(terrain, light),
            PolicyState::Human(p) => p.can_pass(terrain, light),
        }
    }
}

/// Terrain usable by street vehicles (cars, taxis, trucks)
pub(crate) fn is_roadway(terrain: Terrain) -> bool {
    matches!(terrain, Terrain::Street | Terrain::Light | Terrain::Crosswalk)
}

/// Keep heading if possible, else turn left, else right, else turn around
pub(crate) fn follow_road(
    facing: Direction,
    neighbors: &Neighbors,
    valid: impl Fn(Terrain) -> bool,
) -> Direction {
    [facing, facing.left(), facing.right()]
        .into_iter()
        .find(|&direction| valid(neighbors[direction]))
        .unwrap_or_else(|| facing.reverse())
}
