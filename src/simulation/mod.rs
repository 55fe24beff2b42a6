//! Standalone grid traffic model
//!
//! Vehicles of six kinds move over a grid of terrain cells, each deciding
//! where to head and whether it may enter a cell under the current signal.
//! The surrounding loop owns the grid, the lights and the clock, and calls
//! into this module once per tick.

mod collision;
mod direction;
mod neighbors;
mod policy;
mod types;
mod vehicle;
mod world;

pub use collision::{resolve_collision, CollisionOutcome};
pub use direction::{Direction, DirectionSource};
pub use neighbors::Neighbors;
pub use policy::{Atv, Bicycle, Car, Human, Policy, PolicyState, Taxi, Truck};
pub use types::{
    Light, Terrain, VehicleId, ATV_DEATH_TIME, BICYCLE_DEATH_TIME, CAR_DEATH_TIME,
    HUMAN_DEATH_TIME, TAXI_CROSSWALK_WAIT, TAXI_DEATH_TIME, TRUCK_DEATH_TIME,
};
pub use vehicle::{Vehicle, VehicleKind};
pub use world::{SimStats, SimWorld, TickReport, TrafficGrid};
