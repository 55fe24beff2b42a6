//! Core types for the grid traffic simulation
//!
//! Closed vocabularies for cells and signals, plus the per-kind constants.

/// Surface type of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terrain {
    Street,
    /// Street cell controlled by a traffic light
    Light,
    /// Street cell shared with pedestrians
    Crosswalk,
    Trail,
    Grass,
    /// Impassable; also used for anything outside the grid
    Wall,
}

impl Terrain {
    pub const ALL: [Terrain; 6] = [
        Terrain::Street,
        Terrain::Light,
        Terrain::Crosswalk,
        Terrain::Trail,
        Terrain::Grass,
        Terrain::Wall,
    ];
}

/// Signal state for LIGHT and CROSSWALK cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Light {
    Red,
    Yellow,
    Green,
}

impl Light {
    pub const ALL: [Light; 3] = [Light::Red, Light::Yellow, Light::Green];
}

/// A wrapper type for vehicle IDs inside a [`super::SimWorld`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VehicleId(pub usize);

/// Ticks a car stays dead after a fatal collision
pub const CAR_DEATH_TIME: u32 = 15;

/// Ticks a taxi stays dead after a fatal collision
pub const TAXI_DEATH_TIME: u32 = 15;

/// Trucks never die
pub const TRUCK_DEATH_TIME: u32 = 0;

/// Ticks an ATV stays dead after a fatal collision
pub const ATV_DEATH_TIME: u32 = 25;

/// Ticks a bicycle stays dead after a fatal collision
pub const BICYCLE_DEATH_TIME: u32 = 35;

/// Ticks a human stays dead after a fatal collision
pub const HUMAN_DEATH_TIME: u32 = 45;

/// Red-crosswalk queries a taxi sits through before it runs the light
pub const TAXI_CROSSWALK_WAIT: u32 = 3;
