//! Vehicle state and the life cycle shared by every kind
//!
//! A vehicle is alive while its life counter is zero. A fatal collision sets
//! the counter to the kind's death time; each `poke` counts it down, and the
//! vehicle comes back facing a random direction when it reaches zero again.

use std::collections::HashMap;

use anyhow::Result;
use log::{debug, trace};

use super::direction::{Direction, DirectionSource};
use super::neighbors::Neighbors;
use super::policy::{Policy, PolicyState};
use super::types::{
    Light, Terrain, ATV_DEATH_TIME, BICYCLE_DEATH_TIME, CAR_DEATH_TIME, HUMAN_DEATH_TIME,
    TAXI_DEATH_TIME, TRUCK_DEATH_TIME,
};

/// Kind of vehicle in the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleKind {
    Car,
    /// Car that runs red crosswalks after waiting a while
    Taxi,
    /// Roams randomly, ignores lights, cannot die
    Truck,
    /// Off-road, goes anywhere but walls
    Atv,
    Bicycle,
    /// Pedestrian
    Human,
}

impl VehicleKind {
    pub const ALL: [VehicleKind; 6] = [
        VehicleKind::Car,
        VehicleKind::Taxi,
        VehicleKind::Truck,
        VehicleKind::Atv,
        VehicleKind::Bicycle,
        VehicleKind::Human,
    ];

    /// Ticks a vehicle of this kind stays dead after a fatal collision
    pub fn death_time(self) -> u32 {
        match self {
            VehicleKind::Car => CAR_DEATH_TIME,
            VehicleKind::Taxi => TAXI_DEATH_TIME,
            VehicleKind::Truck => TRUCK_DEATH_TIME,
            VehicleKind::Atv => ATV_DEATH_TIME,
            VehicleKind::Bicycle => BICYCLE_DEATH_TIME,
            VehicleKind::Human => HUMAN_DEATH_TIME,
        }
    }

    /// Lowercase name, used for asset names
    pub fn name(self) -> &'static str {
        match self {
            VehicleKind::Car => "car",
            VehicleKind::Taxi => "taxi",
            VehicleKind::Truck => "truck",
            VehicleKind::Atv => "atv",
            VehicleKind::Bicycle => "bicycle",
            VehicleKind::Human => "human",
        }
    }
}

/// Where and how a vehicle started, restored by [`Vehicle::reset`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Spawn {
    x: i32,
    y: i32,
    direction: Direction,
}

/// A vehicle on the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    kind: VehicleKind,
    policy: PolicyState,
    x: i32,
    y: i32,
    direction: Direction,
    /// 0 while alive, otherwise ticks left until respawn
    life: u32,
    death_time: u32,
    spawn: Spawn,
}

impl Vehicle {
    pub fn new(kind: VehicleKind, x: i32, y: i32, direction: Direction) -> Self {
        Self {
            kind,
            policy: PolicyState::for_kind(kind),
            x,
            y,
            direction,
            life: 0,
            death_time: kind.death_time(),
            spawn: Spawn { x, y, direction },
        }
    }

    pub fn kind(&self) -> VehicleKind {
        self.kind
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_x(&mut self, x: i32) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: i32) {
        self.y = y;
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn death_time(&self) -> u32 {
        self.death_time
    }

    pub fn is_alive(&self) -> bool {
        self.life == 0
    }

    /// Ticks left before a dead vehicle respawns; 0 while alive
    pub fn ticks_until_respawn(&self) -> u32 {
        self.life
    }

    /// Read-only view of the kind-specific policy state
    pub fn policy(&self) -> &PolicyState {
        &self.policy
    }

    /// Pick the direction this vehicle wants to head next
    pub fn choose_direction<S: DirectionSource + ?Sized>(
        &self,
        neighbors: &Neighbors,
        source: &mut S,
    ) -> Direction {
        let choice = self.policy.choose_direction(self.direction, neighbors, source);
        trace!(
            "{} at ({}, {}) facing {:?} chose {:?}",
            self.kind.name(),
            self.x,
            self.y,
            self.direction,
            choice
        );
        choice
    }

    /// Like [`Vehicle::choose_direction`], for callers holding a keyed map
    ///
    /// Errors if the map does not cover all four directions.
    pub fn choose_direction_from_map<S: DirectionSource + ?Sized>(
        &self,
        neighbors: &HashMap<Direction, Terrain>,
        source: &mut S,
    ) -> Result<Direction> {
        let neighbors = Neighbors::from_map(neighbors)?;
        Ok(self.choose_direction(&neighbors, source))
    }

    /// Whether this vehicle may enter a cell with the given terrain and light
    ///
    /// Takes `&mut self` because a taxi tracks how long it has waited at a
    /// red crosswalk; every other kind answers purely from the arguments.
    pub fn can_pass(&mut self, terrain: Terrain, light: Light) -> bool {
        self.policy.can_pass(terrain, light)
    }

    /// React to sharing a cell with `other`
    ///
    /// A live vehicle dies when its own death time is strictly greater than
    /// the other's. Dead vehicles are unaffected.
    pub fn collide(&mut self, other: &Vehicle) {
        if self.life == 0 && self.death_time > other.death_time {
            self.life = self.death_time;
            debug!(
                "{} at ({}, {}) killed by {}, respawning in {} ticks",
                self.kind.name(),
                self.x,
                self.y,
                other.kind.name(),
                self.life
            );
        }
    }

    /// Advance the death timer by one tick
    ///
    /// No-op while alive. A vehicle whose timer runs out this tick comes back
    /// facing a direction drawn from `source`.
    pub fn poke<S: DirectionSource + ?Sized>(&mut self, source: &mut S) {
        if self.life == 0 {
            return;
        }
        self.life -= 1;
        if self.life == 0 {
            self.direction = source.random_direction();
            debug!(
                "{} at ({}, {}) respawned facing {:?}",
                self.kind.name(),
                self.x,
                self.y,
                self.direction
            );
        }
    }

    /// Return to the spawn cell and heading, alive
    pub fn reset(&mut self) {
        self.x = self.spawn.x;
        self.y = self.spawn.y;
        self.direction = self.spawn.direction;
        self.life = 0;
        self.policy = PolicyState::for_kind(self.kind);
    }

    /// Sprite name for the renderer, e.g. `taxi.gif` or `taxi_dead.gif`
    pub fn image_file_name(&self) -> String {
        if self.is_alive() {
            format!("{}.gif", self.kind.name())
        } else {
            format!("{}_dead.gif", self.kind.name())
        }
    }
}
