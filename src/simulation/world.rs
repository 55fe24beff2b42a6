//! Reference tick driver
//!
//! Runs the per-tick loop over a set of vehicles against any grid that can
//! answer terrain and light queries. Building the grid and cycling its lights
//! are the grid's business.

use log::{info, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::collision::resolve_collision;
use super::direction::Direction;
use super::neighbors::Neighbors;
use super::types::{Light, Terrain, VehicleId};
use super::vehicle::Vehicle;

/// Read-only view of the map a [`SimWorld`] runs on
pub trait TrafficGrid {
    /// Terrain at a cell. Cells outside the map must report [`Terrain::Wall`].
    fn terrain(&self, x: i32, y: i32) -> Terrain;

    /// Current signal at a cell; only meaningful for LIGHT and CROSSWALK cells
    fn light(&self, x: i32, y: i32) -> Light;

    /// Terrain around a cell, one entry per direction
    fn neighbors(&self, x: i32, y: i32) -> Neighbors {
        Neighbors::from_fn(|direction| self.terrain(x + direction.dx(), y + direction.dy()))
    }
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Live vehicles that entered a new cell
    pub moved: usize,
    /// Live vehicles refused entry to the cell they chose
    pub stalled: usize,
    /// Pairs of live vehicles found sharing a cell
    pub collisions: usize,
    pub deaths: usize,
    pub respawns: usize,
}

/// Running totals over the life of a world
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimStats {
    pub ticks: u64,
    pub moves: u64,
    pub stalls: u64,
    pub collisions: u64,
    pub deaths: u64,
    pub respawns: u64,
}

impl SimStats {
    fn record(&mut self, report: &TickReport) {
        self.ticks += 1;
        self.moves += report.moved as u64;
        self.stalls += report.stalled as u64;
        self.collisions += report.collisions as u64;
        self.deaths += report.deaths as u64;
        self.respawns += report.respawns as u64;
    }
}

/// The set of vehicles being simulated
pub struct SimWorld {
    vehicles: Vec<Vehicle>,

    /// Optional seeded RNG for reproducible simulations
    rng: Option<StdRng>,

    pub stats: SimStats,
}

impl Default for SimWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl SimWorld {
    fn new_internal(rng: Option<StdRng>) -> Self {
        Self {
            vehicles: Vec::new(),
            rng,
            stats: SimStats::default(),
        }
    }

    pub fn new() -> Self {
        Self::new_internal(None)
    }

    /// Create a new SimWorld with a seeded RNG for reproducible simulations
    pub fn new_with_seed(seed: u64) -> Self {
        Self::new_internal(Some(StdRng::seed_from_u64(seed)))
    }

    /// Add a vehicle; vehicles act in the order they were added
    pub fn add_vehicle(&mut self, vehicle: Vehicle) -> VehicleId {
        let id = VehicleId(self.vehicles.len());
        self.vehicles.push(vehicle);
        id
    }

    pub fn vehicle(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.get(id.0)
    }

    pub fn vehicle_mut(&mut self, id: VehicleId) -> Option<&mut Vehicle> {
        self.vehicles.get_mut(id.0)
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn alive_count(&self) -> usize {
        self.vehicles.iter().filter(|v| v.is_alive()).count()
    }

    /// Draw a direction, using the seeded RNG if available
    fn choose_for(&mut self, index: usize, neighbors: &Neighbors) -> Direction {
        let vehicle = &self.vehicles[index];
        match &mut self.rng {
            Some(rng) => vehicle.choose_direction(neighbors, rng),
            None => vehicle.choose_direction(neighbors, &mut rand::rng()),
        }
    }

    /// Advance every vehicle by one tick
    pub fn tick(&mut self, grid: &impl TrafficGrid) -> TickReport {
        let mut report = TickReport::default();

        for index in 0..self.vehicles.len() {
            if !self.vehicles[index].is_alive() {
                continue;
            }

            let (x, y) = self.vehicles[index].position();
            let neighbors = grid.neighbors(x, y);
            let direction = self.choose_for(index, &neighbors);

            let (target_x, target_y) = (x + direction.dx(), y + direction.dy());
            let vehicle = &mut self.vehicles[index];
            vehicle.set_direction(direction);
            if vehicle.can_pass(neighbors[direction], grid.light(target_x, target_y)) {
                vehicle.set_x(target_x);
                vehicle.set_y(target_y);
                report.moved += 1;
            } else {
                trace!(
                    "{} at ({}, {}) held before {:?}",
                    vehicle.kind().name(),
                    x,
                    y,
                    neighbors[direction]
                );
                report.stalled += 1;
                continue;
            }

            self.collide_with_occupants(index, &mut report);
        }

        let SimWorld { vehicles, rng, .. } = self;
        for vehicle in vehicles.iter_mut() {
            let was_alive = vehicle.is_alive();
            match rng {
                Some(rng) => vehicle.poke(rng),
                None => vehicle.poke(&mut rand::rng()),
            }
            if !was_alive && vehicle.is_alive() {
                report.respawns += 1;
            }
        }

        self.stats.record(&report);
        report
    }

    /// Resolve collisions between a vehicle that just moved and every other
    /// live vehicle on its new cell
    fn collide_with_occupants(&mut self, index: usize, report: &mut TickReport) {
        for other in 0..self.vehicles.len() {
            if other == index {
                continue;
            }
            let (mover, occupant) = pair_mut(&mut self.vehicles, index, other);
            if !mover.is_alive() {
                break;
            }
            if occupant.is_alive() && mover.position() == occupant.position() {
                let outcome = resolve_collision(mover, occupant);
                report.collisions += 1;
                report.deaths += outcome.deaths();
            }
        }
    }

    /// Send every vehicle back to its spawn point
    pub fn reset_all(&mut self) {
        for vehicle in &mut self.vehicles {
            vehicle.reset();
        }
    }

    /// Log the running totals
    pub fn log_summary(&self) {
        info!("=== SIMULATION SUMMARY ===");
        info!("Ticks: {}", self.stats.ticks);
        info!(
            "Vehicles alive: {}/{}",
            self.alive_count(),
            self.vehicles.len()
        );
        info!("Moves: {}", self.stats.moves);
        info!("Stalls: {}", self.stats.stalls);
        info!("Collisions: {}", self.stats.collisions);
        info!("Deaths: {}", self.stats.deaths);
        info!("Respawns: {}", self.stats.respawns);
    }
}

/// Mutable references to two distinct elements of a slice
fn pair_mut<T>(items: &mut [T], first: usize, second: usize) -> (&mut T, &mut T) {
    if first < second {
        let (head, tail) = items.split_at_mut(second);
        (&mut head[first], &mut tail[0])
    } else {
        let (head, tail) = items.split_at_mut(first);
        (&mut tail[0], &mut head[second])
    }
}
