//! Grid Traffic Library
//!
//! Per-vehicle decision and interaction model for agents moving over a grid
//! of terrain cells under traffic lights and crosswalks.

pub mod simulation;
