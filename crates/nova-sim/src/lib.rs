//! Simulation engine for NOVA.
//!
//! Owns the hecs ECS world and the cooperative task scheduler, advances
//! the scene one tick at a time, and produces SceneSnapshots for the
//! frame loop. Completely headless; deterministic under a fixed seed.

pub mod assets;
pub mod engine;
pub mod paths;
pub mod registry;
pub mod scheduler;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use nova_core as core;
