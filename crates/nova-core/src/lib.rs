//! Core types and definitions for the NOVA simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, events, state snapshots, key bindings, and
//! constants. It has no dependency on the ECS runtime or the frame loop.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod input;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
