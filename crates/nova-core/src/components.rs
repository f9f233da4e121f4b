//! ECS components for hecs entities.
//!
//! Components are plain data structs with no behavior beyond small
//! accessors. Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Unique entity name ("Planet3", "Missile7", "Hero").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name(pub String);

/// Uniform scale applied to the model and its collision shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale(pub f64);

/// Opaque model handle issued by the asset catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelHandle(pub u32);

/// Opaque texture handle issued by the asset catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureHandle(pub u32);

/// Collision solid in entity-local units. World dimensions are the
/// local ones multiplied by the entity's `Scale`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ColliderShape {
    Sphere {
        center: Position,
        radius: f64,
    },
    /// Collides when the other shape reaches *outside* the radius.
    InverseSphere {
        center: Position,
        radius: f64,
    },
    /// Swept sphere between two endpoints.
    Capsule {
        a: Position,
        b: Position,
        radius: f64,
    },
}

/// Attaches one collision solid to an entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collider {
    pub shape: ColliderShape,
    /// Fluid shapes are tested along the segment travelled between
    /// frame samples, not just at the endpoint.
    pub fluid: bool,
}

/// Player ship combat state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipState {
    /// Rounds in the missile bay, 0..=6.
    pub missile_bay: u8,
    /// Monotonic counter naming explosion effect instances.
    pub explode_count: u32,
}

/// A time-bounded position animation between two poses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionInterval {
    pub start: Position,
    pub end: Position,
    pub duration_secs: f64,
    pub elapsed_secs: f64,
    playing: bool,
}

impl MotionInterval {
    /// Start a new interval; it is playing immediately.
    pub fn new(start: Position, end: Position, duration_secs: f64) -> Self {
        Self {
            start,
            end,
            duration_secs,
            elapsed_secs: 0.0,
            playing: true,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Position at the current elapsed time.
    pub fn sample(&self) -> Position {
        if self.duration_secs <= 0.0 {
            return self.end;
        }
        let t = (self.elapsed_secs / self.duration_secs).clamp(0.0, 1.0);
        Position::lerp(&self.start, &self.end, t)
    }

    /// Advance by `dt` seconds; stops playing once the duration elapses.
    pub fn advance(&mut self, dt: f64) {
        if !self.playing {
            return;
        }
        self.elapsed_secs += dt;
        if self.elapsed_secs >= self.duration_secs {
            self.elapsed_secs = self.duration_secs;
            self.playing = false;
        }
    }

    /// Jump to the end pose and stop playing.
    pub fn finish(&mut self) {
        self.elapsed_secs = self.duration_secs;
        self.playing = false;
    }
}
