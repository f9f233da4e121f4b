//! Fundamental geometric and simulation types.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// 3D position in scene space (arbitrary world units, Cartesian).
/// x = East, y = North (forward at zero heading), z = Up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Orientation as heading/pitch in degrees (rotation about +Z, then tilt).
/// Roll is never used by any controller and is omitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    /// Heading in degrees, counterclockwise about +Z. 0 = facing +Y.
    pub heading: f64,
    /// Pitch in degrees. Positive tilts the nose up.
    pub pitch: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Distance to another position (3D).
    pub fn range_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Linear interpolation between two positions, t in [0, 1].
    pub fn lerp(a: &Position, b: &Position, t: f64) -> Position {
        Position {
            x: a.x + (b.x - a.x) * t,
            y: a.y + (b.y - a.y) * t,
            z: a.z + (b.z - a.z) * t,
        }
    }

    pub fn to_dvec3(self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }
}

impl From<DVec3> for Position {
    fn from(v: DVec3) -> Self {
        Position::new(v.x, v.y, v.z)
    }
}

impl Orientation {
    /// Unit forward vector for this heading/pitch.
    pub fn forward(&self) -> DVec3 {
        let h = self.heading.to_radians();
        let p = self.pitch.to_radians();
        DVec3::new(-h.sin() * p.cos(), h.cos() * p.cos(), p.sin())
    }

    /// Unit left vector (heading only; strafing ignores pitch).
    pub fn left(&self) -> DVec3 {
        let h = self.heading.to_radians();
        DVec3::new(-h.cos(), -h.sin(), 0.0)
    }

    /// Unit right vector (heading only).
    pub fn right(&self) -> DVec3 {
        let h = self.heading.to_radians();
        DVec3::new(h.cos(), h.sin(), 0.0)
    }

    /// Point this orientation at a target position.
    pub fn face(&mut self, from: &Position, target: &Position) {
        let dx = target.x - from.x;
        let dy = target.y - from.y;
        let dz = target.z - from.z;
        let flat = (dx * dx + dy * dy).sqrt();
        if flat < f64::EPSILON && dz.abs() < f64::EPSILON {
            return;
        }
        self.heading = (-dx).atan2(dy).to_degrees();
        self.pitch = dz.atan2(flat).to_degrees();
    }
}

impl SimTime {
    /// Seconds per tick at the fixed tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
