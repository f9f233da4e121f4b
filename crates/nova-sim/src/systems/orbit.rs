//! Orbit task — recomputes an orbiter's position from its path
//! function every tick and keeps it facing its stare target.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use nova_core::constants::{CLOUD_JUMP_TICKS, ORBIT_SEAM_BULGE};
use nova_core::enums::OrbitStyle;
use nova_core::types::{Orientation, Position};

use crate::paths;
use crate::scheduler::TaskStatus;

/// Movement rule for an orbiting defender.
#[derive(Debug, Clone)]
pub struct OrbitState {
    /// Object being orbited.
    pub center: Entity,
    pub radius: f64,
    pub style: OrbitStyle,
    /// Seam parameter advance per second of task time.
    pub speed: f64,
    /// Disambiguates seam curves between orbiters.
    pub orbit_index: u32,
    /// Ticks since the last cloud jump.
    pub cloud_clock: u32,
    /// Entity this orbiter always faces.
    pub stare_at: Entity,
}

/// One orbit tick. Ends the task when the orbiter is gone.
pub fn run(world: &mut World, entity: Entity, elapsed_secs: f64, rng: &mut ChaCha8Rng) -> TaskStatus {
    let (center, radius, style, speed, orbit_index, stare_at) = {
        let state = match world.get::<&OrbitState>(entity) {
            Ok(state) => state,
            Err(_) => return TaskStatus::Done,
        };
        (
            state.center,
            state.radius,
            state.style,
            state.speed,
            state.orbit_index,
            state.stare_at,
        )
    };

    let center_pos = match world.get::<&Position>(center) {
        Ok(pos) => pos.to_dvec3(),
        Err(_) => glam::DVec3::ZERO,
    };

    match style {
        OrbitStyle::Seam => {
            let direction =
                paths::baseball_seams(elapsed_secs * speed, orbit_index, ORBIT_SEAM_BULGE);
            if let Ok(mut position) = world.get::<&mut Position>(entity) {
                *position = Position::from(direction * radius + center_pos);
            }
        }
        OrbitStyle::Cloud => {
            let jump = {
                let mut state = match world.get::<&mut OrbitState>(entity) {
                    Ok(state) => state,
                    Err(_) => return TaskStatus::Done,
                };
                if state.cloud_clock < CLOUD_JUMP_TICKS {
                    state.cloud_clock += 1;
                    false
                } else {
                    state.cloud_clock = 0;
                    true
                }
            };
            if jump {
                let direction = paths::cloud(rng);
                if let Ok(mut position) = world.get::<&mut Position>(entity) {
                    *position = Position::from(direction * radius + center_pos);
                }
            }
        }
    }

    face_target(world, entity, stare_at);
    TaskStatus::Continue
}

fn face_target(world: &mut World, entity: Entity, target: Entity) {
    let target_pos = match world.get::<&Position>(target) {
        Ok(pos) => *pos,
        Err(_) => return,
    };
    let own_pos = match world.get::<&Position>(entity) {
        Ok(pos) => *pos,
        Err(_) => return,
    };
    if let Ok(mut orientation) = world.get::<&mut Orientation>(entity) {
        orientation.face(&own_pos, &target_pos);
    }
}
