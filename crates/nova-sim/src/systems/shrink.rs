//! Shrink task — scales a hit planet or station down to nothing, then
//! detaches it.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use nova_core::components::{Collider, ColliderShape, Name, Scale};
use nova_core::constants::{SHRINK_SPIN_MAX_DEG, SHRINK_WINDOW_SECS};
use nova_core::enums::Kind;
use nova_core::events::SimEvent;
use nova_core::state::Diagnostics;
use nova_core::types::Orientation;

use crate::scheduler::TaskStatus;

/// One shrink tick. Scale decreases by a fixed step with a random spin
/// until the window elapses or the body vanishes, then the node is
/// detached and the task ends.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    target: Entity,
    scale_step: f64,
    elapsed_secs: f64,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<SimEvent>,
    despawn_buffer: &mut Vec<Entity>,
    diagnostics: &mut Diagnostics,
) -> TaskStatus {
    if !world.contains(target) {
        // Destroyed by something else while shrinking.
        diagnostics.detach_misses += 1;
        return TaskStatus::Done;
    }

    let radius = world
        .get::<&Collider>(target)
        .ok()
        .map(|collider| match collider.shape {
            ColliderShape::Sphere { radius, .. } => radius,
            ColliderShape::InverseSphere { radius, .. } => radius,
            ColliderShape::Capsule { radius, .. } => radius,
        })
        .unwrap_or(0.0);

    let expired = elapsed_secs >= SHRINK_WINDOW_SECS;
    let mut vanished = radius <= 0.0;

    if !expired && !vanished {
        if let Ok(mut scale) = world.get::<&mut Scale>(target) {
            scale.0 -= scale_step;
            if scale.0 <= 0.0 {
                scale.0 = 0.0;
                vanished = true;
            }
        }
        if !vanished {
            if let Ok(mut orientation) = world.get::<&mut Orientation>(target) {
                orientation.heading += rng.gen_range(0.0..SHRINK_SPIN_MAX_DEG);
            }
            return TaskStatus::Continue;
        }
    }

    detach(world, target, events, despawn_buffer);
    TaskStatus::Done
}

fn detach(
    world: &World,
    target: Entity,
    events: &mut Vec<SimEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    let name = world
        .get::<&Name>(target)
        .map(|name| name.0.clone())
        .unwrap_or_default();
    let kind = world
        .get::<&Kind>(target)
        .map(|kind| *kind)
        .unwrap_or(Kind::Planet);
    despawn_buffer.push(target);
    events.push(SimEvent::EntityDestroyed { name, kind });
}
