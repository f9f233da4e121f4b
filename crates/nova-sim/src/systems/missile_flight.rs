//! Missile flight system — advances each live missile's motion
//! interval and records the segment travelled for fluid collision.

use hecs::{Entity, World};

use nova_core::components::{Collider, ColliderShape, Scale};
use nova_core::types::Position;

use crate::registry::MissileRegistry;

/// Segment a missile travelled this tick, with its world radius.
#[derive(Debug, Clone)]
pub struct MissileSweep {
    pub entity: Entity,
    pub tag: String,
    pub from: Position,
    pub to: Position,
    pub radius: f64,
}

/// Advance every playing interval and move its missile entity.
pub fn run(world: &mut World, registry: &mut MissileRegistry, dt: f64) -> Vec<MissileSweep> {
    let mut sweeps = Vec::with_capacity(registry.len());

    for (tag, interval) in registry.intervals.iter_mut() {
        if !interval.is_playing() {
            continue;
        }
        let from = interval.sample();
        interval.advance(dt);
        let to = interval.sample();

        let entity = match registry.collider_nodes.get(tag) {
            Some(entity) => *entity,
            None => continue,
        };
        if let Ok(mut position) = world.get::<&mut Position>(entity) {
            *position = to;
        }

        let local_radius = match registry.collision_solids.get(tag) {
            Some(ColliderShape::Sphere { radius, .. }) => *radius,
            _ => continue,
        };
        let scale = world.get::<&Scale>(entity).map(|s| s.0).unwrap_or(1.0);

        // Non-fluid colliders only test the frame endpoint.
        let fluid = world
            .get::<&Collider>(entity)
            .map(|collider| collider.fluid)
            .unwrap_or(false);

        sweeps.push(MissileSweep {
            entity,
            tag: tag.clone(),
            from: if fluid { from } else { to },
            to,
            radius: local_radius * scale,
        });
    }

    sweeps
}
