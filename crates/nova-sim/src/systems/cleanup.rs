//! Missile cleanup task — detaches missiles whose flight interval has
//! finished and removes their registry entries.
//!
//! Runs every frame after movement. Tags are snapshotted before
//! removal, so every finished missile drains in the same tick without
//! mutating the registry mid-iteration.

use hecs::Entity;

use crate::registry::MissileRegistry;
use crate::scheduler::TaskStatus;

pub fn run(
    registry: &mut MissileRegistry,
    event_colliders: &mut Vec<Entity>,
    despawn_buffer: &mut Vec<Entity>,
) -> TaskStatus {
    for tag in registry.finished_tags() {
        if let Some(entry) = registry.remove(&tag) {
            event_colliders.retain(|entity| *entity != entry.collider);
            despawn_buffer.push(entry.collider);
            log::debug!("missile '{tag}' expired");
        }
    }
    TaskStatus::Continue
}
