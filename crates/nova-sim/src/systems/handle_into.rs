//! Collision response — turns "into" contact events into entity
//! lifecycle changes.
//!
//! Dispatch goes by the victim's Kind tag: defenders are detached and
//! explode at the contact point, planets and the station shrink away,
//! and anything else just ends the shooter's flight. Duplicate
//! processing of the same victim or shooter in one frame is tolerated;
//! every tolerated miss is counted.

use hecs::{Entity, World};

use nova_core::constants::{
    DEFAULT_TASK_PRIORITY, PLANET_SHRINK_STEP, STATION_SHRINK_STEP,
};
use nova_core::components::ShipState;
use nova_core::enums::Kind;
use nova_core::events::SimEvent;
use nova_core::state::Diagnostics;

use crate::registry::MissileRegistry;
use crate::scheduler::{Scheduler, Task, TaskKind};
use crate::systems::collision::CollisionEvent;

/// Consume this frame's collision events in arrival order.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    collisions: Vec<CollisionEvent>,
    registry: &mut MissileRegistry,
    scheduler: &mut Scheduler,
    events: &mut Vec<SimEvent>,
    despawn_buffer: &mut Vec<Entity>,
    diagnostics: &mut Diagnostics,
    ship: Entity,
) {
    for collision in collisions {
        events.push(SimEvent::MissileHit {
            missile: collision.from_name.clone(),
            victim: collision.into_name.clone(),
            victim_kind: collision.into_kind,
            contact: collision.contact,
        });

        finish_shooter(registry, &collision.from_name, diagnostics);

        match collision.into_kind {
            Kind::Drone | Kind::Orbiter | Kind::Wanderer => {
                destroy_defender(world, &collision, events, despawn_buffer, diagnostics);
                start_explosion(world, scheduler, &collision, ship);
            }
            Kind::Planet => {
                schedule_shrink(scheduler, &collision, PLANET_SHRINK_STEP, events);
            }
            Kind::SpaceStation => {
                schedule_shrink(scheduler, &collision, STATION_SHRINK_STEP, events);
            }
            _ => {}
        }
    }
}

/// End the shooter's flight interval. A missing tag means this missile
/// already hit something earlier in the frame.
fn finish_shooter(registry: &mut MissileRegistry, tag: &str, diagnostics: &mut Diagnostics) {
    if !registry.finish_interval(tag) {
        diagnostics.interval_finish_misses += 1;
        log::warn!("finish on untracked missile '{tag}'");
    }
}

fn destroy_defender(
    world: &mut World,
    collision: &CollisionEvent,
    events: &mut Vec<SimEvent>,
    despawn_buffer: &mut Vec<Entity>,
    diagnostics: &mut Diagnostics,
) {
    if world.contains(collision.into) {
        despawn_buffer.push(collision.into);
        events.push(SimEvent::EntityDestroyed {
            name: collision.into_name.clone(),
            kind: collision.into_kind,
        });
    } else {
        diagnostics.detach_misses += 1;
        log::debug!("victim '{}' already detached", collision.into_name);
    }
}

/// Start a uniquely tagged particle ramp at the contact point.
fn start_explosion(world: &mut World, scheduler: &mut Scheduler, collision: &CollisionEvent, ship: Entity) {
    let count = match world.get::<&mut ShipState>(ship) {
        Ok(mut state) => {
            state.explode_count += 1;
            state.explode_count
        }
        Err(_) => return,
    };
    let tag = format!("particles-{count}");
    scheduler.add(Task::new(
        &tag,
        DEFAULT_TASK_PRIORITY,
        TaskKind::Explosion {
            position: collision.contact,
            started: false,
        },
    ));
}

/// One shrink task per victim; repeat hits while it runs are no-ops.
fn schedule_shrink(
    scheduler: &mut Scheduler,
    collision: &CollisionEvent,
    scale_step: f64,
    events: &mut Vec<SimEvent>,
) {
    let name = format!("shrink-{}", collision.into_name);
    if scheduler.has_task(&name) {
        return;
    }
    scheduler.add(Task::new(
        &name,
        DEFAULT_TASK_PRIORITY,
        TaskKind::Shrink {
            target: collision.into,
            scale_step,
        },
    ));
    events.push(SimEvent::ShrinkStarted {
        name: collision.into_name.clone(),
    });
}
