//! Firing control — single shots, barrages, and the reload task.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use glam::DVec3;

use nova_core::components::{
    Collider, ColliderShape, ModelHandle, MotionInterval, Name, Scale, ShipState,
};
use nova_core::constants::*;
use nova_core::enums::Kind;
use nova_core::events::SimEvent;
use nova_core::types::{Orientation, Position};

use crate::registry::MissileRegistry;
use crate::scheduler::{Scheduler, Task, TaskKind, TaskStatus};

/// Fire a single missile along the ship's forward vector, or schedule
/// a reload when the bay is empty.
pub fn fire(
    world: &mut World,
    registry: &mut MissileRegistry,
    scheduler: &mut Scheduler,
    event_colliders: &mut Vec<Entity>,
    events: &mut Vec<SimEvent>,
    missile_model: ModelHandle,
    ship: Entity,
) {
    let Some((ship_pos, aim)) = aim_solution(world, ship) else {
        return;
    };

    if !take_round(world, ship) {
        schedule_reload(scheduler);
        return;
    }

    let start = Position::from(ship_pos + aim * MISSILE_SPAWN_OFFSET);
    let end = Position::from(ship_pos + aim * MISSILE_DISTANCE);
    spawn_missile(
        world,
        registry,
        event_colliders,
        events,
        missile_model,
        start,
        end,
    );
}

/// Fire every remaining round in one call, each with a random spawn
/// jitter, draining the bay to zero.
#[allow(clippy::too_many_arguments)]
pub fn fire_barrage(
    world: &mut World,
    registry: &mut MissileRegistry,
    scheduler: &mut Scheduler,
    event_colliders: &mut Vec<Entity>,
    events: &mut Vec<SimEvent>,
    rng: &mut ChaCha8Rng,
    missile_model: ModelHandle,
    ship: Entity,
) {
    let Some((ship_pos, aim)) = aim_solution(world, ship) else {
        return;
    };

    if !has_rounds(world, ship) {
        schedule_reload(scheduler);
        return;
    }

    while take_round(world, ship) {
        let jitter = DVec3::new(
            rng.gen_range(-BARRAGE_JITTER_LATERAL..=BARRAGE_JITTER_LATERAL),
            rng.gen_range(-BARRAGE_JITTER_FORWARD..=BARRAGE_JITTER_FORWARD),
            rng.gen_range(-BARRAGE_JITTER_LATERAL..=BARRAGE_JITTER_LATERAL),
        );
        let start_vec = ship_pos + aim * MISSILE_SPAWN_OFFSET + jitter;
        let start = Position::from(start_vec);
        let end = Position::from(start_vec + aim * MISSILE_DISTANCE);
        spawn_missile(
            world,
            registry,
            event_colliders,
            events,
            missile_model,
            start,
            end,
        );
    }
}

/// Reload task body: once the cooldown elapses, refill the bay and
/// terminate; otherwise keep waiting.
pub fn run_reload(
    world: &mut World,
    ship: Entity,
    elapsed_secs: f64,
    events: &mut Vec<SimEvent>,
) -> TaskStatus {
    if elapsed_secs <= MISSILE_RELOAD_SECS {
        return TaskStatus::Continue;
    }
    if let Ok(mut state) = world.get::<&mut ShipState>(ship) {
        state.missile_bay = MISSILE_BAY_CAPACITY;
        events.push(SimEvent::BayReloaded {
            rounds: state.missile_bay,
        });
    }
    TaskStatus::Done
}

/// Ship position and normalized forward aim vector.
fn aim_solution(world: &World, ship: Entity) -> Option<(DVec3, DVec3)> {
    let position = world.get::<&Position>(ship).ok()?.to_dvec3();
    let aim = world.get::<&Orientation>(ship).ok()?.forward();
    Some((position, aim))
}

fn has_rounds(world: &World, ship: Entity) -> bool {
    world
        .get::<&ShipState>(ship)
        .map(|state| state.missile_bay > 0)
        .unwrap_or(false)
}

/// Decrement the bay; false when empty.
fn take_round(world: &mut World, ship: Entity) -> bool {
    match world.get::<&mut ShipState>(ship) {
        Ok(mut state) if state.missile_bay > 0 => {
            state.missile_bay -= 1;
            true
        }
        _ => false,
    }
}

/// At most one reload may be pending at a time.
fn schedule_reload(scheduler: &mut Scheduler) {
    if !scheduler.has_task("reload") {
        scheduler.add_later(
            0.0,
            Task::new("reload", DEFAULT_TASK_PRIORITY, TaskKind::Reload),
        );
    }
}

fn spawn_missile(
    world: &mut World,
    registry: &mut MissileRegistry,
    event_colliders: &mut Vec<Entity>,
    events: &mut Vec<SimEvent>,
    model: ModelHandle,
    start: Position,
    end: Position,
) {
    let tag = registry.next_tag();
    let shape = ColliderShape::Sphere {
        center: Position::default(),
        radius: MISSILE_COLLIDER_RADIUS,
    };
    let entity = world.spawn((
        Name(tag.clone()),
        Kind::Missile,
        start,
        Orientation::default(),
        Scale(MISSILE_SCALE),
        Collider { shape, fluid: true },
    ));

    let interval = MotionInterval::new(start, end, MISSILE_FLIGHT_SECS);
    registry.insert(&tag, model, entity, shape, interval);
    event_colliders.push(entity);
    events.push(SimEvent::MissileFired { tag });
    log::debug!("fire torpedo #{}", registry.missile_count);
}
