//! Snapshot system: queries the ECS world and builds a complete
//! SceneSnapshot. Read-only — it never modifies the world.

use hecs::{Entity, World};

use nova_core::components::{Name, Scale, ShipState};
use nova_core::enums::{GamePhase, Kind};
use nova_core::events::SimEvent;
use nova_core::state::{Diagnostics, EntityView, SceneSnapshot, ShipView};
use nova_core::types::{Orientation, Position, SimTime};

use crate::registry::MissileRegistry;
use crate::scheduler::{Scheduler, TaskKind};

/// Build a complete SceneSnapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    scheduler: &Scheduler,
    registry: &MissileRegistry,
    diagnostics: Diagnostics,
    events: Vec<SimEvent>,
    ship: Entity,
) -> SceneSnapshot {
    SceneSnapshot {
        time: *time,
        phase,
        entities: build_entities(world),
        ship: build_ship(world, ship, scheduler),
        missiles: registry.intervals.keys().cloned().collect(),
        explosions: build_explosions(scheduler),
        events,
        diagnostics,
    }
}

/// Every placed entity, sorted by name.
fn build_entities(world: &World) -> Vec<EntityView> {
    let mut query = world.query::<(&Name, &Kind, &Position, &Orientation, &Scale)>();
    let mut entities: Vec<EntityView> = query
        .iter()
        .map(|(_, (name, kind, position, orientation, scale))| EntityView {
            name: name.0.clone(),
            kind: *kind,
            position: *position,
            heading: orientation.heading,
            pitch: orientation.pitch,
            scale: scale.0,
        })
        .collect();
    entities.sort_by(|a, b| a.name.cmp(&b.name));
    entities
}

fn build_ship(world: &World, ship: Entity, scheduler: &Scheduler) -> ShipView {
    let position = world
        .get::<&Position>(ship)
        .map(|pos| *pos)
        .unwrap_or_default();
    let orientation = world
        .get::<&Orientation>(ship)
        .map(|o| *o)
        .unwrap_or_default();
    let missile_bay = world
        .get::<&ShipState>(ship)
        .map(|state| state.missile_bay)
        .unwrap_or(0);

    ShipView {
        position,
        heading: orientation.heading,
        pitch: orientation.pitch,
        missile_bay,
        reload_pending: scheduler.has_task("reload"),
    }
}

/// Tags of explosion ramps currently scheduled.
fn build_explosions(scheduler: &Scheduler) -> Vec<String> {
    let mut tags: Vec<String> = scheduler
        .iter()
        .filter(|task| matches!(task.kind, TaskKind::Explosion { .. }))
        .map(|task| task.name.clone())
        .collect();
    tags.sort();
    tags
}
