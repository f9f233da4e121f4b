//! Simulation engine — the core of the demo.
//!
//! `SimulationEngine` owns the hecs world, the task scheduler, and the
//! missile registry, processes player commands, runs all systems in a
//! fixed order, and produces `SceneSnapshot`s. Completely headless,
//! enabling deterministic testing: the same seed always yields the
//! same tick-by-tick snapshots.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use nova_core::commands::PlayerCommand;
use nova_core::components::ModelHandle;
use nova_core::constants::{CLEANUP_TASK_PRIORITY, DT};
use nova_core::enums::GamePhase;
use nova_core::events::SimEvent;
use nova_core::state::{Diagnostics, SceneSnapshot};
use nova_core::types::SimTime;

use crate::assets::{AssetCatalog, AssetError};
use crate::registry::MissileRegistry;
use crate::scheduler::{Scheduler, Task, TaskKind, TaskStatus};
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    scheduler: Scheduler,
    registry: MissileRegistry,
    catalog: AssetCatalog,
    rng: ChaCha8Rng,
    time: SimTime,
    phase: GamePhase,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<SimEvent>,
    diagnostics: Diagnostics,
    /// Colliders registered with the event handler (live missiles).
    event_colliders: Vec<Entity>,
    /// Colliders registered with the push handler (the player ship).
    push_colliders: Vec<Entity>,
    ship: Entity,
    missile_model: ModelHandle,
}

impl SimulationEngine {
    /// Compose the scene and register the standing tasks. Fails when
    /// any asset path is rejected by the loader.
    pub fn new(config: SimConfig) -> Result<Self, AssetError> {
        let mut world = World::new();
        let mut catalog = AssetCatalog::new();
        let mut scheduler = Scheduler::new();
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

        let handles =
            world_setup::compose_scene(&mut world, &mut catalog, &mut scheduler, &mut rng)?;

        scheduler.add(Task::new(
            "check-missiles",
            CLEANUP_TASK_PRIORITY,
            TaskKind::MissileCleanup,
        ));

        Ok(Self {
            world,
            scheduler,
            registry: MissileRegistry::new(),
            catalog,
            rng,
            time: SimTime::default(),
            phase: GamePhase::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            diagnostics: Diagnostics::default(),
            event_colliders: Vec::new(),
            push_colliders: vec![handles.ship],
            ship: handles.ship,
            missile_model: handles.missile_model,
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the snapshot.
    pub fn tick(&mut self) -> SceneSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_tasks();

            // Interval-driven motion: missiles and wanderers.
            let sweeps = systems::missile_flight::run(&mut self.world, &mut self.registry, DT);
            systems::wander::run(&mut self.world, DT);

            // Traversal, then event consumption.
            let collisions = systems::collision::run(
                &mut self.world,
                &sweeps,
                &self.event_colliders,
                &self.push_colliders,
            );
            systems::handle_into::run(
                &mut self.world,
                collisions,
                &mut self.registry,
                &mut self.scheduler,
                &mut self.events,
                &mut self.despawn_buffer,
                &mut self.diagnostics,
                self.ship,
            );

            self.drain_despawns();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.scheduler,
            &self.registry,
            self.diagnostics,
            events,
            self.ship,
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn ship(&self) -> Entity {
        self.ship
    }

    /// Read-only access to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn registry(&self) -> &MissileRegistry {
        &self.registry
    }

    pub fn diagnostics(&self) -> Diagnostics {
        self.diagnostics
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::ControlDown { control } => {
                self.scheduler.add_default(
                    systems::ship_control::task_name(control),
                    TaskKind::Control { control },
                );
            }
            PlayerCommand::ControlUp { control } => {
                self.scheduler
                    .remove(systems::ship_control::task_name(control));
            }
            PlayerCommand::Fire => {
                systems::combat::fire(
                    &mut self.world,
                    &mut self.registry,
                    &mut self.scheduler,
                    &mut self.event_colliders,
                    &mut self.events,
                    self.missile_model,
                    self.ship,
                );
            }
            PlayerCommand::FireBarrage => {
                systems::combat::fire_barrage(
                    &mut self.world,
                    &mut self.registry,
                    &mut self.scheduler,
                    &mut self.event_colliders,
                    &mut self.events,
                    &mut self.rng,
                    self.missile_model,
                    self.ship,
                );
            }
            PlayerCommand::Quit => {
                log::info!("quit requested");
                self.phase = GamePhase::ShuttingDown;
            }
        }
    }

    /// Poll every scheduled task in (priority, insertion) order.
    fn run_tasks(&mut self) {
        let mut tasks = self.scheduler.take_tasks();
        let mut survivors = Vec::with_capacity(tasks.len());

        for mut task in tasks.drain(..) {
            if task.delay_secs > 0.0 {
                task.delay_secs = (task.delay_secs - DT).max(0.0);
                survivors.push(task);
                continue;
            }

            let status = run_task(
                &mut task,
                &mut self.world,
                &mut self.registry,
                &mut self.event_colliders,
                &mut self.despawn_buffer,
                &mut self.events,
                &mut self.diagnostics,
                &mut self.rng,
                self.ship,
            );
            task.elapsed_secs += DT;

            if status == TaskStatus::Continue {
                survivors.push(task);
            }
        }

        self.scheduler.restore(survivors);
    }

    /// Detach buffered entities. Detaching one that is already gone is
    /// tolerated and counted.
    fn drain_despawns(&mut self) {
        for entity in self.despawn_buffer.drain(..) {
            if self.world.despawn(entity).is_err() {
                self.diagnostics.detach_misses += 1;
            }
        }
    }
}

/// Dispatch one task poll to its controller system.
#[allow(clippy::too_many_arguments)]
fn run_task(
    task: &mut Task,
    world: &mut World,
    registry: &mut MissileRegistry,
    event_colliders: &mut Vec<Entity>,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<SimEvent>,
    diagnostics: &mut Diagnostics,
    rng: &mut ChaCha8Rng,
    ship: Entity,
) -> TaskStatus {
    let elapsed = task.elapsed_secs;
    match &mut task.kind {
        TaskKind::Control { control } => {
            systems::ship_control::run(world, ship, *control, DT);
            TaskStatus::Continue
        }
        TaskKind::Reload => systems::combat::run_reload(world, ship, elapsed, events),
        TaskKind::Shrink { target, scale_step } => systems::shrink::run(
            world,
            *target,
            *scale_step,
            elapsed,
            rng,
            events,
            despawn_buffer,
            diagnostics,
        ),
        TaskKind::Explosion { position, started } => {
            systems::explosion::run(&task.name, *position, started, elapsed, events)
        }
        TaskKind::Orbit { entity } => systems::orbit::run(world, *entity, elapsed, rng),
        TaskKind::MissileCleanup => {
            systems::cleanup::run(registry, event_colliders, despawn_buffer)
        }
    }
}

#[cfg(test)]
impl SimulationEngine {
    /// Feed a synthetic collision event straight to the response
    /// handler, as if the traversal had emitted it.
    pub fn inject_collision(&mut self, event: systems::collision::CollisionEvent) {
        systems::handle_into::run(
            &mut self.world,
            vec![event],
            &mut self.registry,
            &mut self.scheduler,
            &mut self.events,
            &mut self.despawn_buffer,
            &mut self.diagnostics,
            self.ship,
        );
        self.drain_despawns();
    }

    /// Spawn an extra drone for collision tests.
    pub fn spawn_test_drone(&mut self, name: &str, position: nova_core::types::Position) -> Entity {
        world_setup::spawn_drone(
            &mut self.world,
            &mut self.catalog,
            name,
            position,
            nova_core::constants::DRONE_SCALE,
        )
        .expect("drone spawn")
    }

    /// Spawn an extra planet for shrink tests.
    pub fn spawn_test_planet(
        &mut self,
        name: &str,
        position: nova_core::types::Position,
        scale: f64,
    ) -> Entity {
        world_setup::spawn_planet(
            &mut self.world,
            &mut self.catalog,
            name,
            nova_core::constants::PLANET_TEXTURES[0],
            position,
            scale,
        )
        .expect("planet spawn")
    }
}
