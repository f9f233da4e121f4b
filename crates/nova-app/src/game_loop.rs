//! Frame loop — runs the simulation at the fixed tick rate and feeds
//! scripted key events through the binding table.

use std::time::{Duration, Instant};

use nova_core::constants::TICK_RATE;
use nova_core::enums::GamePhase;
use nova_core::events::SimEvent;
use nova_core::input::KeyMap;
use nova_sim::SimulationEngine;

use crate::script::KeyEvent;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Run until the script's quit binding fires.
pub fn run(mut engine: SimulationEngine, script: Vec<KeyEvent>) {
    let keymap = KeyMap::default();
    let mut cursor = 0;
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Deliver every key event due this tick.
        let tick = engine.time().tick;
        while cursor < script.len() && script[cursor].tick <= tick {
            let event = script[cursor];
            cursor += 1;
            if let Some(command) = keymap.command_for(event.key, event.pressed) {
                engine.queue_command(command);
            }
        }

        // 2. Advance one tick.
        let snapshot = engine.tick();
        narrate(&snapshot.events);

        if snapshot.phase == GamePhase::ShuttingDown {
            log::info!(
                "demo finished after {} ticks ({} missiles fired, diagnostics {:?})",
                snapshot.time.tick,
                engine.registry().missile_count,
                snapshot.diagnostics,
            );
            return;
        }

        // 3. Sleep until the next tick boundary.
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind, reset to avoid a catch-up spiral.
            next_tick_time = now;
        }
    }
}

fn narrate(events: &[SimEvent]) {
    for event in events {
        match event {
            SimEvent::MissileFired { tag } => log::info!("{tag} away"),
            SimEvent::MissileHit {
                missile, victim, ..
            } => log::info!("{missile} into {victim}"),
            SimEvent::EntityDestroyed { name, kind } => {
                log::info!("{name} ({kind:?}) destroyed")
            }
            SimEvent::ShrinkStarted { name } => log::info!("{name} is collapsing"),
            SimEvent::BayReloaded { rounds } => log::info!("bay reloaded ({rounds})"),
            SimEvent::EffectStarted { .. } | SimEvent::EffectEnded { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nova_core::commands::PlayerCommand;
    use nova_sim::SimConfig;

    #[test]
    fn test_tick_duration_constant() {
        let expected_nanos = 1_000_000_000u64 / 30;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }

    #[test]
    fn test_scripted_quit_terminates_loop() {
        let engine = SimulationEngine::new(SimConfig::default()).unwrap();
        let script = vec![KeyEvent {
            tick: 2,
            key: "escape",
            pressed: true,
        }];
        // Returns rather than hanging.
        run(engine, script);
    }

    #[test]
    fn test_keymap_routes_script_events() {
        let keymap = KeyMap::default();
        assert_eq!(
            keymap.command_for("shift-f", true),
            Some(PlayerCommand::FireBarrage)
        );
        assert_eq!(keymap.command_for("escape", true), Some(PlayerCommand::Quit));
    }
}
