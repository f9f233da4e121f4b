//! Explosion effect task — a bounded scalar ramp driving a particle
//! emitter at the contact point.
//!
//! The emitter starts at the ramp's first sample and stops at its
//! last; each instance carries a unique "particles-N" tag so
//! overlapping explosions never collide in the scheduler.

use nova_core::constants::EXPLOSION_SECS;
use nova_core::events::SimEvent;
use nova_core::types::Position;

use crate::scheduler::TaskStatus;

pub fn run(
    tag: &str,
    position: Position,
    started: &mut bool,
    elapsed_secs: f64,
    events: &mut Vec<SimEvent>,
) -> TaskStatus {
    if !*started {
        *started = true;
        events.push(SimEvent::EffectStarted {
            tag: tag.to_string(),
            position,
        });
    }

    if elapsed_secs >= EXPLOSION_SECS {
        events.push(SimEvent::EffectEnded {
            tag: tag.to_string(),
        });
        return TaskStatus::Done;
    }
    TaskStatus::Continue
}
