//! Wanderer movement — interval-driven travel along a fixed looping
//! route, always facing a stare target.

use hecs::{Entity, World};

use nova_core::types::{Orientation, Position};

/// Movement rule for a wandering defender: a looping three-leg route.
#[derive(Debug, Clone)]
pub struct WanderState {
    /// Route corners; leg i runs points[i] → points[i + 1].
    pub points: [Position; 4],
    /// Current leg, 0..3.
    pub leg: usize,
    /// Time into the current leg (seconds).
    pub leg_elapsed: f64,
    /// Duration of each leg (seconds).
    pub leg_secs: f64,
    /// Entity this wanderer always faces.
    pub stare_at: Entity,
}

impl WanderState {
    pub fn new(start: Position, route: [Position; 3], leg_secs: f64, stare_at: Entity) -> Self {
        Self {
            points: [start, route[0], route[1], route[2]],
            leg: 0,
            leg_elapsed: 0.0,
            leg_secs,
            stare_at,
        }
    }
}

/// Advance every wanderer along its route and face its target.
pub fn run(world: &mut World, dt: f64) {
    let mut stares: Vec<(Entity, Entity)> = Vec::new();

    for (entity, (state, position)) in world.query_mut::<(&mut WanderState, &mut Position)>() {
        state.leg_elapsed += dt;
        while state.leg_elapsed >= state.leg_secs {
            state.leg_elapsed -= state.leg_secs;
            state.leg = (state.leg + 1) % 3;
        }
        let t = state.leg_elapsed / state.leg_secs;
        *position = Position::lerp(&state.points[state.leg], &state.points[state.leg + 1], t);
        stares.push((entity, state.stare_at));
    }

    for (entity, target) in stares {
        let target_pos = match world.get::<&Position>(target) {
            Ok(pos) => *pos,
            Err(_) => continue,
        };
        let own_pos = match world.get::<&Position>(entity) {
            Ok(pos) => *pos,
            Err(_) => continue,
        };
        if let Ok(mut orientation) = world.get::<&mut Orientation>(entity) {
            orientation.face(&own_pos, &target_pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nova_core::constants::DT;

    #[test]
    fn test_wanderer_walks_its_legs_and_loops() {
        let mut world = World::new();
        let target = world.spawn((Position::new(0.0, 0.0, 0.0),));
        let start = Position::new(0.0, 0.0, 0.0);
        let route = [
            Position::new(100.0, 0.0, 0.0),
            Position::new(100.0, 100.0, 0.0),
            Position::new(0.0, 100.0, 0.0),
        ];
        let wanderer = world.spawn((
            start,
            Orientation::default(),
            WanderState::new(start, route, 10.0, target),
        ));

        // Half of leg 0.
        for _ in 0..150 {
            run(&mut world, DT);
        }
        let pos = *world.get::<&Position>(wanderer).unwrap();
        assert!((pos.x - 50.0).abs() < 1.0, "x was {}", pos.x);
        assert!(pos.y.abs() < 1e-6);

        // Through the end of leg 2; the route loops back onto leg 0.
        for _ in 0..900 {
            run(&mut world, DT);
        }
        let pos = *world.get::<&Position>(wanderer).unwrap();
        let state = world.get::<&WanderState>(wanderer).unwrap();
        assert_eq!(state.leg, 0);
        assert!((pos.x - 50.0).abs() < 1.0);
    }
}
