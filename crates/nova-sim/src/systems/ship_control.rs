//! Ship movement controllers — per-tick thrust and turn task bodies.
//!
//! Key-down registers the matching task under a fixed name; key-up
//! removes it. Pitch is clamped after every update so the camera can
//! never flip upside down.

use hecs::{Entity, World};

use nova_core::constants::{PITCH_LIMIT_DEG, SHIP_THRUST_RATE, SHIP_TURN_RATE};
use nova_core::enums::ShipControl;
use nova_core::types::{Orientation, Position};

/// Fixed task name for a held control.
pub fn task_name(control: ShipControl) -> &'static str {
    match control {
        ShipControl::ThrustForward => "forward-thrust",
        ShipControl::ThrustLeft => "left-thrust",
        ShipControl::ThrustRight => "right-thrust",
        ShipControl::TurnLeft => "left-turn",
        ShipControl::TurnRight => "right-turn",
        ShipControl::PitchUp => "up-turn",
        ShipControl::PitchDown => "down-turn",
    }
}

/// Apply one tick of the given control to the ship.
pub fn run(world: &mut World, ship: Entity, control: ShipControl, dt: f64) {
    match control {
        ShipControl::ThrustForward | ShipControl::ThrustLeft | ShipControl::ThrustRight => {
            apply_thrust(world, ship, control, dt)
        }
        ShipControl::TurnLeft => apply_turn(world, ship, SHIP_TURN_RATE * dt, 0.0),
        ShipControl::TurnRight => apply_turn(world, ship, -SHIP_TURN_RATE * dt, 0.0),
        ShipControl::PitchUp => apply_turn(world, ship, 0.0, SHIP_TURN_RATE * dt),
        ShipControl::PitchDown => apply_turn(world, ship, 0.0, -SHIP_TURN_RATE * dt),
    }
}

fn apply_thrust(world: &mut World, ship: Entity, control: ShipControl, dt: f64) {
    let trajectory = match world.get::<&Orientation>(ship) {
        Ok(orientation) => match control {
            ShipControl::ThrustLeft => orientation.left(),
            ShipControl::ThrustRight => orientation.right(),
            _ => orientation.forward(),
        },
        Err(_) => return,
    };
    if let Ok(mut position) = world.get::<&mut Position>(ship) {
        let moved = position.to_dvec3() + trajectory * SHIP_THRUST_RATE * dt;
        *position = Position::from(moved);
    }
}

fn apply_turn(world: &mut World, ship: Entity, heading_change: f64, pitch_change: f64) {
    if let Ok(mut orientation) = world.get::<&mut Orientation>(ship) {
        orientation.heading += heading_change;
        orientation.pitch += pitch_change;
        constrain_pitch(&mut orientation);
    }
}

/// Keep the nose short of straight up or straight down.
fn constrain_pitch(orientation: &mut Orientation) {
    orientation.pitch = orientation.pitch.clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG);
}

#[cfg(test)]
mod tests {
    use super::*;
    use nova_core::constants::DT;
    use nova_core::types::{Orientation, Position};

    fn spawn_ship(world: &mut World) -> Entity {
        world.spawn((Position::new(0.0, 0.0, 0.0), Orientation::default()))
    }

    #[test]
    fn test_forward_thrust_moves_along_plus_y_at_zero_heading() {
        let mut world = World::new();
        let ship = spawn_ship(&mut world);
        for _ in 0..30 {
            run(&mut world, ship, ShipControl::ThrustForward, DT);
        }
        let pos = *world.get::<&Position>(ship).unwrap();
        assert!(pos.x.abs() < 1e-9);
        assert!((pos.y - SHIP_THRUST_RATE).abs() < 1e-6);
    }

    #[test]
    fn test_pitch_clamps_at_limit() {
        let mut world = World::new();
        let ship = spawn_ship(&mut world);
        // Far more ticks than needed to reach the limit.
        for _ in 0..300 {
            run(&mut world, ship, ShipControl::PitchUp, DT);
        }
        let o = *world.get::<&Orientation>(ship).unwrap();
        assert!((o.pitch - PITCH_LIMIT_DEG).abs() < 1e-9);

        for _ in 0..600 {
            run(&mut world, ship, ShipControl::PitchDown, DT);
        }
        let o = *world.get::<&Orientation>(ship).unwrap();
        assert!((o.pitch + PITCH_LIMIT_DEG).abs() < 1e-9);
    }

    #[test]
    fn test_left_and_right_turns_cancel() {
        let mut world = World::new();
        let ship = spawn_ship(&mut world);
        for _ in 0..10 {
            run(&mut world, ship, ShipControl::TurnLeft, DT);
        }
        for _ in 0..10 {
            run(&mut world, ship, ShipControl::TurnRight, DT);
        }
        let o = *world.get::<&Orientation>(ship).unwrap();
        assert!(o.heading.abs() < 1e-9);
    }
}
