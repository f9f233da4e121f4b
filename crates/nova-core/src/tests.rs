//! Tests for core types, the motion interval, and the key-binding table.

use crate::commands::PlayerCommand;
use crate::components::MotionInterval;
use crate::constants::{DT, TICK_RATE};
use crate::enums::ShipControl;
use crate::input::KeyMap;
use crate::types::{Orientation, Position, SimTime};

// ---- Types ----

#[test]
fn test_position_range() {
    let a = Position::new(0.0, 0.0, 0.0);
    let b = Position::new(3.0, 4.0, 0.0);
    assert!((a.range_to(&b) - 5.0).abs() < 1e-12);
}

#[test]
fn test_position_lerp_endpoints_and_midpoint() {
    let a = Position::new(0.0, 0.0, 0.0);
    let b = Position::new(10.0, -20.0, 4.0);
    assert_eq!(Position::lerp(&a, &b, 0.0), a);
    assert_eq!(Position::lerp(&a, &b, 1.0), b);
    let mid = Position::lerp(&a, &b, 0.5);
    assert!((mid.x - 5.0).abs() < 1e-12);
    assert!((mid.y + 10.0).abs() < 1e-12);
    assert!((mid.z - 2.0).abs() < 1e-12);
}

#[test]
fn test_orientation_forward_at_zero_is_plus_y() {
    let o = Orientation::default();
    let f = o.forward();
    assert!(f.x.abs() < 1e-12);
    assert!((f.y - 1.0).abs() < 1e-12);
    assert!(f.z.abs() < 1e-12);
}

#[test]
fn test_orientation_basis_vectors_are_unit_and_orthogonal() {
    let o = Orientation {
        heading: 37.0,
        pitch: 12.0,
    };
    assert!((o.forward().length() - 1.0).abs() < 1e-12);
    assert!((o.left().length() - 1.0).abs() < 1e-12);
    assert!((o.right().length() - 1.0).abs() < 1e-12);
    // Left and right are opposite.
    assert!((o.left() + o.right()).length() < 1e-12);
}

#[test]
fn test_orientation_face_target_above() {
    let mut o = Orientation::default();
    let from = Position::new(0.0, 0.0, 0.0);
    // Straight ahead and 45 degrees up.
    let target = Position::new(0.0, 100.0, 100.0);
    o.face(&from, &target);
    assert!(o.heading.abs() < 1e-9);
    assert!((o.pitch - 45.0).abs() < 1e-9);
}

#[test]
fn test_sim_time_thirty_ticks_is_one_second() {
    let mut time = SimTime::default();
    for _ in 0..TICK_RATE {
        time.advance();
    }
    assert_eq!(time.tick, TICK_RATE as u64);
    assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
}

// ---- Motion interval ----

#[test]
fn test_interval_samples_along_the_segment() {
    let start = Position::new(0.0, 0.0, 0.0);
    let end = Position::new(0.0, 100.0, 0.0);
    let mut interval = MotionInterval::new(start, end, 2.0);
    assert!(interval.is_playing());
    assert_eq!(interval.sample(), start);

    interval.advance(1.0);
    assert!((interval.sample().y - 50.0).abs() < 1e-9);
    assert!(interval.is_playing());

    interval.advance(1.0);
    assert_eq!(interval.sample(), end);
    assert!(!interval.is_playing());
}

#[test]
fn test_interval_overshoot_clamps_to_end() {
    let start = Position::new(1.0, 2.0, 3.0);
    let end = Position::new(-5.0, 0.0, 9.0);
    let mut interval = MotionInterval::new(start, end, 2.0);
    for _ in 0..100 {
        interval.advance(DT);
    }
    assert!(!interval.is_playing());
    assert_eq!(interval.sample(), end);
}

#[test]
fn test_interval_finish_jumps_to_end() {
    let start = Position::new(0.0, 0.0, 0.0);
    let end = Position::new(10.0, 0.0, 0.0);
    let mut interval = MotionInterval::new(start, end, 2.0);
    interval.advance(0.1);
    interval.finish();
    assert!(!interval.is_playing());
    assert_eq!(interval.sample(), end);
}

// ---- Key bindings ----

#[test]
fn test_keymap_control_edges() {
    let map = KeyMap::default();
    assert_eq!(
        map.command_for("space", true),
        Some(PlayerCommand::ControlDown {
            control: ShipControl::ThrustForward
        })
    );
    assert_eq!(
        map.command_for("space", false),
        Some(PlayerCommand::ControlUp {
            control: ShipControl::ThrustForward
        })
    );
}

#[test]
fn test_keymap_one_shot_actions_only_fire_on_down() {
    let map = KeyMap::default();
    assert_eq!(map.command_for("f", true), Some(PlayerCommand::Fire));
    assert_eq!(map.command_for("f", false), None);
    assert_eq!(
        map.command_for("shift-f", true),
        Some(PlayerCommand::FireBarrage)
    );
    assert_eq!(map.command_for("escape", true), Some(PlayerCommand::Quit));
    assert_eq!(map.command_for("escape", false), None);
}

#[test]
fn test_keymap_unbound_key_is_none() {
    let map = KeyMap::default();
    assert_eq!(map.command_for("x", true), None);
}

// ---- Serialization ----

#[test]
fn test_command_serde_round_trip() {
    let commands = vec![
        PlayerCommand::ControlDown {
            control: ShipControl::PitchUp,
        },
        PlayerCommand::Fire,
        PlayerCommand::FireBarrage,
        PlayerCommand::Quit,
    ];
    for cmd in commands {
        let json = serde_json::to_string(&cmd).unwrap();
        let back: PlayerCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }
}
