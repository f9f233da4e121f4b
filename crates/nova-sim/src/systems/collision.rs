//! Collision traversal — tests registered colliders against the scene.
//!
//! Two consumers per frame: the push pass displaces the player ship out
//! of penetration, and the event pass emits "into" notifications for
//! every overlap between a registered missile sweep and a solid.
//! Missiles travel far per frame, so they are tested along the segment
//! between samples (fluid check), not just at the endpoint.

use glam::DVec3;
use hecs::{Entity, World};

use nova_core::components::{Collider, ColliderShape, Name, Scale};
use nova_core::enums::Kind;
use nova_core::types::Position;

use crate::systems::missile_flight::MissileSweep;

/// An "into" contact notification.
#[derive(Debug, Clone)]
pub struct CollisionEvent {
    pub from: Entity,
    pub from_name: String,
    pub into: Entity,
    pub into_name: String,
    pub into_kind: Kind,
    /// World-space contact point on the into-shape's surface.
    pub contact: Position,
}

/// A solid resolved into world space.
#[derive(Debug, Clone)]
struct Solid {
    entity: Entity,
    name: String,
    kind: Kind,
    shape: WorldShape,
}

#[derive(Debug, Clone, Copy)]
enum WorldShape {
    Sphere { center: DVec3, radius: f64 },
    InverseSphere { center: DVec3, radius: f64 },
    Capsule { a: DVec3, b: DVec3, radius: f64 },
}

/// Run one traversal: resolve pushes, then emit contact events for
/// every registered missile sweep, in deterministic order.
pub fn run(
    world: &mut World,
    sweeps: &[MissileSweep],
    event_colliders: &[Entity],
    push_colliders: &[Entity],
) -> Vec<CollisionEvent> {
    let solids = collect_solids(world);

    for &pushee in push_colliders {
        resolve_pushes(world, pushee, &solids);
    }

    let mut events = Vec::new();
    for sweep in sweeps {
        if !event_colliders.contains(&sweep.entity) {
            continue;
        }
        for solid in &solids {
            if solid.entity == sweep.entity {
                continue;
            }
            if let Some(contact) = sweep_contact(
                sweep.from.to_dvec3(),
                sweep.to.to_dvec3(),
                sweep.radius,
                &solid.shape,
            ) {
                events.push(CollisionEvent {
                    from: sweep.entity,
                    from_name: sweep.tag.clone(),
                    into: solid.entity,
                    into_name: solid.name.clone(),
                    into_kind: solid.kind,
                    contact: Position::from(contact),
                });
            }
        }
    }
    events
}

/// Snapshot every non-missile solid, sorted by name so traversal order
/// does not depend on archetype layout.
fn collect_solids(world: &World) -> Vec<Solid> {
    let mut query = world.query::<(&Name, &Kind, &Position, &Scale, &Collider)>();
    let mut solids: Vec<Solid> = query
        .iter()
        .filter(|(_, (_, kind, _, _, _))| **kind != Kind::Missile)
        .map(|(entity, (name, kind, position, scale, collider))| Solid {
            entity,
            name: name.0.clone(),
            kind: *kind,
            shape: resolve_shape(&collider.shape, position, scale.0),
        })
        .collect();
    solids.sort_by(|a, b| a.name.cmp(&b.name));
    solids
}

/// Scale a local collider into world space at the entity's position.
fn resolve_shape(shape: &ColliderShape, position: &Position, scale: f64) -> WorldShape {
    let origin = position.to_dvec3();
    match *shape {
        ColliderShape::Sphere { center, radius } => WorldShape::Sphere {
            center: origin + center.to_dvec3() * scale,
            radius: radius * scale,
        },
        ColliderShape::InverseSphere { center, radius } => WorldShape::InverseSphere {
            center: origin + center.to_dvec3() * scale,
            radius: radius * scale,
        },
        ColliderShape::Capsule { a, b, radius } => WorldShape::Capsule {
            a: origin + a.to_dvec3() * scale,
            b: origin + b.to_dvec3() * scale,
            radius: radius * scale,
        },
    }
}

/// Displace one pushee (the player ship) out of every solid it
/// penetrates. The pushee's own solid must be a sphere.
fn resolve_pushes(world: &mut World, pushee: Entity, solids: &[Solid]) {
    let (mut pos, radius) = {
        let position = match world.get::<&Position>(pushee) {
            Ok(p) => *p,
            Err(_) => return,
        };
        let scale = match world.get::<&Scale>(pushee) {
            Ok(s) => s.0,
            Err(_) => return,
        };
        let radius = match world.get::<&Collider>(pushee) {
            Ok(collider) => match collider.shape {
                ColliderShape::Sphere { radius, .. } => radius * scale,
                _ => return,
            },
            Err(_) => return,
        };
        (position.to_dvec3(), radius)
    };

    for solid in solids {
        if solid.entity == pushee {
            continue;
        }
        if let Some(resolved) = push_out(pos, radius, &solid.shape) {
            pos = resolved;
        }
    }

    if let Ok(mut position) = world.get::<&mut Position>(pushee) {
        *position = Position::from(pos);
    }
}

/// New center for a sphere at `pos` so it no longer penetrates `solid`,
/// or None when there is no overlap.
fn push_out(pos: DVec3, radius: f64, solid: &WorldShape) -> Option<DVec3> {
    match *solid {
        WorldShape::Sphere {
            center,
            radius: solid_radius,
        } => {
            let dist = pos.distance(center);
            if dist < solid_radius + radius {
                let normal = direction_or_z(pos - center);
                Some(center + normal * (solid_radius + radius))
            } else {
                None
            }
        }
        WorldShape::Capsule {
            a,
            b,
            radius: solid_radius,
        } => {
            let nearest = closest_point_on_segment(a, b, pos);
            let dist = pos.distance(nearest);
            if dist < solid_radius + radius {
                let normal = direction_or_z(pos - nearest);
                Some(nearest + normal * (solid_radius + radius))
            } else {
                None
            }
        }
        WorldShape::InverseSphere {
            center,
            radius: boundary,
        } => {
            let dist = pos.distance(center);
            if dist + radius > boundary {
                let normal = direction_or_z(pos - center);
                Some(center + normal * (boundary - radius))
            } else {
                None
            }
        }
    }
}

/// Contact point where a swept sphere (segment `from`→`to`, `radius`)
/// overlaps `solid`, or None.
fn sweep_contact(from: DVec3, to: DVec3, radius: f64, solid: &WorldShape) -> Option<DVec3> {
    match *solid {
        WorldShape::Sphere {
            center,
            radius: solid_radius,
        } => {
            let nearest = closest_point_on_segment(from, to, center);
            if nearest.distance(center) <= solid_radius + radius {
                let normal = direction_or_z(nearest - center);
                Some(center + normal * solid_radius)
            } else {
                None
            }
        }
        WorldShape::Capsule {
            a,
            b,
            radius: solid_radius,
        } => {
            let (on_path, on_axis) = closest_points_between_segments(from, to, a, b);
            if on_path.distance(on_axis) <= solid_radius + radius {
                let normal = direction_or_z(on_path - on_axis);
                Some(on_axis + normal * solid_radius)
            } else {
                None
            }
        }
        WorldShape::InverseSphere {
            center,
            radius: boundary,
        } => {
            if to.distance(center) + radius >= boundary {
                let normal = direction_or_z(to - center);
                Some(center + normal * boundary)
            } else {
                None
            }
        }
    }
}

fn closest_point_on_segment(a: DVec3, b: DVec3, point: DVec3) -> DVec3 {
    let ab = b - a;
    let denom = ab.length_squared();
    if denom < 1e-12 {
        return a;
    }
    let t = ((point - a).dot(ab) / denom).clamp(0.0, 1.0);
    a + ab * t
}

/// Closest pair of points between segments p1→q1 and p2→q2
/// (Ericson, Real-Time Collision Detection §5.1.9).
fn closest_points_between_segments(
    p1: DVec3,
    q1: DVec3,
    p2: DVec3,
    q2: DVec3,
) -> (DVec3, DVec3) {
    const EPS: f64 = 1e-12;
    let d1 = q1 - p1;
    let d2 = q2 - p2;
    let r = p1 - p2;
    let a = d1.length_squared();
    let e = d2.length_squared();
    let f = d2.dot(r);

    if a <= EPS && e <= EPS {
        return (p1, p2);
    }

    let mut s;
    let mut t;
    if a <= EPS {
        s = 0.0;
        t = (f / e).clamp(0.0, 1.0);
    } else {
        let c = d1.dot(r);
        if e <= EPS {
            t = 0.0;
            s = (-c / a).clamp(0.0, 1.0);
        } else {
            let b = d1.dot(d2);
            let denom = a * e - b * b;
            s = if denom > EPS {
                ((b * f - c * e) / denom).clamp(0.0, 1.0)
            } else {
                0.0
            };
            t = b * s + f;
            if t < 0.0 {
                t = 0.0;
                s = (-c / a).clamp(0.0, 1.0);
            } else if t > e {
                t = 1.0;
                s = ((b - c) / a).clamp(0.0, 1.0);
            } else {
                t /= e;
            }
        }
    }
    (p1 + d1 * s, p2 + d2 * t)
}

fn direction_or_z(v: DVec3) -> DVec3 {
    let n = v.normalize_or_zero();
    if n == DVec3::ZERO {
        DVec3::Z
    } else {
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_hits_sphere_mid_segment() {
        let solid = WorldShape::Sphere {
            center: DVec3::new(0.0, 50.0, 0.0),
            radius: 10.0,
        };
        // Endpoint samples straddle the sphere; only the fluid check sees it.
        let contact = sweep_contact(
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(0.0, 100.0, 0.0),
            1.0,
            &solid,
        );
        assert!(contact.is_some());
        let contact = contact.unwrap();
        assert!((contact.distance(DVec3::new(0.0, 50.0, 0.0)) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_sweep_misses_offset_sphere() {
        let solid = WorldShape::Sphere {
            center: DVec3::new(100.0, 50.0, 0.0),
            radius: 10.0,
        };
        let contact = sweep_contact(
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(0.0, 100.0, 0.0),
            1.0,
            &solid,
        );
        assert!(contact.is_none());
    }

    #[test]
    fn test_sweep_hits_capsule_side() {
        let solid = WorldShape::Capsule {
            a: DVec3::new(0.0, 50.0, -100.0),
            b: DVec3::new(0.0, 50.0, 100.0),
            radius: 5.0,
        };
        let contact = sweep_contact(
            DVec3::new(-20.0, 45.0, 0.0),
            DVec3::new(20.0, 55.0, 0.0),
            1.0,
            &solid,
        );
        assert!(contact.is_some());
    }

    #[test]
    fn test_inverse_sphere_triggers_outside_only() {
        let solid = WorldShape::InverseSphere {
            center: DVec3::ZERO,
            radius: 1000.0,
        };
        let inside = sweep_contact(DVec3::ZERO, DVec3::new(0.0, 500.0, 0.0), 1.0, &solid);
        assert!(inside.is_none());
        let outside = sweep_contact(
            DVec3::new(0.0, 900.0, 0.0),
            DVec3::new(0.0, 1100.0, 0.0),
            1.0,
            &solid,
        );
        assert!(outside.is_some());
    }

    #[test]
    fn test_push_out_of_sphere() {
        let solid = WorldShape::Sphere {
            center: DVec3::ZERO,
            radius: 100.0,
        };
        let pushed = push_out(DVec3::new(0.0, 50.0, 0.0), 5.0, &solid).unwrap();
        assert!((pushed.length() - 105.0).abs() < 1e-9);
        // Already clear: no displacement.
        assert!(push_out(DVec3::new(0.0, 200.0, 0.0), 5.0, &solid).is_none());
    }

    #[test]
    fn test_push_back_inside_boundary() {
        let solid = WorldShape::InverseSphere {
            center: DVec3::ZERO,
            radius: 1000.0,
        };
        let pushed = push_out(DVec3::new(0.0, 1200.0, 0.0), 5.0, &solid).unwrap();
        assert!((pushed.length() - 995.0).abs() < 1e-9);
    }

    #[test]
    fn test_segment_segment_closest_parallel_and_crossing() {
        // Crossing segments in the same plane.
        let (p, q) = closest_points_between_segments(
            DVec3::new(-10.0, 0.0, 0.0),
            DVec3::new(10.0, 0.0, 0.0),
            DVec3::new(0.0, -10.0, 3.0),
            DVec3::new(0.0, 10.0, 3.0),
        );
        assert!(p.distance(DVec3::ZERO) < 1e-9);
        assert!(q.distance(DVec3::new(0.0, 0.0, 3.0)) < 1e-9);
    }
}
