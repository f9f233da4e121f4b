//! Defense path generators — pure functions mapping a step parameter
//! to a unit direction vector for drone formations and orbits.

use std::f64::consts::TAU;

use glam::DVec3;
use rand::Rng;

/// Circle in the X=0 plane. One revolution per unit step.
pub fn circle_x(step: f64) -> DVec3 {
    let t = step * TAU;
    DVec3::new(0.0, t.sin(), t.cos())
}

/// Circle in the Y=0 plane. One revolution per unit step.
pub fn circle_y(step: f64) -> DVec3 {
    let t = step * TAU;
    DVec3::new(t.sin(), 0.0, t.cos())
}

/// Circle in the Z=0 plane. One revolution per unit step.
pub fn circle_z(step: f64) -> DVec3 {
    let t = step * TAU;
    DVec3::new(t.sin(), t.cos(), 0.0)
}

/// Baseball-seam curve around the unit sphere.
///
/// `num_seams` stretches the step parameter so that integer steps
/// 0..num_seams walk the whole curve; `bulge` controls how far the
/// seam swings toward the poles.
pub fn baseball_seams(step: f64, num_seams: u32, bulge: f64) -> DVec3 {
    let seams = num_seams.max(1) as f64;
    let t = step * TAU / seams;
    let v = DVec3::new(
        t.cos() - bulge * (3.0 * t).cos(),
        t.sin() + bulge * (3.0 * t).sin(),
        (2.0 * t).cos(),
    );
    v.normalize()
}

/// Fresh random unit direction. Each call consumes RNG state.
pub fn cloud(rng: &mut impl Rng) -> DVec3 {
    loop {
        let v = DVec3::new(
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
        );
        if v.length_squared() > 1e-9 {
            return v.normalize();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn assert_unit(v: DVec3) {
        assert!(
            (v.length() - 1.0).abs() < 1e-9,
            "expected unit vector, got length {}",
            v.length()
        );
    }

    #[test]
    fn test_circles_are_unit_length() {
        for step in [0.0, 0.1, 0.5, 1.0, 17.25, 4096.75] {
            assert_unit(circle_x(step));
            assert_unit(circle_y(step));
            assert_unit(circle_z(step));
        }
    }

    #[test]
    fn test_circles_are_periodic_with_unit_period() {
        for step in [0.0, 0.3, 2.7] {
            let a = circle_x(step);
            let b = circle_x(step + 1.0);
            assert!((a - b).length() < 1e-9);
            let a = circle_y(step);
            let b = circle_y(step + 1.0);
            assert!((a - b).length() < 1e-9);
            let a = circle_z(step);
            let b = circle_z(step + 1.0);
            assert!((a - b).length() < 1e-9);
        }
    }

    #[test]
    fn test_circles_live_in_their_planes() {
        assert!(circle_x(0.37).x.abs() < 1e-12);
        assert!(circle_y(0.37).y.abs() < 1e-12);
        assert!(circle_z(0.37).z.abs() < 1e-12);
    }

    #[test]
    fn test_seam_is_unit_length() {
        for step in [0.0, 1.0, 7.5, 59.0, 123.0] {
            assert_unit(baseball_seams(step, 60, 0.4));
            assert_unit(baseball_seams(step, 4, 2.0));
        }
    }

    #[test]
    fn test_seam_tolerates_zero_seams() {
        assert_unit(baseball_seams(3.0, 0, 0.4));
    }

    #[test]
    fn test_cloud_is_unit_and_seed_deterministic() {
        let mut rng_a = ChaCha8Rng::seed_from_u64(7);
        let mut rng_b = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..32 {
            let a = cloud(&mut rng_a);
            let b = cloud(&mut rng_b);
            assert_unit(a);
            assert_eq!(a, b);
        }
    }
}
