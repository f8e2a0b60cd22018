//! Wandering ghost: drifts along a slowly perturbed heading and bounces
//! off the viewport edges.
//!
//! The position written by a step is the candidate computed *before* any
//! reflection, so a ghost that crosses an edge spends one step outside the
//! viewport before the reflected heading carries it back.

use std::f64::consts::{PI, TAU};

use rand::Rng;

use crate::viewport::Viewport;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Ghost {
    pub x: f64,
    pub y: f64,
    /// Radians, unnormalised.
    pub heading: f64,
    pub speed: f64,
}

/// Which axes reflected the heading during a step.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct Reflection {
    pub horizontal: bool,
    pub vertical: bool,
}

impl Reflection {
    #[must_use]
    pub fn any(self) -> bool {
        self.horizontal || self.vertical
    }
}

impl Ghost {
    #[must_use]
    pub fn new(x: f64, y: f64, heading: f64, speed: f64) -> Self {
        Self { x, y, heading, speed }
    }

    /// Fresh ghost at a uniform point of `viewport` with a uniform heading.
    pub fn spawn<R: Rng + ?Sized>(viewport: &Viewport, speed: f64, rng: &mut R) -> Self {
        let (x, y) = viewport.sample(rng);
        let heading = rng.gen_range(0.0..TAU);
        Self::new(x, y, heading, speed)
    }

    /// Advance one step with heading perturbation `delta`.
    pub fn step(&mut self, viewport: &Viewport, delta: f64) -> Reflection {
        self.heading += delta;

        let nx = self.x + self.heading.cos() * self.speed;
        let ny = self.y + self.heading.sin() * self.speed;

        let mut bounce = Reflection::default();
        if !viewport.contains_x(nx) {
            self.heading = PI - self.heading;
            bounce.horizontal = true;
        }
        if !viewport.contains_y(ny) {
            self.heading = -self.heading;
            bounce.vertical = true;
        }

        self.x = nx;
        self.y = ny;
        bounce
    }
}

/// Draw a heading perturbation from `[-jitter / 2, jitter / 2]`.
pub fn sample_delta<R: Rng + ?Sized>(rng: &mut R, jitter: f64) -> f64 {
    if jitter > 0.0 {
        let half = jitter / 2.0;
        rng.gen_range(-half..=half)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const EPS: f64 = 1e-9;

    fn screen() -> Viewport {
        Viewport::new(800.0, 600.0).unwrap()
    }

    #[test]
    fn origin_heading_zero_moves_right_by_speed() {
        let mut g = Ghost::new(0.0, 0.0, 0.0, 2.0);
        let bounce = g.step(&screen(), 0.0);
        assert!((g.x - 2.0).abs() < EPS);
        assert!(g.y.abs() < EPS);
        assert!(!bounce.any());
    }

    #[test]
    fn crossing_right_edge_reflects_horizontally_one_step_late() {
        let vp = screen();
        let mut g = Ghost::new(799.0, 300.0, 0.0, 2.0);
        let bounce = g.step(&vp, 0.0);
        assert!(bounce.horizontal);
        assert!(!bounce.vertical);
        // Written from the pre-reflection candidate.
        assert!((g.x - 801.0).abs() < EPS);
        assert!((g.heading - PI).abs() < EPS);

        // Next step comes back in.
        g.step(&vp, 0.0);
        assert!((g.x - 799.0).abs() < EPS);
        assert!(vp.contains_x(g.x));
    }

    #[test]
    fn crossing_top_edge_negates_heading() {
        let mut g = Ghost::new(400.0, 1.0, -PI / 2.0, 2.0);
        let bounce = g.step(&screen(), 0.0);
        assert!(bounce.vertical);
        assert!(!bounce.horizontal);
        assert!((g.heading - PI / 2.0).abs() < EPS);
        assert!((g.y + 1.0).abs() < EPS);
    }

    #[test]
    fn corner_reflects_both_axes() {
        let h = 3.0 * PI / 4.0;
        let mut g = Ghost::new(0.5, 599.5, h, 2.0);
        let bounce = g.step(&screen(), 0.0);
        assert!(bounce.horizontal && bounce.vertical);
        assert!((g.heading - (-(PI - h))).abs() < EPS);
    }

    #[test]
    fn delta_is_applied_before_moving() {
        let mut g = Ghost::new(100.0, 100.0, 0.0, 2.0);
        g.step(&screen(), 0.05);
        assert!((g.heading - 0.05).abs() < EPS);
        assert!((g.x - (100.0 + 0.05f64.cos() * 2.0)).abs() < EPS);
        assert!((g.y - (100.0 + 0.05f64.sin() * 2.0)).abs() < EPS);
    }

    #[test]
    fn zero_jitter_never_perturbs() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert!(sample_delta(&mut rng, 0.0).abs() < EPS);
    }

    #[test]
    fn spawn_uses_given_speed_and_stays_inside() {
        let vp = screen();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let g = Ghost::spawn(&vp, 2.0, &mut rng);
        assert!((g.speed - 2.0).abs() < EPS);
        assert!((0.0..800.0).contains(&g.x));
        assert!((0.0..600.0).contains(&g.y));
        assert!((0.0..TAU).contains(&g.heading));
    }

    proptest! {
        #[test]
        fn prop_unperturbed_step_moves_by_speed_along_heading(
            x in 100.0f64..700.0,
            y in 100.0f64..500.0,
            heading in -10.0f64..10.0,
            speed in 0.0f64..20.0,
        ) {
            let mut g = Ghost::new(x, y, heading, speed);
            let bounce = g.step(&screen(), 0.0);
            prop_assert!(!bounce.any());
            prop_assert!((g.x - (x + speed * heading.cos())).abs() < EPS);
            prop_assert!((g.y - (y + speed * heading.sin())).abs() < EPS);
            prop_assert!((g.heading - heading).abs() < EPS);
        }

        #[test]
        fn prop_leaving_horizontally_yields_pi_minus_heading(
            y in 100.0f64..500.0,
            heading in -1.0f64..1.0,
        ) {
            // Heading points right, ghost sits on the right edge.
            let mut g = Ghost::new(800.0, y, heading, 2.0);
            let bounce = g.step(&screen(), 0.0);
            prop_assert!(bounce.horizontal);
            prop_assert!((g.heading - (PI - heading)).abs() < EPS);
        }

        #[test]
        fn prop_sampled_delta_within_half_jitter(
            seed in any::<u64>(),
            jitter in 0.0f64..1.0,
        ) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            for _ in 0..32 {
                let d = sample_delta(&mut rng, jitter);
                prop_assert!(d.abs() <= jitter / 2.0 + EPS);
            }
        }
    }
}
