//! Visible area in CSS pixels.

use rand::Rng;

use crate::error::HauntError;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Result<Self, HauntError> {
        if !width.is_finite() || width < 0.0 {
            return Err(HauntError::invalid("width", "must be finite and non-negative"));
        }
        if !height.is_finite() || height < 0.0 {
            return Err(HauntError::invalid("height", "must be finite and non-negative"));
        }
        Ok(Self { width, height })
    }

    /// Inclusive on both ends: a ghost sitting exactly on the edge is inside.
    #[must_use]
    pub fn contains_x(&self, x: f64) -> bool {
        (0.0..=self.width).contains(&x)
    }

    #[must_use]
    pub fn contains_y(&self, y: f64) -> bool {
        (0.0..=self.height).contains(&y)
    }

    /// Uniform point in `[0, width) × [0, height)`. A zero-sized axis yields 0.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> (f64, f64) {
        (half_open(rng, self.width), half_open(rng, self.height))
    }
}

fn half_open<R: Rng + ?Sized>(rng: &mut R, extent: f64) -> f64 {
    if extent > 0.0 {
        rng.gen_range(0.0..extent)
    } else {
        0.0
    }
}
