//! The ghost that sits under the pointer.

#[derive(Clone, Copy, Default, PartialEq, Debug)]
pub struct Follower {
    pub x: f64,
    pub y: f64,
}

impl Follower {
    /// Jump to the pointer. No smoothing, no validation.
    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    #[must_use]
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}
