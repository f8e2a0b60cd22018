//! Fixed-period spawn clock driven by frame deltas.

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Spawner {
    period_ms: f64,
    elapsed_ms: f64,
}

impl Spawner {
    /// `period_ms` must be positive; `HauntConfig::validate` guarantees it.
    #[must_use]
    pub fn new(period_ms: f64) -> Self {
        Self {
            period_ms,
            elapsed_ms: 0.0,
        }
    }

    /// Accumulate `dt_ms` and return how many whole periods elapsed,
    /// saturating at `u32::MAX`. Negative or non-finite deltas are ignored.
    ///
    /// The leftover is kept as an exact `%` remainder, so it stays below one
    /// period however large the delta was.
    pub fn advance(&mut self, dt_ms: f64) -> u32 {
        if !dt_ms.is_finite() || dt_ms <= 0.0 {
            return 0;
        }
        let total = self.elapsed_ms + dt_ms;
        let ticks = (total / self.period_ms).floor();
        self.elapsed_ms = total % self.period_ms;
        ticks as u32
    }

    pub fn reset(&mut self) {
        self.elapsed_ms = 0.0;
    }
}
