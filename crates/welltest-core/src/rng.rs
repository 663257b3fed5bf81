//! Deterministic pseudo-random stream for the synthetic-data exercises.
//!
//! A linear congruential generator owned by the caller: two handles never
//! interfere, and reusing a seed reproduces the stream bit for bit. There is
//! deliberately no ambient or thread-local entropy anywhere in the crate.

/// Caller-owned LCG state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    /// A generator positioned at the start of the stream for `seed`.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    /// Uniform deviate in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 33) as f64 / (1u64 << 31) as f64
    }

    /// Uniform deviate in [lower, upper).
    pub fn next_in(&mut self, lower: f64, upper: f64) -> f64 {
        lower + (upper - lower) * self.next_f64()
    }

    /// Integer deviate in [lower, upper).
    pub fn next_index(&mut self, lower: usize, upper: usize) -> usize {
        lower + (self.next_f64() * (upper - lower) as f64) as usize
    }

    /// Normal deviate via the trigonometric Box-Muller transform.
    ///
    /// Consumes exactly two uniform draws per call, so per-sample draw cost
    /// stays fixed and prefixes of a stream are stable.
    pub fn next_normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = 1.0 - self.next_f64(); // (0, 1]: keeps ln() finite
        let u2 = self.next_f64();
        let radius = (-2.0 * u1.ln()).sqrt();
        mean + std_dev * radius * (std::f64::consts::TAU * u2).cos()
    }
}
