/// Seed every generation run starts from, so identical input text yields a
/// byte-identical corpus.
pub const DEFAULT_SEED: u64 = 12_345;

/// Deterministic pseudo-random source: a named counter advanced on every
/// draw, mapped to [0, 1) through a sine transform. Reproducible, not
/// statistically rigorous, and not for anything security-sensitive. Each
/// generation run owns its own instance; sharing one across concurrent runs
/// would break determinism.
#[derive(Debug, Clone)]
pub struct SeededRng {
    counter: u64,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self { counter: seed }
    }

    /// Next value in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        let x = (self.counter as f64).sin() * 10_000.0;
        self.counter += 1;
        x - x.floor()
    }

    /// Uniform index into a collection of `len` elements. `len` must be > 0.
    pub fn pick(&mut self, len: usize) -> usize {
        (self.next_f64() * len as f64) as usize
    }

    /// In-place Fisher–Yates shuffle driven by this source.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.pick(i + 1);
            items.swap(i, j);
        }
    }
}
