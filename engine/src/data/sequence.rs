/// Repeatable stream of pseudo-random fractions in `[0, 1)`.
///
/// Each step replaces the state with `sin(state) * 10000` and yields its
/// fractional part. Two instances built from the same seed yield the same
/// values for the same number of calls.
#[derive(Debug, Clone)]
pub struct DeterministicSequence {
    state: f64,
}

impl DeterministicSequence {
    pub fn new(seed: f64) -> Self {
        Self { state: seed }
    }

    pub fn next_value(&mut self) -> f64 {
        self.state = self.state.sin() * 10000.0;
        self.state - self.state.floor()
    }
}

impl Iterator for DeterministicSequence {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_value())
    }
}
