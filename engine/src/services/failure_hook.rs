// Injectable rejection path for the simulated generation call
use rand::Rng;
use shared::models::TimeInterval;
use std::fmt;

pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to connect to the simulated API.";

/// Decides whether a finished generation call is rejected instead of resolved.
/// Returns the user-facing message on rejection.
pub trait FailureHook: Send + Sync + fmt::Debug {
    fn check(&self, interval: TimeInterval) -> Option<String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverFail;

impl FailureHook for NeverFail {
    fn check(&self, _interval: TimeInterval) -> Option<String> {
        None
    }
}

#[derive(Debug, Clone)]
pub struct AlwaysFail {
    pub message: String,
}

impl Default for AlwaysFail {
    fn default() -> Self {
        Self { message: DEFAULT_FAILURE_MESSAGE.to_string() }
    }
}

impl FailureHook for AlwaysFail {
    fn check(&self, _interval: TimeInterval) -> Option<String> {
        Some(self.message.clone())
    }
}

/// Rejects each call independently with probability `rate`.
#[derive(Debug, Clone, Copy)]
pub struct RandomFailure {
    rate: f64,
}

impl RandomFailure {
    pub fn new(rate: f64) -> Self {
        Self { rate: rate.clamp(0.0, 1.0) }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl FailureHook for RandomFailure {
    fn check(&self, _interval: TimeInterval) -> Option<String> {
        if self.rate > 0.0 && rand::thread_rng().gen_bool(self.rate) {
            Some(DEFAULT_FAILURE_MESSAGE.to_string())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_and_always() {
        assert_eq!(NeverFail.check(TimeInterval::Minutes3), None);
        assert_eq!(AlwaysFail::default().check(TimeInterval::Minutes3).as_deref(), Some(DEFAULT_FAILURE_MESSAGE));
    }

    #[test]
    fn test_random_failure_extremes() {
        let never = RandomFailure::new(0.0);
        let always = RandomFailure::new(1.0);
        for _ in 0..100 {
            assert!(never.check(TimeInterval::Minutes5).is_none());
            assert!(always.check(TimeInterval::Minutes5).is_some());
        }
    }

    #[test]
    fn test_random_failure_rate_is_clamped() {
        assert_eq!(RandomFailure::new(3.0).rate(), 1.0);
        assert_eq!(RandomFailure::new(-1.0).rate(), 0.0);
    }
}
