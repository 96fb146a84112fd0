use std::time::{Duration, Instant};

/// A condition that decides when planning must stop.
/// Evaluated once per planner iteration and before any blocking wait.
pub trait TerminationCondition {
    /// Returns true if planning should terminate.
    fn evaluate(&mut self) -> bool;
}

/// Terminates after a fixed number of evaluations.
/// `MaxIterations::new(0)` is the immediately-true condition.
pub struct MaxIterations {
    remaining: u64,
}

impl MaxIterations {
    pub fn new(iterations: u64) -> Self {
        Self {
            remaining: iterations,
        }
    }
}

impl TerminationCondition for MaxIterations {
    fn evaluate(&mut self) -> bool {
        if self.remaining == 0 {
            return true;
        }
        self.remaining -= 1;
        false
    }
}

/// Terminates once a wall-clock deadline has passed.
pub struct Timeout {
    deadline: Instant,
}

impl Timeout {
    pub fn new(duration: Duration) -> Self {
        Self {
            deadline: Instant::now() + duration,
        }
    }
}

impl TerminationCondition for Timeout {
    fn evaluate(&mut self) -> bool {
        Instant::now() >= self.deadline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_iterations_counts_down() {
        let mut termination = MaxIterations::new(3);
        assert!(!termination.evaluate());
        assert!(!termination.evaluate());
        assert!(!termination.evaluate());
        assert!(termination.evaluate());
        assert!(termination.evaluate());
    }

    #[test]
    fn zero_iterations_is_immediately_true() {
        let mut termination = MaxIterations::new(0);
        assert!(termination.evaluate());
    }

    #[test]
    fn expired_timeout_is_true() {
        let mut termination = Timeout::new(Duration::from_secs(0));
        assert!(termination.evaluate());
    }
}
