use crate::est::state::RealVectorState;
use num_traits::Float;
use rand::rngs::StdRng;
use rand::Rng;

/// A goal region the planner can draw configurations from.
pub trait GoalRegion<F: Float, const N: usize> {
    /// Whether this goal can act as a sampleable region at all. A goal that
    /// returns false is rejected by the planner as an unrecognized goal type.
    fn is_sampleable(&self) -> bool {
        true
    }

    /// Whether the region is able to produce at least one sample.
    fn could_sample(&self) -> bool;

    /// Attempts to draw one goal configuration. Non-blocking; returns None if
    /// no sample is currently available.
    fn sample_goal(&mut self, rng: &mut StdRng) -> Option<RealVectorState<F, N>>;

    /// Checks whether the roots of two lineages may be paired in a solution.
    /// Some problems reject certain start-goal combinations even if they are
    /// geometrically connectable.
    fn is_start_goal_pair_valid(
        &self,
        _root_a: &RealVectorState<F, N>,
        _root_b: &RealVectorState<F, N>,
    ) -> bool {
        true
    }
}

/// A goal region given by a finite set of goal configurations.
/// Samples cycle through the states in order.
pub struct GoalStates<F: Float, const N: usize> {
    states: Vec<RealVectorState<F, N>>,
    next_index: usize,
}

impl<F: Float, const N: usize> GoalStates<F, N> {
    pub fn new(states: Vec<RealVectorState<F, N>>) -> Self {
        Self {
            states,
            next_index: 0,
        }
    }

    pub fn single(state: RealVectorState<F, N>) -> Self {
        Self::new(vec![state])
    }
}

impl<F: Float, const N: usize> GoalRegion<F, N> for GoalStates<F, N> {
    fn could_sample(&self) -> bool {
        !self.states.is_empty()
    }

    fn sample_goal(&mut self, _rng: &mut StdRng) -> Option<RealVectorState<F, N>> {
        if self.states.is_empty() {
            return None;
        }
        let state = self.states[self.next_index % self.states.len()];
        self.next_index += 1;
        Some(state)
    }
}

/// A goal region given by a ball around a center configuration.
pub struct GoalBall<F: Float, const N: usize> {
    center: RealVectorState<F, N>,
    radius: F,
}

impl<F: Float, const N: usize> GoalBall<F, N> {
    pub fn new(center: RealVectorState<F, N>, radius: F) -> Self {
        assert!(radius >= F::zero(), "The goal radius must be non-negative.");
        Self { center, radius }
    }
}

impl<F: Float + rand::distributions::uniform::SampleUniform, const N: usize> GoalRegion<F, N>
    for GoalBall<F, N>
{
    fn could_sample(&self) -> bool {
        true
    }

    fn sample_goal(&mut self, rng: &mut StdRng) -> Option<RealVectorState<F, N>> {
        // Rejection-sample the bounding box of the ball.
        loop {
            let mut values = [F::zero(); N];
            for value in values.iter_mut() {
                *value = if self.radius > F::zero() {
                    rng.gen_range(-self.radius..=self.radius)
                } else {
                    F::zero()
                };
            }
            let offset = RealVectorState::new(values);
            if offset.norm() <= self.radius {
                return Some(self.center + offset);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn goal_states_cycle_in_order() {
        let a = RealVectorState::new([0.0f64, 0.0]);
        let b = RealVectorState::new([1.0, 1.0]);
        let mut goal = GoalStates::new(vec![a, b]);
        let mut rng = StdRng::seed_from_u64(0);

        assert!(goal.could_sample());
        assert_eq!(goal.sample_goal(&mut rng), Some(a));
        assert_eq!(goal.sample_goal(&mut rng), Some(b));
        assert_eq!(goal.sample_goal(&mut rng), Some(a));
    }

    #[test]
    fn empty_goal_states_cannot_sample() {
        let mut goal: GoalStates<f64, 2> = GoalStates::new(Vec::new());
        let mut rng = StdRng::seed_from_u64(0);
        assert!(!goal.could_sample());
        assert_eq!(goal.sample_goal(&mut rng), None);
    }

    #[test]
    fn goal_ball_samples_inside_radius() {
        let center = RealVectorState::new([2.0f64, -1.0]);
        let mut goal = GoalBall::new(center, 0.5);
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..100 {
            let sample = goal.sample_goal(&mut rng).unwrap();
            assert!(sample.euclidean_distance(&center) <= 0.5 + 1e-12);
        }
    }
}
