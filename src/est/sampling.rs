use crate::est::state::{RealVectorBounds, RealVectorState};
use crate::est::validity_checker::ValidityChecker;
use num_traits::Float;
use rand::distributions::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::Rng;

/// Samples valid states in the neighborhood of a given state.
pub trait ValidStateSampler<F: Float, const N: usize> {
    /// Attempts to sample a valid state within `distance` of `center`.
    ///
    /// Parameters:
    /// - `rng`: The random number generator to draw from.
    /// - `checker`: The validity checker the sample must pass.
    /// - `center`: The state to sample near.
    /// - `distance`: The maximum per-axis offset from `center`.
    ///
    /// Returns:
    /// A valid state near `center`, or None if none was found.
    fn sample_near(
        &mut self,
        rng: &mut StdRng,
        checker: &dyn ValidityChecker<F, N>,
        center: &RealVectorState<F, N>,
        distance: F,
    ) -> Option<RealVectorState<F, N>>;
}

/// A valid state sampler that draws uniformly from the axis-aligned box of
/// half-width `distance` around the center, clipped to the space bounds, and
/// rejects invalid states up to a fixed number of attempts.
pub struct UniformValidStateSampler<F: Float, const N: usize> {
    bounds: RealVectorBounds<F, N>,
    attempts: u32,
}

impl<F: Float, const N: usize> UniformValidStateSampler<F, N> {
    pub const DEFAULT_ATTEMPTS: u32 = 100;

    /// Constructs a new sampler over the given space bounds.
    pub fn new(bounds: RealVectorBounds<F, N>) -> Self {
        Self {
            bounds,
            attempts: Self::DEFAULT_ATTEMPTS,
        }
    }

    /// Sets the number of rejection-sampling attempts per query.
    pub fn set_attempts(&mut self, attempts: u32) {
        assert!(attempts > 0, "The number of attempts must be positive.");
        self.attempts = attempts;
    }
}

impl<F: Float + SampleUniform, const N: usize> ValidStateSampler<F, N>
    for UniformValidStateSampler<F, N>
{
    fn sample_near(
        &mut self,
        rng: &mut StdRng,
        checker: &dyn ValidityChecker<F, N>,
        center: &RealVectorState<F, N>,
        distance: F,
    ) -> Option<RealVectorState<F, N>> {
        let spread = RealVectorState::new([distance; N]);
        for i in 0..N {
            // The neighborhood lies entirely outside the bounds.
            if center[i] - distance > self.bounds.upper()[i]
                || center[i] + distance < self.bounds.lower()[i]
            {
                return None;
            }
        }
        let low = self.bounds.clamp(&(*center - spread));
        let high = self.bounds.clamp(&(*center + spread));

        for _ in 0..self.attempts {
            let mut values = [F::zero(); N];
            for (i, value) in values.iter_mut().enumerate() {
                *value = if low[i] < high[i] {
                    rng.gen_range(low[i]..=high[i])
                } else {
                    low[i]
                };
            }
            let state = RealVectorState::new(values);
            if checker.is_state_valid(&state) {
                return Some(state);
            }
        }
        None
    }
}
