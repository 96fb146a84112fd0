use crate::est::state::RealVectorState;
use num_traits::Float;

/// Checks if a state or edge is valid (i.e., not in collision).
pub trait ValidityChecker<F: Float, const N: usize> {
    /// Checks if a state is valid (i.e., does not collide with obstacles).
    ///
    /// Parameters:
    /// - `state`: The state to check.
    ///
    /// Returns:
    /// Whether the state is valid.
    fn is_state_valid(&self, state: &RealVectorState<F, N>) -> bool;

    /// Checks if the local motion between two states is valid (i.e., does not
    /// collide with obstacles).
    ///
    /// Parameters:
    /// - `a`: The start point of the edge.
    /// - `b`: The end point of the edge.
    ///
    /// Returns:
    /// Whether the edge is valid.
    fn is_edge_valid(&self, a: &RealVectorState<F, N>, b: &RealVectorState<F, N>) -> bool;
}

/// A simple validity checker that always returns true (i.e., all points and edges are valid).
pub struct AlwaysValid<F: Float, const N: usize> {
    _phantom: std::marker::PhantomData<F>,
}

impl<F: Float, const N: usize> AlwaysValid<F, N> {
    /// Constructs a new AlwaysValid.
    pub fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<F: Float, const N: usize> Default for AlwaysValid<F, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float, const N: usize> ValidityChecker<F, N> for AlwaysValid<F, N> {
    fn is_state_valid(&self, _state: &RealVectorState<F, N>) -> bool {
        true
    }

    fn is_edge_valid(&self, _a: &RealVectorState<F, N>, _b: &RealVectorState<F, N>) -> bool {
        true
    }
}
