use crate::est::state::RealVectorState;
use kiddo::float::{distance::SquaredEuclidean, kdtree::Axis, kdtree::KdTree};
use num_traits::Float;

/// A nearest neighbor data structure supporting radius queries.
/// Stores RealVectorStates and a usize item (tree arena index) along with them.
pub trait NearestNeighbors<F: Float, const N: usize> {
    /// Constructs a new, empty nearest neighbor data structure.
    fn new() -> Self;

    /// Adds a state to the data structure.
    ///
    /// Parameters:
    /// - `state`: The RealVectorState to add.
    /// - `item`: The index associated with the RealVectorState.
    fn add(&mut self, state: &RealVectorState<F, N>, item: usize);

    /// Gets all items within a given radius of the given RealVectorState, in
    /// no particular order.
    fn within_radius(&self, state: &RealVectorState<F, N>, radius: F) -> Vec<usize>;

    /// Gets all items within a given radius of the given RealVectorState,
    /// sorted nearest-first.
    fn within_radius_sorted(&self, state: &RealVectorState<F, N>, radius: F) -> Vec<usize>;
}

/// A nearest neighbor data structure that uses a linear scan.
/// This is useful for small datasets.
pub struct LinearNearestNeighbors<F: Float, const N: usize> {
    states: Vec<(RealVectorState<F, N>, usize)>,
}

impl<F: Float, const N: usize> NearestNeighbors<F, N> for LinearNearestNeighbors<F, N> {
    fn new() -> Self {
        Self { states: Vec::new() }
    }

    fn add(&mut self, state: &RealVectorState<F, N>, item: usize) {
        self.states.push((*state, item));
    }

    fn within_radius(&self, state: &RealVectorState<F, N>, radius: F) -> Vec<usize> {
        self.states
            .iter()
            .filter(|(p, _)| state.euclidean_distance_squared(p) <= radius * radius)
            .map(|(_, i)| *i)
            .collect()
    }

    fn within_radius_sorted(&self, state: &RealVectorState<F, N>, radius: F) -> Vec<usize> {
        let mut within: Vec<(F, usize)> = self
            .states
            .iter()
            .filter(|(p, _)| state.euclidean_distance_squared(p) <= radius * radius)
            .map(|(p, i)| (state.euclidean_distance_squared(p), *i))
            .collect();
        within.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
        within.into_iter().map(|(_, i)| i).collect()
    }
}

/// A nearest neighbor data structure backed by a kd-tree.
pub struct KdTreeNearestNeighbors<F: Float + Axis, const N: usize> {
    kdtree: KdTree<F, usize, N, 32, u32>,
}

impl<F: Float + Axis, const N: usize> NearestNeighbors<F, N> for KdTreeNearestNeighbors<F, N> {
    fn new() -> Self {
        Self {
            kdtree: KdTree::new(),
        }
    }

    fn add(&mut self, state: &RealVectorState<F, N>, item: usize) {
        self.kdtree.add(state.values(), item);
    }

    fn within_radius(&self, state: &RealVectorState<F, N>, radius: F) -> Vec<usize> {
        self.kdtree
            .within_unsorted::<SquaredEuclidean>(state.values(), radius * radius)
            .iter()
            .map(|n| n.item)
            .collect()
    }

    fn within_radius_sorted(&self, state: &RealVectorState<F, N>, radius: F) -> Vec<usize> {
        self.kdtree
            .within::<SquaredEuclidean>(state.values(), radius * radius)
            .iter()
            .map(|n| n.item)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populate<NN: NearestNeighbors<f64, 2>>() -> NN {
        let mut nn = NN::new();
        nn.add(&RealVectorState::new([0.0, 0.0]), 0);
        nn.add(&RealVectorState::new([1.0, 0.0]), 1);
        nn.add(&RealVectorState::new([0.0, 2.0]), 2);
        nn.add(&RealVectorState::new([5.0, 5.0]), 3);
        nn
    }

    fn check_radius_queries<NN: NearestNeighbors<f64, 2>>(nn: &NN) {
        let query = RealVectorState::new([0.1, 0.0]);

        let mut within = nn.within_radius(&query, 2.5);
        within.sort_unstable();
        assert_eq!(within, vec![0, 1, 2]);

        let sorted = nn.within_radius_sorted(&query, 2.5);
        assert_eq!(sorted, vec![0, 1, 2]);

        assert!(nn.within_radius(&query, 0.05).is_empty());
    }

    #[test]
    fn linear_radius_queries() {
        let nn: LinearNearestNeighbors<f64, 2> = populate();
        check_radius_queries(&nn);
    }

    #[test]
    fn kdtree_radius_queries() {
        let nn: KdTreeNearestNeighbors<f64, 2> = populate();
        check_radius_queries(&nn);
    }
}
