use crate::est::neighbors::NearestNeighbors;
use crate::est::pdf::Pdf;
use crate::est::state::RealVectorState;
use num_traits::Float;

/// A motion in a search tree: one sampled state plus its lineage link.
pub struct Motion<F: Float, const N: usize> {
    /// The state in N-dimensional space.
    state: RealVectorState<F, N>,
    /// The arena index of the parent motion (None if the motion is a root).
    parent: Option<usize>,
    /// The arena index of the root motion this lineage originated from.
    root: usize,
    /// The handle of this motion's weight entry in the owning tree's PDF.
    element: usize,
}

impl<F: Float, const N: usize> Motion<F, N> {
    pub fn state(&self) -> &RealVectorState<F, N> {
        &self.state
    }

    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    pub fn root(&self) -> usize {
        self.root
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// One search tree of the bidirectional planner: an arena of motions, the
/// selection PDF over them, and a nearest neighbor index of their states.
/// The three substructures always hold exactly the same motions; the tree is
/// only ever cleared as a whole.
pub struct TreeData<F: Float, const N: usize, NN: NearestNeighbors<F, N>> {
    motions: Vec<Motion<F, N>>,
    pdf: Pdf<usize>,
    nearest_neighbors: NN,
}

impl<F: Float, const N: usize, NN: NearestNeighbors<F, N>> TreeData<F, N, NN> {
    pub fn new() -> Self {
        Self {
            motions: Vec::new(),
            pdf: Pdf::new(),
            nearest_neighbors: NN::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.motions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.motions.is_empty()
    }

    pub fn motion(&self, index: usize) -> &Motion<F, N> {
        &self.motions[index]
    }

    pub fn motions(&self) -> &[Motion<F, N>] {
        &self.motions
    }

    /// Returns the current PDF weight of a motion.
    pub fn weight(&self, index: usize) -> f64 {
        self.pdf.weight(self.motions[index].element)
    }

    /// Returns the indices of all motions within `radius` of a state.
    pub fn neighbors_within(&self, state: &RealVectorState<F, N>, radius: F) -> Vec<usize> {
        self.nearest_neighbors.within_radius(state, radius)
    }

    /// Returns the indices of all motions within `radius` of a state, sorted
    /// nearest-first.
    pub fn neighbors_within_sorted(&self, state: &RealVectorState<F, N>, radius: F) -> Vec<usize> {
        self.nearest_neighbors.within_radius_sorted(state, radius)
    }

    /// Draws one motion index from the PDF using a single uniform value.
    /// Must not be called while the tree is empty.
    pub fn select(&self, u: f64) -> usize {
        *self.pdf.sample(u)
    }

    /// Inserts a motion into the tree.
    ///
    /// Every supplied neighbor's selection weight w is updated to w / (w + 1),
    /// down-weighting motions as their local neighborhood gets denser. The new
    /// motion enters the PDF with weight 1 / (|neighbors| + 1), counting itself
    /// as part of the neighborhood.
    ///
    /// Parameters:
    /// - `state`: The state of the new motion.
    /// - `parent`: The arena index of the parent motion (None for roots).
    /// - `neighbors`: The motions within the neighborhood radius of `state`,
    ///   as previously returned by `neighbors_within`.
    ///
    /// Returns:
    /// The arena index of the new motion.
    pub fn add_motion(
        &mut self,
        state: RealVectorState<F, N>,
        parent: Option<usize>,
        neighbors: &[usize],
    ) -> usize {
        for &neighbor in neighbors {
            let element = self.motions[neighbor].element;
            let weight = self.pdf.weight(element);
            self.pdf.update(element, weight / (weight + 1.0));
        }

        let index = self.motions.len();
        let element = self.pdf.add(index, 1.0 / (neighbors.len() as f64 + 1.0));
        // A root motion is its own lineage root.
        let root = match parent {
            Some(parent_index) => self.motions[parent_index].root,
            None => index,
        };
        self.motions.push(Motion {
            state,
            parent,
            root,
            element,
        });
        self.nearest_neighbors.add(&state, index);
        index
    }

    /// Removes every motion and resets all three substructures atomically.
    pub fn clear(&mut self) {
        self.motions.clear();
        self.pdf.clear();
        self.nearest_neighbors = NN::new();
    }
}

impl<F: Float, const N: usize, NN: NearestNeighbors<F, N>> Default for TreeData<F, N, NN> {
    fn default() -> Self {
        Self::new()
    }
}
