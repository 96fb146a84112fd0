/// A probability density function over a dynamic set of weighted items.
///
/// Items are stored in insertion order and addressed by a stable handle
/// returned from `add`. Above the item weights sits an implicit binary tree
/// of cached subtree sums, so adding an item, updating a weight, and drawing
/// a weighted sample are all logarithmic in the number of items.
pub struct Pdf<T> {
    /// The items, in insertion order. A handle is an index into this vector.
    data: Vec<T>,
    /// `levels[0]` holds the item weights; `levels[k][i]` caches the sum of
    /// its two children in `levels[k - 1]`. The top level has one entry.
    levels: Vec<Vec<f64>>,
}

impl<T> Pdf<T> {
    /// Constructs an empty PDF.
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            levels: vec![Vec::new()],
        }
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the PDF contains no items.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the sum of all item weights.
    pub fn total_weight(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.levels[self.levels.len() - 1][0]
        }
    }

    /// Adds an item with the given weight and returns its handle.
    ///
    /// The handle stays valid across further insertions and is invalidated
    /// only by `clear`.
    pub fn add(&mut self, item: T, weight: f64) -> usize {
        debug_assert!(weight > 0.0, "PDF weights must be strictly positive.");
        let handle = self.data.len();
        self.data.push(item);
        self.levels[0].push(weight);
        self.propagate(handle);
        handle
    }

    /// Returns the current weight of the item behind a handle.
    pub fn weight(&self, handle: usize) -> f64 {
        self.levels[0][handle]
    }

    /// Changes the weight of the item behind a handle.
    pub fn update(&mut self, handle: usize, weight: f64) {
        debug_assert!(weight > 0.0, "PDF weights must be strictly positive.");
        self.levels[0][handle] = weight;
        self.propagate(handle);
    }

    /// Draws an item with probability proportional to its weight.
    ///
    /// `u` must be a uniform draw from `[0, 1)`; exactly this one draw decides
    /// the outcome. Must not be called while the PDF is empty.
    pub fn sample(&self, u: f64) -> &T {
        assert!(!self.is_empty(), "Cannot sample from an empty PDF.");
        debug_assert!((0.0..1.0).contains(&u));

        let mut target = u * self.total_weight();
        let mut index = 0;
        // Walk from the top level down to the item weights, descending into
        // the left child while the target falls inside its cached sum.
        for level in (0..self.levels.len() - 1).rev() {
            index *= 2;
            let left = self.levels[level][index];
            if target >= left && index + 1 < self.levels[level].len() {
                target -= left;
                index += 1;
            }
        }
        &self.data[index]
    }

    /// Removes all items and invalidates every handle.
    pub fn clear(&mut self) {
        self.data.clear();
        self.levels.clear();
        self.levels.push(Vec::new());
    }

    /// Repairs the cached sums on the path from a leaf to the top level.
    fn propagate(&mut self, mut index: usize) {
        let mut level = 0;
        while self.levels[level].len() > 1 {
            if level + 1 == self.levels.len() {
                self.levels.push(Vec::new());
            }
            let parent = index / 2;
            let left = self.levels[level][2 * parent];
            let right = self.levels[level]
                .get(2 * parent + 1)
                .copied()
                .unwrap_or(0.0);
            if parent == self.levels[level + 1].len() {
                self.levels[level + 1].push(left + right);
            } else {
                self.levels[level + 1][parent] = left + right;
            }
            index = parent;
            level += 1;
        }
    }
}

impl<T> Default for Pdf<T> {
    fn default() -> Self {
        Self::new()
    }
}
