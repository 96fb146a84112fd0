use crate::est::state::RealVectorState;
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// One directed edge of a flattened planner tree.
/// Edges point outward from the frontier: parent to child in the start tree,
/// child to parent in the goal tree.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlannerDataEdge<F: Float, const N: usize> {
    pub from: RealVectorState<F, N>,
    pub to: RealVectorState<F, N>,
}

/// A flattened report of both planner trees for external inspection.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlannerData<F: Float, const N: usize> {
    /// The root states of the start tree.
    pub start_vertices: Vec<RealVectorState<F, N>>,
    /// The root states of the goal tree.
    pub goal_vertices: Vec<RealVectorState<F, N>>,
    /// The edges of both trees.
    pub edges: Vec<PlannerDataEdge<F, N>>,
    /// The edge joining the two trees, if a solution was found.
    pub connection: Option<PlannerDataEdge<F, N>>,
}

impl<F: Float, const N: usize> PlannerData<F, N> {
    pub fn new() -> Self {
        Self {
            start_vertices: Vec::new(),
            goal_vertices: Vec::new(),
            edges: Vec::new(),
            connection: None,
        }
    }
}

impl<F: Float, const N: usize> Default for PlannerData<F, N> {
    fn default() -> Self {
        Self::new()
    }
}
